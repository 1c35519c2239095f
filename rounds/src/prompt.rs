//! Numbered-menu prompts on top of a [`Console`].
//!
//! None of these retry: an invalid answer comes back as `None` and the caller
//! decides whether to ask again or give up.

use anyhow::Result;
use tracing::debug;

use crate::core::person::Person;
use crate::core::selection::{parse_number, parse_selection};
use crate::io::console::Console;

/// Message shown by callers that re-prompt after an invalid selection.
pub const CHOOSE_FROM_MENU: &str = "Please choose a number from the menu";

const SELECTION_PROMPT: &str = "Enter your selection:";
const YES_NO: [&str; 2] = ["Yes", "No"];

/// Show `options` numbered from 0 and read a choice.
///
/// Returns the chosen index, or `None` for non-numeric or out-of-range input.
pub fn select_from_menu<C, S>(console: &mut C, title: &str, options: &[S]) -> Result<Option<usize>>
where
    C: Console + ?Sized,
    S: AsRef<str>,
{
    console.say(title);
    for (i, option) in options.iter().enumerate() {
        console.say(&format!("[{}] {}", i, option.as_ref()));
    }
    let input = console.read_line(SELECTION_PROMPT)?;
    match parse_selection(&input, options.len()) {
        Ok(index) => Ok(Some(index)),
        Err(err) => {
            debug!(%err, "invalid menu selection");
            console.say(&format!("\n{}", err));
            Ok(None)
        }
    }
}

/// Read a number for top-level dispatch. No range check is applied.
pub fn get_numeric_menu_input<C>(console: &mut C, prompt: &str) -> Result<Option<i64>>
where
    C: Console + ?Sized,
{
    let input = console.read_line(prompt)?;
    match parse_number(&input) {
        Ok(number) => Ok(Some(number)),
        Err(err) => {
            debug!(%err, "invalid numeric input");
            console.say(&format!("\n{}", err));
            Ok(None)
        }
    }
}

/// Choose a person by full name.
pub fn select_person<C>(console: &mut C, people: &[Person], title: &str) -> Result<Option<Person>>
where
    C: Console + ?Sized,
{
    let names: Vec<String> = people.iter().map(Person::full_name).collect();
    let index = select_from_menu(console, title, &names)?;
    Ok(index.map(|i| people[i].clone()))
}

/// Ask a yes/no question. `None` means the answer was not understood.
pub fn ask_yes_no<C>(console: &mut C, title: &str) -> Result<Option<bool>>
where
    C: Console + ?Sized,
{
    let index = select_from_menu(console, title, &YES_NO)?;
    Ok(index.map(|i| YES_NO[i] == "Yes"))
}

/// Block until the operator presses enter.
pub fn wait<C>(console: &mut C) -> Result<()>
where
    C: Console + ?Sized,
{
    console.read_line("\nPress enter to return to the main menu")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedConsole;

    #[test]
    fn select_returns_index_of_chosen_option() {
        let options = ["Tea", "Coffee"];
        let mut console = ScriptedConsole::new(["1"]);

        let index = select_from_menu(&mut console, "Drinks", &options).expect("select");
        assert_eq!(index, Some(1));
        assert!(console.output().contains("[0] Tea\n[1] Coffee"));
    }

    #[test]
    fn select_rejects_out_of_range_and_text() {
        let options = ["Tea", "Coffee"];
        let mut console = ScriptedConsole::new(["2", "tea", "-1"]);

        for _ in 0..3 {
            let index = select_from_menu(&mut console, "Drinks", &options).expect("select");
            assert_eq!(index, None);
        }
        assert!(console.output().contains("2 is not an option"));
        assert!(console.output().contains("\"tea\" is not a number"));
    }

    #[test]
    fn select_from_empty_menu_is_always_invalid() {
        let options: [&str; 0] = [];
        let mut console = ScriptedConsole::new(["0"]);
        assert_eq!(
            select_from_menu(&mut console, "Nothing", &options).expect("select"),
            None
        );
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        assert!(select_from_menu(&mut console, "Drinks", &["Tea"]).is_err());
    }

    #[test]
    fn numeric_input_is_not_range_checked() {
        let mut console = ScriptedConsole::new(["42", "x"]);
        assert_eq!(
            get_numeric_menu_input(&mut console, ">").expect("read"),
            Some(42)
        );
        assert_eq!(get_numeric_menu_input(&mut console, ">").expect("read"), None);
    }

    #[test]
    fn select_person_returns_clone() {
        let people = vec![
            Person::new(1, "Alice", None),
            Person::new(2, "Bob", Some("Stone".to_string())),
        ];
        let mut console = ScriptedConsole::new(["1"]);

        let person = select_person(&mut console, &people, "Who?").expect("select");
        assert_eq!(person, Some(people[1].clone()));
        assert!(console.output().contains("[1] Bob Stone"));
    }

    #[test]
    fn yes_no_maps_answers() {
        let mut console = ScriptedConsole::new(["0", "1", "7"]);
        assert_eq!(ask_yes_no(&mut console, "More?").expect("ask"), Some(true));
        assert_eq!(ask_yes_no(&mut console, "More?").expect("ask"), Some(false));
        assert_eq!(ask_yes_no(&mut console, "More?").expect("ask"), None);
    }
}
