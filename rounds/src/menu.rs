//! Main menu: command table and the dispatch loop.

use anyhow::Result;
use tracing::{debug, info};

use crate::app::App;
use crate::handlers;
use crate::io::console::Console;
use crate::prompt::{get_numeric_menu_input, wait};
use crate::render::MenuEntry;

/// A main-menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    GetPeople,
    GetDrinks,
    AddPerson,
    AddDrink,
    SetFavourite,
    ViewFavourites,
    StartRound,
    Exit,
}

/// Commands in the order they are listed.
pub const COMMANDS: [Command; 8] = [
    Command::GetPeople,
    Command::GetDrinks,
    Command::AddPerson,
    Command::AddDrink,
    Command::SetFavourite,
    Command::ViewFavourites,
    Command::StartRound,
    Command::Exit,
];

impl Command {
    /// The number the operator types to pick this command.
    pub fn option(self) -> u32 {
        match self {
            Command::GetPeople => 1,
            Command::GetDrinks => 2,
            Command::AddPerson => 3,
            Command::AddDrink => 4,
            Command::SetFavourite => 5,
            Command::ViewFavourites => 6,
            Command::StartRound => 7,
            Command::Exit => 8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Command::GetPeople => "Get all people",
            Command::GetDrinks => "Get all drinks",
            Command::AddPerson => "Add a person",
            Command::AddDrink => "Add a drink",
            Command::SetFavourite => "Set a favourite drink",
            Command::ViewFavourites => "View favourites",
            Command::StartRound => "Start a round",
            Command::Exit => "Exit",
        }
    }

    pub fn from_option(option: i64) -> Option<Self> {
        match option {
            1 => Some(Command::GetPeople),
            2 => Some(Command::GetDrinks),
            3 => Some(Command::AddPerson),
            4 => Some(Command::AddDrink),
            5 => Some(Command::SetFavourite),
            6 => Some(Command::ViewFavourites),
            7 => Some(Command::StartRound),
            8 => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Menu lines for every command, in listing order.
pub fn menu_entries() -> Vec<MenuEntry> {
    COMMANDS
        .iter()
        .map(|command| MenuEntry {
            option: command.option(),
            label: command.label(),
        })
        .collect()
}

/// Show the main menu and dispatch commands until the operator exits.
///
/// Returns after the exit handler has saved all collections.
pub fn run_menu<C: Console>(app: &mut App<C>) -> Result<()> {
    let menu_text = app.renderer.menu(&app.config.app_name, &menu_entries())?;

    loop {
        app.console.clear();
        app.console.say(&menu_text);

        let Some(option) = get_numeric_menu_input(&mut app.console, "Enter your selection:")?
        else {
            wait(&mut app.console)?;
            continue;
        };

        let Some(command) = Command::from_option(option) else {
            debug!(option, "unknown menu option");
            app.console
                .say(&format!("\n\"{}\" is not an option that I recognise", option));
            wait(&mut app.console)?;
            continue;
        };

        info!(?command, "dispatching");
        match command {
            Command::GetPeople => handlers::get_people(app)?,
            Command::GetDrinks => handlers::get_drinks(app)?,
            Command::AddPerson => handlers::add_person(app)?,
            Command::AddDrink => handlers::add_drink(app)?,
            Command::SetFavourite => handlers::set_favourite(app)?,
            Command::ViewFavourites => handlers::view_favourites(app)?,
            Command::StartRound => handlers::start_round(app)?,
            Command::Exit => return handlers::exit(app),
        }
        wait(&mut app.console)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedConsole, TestData};

    #[test]
    fn options_round_trip_through_lookup() {
        for command in COMMANDS {
            assert_eq!(Command::from_option(i64::from(command.option())), Some(command));
        }
        assert_eq!(Command::from_option(0), None);
        assert_eq!(Command::from_option(9), None);
    }

    #[test]
    fn options_are_numbered_from_one_in_order() {
        let options: Vec<u32> = menu_entries().iter().map(|e| e.option).collect();
        assert_eq!(options, (1..=8).collect::<Vec<u32>>());
    }

    #[test]
    fn unknown_and_non_numeric_options_loop_back() {
        let data = TestData::new().expect("data");
        let console = ScriptedConsole::new(["42", "", "nope", "", "8"]);
        let mut app = App::open(data.config(), console).expect("open");

        run_menu(&mut app).expect("menu");

        let output = app.console.output();
        assert!(output.contains("\"42\" is not an option that I recognise"));
        assert!(output.contains("\"nope\" is not a number"));
        assert!(output.contains("Thank you for using BrewRounds"));
        assert_eq!(app.console.remaining(), 0);
    }

    #[test]
    fn exit_persists_all_collections() {
        let data = TestData::new().expect("data");
        let console = ScriptedConsole::new([
            "3", "Alice Smith", "", // add person
            "4", "Tea", "", // add drink
            "4", "Tea", "", // duplicate drink
            "5", "0", "0", "", // favourite
            "8",
        ]);
        let mut app = App::open(data.config(), console).expect("open");

        run_menu(&mut app).expect("menu");

        assert_eq!(data.read(&data.paths.people_path).expect("people"), vec!["Alice Smith"]);
        assert_eq!(data.read(&data.paths.drinks_path).expect("drinks"), vec!["Tea"]);
        assert_eq!(
            data.read(&data.paths.favourites_path).expect("favourites"),
            vec!["Alice Smith:Tea"]
        );
        assert!(app.console.output().contains("Tea is already on the list"));
    }

    #[test]
    fn menu_is_cleared_before_each_prompt() {
        let data = TestData::new().expect("data");
        let console = ScriptedConsole::new(["1", "", "8"]);
        let mut app = App::open(data.config(), console).expect("open");

        run_menu(&mut app).expect("menu");
        assert_eq!(app.console.clears(), 2);
    }

    #[test]
    fn closed_input_ends_menu_with_error() {
        let data = TestData::new().expect("data");
        let console = ScriptedConsole::new(["1"]);
        let mut app = App::open(data.config(), console).expect("open");

        assert!(run_menu(&mut app).is_err());
    }
}
