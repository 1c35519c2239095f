//! Interactive round building.
//!
//! Each pass picks a person, picks a drink (or their usual), records the
//! assignment, then asks whether to carry on. Invalid answers at any step
//! re-prompt that step; closed input ends the round with an error.

use anyhow::{Result, bail};
use tracing::debug;

use crate::core::person::Person;
use crate::core::round::{DrinkChoice, Round, drink_choices};
use crate::io::console::Console;
use crate::prompt::{CHOOSE_FROM_MENU, ask_yes_no, select_from_menu, select_person};
use crate::render::Renderer;
use crate::state::AppState;

/// Build a round owned by `owner` from operator input.
///
/// The usual option is resolved to the stored favourite before the
/// assignment is recorded, so a finished round only holds real drink names.
pub fn build_round<C>(
    console: &mut C,
    state: &AppState,
    renderer: &Renderer,
    owner: Person,
) -> Result<Round>
where
    C: Console + ?Sized,
{
    if state.people.is_empty() {
        bail!("cannot build a round without any people");
    }
    if state.drinks.is_empty() {
        bail!("cannot build a round without any drinks");
    }

    let mut round = Round::new(owner);
    loop {
        console.clear();
        console.say(&renderer.round_order(&round)?);

        let person = loop {
            match select_person(console, &state.people, "\nWhose drink would you like to set?")? {
                Some(person) => break person,
                None => console.say(CHOOSE_FROM_MENU),
            }
        };
        let name = person.full_name();

        let choices = drink_choices(&state.drinks, &state.favourites, &name);
        let labels: Vec<&str> = choices.iter().map(DrinkChoice::label).collect();
        let title = format!("Please choose a drink for {}", name);
        let choice = loop {
            match select_from_menu(console, &title, &labels)? {
                Some(index) => break &choices[index],
                None => console.say(CHOOSE_FROM_MENU),
            }
        };

        let drink = choice.resolve();
        debug!(person = %name, drink, usual = matches!(choice, DrinkChoice::Usual(_)), "assignment");
        round.add(name, drink);
        console.clear();

        loop {
            console.say(&renderer.round_order(&round)?);
            match ask_yes_no(console, "\nDo you want to add another drink?")? {
                Some(true) => break,
                Some(false) => return Ok(round),
                None => console.say(CHOOSE_FROM_MENU),
            }
        }
    }
}
