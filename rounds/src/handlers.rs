//! One handler per main-menu command.

use anyhow::Result;
use tracing::info;

use crate::app::App;
use crate::core::table::render_table;
use crate::io::console::Console;
use crate::io::data_store::Collection;
use crate::prompt::{CHOOSE_FROM_MENU, select_from_menu, select_person};
use crate::round_builder::build_round;

pub fn get_people<C: Console>(app: &mut App<C>) -> Result<()> {
    let names = app.state.people_names();
    app.console.say(&render_table("People", &names));
    Ok(())
}

pub fn get_drinks<C: Console>(app: &mut App<C>) -> Result<()> {
    app.console
        .say(&render_table("Drinks", app.state.drinks.as_slice()));
    Ok(())
}

pub fn add_person<C: Console>(app: &mut App<C>) -> Result<()> {
    let name = app.console.read_line("What is the name of the person?")?;
    let person = match app.state.add_person(&name) {
        Ok(person) => person,
        Err(err) => {
            app.console.say(&format!("Cannot add person: {}", err));
            return Ok(());
        }
    };
    let message = format!("Added {} (id {})", person.full_name(), person.id);
    info!(id = person.id, "person added");
    app.console.say(&message);
    app.changed(Collection::People)
}

pub fn add_drink<C: Console>(app: &mut App<C>) -> Result<()> {
    let name = app.console.read_line("What is the name of the drink?")?;
    let name = name.trim();
    if name.is_empty() {
        app.console.say("A drink name is required");
        return Ok(());
    }
    if !app.state.add_drink(name) {
        app.console.say(&format!("{} is already on the list", name));
        return Ok(());
    }
    info!(drink = name, "drink added");
    app.changed(Collection::Drinks)
}

/// Invalid selections here return straight to the main menu.
pub fn set_favourite<C: Console>(app: &mut App<C>) -> Result<()> {
    if app.state.people.is_empty() || app.state.drinks.is_empty() {
        app.console
            .say("Add at least one person and one drink first");
        return Ok(());
    }
    let Some(person) = select_person(&mut app.console, &app.state.people, "Choose a person")? else {
        app.console.say(CHOOSE_FROM_MENU);
        return Ok(());
    };
    let name = person.full_name();
    let title = format!("Choose a drink for {}", name);
    let Some(index) = select_from_menu(&mut app.console, &title, app.state.drinks.as_slice())?
    else {
        app.console.say(CHOOSE_FROM_MENU);
        return Ok(());
    };
    let drink = app.state.drinks.as_slice()[index].clone();

    app.state.set_favourite(&person, &drink);
    app.console.say(&format!(
        "\nThank you - {}'s favourite drink is now {}",
        name, drink
    ));
    app.changed(Collection::Favourites)
}

pub fn view_favourites<C: Console>(app: &mut App<C>) -> Result<()> {
    let lines = app.state.favourites.display_lines();
    app.console.say(&render_table("Favourites", &lines));
    Ok(())
}

/// Unlike the other handlers, choosing the owner re-prompts until valid.
pub fn start_round<C: Console>(app: &mut App<C>) -> Result<()> {
    if app.state.people.is_empty() || app.state.drinks.is_empty() {
        app.console
            .say("Add at least one person and one drink before starting a round");
        return Ok(());
    }
    let owner = loop {
        match select_person(&mut app.console, &app.state.people, "Whose round is this?")? {
            Some(owner) => break owner,
            None => app.console.say(CHOOSE_FROM_MENU),
        }
    };
    let owner_name = owner.full_name();

    let round = build_round(&mut app.console, &app.state, &app.renderer, owner)?;
    info!(owner = %owner_name, drinks = round.assignments.len(), "round complete");

    app.console.clear();
    app.console.say(&format!(
        "Time for you to make some drinks {}\n",
        owner_name
    ));
    let order = app.renderer.round_order(&round)?;
    app.console.say(&order);
    Ok(())
}

pub fn exit<C: Console>(app: &mut App<C>) -> Result<()> {
    app.console.say("Saving data...");
    app.save()?;
    let farewell = format!("Thank you for using {}", app.config.app_name);
    app.console.say(&farewell);
    Ok(())
}
