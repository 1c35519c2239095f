//! Text templates for the welcome menu and round orders.

use anyhow::Result;
use minijinja::{Environment, context};
use serde::Serialize;

use crate::core::round::Round;

const MENU_TEMPLATE: &str = include_str!("templates/menu.txt");
const ORDER_TEMPLATE: &str = include_str!("templates/order.txt");

/// One numbered line of the main menu.
#[derive(Debug, Clone, Serialize)]
pub struct MenuEntry {
    pub option: u32,
    pub label: &'static str,
}

/// Template engine wrapper around minijinja.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("menu", MENU_TEMPLATE)?;
        env.add_template("order", ORDER_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn menu(&self, app_name: &str, entries: &[MenuEntry]) -> Result<String> {
        let template = self.env.get_template("menu")?;
        let rendered = template.render(context! {
            app_name => app_name,
            version => env!("CARGO_PKG_VERSION"),
            entries => entries,
        })?;
        Ok(rendered)
    }

    /// The round's assignments in the order they were added.
    pub fn round_order(&self, round: &Round) -> Result<String> {
        let template = self.env.get_template("order")?;
        let rendered = template.render(context! {
            owner => round.owner.full_name(),
            assignments => &round.assignments,
        })?;
        Ok(rendered)
    }
}
