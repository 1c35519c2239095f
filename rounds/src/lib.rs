//! Terminal menu for tracking people, drinks, favourites and drink rounds.
//!
//! State lives in three line-delimited text files and is held in memory in an
//! [`state::AppState`] while the menu runs:
//!
//! - **[`core`]**: Pure logic (people, drinks, favourites parsing, rounds,
//!   menu selection parsing, tables). No I/O.
//! - **[`io`]**: Files, configuration and the operator console.
//!
//! [`menu`] dispatches commands to [`handlers`]; [`round_builder`] runs the
//! interactive round workflow on top of the [`prompt`] helpers.

pub mod app;
pub mod core;
pub mod exit_codes;
pub mod handlers;
pub mod io;
pub mod logging;
pub mod menu;
pub mod prompt;
pub mod render;
pub mod round_builder;
pub mod state;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
