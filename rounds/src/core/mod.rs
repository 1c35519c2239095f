//! Deterministic, pure logic for people, drinks, favourites and rounds.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! collections and return deterministic outputs suitable for tests.

pub mod drinks;
pub mod favourites;
pub mod person;
pub mod round;
pub mod selection;
pub mod table;
