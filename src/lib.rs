//! GoalSight: Premier League match-outcome prediction client.
//!
//! The library holds all the logic; the binary in `main.rs` is a thin
//! ratatui front-end over it.

pub mod catalog;
pub mod data;
pub mod error;
pub mod features;
pub mod model;
pub mod predict;
pub mod schedule;
pub mod stats;
