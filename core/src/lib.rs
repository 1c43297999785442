//! Balance verification harness for the Chez Julien cheese shop game.
//!
//! Mirrors the game's monthly financial and stress formulas, runs them
//! under several play styles, and judges the trajectories against the
//! balance reference.

pub mod check;
pub mod config;
pub mod content;
pub mod error;
pub mod financials;
pub mod reference;
pub mod report;
pub mod scenarios;
pub mod simulator;
pub mod state;
pub mod stress;
pub mod suite;
pub mod types;
