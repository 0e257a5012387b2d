//! Stateless input validators and a small calculator.
//!
//! Every validator returns a [`validation::Verdict`]; only the calculator
//! signals failures through `Result`.

pub mod calculator;
pub mod config;
pub mod validation;
