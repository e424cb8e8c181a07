//! # medicos-cli
//!
//! Command-line front end for the medicos roster.
//!
//! Argument parsing lives in [`args`]; [`commands::run`] executes a parsed
//! command against a [`MedicosStore`](medicos_store::MedicosStore) and returns
//! the text to print, so the binary stays a thin shell around it.

#![warn(missing_docs)]

pub mod args;
pub mod commands;

pub use args::{Cli, Command, ProfessionalArgs};
pub use commands::run;
