//! Configuration module
//!
//! Loads a form's rule strings from a TOML file. Custom validators are code,
//! not configuration, and are attached afterwards with `Dataval::add`.

mod config;

pub use config::Config;
