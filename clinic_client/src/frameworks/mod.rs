// Frameworks layer: configuration, logging and the command-line entry point.

pub mod app;
pub mod cli;
pub mod config;
