// Export modules for testing
#![allow(clippy::literal_string_with_formatting_args)]
pub mod cli;
pub mod color;
pub mod config;
pub mod logging;
pub mod service;

// Integration modules
pub mod integrations;

// Command modules
pub mod commands;

// Domain modules
pub mod domain;
