// sqlscript-cli/src/lib.rs

pub mod cli;
pub mod config;

pub use cli::OutputFormat;
pub use config::ScriptOptions;
