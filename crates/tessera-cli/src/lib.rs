pub mod cli;
pub mod commands;
pub mod keys;
pub mod logging;
