//! Core functionality for settings, vault access, and task list generation

pub mod config;
pub mod tasklist;
pub mod vault;
