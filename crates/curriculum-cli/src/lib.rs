//! Library components of the `check-mappings` command.

pub mod logging;
