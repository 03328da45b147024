//! Shared ambient utilities for the registry workspace.

pub mod logging;
