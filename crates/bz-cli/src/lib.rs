//! CLI library components for the glucose report tool.

pub mod logging;
