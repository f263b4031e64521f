//! Library components of the `sail` command-line tool.

pub mod logging;
pub mod pipeline;
