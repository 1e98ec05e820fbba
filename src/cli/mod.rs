//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod prompt;

pub use commands::{Cli, Commands};
pub use output::{format_config_list, format_entry_list};
pub use prompt::{Console, InterruptibleStdin, Line, LineInput};
