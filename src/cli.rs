//! CLI domain: parse, route, output, and presentation only.
//! Tree logic stays in the library; a single route table dispatches to it.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::{map_error, EXIT_DIFFERENT, EXIT_FAILURE, EXIT_SUCCESS};
pub use parse::{Cli, Commands};
pub use presentation::{format_diff, format_levels, format_root, format_show};
pub use route::{CommandOutput, RunContext};
