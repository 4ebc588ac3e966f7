//! CLI command handlers for `StudentPlanner`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod course;
pub mod dashboard;
pub mod event;
pub mod report;
pub mod scale;
pub mod simulate;
pub mod week;

use std::io::{self, Write};

/// Ask a yes/no question on stdin. Anything but `y`/`yes` counts as no.
pub fn confirm(prompt: &str) -> bool {
    print!("{prompt} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let answer = response.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
