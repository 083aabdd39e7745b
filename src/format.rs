// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! User-facing status messages

use colored::Colorize;

/// Print a success message to stdout
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print a warning to stderr
pub fn warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}
