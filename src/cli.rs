// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "helmctl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Deploy packages to Kubernetes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a series of checks for necessary prerequisites
    Doctor {
        /// Namespace the server-side components are installed into
        #[arg(short, long)]
        namespace: Option<String>,
    },

    /// Parse a native Kubernetes object into a resource
    Parse {
        /// YAML file holding a single object, or - for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Qualify the types of Kubernetes resources in a configuration
    Convert {
        /// YAML configuration file, or - for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    /// Default log level when RUST_LOG is unset
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
