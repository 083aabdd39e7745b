// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Subcommand implementations.

pub mod convert;
pub mod doctor;
pub mod parse;

pub use convert::run_convert;
pub use doctor::run_doctor;
pub use parse::run_parse;

use crate::error::{HelmctlError, Result};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read a file, or stdin when the path is `-`
fn read_input(path: &Path) -> Result<Vec<u8>> {
    let io_error = |source: io::Error| HelmctlError::Io {
        path: path.display().to_string(),
        source,
    };

    if path == Path::new("-") {
        let mut content = Vec::new();
        io::stdin().read_to_end(&mut content).map_err(io_error)?;
        Ok(content)
    } else {
        fs::read(path).map_err(io_error)
    }
}

fn to_yaml<T: Serialize>(value: &T) -> Result<String> {
    serde_yaml::to_string(value).map_err(|e| HelmctlError::Serialization(e.to_string()))
}
