// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Parse command - turn a native Kubernetes object into a resource

use crate::commands::{read_input, to_yaml};
use crate::error::Result;
use crate::kubernetes::parse_kubernetes_object;
use std::path::Path;

/// Parse the object in `path` and render the resource as YAML
pub fn run_parse(path: &Path) -> Result<String> {
    let object = read_input(path)?;
    let resource = parse_kubernetes_object(&object)?;
    to_yaml(&resource)
}
