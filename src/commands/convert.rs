// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Convert command - qualify Kubernetes resource types in a configuration

use crate::commands::{read_input, to_yaml};
use crate::error::{HelmctlError, Result};
use crate::kubernetes::convert_kubernetes_resource_types;
use crate::types::Configuration;
use std::path::Path;
use tracing::debug;

/// Load the configuration in `path`, convert its types and render it as YAML
pub fn run_convert(path: &Path) -> Result<String> {
    let raw = read_input(path)?;
    let mut config: Configuration = serde_yaml::from_slice(&raw)
        .map_err(|e| HelmctlError::InvalidConfiguration(e.to_string()))?;
    debug!("Loaded configuration with {} resources", config.resources.len());

    convert_kubernetes_resource_types(&mut config);
    to_yaml(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CONFIG: &str = r#"
resources:
  - name: frontend
    type: Service
    properties:
      apiVersion: v1
      kind: Service
  - name: database
    type: compute.v1.instance
    properties:
      zone: us-central1-f
"#;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path =
            std::env::temp_dir().join(format!("helmctl-convert-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_run_convert() {
        let path = write_temp("config.yaml", CONFIG);

        let output = run_convert(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let config: Configuration = serde_yaml::from_str(&output).unwrap();
        assert_eq!(config.resources.len(), 2);
        assert_eq!(config.resources[0].name, "frontend");
        assert_eq!(config.resources[0].type_, "kubernetes.v1.service");
        assert_eq!(config.resources[1].type_, "compute.v1.instance");
    }

    #[test]
    fn test_run_convert_invalid_configuration() {
        let path = write_temp("invalid.yaml", "resources: nope\n");

        let err = run_convert(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, HelmctlError::InvalidConfiguration(_)));
    }
}
