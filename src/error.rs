// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelmctlError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("cannot unmarshal native kubernetes object: {0}")]
    Decode(serde_yaml::Error),

    #[error("cannot unmarshal native kubernetes object: name is not a string: {0:?}")]
    FieldType(serde_yaml::Value),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to serialize output: {0}")]
    Serialization(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, HelmctlError>;
