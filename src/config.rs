// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as vars, server};
use anyhow::{ensure, Result};
use std::env;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace the server-side components run in
    pub server_namespace: String,
    /// Components the doctor command expects to find
    pub server_components: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server_namespace = lookup(vars::SERVER_NAMESPACE)
            .map(|ns| ns.trim().to_string())
            .filter(|ns| !ns.is_empty())
            .unwrap_or_else(|| server::DEFAULT_NAMESPACE.to_string());

        let server_components: Vec<String> = match lookup(vars::SERVER_COMPONENTS) {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect(),
            None => server::DEFAULT_COMPONENTS
                .iter()
                .map(|c| c.to_string())
                .collect(),
        };
        ensure!(
            !server_components.is_empty(),
            "{} must name at least one component",
            vars::SERVER_COMPONENTS
        );

        Ok(Config {
            server_namespace,
            server_components,
        })
    }

    /// Override the server namespace, e.g. from a command line flag
    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        if let Some(ns) = namespace {
            self.server_namespace = ns;
        }
        self
    }
}
