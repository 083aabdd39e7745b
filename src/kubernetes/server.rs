// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Server-side component installation checks

use crate::config::Config;
use crate::error::Result;
use k8s_openapi::api::core::v1::Pod;
use kube::{api::ListParams, Api, Client, ResourceExt};
use tracing::{debug, info, instrument};

/// Outcome of looking for the server-side components in a cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallStatus {
    pub namespace: String,
    /// Components without a single pod in the namespace
    pub missing: Vec<String>,
}

impl InstallStatus {
    pub fn is_installed(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Check which server-side components have pods running in the server namespace
#[instrument(skip(client, config), fields(namespace = %config.server_namespace))]
pub async fn check_installation(client: &Client, config: &Config) -> Result<InstallStatus> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), &config.server_namespace);

    let pod_names: Vec<String> = match pods.list(&ListParams::default()).await {
        Ok(list) => list.items.iter().map(|p| p.name_any()).collect(),
        Err(kube::Error::Api(err)) if err.code == 404 => {
            info!("Namespace {} not found", config.server_namespace);
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };
    debug!("Found {} pods", pod_names.len());

    let missing = missing_components(&config.server_components, &pod_names);
    if !missing.is_empty() {
        info!("Missing server-side components: {}", missing.join(", "));
    }

    Ok(InstallStatus {
        namespace: config.server_namespace.clone(),
        missing,
    })
}

/// A component is present when a pod is named after it, e.g. `manager-rc-x7f2k`
fn missing_components(components: &[String], pod_names: &[String]) -> Vec<String> {
    components
        .iter()
        .filter(|c| {
            let prefix = format!("{}-", c);
            !pod_names.iter().any(|p| p.starts_with(&prefix))
        })
        .cloned()
        .collect()
}
