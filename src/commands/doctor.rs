// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Doctor command - checks the prerequisites for deploying packages

use crate::config::Config;
use crate::constants::server::INSTALL_HINT;
use crate::format;
use crate::kubernetes::check_installation;
use kube::Client;
use tracing::{info, warn};

pub const SUCCESS_MESSAGE: &str = "You have everything you need. Go forth my friend!";

/// Run the doctor command. Problems are reported to the user, never returned.
pub async fn run_doctor(config: &Config) {
    let installed = match Client::try_default().await {
        Ok(client) => is_installed(&client, config).await,
        Err(e) => {
            warn!("Failed to create Kubernetes client: {}", e);
            false
        }
    };

    if installed {
        format::success(SUCCESS_MESSAGE);
    } else {
        format::warning(&not_installed_message());
    }
}

/// Check the installation, treating a failed check as not installed
async fn is_installed(client: &Client, config: &Config) -> bool {
    match check_installation(client, config).await {
        Ok(status) => {
            info!(
                "Server-side components in namespace {}: installed={}",
                status.namespace,
                status.is_installed()
            );
            status.is_installed()
        }
        Err(e) => {
            warn!("Failed to check server-side components: {}", e);
            false
        }
    }
}

fn not_installed_message() -> String {
    format!(
        "Looks like you don't have the helm server-side components installed.\nRun: `{}`",
        INSTALL_HINT
    )
}
