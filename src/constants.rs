// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Prefix shared by every qualified Kubernetes resource type
pub const KUBERNETES_TYPE_PREFIX: &str = "kubernetes";

/// Server-side component defaults used by the doctor command
pub mod server {
    /// Namespace the server-side components are installed into
    pub const DEFAULT_NAMESPACE: &str = "helm";
    /// Components that must each have at least one pod
    pub const DEFAULT_COMPONENTS: &[&str] = &["expandybird", "manager", "resourcifier"];
    /// Command suggested when the components are missing
    pub const INSTALL_HINT: &str = "helmctl server install";
}

/// Environment variables read by `Config::from_env`
pub mod env {
    pub const SERVER_NAMESPACE: &str = "HELMCTL_SERVER_NAMESPACE";
    pub const SERVER_COMPONENTS: &str = "HELMCTL_SERVER_COMPONENTS";
}
