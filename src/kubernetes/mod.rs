// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for object parsing, type qualification, and installation checks.

pub mod kinds;
pub mod objects;
pub mod server;

pub use kinds::{is_kubernetes_kind, type_for_version_and_kind};
pub use objects::{convert_kubernetes_resource_types, parse_kubernetes_object};
pub use server::{check_installation, InstallStatus};
