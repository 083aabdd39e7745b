// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Parsing native Kubernetes objects into resources

use crate::error::{HelmctlError, Result};
use crate::kubernetes::kinds::{is_kubernetes_kind, type_for_version_and_kind};
use crate::types::{Configuration, KubernetesObject, Properties, Resource};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Parse a Kubernetes API object in YAML format into a resource.
///
/// The resource name is the object's `metadata.name` suffixed with the current
/// UTC time in nanoseconds, the type is the qualified version and kind, and the
/// properties hold the whole document.
pub fn parse_kubernetes_object(object: &[u8]) -> Result<Resource> {
    let o: KubernetesObject = serde_yaml::from_slice(object).map_err(HelmctlError::Decode)?;
    let name = o.name()?;

    // The property bag is decoded separately: it is looser than KubernetesObject
    let properties: Properties =
        serde_yaml::from_slice(object).map_err(HelmctlError::Decode)?;

    let resource = Resource {
        name: unique_name(name, Utc::now()),
        type_: type_for_version_and_kind(&o.api_version, &o.kind),
        properties,
    };

    debug!("Parsed {} as {}", resource.name, resource.type_);
    Ok(resource)
}

/// Suffix a name with a timestamp. Uniqueness only holds across distinct nanoseconds.
fn unique_name(prefix: &str, at: DateTime<Utc>) -> String {
    let nanos =
        i128::from(at.timestamp()) * 1_000_000_000 + i128::from(at.timestamp_subsec_nanos());
    format!("{}-{}", prefix, nanos)
}

/// Convert the API version and kind to a qualified resource type for every
/// resource in a configuration whose type is a known Kubernetes kind.
///
/// Resources without string `apiVersion` and `kind` properties are left alone.
pub fn convert_kubernetes_resource_types(config: &mut Configuration) {
    for r in config.resources.iter_mut() {
        if !is_kubernetes_kind(&r.type_.to_lowercase()) {
            continue;
        }

        let (Some(version), Some(kind)) =
            (r.string_property("apiVersion"), r.string_property("kind"))
        else {
            continue;
        };

        let qualified = type_for_version_and_kind(version, kind);
        debug!("Converting type of {} from {} to {}", r.name, r.type_, qualified);
        r.type_ = qualified;
    }
}
