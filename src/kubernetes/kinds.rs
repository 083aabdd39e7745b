// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes kind table and qualified type names

use crate::constants::KUBERNETES_TYPE_PREFIX;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Primitive API object kinds as of Kubernetes 1.1, lowercased.
static KUBERNETES_KINDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "binding",
        "componentstatus",
        "componentstatuslist",
        "deleteoptions",
        "endpoints",
        "endpointslist",
        "event",
        "eventlist",
        "limitrange",
        "limitrangelist",
        "namespace",
        "namespacelist",
        "node",
        "nodelist",
        "persistentvolume",
        "persistentvolumeclaim",
        "persistentvolumeclaimlist",
        "persistentvolumelist",
        "pod",
        "podlist",
        "podtemplate",
        "podtemplatelist",
        "replicationcontroller",
        "replicationcontrollerlist",
        "resourcequota",
        "resourcequotalist",
        "secret",
        "secretlist",
        "service",
        "serviceaccount",
        "serviceaccountlist",
        "servicelist",
    ])
});

/// Convert a Kubernetes API version and kind to a qualified resource type name.
///
/// Qualified names let kubectl-handled resources be told apart from other
/// resource classes in the same configuration. Unknown versions and kinds are
/// qualified all the same.
pub fn type_for_version_and_kind(version: &str, kind: &str) -> String {
    format!(
        "{}.{}.{}",
        KUBERNETES_TYPE_PREFIX,
        version.to_lowercase(),
        kind.to_lowercase()
    )
}

/// Check if a type name is a Kubernetes kind. The caller lowercases.
pub fn is_kubernetes_kind(type_name: &str) -> bool {
    KUBERNETES_KINDS.contains(type_name)
}
