// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{HelmctlError, Result};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Free-form resource properties, keyed by top-level field name
pub type Properties = BTreeMap<String, serde_yaml::Value>;

/// The narrow shape used to pull version, kind and name out of a
/// Kubernetes API object. Everything else in the document is ignored.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct KubernetesObject {
    #[serde(default, deserialize_with = "string_or_null")]
    pub api_version: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub kind: String,
    #[serde(default, deserialize_with = "map_or_null")]
    pub metadata: BTreeMap<String, serde_yaml::Value>,
}

/// Null decodes as an empty string; other non-string scalars are rejected
/// instead of being stringified.
fn string_or_null<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::Null => Ok(String::new()),
        serde_yaml::Value::String(s) => Ok(s),
        other => Err(de::Error::custom(format!(
            "expected a string, found {:?}",
            other
        ))),
    }
}

fn map_or_null<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, serde_yaml::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let metadata = Option::<BTreeMap<String, serde_yaml::Value>>::deserialize(deserializer)?;
    Ok(metadata.unwrap_or_default())
}

impl KubernetesObject {
    /// Get `metadata.name`, treating an absent name as empty
    pub fn name(&self) -> Result<&str> {
        match self.metadata.get("name") {
            None => Ok(""),
            Some(serde_yaml::Value::String(name)) => Ok(name.as_str()),
            Some(other) => Err(HelmctlError::FieldType(other.clone())),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Resource {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: Properties,
}

impl Resource {
    /// Get a property if it is present and holds a string
    pub fn string_property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(serde_yaml::Value::as_str)
    }
}

/// An ordered set of resources that are deployed together
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Configuration {
    #[serde(default)]
    pub resources: Vec<Resource>,
}
