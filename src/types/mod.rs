// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource and configuration data model.

pub mod resource;

pub use resource::{Configuration, KubernetesObject, Properties, Resource};
