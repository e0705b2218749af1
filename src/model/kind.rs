//! Config kind registry.
//!
//! # Responsibilities
//! - Enumerate the config kinds the control plane stores
//! - Resolve a kind from its registry name (`"route-rule"`)
//!
//! # Design Decisions
//! - The set of kinds is fixed at compile time
//! - Name lookup goes through a read-only table built once on first use
//! - Registry names are derived from the type names, never spelled twice

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::naming::casing_transform;

/// Kinds of configuration object held in the config store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum ConfigKind {
    RouteRule,
    DestinationPolicy,
    IngressRule,
}

static REGISTRY: LazyLock<BTreeMap<String, ConfigKind>> = LazyLock::new(|| {
    ConfigKind::ALL
        .iter()
        .map(|kind| (casing_transform(kind.type_name()), *kind))
        .collect()
});

/// Lookup of a kind name that is not registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KindError {
    #[error("missing configuration type {name:?} (available: {available})")]
    Unknown { name: String, available: String },
}

impl ConfigKind {
    pub const ALL: [ConfigKind; 3] = [
        ConfigKind::RouteRule,
        ConfigKind::DestinationPolicy,
        ConfigKind::IngressRule,
    ];

    /// Type name of the kind, as written in the config schema.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigKind::RouteRule => "RouteRule",
            ConfigKind::DestinationPolicy => "DestinationPolicy",
            ConfigKind::IngressRule => "IngressRule",
        }
    }

    /// Fully qualified message name of the kind's payload.
    pub fn message_name(&self) -> &'static str {
        match self {
            ConfigKind::RouteRule => "istio.proxy.v1.config.RouteRule",
            ConfigKind::DestinationPolicy => "istio.proxy.v1.config.DestinationPolicy",
            ConfigKind::IngressRule => "istio.proxy.v1.config.IngressRule",
        }
    }

    /// Registry name (`"route-rule"`).
    pub fn name(&self) -> String {
        casing_transform(self.type_name())
    }

    /// Resolve a kind from its registry name.
    pub fn from_name(name: &str) -> Result<ConfigKind, KindError> {
        REGISTRY.get(name).copied().ok_or_else(|| KindError::Unknown {
            name: name.to_string(),
            available: kinds().join(", "),
        })
    }
}

impl fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Sorted registry names of every config kind.
pub fn kinds() -> Vec<&'static str> {
    REGISTRY.keys().map(String::as_str).collect()
}
