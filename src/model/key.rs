//! Config store keys.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::kind::ConfigKind;
use crate::naming::{decode_identity, FormatError, ResourceIdentity};

/// Key under which a config object is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct ConfigKey {
    pub kind: ConfigKind,
    pub name: String,
    pub namespace: String,
}

impl ConfigKey {
    /// Build a key, placing it in `default_namespace` when `namespace` is empty.
    pub fn new(
        kind: ConfigKind,
        name: impl Into<String>,
        namespace: &str,
        default_namespace: &str,
    ) -> Self {
        let namespace = if namespace.is_empty() {
            default_namespace
        } else {
            namespace
        };
        Self {
            kind,
            name: name.into(),
            namespace: namespace.to_string(),
        }
    }

    /// Recover the identity of the resource this object was derived from.
    pub fn identity(&self) -> Result<ResourceIdentity, FormatError> {
        decode_identity(&self.name)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.kind, self.namespace, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_namespace() {
        let key = ConfigKey::new(ConfigKind::IngressRule, "web-1-1", "", "default");
        assert_eq!(key.namespace, "default");
        let key = ConfigKey::new(ConfigKind::IngressRule, "web-1-1", "prod", "default");
        assert_eq!(key.namespace, "prod");
    }

    #[test]
    fn test_display() {
        let key = ConfigKey::new(ConfigKind::RouteRule, "reviews", "bookinfo", "default");
        assert_eq!(key.to_string(), "route-rule/bookinfo/reviews");
    }

    #[test]
    fn test_identity() {
        let key = ConfigKey::new(ConfigKind::IngressRule, "my-ingress-2-3", "", "default");
        assert_eq!(key.identity().unwrap(), ResourceIdentity::new("my-ingress", 2, 3));

        let key = ConfigKey::new(ConfigKind::RouteRule, "reviews", "", "default");
        assert!(key.identity().is_err());
    }
}
