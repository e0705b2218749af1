//! Derived ingress routes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::matcher::UriMatch;

/// Reference to a backend service port, by number or by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PortSelector {
    Number(u16),
    Name(String),
}

impl fmt::Display for PortSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortSelector::Number(n) => write!(f, "{}", n),
            PortSelector::Name(name) => f.write_str(name),
        }
    }
}

/// Route derived from one ingress path (or the default backend).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IngressRoute {
    /// Hostname of the destination service.
    pub destination: String,

    /// Destination service port.
    pub port: PortSelector,

    /// Authority (host header) to match exactly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,

    /// URI condition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<UriMatch>,
}

impl IngressRoute {
    pub fn new(
        destination: impl Into<String>,
        port: PortSelector,
        host: Option<&str>,
        path: Option<&str>,
    ) -> Self {
        Self {
            destination: destination.into(),
            port,
            authority: host.filter(|h| !h.is_empty()).map(str::to_string),
            uri: path.and_then(UriMatch::from_path),
        }
    }

    /// True when the route has neither an authority nor a URI condition.
    pub fn is_catch_all(&self) -> bool {
        self.authority.is_none() && self.uri.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_with_host_and_path() {
        let route = IngressRoute::new(
            "web.default.svc.cluster.local",
            PortSelector::Number(80),
            Some("example.com"),
            Some("/api/.*"),
        );
        assert_eq!(route.authority.as_deref(), Some("example.com"));
        assert_eq!(route.uri, Some(UriMatch::Prefix("/api/".into())));
        assert!(!route.is_catch_all());
    }

    #[test]
    fn test_empty_host_and_path_are_dropped() {
        let route = IngressRoute::new("web", PortSelector::Name("http".into()), Some(""), Some(""));
        assert!(route.is_catch_all());
    }

    #[test]
    fn test_port_selector_serde() {
        let n: PortSelector = serde_json::from_str("8080").unwrap();
        assert_eq!(n, PortSelector::Number(8080));
        let s: PortSelector = serde_json::from_str("\"http-web\"").unwrap();
        assert_eq!(s, PortSelector::Name("http-web".into()));
        assert_eq!(s.to_string(), "http-web");
    }

    #[test]
    fn test_route_json_skips_empty_conditions() {
        let route = IngressRoute::new("web", PortSelector::Number(80), None, None);
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"destination": "web", "port": 80})
        );
    }
}
