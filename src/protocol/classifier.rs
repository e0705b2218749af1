//! Application protocol inference from port naming conventions.
//!
//! Cluster authors encode a protocol hint as the dash-delimited leading word
//! of a port name (`http-metrics`, `grpc-web`). The hint is only honoured for
//! TCP ports.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::naming::SEPARATOR;

/// Protocol declared at the transport layer of a service port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransportProtocol {
    #[default]
    Tcp,
    Udp,
}

/// Protocol classification used by the routing model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApplicationProtocol {
    Tcp,
    Udp,
    Http,
    Https,
    Http2,
    Grpc,
}

impl ApplicationProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationProtocol::Tcp => "TCP",
            ApplicationProtocol::Udp => "UDP",
            ApplicationProtocol::Http => "HTTP",
            ApplicationProtocol::Https => "HTTPS",
            ApplicationProtocol::Http2 => "HTTP2",
            ApplicationProtocol::Grpc => "GRPC",
        }
    }

    /// True for protocols that carry HTTP semantics (and so support
    /// authority and path matching).
    pub fn is_http(&self) -> bool {
        matches!(
            self,
            ApplicationProtocol::Http
                | ApplicationProtocol::Http2
                | ApplicationProtocol::Grpc
        )
    }

    /// Look up the protocol for a port-name hint token.
    fn from_hint(token: &str) -> Option<Self> {
        match token {
            "http2" => Some(ApplicationProtocol::Http2),
            "https" => Some(ApplicationProtocol::Https),
            "http" => Some(ApplicationProtocol::Http),
            "grpc" => Some(ApplicationProtocol::Grpc),
            _ => None,
        }
    }
}

impl fmt::Display for ApplicationProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a service port by its name and transport protocol.
pub fn classify_protocol(port_name: &str, transport: TransportProtocol) -> ApplicationProtocol {
    if transport == TransportProtocol::Udp {
        return ApplicationProtocol::Udp;
    }

    let segment = port_name
        .split_once(SEPARATOR)
        .map_or(port_name, |(head, _)| head);

    ApplicationProtocol::from_hint(segment).unwrap_or(ApplicationProtocol::Tcp)
}
