//! Mesh service model.

use serde::{Deserialize, Serialize};

use crate::protocol::ApplicationProtocol;

/// A service port with its classified application protocol.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MeshPort {
    pub name: String,
    pub port: u16,
    pub protocol: ApplicationProtocol,
}

/// A service as seen by the routing model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MeshService {
    /// Fully qualified hostname (`name.namespace.svc.suffix`).
    pub hostname: String,
    pub ports: Vec<MeshPort>,
}

impl MeshService {
    /// Ports that carry HTTP semantics.
    pub fn http_ports(&self) -> impl Iterator<Item = &MeshPort> {
        self.ports.iter().filter(|p| p.protocol.is_http())
    }
}
