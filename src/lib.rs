//! Cluster ingress adapter for a service-mesh control plane.
//!
//! Pure naming and classification layer that turns ingress rules and service
//! ports into protocol-aware routing config.

pub mod config;
pub mod kube;
pub mod model;
pub mod naming;
pub mod observability;
pub mod protocol;
pub mod routing;

pub use config::AdapterConfig;
pub use naming::{casing_transform, decode_identity, encode_identity, FormatError, ResourceIdentity};
pub use protocol::{classify_protocol, ApplicationProtocol, TransportProtocol};
pub use routing::{classify_path_match, MatchKind};
