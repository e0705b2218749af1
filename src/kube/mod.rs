//! Cluster resource adapter.
//!
//! # Data Flow
//! ```text
//! Ingress / Service descriptor (from the watch loop)
//!     → types.rs (deserialized descriptor)
//!     → conversion.rs
//!         - protocol::classify_protocol per service port
//!         - routing::classify_path_match per ingress path
//!         - naming::encode_identity per derived route
//!     → MeshService / map of ConfigKey → IngressRoute
//! ```
//!
//! # Design Decisions
//! - No I/O: descriptors are handed in, derived values handed back
//! - Ownership by ingress class is decided here, acted on by the caller

pub mod conversion;
pub mod types;

pub use conversion::{
    convert_ingress, convert_service, ingress_class_matches, ingress_identity, service_hostname,
    ConversionError,
};
pub use types::{Ingress, Service};
