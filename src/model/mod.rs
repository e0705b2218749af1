//! Control plane config model.
//!
//! # Data Flow
//! ```text
//! Kind name from a caller ("ingress-rule")
//!     → kind.rs (read-only registry lookup)
//!     → ConfigKind
//!
//! Derived object
//!     → key.rs (ConfigKey: kind + encoded name + namespace)
//!     → identity recovered from the key on update/delete
//!
//! Cluster service
//!     → service.rs (MeshService with classified ports)
//! ```

pub mod key;
pub mod kind;
pub mod service;

pub use key::ConfigKey;
pub use kind::{kinds, ConfigKind, KindError};
pub use service::{MeshPort, MeshService};
