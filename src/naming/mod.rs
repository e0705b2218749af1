//! Naming subsystem.
//!
//! # Data Flow
//! ```text
//! Config kind type name ("RouteRule")
//!     → casing.rs (kebab-case registry name "route-rule")
//!
//! Ingress name + rule index + path index
//!     → identity.rs encode ("my-ingress-1-2")
//!     → stored as config object name
//!     → identity.rs decode on update/delete
//!     → ResourceIdentity or FormatError
//! ```
//!
//! # Design Decisions
//! - Pure functions, no state, safe from any thread
//! - Decoding works from the end of the name so origin names may contain dashes
//! - Malformed names are hard errors, never a zero identity

pub mod casing;
pub mod identity;

pub use casing::casing_transform;
pub use identity::{decode_identity, encode_identity, FormatError, ResourceIdentity};

/// Separator used by both the kebab-case transform and the identity codec.
pub const SEPARATOR: char = '-';
