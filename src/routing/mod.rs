//! Routing model subsystem.
//!
//! # Data Flow
//! ```text
//! Ingress path ("/api/v1/.*")
//!     → matcher.rs (classify literal vs pattern)
//!     → UriMatch (exact, prefix or regex)
//!     → route.rs (IngressRoute: destination + port + authority + uri)
//! ```
//!
//! # Design Decisions
//! - Routes are plain values, built per conversion and never mutated
//! - Deterministic: the same path always yields the same match mode
//! - Pattern detection is syntactic only

pub mod matcher;
pub mod route;

pub use matcher::{classify_path_match, MatchKind, UriMatch};
pub use route::{IngressRoute, PortSelector};
