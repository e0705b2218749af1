//! Protocol classification subsystem.
//!
//! # Data Flow
//! ```text
//! Service port (name, transport protocol)
//!     → classifier.rs (naming convention lookup)
//!     → ApplicationProtocol used by the routing model
//! ```
//!
//! # Design Decisions
//! - One enum and one function own all protocol semantics
//! - UDP transport is authoritative and never overridden by the port name
//! - Only an exact leading segment counts as a hint (`httptest` is TCP)

pub mod classifier;

pub use classifier::{classify_protocol, ApplicationProtocol, TransportProtocol};
