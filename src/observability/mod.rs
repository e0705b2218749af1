//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Conversions and config loading
//!     → tracing events (structured key/value fields)
//!     → logging.rs subscriber (installed by the binary)
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - The library only emits events; it never installs a subscriber itself
//! - Log level comes from config, overridable with `RUST_LOG`

pub mod logging;

pub use logging::{init_logging, init_logging_for};
