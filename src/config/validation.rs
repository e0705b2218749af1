//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate DNS names and log levels
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AdapterConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::AdapterConfig;

pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

const MAX_LABEL_LEN: usize = 63;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("domain_suffix {0:?} is not a valid DNS name")]
    InvalidDomainSuffix(String),

    #[error("ingress_class must not be empty")]
    EmptyIngressClass,

    #[error("default_namespace {0:?} is not a valid DNS-1123 label")]
    InvalidNamespace(String),

    #[error("unknown log level {0:?}")]
    UnknownLogLevel(String),
}

pub fn validate_config(config: &AdapterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.domain_suffix.is_empty() || !config.domain_suffix.split('.').all(is_dns_label) {
        errors.push(ValidationError::InvalidDomainSuffix(
            config.domain_suffix.clone(),
        ));
    }

    if config.ingress_class.trim().is_empty() {
        errors.push(ValidationError::EmptyIngressClass);
    }

    if !is_dns_label(&config.default_namespace) {
        errors.push(ValidationError::InvalidNamespace(
            config.default_namespace.clone(),
        ));
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Lowercase alphanumerics and dashes, starting and ending alphanumeric.
pub fn is_dns_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            bytes.len() <= MAX_LABEL_LEN
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes
                    .iter()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        }
        _ => false,
    }
}
