//! Conversion of cluster resources into the mesh routing model.
//!
//! # Responsibilities
//! - Turn a service into a `MeshService` with classified ports
//! - Turn an ingress into one `IngressRoute` per path, keyed by encoded name
//! - Decide whether an ingress belongs to this adapter
//!
//! # Design Decisions
//! - Index 0 is reserved for the default backend; rule and path indices of
//!   the resource are stored one-based
//! - Conversion is pure: the same resource and config always give the same map

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use crate::config::AdapterConfig;
use crate::kube::types::{Ingress, IngressBackend, Service};
use crate::model::{ConfigKey, ConfigKind, MeshPort, MeshService};
use crate::naming::{FormatError, ResourceIdentity};
use crate::protocol::classify_protocol;
use crate::routing::{IngressRoute, UriMatch};

/// Resource that cannot be converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("{kind} has no name")]
    MissingName { kind: &'static str },

    #[error("service {service} declares port 0")]
    ZeroPort { service: String },

    #[error("service {service} declares port name {name:?} more than once")]
    DuplicatePortName { service: String, name: String },

    #[error("ingress {ingress} references a backend with no service name")]
    MissingBackendService { ingress: String },
}

/// Fully qualified hostname of a service.
pub fn service_hostname(name: &str, namespace: &str, domain_suffix: &str) -> String {
    format!("{name}.{namespace}.svc.{domain_suffix}")
}

fn namespace_or_default<'a>(namespace: &'a str, config: &'a AdapterConfig) -> &'a str {
    if namespace.is_empty() {
        config.default_namespace.as_str()
    } else {
        namespace
    }
}

/// Convert a cluster service into the mesh model.
pub fn convert_service(
    service: &Service,
    config: &AdapterConfig,
) -> Result<MeshService, ConversionError> {
    let meta = &service.metadata;
    if meta.name.is_empty() {
        return Err(ConversionError::MissingName { kind: "service" });
    }
    let namespace = namespace_or_default(&meta.namespace, config);

    let mut seen = HashSet::new();
    let mut ports = Vec::with_capacity(service.spec.ports.len());
    for port in &service.spec.ports {
        if port.port == 0 {
            return Err(ConversionError::ZeroPort {
                service: meta.name.clone(),
            });
        }
        if !seen.insert(port.name.as_str()) {
            return Err(ConversionError::DuplicatePortName {
                service: meta.name.clone(),
                name: port.name.clone(),
            });
        }
        ports.push(MeshPort {
            name: port.name.clone(),
            port: port.port,
            protocol: classify_protocol(&port.name, port.protocol),
        });
    }

    tracing::debug!(
        service = %meta.name,
        namespace = %namespace,
        ports = ports.len(),
        "Converted service"
    );

    Ok(MeshService {
        hostname: service_hostname(&meta.name, namespace, &config.domain_suffix),
        ports,
    })
}

/// True when the ingress carries no class annotation or this adapter's class.
pub fn ingress_class_matches(ingress: &Ingress, config: &AdapterConfig) -> bool {
    ingress
        .ingress_class()
        .map_or(true, |class| class == config.ingress_class)
}

/// Convert an ingress into routes keyed by their config store key.
pub fn convert_ingress(
    ingress: &Ingress,
    config: &AdapterConfig,
) -> Result<BTreeMap<ConfigKey, IngressRoute>, ConversionError> {
    let meta = &ingress.metadata;
    if meta.name.is_empty() {
        return Err(ConversionError::MissingName { kind: "ingress" });
    }
    let namespace = namespace_or_default(&meta.namespace, config);

    let key_of = |rule_index: usize, path_index: usize| {
        ConfigKey::new(
            ConfigKind::IngressRule,
            ResourceIdentity::new(meta.name.as_str(), rule_index, path_index).encode(),
            namespace,
            &config.default_namespace,
        )
    };
    let route_of = |backend: &IngressBackend, host: Option<&str>, path: Option<&str>| {
        if backend.service_name.is_empty() {
            return Err(ConversionError::MissingBackendService {
                ingress: meta.name.clone(),
            });
        }
        let destination =
            service_hostname(&backend.service_name, namespace, &config.domain_suffix);
        Ok(IngressRoute::new(
            destination,
            backend.service_port.clone(),
            host,
            path,
        ))
    };

    let mut routes = BTreeMap::new();

    if let Some(backend) = &ingress.spec.backend {
        routes.insert(key_of(0, 0), route_of(backend, None, None)?);
    }

    for (i, rule) in ingress.spec.rules.iter().enumerate() {
        let Some(http) = &rule.http else {
            tracing::trace!(ingress = %meta.name, rule = i, "Skipping rule without http block");
            continue;
        };
        for (j, path) in http.paths.iter().enumerate() {
            let route = route_of(&path.backend, rule.host.as_deref(), path.path.as_deref())?;
            let key = key_of(i + 1, j + 1);
            tracing::trace!(
                key = %key,
                match_kind = ?route.uri.as_ref().map(UriMatch::kind),
                "Derived ingress route"
            );
            routes.insert(key, route);
        }
    }

    tracing::debug!(
        ingress = %meta.name,
        namespace = %namespace,
        routes = routes.len(),
        "Converted ingress"
    );

    Ok(routes)
}

/// Recover the originating ingress of a derived ingress route.
pub fn ingress_identity(key: &ConfigKey) -> Result<ResourceIdentity, FormatError> {
    key.identity()
}
