//! End-to-end conversion tests through the public API.

use ingress_adapter::config::parse_config;
use ingress_adapter::kube::{
    convert_ingress, convert_service, ingress_class_matches, ingress_identity, Ingress,
};
use ingress_adapter::model::{ConfigKey, ConfigKind};
use ingress_adapter::routing::{PortSelector, UriMatch};
use ingress_adapter::{ApplicationProtocol, ResourceIdentity};

mod common;

#[test]
fn test_ingress_routes_with_custom_domain() {
    let config = parse_config("domain_suffix = \"mesh.internal\"").unwrap();
    let ingress = common::sample_ingress();
    assert!(ingress_class_matches(&ingress, &config));

    let routes = convert_ingress(&ingress, &config).unwrap();
    assert_eq!(routes.len(), 4);

    let key = |name: &str| ConfigKey {
        kind: ConfigKind::IngressRule,
        name: name.to_string(),
        namespace: "shop".to_string(),
    };

    let default = &routes[&key("my-cool-ingress-0-0")];
    assert_eq!(default.destination, "storefront.shop.svc.mesh.internal");
    assert!(default.is_catch_all());

    let cart = &routes[&key("my-cool-ingress-1-1")];
    assert_eq!(cart.authority.as_deref(), Some("shop.example.com"));
    assert_eq!(cart.port, PortSelector::Name("http".into()));
    assert_eq!(cart.uri, Some(UriMatch::Exact("/cart".into())));

    let api = &routes[&key("my-cool-ingress-1-2")];
    assert_eq!(api.uri, Some(UriMatch::Prefix("/api/v1/".into())));

    // rule 2 has no http block and produces nothing
    let images = &routes[&key("my-cool-ingress-3-1")];
    assert_eq!(images.authority, None);
    assert_eq!(
        images.uri,
        Some(UriMatch::Regex("/img/(small|large)/.*".into()))
    );
}

#[test]
fn test_every_key_decodes_to_its_ingress() {
    let config = parse_config("").unwrap();
    let routes = convert_ingress(&common::sample_ingress(), &config).unwrap();

    let identities: Vec<ResourceIdentity> = routes
        .keys()
        .map(|key| ingress_identity(key).unwrap())
        .collect();
    assert_eq!(
        identities,
        vec![
            ResourceIdentity::new("my-cool-ingress", 0, 0),
            ResourceIdentity::new("my-cool-ingress", 1, 1),
            ResourceIdentity::new("my-cool-ingress", 1, 2),
            ResourceIdentity::new("my-cool-ingress", 3, 1),
        ]
    );
}

#[test]
fn test_conversion_is_deterministic() {
    let config = parse_config("").unwrap();
    let ingress = common::sample_ingress();
    let first = convert_ingress(&ingress, &config).unwrap();
    let second = convert_ingress(&ingress, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_other_ingress_class_not_owned() {
    let config = parse_config("ingress_class = \"nginx\"").unwrap();
    assert!(!ingress_class_matches(&common::sample_ingress(), &config));
}

#[test]
fn test_service_port_protocols() {
    let config = parse_config("").unwrap();
    let mesh = convert_service(&common::sample_service(), &config).unwrap();
    assert_eq!(mesh.hostname, "catalog.shop.svc.cluster.local");

    let protocols: Vec<_> = mesh.ports.iter().map(|p| (p.port, p.protocol)).collect();
    assert_eq!(
        protocols,
        vec![
            (80, ApplicationProtocol::Http),
            (443, ApplicationProtocol::Https),
            (8080, ApplicationProtocol::Http2),
            (9090, ApplicationProtocol::Grpc),
            (9999, ApplicationProtocol::Tcp),
            (53, ApplicationProtocol::Udp),
            (3306, ApplicationProtocol::Tcp),
        ]
    );
    let http: Vec<_> = mesh.http_ports().map(|p| p.port).collect();
    assert_eq!(http, vec![80, 8080, 9090]);
}

#[test]
fn test_routes_serialize_for_inspection() {
    let config = parse_config("").unwrap();
    let routes = convert_ingress(&common::sample_ingress(), &config).unwrap();
    let api = routes
        .iter()
        .find(|(k, _)| k.name == "my-cool-ingress-1-2")
        .map(|(_, r)| r)
        .unwrap();
    assert_eq!(
        serde_json::to_value(api).unwrap(),
        serde_json::json!({
            "destination": "api.shop.svc.cluster.local",
            "port": 8080,
            "authority": "shop.example.com",
            "uri": {"prefix": "/api/v1/"}
        })
    );
}

#[test]
fn test_wildcard_after_regex_stem_stays_regex() {
    let config = parse_config("").unwrap();
    let ingress: Ingress = serde_json::from_value(serde_json::json!({
        "metadata": {"name": "versions"},
        "spec": {"rules": [{"http": {"paths": [
            {"path": "/a.b.*", "backend": {"serviceName": "dotted", "servicePort": 80}},
            {"path": "/v1.{2}.*", "backend": {"serviceName": "counted", "servicePort": 80}},
            {"path": "/plain/.*", "backend": {"serviceName": "plain", "servicePort": 80}}
        ]}}]}
    }))
    .unwrap();

    let routes = convert_ingress(&ingress, &config).unwrap();
    let uris: Vec<_> = routes.values().map(|r| r.uri.clone().unwrap()).collect();
    assert_eq!(
        uris,
        vec![
            UriMatch::Regex("/a.b.*".into()),
            UriMatch::Regex("/v1.{2}.*".into()),
            UriMatch::Prefix("/plain/".into()),
        ]
    );
}
