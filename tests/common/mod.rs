//! Shared fixtures for integration tests.

use ingress_adapter::kube::{Ingress, Service};

/// Ingress with a default backend, one host rule with two paths, a rule
/// without an http block and a catch-all regex rule.
pub fn sample_ingress() -> Ingress {
    serde_json::from_value(serde_json::json!({
        "metadata": {
            "name": "my-cool-ingress",
            "namespace": "shop",
            "annotations": {"kubernetes.io/ingress.class": "istio"}
        },
        "spec": {
            "backend": {"serviceName": "storefront", "servicePort": 80},
            "rules": [
                {
                    "host": "shop.example.com",
                    "http": {"paths": [
                        {"path": "/cart", "backend": {"serviceName": "cart", "servicePort": "http"}},
                        {"path": "/api/v1/.*", "backend": {"serviceName": "api", "servicePort": 8080}}
                    ]}
                },
                {"host": "tcp.example.com"},
                {
                    "http": {"paths": [
                        {"path": "/img/(small|large)/.*", "backend": {"serviceName": "images", "servicePort": 80}}
                    ]}
                }
            ]
        }
    }))
    .expect("valid ingress fixture")
}

/// Service exposing one port per protocol hint.
#[allow(dead_code)]
pub fn sample_service() -> Service {
    serde_json::from_value(serde_json::json!({
        "metadata": {"name": "catalog", "namespace": "shop"},
        "spec": {"ports": [
            {"name": "http-web", "port": 80},
            {"name": "https", "port": 443},
            {"name": "http2-internal", "port": 8080},
            {"name": "grpc", "port": 9090},
            {"name": "httptest", "port": 9999},
            {"name": "http-dns", "port": 53, "protocol": "UDP"},
            {"port": 3306}
        ]}
    }))
    .expect("valid service fixture")
}
