//! Identifier casing.
//!
//! # Responsibilities
//! - Turn PascalCase/camelCase identifiers into dash-separated lowercase
//!
//! # Design Decisions
//! - Every uppercase character starts its own segment, even in a run
//!   (`"exampleXY"` becomes `"example-x-y"`)
//! - The first character never gets a leading separator

use super::SEPARATOR;

/// Convert a camel-cased identifier to kebab case.
///
/// ```
/// use ingress_adapter::naming::casing_transform;
///
/// assert_eq!(casing_transform("DestinationPolicy"), "destination-policy");
/// ```
pub fn casing_transform(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + identifier.len() / 2);
    for (i, c) in identifier.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            out.push(SEPARATOR);
        }
        out.extend(c.to_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_to_kebab() {
        let cases = [
            ("ExampleNameX", "example-name-x"),
            ("example1", "example1"),
            ("exampleXY", "example-x-y"),
        ];
        for (input, expected) in cases {
            assert_eq!(casing_transform(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_empty_and_single_char() {
        assert_eq!(casing_transform(""), "");
        assert_eq!(casing_transform("X"), "x");
        assert_eq!(casing_transform("x"), "x");
    }

    #[test]
    fn test_lowercase_passthrough() {
        assert_eq!(casing_transform("route-rule"), "route-rule");
        assert_eq!(casing_transform("v1alpha2"), "v1alpha2");
    }

    #[test]
    fn test_digits_do_not_split() {
        assert_eq!(casing_transform("Http2Port"), "http2-port");
    }
}
