//! UUID generation
//!
//! v4 random UUIDs plus the name-based v3 (MD5) and v5 (SHA-1) versions
//! with the standard RFC 4122 namespaces or a caller-supplied namespace
//! UUID. Batch generation suffixes the name with `-1`, `-2`, ... so each
//! name-based UUID in a batch stays distinct.

use uuid::Uuid;

use crate::error::{GenError, Result};

/// Name-based UUID version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameVersion {
    /// MD5 hashing (RFC 4122 version 3)
    V3,
    /// SHA-1 hashing (RFC 4122 version 5)
    V5,
}

/// Resolve a namespace selector to a namespace UUID
///
/// Accepts the well-known names `dns`, `url`, `oid` and `x500`
/// (case-insensitive), or any UUID string as a custom namespace.
pub fn resolve_namespace(selector: &str) -> Result<Uuid> {
    match selector.to_ascii_lowercase().as_str() {
        "dns" => Ok(Uuid::NAMESPACE_DNS),
        "url" => Ok(Uuid::NAMESPACE_URL),
        "oid" => Ok(Uuid::NAMESPACE_OID),
        "x500" => Ok(Uuid::NAMESPACE_X500),
        _ => Uuid::parse_str(selector).map_err(|_| {
            GenError::invalid_namespace(format!(
                "'{}' is not dns/url/oid/x500 or a valid UUID",
                selector
            ))
        }),
    }
}

/// Generate `quantity` random v4 UUIDs
pub fn generate_v4(quantity: usize) -> Vec<String> {
    (0..quantity).map(|_| Uuid::new_v4().to_string()).collect()
}

/// Generate `quantity` name-based UUIDs
///
/// For quantities above one, each name gets an `-i` suffix so the results
/// differ; a single UUID uses the name as given.
pub fn generate_named(
    version: NameVersion,
    namespace: &str,
    name: &str,
    quantity: usize,
) -> Result<Vec<String>> {
    if name.is_empty() {
        return Err(GenError::invalid_input(
            "name-based UUIDs require a non-empty name",
        ));
    }
    let ns = resolve_namespace(namespace)?;

    Ok((0..quantity)
        .map(|i| {
            let input = if quantity > 1 {
                format!("{}-{}", name, i + 1)
            } else {
                name.to_string()
            };
            match version {
                NameVersion::V3 => Uuid::new_v3(&ns, input.as_bytes()).to_string(),
                NameVersion::V5 => Uuid::new_v5(&ns, input.as_bytes()).to_string(),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v4_unique() {
        let uuids = generate_v4(10);
        assert_eq!(uuids.len(), 10);
        for pair in uuids.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
        for u in &uuids {
            let parsed = Uuid::parse_str(u).unwrap();
            assert_eq!(parsed.get_version_num(), 4);
        }
    }

    #[test]
    fn test_v5_deterministic() {
        let a = generate_named(NameVersion::V5, "dns", "example.com", 1).unwrap();
        let b = generate_named(NameVersion::V5, "DNS", "example.com", 1).unwrap();
        assert_eq!(a, b);
        // Known value for (NAMESPACE_DNS, "example.com")
        assert_eq!(a[0], "cfbff0d1-9375-5685-968c-48ce8b15ae17");
    }

    #[test]
    fn test_v3_version_number() {
        let uuids = generate_named(NameVersion::V3, "url", "https://example.com", 1).unwrap();
        let parsed = Uuid::parse_str(&uuids[0]).unwrap();
        assert_eq!(parsed.get_version_num(), 3);
    }

    #[test]
    fn test_batch_suffixes_names() {
        let batch = generate_named(NameVersion::V5, "dns", "host", 3).unwrap();
        assert_eq!(batch.len(), 3);
        // Suffixed names must all hash differently
        assert_ne!(batch[0], batch[1]);
        assert_ne!(batch[1], batch[2]);
        // And differ from the unsuffixed single result
        let single = generate_named(NameVersion::V5, "dns", "host", 1).unwrap();
        assert_ne!(batch[0], single[0]);
    }

    #[test]
    fn test_custom_namespace() {
        let ns = "6ba7b810-9dad-11d1-80b4-00c04fd430c8"; // same as DNS
        let custom = generate_named(NameVersion::V5, ns, "example.com", 1).unwrap();
        let builtin = generate_named(NameVersion::V5, "dns", "example.com", 1).unwrap();
        assert_eq!(custom, builtin);
    }

    #[test]
    fn test_invalid_namespace() {
        assert!(matches!(
            generate_named(NameVersion::V5, "nope", "x", 1),
            Err(GenError::InvalidNamespace(_))
        ));
    }

    #[test]
    fn test_empty_name() {
        assert!(matches!(
            generate_named(NameVersion::V3, "dns", "", 1),
            Err(GenError::InvalidInput(_))
        ));
    }
}
