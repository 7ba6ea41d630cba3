//! IP version selection and candidate-string validation
//!
//! The validator is purely lexical: it answers whether a string is shaped
//! like an address of the requested family, not whether that address is
//! reachable or assigned. It gates the public-IP resolver, which must not
//! hand back a lookup-service response body that merely looks like text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// IP address family selector, passed by value per call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpVersion {
    /// IPv4
    V4,
    /// IPv6
    V6,
}

impl std::fmt::Display for IpVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IpVersion::V4 => write!(f, "IPv4"),
            IpVersion::V6 => write!(f, "IPv6"),
        }
    }
}

/// IPv6 colon-hex grammar: full 8-group form, `::` compression in any single
/// position, IPv4-mapped tails, and a `%zone` suffix on fe80:: link-local
/// forms. Anchored to the whole string (surrounding whitespace tolerated) so
/// a token embedded in unrelated text does not match.
static IPV6_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^\s*(?:
            (?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}
          | (?:[0-9a-fA-F]{1,4}:){1,7}:
          | (?:[0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4}
          | (?:[0-9a-fA-F]{1,4}:){1,5}(?::[0-9a-fA-F]{1,4}){1,2}
          | (?:[0-9a-fA-F]{1,4}:){1,4}(?::[0-9a-fA-F]{1,4}){1,3}
          | (?:[0-9a-fA-F]{1,4}:){1,3}(?::[0-9a-fA-F]{1,4}){1,4}
          | (?:[0-9a-fA-F]{1,4}:){1,2}(?::[0-9a-fA-F]{1,4}){1,5}
          | [0-9a-fA-F]{1,4}:(?::[0-9a-fA-F]{1,4}){1,6}
          | :(?:(?::[0-9a-fA-F]{1,4}){1,7}|:)
          | fe80:(?::[0-9a-fA-F]{0,4}){0,4}%[0-9a-zA-Z]+
          | ::(?:ffff(?::0{1,4})?:)?
            (?:(?:25[0-5]|(?:2[0-4]|1?[0-9])?[0-9])\.){3}
            (?:25[0-5]|(?:2[0-4]|1?[0-9])?[0-9])
          | (?:[0-9a-fA-F]{1,4}:){1,4}:
            (?:(?:25[0-5]|(?:2[0-4]|1?[0-9])?[0-9])\.){3}
            (?:25[0-5]|(?:2[0-4]|1?[0-9])?[0-9])
        )\s*$",
    )
    .expect("IPv6 grammar regex compiles")
});

/// Check whether `candidate` is lexically a valid address of the given family.
///
/// - Empty and whitespace-only strings are invalid for both families.
/// - IPv4: exactly four `.`-separated parts, each parsing as a `u8`
///   (so `256.1.1.1` and `1.2.3` are rejected).
/// - IPv6: matched against [`IPV6_GRAMMAR`].
pub fn is_valid_ip(version: IpVersion, candidate: &str) -> bool {
    if candidate.trim().is_empty() {
        return false;
    }

    match version {
        IpVersion::V4 => {
            let parts: Vec<&str> = candidate.split('.').collect();
            parts.len() == 4 && parts.iter().all(|part| part.parse::<u8>().is_ok())
        }
        IpVersion::V6 => IPV6_GRAMMAR.is_match(candidate),
    }
}
