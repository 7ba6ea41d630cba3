// # Public-IP Resolver
//
// Asks an external lookup service which public address the caller appears
// from, with a bounded retry loop around the HTTP call.
//
// ## Why one URL per family
//
// On a dual-stack host a generic lookup endpoint may answer over either
// family and report the wrong one. Each family is therefore queried against
// an endpoint known to answer only for that family.
//
// ## Retry Contract
//
// Up to 3 sequential attempts, no backoff. Every response body is validated
// against the IP syntax grammar for the requested family before it is
// accepted; a body that fails validation counts as a failed attempt exactly
// like a transport error. When all attempts fail, only the last attempt's
// error is surfaced. No error escapes except through the returned `Result`.

use dnstube_core::{Error, FetchText, IpVersion, Result, is_valid_ip};

/// Lookup endpoint answering only over IPv4
const IPV4_LOOKUP_URL: &str = "http://ipv4bot.whatismyipaddress.com";

/// Lookup endpoint answering only over IPv6
const IPV6_LOOKUP_URL: &str = "http://ipv6bot.whatismyipaddress.com";

/// Attempts made before giving up
const MAX_ATTEMPTS: u32 = 3;

/// The lookup URL used for the given address family
pub fn lookup_url(version: IpVersion) -> &'static str {
    match version {
        IpVersion::V4 => IPV4_LOOKUP_URL,
        IpVersion::V6 => IPV6_LOOKUP_URL,
    }
}

/// Resolve the caller's public IP address for the given family.
///
/// Issues up to [`MAX_ATTEMPTS`] GETs against the family's lookup endpoint,
/// returning the first response body that validates as an address of that
/// family. On exhaustion the last attempt's error is returned.
///
/// # Parameters
///
/// - `version`: Which address family to resolve
/// - `client`: HTTP capability; a shared `reqwest::Client` in production
pub async fn public_ip(version: IpVersion, client: &dyn FetchText) -> Result<String> {
    let url = lookup_url(version);
    let mut last_error = None;

    for attempt in 1..=MAX_ATTEMPTS {
        match fetch_candidate(version, client, url).await {
            Ok(address) => {
                tracing::debug!("resolved public {} address on attempt {}", version, attempt);
                return Ok(address);
            }
            Err(error) => {
                tracing::warn!(
                    "public {} lookup attempt {}/{} failed: {}",
                    version,
                    attempt,
                    MAX_ATTEMPTS,
                    error
                );
                last_error = Some(error);
            }
        }
    }

    Err(last_error
        .unwrap_or_else(|| Error::transport(format!("public {} lookup made no attempts", version))))
}

/// One attempt: GET the body, strip newlines, validate the candidate
async fn fetch_candidate(
    version: IpVersion,
    client: &dyn FetchText,
    url: &str,
) -> Result<String> {
    let body = client.get_text(url).await?;
    let candidate = body.replace('\n', "");

    if !is_valid_ip(version, &candidate) {
        return Err(Error::malformed(format!(
            "expected {} address, got: {:?}",
            version, body
        )));
    }

    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_urls_are_family_specific() {
        assert_eq!(lookup_url(IpVersion::V4), "http://ipv4bot.whatismyipaddress.com");
        assert_eq!(lookup_url(IpVersion::V6), "http://ipv6bot.whatismyipaddress.com");
    }
}
