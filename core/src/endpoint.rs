//! Endpoint parsing and the transport-security policy.
//!
//! The password travels in the request body, so a cleartext endpoint is
//! refused unless it points at the local machine or the caller opts in with
//! `EndpointPolicy::AllowInsecure`.

use std::net::{Ipv4Addr, Ipv6Addr};

use tracing::warn;
use url::{Host, Url};

use crate::error::ZxcvbnError;

/// Which endpoint schemes `ZxcvbnClient` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndpointPolicy {
    /// Only `https`.
    RequireTls,
    /// `https` anywhere, `http` only for loopback hosts.
    #[default]
    AllowLoopback,
    /// `http` anywhere. Non-loopback cleartext endpoints are logged at warn.
    AllowInsecure,
}

/// Validate `endpoint` against `policy` and return the base URL with any
/// trailing slash removed.
pub(crate) fn resolve(endpoint: &str, policy: EndpointPolicy) -> Result<String, ZxcvbnError> {
    let invalid = |reason: &str| ZxcvbnError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(endpoint).map_err(|e| invalid(&e.to_string()))?;
    let host = url.host().ok_or_else(|| invalid("missing host"))?;
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed"));
    }

    match url.scheme() {
        "https" => {}
        "http" => {
            let loopback = is_loopback(&host);
            match policy {
                EndpointPolicy::RequireTls => {
                    return Err(ZxcvbnError::InsecureEndpoint(endpoint.to_string()))
                }
                EndpointPolicy::AllowLoopback if !loopback => {
                    return Err(ZxcvbnError::InsecureEndpoint(endpoint.to_string()))
                }
                EndpointPolicy::AllowInsecure if !loopback => {
                    warn!(endpoint, "passwords will be sent to this endpoint without TLS");
                }
                _ => {}
            }
        }
        other => return Err(invalid(&format!("unsupported scheme {other:?}"))),
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

fn is_loopback(host: &Host<&str>) -> bool {
    match host {
        Host::Domain(domain) => domain.eq_ignore_ascii_case("localhost"),
        Host::Ipv4(addr) => Ipv4Addr::is_loopback(addr),
        Host::Ipv6(addr) => Ipv6Addr::is_loopback(addr),
    }
}
