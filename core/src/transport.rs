//! Blocking `Transport` backed by `ureq`.
//!
//! ureq's automatic status-code-as-error behavior is switched off so 4xx/5xx
//! responses come back as data and the client decides what they mean.
//! Redirects are not followed: the endpoint policy is checked against the
//! configured URL only, and a redirect could move the password to a
//! cleartext or foreign host.

use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl std::fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .max_redirects(0)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Use a caller-configured agent, e.g. one with timeouts or a proxy.
    ///
    /// The agent should be built with `http_status_as_error(false)`;
    /// otherwise error statuses surface as `ZxcvbnError::Transport` instead
    /// of `ZxcvbnError::Http`. It should also be built with
    /// `max_redirects(0)`: a followed redirect bypasses the `EndpointPolicy`
    /// check, which only sees the configured endpoint.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    type Error = ureq::Error;

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ureq::Error> {
        let mut response = match request.method {
            HttpMethod::Post => {
                let mut builder = self.agent.post(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match &request.body {
                    Some(body) => builder.send(body.as_bytes())?,
                    None => builder.send_empty()?,
                }
            }
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string()?;

        Ok(HttpResponse { status, headers, body })
    }
}
