//! Stateless request builder and response parser for zxcvbn-server.
//!
//! # Design
//! `ZxcvbnClient` holds only the validated base URL and carries no mutable
//! state between calls. The estimate operation is split into
//! `build_estimate_strength`, which produces an `HttpRequest`, and
//! `parse_estimate_strength`, which consumes an `HttpResponse`. Hosts that do
//! their own I/O use the two halves directly; `ZxcvbnRemote` glues them to a
//! `Transport` for a single blocking call.

use tracing::debug;
use url::form_urlencoded;

use crate::endpoint::{self, EndpointPolicy};
use crate::error::ZxcvbnError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::StrengthResult;

const ESTIMATE_PATH: &str = "/zxcvbn";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Synchronous, stateless client for the zxcvbn-server API.
#[derive(Debug, Clone)]
pub struct ZxcvbnClient {
    base_url: String,
}

impl ZxcvbnClient {
    /// Create a client for `endpoint` under the default `EndpointPolicy`.
    pub fn new(endpoint: &str) -> Result<Self, ZxcvbnError> {
        Self::with_policy(endpoint, EndpointPolicy::default())
    }

    pub fn with_policy(endpoint: &str, policy: EndpointPolicy) -> Result<Self, ZxcvbnError> {
        Ok(Self {
            base_url: endpoint::resolve(endpoint, policy)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the `POST /zxcvbn` request for `password`.
    ///
    /// Fails with `InvalidPassword` when `password` is empty.
    pub fn build_estimate_strength(&self, password: &str) -> Result<HttpRequest, ZxcvbnError> {
        if password.is_empty() {
            return Err(ZxcvbnError::InvalidPassword);
        }
        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair("password", password)
            .finish();
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{ESTIMATE_PATH}", self.base_url),
            headers: vec![("content-type".to_string(), FORM_CONTENT_TYPE.to_string())],
            body: Some(body),
        })
    }

    /// Decode the server's answer to a `build_estimate_strength` request.
    pub fn parse_estimate_strength(&self, response: HttpResponse) -> Result<StrengthResult, ZxcvbnError> {
        if !response.is_success() {
            return Err(ZxcvbnError::Http {
                status: response.status,
                body: response.body,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}

/// A `ZxcvbnClient` bound to a transport.
#[derive(Debug, Clone)]
pub struct ZxcvbnRemote<T> {
    client: ZxcvbnClient,
    transport: T,
}

impl<T: Transport> ZxcvbnRemote<T> {
    pub fn with_transport(client: ZxcvbnClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &ZxcvbnClient {
        &self.client
    }

    /// Estimate the strength of `password`.
    ///
    /// Performs one blocking round-trip. An empty password fails with
    /// `InvalidPassword` before the transport is touched.
    pub fn estimate_strength(&self, password: &str) -> Result<StrengthResult, ZxcvbnError> {
        let request = self.client.build_estimate_strength(password)?;
        debug!(url = %request.url, "requesting strength estimate");
        let response = self
            .transport
            .execute(&request)
            .map_err(ZxcvbnError::transport)?;
        debug!(status = response.status, "received strength estimate");
        self.client.parse_estimate_strength(response)
    }
}

#[cfg(feature = "ureq")]
impl ZxcvbnRemote<crate::transport::UreqTransport> {
    /// Client for `endpoint` using the default policy and a fresh
    /// `UreqTransport`.
    pub fn new(endpoint: &str) -> Result<Self, ZxcvbnError> {
        Ok(Self::with_transport(
            ZxcvbnClient::new(endpoint)?,
            crate::transport::UreqTransport::new(),
        ))
    }
}
