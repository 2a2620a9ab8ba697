//! Blocking client for a remote zxcvbn password-strength service.
//!
//! # Overview
//! Sends a candidate password to zxcvbn-server (`POST /zxcvbn`, form field
//! `password`) and decodes the JSON answer into `StrengthResult`. The
//! estimation itself happens on the server.
//!
//! # Design
//! - `ZxcvbnClient` is stateless: it holds only the validated base URL.
//! - The operation is split into `build_estimate_strength` (produces the
//!   request) and `parse_estimate_strength` (consumes the response), so the
//!   I/O boundary is explicit. `ZxcvbnRemote` joins the halves with a
//!   `Transport`.
//! - With the default `ureq` feature, `ZxcvbnRemote::new(endpoint)` gives a
//!   ready blocking client.
//! - Result types are defined independently from the mock-server crate;
//!   integration tests catch schema drift.
//!
//! ```no_run
//! # fn main() -> Result<(), zxcvbn_remote::ZxcvbnError> {
//! let remote = zxcvbn_remote::ZxcvbnRemote::new("https://zxcvbn.example.com")?;
//! let result = remote.estimate_strength("correct horse battery staple")?;
//! println!("score {}", result.score());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoint;
pub mod error;
pub mod http;
#[cfg(feature = "ureq")]
pub mod transport;
pub mod types;

pub use client::{ZxcvbnClient, ZxcvbnRemote};
pub use endpoint::EndpointPolicy;
pub use error::ZxcvbnError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::{AttackScenario, CrackTimeDisplay, CrackTimeSeconds, Feedback, StrengthResult};
