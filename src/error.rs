//! Strategy-level error types shared across configuration, transport, and parsing.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical strategy error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Provider returned a body the strategy could not interpret.
	#[error(transparent)]
	Parse(#[from] ParseError),

	/// User info endpoint answered with a non-success status.
	#[error("User info endpoint returned HTTP {status}.")]
	UserInfoStatus {
		/// HTTP status code returned by the provider.
		status: u16,
		/// Truncated response body, when one was readable.
		body_preview: Option<String>,
	},
	/// The host application's verification callback rejected the login.
	#[error("Verification callback rejected the login.")]
	Verify {
		/// Opaque failure produced by the callback.
		#[source]
		source: BoxError,
	},
}
impl Error {
	/// Wraps a verification callback failure inside [`Error::Verify`].
	pub fn verify(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Verify { source: Box::new(src) }
	}
}

/// Configuration failures raised while constructing a strategy.
///
/// A strategy that fails construction must not be used; validation runs once and
/// is never re-checked afterwards.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// `applications.commands` was requested without an installation context.
	#[error("integrationType is required when scope contains applications.commands")]
	MissingIntegrationType,
	/// The integration type is not one of the two defined values.
	#[error("integrationType must be a valid DiscordIntegrationType")]
	InvalidIntegrationType,
	/// A provider endpoint failed to parse.
	#[error("Provider endpoint is invalid.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the provider.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the provider.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Malformed or incomplete provider payloads.
#[derive(Debug, ThisError)]
pub enum ParseError {
	/// User info endpoint responded with JSON that could not be parsed.
	#[error("User info endpoint returned malformed JSON.")]
	UserInfo {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
	/// Token endpoint responded with JSON that could not be parsed.
	#[error("Token endpoint returned malformed JSON.")]
	TokenResponse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Token endpoint response omitted a required field.
	#[error("Token endpoint response is missing {field}.")]
	MissingTokenField {
		/// Name of the absent field.
		field: &'static str,
	},
}
