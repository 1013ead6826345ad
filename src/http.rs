//! Transport primitives for provider REST lookups.
//!
//! [`UserInfoHttpClient`] is the strategy's only dependency on an HTTP stack.
//! Implementations perform one bearer-authenticated GET and hand back the status
//! code plus raw body bytes; JSON interpretation stays with the strategy so
//! custom transports never deal with provider shapes.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::{_prelude::*, error::TransportError};

/// Boxed future returned by transport implementations.
pub type TransportFuture<'a, T> =
	Pin<Box<dyn Future<Output = Result<T, TransportError>> + 'a + Send>>;

/// Raw response captured from a provider REST lookup.
#[derive(Clone, Debug)]
pub struct UserInfoResponse {
	/// HTTP status code returned by the provider.
	pub status: u16,
	/// Raw response body bytes.
	pub body: Vec<u8>,
}

/// Abstraction over HTTP transports capable of bearer-authenticated GET lookups.
///
/// Implementations must be `Send + Sync + 'static` so a single strategy instance
/// can serve unlimited concurrent authentication attempts, and the futures they
/// return must be `Send` for the lifetime of the in-flight request. Timeouts,
/// retries, and cancellation belong to the transport, not to this crate.
pub trait UserInfoHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Performs one GET against `url` with an `Authorization: Bearer` header.
	fn get_with_bearer<'a>(
		&'a self,
		url: &'a Url,
		access_token: &'a str,
	) -> TransportFuture<'a, UserInfoResponse>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl UserInfoHttpClient for ReqwestHttpClient {
	fn get_with_bearer<'a>(
		&'a self,
		url: &'a Url,
		access_token: &'a str,
	) -> TransportFuture<'a, UserInfoResponse> {
		Box::pin(async move {
			let response = self
				.0
				.get(url.clone())
				.bearer_auth(access_token)
				.send()
				.await
				.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(TransportError::from)?.to_vec();

			Ok(UserInfoResponse { status, body })
		})
	}
}

/// Deserializes a JSON body while tracking the path of the first failure.
pub(crate) fn deserialize_json<T>(
	bytes: &[u8],
) -> Result<T, serde_path_to_error::Error<serde_json::Error>>
where
	T: serde::de::DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(bytes);

	serde_path_to_error::deserialize(&mut deserializer)
}
