//! The Discord strategy adapter and the capability interface engines consume.
//!
//! [`DiscordStrategy`] is constructed once per application and never mutated
//! afterwards, so a single instance safely serves unlimited concurrent
//! authentication attempts. The enclosing authorization-code engine owns the
//! redirect, state/CSRF verification, code-for-token exchange, and session
//! persistence; it reaches back into this crate through [`OAuth2Strategy`] at
//! three points of the flow: pre-redirect parameter construction, token
//! response parsing, and profile fetching.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	config::{DiscordIntegrationType, DiscordPrompt, DiscordStrategyOptions},
	error::{ConfigError, ParseError},
	http::{self, UserInfoHttpClient},
	obs::{self, HookKind, HookOutcome, HookSpan},
	profile::{DiscordGuild, DiscordProfile, DiscordUser, PROVIDER_NAME},
	scope::{self, DEFAULT_SCOPE, DiscordScope},
	secret::Secret,
	token::DiscordTokens,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Versioned Discord API root shared by every fixed endpoint.
pub const API_BASE: &str = "https://discord.com/api/v10";

const BODY_PREVIEW_LIMIT: usize = 256;

/// Boxed future returned by strategy hooks.
pub type HookFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;
/// Future returned by verification callbacks.
pub type VerifyFuture<User> =
	Pin<Box<dyn Future<Output = Result<User, Box<dyn StdError + Send + Sync>>> + Send>>;
/// Opaque verification callback supplied by the host application.
///
/// The strategy forwards profile + tokens to the callback untouched; whatever
/// session value it produces is handed back to the engine.
pub type VerifyCallback<User> = Box<dyn Fn(DiscordVerifyParams) -> VerifyFuture<User> + Send + Sync>;

#[cfg(feature = "reqwest")]
/// Strategy specialized for the crate's default reqwest transport.
pub type ReqwestDiscordStrategy<User> = DiscordStrategy<User, ReqwestHttpClient>;

/// Everything the engine hands to the verification callback after the exchange.
#[derive(Debug)]
pub struct DiscordVerifyParams {
	/// Normalized profile fetched with the fresh access token.
	pub profile: DiscordProfile,
	/// Split token exchange response.
	pub tokens: DiscordTokens,
}

/// Capability interface the authorization-code engine holds.
///
/// Engines are parameterized by this trait instead of subclassing a provider
/// base type; the strategy supplies provider-specific behavior and endpoint
/// metadata, nothing more.
pub trait OAuth2Strategy {
	/// Profile shape produced by [`user_profile`](Self::user_profile).
	type Profile;
	/// Token shape produced by [`parse_token_response`](Self::parse_token_response).
	type Tokens;
	/// Session value produced by the verification callback.
	type User;

	/// Registered provider name.
	fn name(&self) -> &'static str;
	/// Fixed authorization endpoint.
	fn authorization_endpoint(&self) -> &Url;
	/// Fixed token endpoint.
	fn token_endpoint(&self) -> &Url;
	/// OAuth2 client identifier.
	fn client_id(&self) -> &str;
	/// OAuth2 client secret.
	fn client_secret(&self) -> &Secret;
	/// Redirect URI registered for the application.
	fn callback_url(&self) -> &Url;
	/// Provider-specific query parameters appended to the authorization redirect.
	fn authorization_params(&self) -> Vec<(&'static str, String)>;
	/// Splits a raw token exchange body into tokens + extra parameters.
	fn parse_token_response(&self, body: &[u8]) -> Result<Self::Tokens>;
	/// Fetches and normalizes the provider profile for an access token.
	fn user_profile<'a>(&'a self, access_token: &'a str) -> HookFuture<'a, Self::Profile>;
	/// Runs the host application's verification callback.
	fn verify<'a>(
		&'a self,
		profile: Self::Profile,
		tokens: Self::Tokens,
	) -> HookFuture<'a, Self::User>;
}

/// Discord OAuth2 strategy adapter.
///
/// Construction validates the scope/integration-type invariant once and fixes
/// the effective scope string; all fields stay immutable for the adapter's
/// lifetime.
pub struct DiscordStrategy<User, C>
where
	C: ?Sized + UserInfoHttpClient,
{
	authorization_endpoint: Url,
	token_endpoint: Url,
	user_info_endpoint: Url,
	user_guilds_endpoint: Url,
	client_id: String,
	client_secret: Secret,
	callback_url: Url,
	scope: String,
	integration_type: Option<DiscordIntegrationType>,
	prompt: Option<DiscordPrompt>,
	http_client: Arc<C>,
	verify: VerifyCallback<User>,
}
#[cfg(feature = "reqwest")]
impl<User> DiscordStrategy<User, ReqwestHttpClient> {
	/// Creates a strategy with a crate-provisioned reqwest transport.
	pub fn new(
		options: DiscordStrategyOptions,
		verify: VerifyCallback<User>,
	) -> Result<Self, ConfigError> {
		Self::with_http_client(options, ReqwestHttpClient::default(), verify)
	}
}
impl<User, C> DiscordStrategy<User, C>
where
	C: ?Sized + UserInfoHttpClient,
{
	/// Creates a strategy that reuses a caller-provided transport.
	///
	/// Fails fast with a [`ConfigError`] when the scope list contains
	/// `applications.commands` and no integration type was supplied; a strategy
	/// that failed construction must not be used.
	pub fn with_http_client(
		options: DiscordStrategyOptions,
		http_client: impl Into<Arc<C>>,
		verify: VerifyCallback<User>,
	) -> Result<Self, ConfigError> {
		let DiscordStrategyOptions {
			client_id,
			client_secret,
			callback_url,
			scope,
			integration_type,
			prompt,
		} = options;
		let scope_list = scope.unwrap_or_else(|| DEFAULT_SCOPE.to_vec());

		if scope_list.contains(&DiscordScope::ApplicationsCommands) && integration_type.is_none() {
			return Err(ConfigError::MissingIntegrationType);
		}

		Ok(Self {
			authorization_endpoint: endpoint("oauth2/authorize")?,
			token_endpoint: endpoint("oauth2/token")?,
			user_info_endpoint: endpoint("users/@me")?,
			user_guilds_endpoint: endpoint("users/@me/guilds")?,
			client_id,
			client_secret,
			callback_url,
			scope: scope::join_scope(&scope_list),
			integration_type,
			prompt,
			http_client: http_client.into(),
			verify,
		})
	}

	/// Overrides the user info endpoint, e.g. to target an API proxy or a mock
	/// server. The authorization and token endpoints stay fixed.
	pub fn with_user_info_endpoint(mut self, url: Url) -> Self {
		self.user_info_endpoint = url;

		self
	}

	/// Overrides the guild list endpoint alongside [`Self::with_user_info_endpoint`].
	pub fn with_user_guilds_endpoint(mut self, url: Url) -> Self {
		self.user_guilds_endpoint = url;

		self
	}

	/// Effective space-joined scope string sent to the provider.
	pub fn scope(&self) -> &str {
		&self.scope
	}

	/// Configured installation context, if any.
	pub fn integration_type(&self) -> Option<DiscordIntegrationType> {
		self.integration_type
	}

	/// Configured consent-screen behavior, if any.
	pub fn prompt(&self) -> Option<DiscordPrompt> {
		self.prompt
	}

	/// Builds the provider-specific authorization query parameters.
	///
	/// Pure function of adapter state: always `scope`, then `integration_type`
	/// and `prompt` only when configured. Repeated calls produce identical
	/// parameter sets.
	pub fn authorization_params(&self) -> Vec<(&'static str, String)> {
		let _guard = HookSpan::new(HookKind::AuthorizationParams, "authorization_params").entered();
		let mut params = vec![("scope", self.scope.clone())];

		if let Some(integration_type) = self.integration_type {
			params.push(("integration_type", integration_type.as_query_value().to_owned()));
		}
		if let Some(prompt) = self.prompt {
			params.push(("prompt", prompt.as_str().to_owned()));
		}

		params
	}

	/// Fetches `/users/@me` with the access token and normalizes the payload.
	pub async fn user_profile(&self, access_token: &str) -> Result<DiscordProfile> {
		const KIND: HookKind = HookKind::UserProfile;

		let span = HookSpan::new(KIND, "user_profile");

		obs::record_hook_outcome(KIND, HookOutcome::Attempt);

		let result = span
			.instrument(async move {
				let raw: DiscordUser =
					self.fetch_json(&self.user_info_endpoint, access_token).await?;

				Ok(DiscordProfile::from(raw))
			})
			.await;

		obs::record_hook_outcome(KIND, outcome_of(&result));

		result
	}

	/// Fetches `/users/@me/guilds`; requires the `guilds` scope on the token.
	pub async fn user_guilds(&self, access_token: &str) -> Result<Vec<DiscordGuild>> {
		const KIND: HookKind = HookKind::UserGuilds;

		let span = HookSpan::new(KIND, "user_guilds");

		obs::record_hook_outcome(KIND, HookOutcome::Attempt);

		let result =
			span.instrument(self.fetch_json(&self.user_guilds_endpoint, access_token)).await;

		obs::record_hook_outcome(KIND, outcome_of(&result));

		result
	}

	/// Splits a raw token exchange body into tokens + extra parameters.
	pub fn parse_token_response(&self, body: &[u8]) -> Result<DiscordTokens> {
		const KIND: HookKind = HookKind::TokenResponse;

		let _guard = HookSpan::new(KIND, "parse_token_response").entered();

		obs::record_hook_outcome(KIND, HookOutcome::Attempt);

		let result = DiscordTokens::from_json_slice(body).map_err(Error::from);

		obs::record_hook_outcome(KIND, outcome_of(&result));

		result
	}

	/// Forwards profile + tokens to the host application's verification callback.
	pub async fn verify(&self, params: DiscordVerifyParams) -> Result<User> {
		(self.verify)(params).await.map_err(|source| Error::Verify { source })
	}

	async fn fetch_json<T>(&self, url: &Url, access_token: &str) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let response = self.http_client.get_with_bearer(url, access_token).await?;

		if !(200..300).contains(&response.status) {
			return Err(Error::UserInfoStatus {
				status: response.status,
				body_preview: body_preview(&response.body),
			});
		}

		http::deserialize_json(&response.body)
			.map_err(|source| ParseError::UserInfo { source, status: Some(response.status) }.into())
	}
}
impl<User, C> OAuth2Strategy for DiscordStrategy<User, C>
where
	User: 'static,
	C: ?Sized + UserInfoHttpClient,
{
	type Profile = DiscordProfile;
	type Tokens = DiscordTokens;
	type User = User;

	fn name(&self) -> &'static str {
		PROVIDER_NAME
	}

	fn authorization_endpoint(&self) -> &Url {
		&self.authorization_endpoint
	}

	fn token_endpoint(&self) -> &Url {
		&self.token_endpoint
	}

	fn client_id(&self) -> &str {
		&self.client_id
	}

	fn client_secret(&self) -> &Secret {
		&self.client_secret
	}

	fn callback_url(&self) -> &Url {
		&self.callback_url
	}

	fn authorization_params(&self) -> Vec<(&'static str, String)> {
		DiscordStrategy::authorization_params(self)
	}

	fn parse_token_response(&self, body: &[u8]) -> Result<DiscordTokens> {
		DiscordStrategy::parse_token_response(self, body)
	}

	fn user_profile<'a>(&'a self, access_token: &'a str) -> HookFuture<'a, DiscordProfile> {
		Box::pin(DiscordStrategy::user_profile(self, access_token))
	}

	fn verify<'a>(
		&'a self,
		profile: DiscordProfile,
		tokens: DiscordTokens,
	) -> HookFuture<'a, User> {
		Box::pin(DiscordStrategy::verify(self, DiscordVerifyParams { profile, tokens }))
	}
}
impl<User, C> Debug for DiscordStrategy<User, C>
where
	C: ?Sized + UserInfoHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("DiscordStrategy")
			.field("client_id", &self.client_id)
			.field("callback_url", &self.callback_url)
			.field("scope", &self.scope)
			.field("integration_type", &self.integration_type)
			.field("prompt", &self.prompt)
			.finish()
	}
}

fn endpoint(path: &str) -> Result<Url, ConfigError> {
	Url::parse(&format!("{API_BASE}/{path}"))
		.map_err(|source| ConfigError::InvalidEndpoint { source })
}

fn outcome_of<T>(result: &Result<T>) -> HookOutcome {
	if result.is_ok() { HookOutcome::Success } else { HookOutcome::Failure }
}

fn body_preview(body: &[u8]) -> Option<String> {
	if body.is_empty() {
		return None;
	}

	let text = String::from_utf8_lossy(body);
	let mut buf = String::new();

	for (idx, ch) in text.chars().enumerate() {
		if idx >= BODY_PREVIEW_LIMIT {
			buf.push('…');

			break;
		}

		buf.push(ch);
	}

	Some(buf)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		error::TransportError,
		http::{TransportFuture, UserInfoResponse},
	};

	struct NullHttpClient;
	impl UserInfoHttpClient for NullHttpClient {
		fn get_with_bearer<'a>(
			&'a self,
			_url: &'a Url,
			_access_token: &'a str,
		) -> TransportFuture<'a, UserInfoResponse> {
			Box::pin(async {
				Err(TransportError::Io(std::io::Error::other("no transport in unit tests")))
			})
		}
	}

	fn noop_verify() -> VerifyCallback<String> {
		Box::new(|params| Box::pin(async move { Ok(params.profile.id) }))
	}

	fn options(scope: Option<Vec<DiscordScope>>) -> DiscordStrategyOptions {
		DiscordStrategyOptions {
			client_id: "CLIENT_ID".into(),
			client_secret: "CLIENT_SECRET".into(),
			callback_url: Url::parse("https://example.app/callback")
				.expect("Callback fixture should parse successfully."),
			scope,
			integration_type: None,
			prompt: None,
		}
	}

	fn strategy(options: DiscordStrategyOptions) -> DiscordStrategy<String, NullHttpClient> {
		DiscordStrategy::with_http_client(options, NullHttpClient, noop_verify())
			.expect("Strategy fixture should build successfully.")
	}

	#[test]
	fn default_scope_is_identify_email() {
		let strategy = strategy(options(None));

		assert_eq!(strategy.scope(), "identify email");
	}

	#[test]
	fn scope_join_preserves_caller_order() {
		let strategy = strategy(options(Some(vec![
			DiscordScope::Guilds,
			DiscordScope::Email,
			DiscordScope::Identify,
		])));

		assert_eq!(strategy.scope(), "guilds email identify");
	}

	#[test]
	fn commands_scope_requires_integration_type() {
		let err = DiscordStrategy::<String, NullHttpClient>::with_http_client(
			options(Some(vec![
				DiscordScope::Email,
				DiscordScope::ApplicationsCommands,
				DiscordScope::Identify,
			])),
			NullHttpClient,
			noop_verify(),
		)
		.expect_err("Missing integration type must be rejected.");

		assert_eq!(
			err.to_string(),
			"integrationType is required when scope contains applications.commands"
		);
	}

	#[test]
	fn commands_scope_accepts_supplied_integration_type() {
		let mut options = options(Some(vec![
			DiscordScope::Email,
			DiscordScope::ApplicationsCommands,
			DiscordScope::Identify,
		]));

		options.integration_type = Some(DiscordIntegrationType::UserInstall);

		let strategy = strategy(options);
		let params = strategy.authorization_params();

		assert!(params.contains(&("integration_type", "1".to_owned())));
	}

	#[test]
	fn authorization_params_order_and_presence() {
		let mut options = options(None);

		options.prompt = Some(DiscordPrompt::Consent);

		let strategy = strategy(options);
		let params = strategy.authorization_params();

		assert_eq!(
			params,
			vec![("scope", "identify email".to_owned()), ("prompt", "consent".to_owned())]
		);
		assert!(params.iter().all(|(key, _)| *key != "integration_type"));
	}

	#[test]
	fn authorization_params_are_idempotent() {
		let strategy = strategy(options(Some(vec![DiscordScope::Guilds, DiscordScope::Guilds])));

		assert_eq!(strategy.authorization_params(), strategy.authorization_params());
		assert_eq!(strategy.authorization_params(), vec![("scope", "guilds guilds".to_owned())]);
	}

	#[test]
	fn endpoints_are_fixed() {
		let strategy = strategy(options(Some(vec![DiscordScope::Bot])));
		let authorization = OAuth2Strategy::authorization_endpoint(&strategy);

		assert_eq!(authorization.host_str(), Some("discord.com"));
		assert_eq!(authorization.path(), "/api/v10/oauth2/authorize");
		assert_eq!(
			OAuth2Strategy::token_endpoint(&strategy).as_str(),
			"https://discord.com/api/v10/oauth2/token"
		);
		assert_eq!(OAuth2Strategy::name(&strategy), "discord");
	}

	#[tokio::test]
	async fn verify_forwards_profile_to_callback() {
		let strategy = strategy(options(None));
		let raw: DiscordUser = serde_json::from_str(
			r#"{"id": "42", "username": "bob", "discriminator": "0", "global_name": null}"#,
		)
		.expect("Raw user fixture should deserialize.");
		let tokens = DiscordTokens::from_json_slice(
			br#"{"access_token": "a", "refresh_token": "r", "scope": "identify email"}"#,
		)
		.expect("Token fixture should parse.");
		let user = strategy
			.verify(DiscordVerifyParams { profile: raw.into(), tokens })
			.await
			.expect("Verification callback should succeed.");

		assert_eq!(user, "42");
	}
}
