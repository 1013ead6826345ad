//! Strategy configuration: options, integration types, and prompt modes.

// self
use crate::{_prelude::*, error::ConfigError, scope::DiscordScope, secret::Secret};

/// Installation context required when requesting the `applications.commands` scope.
///
/// The wire form is the stringified integer (`"0"` for guild installs, `"1"` for
/// user installs). Deserialization goes through [`TryFrom<u8>`], so configuration
/// files carrying any other integer fail with the canonical message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DiscordIntegrationType {
	/// App is installed to a guild.
	GuildInstall = 0,
	/// App is installed to a user account.
	UserInstall = 1,
}
impl DiscordIntegrationType {
	/// Returns the stringified integer used in authorization query parameters.
	pub fn as_query_value(self) -> &'static str {
		match self {
			DiscordIntegrationType::GuildInstall => "0",
			DiscordIntegrationType::UserInstall => "1",
		}
	}
}
impl From<DiscordIntegrationType> for u8 {
	fn from(value: DiscordIntegrationType) -> Self {
		value as u8
	}
}
impl TryFrom<u8> for DiscordIntegrationType {
	type Error = ConfigError;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(DiscordIntegrationType::GuildInstall),
			1 => Ok(DiscordIntegrationType::UserInstall),
			_ => Err(ConfigError::InvalidIntegrationType),
		}
	}
}
impl Display for DiscordIntegrationType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_query_value())
	}
}

/// Consent-screen behavior requested during authorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscordPrompt {
	/// Skip the authorization screen when the user already granted the scopes.
	None,
	/// Always show the authorization screen.
	Consent,
}
impl DiscordPrompt {
	/// Returns the query parameter value for the prompt mode.
	pub fn as_str(self) -> &'static str {
		match self {
			DiscordPrompt::None => "none",
			DiscordPrompt::Consent => "consent",
		}
	}
}
impl Display for DiscordPrompt {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Configuration the host application supplies when constructing a strategy.
///
/// The scope/integration-type invariant is validated once, when the strategy is
/// constructed, not here.
#[derive(Clone, Debug, Deserialize)]
pub struct DiscordStrategyOptions {
	/// OAuth2 client identifier issued by the Discord developer portal.
	pub client_id: String,
	/// OAuth2 client secret paired with the identifier.
	pub client_secret: Secret,
	/// Redirect URI registered for the application.
	pub callback_url: Url,
	/// Requested scopes in caller order; `identify email` when absent.
	#[serde(default)]
	pub scope: Option<Vec<DiscordScope>>,
	/// Installation context; mandatory when `scope` contains `applications.commands`.
	#[serde(default)]
	pub integration_type: Option<DiscordIntegrationType>,
	/// Consent-screen behavior forwarded to the authorization endpoint.
	#[serde(default)]
	pub prompt: Option<DiscordPrompt>,
}
impl DiscordStrategyOptions {
	/// Creates a new builder seeded with the mandatory client credentials.
	pub fn builder(
		client_id: impl Into<String>,
		client_secret: impl Into<Secret>,
		callback_url: Url,
	) -> DiscordStrategyOptionsBuilder {
		DiscordStrategyOptionsBuilder::new(client_id, client_secret, callback_url)
	}
}

/// Builder for [`DiscordStrategyOptions`] values.
#[derive(Debug)]
pub struct DiscordStrategyOptionsBuilder {
	/// OAuth2 client identifier.
	pub client_id: String,
	/// OAuth2 client secret.
	pub client_secret: Secret,
	/// Redirect URI registered for the application.
	pub callback_url: Url,
	/// Requested scopes, when overriding the default.
	pub scope: Option<Vec<DiscordScope>>,
	/// Installation context, when requesting command registration.
	pub integration_type: Option<DiscordIntegrationType>,
	/// Consent-screen behavior.
	pub prompt: Option<DiscordPrompt>,
}
impl DiscordStrategyOptionsBuilder {
	/// Creates a new builder seeded with the provided credentials.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<Secret>,
		callback_url: Url,
	) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			callback_url,
			scope: None,
			integration_type: None,
			prompt: None,
		}
	}

	/// Overrides the default scope list; caller order is preserved.
	pub fn scope<I>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = DiscordScope>,
	{
		self.scope = Some(scopes.into_iter().collect());

		self
	}

	/// Sets the installation context.
	pub fn integration_type(mut self, integration_type: DiscordIntegrationType) -> Self {
		self.integration_type = Some(integration_type);

		self
	}

	/// Sets the consent-screen behavior.
	pub fn prompt(mut self, prompt: DiscordPrompt) -> Self {
		self.prompt = Some(prompt);

		self
	}

	/// Consumes the builder and produces the options value.
	pub fn build(self) -> DiscordStrategyOptions {
		DiscordStrategyOptions {
			client_id: self.client_id,
			client_secret: self.client_secret,
			callback_url: self.callback_url,
			scope: self.scope,
			integration_type: self.integration_type,
			prompt: self.prompt,
		}
	}
}
