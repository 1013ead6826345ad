//! Token exchange response splitting.
//!
//! Discord answers the code-for-token exchange with a JSON body carrying
//! `access_token`, `refresh_token`, a space-delimited `scope` string, and a few
//! provider-defined extras (`token_type`, `expires_in`, sometimes `webhook`).
//! [`DiscordTokens::from_json_slice`] splits that body into the secrets the
//! engine persists and a typed extra-parameters bag in which `scope` is expanded
//! into a list.

// self
use crate::{
	_prelude::*,
	error::ParseError,
	http,
	secret::Secret,
};

/// Split token exchange response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscordTokens {
	/// Bearer access token issued by the provider.
	pub access_token: Secret,
	/// Refresh token issued alongside the access token.
	pub refresh_token: Secret,
	/// Remaining response fields.
	pub extra_params: DiscordExtraParams,
}
impl DiscordTokens {
	/// Parses a raw token exchange JSON body.
	///
	/// `scope` is split on single spaces in provider order; a missing or empty
	/// scope yields an empty list. Missing `access_token` or `refresh_token`
	/// fields are rejected instead of silently producing empty secrets.
	pub fn from_json_slice(body: &[u8]) -> Result<Self, ParseError> {
		let raw: RawTokenResponse =
			http::deserialize_json(body).map_err(|source| ParseError::TokenResponse { source })?;
		let access_token =
			raw.access_token.ok_or(ParseError::MissingTokenField { field: "access_token" })?;
		let refresh_token =
			raw.refresh_token.ok_or(ParseError::MissingTokenField { field: "refresh_token" })?;
		let scope = match raw.scope.as_deref() {
			None | Some("") => Vec::new(),
			Some(joined) => joined.split(' ').map(ToOwned::to_owned).collect(),
		};

		Ok(Self {
			access_token: Secret::new(access_token),
			refresh_token: Secret::new(refresh_token),
			extra_params: DiscordExtraParams {
				scope,
				token_type: raw.token_type,
				expires_in: raw.expires_in,
				additional: raw.additional,
			},
		})
	}
}

/// Extra parameters surfaced alongside the tokens.
///
/// The known Discord fields are typed; everything else the provider returns
/// lands untouched in `additional` so no key can silently collide with the
/// expanded `scope` list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscordExtraParams {
	/// Granted scopes in provider order.
	pub scope: Vec<String>,
	/// Token type; Discord always issues `Bearer`.
	pub token_type: Option<String>,
	/// Access token lifetime in seconds; Discord issues 604800-second tokens.
	pub expires_in: Option<u64>,
	/// Provider-defined fields passed through unchanged.
	pub additional: BTreeMap<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct RawTokenResponse {
	access_token: Option<String>,
	refresh_token: Option<String>,
	scope: Option<String>,
	token_type: Option<String>,
	expires_in: Option<u64>,
	#[serde(flatten)]
	additional: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn splits_scope_on_single_spaces() {
		let tokens = DiscordTokens::from_json_slice(
			br#"{
				"access_token": "a",
				"refresh_token": "r",
				"scope": "identify email"
			}"#,
		)
		.expect("Token response should parse.");

		assert_eq!(tokens.extra_params.scope, vec!["identify", "email"]);
	}

	#[test]
	fn missing_scope_yields_empty_list() {
		let tokens =
			DiscordTokens::from_json_slice(br#"{"access_token": "a", "refresh_token": "r"}"#)
				.expect("Token response should parse without scope.");

		assert!(tokens.extra_params.scope.is_empty());
	}

	#[test]
	fn known_extras_are_typed_and_rest_pass_through() {
		let tokens = DiscordTokens::from_json_slice(
			br#"{
				"access_token": "a",
				"refresh_token": "r",
				"scope": "webhook.incoming",
				"token_type": "Bearer",
				"expires_in": 604800,
				"webhook": {"id": "1"}
			}"#,
		)
		.expect("Token response should parse.");

		assert_eq!(tokens.access_token.expose(), "a");
		assert_eq!(tokens.refresh_token.expose(), "r");
		assert_eq!(tokens.extra_params.token_type.as_deref(), Some("Bearer"));
		assert_eq!(tokens.extra_params.expires_in, Some(604_800));
		assert_eq!(
			tokens.extra_params.additional.get("webhook"),
			Some(&serde_json::json!({"id": "1"}))
		);
	}

	#[test]
	fn missing_required_fields_fail_loudly() {
		let err = DiscordTokens::from_json_slice(br#"{"refresh_token": "r", "scope": ""}"#)
			.expect_err("Missing access_token must be rejected.");

		assert!(matches!(err, ParseError::MissingTokenField { field: "access_token" }));

		let err = DiscordTokens::from_json_slice(br#"{"access_token": "a"}"#)
			.expect_err("Missing refresh_token must be rejected.");

		assert!(matches!(err, ParseError::MissingTokenField { field: "refresh_token" }));
	}

	#[test]
	fn malformed_json_is_a_parse_error() {
		let err = DiscordTokens::from_json_slice(b"<html>gateway timeout</html>")
			.expect_err("Non-JSON bodies must be rejected.");

		assert!(matches!(err, ParseError::TokenResponse { .. }));
	}
}
