#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
// self
use discord_oauth2_strategy::{
	config::DiscordStrategyOptions,
	error::Error,
	scope::DiscordScope,
	strategy::{DiscordStrategy, ReqwestDiscordStrategy, VerifyCallback},
	url::Url,
};

const CLIENT_ID: &str = "client-it";
const CLIENT_SECRET: &str = "secret-it";
const ACCESS_TOKEN: &str = "access-it";

fn noop_verify() -> VerifyCallback<String> {
	Box::new(|params| Box::pin(async move { Ok(params.profile.id) }))
}

fn build_strategy(server: &MockServer) -> ReqwestDiscordStrategy<String> {
	let options = DiscordStrategyOptions::builder(
		CLIENT_ID,
		CLIENT_SECRET,
		Url::parse("https://example.app/callback")
			.expect("Callback URL should parse successfully."),
	)
	.scope([DiscordScope::Identify, DiscordScope::Email, DiscordScope::Guilds])
	.build();

	DiscordStrategy::new(options, noop_verify())
		.expect("Strategy should build successfully.")
		.with_user_info_endpoint(
			Url::parse(&server.url("/users/@me"))
				.expect("Mock user info endpoint should parse successfully."),
		)
		.with_user_guilds_endpoint(
			Url::parse(&server.url("/users/@me/guilds"))
				.expect("Mock guild endpoint should parse successfully."),
		)
}

#[tokio::test]
async fn user_profile_normalizes_payload() {
	let server = MockServer::start_async().await;
	let strategy = build_strategy(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/users/@me")
				.header("authorization", format!("Bearer {ACCESS_TOKEN}"));
			then.status(200).header("content-type", "application/json").body(
				"{\"id\":\"80351110224678912\",\"username\":\"bob\",\"discriminator\":\"0\",\
				\"global_name\":\"Bobby\",\"avatar\":\"8342729096ea3675442027381ff50dfe\",\
				\"email\":\"bob@example.com\",\"verified\":true,\"locale\":\"en-US\",\
				\"mfa_enabled\":true,\"premium_type\":1,\"flags\":64,\"public_flags\":64}",
			);
		})
		.await;
	let profile = strategy
		.user_profile(ACCESS_TOKEN)
		.await
		.expect("Profile fetch should succeed against the mock endpoint.");

	mock.assert_async().await;

	assert_eq!(profile.provider, "discord");
	assert_eq!(profile.id, "80351110224678912");
	assert_eq!(profile.display_name, "Bobby");
	assert_eq!(
		profile.emails.as_ref().map(|[email]| email.value.as_str()),
		Some("bob@example.com")
	);
	assert_eq!(
		profile.photos.as_ref().map(|[photo]| photo.value.as_str()),
		Some("8342729096ea3675442027381ff50dfe")
	);
	assert_eq!(profile.raw.username, "bob");
	assert_eq!(profile.raw.verified, Some(true));
}

#[tokio::test]
async fn user_profile_falls_back_to_username_without_global_name() {
	let server = MockServer::start_async().await;
	let strategy = build_strategy(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/users/@me");
			then.status(200).header("content-type", "application/json").body(
				"{\"id\":\"42\",\"username\":\"bob\",\"discriminator\":\"0\",\"global_name\":null,\
				\"avatar\":null}",
			);
		})
		.await;
	let profile = strategy
		.user_profile(ACCESS_TOKEN)
		.await
		.expect("Profile fetch should succeed against the mock endpoint.");

	mock.assert_async().await;

	assert_eq!(profile.display_name, "bob");
	assert_eq!(profile.emails, None);
	assert_eq!(profile.photos, None);
}

#[tokio::test]
async fn user_profile_surfaces_non_success_statuses() {
	let server = MockServer::start_async().await;
	let strategy = build_strategy(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/users/@me");
			then.status(401)
				.header("content-type", "application/json")
				.body("{\"message\":\"401: Unauthorized\",\"code\":0}");
		})
		.await;
	let err = strategy
		.user_profile("expired-token")
		.await
		.expect_err("Unauthorized responses must surface to the caller.");

	mock.assert_async().await;

	match err {
		Error::UserInfoStatus { status, body_preview } => {
			assert_eq!(status, 401);
			assert!(
				body_preview.as_deref().is_some_and(|preview| preview.contains("Unauthorized")),
				"Body preview should carry the provider message."
			);
		},
		other => panic!("Expected a user info status error, got: {other:?}."),
	}
}

#[tokio::test]
async fn user_profile_rejects_malformed_json() {
	let server = MockServer::start_async().await;
	let strategy = build_strategy(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/users/@me");
			then.status(200)
				.header("content-type", "text/html")
				.body("<html>gateway timeout</html>");
		})
		.await;
	let err = strategy
		.user_profile(ACCESS_TOKEN)
		.await
		.expect_err("Non-JSON bodies must be rejected.");

	mock.assert_async().await;

	assert!(matches!(err, Error::Parse(_)));
}

#[tokio::test]
async fn user_guilds_lists_guild_summaries() {
	let server = MockServer::start_async().await;
	let strategy = build_strategy(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/users/@me/guilds")
				.header("authorization", format!("Bearer {ACCESS_TOKEN}"));
			then.status(200).header("content-type", "application/json").body(
				"[{\"id\":\"197038439483310086\",\"name\":\"Discord Testers\",\"icon\":null,\
				\"owner\":false,\"permissions\":\"6546771968\",\"features\":[\"COMMUNITY\"]}]",
			);
		})
		.await;
	let guilds = strategy
		.user_guilds(ACCESS_TOKEN)
		.await
		.expect("Guild fetch should succeed against the mock endpoint.");

	mock.assert_async().await;

	assert_eq!(guilds.len(), 1);
	assert_eq!(guilds[0].name, "Discord Testers");
	assert!(!guilds[0].owner);
}
