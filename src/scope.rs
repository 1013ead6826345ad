//! Discord scope vocabulary and helpers.

// crates.io
use serde::{Deserializer, Serializer, de::Error as DeError};
// self
use crate::_prelude::*;

/// Scopes requested when the caller supplies none; joins to `identify email`.
pub const DEFAULT_SCOPE: &[DiscordScope] = &[DiscordScope::Identify, DiscordScope::Email];

/// Error returned when a string is not a known Discord scope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("Unknown Discord scope: {scope}.")]
pub struct ScopeParseError {
	/// The offending scope string.
	pub scope: String,
}

/// Every scope Discord's OAuth2 implementation defines.
///
/// <https://discord.com/developers/docs/topics/oauth2#shared-resources-oauth2-scopes>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiscordScope {
	/// Read a user's activity data.
	ActivitiesRead,
	/// Update a user's activity.
	ActivitiesWrite,
	/// Read build data for a user's applications.
	ApplicationsBuildsRead,
	/// Upload/update builds for a user's applications.
	ApplicationsBuildsUpload,
	/// Register slash commands; requires an integration type at configuration time.
	ApplicationsCommands,
	/// Update slash commands via bearer token.
	ApplicationsCommandsUpdate,
	/// Read entitlements for a user's applications.
	ApplicationsEntitlements,
	/// Update store data for a user's applications.
	ApplicationsStoreUpdate,
	/// Add the bot to the user's selected guild.
	Bot,
	/// Access linked third-party accounts.
	Connections,
	/// Access the user's email address.
	Email,
	/// Join users to a group DM.
	GdmJoin,
	/// Access basic information about the user's guilds.
	Guilds,
	/// Join users to a guild.
	GuildsJoin,
	/// Read a user's member information in a guild.
	GuildsMembersRead,
	/// Access the user's account without email.
	Identify,
	/// Read messages from client RPC channels.
	MessagesRead,
	/// Access the user's relationships.
	RelationshipsRead,
	/// Control the user's local Discord client over RPC.
	Rpc,
	/// Update a user's activity over RPC.
	RpcActivitiesWrite,
	/// Receive notifications over RPC.
	RpcNotificationsRead,
	/// Read voice settings over RPC.
	RpcVoiceRead,
	/// Update voice settings over RPC.
	RpcVoiceWrite,
	/// Generate a webhook returned in the token response.
	WebhookIncoming,
}
impl DiscordScope {
	/// Returns the provider-defined scope string.
	pub fn as_str(self) -> &'static str {
		match self {
			DiscordScope::ActivitiesRead => "activities.read",
			DiscordScope::ActivitiesWrite => "activities.write",
			DiscordScope::ApplicationsBuildsRead => "applications.builds.read",
			DiscordScope::ApplicationsBuildsUpload => "applications.builds.upload",
			DiscordScope::ApplicationsCommands => "applications.commands",
			DiscordScope::ApplicationsCommandsUpdate => "applications.commands.update",
			DiscordScope::ApplicationsEntitlements => "applications.entitlements",
			DiscordScope::ApplicationsStoreUpdate => "applications.store.update",
			DiscordScope::Bot => "bot",
			DiscordScope::Connections => "connections",
			DiscordScope::Email => "email",
			DiscordScope::GdmJoin => "gdm.join",
			DiscordScope::Guilds => "guilds",
			DiscordScope::GuildsJoin => "guilds.join",
			DiscordScope::GuildsMembersRead => "guilds.members.read",
			DiscordScope::Identify => "identify",
			DiscordScope::MessagesRead => "messages.read",
			DiscordScope::RelationshipsRead => "relationships.read",
			DiscordScope::Rpc => "rpc",
			DiscordScope::RpcActivitiesWrite => "rpc.activities.write",
			DiscordScope::RpcNotificationsRead => "rpc.notifications.read",
			DiscordScope::RpcVoiceRead => "rpc.voice.read",
			DiscordScope::RpcVoiceWrite => "rpc.voice.write",
			DiscordScope::WebhookIncoming => "webhook.incoming",
		}
	}
}
impl Display for DiscordScope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for DiscordScope {
	type Err = ScopeParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"activities.read" => Ok(DiscordScope::ActivitiesRead),
			"activities.write" => Ok(DiscordScope::ActivitiesWrite),
			"applications.builds.read" => Ok(DiscordScope::ApplicationsBuildsRead),
			"applications.builds.upload" => Ok(DiscordScope::ApplicationsBuildsUpload),
			"applications.commands" => Ok(DiscordScope::ApplicationsCommands),
			"applications.commands.update" => Ok(DiscordScope::ApplicationsCommandsUpdate),
			"applications.entitlements" => Ok(DiscordScope::ApplicationsEntitlements),
			"applications.store.update" => Ok(DiscordScope::ApplicationsStoreUpdate),
			"bot" => Ok(DiscordScope::Bot),
			"connections" => Ok(DiscordScope::Connections),
			"email" => Ok(DiscordScope::Email),
			"gdm.join" => Ok(DiscordScope::GdmJoin),
			"guilds" => Ok(DiscordScope::Guilds),
			"guilds.join" => Ok(DiscordScope::GuildsJoin),
			"guilds.members.read" => Ok(DiscordScope::GuildsMembersRead),
			"identify" => Ok(DiscordScope::Identify),
			"messages.read" => Ok(DiscordScope::MessagesRead),
			"relationships.read" => Ok(DiscordScope::RelationshipsRead),
			"rpc" => Ok(DiscordScope::Rpc),
			"rpc.activities.write" => Ok(DiscordScope::RpcActivitiesWrite),
			"rpc.notifications.read" => Ok(DiscordScope::RpcNotificationsRead),
			"rpc.voice.read" => Ok(DiscordScope::RpcVoiceRead),
			"rpc.voice.write" => Ok(DiscordScope::RpcVoiceWrite),
			"webhook.incoming" => Ok(DiscordScope::WebhookIncoming),
			other => Err(ScopeParseError { scope: other.to_owned() }),
		}
	}
}
impl Serialize for DiscordScope {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(self.as_str())
	}
}
impl<'de> Deserialize<'de> for DiscordScope {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;

		value.parse().map_err(DeError::custom)
	}
}

/// Joins scopes with single spaces, preserving caller order.
///
/// Discord receives the list exactly as configured; no de-duplication or sorting
/// is applied.
pub fn join_scope(scopes: &[DiscordScope]) -> String {
	scopes.iter().map(|scope| scope.as_str()).collect::<Vec<_>>().join(" ")
}
