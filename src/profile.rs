//! Raw Discord user payloads and the normalized profile handed to host applications.

// self
use crate::_prelude::*;

/// Provider tag attached to every normalized profile.
pub const PROVIDER_NAME: &str = "discord";

/// Raw user object returned by `/users/@me`.
///
/// <https://discord.com/developers/docs/resources/user#user-object>
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordUser {
	/// The user's id.
	pub id: String,
	/// The user's username, not unique across the platform.
	pub username: String,
	/// The user's 4-digit discord-tag (`0` for migrated accounts).
	pub discriminator: String,
	/// The user's display name, if set.
	pub global_name: Option<String>,
	/// The user's avatar hash.
	pub avatar: Option<String>,
	/// Whether the user belongs to an OAuth2 application.
	pub bot: Option<bool>,
	/// Whether the user is an Official Discord System user.
	pub system: Option<bool>,
	/// Whether the user has two factor enabled on their account.
	pub mfa_enabled: Option<bool>,
	/// The user's banner hash.
	pub banner: Option<String>,
	/// The user's banner color as an integer representation of a hex color code.
	pub accent_color: Option<u32>,
	/// The user's chosen language option.
	pub locale: Option<String>,
	/// Whether the email on this account has been verified.
	pub verified: Option<bool>,
	/// The user's email; only present with the `email` scope.
	pub email: Option<String>,
	/// The flags on a user's account.
	pub flags: Option<u64>,
	/// The type of Nitro subscription on a user's account.
	pub premium_type: Option<u8>,
	/// The public flags on a user's account.
	pub public_flags: Option<u64>,
	/// The user's avatar decoration hash.
	pub avatar_decoration: Option<String>,
}

/// Single wrapped value inside the normalized `emails`/`photos` lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileValue {
	/// The wrapped value.
	pub value: String,
}

/// Normalized profile shape consumed by host applications.
///
/// `display_name` prefers the provider's global name and falls back to the
/// username; `emails` and `photos` are single-element lists present only when
/// the raw payload carried a non-null value. The raw payload is retained
/// verbatim in `raw`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiscordProfile {
	/// Provider tag; always [`PROVIDER_NAME`].
	pub provider: &'static str,
	/// The user's id.
	pub id: String,
	/// Global name when set, otherwise the username.
	pub display_name: String,
	/// Single-element email list, when the raw payload carried one.
	pub emails: Option<[ProfileValue; 1]>,
	/// Single-element avatar-hash list, when the raw payload carried one.
	pub photos: Option<[ProfileValue; 1]>,
	/// Raw payload as returned by the provider.
	pub raw: DiscordUser,
}
impl From<DiscordUser> for DiscordProfile {
	fn from(raw: DiscordUser) -> Self {
		let display_name = raw.global_name.clone().unwrap_or_else(|| raw.username.clone());
		let emails = raw.email.clone().map(|value| [ProfileValue { value }]);
		let photos = raw.avatar.clone().map(|value| [ProfileValue { value }]);

		Self { provider: PROVIDER_NAME, id: raw.id.clone(), display_name, emails, photos, raw }
	}
}

/// Guild features advertised on [`DiscordGuild`].
///
/// <https://discord.com/developers/docs/resources/guild#guild-object-guild-features>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscordGuildFeature {
	/// Guild has access to set an animated guild banner image.
	AnimatedBanner,
	/// Guild has access to set an animated guild icon.
	AnimatedIcon,
	/// Guild is using the old permissions configuration behavior.
	ApplicationCommandPermissionsV2,
	/// Guild has set up auto moderation rules.
	AutoModeration,
	/// Guild has access to set a guild banner image.
	Banner,
	/// Guild can enable the welcome screen and discovery, and receives community updates.
	Community,
	/// Guild has been set as a support server on the App Directory.
	DeveloperSupportServer,
	/// Guild is able to be discovered in the directory.
	Discoverable,
	/// Guild is able to be featured in the directory.
	Featurable,
	/// Guild has paused invites, preventing new users from joining.
	InvitesDisabled,
	/// Guild has access to set an invite splash background.
	InviteSplash,
	/// Guild has enabled membership screening.
	MemberVerificationGateEnabled,
	/// Guild has enabled monetization.
	MonetizationEnabled,
	/// Guild has increased custom sticker slots.
	MoreStickers,
	/// Guild has access to create announcement channels.
	News,
	/// Guild is partnered.
	Partnered,
	/// Guild can be previewed before joining via membership screening or the directory.
	PreviewEnabled,
	/// Guild is able to set role icons.
	RoleIcons,
	/// Guild has enabled ticketed events.
	TicketedEventsEnabled,
	/// Guild has access to set a vanity URL.
	VanityUrl,
	/// Guild is verified.
	Verified,
	/// Guild has access to set 384kbps bitrate in voice.
	VipRegions,
	/// Guild has enabled the welcome screen.
	WelcomeScreenEnabled,
	/// Feature added by Discord after this crate was published.
	#[serde(other)]
	Unrecognized,
}

/// Guild summary returned by `/users/@me/guilds` with the `guilds` scope.
///
/// <https://discord.com/developers/docs/resources/user#get-current-user-guilds>
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordGuild {
	/// Guild id.
	pub id: String,
	/// Guild name.
	pub name: String,
	/// Icon hash.
	pub icon: Option<String>,
	/// True if the user owns the guild.
	pub owner: bool,
	/// Total permissions for the user in the guild as a stringified bitset.
	pub permissions: String,
	/// Enabled guild features.
	pub features: Vec<DiscordGuildFeature>,
}
