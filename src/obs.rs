//! Optional observability helpers for strategy hooks.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `discord_strategy.hook` with the `hook`
//!   (which strategy operation ran) and `stage` (call site) fields.
//! - Enable `metrics` to increment the `discord_strategy_hook_total` counter for every
//!   attempt/success/failure, labeled by `hook` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Strategy hooks observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookKind {
	/// Authorization query parameter construction.
	AuthorizationParams,
	/// User info fetch + profile normalization.
	UserProfile,
	/// Guild list fetch.
	UserGuilds,
	/// Token exchange response parsing.
	TokenResponse,
}
impl HookKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			HookKind::AuthorizationParams => "authorization_params",
			HookKind::UserProfile => "user_profile",
			HookKind::UserGuilds => "user_guilds",
			HookKind::TokenResponse => "token_response",
		}
	}
}
impl Display for HookKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each hook invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookOutcome {
	/// Entry to a strategy hook.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the engine.
	Failure,
}
impl HookOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			HookOutcome::Attempt => "attempt",
			HookOutcome::Success => "success",
			HookOutcome::Failure => "failure",
		}
	}
}
impl Display for HookOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
