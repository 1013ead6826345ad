//! Discord OAuth 2.0 strategy: typed scopes, integration types, and profile
//! normalization for authorization-code engines.
//!
//! The crate owns the Discord-specific half of an OAuth 2.0 login: fixed `v10`
//! endpoints, scope and integration-type validation, authorization query
//! parameters, user-info normalization, and token-response splitting. The
//! surrounding authorization-code engine (redirect handling, state/CSRF, code
//! exchange, session persistence) stays outside this crate and consumes a
//! [`strategy::DiscordStrategy`] through the [`strategy::OAuth2Strategy`] trait.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod config;
pub mod error;
pub mod http;
pub mod obs;
pub mod profile;
pub mod scope;
pub mod secret;
pub mod strategy;
pub mod token;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {httpmock as _, tokio as _};
