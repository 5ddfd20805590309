//! Factory table settings.
//!
//! Settings can be built in code, deserialized with serde, or read from the
//! environment:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `REINHARDT_DOM_MODE` | `development` / `dev`, `production` / `prod` |
//! | `REINHARDT_DOM_COLLISION_POLICY` | `override`, `reject` |

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{DomError, DomResult};

/// Environment variable selecting the build mode.
pub const MODE_ENV: &str = "REINHARDT_DOM_MODE";

/// Environment variable selecting the collision policy.
pub const COLLISION_POLICY_ENV: &str = "REINHARDT_DOM_COLLISION_POLICY";

/// Selects whether factories validate descriptors before construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
	/// Factories run the descriptor validator first.
	#[serde(alias = "dev")]
	Development,
	/// Factories construct directly.
	#[serde(alias = "prod")]
	Production,
}

impl BuildMode {
	/// Mode matching the current compilation profile.
	pub const fn from_build() -> Self {
		if cfg!(debug_assertions) {
			Self::Development
		} else {
			Self::Production
		}
	}

	/// Returns `true` for [`BuildMode::Development`].
	pub const fn validates(self) -> bool {
		matches!(self, Self::Development)
	}
}

impl Default for BuildMode {
	fn default() -> Self {
		Self::from_build()
	}
}

impl FromStr for BuildMode {
	type Err = DomError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"development" | "dev" => Ok(Self::Development),
			"production" | "prod" => Ok(Self::Production),
			_ => Err(DomError::InvalidSetting {
				key: MODE_ENV.to_string(),
				value: s.to_string(),
			}),
		}
	}
}

impl fmt::Display for BuildMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Development => write!(f, "development"),
			Self::Production => write!(f, "production"),
		}
	}
}

/// What injection does when a tag is already registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
	/// The injected factory replaces the existing one.
	#[default]
	Override,
	/// The whole injection batch is refused.
	Reject,
}

impl FromStr for CollisionPolicy {
	type Err = DomError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"override" => Ok(Self::Override),
			"reject" => Ok(Self::Reject),
			_ => Err(DomError::InvalidSetting {
				key: COLLISION_POLICY_ENV.to_string(),
				value: s.to_string(),
			}),
		}
	}
}

/// Settings for building a [`FactoryTable`](crate::table::FactoryTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct DomSettings {
	/// Build mode used for every factory in the table.
	pub mode: BuildMode,
	/// Injection collision policy.
	pub collision_policy: CollisionPolicy,
}

impl DomSettings {
	/// Creates settings with the given mode and the default policy.
	pub fn new(mode: BuildMode) -> Self {
		Self {
			mode,
			collision_policy: CollisionPolicy::default(),
		}
	}

	/// Set the collision policy
	pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
		self.collision_policy = policy;
		self
	}

	/// Reads settings from the environment, falling back to defaults for
	/// unset variables.
	///
	/// # Errors
	///
	/// Returns [`DomError::InvalidSetting`] if a variable is set to an
	/// unrecognised value.
	pub fn from_env() -> DomResult<Self> {
		let mut settings = Self::default();
		if let Ok(mode) = env::var(MODE_ENV) {
			settings.mode = mode.parse()?;
		}
		if let Ok(policy) = env::var(COLLISION_POLICY_ENV) {
			settings.collision_policy = policy.parse()?;
		}
		Ok(settings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serial_test::serial;

	// SAFETY: env mutation is serialised by #[serial].
	fn set_var(key: &str, value: &str) {
		unsafe { env::set_var(key, value) }
	}

	fn remove_var(key: &str) {
		unsafe { env::remove_var(key) }
	}

	#[rstest]
	#[case("development", BuildMode::Development)]
	#[case("dev", BuildMode::Development)]
	#[case("Production", BuildMode::Production)]
	#[case(" prod ", BuildMode::Production)]
	fn test_parse_build_mode(#[case] input: &str, #[case] expected: BuildMode) {
		assert_eq!(input.parse::<BuildMode>().unwrap(), expected);
	}

	#[rstest]
	fn test_parse_build_mode_invalid() {
		let err = "staging".parse::<BuildMode>().unwrap_err();
		assert_eq!(
			err,
			DomError::InvalidSetting {
				key: MODE_ENV.to_string(),
				value: "staging".to_string(),
			}
		);
	}

	#[rstest]
	fn test_default_policy_is_override() {
		assert_eq!(DomSettings::default().collision_policy, CollisionPolicy::Override);
	}

	#[rstest]
	fn test_default_mode_follows_build_profile() {
		assert_eq!(
			BuildMode::default().validates(),
			cfg!(debug_assertions)
		);
	}

	#[rstest]
	fn test_deserialize_settings() {
		let settings: DomSettings =
			serde_json::from_str(r#"{"mode": "prod", "collision_policy": "reject"}"#).unwrap();
		assert_eq!(settings.mode, BuildMode::Production);
		assert_eq!(settings.collision_policy, CollisionPolicy::Reject);
	}

	#[rstest]
	fn test_deserialize_partial_settings() {
		let settings: DomSettings = serde_json::from_str(r#"{"mode": "development"}"#).unwrap();
		assert_eq!(settings.mode, BuildMode::Development);
		assert_eq!(settings.collision_policy, CollisionPolicy::Override);
	}

	#[rstest]
	#[serial(dom_env)]
	fn test_from_env() {
		set_var(MODE_ENV, "production");
		set_var(COLLISION_POLICY_ENV, "reject");

		let settings = DomSettings::from_env().unwrap();

		remove_var(MODE_ENV);
		remove_var(COLLISION_POLICY_ENV);
		assert_eq!(settings.mode, BuildMode::Production);
		assert_eq!(settings.collision_policy, CollisionPolicy::Reject);
	}

	#[rstest]
	#[serial(dom_env)]
	fn test_from_env_unset_uses_defaults() {
		remove_var(MODE_ENV);
		remove_var(COLLISION_POLICY_ENV);

		assert_eq!(DomSettings::from_env().unwrap(), DomSettings::default());
	}

	#[rstest]
	#[serial(dom_env)]
	fn test_from_env_invalid_policy() {
		set_var(COLLISION_POLICY_ENV, "merge");

		let result = DomSettings::from_env();

		remove_var(COLLISION_POLICY_ENV);
		assert!(matches!(result, Err(DomError::InvalidSetting { .. })));
	}
}
