//! Script profiles: character sets and rewrite rules
//!
//! A profile is loaded once from TOML and shared immutably; it is the single
//! source of truth for which characters are letters, marks, digits or
//! symbols.

pub mod config;
pub mod loader;
pub mod profile;
pub mod tables;

pub use config::ScriptConfig;
pub use loader::{embedded_codes, get_profile, SHAN_PROFILE_TOML};
pub use profile::ScriptProfile;

#[cfg(test)]
pub(crate) fn shan() -> std::sync::Arc<ScriptProfile> {
    get_profile("shn").unwrap()
}
