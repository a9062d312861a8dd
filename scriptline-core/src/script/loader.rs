//! Script profile loader
//!
//! Manages embedded script profiles with process-wide caching.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::profile::ScriptProfile;
use crate::error::ConfigError;

/// Embedded script profiles
static EMBEDDED: OnceLock<HashMap<String, Arc<ScriptProfile>>> = OnceLock::new();

/// TOML source of the built-in Shan profile
pub const SHAN_PROFILE_TOML: &str = include_str!("../../configs/scripts/shan.toml");

/// Load an embedded script profile by code or name
pub fn get_profile(code: &str) -> Result<Arc<ScriptProfile>, ConfigError> {
    // Initialize embedded profiles on first access
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        match ScriptProfile::from_toml_str(SHAN_PROFILE_TOML) {
            Ok(profile) => {
                let profile = Arc::new(profile);
                map.insert("shn".to_string(), Arc::clone(&profile));
                map.insert("shan".to_string(), profile);
            }
            Err(e) => {
                log::warn!("Failed to load embedded Shan profile: {e}");
            }
        }

        map
    });

    embedded
        .get(&code.to_lowercase())
        .cloned()
        .ok_or_else(|| ConfigError::UnknownScript {
            code: code.to_string(),
        })
}

/// Codes of the embedded profiles, one per profile
pub fn embedded_codes() -> &'static [(&'static str, &'static str)] {
    &[("shn", "Shan")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_profile_by_code_and_name() {
        let by_code = get_profile("shn").unwrap();
        let by_name = get_profile("Shan").unwrap();
        assert!(Arc::ptr_eq(&by_code, &by_name));
        assert_eq!(by_code.code(), "shn");
        assert_eq!(by_code.name(), "Shan");
    }

    #[test]
    fn test_unknown_profile() {
        let err = get_profile("klingon").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownScript { .. }));
    }

    #[test]
    fn test_embedded_codes_resolve() {
        for (code, _) in embedded_codes() {
            assert!(get_profile(code).is_ok());
        }
    }
}
