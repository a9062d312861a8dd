//! Tests for loading script profiles from TOML

use std::io::Write;
use std::sync::Arc;

use scriptline_core::{
    get_profile, CharClass, CharacterClassifier, ChunkBuilder, ConfigError, LengthBounds, Mark,
    ScriptConfig, ScriptProfile, SyllableTokenizer, TextNormalizer, SHAN_PROFILE_TOML,
};
use tempfile::NamedTempFile;

/// Toy script over lowercase ASCII, with `,` and `.` as marks
const TOY_PROFILE: &str = r##"
[metadata]
code = "toy"
name = "Toy"

[block]
start = "a"
end = "z"

[letters]
ranges = [{ from = "a", to = "z" }]

[punctuation]
clause_final = ","
sentence_final = "."

[digits]
ranges = [{ from = "0", to = "9" }]

[rewrites]
length_mark = "h"
reorder = [{ from = "ie", to = "ei" }]

[symbols]
chars = ["#"]
"##;

fn write_profile(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_embedded_profile_round_trips_through_serde() {
    let config: ScriptConfig = toml::from_str(SHAN_PROFILE_TOML).unwrap();
    assert_eq!(config.metadata.code, "shn");
    assert_eq!(config.punctuation.sentence_final, '။');

    let rendered = toml::to_string(&config).unwrap();
    let profile = ScriptProfile::from_toml_str(&rendered).unwrap();
    assert_eq!(profile.code(), "shn");
    assert_eq!(profile.classify('ၵ'), CharClass::ScriptLetter);
}

#[test]
fn test_profile_from_file_drives_pipeline() {
    let file = write_profile(TOY_PROFILE);
    let profile = Arc::new(ScriptProfile::from_file(file.path()).unwrap());

    assert_eq!(profile.classify(','), CharClass::ScriptPunct(Mark::ClauseFinal));
    assert_eq!(profile.classify('7'), CharClass::Digit);
    assert_eq!(profile.classify('A'), CharClass::Other);

    let normalizer = TextNormalizer::new(Arc::clone(&profile));
    assert_eq!(
        normalizer.normalize("shhhe piece #tag , Ab end.", true),
        "she peice tag, b end."
    );

    let tokenizer = SyllableTokenizer::new(Arc::clone(&profile));
    let builder = ChunkBuilder::new(profile, LengthBounds::new(3, 10).unwrap());
    let set = builder.chunk_text("alpha beta, gamma. delta", &tokenizer);
    assert_eq!(set.texts(), vec!["alpha", "beta,", "gamma.", "delta"]);
}

#[test]
fn test_missing_file() {
    let err = ScriptProfile::from_file(std::path::Path::new("/nonexistent/toy.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_malformed_toml() {
    let err = ScriptProfile::from_toml_str("[metadata\ncode = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_invalid_profile_rejected() {
    let broken = TOY_PROFILE.replace(r#"sentence_final = ".""#, r#"sentence_final = ",""#);
    let err = ScriptProfile::from_toml_str(&broken).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidProfile(_)));
}

#[test]
fn test_embedded_profile_is_shared() {
    let a = get_profile("shn").unwrap();
    let b = get_profile("SHN").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}
