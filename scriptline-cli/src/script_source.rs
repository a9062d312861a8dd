//! Script profile selection for CLI

use std::path::PathBuf;

use scriptline_engine::PipelineConfigBuilder;

/// Source of the script profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSelection {
    /// Embedded profile by code or name
    BuiltIn(String),
    /// External profile file
    External(PathBuf),
}

impl ScriptSelection {
    /// Pick the profile from flags, falling back to the configured code
    pub fn resolve(
        script: Option<&str>,
        script_config: Option<&PathBuf>,
        configured: &str,
    ) -> Self {
        match (script_config, script) {
            (Some(path), _) => ScriptSelection::External(path.clone()),
            (None, Some(code)) => ScriptSelection::BuiltIn(code.to_string()),
            (None, None) => ScriptSelection::BuiltIn(configured.to_string()),
        }
    }

    /// Get the display name for the script source
    pub fn display_name(&self) -> String {
        match self {
            ScriptSelection::BuiltIn(code) => format!("Built-in: {code}"),
            ScriptSelection::External(path) => format!("External: {}", path.display()),
        }
    }

    pub(crate) fn apply(&self, builder: PipelineConfigBuilder) -> PipelineConfigBuilder {
        match self {
            ScriptSelection::BuiltIn(code) => builder.script(code.as_str()),
            ScriptSelection::External(path) => builder.script_file(path.clone()),
        }
    }
}
