//! Generate config command implementation

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Script code for the new profile
    #[arg(short = 's', long, value_name = "CODE", required = true)]
    pub script_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating script profile template...");
        println!("  Script code: {}", self.script_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Profile template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the character sets and rewrite rules for your script");
        println!("2. Validate your profile:");
        println!(
            "   scriptline validate --script-config {}",
            self.output.display()
        );
        println!("3. Use it for processing:");
        println!(
            "   scriptline process -i input.txt --script-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template profile content
    fn generate_template(&self) -> String {
        format!(
            r#"# Script profile for {code}
#
# Characters are given literally or as "\uXXXX" escapes. Ranges are
# inclusive.

[metadata]
code = "{code}"
name = "Custom Script"

# Unicode block the ground truth is restricted to. Characters outside it
# are removed unless they are whitespace or listed as digits below.
[block]
start = "က"
end = "႟"

# Letters, vowel signs and tone marks
[letters]
chars = []
ranges = [
    {{ from = "က", to = "၉" }},
]

# Clause-final and sentence-final punctuation; chunks prefer to end here
[punctuation]
clause_final = "၊"
sentence_final = "။"

# Digits kept unless digits are disabled
[digits]
ranges = [
    {{ from = "0", to = "9" }},
]

# Syllable segmentation (optional). A syllable starts at every initial
# unless the initial is followed by the killer or preceded by the stacker.
[syllables]
initials = [
    {{ from = "က", to = "အ" }},
]
killer = "်"
stacker = "္"

# Orthographic rewrites (optional)
[rewrites]
# Runs of this mark collapse to one
# length_mark = "ႉ"
reorder = [
    # {{ from = "ab", to = "ba" }},
]

# Symbols removed before anything else (emoji, dingbats, ...)
[symbols]
chars = ["\u200D", "\uFE0F"]
ranges = [
    {{ from = "\U0001F300", to = "\U0001F64F" }},
]
"#,
            code = self.script_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptline_engine::ScriptProfile;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            script_code: "mnw".to_string(),
            output: PathBuf::from("mon.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("mnw"));
    }

    #[test]
    fn test_template_is_a_valid_profile() {
        let args = GenerateConfigArgs {
            script_code: "mnw".to_string(),
            output: PathBuf::from("mon.toml"),
        };

        let profile = ScriptProfile::from_toml_str(&args.generate_template()).unwrap();
        assert_eq!(profile.code(), "mnw");
        assert_eq!(profile.sentence_final(), '။');
        assert_eq!(profile.reorder_rule_count(), 0);
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("profile.toml");

        let args = GenerateConfigArgs {
            script_code: "mnw".to_string(),
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("code = \"mnw\""));
    }
}
