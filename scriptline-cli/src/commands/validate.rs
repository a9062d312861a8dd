//! Validate command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use scriptline_engine::{DocumentProcessor, PipelineConfig};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to script profile to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub script_config: PathBuf,

    /// Sample text to normalize with the profile
    #[arg(long, value_name = "TEXT")]
    pub sample: Option<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating script profile: {}",
            self.script_config.display()
        );

        let loaded = PipelineConfig::builder()
            .script_file(self.script_config.clone())
            .build()
            .and_then(DocumentProcessor::with_config);

        match loaded {
            Ok(processor) => {
                let profile = processor.profile();
                let (start, end) = profile.block();
                println!("✓ Profile is valid!");
                println!("  Script code: {}", profile.code());
                println!("  Script name: {}", profile.name());
                println!(
                    "  Block: U+{:04X}..U+{:04X}",
                    start as u32, end as u32
                );
                println!(
                    "  Clause / sentence marks: {} {}",
                    profile.clause_final(),
                    profile.sentence_final()
                );
                println!("  Reorder rules: {}", profile.reorder_rule_count());
                if let Some(sample) = &self.sample {
                    println!("  Normalized sample: {}", processor.normalize(sample));
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Profile is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_valid_profile() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"
[metadata]
code = "toy"
name = "Toy"

[block]
start = "a"
end = "z"

[letters]
ranges = [{{ from = "a", to = "z" }}]

[punctuation]
clause_final = ","
sentence_final = "."
"#
        )
        .unwrap();

        let args = ValidateArgs {
            script_config: temp_file.path().to_path_buf(),
            sample: Some("abc, DEF.".to_string()),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_profile() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"
[metadata]
code = ""
name = "Toy"

[block]
start = "a"
end = "z"

[letters]
chars = ["a"]

[punctuation]
clause_final = ","
sentence_final = "."
"#
        )
        .unwrap();

        let args = ValidateArgs {
            script_config: temp_file.path().to_path_buf(),
            sample: None,
        };
        assert!(args.execute().is_err());
    }
}
