//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

use crate::output::OutputFormat;
use scriptline_engine::embedded_codes;

pub mod generate_config;
pub mod options;
pub mod process;
pub mod render;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize text files and print length-bounded ground-truth chunks
    Process(process::ProcessArgs),

    /// Normalize, chunk and render ground-truth lines with text2image
    Render(render::RenderArgs),

    /// Validate a script profile
    Validate(validate::ValidateArgs),

    /// Generate a script profile template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in script profiles
    Scripts,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Render(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    fn execute(&self) {
        match self {
            ListCommands::Scripts => {
                println!("Built-in scripts:");
                for (code, name) in embedded_codes() {
                    println!("  {code:<8} {name}");
                }
            }
            ListCommands::Formats => {
                println!("Output formats:");
                for format in OutputFormat::ALL {
                    println!("  {:<10} {}", format.name(), format.description());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Scripts,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Scripts"));
    }

    #[test]
    fn test_list_executes() {
        for subcommand in [ListCommands::Scripts, ListCommands::Formats] {
            assert!(Commands::List { subcommand }.execute().is_ok());
        }
    }
}
