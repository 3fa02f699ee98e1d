//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::{fs, path::PathBuf};

const HEADER: &str = "\
# hanseg configuration
#
# [splitting]   backend is one of auto, mecab, pecab, punct, fast
# [output]      default_format is one of text, json, markdown
# [performance] worker_threads = 0 uses one thread per CPU;
#               cache_capacity = 0 disables memoization

";

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists; pass --force to overwrite it",
                self.output.display()
            );
        }

        fs::write(&self.output, self.generate_template()?)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the file to change the defaults");
        println!("2. Validate it:");
        println!("   hanseg validate -c {}", self.output.display());
        println!("3. Use it:");
        println!("   hanseg split -i input.txt -c {}", self.output.display());

        Ok(())
    }

    /// Commented defaults
    fn generate_template(&self) -> Result<String> {
        Ok(format!("{HEADER}{}", CliConfig::default().to_toml_string()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generated_file_loads_as_defaults() {
        let dir = TempDir::new().unwrap();
        let args = GenerateConfigArgs {
            output: dir.path().join("hanseg.toml"),
            force: false,
        };
        args.execute().unwrap();

        let loaded = CliConfig::load(&args.output).unwrap();
        assert_eq!(loaded, CliConfig::default());
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hanseg.toml");
        fs::write(&path, "keep me").unwrap();

        let args = GenerateConfigArgs {
            output: path.clone(),
            force: false,
        };
        assert!(args.execute().is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");

        let forced = GenerateConfigArgs {
            output: path.clone(),
            force: true,
        };
        forced.execute().unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("[splitting]"));
    }
}
