//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stanza content pipeline CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file name (default: stanza.toml)
    #[arg(short = 'C', long, default_value = "stanza.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Build arguments shared by build-like commands
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(long)]
    pub clean: bool,

    /// Override base URL for the site.
    ///
    /// Useful for CI/CD deployments where the production URL differs from
    /// local development. This avoids modifying stanza.toml, keeping the
    /// source file clean.
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// Seed the related-items sampler for reproducible builds.
    ///
    /// Without a seed, related-items selection follows the configured
    /// sampling mode (random by default).
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the route table and data modules from the content directory
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },
}

impl Cli {
    /// Build arguments of the active command.
    pub const fn build_args(&self) -> &BuildArgs {
        match &self.command {
            Commands::Build { build_args } => build_args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build() {
        let cli = Cli::parse_from(["stanza", "build"]);
        assert!(matches!(cli.command, Commands::Build { .. }));
        assert!(!cli.build_args().clean);
    }

    #[test]
    fn test_parse_build_flags() {
        let cli = Cli::parse_from([
            "stanza",
            "--root",
            "site",
            "build",
            "--clean",
            "--base-url",
            "https://example.com",
            "--seed",
            "7",
        ]);
        assert_eq!(cli.root.as_deref(), Some(std::path::Path::new("site")));
        let args = cli.build_args();
        assert!(args.clean);
        assert_eq!(args.base_url.as_deref(), Some("https://example.com"));
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn test_default_config_name() {
        let cli = Cli::parse_from(["stanza", "build"]);
        assert_eq!(cli.config, PathBuf::from("stanza.toml"));
    }
}
