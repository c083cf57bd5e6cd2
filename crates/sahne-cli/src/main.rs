//! Sahne CLI - Command-line interface for the Sahne scene engine

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{analyze, check, resolution, split, styles};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sahne")]
#[command(about = "Turn Turkish narrative text into image-generation scenes", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Segment text and print a scene record for every segment
    Analyze {
        /// Input file (reads stdin when omitted)
        file: Option<String>,

        /// Visual style (cinematic, anime, comic, digital, oil, watercolor, minimal, custom)
        #[arg(long)]
        style: Option<String>,

        /// Free-form style text used with --style custom
        #[arg(long)]
        custom_style: Option<String>,

        /// Color palette (warm, cool, pastel, dark, vibrant, earthy, monochrome)
        #[arg(long)]
        palette: Option<String>,

        /// Camera composition preference
        #[arg(long)]
        composition: Option<String>,

        /// Aspect ratio (16:9, 9:16, 1:1, 4:3, 21:9)
        #[arg(long)]
        format: Option<String>,

        /// Resolution tier (360p ... 2160p)
        #[arg(long)]
        resolution: Option<String>,

        /// Seed for the variety pickers
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (json, toml or text)
        #[arg(short, long, default_value = "json")]
        output: String,

        /// Analyze segments one after another
        #[arg(long)]
        sequential: bool,
    },

    /// Print the scene segments of a text
    Split {
        /// Input file (reads stdin when omitted)
        file: Option<String>,
    },

    /// Compute output dimensions for a tier and aspect ratio
    Resolution {
        /// Resolution tier id (e.g. 1080p)
        tier: Option<String>,

        /// Aspect ratio id (e.g. 9:16)
        format: Option<String>,

        /// List tiers, quality presets and formats
        #[arg(long)]
        list: bool,
    },

    /// Screen text for content image backends are likely to refuse
    Check {
        /// Input file (reads stdin when omitted)
        file: Option<String>,
    },

    /// List style, palette, composition and format catalogs
    Styles,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("SAHNE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Analyze {
            file,
            style,
            custom_style,
            palette,
            composition,
            format,
            resolution,
            seed,
            output,
            sequential,
        } => analyze::run(analyze::AnalyzeArgs {
            file,
            style,
            custom_style,
            palette,
            composition,
            format,
            resolution,
            seed,
            output,
            sequential,
        }),
        Commands::Split { file } => split::run(file.as_deref()),
        Commands::Resolution { tier, format, list } => {
            resolution::run(tier.as_deref(), format.as_deref(), list)
        }
        Commands::Check { file } => check::run(file.as_deref()),
        Commands::Styles => styles::run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_flags() {
        let cli = Cli::try_parse_from([
            "sahne",
            "analyze",
            "story.txt",
            "--style",
            "anime",
            "--format",
            "9:16",
            "--seed",
            "42",
            "--output",
            "text",
            "--sequential",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze {
                file,
                style,
                format,
                seed,
                output,
                sequential,
                palette,
                ..
            } => {
                assert_eq!(file.as_deref(), Some("story.txt"));
                assert_eq!(style.as_deref(), Some("anime"));
                assert_eq!(format.as_deref(), Some("9:16"));
                assert_eq!(seed, Some(42));
                assert_eq!(output, "text");
                assert!(sequential);
                assert!(palette.is_none());
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_analyze_defaults_to_stdin_and_json() {
        let cli = Cli::try_parse_from(["sahne", "analyze"]).unwrap();
        match cli.command {
            Commands::Analyze { file, output, .. } => {
                assert!(file.is_none());
                assert_eq!(output, "json");
            }
            _ => panic!("expected analyze"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["sahne", "split", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_resolution() {
        let cli = Cli::try_parse_from(["sahne", "resolution", "1080p", "9:16"]).unwrap();
        match cli.command {
            Commands::Resolution { tier, format, list } => {
                assert_eq!(tier.as_deref(), Some("1080p"));
                assert_eq!(format.as_deref(), Some("9:16"));
                assert!(!list);
            }
            _ => panic!("expected resolution"),
        }

        let cli = Cli::try_parse_from(["sahne", "resolution", "--list"]).unwrap();
        assert!(matches!(cli.command, Commands::Resolution { list: true, .. }));
    }

    #[test]
    fn test_bad_seed_is_rejected() {
        assert!(Cli::try_parse_from(["sahne", "analyze", "--seed", "many"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["sahne", "render"]).is_err());
    }
}
