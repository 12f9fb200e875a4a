//! CLI argument parsing with clap.

use clap::Parser;

/// Procedural heart app-icon generator.
///
/// Renders the icon at every required resolution, stages the PNGs in an
/// iconset directory, and compiles them into a single `.icns` bundle.
#[derive(Parser, Debug)]
#[command(name = "heartgen", version, about)]
pub struct Cli {
    /// Output path for the compiled .icns bundle.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Staging directory for the intermediate iconset PNGs.
    #[arg(long)]
    pub iconset_dir: Option<String>,

    /// Icon compiler executable (defaults to iconutil).
    #[arg(long)]
    pub tool: Option<String>,

    /// Keep the staging directory after a successful bundle.
    #[arg(long)]
    pub keep_iconset: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let cli = Cli::parse_from(["heartgen"]);
        assert!(cli.output.is_none());
        assert!(cli.iconset_dir.is_none());
        assert!(cli.tool.is_none());
        assert!(!cli.keep_iconset);
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn all_options() {
        let cli = Cli::parse_from([
            "heartgen",
            "-o",
            "Custom.icns",
            "--iconset-dir",
            "staging.iconset",
            "--tool",
            "my-iconutil",
            "--keep-iconset",
            "-v",
        ]);
        assert_eq!(cli.output.as_deref(), Some("Custom.icns"));
        assert_eq!(cli.iconset_dir.as_deref(), Some("staging.iconset"));
        assert_eq!(cli.tool.as_deref(), Some("my-iconutil"));
        assert!(cli.keep_iconset);
        assert!(cli.verbose);
    }
}
