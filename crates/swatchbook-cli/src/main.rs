//! swatch - check, render and export swatchbook theme files.
//!
//! ```text
//! swatch check ocean.json
//! swatch css ocean.json --new-lines
//! swatch names primaryActionColor --prefix --app
//! swatch export ocean.json --format hsl --out-dir dist
//! ```
//!
//! Logs go to stderr. `-v` raises the level to info, `-vv` to debug;
//! `RUST_LOG` overrides both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use swatchbook::{
    derive_names, load_theme, render_theme_as_css, save_theme, ColorFormat, DirectorySink,
    NameSource, PrefixConfig, UserTheme,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "swatch", version, about = "Work with swatchbook theme files")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a theme file and summarize its palettes
    Check {
        /// Theme file (.json, .yaml or .yml)
        file: PathBuf,
    },
    /// Print a theme as CSS custom properties
    Css {
        file: PathBuf,
        /// Put each declaration on its own line
        #[arg(long)]
        new_lines: bool,
    },
    /// Show the prop, CSS variable and display forms of a name
    Names {
        name: String,
        /// Theme prefix, e.g. --app
        #[arg(long, allow_hyphen_values = true)]
        prefix: Option<String>,
    },
    /// Import a theme and save it as <slug>.json
    Export {
        file: PathBuf,
        /// Override the theme's color format (hex, rgb, hsl)
        #[arg(long)]
        format: Option<ColorFormat>,
        /// Directory to write into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open(file: &Path) -> Result<UserTheme> {
    load_theme(file).with_context(|| format!("failed to load theme {}", file.display()))
}

fn check(file: &Path) -> Result<String> {
    let theme = open(file)?;
    info!(theme = %theme.theme_name, palettes = theme.palettes.len(), "theme is valid");

    let mut out = format!(
        "{} {} ({} format)\n",
        style("✓").green(),
        style(&theme.theme_name).bold(),
        theme.color_format
    );
    for palette in &theme.palettes {
        out.push_str(&format!(
            "  {} {}\n",
            style(&palette.display_name).cyan(),
            style(format!("{} colors", palette.colors.len())).dim()
        ));
    }
    Ok(out)
}

fn css(file: &Path, new_lines: bool) -> Result<String> {
    let theme = open(file)?;
    Ok(render_theme_as_css(Some(&theme), new_lines) + "\n")
}

fn names(name: &str, prefix: Option<&str>) -> String {
    let config = match prefix {
        Some(prefix) => PrefixConfig::new(prefix),
        None => PrefixConfig::NONE,
    };
    let source = NameSource::detect(name);
    let derived = derive_names(config, &source);

    let row = |label: &str, value: &str| {
        let value = if value.is_empty() { "-" } else { value };
        format!("{:<14}{}\n", style(label).dim(), value)
    };
    let mut out = format!("input is a {}\n", source.convention());
    out.push_str(&row("prop name", &derived.prop_name));
    out.push_str(&row("css variable", &derived.css_var_name));
    out.push_str(&row("display name", &derived.display_name));
    out
}

fn export(file: &Path, format: Option<ColorFormat>, out_dir: &Path) -> Result<String> {
    let mut theme = open(file)?;
    if let Some(format) = format {
        theme.color_format = format;
    }
    let mut sink = DirectorySink::new(out_dir);
    let filename = save_theme(&mut theme, &mut sink)
        .with_context(|| format!("failed to save theme into {}", out_dir.display()))?;
    let path = out_dir.join(filename);
    info!(path = %path.display(), "exported theme");
    Ok(format!("{}\n", path.display()))
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Check { file } => check(&file),
        Command::Css { file, new_lines } => css(&file, new_lines),
        Command::Names { name, prefix } => Ok(names(&name, prefix.as_deref())),
        Command::Export {
            file,
            format,
            out_dir,
        } => export(&file, format, &out_dir),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    print!("{}", run(cli.command)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    const THEME: &str = r##"{
        "themeName": "Tiny Theme",
        "palettes": [{ "id": "p1", "displayName": "Base", "colors": [
            { "propName": "ink", "cssVarName": "--ink", "displayName": "Ink", "value": "black" },
            { "propName": "paper", "cssVarName": "--paper", "displayName": "Paper", "value": "rgb(255 255 255)" }
        ]}]
    }"##;

    fn theme_file(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("tiny.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_export_flags() {
        let cli = parse(&["swatch", "-vv", "export", "t.json", "--format", "HSL"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Export {
                format, out_dir, ..
            } => {
                assert_eq!(format, Some(ColorFormat::Hsl));
                assert_eq!(out_dir, PathBuf::from("."));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["swatch", "export", "t.json", "--format", "cmyk"]).is_err());
    }

    #[test]
    fn test_prefix_accepts_leading_dashes() {
        let cli = parse(&["swatch", "names", "appPrimary", "--prefix", "--app"]);
        match cli.command {
            Command::Names { prefix, .. } => assert_eq!(prefix.as_deref(), Some("--app")),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_css_command() {
        let dir = TempDir::new().unwrap();
        let path = theme_file(&dir, THEME);
        assert_eq!(css(&path, false).unwrap(), "--ink: #000000; --paper: #ffffff\n");
    }

    #[test]
    fn test_check_reports_invalid_color() {
        let dir = TempDir::new().unwrap();
        let path = theme_file(&dir, &THEME.replace("black", "blackish"));
        let err = check(&path).unwrap_err();
        assert!(format!("{:#}", err)
            .contains("Unable to parse \"blackish\" as a valid CSS color value"));
    }

    #[test]
    fn test_names_command() {
        let out = names("primaryActionColor", None);
        assert!(out.starts_with("input is a prop name\n"));
        assert!(out.contains("primary-action-color"));
        assert!(out.contains("Primary Action Color"));
    }

    #[test]
    fn test_export_command_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = theme_file(&dir, THEME);
        let out_dir = dir.path().join("out");
        std::fs::create_dir(&out_dir).unwrap();

        let printed = export(&path, Some(ColorFormat::Rgb), &out_dir).unwrap();
        let written = out_dir.join("tiny-theme.json");
        assert_eq!(printed.trim_end(), written.display().to_string());

        let content = std::fs::read_to_string(written).unwrap();
        assert!(content.contains(r#""value":"rgb(0, 0, 0)""#));
        assert!(content.contains(r#""colorFormat":"rgb""#));
    }
}
