//! CLI entry point for sarif.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! Decoding and rendering live in the `sarif-codec` and `sarif-render` crates.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use sarif_codec::{EncodeOptions, decode_file, encode_file_with};
use sarif_render::{render_github_annotations, render_markdown, render_text};
use sarif_types::{Log, Rule};
use std::process::ExitCode;

/// Exit code when a lookup finds nothing.
const EXIT_NOT_FOUND: u8 = 1;
/// Exit code for any error (unreadable file, malformed document, bad version).
const EXIT_ERROR: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "sarif",
    version,
    about = "Validate, inspect, and normalize SARIF 2.1.0 documents"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a document and check its version.
    Validate {
        /// Path to the SARIF file.
        file: Utf8PathBuf,
    },

    /// List the rules declared by every run.
    Rules {
        /// Path to the SARIF file.
        file: Utf8PathBuf,
    },

    /// Show a single rule by id.
    Rule {
        /// Path to the SARIF file.
        file: Utf8PathBuf,

        /// Rule identifier (e.g. "GO-2021-0113").
        id: String,
    },

    /// Print one line per result.
    Results {
        /// Path to the SARIF file.
        file: Utf8PathBuf,
    },

    /// Render GitHub Actions annotations for the results.
    Annotations {
        /// Path to the SARIF file.
        file: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Render a Markdown summary of the results.
    Md {
        /// Path to the SARIF file.
        file: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Re-encode a document with the version and schema URI filled in.
    Normalize {
        /// Path to the SARIF file.
        file: Utf8PathBuf,

        /// Where to write the normalized document.
        #[arg(long, short)]
        output: Utf8PathBuf,

        /// Write single-line JSON instead of pretty-printed.
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.cmd) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("sarif: {err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cmd: Commands) -> anyhow::Result<ExitCode> {
    match cmd {
        Commands::Validate { file } => cmd_validate(&file),
        Commands::Rules { file } => cmd_rules(&file),
        Commands::Rule { file, id } => cmd_rule(&file, &id),
        Commands::Results { file } => cmd_results(&file),
        Commands::Annotations { file, max } => cmd_annotations(&file, max),
        Commands::Md { file, output } => cmd_md(&file, output.as_deref()),
        Commands::Normalize {
            file,
            output,
            compact,
        } => cmd_normalize(&file, &output, compact),
    }
}

fn load(file: &Utf8Path) -> anyhow::Result<Log> {
    decode_file(file).with_context(|| format!("load {file}"))
}

fn cmd_validate(file: &Utf8Path) -> anyhow::Result<ExitCode> {
    let log = load(file)?;
    println!(
        "ok: {} run(s), {} result(s)",
        log.runs.len(),
        log.results().count()
    );
    Ok(ExitCode::SUCCESS)
}

fn cmd_rules(file: &Utf8Path) -> anyhow::Result<ExitCode> {
    let log = load(file)?;
    for rule in log.runs.iter().flat_map(|run| run.tool.driver.rules.iter()) {
        println!("{}\t{}", rule.id, rule.short_description.as_str());
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_rule(file: &Utf8Path, id: &str) -> anyhow::Result<ExitCode> {
    let log = load(file)?;
    match log.find_rule(id) {
        Some(rule) => {
            print!("{}", format_rule(rule));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("sarif: no rule with id {id:?} in {file}");
            Ok(ExitCode::from(EXIT_NOT_FOUND))
        }
    }
}

fn format_rule(rule: &Rule) -> String {
    let mut out = format!("{}\n", rule.id);
    let fields = [
        ("summary", rule.short_description.as_str()),
        ("description", rule.full_description.as_str()),
        ("help", rule.help.as_str()),
        ("help uri", rule.help_uri.as_str()),
    ];
    for (label, value) in fields {
        if !value.is_empty() {
            out.push_str(&format!("  {label}: {value}\n"));
        }
    }
    out
}

fn cmd_results(file: &Utf8Path) -> anyhow::Result<ExitCode> {
    let log = load(file)?;
    for line in render_text(&log) {
        println!("{line}");
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_annotations(file: &Utf8Path, max: usize) -> anyhow::Result<ExitCode> {
    let log = load(file)?;
    for line in render_github_annotations(&log).into_iter().take(max) {
        println!("{line}");
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_md(file: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<ExitCode> {
    let log = load(file)?;
    let md = render_markdown(&log);
    match output {
        Some(path) => write_text_file(path, &md).context("write markdown")?,
        None => print!("{md}"),
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_normalize(file: &Utf8Path, output: &Utf8Path, compact: bool) -> anyhow::Result<ExitCode> {
    let log = load(file)?;
    let options = if compact {
        EncodeOptions::compact()
    } else {
        EncodeOptions::default()
    };
    ensure_parent_dir(output)?;
    encode_file_with(&log, output, &options).with_context(|| format!("write {output}"))?;
    Ok(ExitCode::SUCCESS)
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, text).with_context(|| format!("write {path}"))
}

fn ensure_parent_dir(path: &Utf8Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
    }
    Ok(())
}
