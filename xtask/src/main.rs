//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

const SCHEMA_FILENAME: &str = "sarif-subset.schema.json";

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// JSON schema for the subset of SARIF the document model reads and writes.
fn generate_log_schema() -> schemars::Schema {
    schema_for!(sarif_types::Log)
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit the schema to the schemas/ directory.
fn emit_schema() -> anyhow::Result<()> {
    let dir = schemas_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create schemas directory")?;
    }

    let json = serialize_schema(&generate_log_schema())?;
    let path = dir.join(SCHEMA_FILENAME);
    fs::write(&path, &json)
        .with_context(|| format!("Failed to write schema to {}", path.display()))?;

    println!("Wrote {}", path.display());
    Ok(())
}

/// Check every top-level `*.sarif.json` fixture against the generated schema
/// and the codec.
///
/// Fixtures under `tests/fixtures/invalid/` are expected to fail decoding
/// and are skipped here.
fn conform() -> anyhow::Result<()> {
    let schema_value = serde_json::to_value(generate_log_schema())
        .context("Failed to convert schema to JSON")?;
    let validator = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;

    let dir = fixtures_dir();
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(".sarif.json"))
        })
        .collect();
    paths.sort();

    if paths.is_empty() {
        bail!("no *.sarif.json fixtures found in {}", dir.display());
    }

    let mut errors = Vec::new();
    for path in &paths {
        let filename = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", filename))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} as JSON", filename))?;

        let before = errors.len();
        for err in validator.iter_errors(&value) {
            errors.push(format!("{}: schema validation: {}", filename, err));
        }
        if let Err(err) = sarif_codec::decode(content.as_bytes()) {
            errors.push(format!("{}: decode: {}", filename, err));
        }

        if errors.len() == before {
            println!("✓ {}", filename);
        }
    }

    if errors.is_empty() {
        println!("\nAll {} fixtures conform.", paths.len());
        Ok(())
    } else {
        for e in &errors {
            eprintln!("  - {}", e);
        }
        bail!("Conformance failed with {} errors", errors.len())
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schema       Generate the JSON schema for the document model to schemas/");
    eprintln!("  print-schema      Print the generated JSON schema to stdout");
    eprintln!("  conform           Validate tests/fixtures/*.sarif.json against schema and codec");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schema" => emit_schema(),
        "print-schema" => {
            print!("{}", serialize_schema(&generate_log_schema())?);
            Ok(())
        }
        "conform" => conform(),
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
