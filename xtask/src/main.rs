//! Developer tasks (schema generation, plan validation).
//!
//! Keeping this separate avoids bloating the probe CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;
use vouch_settings::Overrides;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::current_dir().expect("Cannot determine current directory"));

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .expect("xtask has no parent")
            .to_path_buf()
    } else {
        manifest_dir
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn plans_dir() -> PathBuf {
    project_root().join("plans")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_probe_schema() -> schemars::Schema {
    schema_for!(vouch_settings::ProbeConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![SchemaSpec {
        filename: "vouch.probe.v1.json",
        generate: generate_probe_schema,
    }]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Write every schema to `dir` (default `schemas/` under the project root).
fn emit_schemas(dir: Option<&str>) -> anyhow::Result<()> {
    let dir = dir.map(PathBuf::from).unwrap_or_else(schemas_dir);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Parse and resolve every `plans/*.toml`, so shipped plans never rot.
fn check_plans() -> anyhow::Result<()> {
    let dir = plans_dir();
    let mut paths = fs::read_dir(&dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect::<Vec<_>>();
    paths.sort();

    if paths.is_empty() {
        bail!("no plans found in {}", dir.display());
    }

    for path in &paths {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let cfg = vouch_settings::parse_config_toml(&text)
            .with_context(|| format!("parse {}", path.display()))?;
        let plan = vouch_settings::resolve_config(cfg, Overrides::default())
            .with_context(|| format!("resolve {}", path.display()))?;
        println!("{}: {} case(s)", path.display(), plan.cases.len());
    }
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help                Show this message");
    eprintln!("  emit-schemas [DIR]  Generate JSON schemas from Rust types (default: schemas/)");
    eprintln!("  print-schema-ids    Print known schema IDs");
    eprintln!("  check-plans         Parse and resolve every probe plan under plans/");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(args.get(2).map(String::as_str)),
        "check-plans" => check_plans(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
