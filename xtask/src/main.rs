//! Developer tasks (schema generation, explain coverage).
//!
//! Kept separate so the end-user CLI stays small.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root (parent of the xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest_dir.to_path_buf())
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(commitguard_types::CommitguardReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(commitguard_settings::CommitguardConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "commitguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "commitguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to `dir`, or to the schemas/ directory of the workspace.
fn emit_schemas(dir: Option<&str>) -> anyhow::Result<()> {
    let dir = dir.map(PathBuf::from).unwrap_or_else(schemas_dir);
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help                Show this message");
    eprintln!("  emit-schemas [DIR]  Generate JSON schemas from Rust types (default: schemas/)");
    eprintln!("  print-schema-ids    Print known schema IDs");
    eprintln!("  explain-coverage    Validate all check IDs and codes have explanations");
}

/// Validate that all check IDs and codes have complete explanations.
fn explain_coverage() -> anyhow::Result<()> {
    use commitguard_types::explain::{all_check_ids, all_codes, lookup_explanation};

    let check_ids = all_check_ids();
    let codes = all_codes();
    let mut errors = Vec::new();

    let entries = check_ids
        .iter()
        .map(|id| ("Check ID", *id))
        .chain(codes.iter().map(|code| ("Code", *code)));

    for (kind, identifier) in entries {
        let Some(exp) = lookup_explanation(identifier) else {
            errors.push(format!("{kind} '{identifier}' has no explanation"));
            continue;
        };
        for (field, value) in [
            ("title", exp.title),
            ("description", exp.description),
            ("remediation", exp.remediation),
            ("before example", exp.examples.before),
            ("after example", exp.examples.after),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("{kind} '{identifier}' has empty {field}"));
            }
        }
    }

    if !errors.is_empty() {
        for error in &errors {
            eprintln!("  - {error}");
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }

    println!("✓ {} check IDs have explanations", check_ids.len());
    println!("✓ {} codes have explanations", codes.len());
    println!("\n✓ All explain coverage checks passed!");
    Ok(())
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
        "explain-coverage" => explain_coverage(),
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
