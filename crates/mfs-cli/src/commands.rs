use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context};
use colored::Colorize;
use mfs_codec::JsonCodec;
use mfs_store::{Record, RecordStore, StoreConfig};
use serde_json::{json, Value};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    match &cli.command {
        Command::Read(args) => {
            let store = build_store(&cli, args.dir.as_deref())?;
            cmd_read(&store, args.pretty, &mut out)
        }
        Command::Write(args) => {
            let mut store = build_store(&cli, args.dir.as_deref())?;
            if args.pretty {
                store = store.with_codec(Arc::new(JsonCodec::pretty()));
            }
            let data = if args.clear {
                None
            } else {
                Some(load_input(args.input.as_deref())?)
            };
            cmd_write(&store, data.as_ref(), &cli.format, &mut out)
        }
        Command::Keys(args) => {
            let store = build_store(&cli, args.dir.as_deref())?;
            cmd_keys(&store, &cli.format, &mut out)
        }
        Command::Config(args) => {
            let store = build_store(&cli, args.dir.as_deref())?;
            cmd_config(store.config(), &mut out)
        }
    }
}

/// Configuration file first, then command-line overrides.
fn build_store(cli: &Cli, dir: Option<&Path>) -> anyhow::Result<RecordStore> {
    let mut config = match &cli.config {
        Some(path) => StoreConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => StoreConfig::default(),
    };
    if let Some(dir) = dir {
        config.source = dir.to_path_buf();
    }
    if let Some(ext) = &cli.ext {
        config = config.with_extension(ext.clone());
    }
    Ok(RecordStore::with_config(config)?)
}

fn load_input(path: Option<&Path>) -> anyhow::Result<Record> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    parse_record(&text)
}

fn parse_record(text: &str) -> anyhow::Result<Record> {
    match serde_json::from_str::<Value>(text).context("input is not valid JSON")? {
        Value::Object(map) => Ok(map),
        other => bail!("input must be a JSON object, got {}", kind_name(&other)),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn cmd_read(store: &RecordStore, pretty: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let record = Value::Object(store.read()?);
    let text = if pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    writeln!(out, "{text}")?;
    Ok(())
}

fn cmd_write(
    store: &RecordStore,
    data: Option<&Record>,
    format: &OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let report = store.write(data)?;
    match format {
        OutputFormat::Json => writeln!(
            out,
            "{}",
            json!({
                "source": store.source().display().to_string(),
                "files_removed": report.files_removed,
                "files_written": report.files_written,
            })
        )?,
        OutputFormat::Text => writeln!(
            out,
            "{} Wrote {} files to {} ({} removed)",
            "✓".green().bold(),
            report.files_written.to_string().bold(),
            store.source().display(),
            report.files_removed,
        )?,
    }
    Ok(())
}

fn cmd_keys(store: &RecordStore, format: &OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    let record = store.read()?;
    match format {
        OutputFormat::Json => {
            let keys: Vec<Value> = record
                .iter()
                .map(|(key, value)| match value {
                    Value::Array(items) => json!({"key": key, "kind": "array", "files": items.len()}),
                    _ => json!({"key": key, "kind": "scalar", "files": 1}),
                })
                .collect();
            writeln!(out, "{}", Value::Array(keys))?;
        }
        OutputFormat::Text => {
            if record.is_empty() {
                writeln!(out, "No records.")?;
            }
            for (key, value) in &record {
                match value {
                    Value::Array(items) => {
                        writeln!(out, "  {}  {} ({} files)", key.bold(), "array".cyan(), items.len())?
                    }
                    _ => writeln!(out, "  {}  {}", key.bold(), "scalar".yellow())?,
                }
            }
        }
    }
    Ok(())
}

fn cmd_config(config: &StoreConfig, out: &mut impl Write) -> anyhow::Result<()> {
    write!(out, "{}", config.to_toml_string()?)?;
    Ok(())
}
