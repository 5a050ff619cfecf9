//! Handlers for `showcase config` subcommands.
//!
//! Output goes to a caller-supplied writer so the handlers can be tested
//! without capturing stdout. Keys are dotted TOML paths such as
//! `store.bin_id`.

use std::io::Write;
use std::path::PathBuf;

use crate::cli::ConfigAction;
use crate::commands::write_line;
use crate::config::{PROJECT_NAME, ShowcaseConfig};
use crate::error::{Error, Result};

/// Runs one config subcommand.
pub fn handle_config_command(
    config_path: Option<&str>,
    action: ConfigAction,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path, out),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key, out),
        ConfigAction::Set { key, value } => cmd_config_set(config_path, &key, &value, out),
        ConfigAction::Init { file, force } => {
            cmd_config_init(file.as_deref().or(config_path), force, out)
        }
        ConfigAction::Export { docker_env } => {
            let config = ShowcaseConfig::load(config_path)?;
            cmd_config_export(&config, docker_env, out)
        }
    }
}

fn resolved_path(config_path: Option<&str>) -> Result<PathBuf> {
    ShowcaseConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))
}

/// Prints the file [`ShowcaseConfig::load`] would read.
pub fn cmd_config_path(config_path: Option<&str>, out: &mut dyn Write) -> Result<()> {
    let path = resolved_path(config_path)?;
    write_line(out, path.display())?;
    if !path.exists() {
        tracing::info!("Config file does not exist; run `{PROJECT_NAME} config init` to create it");
    }
    Ok(())
}

/// Prints the value at a dotted key of the effective configuration.
pub fn cmd_config_get(config_path: Option<&str>, key: &str, out: &mut dyn Write) -> Result<()> {
    let config = ShowcaseConfig::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    let found = get_nested_value(&value, key)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))?;
    write_line(out, format_toml_value(found))
}

/// Writes a value at a dotted key into an existing config file.
///
/// The result must still parse as a [`ShowcaseConfig`]; otherwise the file
/// is left untouched.
pub fn cmd_config_set(
    config_path: Option<&str>,
    key: &str,
    value: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let path = resolved_path(config_path)?;
    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `{PROJECT_NAME} config init` first.",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
    let mut doc: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;

    let typed = value_for_key(&doc, key, value)?;
    set_nested_value(&mut doc, key, typed)?;

    let text = toml::to_string_pretty(&doc).map_err(|e| Error::config(e.to_string()))?;
    ShowcaseConfig::from_toml_str(&text)?;
    std::fs::write(&path, text).map_err(|e| Error::io_with_path(e, &path))?;

    tracing::debug!(key, path = %path.display(), "Config value updated");
    write_line(out, format!("Set {key} = {value} in {}", path.display()))
}

/// Writes a default config file to `file` or the default location.
pub fn cmd_config_init(file: Option<&str>, force: bool, out: &mut dyn Write) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => ShowcaseConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let text = ShowcaseConfig::default().to_toml_string()?;
    std::fs::write(&path, text).map_err(|e| Error::io_with_path(e, &path))?;

    write_line(out, format!("Config file created at {}", path.display()))
}

/// Prints the configuration as environment assignments, key redacted.
pub fn cmd_config_export(
    config: &ShowcaseConfig,
    docker_env: bool,
    out: &mut dyn Write,
) -> Result<()> {
    for (key, value) in config.to_env_vars() {
        if docker_env {
            write_line(out, format!("--env {key}={value}"))?;
        } else {
            write_line(out, format!("{key}={value}"))?;
        }
    }
    Ok(())
}

// ============================================================================
// Dotted-key helpers
// ============================================================================

/// Looks up a dotted key in a TOML tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Sets a dotted key, creating intermediate tables.
pub fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let (parents, leaf) = match key.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, key),
    };
    if leaf.is_empty() {
        return Err(Error::config(format!("Invalid key '{key}'")));
    }

    let mut current = root;
    for part in parents.into_iter().flat_map(|p| p.split('.')) {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config(format!("Cannot navigate into '{part}' of '{key}'")))?;
        current = table
            .entry(part.to_string())
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }

    let table = current
        .as_table_mut()
        .ok_or_else(|| Error::config(format!("Cannot set '{key}' on a non-table value")))?;
    table.insert(leaf.to_string(), value);
    Ok(())
}

/// Types a command-line value for `key`.
///
/// A key that holds a string, in the file or in
/// [`ShowcaseConfig::template`], takes `raw` verbatim so digit-only keys and
/// bin ids stay strings. Other keys go through [`parse_value`].
pub fn value_for_key(doc: &toml::Value, key: &str, raw: &str) -> Result<toml::Value> {
    let template = toml::Value::try_from(ShowcaseConfig::template())
        .map_err(|e| Error::config(e.to_string()))?;
    let existing = get_nested_value(doc, key).or_else(|| get_nested_value(&template, key));
    Ok(match existing {
        Some(toml::Value::String(_)) => toml::Value::String(raw.to_string()),
        _ => parse_value(raw),
    })
}

/// Reads a command-line value as bool, integer, float, or string, in that
/// order.
pub fn parse_value(s: &str) -> toml::Value {
    match s {
        "true" => toml::Value::Boolean(true),
        "false" => toml::Value::Boolean(false),
        _ => s
            .parse::<i64>()
            .map(toml::Value::Integer)
            .or_else(|_| s.parse::<f64>().map(toml::Value::Float))
            .unwrap_or_else(|_| toml::Value::String(s.to_string())),
    }
}

/// Plain display form: strings unquoted, tables as TOML.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
