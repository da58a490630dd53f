//! Command definitions and execution for the `sdfield` binary.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use sd_config::Settings;
use sd_fields::{
    ColumnField, DictCodec, FieldCodec, FieldData, FieldKind, GenericObjectCodec, JsonCodec,
    ListCodec, MacAddress, MacCodec, MacSetCodec, ValidationError, resolver,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "sdfield")]
#[command(about = "Encode, decode and check custom column values")]
pub struct Args {
    /// Settings file (defaults to $SD_CONFIG, then ./sd.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Turn a typed value into column text
    Encode {
        #[arg(short, long)]
        kind: FieldKind,
        /// JSON for json/list/dict/mac_set, plain text for generic_object and mac
        value: String,
    },
    /// Turn column text into its typed value, printed as JSON
    Decode {
        #[arg(short, long)]
        kind: FieldKind,
        /// Column text; omit for NULL
        text: Option<String>,
    },
    /// Validate submitted text the way an input form would
    Check {
        #[arg(short, long)]
        kind: FieldKind,
        /// Reject empty values
        #[arg(long)]
        required: bool,
        text: Option<String>,
    },
}

/// Runs one command and returns what should be printed.
pub fn run(command: &Command, settings: &Settings) -> Result<String> {
    match command {
        Command::Encode { kind, value } => encode(*kind, value, settings),
        Command::Decode { kind, text } => decode(*kind, text.as_deref(), settings),
        Command::Check {
            kind,
            required,
            text,
        } => check(*kind, text.as_deref(), *required, settings),
    }
}

fn encode(kind: FieldKind, value: &str, settings: &Settings) -> Result<String> {
    let data = parse_value(kind, value)?;
    let field = settings.fields.field(kind);
    let cleaned = field.clean(Some(data)).map_err(rejected)?;
    let text = field.serialize(cleaned.as_ref()).map_err(rejected)?;
    debug!(%kind, "encoded value");
    Ok(text.unwrap_or_else(|| "NULL".to_string()))
}

fn decode(kind: FieldKind, text: Option<&str>, settings: &Settings) -> Result<String> {
    let field = settings.fields.field(kind);
    let value = field.deserialize(text).map_err(rejected)?;
    let json = value.map_or(serde_json::Value::Null, |v| v.to_json());
    Ok(serde_json::to_string(&json)?)
}

fn check(kind: FieldKind, text: Option<&str>, required: bool, settings: &Settings) -> Result<String> {
    let limit = settings.fields.max_length_for(kind);
    match kind {
        FieldKind::Json => check_with(JsonCodec, limit, required, text),
        FieldKind::List => check_with(ListCodec, limit, required, text),
        FieldKind::Dict => check_with(DictCodec, limit, required, text),
        FieldKind::GenericObject => check_with(GenericObjectCodec, limit, required, text),
        FieldKind::Mac => check_with(MacCodec, limit, required, text),
        FieldKind::MacSet => check_with(MacSetCodec, limit, required, text),
    }
}

fn check_with<C>(codec: C, limit: usize, required: bool, text: Option<&str>) -> Result<String>
where
    C: FieldCodec + Clone,
    C::Value: Serialize,
{
    let form = ColumnField::new(codec)
        .with_max_length(limit)
        .formfield()
        .with_required(required);
    let value = form.clean(text).map_err(rejected)?;
    let json = serde_json::to_string(&value)?;
    Ok(format!("ok {json}"))
}

/// Command-line input for `kind` as typed data.
fn parse_value(kind: FieldKind, value: &str) -> Result<FieldData> {
    match kind {
        FieldKind::Json | FieldKind::List | FieldKind::Dict | FieldKind::MacSet => {
            let json = serde_json::from_str(value)
                .with_context(|| format!("{kind} value is not JSON: {value}"))?;
            Ok(FieldData::Json(json))
        }
        FieldKind::GenericObject => Ok(FieldData::Generic(resolver::infer_and_decode(value))),
        FieldKind::Mac => Ok(FieldData::Mac(MacAddress::parse(value)?)),
    }
}

fn rejected(err: ValidationError) -> anyhow::Error {
    match err.value() {
        Some(value) => anyhow!("{}: {} ({value})", err.code(), err.message()),
        None => anyhow!("{}: {}", err.code(), err.message()),
    }
}

/// Settings file from `--config`, then the environment.
pub fn load_settings(args: &Args) -> Result<Settings> {
    Settings::from_env_and_file(args.config.as_deref()).context("failed to load settings")
}
