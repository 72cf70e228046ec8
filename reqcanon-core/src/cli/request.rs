use crate::cli::read_input;
use crate::conf::load_config;
use crate::request::normalization::encoding::repair_encoding;
use crate::request::{CanonicalRequest, HttpNormalizer};
use anyhow::Context;
use clap::Args;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InputArgs {
    /// JSON payload to read (stdin when omitted)
    pub file: Option<PathBuf>,

    /// Path to a TOML file with normalizer limits
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Treat the input as a previously stored record instead of raw client data
    #[arg(long)]
    pub stored: bool,
}

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Indent the output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct ContextArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Render the view shown to public viewers
    #[arg(long)]
    pub public: bool,
}

pub fn normalize(args: NormalizeArgs) -> anyhow::Result<()> {
    let request = load_request(&args.input)?;
    print_json(&request.to_json(), args.pretty)
}

pub fn context(args: ContextArgs) -> anyhow::Result<()> {
    let request = load_request(&args.input)?;
    print_json(&request.api_context(args.public), true)
}

pub fn url(args: InputArgs) -> anyhow::Result<()> {
    let request = load_request(&args)?;
    println!("{}", request.full_url());
    Ok(())
}

fn load_request(args: &InputArgs) -> anyhow::Result<CanonicalRequest> {
    let raw = read_input(args.file.as_deref())?;
    let payload: Value =
        serde_json::from_str(&repair_encoding(&raw)).context("input is not valid JSON")?;

    let request = if args.stored {
        CanonicalRequest::from_stored(&payload)?
    } else {
        let cfg = load_config(args.config.as_deref())?;
        HttpNormalizer::new(cfg).assemble(&payload)?
    };

    Ok(request)
}

fn print_json(value: &Value, pretty: bool) -> anyhow::Result<()> {
    let s = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{s}");
    Ok(())
}
