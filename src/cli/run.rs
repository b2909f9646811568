//! Encode, decode and normalize commands.

use serde::Serialize;
use tracing::debug;

use crate::cli::CipherArgs;
use crate::core::cipher::CipherFacade;
use crate::core::config::Config;
use crate::core::key::CipherKey;
use crate::core::normalize::normalize as normalize_text;
use crate::core::types::{Direction, Method, TextMode};
use crate::error::{CipherError, Result};

/// JSON shape of a cipher result.
#[derive(Debug, Serialize)]
struct Report<'a> {
    method: Method,
    direction: Direction,
    mode: TextMode,
    output: &'a str,
}

/// Run one encode or decode request and print the payload.
///
/// `--preserve` overrides the configured text mode.
pub fn execute(direction: Direction, args: &CipherArgs, config: &Config, json: bool) -> Result<()> {
    let mode = if args.preserve {
        TextMode::Preserve
    } else {
        config.text_mode()?
    };
    let key = build_key(args.method, args.key.as_deref())?;
    debug!(method = %args.method, has_key = key.is_some(), "running request");

    let output = CipherFacade::new(mode).apply(args.method, direction, &args.text, key.as_ref())?;

    if json {
        let report = Report {
            method: args.method,
            direction,
            mode,
            output: &output,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", output);
    }
    Ok(())
}

/// Print the letters a text is reduced to before enciphering.
pub fn normalize(text: &str, json: bool) -> Result<()> {
    let normalized = normalize_text(text);
    if json {
        let value = serde_json::json!({
            "output": normalized.as_str(),
            "letters": normalized.len(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", normalized);
    }
    Ok(())
}

/// Turn the raw `--key` argument into the key kind the method expects.
///
/// Keys given to a keyless method are kept (their kind guessed) so the
/// facade reports the mismatch instead of silently dropping them.
fn build_key(method: Method, raw: Option<&str>) -> Result<Option<CipherKey>, CipherError> {
    match (method.key_kind(), raw) {
        (Some(kind), Some(raw)) => CipherKey::parse(kind, raw).map(Some),
        (None, Some(raw)) => Ok(Some(CipherKey::infer(raw))),
        (_, None) => Ok(None),
    }
}
