//! Methods command.

use serde::Serialize;

use crate::cli::output;
use crate::core::types::{KeyKind, Method};
use crate::error::Result;

#[derive(Debug, Serialize)]
struct MethodInfo {
    method: Method,
    key: Option<KeyKind>,
}

/// List every method with the key it takes.
pub fn execute(json: bool) -> Result<()> {
    let methods: Vec<MethodInfo> = Method::ALL
        .iter()
        .map(|&method| MethodInfo {
            method,
            key: method.key_kind(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&methods)?);
        return Ok(());
    }

    output::header("Methods");
    for info in &methods {
        let key = match info.key {
            Some(KeyKind::Letters) => "letter key (--key LEMON)",
            Some(KeyKind::Numeric) => "numeric key (--key 3)",
            None => "no key",
        };
        output::kv(&format!("{:<9}", info.method.name()), key);
    }
    Ok(())
}
