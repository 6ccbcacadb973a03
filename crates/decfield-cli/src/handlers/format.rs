//! The commit-time pipeline, exposed non-interactively: assign, settle,
//! print whatever the field would hold at rest.

use crate::args::OutputFormat;
use anyhow::Result;
use decfield_core::{DecimalField, FieldConfig, FieldState, ValidationMode};
use std::time::Instant;

pub fn handle(value: &str, amount: bool, raw: bool, output: OutputFormat) -> Result<()> {
    let mode = if amount {
        ValidationMode::Amount
    } else {
        ValidationMode::Decimal
    };

    let config = FieldConfig::new("value", "0")
        .with_mode(mode)
        .with_prettify(!raw);
    let mut field = DecimalField::adopt(FieldState::new(value), config);

    field.commit_at(Instant::now());
    field.flush();
    let settled = field.value().to_string();

    // An empty settle means the value was rejected at commit time (parse
    // failure, or zero in amount mode).
    let valid = !settled.is_empty();

    match output {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "input": value,
                    "settled": settled,
                    "valid": valid,
                })
            );
        }
        OutputFormat::Text => {
            println!("{}", settled);
        }
    }

    if !valid {
        std::process::exit(1);
    }
    Ok(())
}
