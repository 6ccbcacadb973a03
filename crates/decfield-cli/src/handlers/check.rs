//! The admission gate, exposed non-interactively: the same normalization
//! and grammar a keystroke would face.

use crate::args::OutputFormat;
use anyhow::Result;
use decfield_core::{is_valid_decimal_num_string, ValidationMode};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

pub fn handle(value: &str, amount: bool, output: OutputFormat) -> Result<()> {
    let mode = if amount {
        ValidationMode::Amount
    } else {
        ValidationMode::Decimal
    };

    // Same order as the field's edit-validate step: first comma becomes a
    // dot, then the length cap and the grammar apply.
    let candidate = value.replacen(',', ".", 1);
    let within_cap = candidate.chars().count() <= mode.max_len();
    let matches_grammar = is_valid_decimal_num_string(&candidate);
    let valid = within_cap && matches_grammar;

    let reason = if !within_cap {
        Some(format!("exceeds {} characters", mode.max_len()))
    } else if !matches_grammar {
        Some("does not match the decimal grammar".to_string())
    } else {
        None
    };

    match output {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "value": value,
                    "candidate": candidate,
                    "valid": valid,
                    "reason": reason,
                })
            );
        }
        OutputFormat::Text => {
            let color = std::io::stdout().is_terminal();
            if valid {
                if color {
                    println!("{}", "valid".green());
                } else {
                    println!("valid");
                }
            } else {
                let reason = reason.unwrap_or_default();
                if color {
                    println!("{}: {}", "invalid".red(), reason);
                } else {
                    println!("invalid: {}", reason);
                }
            }
        }
    }

    if !valid {
        std::process::exit(1);
    }
    Ok(())
}
