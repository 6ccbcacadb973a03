use crate::args::{Cli, Commands};
use crate::handlers;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check {
            value,
            amount,
            output,
        } => handlers::check::handle(&value, amount, output),
        Commands::Format {
            value,
            amount,
            raw,
            output,
        } => handlers::format::handle(&value, amount, raw, output),
        Commands::Form { config } => handlers::form::handle(config.as_deref()),
    }
}
