use crate::config::{self, Profile};
use crate::tui;
use anyhow::Result;
use std::path::Path;

pub fn handle(config_path: Option<&Path>) -> Result<()> {
    let path = config::resolve_profile_path(config_path)?;
    let profile = Profile::load_from(&path)?;

    let committed = tui::run(profile)?;

    // Echo the settled values once the terminal is restored, so the form's
    // result survives leaving the alternate screen.
    for (label, value) in committed {
        println!("{}: {}", label, value);
    }
    Ok(())
}
