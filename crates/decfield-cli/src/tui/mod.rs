mod app;
mod ui;

use crate::config::Profile;
use anyhow::Result;
use app::FormApp;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use decfield_core::DecimalField;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Run the interactive form until the user leaves it. Returns the settled
/// `(label, value)` pairs.
pub fn run(profile: Profile) -> Result<Vec<(String, String)>> {
    let fields: Vec<DecimalField> = profile.fields.into_iter().map(DecimalField::new).collect();
    let mut app = FormApp::new(fields);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    // Poll well inside the debounce window so settles render promptly after
    // a blur, even while the user is idle.
    let tick_rate = Duration::from_millis(15);

    let mut should_quit = false;
    while !should_quit {
        terminal.draw(|f| {
            ui::draw(f, &app);
        })?;

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) => {
                    should_quit = app.handle_key(key, Instant::now());
                }
                Event::Paste(text) => {
                    app.paste(&text);
                }
                _ => {}
            }
        }

        app.tick(Instant::now());
    }

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(app.finish(Instant::now()))
}
