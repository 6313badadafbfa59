mod app;
mod ui;

use anyhow::Result;
use animal_farm::Farm;
use tracing::info;

pub use app::App;

/// Run the interactive console over the given farm
pub fn run_browser(farm: Farm) -> Result<()> {
    use crossterm::{
        event::{self, Event, KeyCode, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{backend::CrosstermBackend, Terminal};
    use std::{io, time::Duration};

    info!(farm = %farm.name, animals = farm.len(), "opening farm console");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(farm);
    let tick_rate = Duration::from_millis(100);

    // Main loop
    let result: Result<()> = loop {
        if let Err(err) = terminal.draw(|f| ui::draw_ui(f, &mut app)) {
            break Err(err.into());
        }

        match event::poll(tick_rate) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(err) => break Err(err.into()),
        }

        let key = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(err) => break Err(err.into()),
        };

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => break Ok(()),
            KeyCode::Down => app.next(),
            KeyCode::Up => app.previous(),
            KeyCode::Char('a') => app.perform_action(),
            KeyCode::Char('d') => app.perform_duty(),
            KeyCode::Char('e') => app.eat(),
            KeyCode::Char('s') => app.sleep(),
            KeyCode::Char('h') => app.make_hungry(),
            KeyCode::Char('z') => app.make_sleepy(),
            KeyCode::Tab => app.cycle_action(),
            KeyCode::BackTab => app.cycle_duty(),
            _ => {}
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
