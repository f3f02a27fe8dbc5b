use std::io;
use std::time::Instant;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use heli_arcade::app::App;
use heli_arcade::event::{Event, EventHandler};
use heli_arcade::ui;

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Create app and event handler
    let mut app = App::new();
    let event_handler = EventHandler::new(16); // ~60 FPS
    let mut last_tick = Instant::now();

    // Main loop
    loop {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        match event_handler.next()? {
            Event::Tick => {
                let now = Instant::now();
                app.on_tick(now.duration_since(last_tick).as_secs_f32());
                last_tick = now;
            }
            Event::Key(key) => app.on_key(key),
            Event::Mouse(mouse) => app.on_mouse(mouse),
        }

        if app.should_quit {
            break;
        }
    }

    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
