use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
}

pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(tick_rate_ms);

        thread::spawn(move || loop {
            if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(crossterm::event::Event::Key(key)) => {
                        if key.kind == KeyEventKind::Press && tx.send(Event::Key(key)).is_err() {
                            return;
                        }
                    }
                    Ok(crossterm::event::Event::Mouse(mouse)) => {
                        // Only button presses and drags matter; bare motion
                        // would flood the channel.
                        let wanted = matches!(
                            mouse.kind,
                            MouseEventKind::Down(_) | MouseEventKind::Drag(_) | MouseEventKind::Up(_)
                        );
                        if wanted && tx.send(Event::Mouse(mouse)).is_err() {
                            return;
                        }
                    }
                    _ => {}
                }
            } else if tx.send(Event::Tick).is_err() {
                return;
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}
