use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::screens::{Screen, ScreenId, Transition};

const BANNER: &str = r#"
╔═══════════════════════════════════════════════╗
║  ██╗  ██╗███████╗██╗     ██╗                  ║
║  ██║  ██║██╔════╝██║     ██║   ▄▄▄▄▄▄▄▄▄▄     ║
║  ███████║█████╗  ██║     ██║    ▐█████▌▸      ║
║  ██╔══██║██╔══╝  ██║     ██║     ▘   ▘        ║
║  ██║  ██║███████╗███████╗██║  ARCADE          ║
║  ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝                  ║
╚═══════════════════════════════════════════════╝"#;

const MENU_OPTIONS: [&str; 3] = ["1. Helicopter Game", "2. Pong Game", "3. Exit"];

pub struct MenuScreen {
    selected: usize,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    fn choose(&self) -> Transition {
        match self.selected {
            0 => Transition::Switch(ScreenId::Helicopter),
            1 => Transition::Switch(ScreenId::Pong),
            _ => Transition::Quit,
        }
    }
}

impl Screen for MenuScreen {
    fn enter(&mut self) {
        self.selected = 0;
    }

    fn tick(&mut self, _dt: f32) {}

    fn handle_key(&mut self, key: KeyEvent) -> Option<Transition> {
        match key.code {
            KeyCode::Up => {
                self.selected = (self.selected + MENU_OPTIONS.len() - 1) % MENU_OPTIONS.len();
                None
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1) % MENU_OPTIONS.len();
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(self.choose()),
            KeyCode::Char('1') => {
                self.selected = 0;
                Some(self.choose())
            }
            KeyCode::Char('2') => {
                self.selected = 1;
                Some(self.choose())
            }
            KeyCode::Char('3') | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.selected = 2;
                Some(self.choose())
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(80, 200, 255)))
            .style(Style::default().bg(Color::Rgb(10, 10, 20)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = BANNER
            .lines()
            .skip(1)
            .map(|l| {
                Line::from(Span::styled(
                    l.to_string(),
                    Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD),
                ))
            })
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(""));
        for (i, option) in MENU_OPTIONS.iter().enumerate() {
            let style = if i == self.selected {
                Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Rgb(220, 220, 230))
            };
            let marker = if i == self.selected { "▶ " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Rgb(255, 220, 80))),
                Span::styled(*option, style),
            ]));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "↑/↓ navigate │ Enter select │ 1-3 jump",
            Style::default().fg(Color::Rgb(120, 120, 140)),
        )));

        // Center the whole column vertically.
        let content_h = lines.len() as u16;
        let top_pad = inner.height.saturating_sub(content_h) / 2;
        let menu_area = Rect::new(
            inner.x,
            inner.y + top_pad,
            inner.width,
            inner.height.saturating_sub(top_pad),
        );
        let p = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(p, menu_area);
    }

    fn teardown(&mut self) {}
}
