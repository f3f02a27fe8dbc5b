use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::screens::{Screen, ScreenId, Transition};
use crate::sim::pong::{
    PongMatch, Side, BALL_SIZE, PADDLE_H, PADDLE_MARGIN, PADDLE_W,
};
use crate::sim::{FIELD_H, FIELD_W};

/// Terminal key-repeat stands in for held keys: each press/repeat keeps the
/// movement intent alive for this long.
const HOLD_WINDOW: f32 = 0.2;

#[derive(Default)]
struct PaddleIntent {
    dir: f32,
    hold: f32,
}

impl PaddleIntent {
    fn press(&mut self, dir: f32) {
        self.dir = dir;
        self.hold = HOLD_WINDOW;
    }
}

pub struct PongScreen {
    game: PongMatch,
    rng: StdRng,
    left: PaddleIntent,
    right: PaddleIntent,
}

impl PongScreen {
    pub fn new() -> Self {
        let mut rng = StdRng::from_entropy();
        let game = PongMatch::new(&mut rng);
        Self {
            game,
            rng,
            left: PaddleIntent::default(),
            right: PaddleIntent::default(),
        }
    }

    fn render_court(&self, width: usize, height: usize) -> Vec<Line<'static>> {
        let w = width;
        let h = height;
        let bg = Color::Rgb(5, 5, 10);
        let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', Style::default().bg(bg)); w]; h];

        let sx = w as f32 / FIELD_W;
        let sy = h as f32 / FIELD_H;
        let white = Style::default().fg(Color::White).bg(bg);
        let dim = Style::default().fg(Color::Rgb(90, 90, 110)).bg(bg);

        // Center dashed line, one dash per 30 field pixels.
        let mid = w / 2;
        let mut fy = 0.0;
        while fy < FIELD_H {
            let row = (fy * sy) as usize;
            if row < h && mid < w {
                grid[row][mid] = ('┆', dim);
            }
            fy += 30.0;
        }

        // Paddles: a vertical bar spanning the paddle's scaled height.
        for (px, py) in [
            (PADDLE_MARGIN, self.game.left_y),
            (FIELD_W - PADDLE_MARGIN - PADDLE_W, self.game.right_y),
        ] {
            let col = ((px + PADDLE_W / 2.0) * sx) as usize;
            let top = ((FIELD_H - (py + PADDLE_H)) * sy) as usize;
            let rows = ((PADDLE_H * sy) as usize).max(1);
            for dy in 0..rows {
                let row = top + dy;
                if row < h && col < w {
                    grid[row][col] = ('█', white);
                }
            }
        }

        // Ball.
        let bc = ((self.game.ball.x + BALL_SIZE / 2.0) * sx) as usize;
        let br = ((FIELD_H - (self.game.ball.y + BALL_SIZE / 2.0)) * sy) as usize;
        if br < h && bc < w {
            grid[br][bc] = ('●', Style::default().fg(Color::White).bg(bg).add_modifier(Modifier::BOLD));
        }

        // Scores at the quarter points, near the top.
        let score_style = Style::default().fg(Color::Rgb(180, 180, 200)).bg(bg).add_modifier(Modifier::BOLD);
        put_text(&mut grid, 1, w / 4, &self.game.left_score.to_string(), score_style);
        put_text(&mut grid, 1, 3 * w / 4, &self.game.right_score.to_string(), score_style);

        if self.game.game_over {
            let banner_style = Style::default().fg(Color::Yellow).bg(bg).add_modifier(Modifier::BOLD);
            let hint_style = Style::default().fg(Color::Rgb(180, 180, 200)).bg(bg);
            let winner = self.game.winner;
            put_text(&mut grid, h / 2, w.saturating_sub(winner.len()) / 2, winner, banner_style);
            let hint = "Press R to restart";
            if h / 2 + 2 < h {
                put_text(&mut grid, h / 2 + 2, w.saturating_sub(hint.len()) / 2, hint, hint_style);
            }
        }

        grid.into_iter()
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .into_iter()
                    .map(|(ch, style)| Span::styled(String::from(ch), style))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

fn put_text(grid: &mut [Vec<(char, Style)>], row: usize, col: usize, text: &str, style: Style) {
    if row >= grid.len() {
        return;
    }
    for (i, ch) in text.chars().enumerate() {
        let c = col + i;
        if c < grid[row].len() {
            grid[row][c] = (ch, style);
        }
    }
}

impl Screen for PongScreen {
    fn enter(&mut self) {
        self.game.reset(&mut self.rng);
        self.left = PaddleIntent::default();
        self.right = PaddleIntent::default();
    }

    fn tick(&mut self, dt: f32) {
        if self.left.hold > 0.0 {
            self.game.move_paddle(Side::Left, self.left.dir, dt);
            self.left.hold -= dt;
        }
        if !self.game.single_player && self.right.hold > 0.0 {
            self.game.move_paddle(Side::Right, self.right.dir, dt);
            self.right.hold -= dt;
        }
        self.game.update(dt, &mut self.rng);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Transition> {
        match key.code {
            KeyCode::Esc => return Some(Transition::Switch(ScreenId::Menu)),
            KeyCode::Char('r') | KeyCode::Char('R') => self.game.reset(&mut self.rng),
            KeyCode::Char('t') | KeyCode::Char('T') => self.game.toggle_mode(),
            KeyCode::Char('w') | KeyCode::Char('W') => self.left.press(1.0),
            KeyCode::Char('s') | KeyCode::Char('S') => self.left.press(-1.0),
            KeyCode::Up => self.right.press(1.0),
            KeyCode::Down => self.right.press(-1.0),
            _ => {}
        }
        None
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(200, 200, 220)))
            .title(" 🏓 Pong ")
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(8),
                Constraint::Length(1),
            ])
            .split(inner);

        let status = Line::from(vec![
            Span::styled(
                format!(" {} ─ {} ", self.game.left_score, self.game.right_score),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                if self.game.single_player { "Single Player" } else { "Multiplayer" },
                Style::default().fg(Color::Rgb(80, 200, 255)),
            ),
            Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("Ball: {:.0} px/s", self.game.ball_speed),
                Style::default().fg(Color::Rgb(180, 180, 200)),
            ),
        ]);
        frame.render_widget(Paragraph::new(status), chunks[0]);

        let lines = self.render_court(chunks[1].width as usize, chunks[1].height as usize);
        frame.render_widget(Paragraph::new(lines), chunks[1]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" W/S Left ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("↑/↓ Right ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("T Mode ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("R Restart ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("Esc Menu", Style::default().fg(Color::DarkGray)),
        ]));
        frame.render_widget(help, chunks[2]);
    }

    fn teardown(&mut self) {}
}
