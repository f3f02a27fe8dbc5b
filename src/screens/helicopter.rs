use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::screens::{Screen, ScreenId, Transition};
use crate::sim::combat::{Gun, Helicopter, HELI_H, HELI_W};
use crate::sim::{FIELD_H, FIELD_W};

const FRAME_DURATION: f32 = 0.1;

const ROTOR_FRAMES: [&str; 4] = [
    "╾═══════════╼ ",
    " ╾═════════╼  ",
    "  ╾═══════╼   ",
    " ╾═════════╼  ",
];

// Default art faces right; the mirrored set is built on enter.
const HELI_BODY: [&str; 2] = [
    "╘═╦╗▐████████▶",
    "   ╨──╨────╨  ",
];

const EXPLOSION_ART: [[&str; 3]; 2] = [
    [
        " ✶ ░▒▓█▓▒░ ✶  ",
        "  ▓█▒▓███▒▓   ",
        "   ░▒▓▓▓▒░    ",
    ],
    [
        "   ✶ ▒█▒ ✶    ",
        " ░▓██▓█▓██▓░  ",
        "  ░░▒▓▓▓▒░░   ",
    ],
];

const GUN_READY: [&str; 5] = ["  ║  ", "  ║  ", " ╔╩╗ ", " ║█║ ", "▄╨█╨▄"];
const GUN_FIRES: [&str; 5] = [" ✦╳✦ ", "  ║  ", " ╔╩╗ ", " ║█║ ", "▄╨█╨▄"];

/// Sprite art owned by the screen for its active lifetime. Allocated in
/// `enter`, dropped in `teardown`.
struct HeliArt {
    heli_right: Vec<Vec<String>>,
    heli_left: Vec<Vec<String>>,
    explosions: Vec<Vec<String>>,
    gun_ready: Vec<String>,
    gun_fires: Vec<String>,
}

impl HeliArt {
    fn build() -> Self {
        let heli_left: Vec<Vec<String>> = ROTOR_FRAMES
            .iter()
            .map(|rotor| {
                let mut lines = vec![rotor.to_string()];
                lines.extend(HELI_BODY.iter().map(|l| l.to_string()));
                lines
            })
            .collect();
        let heli_right = heli_left
            .iter()
            .map(|frame| frame.iter().map(|l| mirror_line(l)).collect())
            .collect();
        Self {
            heli_right,
            heli_left,
            explosions: EXPLOSION_ART
                .iter()
                .map(|v| v.iter().map(|l| l.to_string()).collect())
                .collect(),
            gun_ready: GUN_READY.iter().map(|l| l.to_string()).collect(),
            gun_fires: GUN_FIRES.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// Horizontal mirror for the sprite art, swapping directional glyphs.
fn mirror_line(line: &str) -> String {
    line.chars()
        .rev()
        .map(|c| match c {
            '▶' => '◀',
            '◀' => '▶',
            '▐' => '▌',
            '▌' => '▐',
            '╘' => '╛',
            '╛' => '╘',
            '╗' => '╔',
            '╔' => '╗',
            '╾' => '╼',
            '╼' => '╾',
            other => other,
        })
        .collect()
}

pub struct HelicopterScreen {
    heli: Helicopter,
    gun: Gun,
    rng: StdRng,
    art: Option<HeliArt>,
    /// Field area of the last render, for mapping mouse cells back into
    /// playfield coordinates.
    field_rect: Rect,
}

impl HelicopterScreen {
    pub fn new() -> Self {
        let mut rng = StdRng::from_entropy();
        Self {
            heli: Helicopter::spawn(FIELD_W, FIELD_H),
            gun: Gun::emplace(FIELD_W, &mut rng),
            rng,
            art: None,
            field_rect: Rect::default(),
        }
    }

    fn reset_game(&mut self) {
        self.heli = Helicopter::spawn(FIELD_W, FIELD_H);
        self.gun = Gun::emplace(FIELD_W, &mut self.rng);
    }

    fn aim_at_cell(&mut self, column: u16, row: u16) {
        let f = self.field_rect;
        if f.width == 0 || f.height == 0 {
            return;
        }
        if column < f.x || column >= f.x + f.width || row < f.y || row >= f.y + f.height {
            return;
        }
        let fx = (column - f.x) as f32 + 0.5;
        let fy = (row - f.y) as f32 + 0.5;
        let vx = fx / f.width as f32 * FIELD_W;
        let vy = (1.0 - fy / f.height as f32) * FIELD_H;
        // Target is centered on the cursor.
        self.heli.body.target.x = vx - HELI_W / 2.0;
        self.heli.body.target.y = vy - HELI_H / 2.0;
        self.heli.body.user_controlling = true;
    }

    fn render_field(&self, width: usize, height: usize) -> Vec<Line<'static>> {
        let w = width;
        let h = height;
        let bg = Color::Rgb(20, 20, 30);
        let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', Style::default().bg(bg)); w]; h];

        // Ground line along the bottom edge.
        if h > 0 {
            for x in 0..w {
                grid[h - 1][x] = ('▁', Style::default().fg(Color::Rgb(90, 110, 70)).bg(bg));
            }
        }

        let sx = w as f32 / FIELD_W;
        let sy = h as f32 / FIELD_H;

        let Some(art) = &self.art else {
            return finish_grid(grid);
        };

        // Gun, anchored at the bottom around the muzzle column.
        let gun_art = if self.gun.firing { &art.gun_fires } else { &art.gun_ready };
        let gun_w = gun_art[0].chars().count();
        let gun_col = (self.gun.muzzle_x() * sx) as isize - gun_w as isize / 2;
        let gun_row = h as isize - gun_art.len() as isize;
        blit(
            &mut grid,
            gun_row,
            gun_col,
            gun_art,
            Style::default().fg(Color::Rgb(170, 170, 150)).bg(bg),
        );

        // Helicopter or wreck. Anchored so the art's top row sits at the
        // body's top edge in field coordinates.
        let heli = &self.heli;
        let (sprite, style) = if heli.exploded {
            (
                &art.explosions[heli.explosion_variant],
                Style::default().fg(Color::Rgb(255, 140, 40)).bg(bg),
            )
        } else {
            let frame = ((heli.anim_clock / FRAME_DURATION) as usize) % ROTOR_FRAMES.len();
            let frames = if heli.facing_left { &art.heli_right } else { &art.heli_left };
            (
                &frames[frame],
                Style::default().fg(Color::Rgb(120, 200, 120)).bg(bg),
            )
        };
        let top = FIELD_H - (heli.body.pos.y + HELI_H);
        let heli_row = (top * sy) as isize;
        let heli_col = (heli.body.pos.x * sx) as isize;
        blit(&mut grid, heli_row, heli_col, sprite, style);

        // Seek marker while under user control.
        if heli.body.user_controlling && !heli.exploded {
            let tx = ((heli.body.target.x + HELI_W / 2.0) * sx) as isize;
            let ty = ((FIELD_H - (heli.body.target.y + HELI_H / 2.0)) * sy) as isize;
            if tx >= 0 && (tx as usize) < w && ty >= 0 && (ty as usize) < h {
                grid[ty as usize][tx as usize] =
                    ('┼', Style::default().fg(Color::Rgb(255, 220, 80)).bg(bg));
            }
        }

        finish_grid(grid)
    }
}

fn finish_grid(grid: Vec<Vec<(char, Style)>>) -> Vec<Line<'static>> {
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

/// Copy sprite lines into the grid, skipping spaces and clipping at the
/// edges.
fn blit(
    grid: &mut [Vec<(char, Style)>],
    top: isize,
    left: isize,
    lines: &[String],
    style: Style,
) {
    for (dy, line) in lines.iter().enumerate() {
        let row = top + dy as isize;
        if row < 0 || row as usize >= grid.len() {
            continue;
        }
        for (dx, ch) in line.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            let col = left + dx as isize;
            if col < 0 || col as usize >= grid[row as usize].len() {
                continue;
            }
            grid[row as usize][col as usize] = (ch, style);
        }
    }
}

impl Screen for HelicopterScreen {
    fn enter(&mut self) {
        self.art = Some(HeliArt::build());
        self.reset_game();
    }

    fn tick(&mut self, dt: f32) {
        self.heli.anim_clock += dt;
        self.gun.update_fire_timer(dt, &mut self.rng);
        self.gun
            .update_bullet(dt, FIELD_H, &mut self.heli, &mut self.rng);
        if self.heli.exploded {
            if self.heli.falling {
                self.heli.fall(dt);
            }
        } else {
            if self.gun.body_overlap(&self.heli) {
                self.heli.explode(&mut self.rng);
            } else if self.heli.body.user_controlling {
                self.heli.body.seek(dt);
            } else {
                self.heli.body.drift(dt, FIELD_W, FIELD_H);
            }
            self.heli.body.clamp_to_field(FIELD_W, FIELD_H);
            self.heli.facing_left = self.heli.body.vel.x > 0.0;
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Transition> {
        match key.code {
            KeyCode::Esc => Some(Transition::Switch(ScreenId::Menu)),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reset_game();
                None
            }
            _ => None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                self.aim_at_cell(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(120, 200, 120)))
            .title(" 🚁 Helicopter ")
            .title_style(Style::default().fg(Color::Rgb(140, 230, 140)).add_modifier(Modifier::BOLD));
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
                format!(
                    " Position: ({:.0}, {:.0}) ",
                    self.heli.body.pos.x, self.heli.body.pos.y
                ),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                if self.heli.exploded {
                    if self.heli.falling { "Going down!" } else { "Shot down" }
                } else if self.heli.body.user_controlling {
                    "Seeking"
                } else {
                    "Drifting"
                },
                Style::default().fg(Color::Rgb(180, 180, 200)),
            ),
        ]);
        frame.render_widget(Paragraph::new(status), chunks[0]);

        self.field_rect = chunks[1];
        let lines = self.render_field(chunks[1].width as usize, chunks[1].height as usize);
        frame.render_widget(Paragraph::new(lines), chunks[1]);

        let help = if self.heli.exploded && !self.heli.falling {
            Paragraph::new(Line::from(vec![
                Span::styled(" 💥 SHOT DOWN! ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::styled("Press R to restart, Esc for menu", Style::default().fg(Color::Gray)),
            ]))
        } else {
            Paragraph::new(Line::from(vec![
                Span::styled(" Click/Drag Move ", Style::default().fg(Color::DarkGray)),
                Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
                Span::styled("R Restart ", Style::default().fg(Color::DarkGray)),
                Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
                Span::styled("Esc Menu", Style::default().fg(Color::DarkGray)),
            ]))
        };
        frame.render_widget(help, chunks[2]);
    }

    fn teardown(&mut self) {
        self.art = None;
    }
}
