use std::f32::consts::{FRAC_PI_3, FRAC_PI_4};

use rand::Rng;

use crate::sim::{Aabb, Vec2, FIELD_H, FIELD_W};

pub const PADDLE_W: f32 = 15.0;
pub const PADDLE_H: f32 = 80.0;
pub const PADDLE_SPEED: f32 = 400.0;
pub const PADDLE_MARGIN: f32 = 30.0;
pub const BALL_SIZE: f32 = 15.0;
pub const INITIAL_BALL_SPEED: f32 = 300.0;
pub const BALL_SPEED_INCREMENT: f32 = 20.0;
pub const WINNING_SCORE: u32 = 21;

const AI_DEADBAND: f32 = 10.0;
const AI_SPEED_FACTOR: f32 = 0.7;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Side {
    Left,
    Right,
}

/// A complete Pong match: two paddles, the ball, scores and mode.
/// All coordinates live in the virtual playfield.
#[derive(Clone, Debug)]
pub struct PongMatch {
    pub left_y: f32,
    pub right_y: f32,
    pub ball: Vec2,
    pub ball_vel: Vec2,
    /// Current rally speed; never decreases between restarts.
    pub ball_speed: f32,
    pub left_score: u32,
    pub right_score: u32,
    pub game_over: bool,
    pub winner: &'static str,
    pub single_player: bool,
}

impl PongMatch {
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut m = Self {
            left_y: 0.0,
            right_y: 0.0,
            ball: Vec2::default(),
            ball_vel: Vec2::default(),
            ball_speed: INITIAL_BALL_SPEED,
            left_score: 0,
            right_score: 0,
            game_over: false,
            winner: "",
            single_player: true,
        };
        m.reset(rng);
        m
    }

    /// Full-match restart: scores, paddles, rally speed and the game-over
    /// state all go back to their initial values.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.left_y = FIELD_H / 2.0 - PADDLE_H / 2.0;
        self.right_y = self.left_y;
        self.left_score = 0;
        self.right_score = 0;
        self.game_over = false;
        self.winner = "";
        self.ball_speed = INITIAL_BALL_SPEED;
        self.serve(rng);
    }

    /// Put the ball at court center with a fresh launch angle. Keeps the
    /// accumulated rally speed; only `reset` winds that back.
    fn serve(&mut self, rng: &mut impl Rng) {
        self.ball = Vec2::new(
            FIELD_W / 2.0 - BALL_SIZE / 2.0,
            FIELD_H / 2.0 - BALL_SIZE / 2.0,
        );
        let angle = rng.gen_range(-FRAC_PI_4..FRAC_PI_4);
        let dir = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.ball_vel = Vec2::new(
            dir * self.ball_speed * angle.cos(),
            self.ball_speed * angle.sin(),
        );
    }

    /// Move one paddle by a held intent in [-1, 1], clamped to the court.
    pub fn move_paddle(&mut self, side: Side, intent: f32, dt: f32) {
        let y = match side {
            Side::Left => &mut self.left_y,
            Side::Right => &mut self.right_y,
        };
        *y = (*y + intent * PADDLE_SPEED * dt).clamp(0.0, FIELD_H - PADDLE_H);
    }

    pub fn toggle_mode(&mut self) {
        self.single_player = !self.single_player;
    }

    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        if self.game_over {
            return;
        }

        if self.single_player {
            self.drive_ai(dt);
        }

        self.ball.x += self.ball_vel.x * dt;
        self.ball.y += self.ball_vel.y * dt;

        // Top/bottom walls reflect the vertical component only.
        if self.ball.y <= 0.0 {
            self.ball.y = 0.0;
            self.ball_vel.y = self.ball_vel.y.abs();
        } else if self.ball.y + BALL_SIZE >= FIELD_H {
            self.ball.y = FIELD_H - BALL_SIZE;
            self.ball_vel.y = -self.ball_vel.y.abs();
        }

        let ball_box = Aabb::new(self.ball.x, self.ball.y, BALL_SIZE, BALL_SIZE);
        let left_x = PADDLE_MARGIN;
        let right_x = FIELD_W - PADDLE_MARGIN - PADDLE_W;
        if ball_box.intersects(Aabb::new(left_x, self.left_y, PADDLE_W, PADDLE_H)) {
            self.ball.x = left_x + PADDLE_W;
            self.ball_vel.x = self.ball_vel.x.abs();
            self.ramp_speed();
            self.redirect(self.left_y);
        } else if ball_box.intersects(Aabb::new(right_x, self.right_y, PADDLE_W, PADDLE_H)) {
            self.ball.x = right_x - BALL_SIZE;
            self.ball_vel.x = -self.ball_vel.x.abs();
            self.ramp_speed();
            self.redirect(self.right_y);
        }

        if self.ball.x + BALL_SIZE < 0.0 {
            self.right_score += 1;
            self.check_winner();
            if !self.game_over {
                self.serve(rng);
            }
        } else if self.ball.x > FIELD_W {
            self.left_score += 1;
            self.check_winner();
            if !self.game_over {
                self.serve(rng);
            }
        }
    }

    /// Right-paddle AI: chase the ball center at 70% paddle speed, with a
    /// deadband so it doesn't jitter when already lined up.
    fn drive_ai(&mut self, dt: f32) {
        let paddle_center = self.right_y + PADDLE_H / 2.0;
        let ball_center = self.ball.y + BALL_SIZE / 2.0;
        let ai_speed = PADDLE_SPEED * AI_SPEED_FACTOR;
        if ball_center > paddle_center + AI_DEADBAND {
            self.right_y += ai_speed * dt;
        } else if ball_center < paddle_center - AI_DEADBAND {
            self.right_y -= ai_speed * dt;
        }
        self.right_y = self.right_y.clamp(0.0, FIELD_H - PADDLE_H);
    }

    /// Each paddle contact adds a fixed increment to the rally speed and
    /// rescales the velocity vector to the new magnitude.
    fn ramp_speed(&mut self) {
        self.ball_speed += BALL_SPEED_INCREMENT;
        let speed = self.ball_vel.len();
        let ratio = self.ball_speed / speed;
        self.ball_vel.x *= ratio;
        self.ball_vel.y *= ratio;
    }

    /// Re-aim the ball from where it struck the paddle: the offset from the
    /// paddle center maps into a bounded angle, horizontal sign preserved
    /// from the bounce.
    fn redirect(&mut self, paddle_y: f32) {
        let hit = (self.ball.y + BALL_SIZE / 2.0 - paddle_y) / PADDLE_H;
        let angle = (hit - 0.5) * FRAC_PI_3;
        let dir = if self.ball_vel.x > 0.0 { 1.0 } else { -1.0 };
        self.ball_vel.x = dir * self.ball_speed * angle.cos();
        self.ball_vel.y = self.ball_speed * angle.sin();
    }

    fn check_winner(&mut self) {
        if self.left_score >= WINNING_SCORE {
            self.game_over = true;
            self.winner = if self.single_player { "YOU WIN!" } else { "LEFT WINS!" };
        } else if self.right_score >= WINNING_SCORE {
            self.game_over = true;
            self.winner = if self.single_player { "AI WINS!" } else { "RIGHT WINS!" };
        }
    }
}
