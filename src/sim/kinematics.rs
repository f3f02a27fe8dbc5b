use crate::sim::Vec2;

pub const MOVE_SPEED: f32 = 300.0;
pub const ARRIVAL_THRESHOLD: f32 = 5.0;
pub const DRIFT_VEL_X: f32 = 200.0;
pub const DRIFT_VEL_Y: f32 = 150.0;

/// A sprite-sized body that either drifts around the playfield, bouncing
/// off the edges, or seeks a user-chosen target point.
#[derive(Clone, Debug)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub target: Vec2,
    pub size: Vec2,
    pub user_controlling: bool,
}

impl Body {
    /// A body centered in the field with the standard drift velocity.
    pub fn centered(size: Vec2, field_w: f32, field_h: f32) -> Self {
        let pos = Vec2::new((field_w - size.x) / 2.0, (field_h - size.y) / 2.0);
        Self {
            pos,
            vel: Vec2::new(DRIFT_VEL_X, DRIFT_VEL_Y),
            target: pos,
            size,
            user_controlling: false,
        }
    }

    /// Move toward the target at `MOVE_SPEED`. Within the arrival threshold
    /// the body snaps to the target and control returns to drifting. The
    /// threshold check also keeps the normalization divide away from zero.
    ///
    /// Axis displacements past the threshold re-aim the stored drift
    /// velocity on that axis; the sign feeds the later bounce direction and
    /// the sprite facing.
    pub fn seek(&mut self, dt: f32) {
        let dx = self.target.x - self.pos.x;
        let dy = self.target.y - self.pos.y;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist < ARRIVAL_THRESHOLD {
            self.pos = self.target;
            self.user_controlling = false;
            return;
        }
        let step = (MOVE_SPEED * dt).min(dist);
        self.pos.x += dx / dist * step;
        self.pos.y += dy / dist * step;
        if dx.abs() > ARRIVAL_THRESHOLD {
            self.vel.x = if dx > 0.0 { DRIFT_VEL_X } else { -DRIFT_VEL_X };
        }
        if dy.abs() > ARRIVAL_THRESHOLD {
            self.vel.y = if dy > 0.0 { DRIFT_VEL_Y } else { -DRIFT_VEL_Y };
        }
    }

    /// Integrate velocity, reflecting off the field edges. Reflection only
    /// flips the sign of the offending axis; speed magnitude is unchanged.
    pub fn drift(&mut self, dt: f32, field_w: f32, field_h: f32) {
        self.pos.x += self.vel.x * dt;
        self.pos.y += self.vel.y * dt;
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = self.vel.x.abs();
        } else if self.pos.x + self.size.x > field_w {
            self.pos.x = field_w - self.size.x;
            self.vel.x = -self.vel.x.abs();
        }
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = self.vel.y.abs();
        } else if self.pos.y + self.size.y > field_h {
            self.pos.y = field_h - self.size.y;
            self.vel.y = -self.vel.y.abs();
        }
    }

    /// Unconditional clamp into `[0, field - size]` on both axes, run after
    /// either movement path.
    pub fn clamp_to_field(&mut self, field_w: f32, field_h: f32) {
        self.pos.x = self.pos.x.clamp(0.0, field_w - self.size.x);
        self.pos.y = self.pos.y.clamp(0.0, field_h - self.size.y);
    }
}
