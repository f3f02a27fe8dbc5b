use rand::Rng;

use crate::sim::kinematics::Body;
use crate::sim::{Aabb, Vec2};

pub const HELI_W: f32 = 130.0;
pub const HELI_H: f32 = 52.0;
pub const GUN_W: f32 = 50.0;
pub const GUN_H: f32 = 120.0;

pub const MIN_FIRE_INTERVAL: f32 = 1.0;
pub const MAX_FIRE_INTERVAL: f32 = 3.0;
pub const FIRE_DISPLAY_DURATION: f32 = 0.15;
pub const BULLET_SPEED: f32 = 800.0;
pub const FALL_SPEED: f32 = 400.0;

pub const EXPLOSION_VARIANTS: usize = 2;

/// The helicopter: a drifting/seeking body plus its combat state.
#[derive(Clone, Debug)]
pub struct Helicopter {
    pub body: Body,
    pub exploded: bool,
    pub falling: bool,
    /// Sign convention from the sprite art: true while vel.x > 0.
    pub facing_left: bool,
    pub anim_clock: f32,
    pub explosion_variant: usize,
}

impl Helicopter {
    pub fn spawn(field_w: f32, field_h: f32) -> Self {
        Self {
            body: Body::centered(Vec2::new(HELI_W, HELI_H), field_w, field_h),
            exploded: false,
            falling: false,
            facing_left: false,
            anim_clock: 0.0,
            explosion_variant: 0,
        }
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.body.pos.x, self.body.pos.y, HELI_W, HELI_H)
    }

    /// Terminal transition: the helicopter stops, picks one of the explosion
    /// art variants and starts falling. Only a restart leaves this state.
    pub fn explode(&mut self, rng: &mut impl Rng) {
        self.exploded = true;
        self.falling = true;
        self.explosion_variant = rng.gen_range(0..EXPLOSION_VARIANTS);
        self.body.vel = Vec2::new(0.0, 0.0);
    }

    /// Drop toward the floor; on touchdown the falling flag clears and the
    /// wreck stays put.
    pub fn fall(&mut self, dt: f32) {
        self.body.pos.y -= FALL_SPEED * dt;
        if self.body.pos.y <= 0.0 {
            self.body.pos.y = 0.0;
            self.falling = false;
        }
    }
}

/// The ground gun: fixed emplacement, randomized fire timer, and a single
/// invisible bullet tracked by height only (it climbs straight up from the
/// muzzle).
#[derive(Clone, Debug)]
pub struct Gun {
    pub pos: Vec2,
    pub firing: bool,
    pub fire_timer: f32,
    pub next_fire_in: f32,
    pub fire_display_timer: f32,
    pub bullet_active: bool,
    pub bullet_y: f32,
}

impl Gun {
    pub fn emplace(field_w: f32, rng: &mut impl Rng) -> Self {
        Self {
            pos: Vec2::new((field_w - GUN_W) / 2.0, 0.0),
            firing: false,
            fire_timer: 0.0,
            next_fire_in: draw_fire_interval(rng),
            fire_display_timer: 0.0,
            bullet_active: false,
            bullet_y: 0.0,
        }
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, GUN_W, GUN_H)
    }

    pub fn muzzle_x(&self) -> f32 {
        self.pos.x + GUN_W / 2.0
    }

    /// Advance the fire timer. On reaching the deadline the gun shows its
    /// firing art for `FIRE_DISPLAY_DURATION`, redraws the next interval and
    /// launches a bullet from the muzzle.
    pub fn update_fire_timer(&mut self, dt: f32, rng: &mut impl Rng) {
        self.fire_timer += dt;
        if self.firing {
            self.fire_display_timer += dt;
            if self.fire_display_timer >= FIRE_DISPLAY_DURATION {
                self.firing = false;
                self.fire_display_timer = 0.0;
            }
        } else if self.fire_timer >= self.next_fire_in {
            self.firing = true;
            self.fire_timer = 0.0;
            self.next_fire_in = draw_fire_interval(rng);
            self.bullet_active = true;
            self.bullet_y = GUN_H;
        }
    }

    /// Climb the bullet and test it against the target. The bullet is a
    /// point at (muzzle x, bullet y); it dies above the top edge or on a
    /// hit, and a hit explodes a not-yet-exploded target.
    pub fn update_bullet(
        &mut self,
        dt: f32,
        field_h: f32,
        heli: &mut Helicopter,
        rng: &mut impl Rng,
    ) {
        if !self.bullet_active {
            return;
        }
        self.bullet_y += BULLET_SPEED * dt;
        if self.bullet_y > field_h {
            self.bullet_active = false;
        }
        if !heli.exploded && heli.hitbox().contains(self.muzzle_x(), self.bullet_y) {
            heli.explode(rng);
            self.bullet_active = false;
        }
    }

    /// Body-contact check: the helicopter counts as crashed into the gun
    /// when the overlap covers at least half the helicopter's area.
    pub fn body_overlap(&self, heli: &Helicopter) -> bool {
        self.hitbox().overlap_area(heli.hitbox()) >= heli.hitbox().area() * 0.5
    }
}

fn draw_fire_interval(rng: &mut impl Rng) -> f32 {
    rng.gen_range(MIN_FIRE_INTERVAL..MAX_FIRE_INTERVAL)
}
