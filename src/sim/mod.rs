pub mod combat;
pub mod kinematics;
pub mod pong;

/// The simulation runs in a fixed virtual playfield measured in pixels,
/// y-up with the floor at y = 0. Rendering scales this into terminal cells.
pub const FIELD_W: f32 = 800.0;
pub const FIELD_H: f32 = 600.0;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn len(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Axis-aligned box, origin at the bottom-left corner.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn area(self) -> f32 {
        self.w * self.h
    }

    /// Plain edge-overlap intersection test.
    pub fn intersects(self, other: Aabb) -> bool {
        self.x + self.w > other.x
            && self.x < other.x + other.w
            && self.y + self.h > other.y
            && self.y < other.y + other.h
    }

    /// Area shared with `other`; zero when the boxes are disjoint.
    pub fn overlap_area(self, other: Aabb) -> f32 {
        let ox = ((self.x + self.w).min(other.x + other.w) - self.x.max(other.x)).max(0.0);
        let oy = ((self.y + self.h).min(other.y + other.h) - self.y.max(other.y)).max(0.0);
        ox * oy
    }

    /// Edge-inclusive point test.
    pub fn contains(self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }
}
