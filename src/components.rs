use serde::{Deserialize, Serialize};

/// a point in 3d space. fragments are reported in this form so that
/// downstream rendering code can consume them directly.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// builds the point for an integer pixel. z is always 0.
    pub fn from_pixel(x: i32, y: i32) -> Self {
        Self {
            x: x as f32,
            y: y as f32,
            z: 0.0,
        }
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// a cell on the viewer canvas
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn as_pixel(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// a committed line between two canvas cells
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Segment {
    pub start: Position,
    pub end: Position,
}

impl Segment {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}
