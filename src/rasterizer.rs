use std::iter::FusedIterator;

use crate::components::Vec3;
use crate::error::RasterError;

// scan-converts a straight line between two integer endpoints.
// see en.wikipedia.org/wiki/Bresenham's_line_algorithm#Algorithm

/// which axis drives the stepping loop. chosen once per line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Dominant {
    X,
    Y,
}

/// incremental generator of the pixels ("fragments") of a line.
///
/// the rasterizer is pull based: check [`LineRasterizer::more_fragments`], read the
/// current fragment with [`LineRasterizer::fragment`] (or [`LineRasterizer::x`] /
/// [`LineRasterizer::y`]), then move on with [`LineRasterizer::next_fragment`].
/// it can also be used as an `Iterator<Item = Vec3>`.
///
/// two conventions are kept on purpose since other code depends on the exact output:
/// - when |dx| == |dy| the x axis is dominant
/// - a zero delta still gets a step direction of +1
///
/// the minor axis only steps when the decision variable is strictly positive, so a line
/// that passes exactly through a pixel midpoint may pick a different pixel when it is
/// rasterized in the opposite direction.
#[derive(Clone, Debug)]
pub struct LineRasterizer {
    x_start: i32,
    y_start: i32,
    x_stop: i32,
    y_stop: i32,

    x_current: i32,
    y_current: i32,

    x_step: i32,
    y_step: i32,

    abs_2dx: i64, // 2 * |dx|
    abs_2dy: i64, // 2 * |dy|
    d: i64,       // decision variable

    dominant: Dominant,
    valid: bool,
}

impl LineRasterizer {
    /// creates a rasterizer for the line from (x1, y1) to (x2, y2)
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let mut rasterizer = LineRasterizer {
            x_start: 0,
            y_start: 0,
            x_stop: 0,
            y_stop: 0,
            x_current: 0,
            y_current: 0,
            x_step: 1,
            y_step: 1,
            abs_2dx: 0,
            abs_2dy: 0,
            d: 0,
            dominant: Dominant::X,
            valid: false,
        };
        rasterizer.init(x1, y1, x2, y2);
        rasterizer
    }

    /// restarts the rasterizer on a new line. any previous state is discarded and the
    /// start point becomes the current fragment, even for a zero length line.
    pub fn init(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.x_start = x1;
        self.y_start = y1;
        self.x_stop = x2;
        self.y_stop = y2;

        self.x_current = x1;
        self.y_current = y1;

        // deltas are widened so that any pair of i32 endpoints works
        let dx = x2 as i64 - x1 as i64;
        let dy = y2 as i64 - y1 as i64;

        self.x_step = if dx >= 0 { 1 } else { -1 };
        self.y_step = if dy >= 0 { 1 } else { -1 };

        let dx = dx.abs();
        let dy = dy.abs();

        self.abs_2dx = 2 * dx;
        self.abs_2dy = 2 * dy;

        if dx >= dy {
            self.d = self.abs_2dy - dx;
            self.dominant = Dominant::X;
        } else {
            self.d = self.abs_2dx - dy;
            self.dominant = Dominant::Y;
        }

        self.valid = true;
    }

    /// true while there is a current fragment that has not been consumed
    pub fn more_fragments(&self) -> bool {
        self.valid
    }

    /// moves to the next fragment of the line. once the stop point has been passed the
    /// rasterizer is exhausted, and further calls do nothing until the next `init`.
    pub fn next_fragment(&mut self) {
        if !self.valid {
            return;
        }

        match self.dominant {
            Dominant::X => self.step_x_dominant(),
            Dominant::Y => self.step_y_dominant(),
        }
    }

    /// the current fragment as (x, y, 0)
    pub fn fragment(&self) -> Result<Vec3, RasterError> {
        let (x, y) = self.current("fragment")?;
        Ok(Vec3::from_pixel(x, y))
    }

    /// the current fragment as an integer pixel
    pub fn pixel(&self) -> Result<(i32, i32), RasterError> {
        self.current("pixel")
    }

    pub fn x(&self) -> Result<i32, RasterError> {
        Ok(self.current("x")?.0)
    }

    pub fn y(&self) -> Result<i32, RasterError> {
        Ok(self.current("y")?.1)
    }

    /// drains every remaining fragment, in order from start to stop.
    /// the rasterizer is exhausted afterwards.
    pub fn all_fragments(&mut self) -> Vec<Vec3> {
        self.by_ref().collect()
    }

    pub fn start(&self) -> (i32, i32) {
        (self.x_start, self.y_start)
    }

    pub fn stop(&self) -> (i32, i32) {
        (self.x_stop, self.y_stop)
    }

    pub fn dominant(&self) -> Dominant {
        self.dominant
    }

    fn current(&self, accessor: &'static str) -> Result<(i32, i32), RasterError> {
        if !self.valid {
            return Err(RasterError::InvalidState { accessor });
        }
        Ok((self.x_current, self.y_current))
    }

    fn step_x_dominant(&mut self) {
        if self.x_current == self.x_stop {
            self.valid = false;
            return;
        }

        if self.d > 0 {
            self.y_current += self.y_step;
            self.d -= self.abs_2dx;
        }

        self.x_current += self.x_step;
        self.d += self.abs_2dy;
    }

    fn step_y_dominant(&mut self) {
        if self.y_current == self.y_stop {
            self.valid = false;
            return;
        }

        if self.d > 0 {
            self.x_current += self.x_step;
            self.d -= self.abs_2dy;
        }

        self.y_current += self.y_step;
        self.d += self.abs_2dx;
    }

    fn remaining(&self) -> usize {
        if !self.valid {
            return 0;
        }
        let left = match self.dominant {
            Dominant::X => (self.x_stop as i64 - self.x_current as i64).abs(),
            Dominant::Y => (self.y_stop as i64 - self.y_current as i64).abs(),
        };
        usize::try_from(left + 1).unwrap_or(usize::MAX)
    }
}

impl Default for LineRasterizer {
    fn default() -> Self {
        LineRasterizer::new(0, 0, 0, 0)
    }
}

impl Iterator for LineRasterizer {
    type Item = Vec3;

    fn next(&mut self) -> Option<Vec3> {
        let fragment = self.fragment().ok()?;
        self.next_fragment();
        Some(fragment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LineRasterizer {}

impl FusedIterator for LineRasterizer {}
