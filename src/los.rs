use crate::rasterizer::LineRasterizer;

// integer path helpers built on top of the line rasterizer

/// draws a line from start to end, both endpoints included
pub fn bresenham(start: (i32, i32), end: (i32, i32)) -> Vec<(i32, i32)> {
    let mut rasterizer = LineRasterizer::new(start.0, start.1, end.0, end.1);
    let mut path = Vec::with_capacity(rasterizer.len());

    while let Ok(pixel) = rasterizer.pixel() {
        path.push(pixel);
        rasterizer.next_fragment();
    }

    path
}

/// checks if end can be seen from start. only the pixels strictly between
/// the two endpoints are tested against `blocks`.
pub fn line_of_sight<F>(start: (i32, i32), end: (i32, i32), blocks: F) -> bool
where
    F: Fn(i32, i32) -> bool,
{
    let path = bresenham(start, end);
    if path.len() <= 2 {
        return true;
    }

    path[1..path.len() - 1].iter().all(|&(x, y)| !blocks(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_includes_both_endpoints() {
        let path = bresenham((2, 3), (-4, 0));
        assert_eq!(path.first(), Some(&(2, 3)));
        assert_eq!(path.last(), Some(&(-4, 0)));
        assert_eq!(path.len(), 7);
    }

    #[test]
    fn single_point_path() {
        assert_eq!(bresenham((5, 5), (5, 5)), vec![(5, 5)]);
    }

    #[test]
    fn wall_blocks_sight() {
        let wall = |x: i32, _y: i32| x == 3;
        assert!(!line_of_sight((0, 0), (6, 2), wall));
        assert!(line_of_sight((0, 0), (2, 2), wall));
    }

    #[test]
    fn endpoints_never_block() {
        let everything = |_x: i32, _y: i32| true;
        assert!(line_of_sight((0, 0), (1, 1), everything));
        assert!(line_of_sight((4, 4), (4, 4), everything));
        assert!(!line_of_sight((0, 0), (2, 0), everything));
    }
}
