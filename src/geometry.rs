/// Axis-aligned integer geometry.
///
/// The whole game world is rectangles: the bird is one, every obstacle
/// segment is one.  Coordinates grow rightward and downward.

/// An axis-aligned rectangle.  `width` and `height` are always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Rect {
        Rect { x, y, width, height }
    }

    /// X coordinate one past the rightmost column covered.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Y coordinate one past the bottommost row covered.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Horizontal midpoint.
    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// True when the interiors overlap.  Rectangles that merely share an
    /// edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
