use serde::Serialize;

/// A rectangle in screen coordinates, stored as its four edges.
///
/// `right` and `bottom` are exclusive, matching Win32 `RECT`, so a
/// 200px wide window at x=100 has `left = 100` and `right = 300`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// A top-left position in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Builds a rectangle from its top-left corner and size.
    ///
    /// Edges saturate at the `i32` range.
    pub fn from_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x.saturating_add(width), y.saturating_add(height))
    }

    /// Width in pixels, saturating for spans wider than `i32::MAX`.
    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Returns the same-sized rectangle with its top-left corner at `origin`.
    pub fn moved_to(&self, origin: Point) -> Rect {
        Rect::from_size(origin.x, origin.y, self.width(), self.height())
    }

    /// Returns whether `other` lies entirely inside this rectangle.
    pub fn contains(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) {}x{}",
            self.left,
            self.top,
            self.width(),
            self.height()
        )
    }
}
