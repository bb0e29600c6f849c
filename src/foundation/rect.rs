//! Rect and Size value objects (integer pixels)

/// A width/height pair
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Display size assumed when no real screen is available
pub const DEFAULT_SCREEN_SIZE: Size = Size {
    width: 1440,
    height: 900,
};

/// A rectangle defined by its origin and size
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized rect at origin
    pub fn zero() -> Self {
        Self::default()
    }

    /// Create a rect of the given size centered inside `outer`
    pub fn centered_in(outer: Size, width: i32, height: i32) -> Self {
        Self {
            x: outer.width / 2 - width / 2,
            y: outer.height / 2 - height / 2,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// True when either dimension is non-positive
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_centered_in() {
        let rect = Rect::centered_in(Size::new(1440, 900), 400, 300);
        assert_eq!(rect, Rect::new(520, 300, 400, 300));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10, 10, 20, 20);
        assert!(rect.contains(10, 10));
        assert!(rect.contains(29, 29));
        assert!(!rect.contains(30, 30));
        assert!(!rect.contains(9, 15));
    }

    #[test]
    fn test_rect_is_empty() {
        assert!(Rect::zero().is_empty());
        assert!(Rect::new(0, 0, 10, -1).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }
}
