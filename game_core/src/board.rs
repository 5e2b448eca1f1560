use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box spanning `size` from the top-left corner `pos`
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Bounding box of a circle
    pub fn from_circle(center: Vec2, radius: f32) -> Self {
        let half = Vec2::splat(radius);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Strict overlap test: boxes that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.top() < other.bottom()
            && self.right() > other.left()
            && self.bottom() > other.top()
    }
}

/// The playfield, matching the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    pub width: f32,
    pub height: f32,
}

impl Board {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// X coordinate of the half-way line
    pub fn mid_x(&self) -> f32 {
        self.width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes() {
        let a = Aabb::from_pos_size(Vec2::new(0.0, 150.0), Vec2::new(10.0, 100.0));
        let b = Aabb::from_circle(Vec2::new(15.0, 200.0), 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::from_pos_size(Vec2::new(0.0, 150.0), Vec2::new(10.0, 100.0));
        // Circle's left edge sits exactly on the paddle's right edge
        let b = Aabb::from_circle(Vec2::new(20.0, 200.0), 10.0);
        assert!(!a.overlaps(&b), "Shared edge must not count as overlap");
    }

    #[test]
    fn test_vertically_disjoint_boxes() {
        let a = Aabb::from_pos_size(Vec2::new(0.0, 0.0), Vec2::new(10.0, 100.0));
        let b = Aabb::from_circle(Vec2::new(5.0, 150.0), 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_from_circle_edges() {
        let b = Aabb::from_circle(Vec2::new(400.0, 200.0), 10.0);
        assert_eq!(b.left(), 390.0);
        assert_eq!(b.right(), 410.0);
        assert_eq!(b.top(), 190.0);
        assert_eq!(b.bottom(), 210.0);
    }

    #[test]
    fn test_board_center_and_mid() {
        let board = Board::new(800.0, 400.0);
        assert_eq!(board.center(), Vec2::new(400.0, 200.0));
        assert_eq!(board.mid_x(), 400.0);
    }
}
