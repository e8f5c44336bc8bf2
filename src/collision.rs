/// Rectangle tests for arena geometry
///
/// Two flavours of AABB check live here:
///
/// - `aabb_intersect`: strict overlap between two boxes. Boxes that only touch
///   along an edge do not intersect.
/// - `contains_inclusive`: point-in-box where points on the border count as
///   inside. The ring's zone predicates are built on this.
///
/// Detection only; nothing here pushes objects apart.
use sdl2::rect::Rect;

/// Checks if two axis-aligned bounding boxes overlap.
///
/// # Example
///
/// ```rust
/// let table = Rect::new(50, 400, 80, 50);
/// let steps = Rect::new(680, 420, 60, 30);
/// assert!(!aabb_intersect(&table, &steps));
/// ```
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Point-in-rectangle with inclusive bounds on all four sides.
///
/// Unlike `Rect::contains_point`, a point on the right or bottom edge is inside.
pub fn contains_inclusive(rect: &Rect, x: i32, y: i32) -> bool {
    x >= rect.x() && x <= rect.right() && y >= rect.y() && y <= rect.bottom()
}

/// Grows a rectangle by `margin` pixels on every side
pub fn inflate(rect: &Rect, margin: u32) -> Rect {
    let m = margin as i32;
    Rect::new(
        rect.x() - m,
        rect.y() - m,
        rect.width() + margin * 2,
        rect.height() + margin * 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_intersect_overlapping() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(16, 16, 32, 32);

        assert!(aabb_intersect(&rect_a, &rect_b));
        assert!(aabb_intersect(&rect_b, &rect_a));
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(32, 0, 32, 32);

        assert!(!aabb_intersect(&rect_a, &rect_b));
        assert!(!aabb_intersect(&rect_b, &rect_a));
    }

    #[test]
    fn test_aabb_intersect_separated() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(100, 100, 32, 32);

        assert!(!aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_aabb_intersect_contained() {
        let large = Rect::new(0, 0, 100, 100);
        let small = Rect::new(25, 25, 50, 50);

        assert!(aabb_intersect(&large, &small));
        assert!(aabb_intersect(&small, &large));
    }

    #[test]
    fn test_contains_inclusive_edges() {
        let rect = Rect::new(150, 150, 500, 200);

        assert!(contains_inclusive(&rect, 150, 150));
        assert!(contains_inclusive(&rect, 650, 350));
        assert!(contains_inclusive(&rect, 400, 250));
        assert!(!contains_inclusive(&rect, 149, 200));
        assert!(!contains_inclusive(&rect, 651, 200));
        assert!(!contains_inclusive(&rect, 400, 351));
    }

    #[test]
    fn test_inflate() {
        let area = Rect::new(200, 450, 80, 20);
        assert_eq!(inflate(&area, 10), Rect::new(190, 440, 100, 40));
        assert_eq!(inflate(&area, 0), area);
    }
}
