//! Integer rectangles for clip regions and blits.

use serde::Serialize;

/// An axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle spanning two corners, `(x0, y0)` inclusive and `(x1, y1)`
    /// exclusive. Extents that do not fit an `i32` saturate.
    pub const fn from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }

    /// Width and height of the span between two corners, or `None` when it
    /// does not fit an `i32`.
    pub const fn checked_from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Option<Self> {
        match (x1.checked_sub(x0), y1.checked_sub(y0)) {
            (Some(w), Some(h)) => Some(Self::new(x0, y0, w, h)),
            _ => None,
        }
    }

    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Smallest rectangle covering both. Empty operands are ignored.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Rect::from_corners(
            self.x.min(other.x),
            self.y.min(other.y),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    /// Overlap of the two rectangles, or `None` when they do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        let r = Rect::from_corners(x0, y0, x1, y1);
        (!r.is_empty()).then_some(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_and_edges() {
        let r = Rect::from_corners(2, 3, 12, 8);
        assert_eq!(r, Rect::new(2, 3, 10, 5));
        assert_eq!(r.right(), 12);
        assert_eq!(r.bottom(), 8);
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains(0, 0));
        assert!(r.contains(9, 9));
        assert!(!r.contains(10, 5));
        assert!(!r.contains(-1, 5));
    }

    #[test]
    fn union_covers_both() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(10, 2, 5, 10);
        assert_eq!(a.union(&b), Rect::new(0, 0, 15, 12));
    }

    #[test]
    fn union_skips_empty() {
        let a = Rect::new(4, 4, 2, 2);
        assert_eq!(a.union(&Rect::default()), a);
        assert_eq!(Rect::default().union(&a), a);
    }

    #[test]
    fn intersect_overlap_and_disjoint() {
        let a = Rect::new(0, 0, 10, 10);
        assert_eq!(a.intersect(&Rect::new(5, 5, 10, 10)), Some(Rect::new(5, 5, 5, 5)));
        assert_eq!(a.intersect(&Rect::new(10, 0, 5, 5)), None);
    }

    #[test]
    fn extreme_corners_saturate() {
        let r = Rect::from_corners(i32::MIN, 0, i32::MAX, 10);
        assert_eq!(r.w, i32::MAX);
        assert_eq!(Rect::new(i32::MAX - 1, 0, 10, 10).right(), i32::MAX);
        assert_eq!(Rect::checked_from_corners(i32::MIN, 0, 1, 10), None);
        assert_eq!(Rect::checked_from_corners(-5, 0, 5, 10), Some(Rect::new(-5, 0, 10, 10)));
    }

    #[test]
    fn union_and_intersect_near_limits() {
        let far = Rect::new(i32::MAX - 4, i32::MAX - 4, 100, 100);
        let near = Rect::new(i32::MIN, i32::MIN, 10, 10);
        let u = near.union(&far);
        assert_eq!((u.x, u.y), (i32::MIN, i32::MIN));
        assert_eq!(u.w, i32::MAX);
        assert_eq!(
            far.intersect(&Rect::new(i32::MAX - 2, i32::MAX - 2, 50, 50)),
            Some(Rect::new(i32::MAX - 2, i32::MAX - 2, 2, 2))
        );
    }
}
