//! Integer axis-aligned rectangles
//!
//! Screen-space convention: y grows downward, `right`/`bottom` are exclusive
//! (`right = x + w`). Positions are whole pixels so rect offsets line up with
//! mask cells exactly.

use glam::IVec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect of the given size whose center is as close to `center` as integer
    /// coordinates allow
    pub fn from_center(center: IVec2, w: i32, h: i32) -> Self {
        Self {
            x: center.x - w / 2,
            y: center.y - h / 2,
            w,
            h,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn set_center(&mut self, center: IVec2) {
        self.x = center.x - self.w / 2;
        self.y = center.y - self.h / 2;
    }

    /// Move the rect so its left edge sits at `v` (size unchanged)
    pub fn set_left(&mut self, v: i32) {
        self.x = v;
    }

    pub fn set_right(&mut self, v: i32) {
        self.x = v - self.w;
    }

    pub fn set_top(&mut self, v: i32) {
        self.y = v;
    }

    pub fn set_bottom(&mut self, v: i32) {
        self.y = v - self.h;
    }

    pub fn translate(&mut self, delta: IVec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_exclusive() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.left(), 10);
        assert_eq!(r.right(), 40);
        assert_eq!(r.top(), 20);
        assert_eq!(r.bottom(), 60);
    }

    #[test]
    fn center_round_trip() {
        let mut r = Rect::new(0, 0, 50, 50);
        r.set_center(IVec2::new(300, 200));
        assert_eq!(r.center(), IVec2::new(300, 200));
        assert_eq!((r.x, r.y), (275, 175));

        let same = Rect::from_center(IVec2::new(300, 200), 50, 50);
        assert_eq!(r, same);
    }

    #[test]
    fn edge_setters_keep_size() {
        let mut r = Rect::new(0, 0, 50, 50);
        r.set_right(599);
        assert_eq!(r.x, 549);
        assert_eq!(r.w, 50);
        r.set_bottom(399);
        assert_eq!(r.y, 349);
        assert_eq!(r.h, 50);
    }

    #[test]
    fn translate_moves_both_axes() {
        let mut r = Rect::new(5, 5, 10, 10);
        r.translate(IVec2::new(-3, 2));
        assert_eq!((r.x, r.y), (2, 7));
    }
}
