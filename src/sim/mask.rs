//! Pixel occupancy masks and the overlap test behind all collision
//!
//! A mask marks which pixels of a sprite are solid. Collision between two
//! sprites is a set intersection of their masks at the offset given by their
//! rectangle positions - no bounding-box approximation beyond the initial
//! intersection window.

use super::rect::Rect;

/// Alpha values above this count as solid when building a mask from an image
pub const ALPHA_THRESHOLD: u8 = 127;

/// Binary occupancy grid matching a sprite's rectangle dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl PixelMask {
    /// All-transparent mask
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; (width * height) as usize],
        }
    }

    /// All-solid mask (synthetic sprites in tests and headless runs)
    pub fn filled(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![true; (width * height) as usize],
        }
    }

    /// Build a mask from tightly packed RGBA bytes, solid where alpha exceeds
    /// [`ALPHA_THRESHOLD`]
    pub fn from_alpha(width: u32, height: u32, rgba: &[u8]) -> Self {
        debug_assert_eq!(rgba.len(), (width * height * 4) as usize);
        let bits = rgba
            .chunks_exact(4)
            .map(|px| px[3] > ALPHA_THRESHOLD)
            .collect();
        Self {
            width,
            height,
            bits,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.bits[(y * self.width + x) as usize]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, solid: bool) {
        self.bits[(y * self.width + x) as usize] = solid;
    }

    /// Whether any pixel is solid
    pub fn any(&self) -> bool {
        self.bits.iter().any(|&b| b)
    }

    /// True iff any solid pixel of `self` coincides with a solid pixel of
    /// `other` when `other`'s top-left corner sits at `offset` relative to
    /// `self`'s top-left corner
    pub fn overlap(&self, other: &Self, offset: (i32, i32)) -> bool {
        let (ox, oy) = offset;
        let x_start = ox.max(0);
        let x_end = (ox + other.width as i32).min(self.width as i32);
        let y_start = oy.max(0);
        let y_end = (oy + other.height as i32).min(self.height as i32);

        for y in y_start..y_end {
            for x in x_start..x_end {
                if self.get(x as u32, y as u32) && other.get((x - ox) as u32, (y - oy) as u32) {
                    return true;
                }
            }
        }
        false
    }

    /// Rotate the mask by `angle_deg` (clockwise in screen coordinates) about
    /// its center, producing a mask sized to the rotated bounding box.
    ///
    /// Always rotate from the unrotated source mask; re-rotating an already
    /// rotated mask accumulates resampling error.
    pub fn rotated(&self, angle_deg: f32) -> Self {
        let theta = angle_deg.to_radians();
        let (sin, cos) = theta.sin_cos();
        let (w, h) = (self.width as f32, self.height as f32);

        // The epsilon keeps trig noise at right angles (cos 90 != exactly 0)
        // from inflating the box by a pixel
        let new_w = (w * cos.abs() + h * sin.abs() - 1e-3).ceil().max(1.0) as u32;
        let new_h = (w * sin.abs() + h * cos.abs() - 1e-3).ceil().max(1.0) as u32;
        let mut out = Self::empty(new_w, new_h);

        let (cx, cy) = (w / 2.0, h / 2.0);
        let (ncx, ncy) = (new_w as f32 / 2.0, new_h as f32 / 2.0);

        // Inverse-map each destination pixel center back into the source
        for y in 0..new_h {
            for x in 0..new_w {
                let dx = x as f32 + 0.5 - ncx;
                let dy = y as f32 + 0.5 - ncy;
                let sx = (cos * dx + sin * dy + cx).floor() as i32;
                let sy = (-sin * dx + cos * dy + cy).floor() as i32;
                if sx >= 0
                    && sy >= 0
                    && (sx as u32) < self.width
                    && (sy as u32) < self.height
                    && self.get(sx as u32, sy as u32)
                {
                    out.set(x, y, true);
                }
            }
        }
        out
    }
}

/// Pixel-perfect collision between two positioned masks
///
/// Masks must match the current dimensions of their rectangles; that is the
/// caller's responsibility (the sim regenerates rotating masks every frame).
pub fn pixel_collision(mask_a: &PixelMask, rect_a: Rect, mask_b: &PixelMask, rect_b: Rect) -> bool {
    mask_a.overlap(mask_b, (rect_b.x - rect_a.x, rect_b.y - rect_a.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn self_overlap_at_zero_offset() {
        let mask = PixelMask::filled(4, 4);
        assert!(mask.overlap(&mask, (0, 0)));
    }

    #[test]
    fn empty_mask_never_overlaps() {
        let empty = PixelMask::empty(4, 4);
        let full = PixelMask::filled(4, 4);
        assert!(!empty.overlap(&full, (0, 0)));
        assert!(!full.overlap(&empty, (0, 0)));
    }

    #[test]
    fn disjoint_offset_misses() {
        let a = PixelMask::filled(4, 4);
        let b = PixelMask::filled(4, 4);
        assert!(!a.overlap(&b, (4, 0)));
        assert!(!a.overlap(&b, (0, -4)));
        assert!(a.overlap(&b, (3, 3)));
    }

    #[test]
    fn from_alpha_uses_threshold() {
        // Four pixels with alpha 0, 127, 128, 255
        let rgba = [
            0, 0, 0, 0, //
            0, 0, 0, 127, //
            0, 0, 0, 128, //
            0, 0, 0, 255,
        ];
        let mask = PixelMask::from_alpha(4, 1, &rgba);
        assert!(!mask.get(0, 0));
        assert!(!mask.get(1, 0));
        assert!(mask.get(2, 0));
        assert!(mask.get(3, 0));
    }

    #[test]
    fn pixel_collision_uses_rect_offsets() {
        let mask = PixelMask::filled(2, 2);
        let a = Rect::new(0, 0, 2, 2);
        assert!(!pixel_collision(&mask, a, &mask, Rect::new(2, 0, 2, 2)));
        assert!(pixel_collision(&mask, a, &mask, Rect::new(1, 0, 2, 2)));
        assert!(pixel_collision(&mask, a, &mask, Rect::new(-1, -1, 2, 2)));
    }

    #[test]
    fn collision_respects_transparent_pixels() {
        // Two L-shapes whose boxes overlap but whose solid pixels do not
        let mut a = PixelMask::empty(2, 2);
        a.set(0, 0, true);
        let mut b = PixelMask::empty(2, 2);
        b.set(1, 1, true);
        let rect = Rect::new(0, 0, 2, 2);
        assert!(!pixel_collision(&a, rect, &b, rect));
        assert!(pixel_collision(&a, rect, &a, rect));
    }

    #[test]
    fn rotated_zero_is_identity() {
        let mut mask = PixelMask::empty(5, 3);
        mask.set(1, 2, true);
        mask.set(4, 0, true);
        assert_eq!(mask.rotated(0.0), mask);
    }

    #[test]
    fn rotated_quarter_turn_swaps_dimensions() {
        let mask = PixelMask::filled(6, 2);
        let turned = mask.rotated(90.0);
        assert_eq!(turned.width(), 2);
        assert_eq!(turned.height(), 6);
        assert!(turned.any());
    }

    #[test]
    fn rotated_diagonal_grows_bounding_box() {
        let mask = PixelMask::filled(10, 10);
        let turned = mask.rotated(45.0);
        assert!(turned.width() > 10);
        assert!(turned.height() > 10);
        assert!(turned.any());
    }

    #[test]
    fn right_angle_rotations_preserve_solidity() {
        let mut mask = PixelMask::empty(5, 3);
        mask.set(0, 0, true);
        mask.set(4, 2, true);
        for angle in [90.0, 180.0, 270.0] {
            let turned = mask.rotated(angle);
            assert!(turned.any(), "solid pixels lost at {angle} degrees");
        }
        assert_eq!(mask.rotated(180.0).width(), 5);
        assert_eq!(mask.rotated(180.0).height(), 3);
    }

    fn arb_mask() -> impl Strategy<Value = PixelMask> {
        (1u32..8, 1u32..8).prop_flat_map(|(w, h)| {
            proptest::collection::vec(any::<bool>(), (w * h) as usize).prop_map(move |bits| {
                let mut mask = PixelMask::empty(w, h);
                for (i, solid) in bits.iter().enumerate() {
                    mask.set(i as u32 % w, i as u32 / w, *solid);
                }
                mask
            })
        })
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in arb_mask(), b in arb_mask(), ox in -10i32..10, oy in -10i32..10) {
            prop_assert_eq!(a.overlap(&b, (ox, oy)), b.overlap(&a, (-ox, -oy)));
        }

        #[test]
        fn any_solid_mask_overlaps_itself(a in arb_mask()) {
            prop_assert_eq!(a.overlap(&a, (0, 0)), a.any());
        }
    }
}
