//! Freehand ROI mask accumulation.
//!
//! This module is the bookkeeping core of the crate: it records user-drawn
//! strokes (boolean membership arrays) as additive regions or subtractive
//! holes, supports undoing the most recent stroke in true chronological
//! order, and derives three read-only views from the recorded state.

use ndarray::{Array2, Zip};

use crate::error::MaskError;
use crate::labeling::{self, Connectivity};

// ============================================================================
// Sign
// ============================================================================

/// Drawing mode for incoming strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    /// Strokes add to the region(s) of interest.
    #[default]
    Add,
    /// Strokes cut holes into the region(s) of interest.
    Subtract,
}

impl Sign {
    /// Get the display name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Sign::Add => "add",
            Sign::Subtract => "subtract",
        }
    }
}

// ============================================================================
// OR-reduce
// ============================================================================

/// Elementwise logical OR across a list of same-shaped boolean arrays.
///
/// The 0/1/N-element behavior is load-bearing for the mask views:
/// - empty input yields an all-false array of `shape`
/// - a single array is returned as-is
/// - many arrays are OR-ed elementwise
pub fn or_reduce(arrays: &[Array2<bool>], shape: (usize, usize)) -> Array2<bool> {
    match arrays {
        [] => Array2::from_elem(shape, false),
        [only] => only.clone(),
        [first, rest @ ..] => {
            let mut acc = first.clone();
            for arr in rest {
                Zip::from(&mut acc).and(arr).for_each(|a, &b| *a = *a || b);
            }
            acc
        }
    }
}

// ============================================================================
// RegionAccumulator
// ============================================================================

/// Accumulates drawn strokes into regions and holes, with undo.
///
/// Maintains two stroke lists plus a single chronological history:
/// - `regions`: strokes recorded in [`Sign::Add`] mode, insertion order
/// - `holes`: strokes recorded in [`Sign::Subtract`] mode, insertion order
/// - `history`: one tag per recorded stroke, so undo can remove the
///   globally most recent stroke regardless of which list it went to
///
/// The accumulator is bound to a fixed image shape at construction; every
/// stroke must match it exactly.
#[derive(Debug, Clone)]
pub struct RegionAccumulator {
    shape: (usize, usize),
    regions: Vec<Array2<bool>>,
    holes: Vec<Array2<bool>>,
    history: Vec<Sign>,
    sign: Sign,
}

impl RegionAccumulator {
    /// Create an accumulator bound to an image shape (rows, cols).
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            shape: (rows, cols),
            regions: Vec::new(),
            holes: Vec::new(),
            history: Vec::new(),
            sign: Sign::default(),
        }
    }

    /// The bound image shape (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// The current drawing mode.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Change the mode applied to subsequently filed strokes.
    /// Already-recorded strokes are unaffected.
    pub fn set_sign(&mut self, sign: Sign) {
        if self.sign != sign {
            log::debug!("✏️  Drawing mode: {}", sign.name());
        }
        self.sign = sign;
    }

    /// Record a completed stroke under an explicit sign.
    ///
    /// Appends `membership` to `regions` (add) or `holes` (subtract) and
    /// tags the destination in the history. Rejects the stroke with
    /// [`MaskError::ShapeMismatch`] if its shape differs from the bound
    /// image shape; nothing is mutated on failure.
    pub fn add_stroke(&mut self, membership: Array2<bool>, sign: Sign) -> Result<(), MaskError> {
        let found = membership.dim();
        if found != self.shape {
            return Err(MaskError::ShapeMismatch {
                expected: self.shape,
                found,
            });
        }

        match sign {
            Sign::Add => self.regions.push(membership),
            Sign::Subtract => self.holes.push(membership),
        }
        self.history.push(sign);
        log::debug!(
            "📝 Recorded {} stroke ({} total)",
            sign.name(),
            self.history.len()
        );

        debug_assert_eq!(self.history.len(), self.regions.len() + self.holes.len());
        Ok(())
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Remove the most recently recorded stroke.
    ///
    /// The history tag decides which list loses its last element, so undo is
    /// correct even when add and subtract strokes are interleaved. Returns
    /// [`MaskError::EmptyHistory`] if nothing has been recorded.
    pub fn undo(&mut self) -> Result<(), MaskError> {
        let sign = self.history.pop().ok_or(MaskError::EmptyHistory)?;
        let removed = match sign {
            Sign::Add => self.regions.pop(),
            Sign::Subtract => self.holes.pop(),
        };
        debug_assert!(removed.is_some());
        log::debug!(
            "⏪ Undid {} stroke ({} remaining)",
            sign.name(),
            self.history.len()
        );

        debug_assert_eq!(self.history.len(), self.regions.len() + self.holes.len());
        Ok(())
    }

    /// Discard all recorded strokes.
    pub fn clear(&mut self) {
        self.regions.clear();
        self.holes.clear();
        self.history.clear();
        log::debug!("🗑️  Cleared all strokes");
    }

    /// Number of strokes recorded (regions plus holes).
    pub fn stroke_count(&self) -> usize {
        self.history.len()
    }

    /// Number of additive strokes.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Number of subtractive strokes.
    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    // ------------------------------------------------------------------
    // Derived views (computed on each access)
    // ------------------------------------------------------------------

    /// The combined boolean mask: union of regions minus union of holes.
    pub fn mask(&self) -> Array2<bool> {
        let mut mask = or_reduce(&self.regions, self.shape);
        let holes = or_reduce(&self.holes, self.shape);
        Zip::from(&mut mask)
            .and(&holes)
            .for_each(|m, &h| *m = *m && !h);
        mask
    }

    /// Connected-component labeling of [`mask`](Self::mask).
    ///
    /// Background pixels get 0; each maximal connected region gets a unique
    /// positive label, assigned in raster-scan order (4-neighborhood).
    pub fn label_array(&self) -> Array2<u32> {
        let (labels, _count) = labeling::label(&self.mask().view(), Connectivity::Four);
        labels
    }

    /// Per-stroke labeling: pixel gets `i + 1` for the last region `i`
    /// (insertion order) containing it.
    ///
    /// Regions are painted in insertion order so later strokes overwrite
    /// earlier ones at overlapping pixels; afterwards every pixel under any
    /// hole is forced back to 0. Holes win over regions here even though
    /// this view does not otherwise encode subtraction.
    pub fn label_by_stroke(&self) -> Array2<u32> {
        let mut result = Array2::zeros(self.shape);
        for (i, region) in self.regions.iter().enumerate() {
            let stroke_label = i as u32 + 1;
            Zip::from(&mut result).and(region).for_each(|out, &inside| {
                if inside {
                    *out = stroke_label;
                }
            });
        }

        let holes = or_reduce(&self.holes, self.shape);
        Zip::from(&mut result).and(&holes).for_each(|out, &hole| {
            if hole {
                *out = 0;
            }
        });
        result
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    /// A 4x4 stroke that is true on the top-left 2x2 quadrant.
    fn top_left_quadrant() -> Array2<bool> {
        Array2::from_shape_fn((4, 4), |(r, c)| r < 2 && c < 2)
    }

    /// A 4x4 stroke that is true on the bottom-right 2x2 quadrant.
    fn bottom_right_quadrant() -> Array2<bool> {
        Array2::from_shape_fn((4, 4), |(r, c)| r >= 2 && c >= 2)
    }

    #[test]
    fn test_or_reduce_empty() {
        let result = or_reduce(&[], (3, 2));
        assert_eq!(result, Array2::from_elem((3, 2), false));
    }

    #[test]
    fn test_or_reduce_single() {
        let only = array![[true, false], [false, true]];
        assert_eq!(or_reduce(&[only.clone()], (2, 2)), only);
    }

    #[test]
    fn test_or_reduce_many() {
        let a = array![[true, false], [false, false]];
        let b = array![[false, false], [false, true]];
        let c = array![[false, true], [false, false]];
        let expected = array![[true, true], [false, true]];
        assert_eq!(or_reduce(&[a, b, c], (2, 2)), expected);
    }

    #[test]
    fn test_history_invariant_after_every_operation() {
        let mut acc = RegionAccumulator::new(4, 4);
        let signs = [Sign::Add, Sign::Subtract, Sign::Add, Sign::Add, Sign::Subtract];

        for sign in signs {
            acc.add_stroke(top_left_quadrant(), sign).unwrap();
            assert_eq!(acc.stroke_count(), acc.region_count() + acc.hole_count());
        }
        while acc.can_undo() {
            acc.undo().unwrap();
            assert_eq!(acc.stroke_count(), acc.region_count() + acc.hole_count());
        }
    }

    #[test]
    fn test_mask_empty_is_all_false() {
        let acc = RegionAccumulator::new(4, 4);
        assert_eq!(acc.mask(), Array2::from_elem((4, 4), false));
    }

    #[test]
    fn test_mask_single_region_is_that_region() {
        let mut acc = RegionAccumulator::new(4, 4);
        acc.add_stroke(top_left_quadrant(), Sign::Add).unwrap();
        assert_eq!(acc.mask(), top_left_quadrant());
    }

    #[test]
    fn test_mask_regions_minus_hole() {
        // mask = (A | B) & !C
        let a = array![[true, true, false], [false, false, false]];
        let b = array![[false, false, false], [false, true, true]];
        let c = array![[true, false, false], [false, true, false]];

        let mut acc = RegionAccumulator::new(2, 3);
        acc.add_stroke(a, Sign::Add).unwrap();
        acc.add_stroke(b, Sign::Add).unwrap();
        acc.add_stroke(c, Sign::Subtract).unwrap();

        let expected = array![[false, true, false], [false, false, true]];
        assert_eq!(acc.mask(), expected);
    }

    #[test]
    fn test_undo_respects_global_order() {
        // Interleave add and subtract, then undo one step at a time and
        // compare against an accumulator that never saw the undone strokes.
        let strokes = [
            (top_left_quadrant(), Sign::Add),
            (bottom_right_quadrant(), Sign::Subtract),
            (bottom_right_quadrant(), Sign::Add),
            (top_left_quadrant(), Sign::Subtract),
        ];

        let mut acc = RegionAccumulator::new(4, 4);
        for (stroke, sign) in &strokes {
            acc.add_stroke(stroke.clone(), *sign).unwrap();
        }

        for keep in (0..strokes.len()).rev() {
            acc.undo().unwrap();

            let mut expected = RegionAccumulator::new(4, 4);
            for (stroke, sign) in &strokes[..keep] {
                expected.add_stroke(stroke.clone(), *sign).unwrap();
            }
            assert_eq!(acc.mask(), expected.mask());
            assert_eq!(acc.region_count(), expected.region_count());
            assert_eq!(acc.hole_count(), expected.hole_count());
        }
    }

    #[test]
    fn test_undo_empty_history_fails_without_mutation() {
        let mut acc = RegionAccumulator::new(4, 4);
        assert_eq!(acc.undo(), Err(MaskError::EmptyHistory));
        assert_eq!(acc.stroke_count(), 0);
        assert_eq!(acc.mask(), Array2::from_elem((4, 4), false));
    }

    #[test]
    fn test_shape_mismatch_rejected_without_mutation() {
        let mut acc = RegionAccumulator::new(4, 4);
        let wrong = Array2::from_elem((3, 4), true);

        let err = acc.add_stroke(wrong, Sign::Add).unwrap_err();
        assert_eq!(
            err,
            MaskError::ShapeMismatch {
                expected: (4, 4),
                found: (3, 4),
            }
        );
        assert_eq!(acc.stroke_count(), 0);
        assert_eq!(acc.region_count(), 0);
        assert_eq!(acc.hole_count(), 0);
    }

    #[test]
    fn test_label_by_stroke_last_region_wins_and_holes_erase() {
        // R1 covers columns 0..2, R2 covers columns 1..3 (overlap at col 1),
        // the hole covers column 0.
        let r1 = Array2::from_shape_fn((2, 4), |(_, c)| c < 2);
        let r2 = Array2::from_shape_fn((2, 4), |(_, c)| (1..3).contains(&c));
        let hole = Array2::from_shape_fn((2, 4), |(_, c)| c == 0);

        let mut acc = RegionAccumulator::new(2, 4);
        acc.add_stroke(r1, Sign::Add).unwrap();
        acc.add_stroke(r2, Sign::Add).unwrap();
        acc.add_stroke(hole, Sign::Subtract).unwrap();

        let labels = acc.label_by_stroke();
        for r in 0..2 {
            assert_eq!(labels[[r, 0]], 0); // hole wins over R1
            assert_eq!(labels[[r, 1]], 2); // overlap: last-drawn region wins
            assert_eq!(labels[[r, 2]], 2);
            assert_eq!(labels[[r, 3]], 0); // never drawn
        }
    }

    #[test]
    fn test_two_quadrant_scenario() {
        // Two disjoint quadrants, no holes.
        let mut acc = RegionAccumulator::new(4, 4);
        acc.add_stroke(top_left_quadrant(), Sign::Add).unwrap();
        acc.add_stroke(bottom_right_quadrant(), Sign::Add).unwrap();

        let mut union = top_left_quadrant();
        Zip::from(&mut union)
            .and(&bottom_right_quadrant())
            .for_each(|a, &b| *a = *a || b);
        assert_eq!(acc.mask(), union);

        // Two distinct connected components.
        let labels = acc.label_array();
        assert_eq!(labels[[0, 0]], 1);
        assert_eq!(labels[[3, 3]], 2);
        assert_ne!(labels[[0, 0]], labels[[3, 3]]);
        assert_eq!(labels[[0, 3]], 0);

        // Per-stroke labels follow insertion order.
        let by_stroke = acc.label_by_stroke();
        assert_eq!(by_stroke[[0, 0]], 1);
        assert_eq!(by_stroke[[1, 1]], 1);
        assert_eq!(by_stroke[[2, 2]], 2);
        assert_eq!(by_stroke[[3, 3]], 2);
        assert_eq!(by_stroke[[0, 3]], 0);
        assert_eq!(by_stroke[[3, 0]], 0);
    }

    #[test]
    fn test_set_sign_does_not_touch_recorded_strokes() {
        let mut acc = RegionAccumulator::new(4, 4);
        acc.add_stroke(top_left_quadrant(), Sign::Add).unwrap();
        acc.set_sign(Sign::Subtract);

        assert_eq!(acc.sign(), Sign::Subtract);
        assert_eq!(acc.region_count(), 1);
        assert_eq!(acc.hole_count(), 0);
        assert_eq!(acc.mask(), top_left_quadrant());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut acc = RegionAccumulator::new(4, 4);
        acc.add_stroke(top_left_quadrant(), Sign::Add).unwrap();
        acc.add_stroke(bottom_right_quadrant(), Sign::Subtract)
            .unwrap();

        acc.clear();
        assert!(!acc.can_undo());
        assert_eq!(acc.stroke_count(), 0);
        assert_eq!(acc.mask(), Array2::from_elem((4, 4), false));
    }
}
