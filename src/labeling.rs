//! Connected-component labeling of boolean masks.
//!
//! Assigns a unique positive integer to each maximal set of adjacent true
//! pixels; background (false) pixels get 0. Labels are assigned in
//! raster-scan order of each component's first-visited pixel, so the result
//! is deterministic for a given mask and connectivity.

use ndarray::{Array2, ArrayView2};

/// Pixel adjacency used when growing components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    /// Orthogonal neighbors only (up/down/left/right).
    #[default]
    Four,
    /// Orthogonal plus diagonal neighbors.
    Eight,
}

impl Connectivity {
    /// Neighbor offsets (row, col) for this adjacency.
    fn offsets(&self) -> &'static [(isize, isize)] {
        match self {
            Connectivity::Four => &[(-1, 0), (1, 0), (0, -1), (0, 1)],
            Connectivity::Eight => &[
                (-1, -1),
                (-1, 0),
                (-1, 1),
                (0, -1),
                (0, 1),
                (1, -1),
                (1, 0),
                (1, 1),
            ],
        }
    }
}

/// Label the connected components of `mask`.
///
/// Returns the label array and the number of components found. Uses an
/// iterative flood fill with an explicit worklist, so deeply nested or
/// snaking regions cannot overflow the stack.
pub fn label(mask: &ArrayView2<bool>, connectivity: Connectivity) -> (Array2<u32>, u32) {
    let (rows, cols) = mask.dim();
    let mut labels: Array2<u32> = Array2::zeros((rows, cols));
    let mut count: u32 = 0;
    let mut worklist: Vec<(usize, usize)> = Vec::new();

    for r in 0..rows {
        for c in 0..cols {
            if !mask[[r, c]] || labels[[r, c]] != 0 {
                continue;
            }

            // New component: claim a label and flood it outwards.
            count += 1;
            labels[[r, c]] = count;
            worklist.push((r, c));

            while let Some((cr, cc)) = worklist.pop() {
                for (dr, dc) in connectivity.offsets() {
                    let nr = cr as isize + dr;
                    let nc = cc as isize + dc;
                    if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                        continue;
                    }
                    let (nr, nc) = (nr as usize, nc as usize);
                    if mask[[nr, nc]] && labels[[nr, nc]] == 0 {
                        labels[[nr, nc]] = count;
                        worklist.push((nr, nc));
                    }
                }
            }
        }
    }

    (labels, count)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_empty_mask_has_no_components() {
        let mask = Array2::from_elem((3, 3), false);
        let (labels, count) = label(&mask.view(), Connectivity::Four);
        assert_eq!(count, 0);
        assert_eq!(labels, Array2::<u32>::zeros((3, 3)));
    }

    #[test]
    fn test_full_mask_is_one_component() {
        let mask = Array2::from_elem((3, 4), true);
        let (labels, count) = label(&mask.view(), Connectivity::Four);
        assert_eq!(count, 1);
        assert!(labels.iter().all(|&l| l == 1));
    }

    #[test]
    fn test_diagonal_pixels_split_with_four_connectivity() {
        let mask = array![[true, false], [false, true]];
        let (labels, count) = label(&mask.view(), Connectivity::Four);
        assert_eq!(count, 2);
        assert_eq!(labels[[0, 0]], 1);
        assert_eq!(labels[[1, 1]], 2);
    }

    #[test]
    fn test_diagonal_pixels_join_with_eight_connectivity() {
        let mask = array![[true, false], [false, true]];
        let (labels, count) = label(&mask.view(), Connectivity::Eight);
        assert_eq!(count, 1);
        assert_eq!(labels[[0, 0]], 1);
        assert_eq!(labels[[1, 1]], 1);
    }

    #[test]
    fn test_l_shaped_region_is_one_component() {
        let mask = array![
            [true, false, false],
            [true, false, false],
            [true, true, true]
        ];
        let (labels, count) = label(&mask.view(), Connectivity::Four);
        assert_eq!(count, 1);
        assert_eq!(labels[[0, 0]], 1);
        assert_eq!(labels[[2, 2]], 1);
        assert_eq!(labels[[0, 2]], 0);
    }

    #[test]
    fn test_label_order_is_raster_scan() {
        // Component containing the first true pixel in raster order gets 1.
        let mask = array![
            [false, true, false, false],
            [false, false, false, true],
            [true, false, false, true]
        ];
        let (labels, count) = label(&mask.view(), Connectivity::Four);
        assert_eq!(count, 3);
        assert_eq!(labels[[0, 1]], 1);
        assert_eq!(labels[[1, 3]], 2);
        assert_eq!(labels[[2, 3]], 2);
        assert_eq!(labels[[2, 0]], 3);
    }
}
