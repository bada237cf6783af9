//! O(N^2) all-pairs neighbour finder.

use super::{ExclusionMatrix, NeighborFinder, NeighborList};
use crate::boundaries::BoundaryConditions;

/// Scans every pair once per rebuild and keeps those within `dist_cutoff`.
/// Simple and reliable; the reference the other finders are checked
/// against (spec invariant 6).
#[derive(Debug, Clone, Copy)]
pub struct DistanceNeighborFinder {
    pub dist_cutoff: f64,
    pub n_steps: usize,
}

impl DistanceNeighborFinder {
    pub fn new(dist_cutoff: f64, n_steps: usize) -> Self {
        DistanceNeighborFinder {
            dist_cutoff,
            n_steps,
        }
    }
}

impl<const D: usize, B: BoundaryConditions<D>> NeighborFinder<D, B> for DistanceNeighborFinder {
    fn n_steps(&self) -> usize {
        self.n_steps
    }

    fn dist_cutoff(&self) -> f64 {
        self.dist_cutoff
    }

    fn build(
        &self,
        positions: &[[f64; D]],
        bounds: &B,
        exclusions: &ExclusionMatrix,
    ) -> NeighborList {
        let cutoff2 = self.dist_cutoff * self.dist_cutoff;
        let mut pairs = Vec::new();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                if exclusions.is_excluded(i, j) {
                    continue;
                }
                if bounds.dist2(positions[i], positions[j]) < cutoff2 {
                    pairs.push((i, j, exclusions.is_14(i, j)));
                }
            }
        }
        NeighborList::from_pairs(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundaries::{NoBounds, Pbc};

    #[test]
    fn finds_pairs_within_cutoff() {
        let positions = [[0.0, 0.0, 0.0], [0.5, 0.0, 0.0], [5.0, 0.0, 0.0]];
        let finder = DistanceNeighborFinder::new(1.0, 1);
        let bounds = NoBounds::<3>;
        let list = finder.build(&positions, &bounds, &ExclusionMatrix::new());
        assert_eq!(list.sorted(), vec![(0, 1, false)]);
    }

    #[test]
    fn excluded_pairs_never_appear() {
        let positions = [[0.0, 0.0, 0.0], [0.1, 0.0, 0.0]];
        let finder = DistanceNeighborFinder::new(1.0, 1);
        let bounds = NoBounds::<3>;
        let mut excl = ExclusionMatrix::new();
        excl.exclude(0, 1);
        let list = finder.build(&positions, &bounds, &excl);
        assert!(list.is_empty());
    }

    #[test]
    fn respects_minimum_image_across_periodic_boundary() {
        let bounds = Pbc::<3>::cubic(2.0).unwrap();
        let positions = [[0.05, 0.0, 0.0], [1.95, 0.0, 0.0]];
        let finder = DistanceNeighborFinder::new(0.5, 1);
        let list = finder.build(&positions, &bounds, &ExclusionMatrix::new());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn refresh_period_is_honoured() {
        let finder = DistanceNeighborFinder::new(1.0, 10);
        let bounds = NoBounds::<3>;
        let empty = NeighborList::default();
        let list = finder.find_neighbors(
            &[[0.0, 0.0, 0.0], [0.1, 0.0, 0.0]],
            &bounds,
            &ExclusionMatrix::new(),
            3,
            empty.clone(),
        );
        assert!(list.is_empty());

        let list = finder.find_neighbors(
            &[[0.0, 0.0, 0.0], [0.1, 0.0, 0.0]],
            &bounds,
            &ExclusionMatrix::new(),
            10,
            empty,
        );
        assert_eq!(list.len(), 1);
    }
}
