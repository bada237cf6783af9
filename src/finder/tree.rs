//! KD-tree neighbour finder.
//!
//! Builds a balanced KD-tree over atom coordinates (replicated across
//! periodic images when the boundary conditions are periodic) each
//! rebuild, then does a range query per atom. Produces the same pairs as
//! [`DistanceNeighborFinder`](super::DistanceNeighborFinder) — every
//! candidate the tree turns up is re-checked against the boundary
//! conditions' own minimum-image distance, so the tree only has to be a
//! superset of the true neighbours, not exactly right about periodic
//! wraparound itself.

use super::{ExclusionMatrix, NeighborFinder, NeighborList};
use crate::boundaries::BoundaryConditions;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy)]
pub struct TreeNeighborFinder {
    pub dist_cutoff: f64,
    pub n_steps: usize,
}

impl TreeNeighborFinder {
    pub fn new(dist_cutoff: f64, n_steps: usize) -> Self {
        TreeNeighborFinder {
            dist_cutoff,
            n_steps,
        }
    }
}

enum KdNode<const D: usize> {
    Leaf,
    Branch {
        axis: usize,
        point: usize,
        left: Box<KdNode<D>>,
        right: Box<KdNode<D>>,
    },
}

struct KdTree<const D: usize> {
    points: Vec<[f64; D]>,
    owners: Vec<usize>,
    root: KdNode<D>,
}

impl<const D: usize> KdTree<D> {
    fn build(points: Vec<[f64; D]>, owners: Vec<usize>) -> Self {
        let mut indices: Vec<usize> = (0..points.len()).collect();
        let root = Self::build_node(&points, &mut indices, 0);
        KdTree {
            points,
            owners,
            root,
        }
    }

    fn build_node(points: &[[f64; D]], indices: &mut [usize], depth: usize) -> KdNode<D> {
        if indices.is_empty() {
            return KdNode::Leaf;
        }
        let axis = depth % D;
        indices.sort_by(|&a, &b| points[a][axis].partial_cmp(&points[b][axis]).unwrap());
        let mid = indices.len() / 2;
        let point = indices[mid];
        let left = Self::build_node(points, &mut indices[..mid], depth + 1);
        let right = Self::build_node(points, &mut indices[mid + 1..], depth + 1);
        KdNode::Branch {
            axis,
            point,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Collect the original-atom owners of every tree point within
    /// `radius2` (squared) of `target`, in raw (non-periodic) Euclidean
    /// distance.
    fn range_query(&self, target: [f64; D], radius2: f64, out: &mut Vec<usize>) {
        Self::range_node(&self.root, &self.points, &self.owners, target, radius2, out);
    }

    fn range_node(
        node: &KdNode<D>,
        points: &[[f64; D]],
        owners: &[usize],
        target: [f64; D],
        radius2: f64,
        out: &mut Vec<usize>,
    ) {
        if let KdNode::Branch {
            axis,
            point,
            left,
            right,
        } = node
        {
            let p = points[*point];
            let d2: f64 = (0..D).map(|k| (p[k] - target[k]).powi(2)).sum();
            if d2 < radius2 {
                out.push(owners[*point]);
            }

            let diff = target[*axis] - p[*axis];
            let (near, far) = if diff < 0.0 {
                (left, right)
            } else {
                (right, left)
            };
            Self::range_node(near, points, owners, target, radius2, out);
            if diff * diff < radius2 {
                Self::range_node(far, points, owners, target, radius2, out);
            }
        }
    }
}

/// All `3^D` (or `1` for a non-periodic system) integer offset
/// combinations in `{-1, 0, 1}` per axis.
fn image_offsets<const D: usize>(periodic: bool) -> Vec<[i64; D]> {
    if !periodic {
        return vec![[0i64; D]];
    }
    let mut out = vec![[0i64; D]];
    for k in 0..D {
        let mut next = Vec::with_capacity(out.len() * 3);
        for o in &out {
            for d in -1..=1 {
                let mut o2 = *o;
                o2[k] = d;
                next.push(o2);
            }
        }
        out = next;
    }
    out
}

impl<const D: usize, B: BoundaryConditions<D>> NeighborFinder<D, B> for TreeNeighborFinder {
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
        if positions.is_empty() {
            return NeighborList::default();
        }

        let periodic = bounds.box_size().is_some();
        let box_size = bounds.box_size().unwrap_or([0.0; D]);
        let offsets = image_offsets::<D>(periodic);

        let mut points = Vec::with_capacity(positions.len() * offsets.len());
        let mut owners = Vec::with_capacity(positions.len() * offsets.len());
        for (i, &p) in positions.iter().enumerate() {
            for offset in &offsets {
                let mut shifted = p;
                for k in 0..D {
                    shifted[k] += offset[k] as f64 * box_size[k];
                }
                points.push(shifted);
                owners.push(i);
            }
        }

        let tree = KdTree::build(points, owners);
        let cutoff2 = self.dist_cutoff * self.dist_cutoff;

        let mut seen = HashSet::new();
        let mut pairs = Vec::new();
        let mut candidates = Vec::new();
        for (i, &p) in positions.iter().enumerate() {
            candidates.clear();
            tree.range_query(p, cutoff2, &mut candidates);
            for &j in &candidates {
                if i == j {
                    continue;
                }
                let (lo, hi) = if i < j { (i, j) } else { (j, i) };
                if seen.contains(&(lo, hi)) || exclusions.is_excluded(lo, hi) {
                    continue;
                }
                if bounds.dist2(positions[lo], positions[hi]) < cutoff2 {
                    seen.insert((lo, hi));
                    pairs.push((lo, hi, exclusions.is_14(lo, hi)));
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
    use crate::finder::distance::DistanceNeighborFinder;

    #[test]
    fn matches_distance_finder_on_periodic_box() {
        let bounds = Pbc::<3>::cubic(3.0).unwrap();
        let positions: Vec<[f64; 3]> = vec![
            [0.1, 0.1, 0.1],
            [2.9, 0.1, 0.1],
            [1.5, 1.5, 1.5],
            [0.2, 2.8, 0.3],
            [1.0, 1.0, 1.0],
            [2.5, 2.5, 0.1],
        ];
        let exclusions = ExclusionMatrix::new();
        let tree = TreeNeighborFinder::new(0.8, 1).build(&positions, &bounds, &exclusions);
        let distance =
            DistanceNeighborFinder::new(0.8, 1).build(&positions, &bounds, &exclusions);
        assert_eq!(tree.sorted(), distance.sorted());
    }

    #[test]
    fn matches_distance_finder_without_bounds() {
        let bounds = NoBounds::<3>;
        let positions: Vec<[f64; 3]> = vec![
            [0.0, 0.0, 0.0],
            [0.2, 0.0, 0.0],
            [5.0, 5.0, 5.0],
            [5.3, 5.0, 5.0],
        ];
        let exclusions = ExclusionMatrix::new();
        let tree = TreeNeighborFinder::new(0.5, 1).build(&positions, &bounds, &exclusions);
        let distance =
            DistanceNeighborFinder::new(0.5, 1).build(&positions, &bounds, &exclusions);
        assert_eq!(tree.sorted(), distance.sorted());
    }
}
