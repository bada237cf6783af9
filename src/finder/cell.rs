//! Cell-list (spatial hashing) neighbour finder.
//!
//! Bins atoms into a grid of cells with side at least `dist_cutoff` and
//! only scans the `3^D` cells neighbouring each occupied cell (27 in 3D, 9
//! in 2D), rather than every other atom. Periodic boxes wrap cell
//! coordinates modulo the grid; [`NoBounds`](crate::boundaries::NoBounds)
//! falls back to a bounding box around the current positions with open
//! (clamped, non-wrapping) edge cells.

use super::{ExclusionMatrix, NeighborFinder, NeighborList};
use crate::boundaries::BoundaryConditions;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy)]
pub struct CellListNeighborFinder {
    pub dist_cutoff: f64,
    pub n_steps: usize,
}

impl CellListNeighborFinder {
    pub fn new(dist_cutoff: f64, n_steps: usize) -> Self {
        CellListNeighborFinder {
            dist_cutoff,
            n_steps,
        }
    }
}

fn bounding_box<const D: usize>(positions: &[[f64; D]]) -> ([f64; D], [f64; D]) {
    let mut min = positions[0];
    let mut max = positions[0];
    for p in positions {
        for k in 0..D {
            if p[k] < min[k] {
                min[k] = p[k];
            }
            if p[k] > max[k] {
                max[k] = p[k];
            }
        }
    }
    let mut extent = [0.0; D];
    for k in 0..D {
        extent[k] = (max[k] - min[k]).max(1e-9);
    }
    (min, extent)
}

/// All `3^D` offsets with components in `{-1, 0, 1}`.
fn neighbor_offsets<const D: usize>() -> Vec<[i64; D]> {
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

impl<const D: usize, B: BoundaryConditions<D>> NeighborFinder<D, B> for CellListNeighborFinder {
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
        let (origin, extent) = match bounds.box_size() {
            Some(box_size) => ([0.0; D], box_size),
            None => bounding_box(positions),
        };

        let mut n_cells = [0usize; D];
        let mut cell_size = [0.0; D];
        for k in 0..D {
            n_cells[k] = ((extent[k] / self.dist_cutoff).floor() as usize).max(1);
            cell_size[k] = extent[k] / n_cells[k] as f64;
        }

        let cell_of = |p: [f64; D]| -> [i64; D] {
            let mut out = [0i64; D];
            for k in 0..D {
                let rel = (p[k] - origin[k]) / cell_size[k];
                let idx = rel.floor() as i64;
                out[k] = if periodic {
                    idx.rem_euclid(n_cells[k] as i64)
                } else {
                    idx.clamp(0, n_cells[k] as i64 - 1)
                };
            }
            out
        };

        let mut cells: HashMap<[i64; D], Vec<usize>> = HashMap::new();
        for (i, &p) in positions.iter().enumerate() {
            cells.entry(cell_of(p)).or_default().push(i);
        }

        let cutoff2 = self.dist_cutoff * self.dist_cutoff;
        let mut seen = HashSet::new();
        let mut pairs = Vec::new();

        for (cell, atoms_here) in cells.iter() {
            for offset in neighbor_offsets::<D>() {
                let mut neighbor_cell = [0i64; D];
                let mut out_of_range = false;
                for k in 0..D {
                    let c = cell[k] + offset[k];
                    neighbor_cell[k] = if periodic {
                        c.rem_euclid(n_cells[k] as i64)
                    } else if c < 0 || c >= n_cells[k] as i64 {
                        out_of_range = true;
                        break;
                    } else {
                        c
                    };
                }
                if out_of_range {
                    continue;
                }

                if let Some(atoms_there) = cells.get(&neighbor_cell) {
                    for &i in atoms_here {
                        for &j in atoms_there {
                            if i >= j || seen.contains(&(i, j)) || exclusions.is_excluded(i, j) {
                                continue;
                            }
                            if bounds.dist2(positions[i], positions[j]) < cutoff2 {
                                seen.insert((i, j));
                                pairs.push((i, j, exclusions.is_14(i, j)));
                            }
                        }
                    }
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
        ];
        let exclusions = ExclusionMatrix::new();
        let cell = CellListNeighborFinder::new(0.8, 1).build(&positions, &bounds, &exclusions);
        let distance =
            DistanceNeighborFinder::new(0.8, 1).build(&positions, &bounds, &exclusions);
        assert_eq!(cell.sorted(), distance.sorted());
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
        let cell = CellListNeighborFinder::new(0.5, 1).build(&positions, &bounds, &exclusions);
        let distance =
            DistanceNeighborFinder::new(0.5, 1).build(&positions, &bounds, &exclusions);
        assert_eq!(cell.sorted(), distance.sorted());
    }

    #[test]
    fn matches_distance_finder_in_2d() {
        let bounds = Pbc::<2>::cubic(2.0).unwrap();
        let positions: Vec<[f64; 2]> =
            vec![[0.05, 0.05], [1.95, 0.05], [1.0, 1.0], [0.1, 1.9]];
        let exclusions = ExclusionMatrix::new();
        let cell = CellListNeighborFinder::new(0.3, 1).build(&positions, &bounds, &exclusions);
        let distance =
            DistanceNeighborFinder::new(0.3, 1).build(&positions, &bounds, &exclusions);
        assert_eq!(cell.sorted(), distance.sorted());
    }
}
