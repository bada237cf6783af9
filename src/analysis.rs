//! Post-hoc analysis helpers over a system's neighbour list.
//!
//! These are plain functions over `&System` and a [`NeighborList`] rather
//! than methods on [`System`](crate::system::System): they report on a
//! simulation's state without mutating it, and restrict themselves to the
//! same cutoff-aware pair set the force/energy pipeline sees, rather than
//! every pair in the system.

use crate::boundaries::{norm, BoundaryConditions};
use crate::finder::NeighborList;
use crate::system::System;

/// Minimum-image displacement `positions[i] - positions[j]` for every pair
/// in `neighbors`, in the same order as `neighbors.pairs()`.
pub fn displacements<const D: usize, B: BoundaryConditions<D>>(
    system: &System<D, B>,
    neighbors: &NeighborList,
) -> Vec<[f64; D]> {
    neighbors
        .pairs()
        .iter()
        .map(|&(i, j, _)| system.boundary.displacement(system.positions[i], system.positions[j]))
        .collect()
}

/// Minimum-image distance for every pair in `neighbors`, the norm of
/// [`displacements`]'s output.
pub fn distances<const D: usize, B: BoundaryConditions<D>>(
    system: &System<D, B>,
    neighbors: &NeighborList,
) -> Vec<f64> {
    displacements(system, neighbors).into_iter().map(norm).collect()
}

/// Radial distribution function `g(r)` over `n_bins` equal-width bins
/// spanning `[0, r_max)`, normalised against the ideal-gas pair density
/// `rho = n_atoms / volume` (`volume` is the product of the system's
/// boundary's box extents; panics if the boundary is not periodic, since
/// an unbounded system has no well-defined density to normalise against).
///
/// Pairs outside `neighbors` (beyond whatever cutoff built it) are treated
/// as having `g(r) = 0` there; callers wanting an RDF out to `r_max` need a
/// neighbour list built with a cutoff at least that large.
pub fn rdf<const D: usize, B: BoundaryConditions<D>>(
    system: &System<D, B>,
    neighbors: &NeighborList,
    n_bins: usize,
    r_max: f64,
) -> Vec<f64> {
    let box_size = system
        .boundary
        .box_size()
        .expect("rdf requires periodic boundary conditions to define a pair density");
    let volume: f64 = box_size.iter().product();
    let n = system.num_atoms();
    let rho = n as f64 / volume;

    let bin_width = r_max / n_bins as f64;
    let mut counts = vec![0u64; n_bins];

    for r in distances(system, neighbors) {
        if r < r_max {
            let bin = (r / bin_width) as usize;
            if bin < n_bins {
                counts[bin] += 2; // count both (i, j) and (j, i)
            }
        }
    }

    let shell_volume = |r_lo: f64, r_hi: f64| -> f64 {
        match D {
            3 => 4.0 / 3.0 * std::f64::consts::PI * (r_hi.powi(3) - r_lo.powi(3)),
            2 => std::f64::consts::PI * (r_hi.powi(2) - r_lo.powi(2)),
            d => panic!("rdf is only defined for 2 or 3 dimensions, got {}", d),
        }
    };

    counts
        .iter()
        .enumerate()
        .map(|(b, &count)| {
            let r_lo = b as f64 * bin_width;
            let r_hi = r_lo + bin_width;
            let ideal = rho * shell_volume(r_lo, r_hi) * n as f64;
            if ideal > 0.0 {
                count as f64 / ideal
            } else {
                0.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::boundaries::{NoBounds, Pbc};
    use crate::finder::{DistanceNeighborFinder, ExclusionMatrix, NeighborFinder};

    fn bare_system<const D: usize, B: BoundaryConditions<D>>(
        positions: Vec<[f64; D]>,
        boundary: B,
    ) -> System<D, B> {
        let n = positions.len();
        let atoms = vec![Atom::new(12.0, 0.0, 0.3, 0.5); n];
        let velocities = vec![[0.0; D]; n];
        System::bare(atoms, positions, velocities, boundary).unwrap()
    }

    #[test]
    fn displacement_matches_every_neighbor_list_pair() {
        let positions = vec![[0.0, 0.0, 0.0], [1.0, 2.0, 3.0]];
        let sys = bare_system(positions, NoBounds::<3>);
        let neighbors = NeighborList::from_pairs(vec![(0, 1, false)]);
        let d = displacements(&sys, &neighbors);
        assert_eq!(d, vec![[-1.0, -2.0, -3.0]]);
    }

    #[test]
    fn distances_lists_every_neighbor_list_pair_once() {
        let positions = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let sys = bare_system(positions, NoBounds::<3>);
        let exclusions = ExclusionMatrix::new();
        let finder = DistanceNeighborFinder::new(10.0, 1);
        let neighbors = finder.build(&sys.positions, &sys.boundary, &exclusions);
        let d = distances(&sys, &neighbors);
        assert_eq!(d.len(), 3);
        assert!(d.iter().all(|&r| (r - 1.0).abs() < 1e-9 || (r - std::f64::consts::SQRT_2).abs() < 1e-9));
    }

    #[test]
    fn rdf_of_a_dilute_lattice_gas_is_roughly_flat_far_from_origin() {
        let mut positions = Vec::new();
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    positions.push([i as f64, j as f64, k as f64]);
                }
            }
        }
        let boundary = Pbc::<3>::cubic(4.0).unwrap();
        let sys = bare_system(positions, boundary);
        let exclusions = ExclusionMatrix::new();
        let finder = DistanceNeighborFinder::new(2.0, 1);
        let neighbors = finder.build(&sys.positions, &sys.boundary, &exclusions);

        let g = rdf(&sys, &neighbors, 20, 2.0);
        assert_eq!(g.len(), 20);
        assert!(g.iter().any(|&x| x > 0.0));
    }

    #[test]
    #[should_panic]
    fn rdf_panics_without_periodic_bounds() {
        let positions = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
        let sys = bare_system(positions, NoBounds::<3>);
        let neighbors = NeighborList::from_pairs(vec![(0, 1, false)]);
        rdf(&sys, &neighbors, 10, 2.0);
    }
}
