//! Force/energy pipeline: assembles per-atom forces and scalar energies
//! from the pairwise and specific interactions of a [`System`], over a
//! [`NeighborList`].
//!
//! Pair traversal is partitioned across worker threads with `rayon`, each
//! thread writing into a private accumulator that is reduced once
//! traversal completes — no locks on the hot path, matching spec's
//! concurrency model (§5).

use crate::boundaries::BoundaryConditions;
use crate::finder::NeighborList;
use crate::specific::{harmonic_angle_forces, harmonic_bond_forces, torsion_forces};
use crate::system::System;
use rayon::prelude::*;

fn zero_acc<const D: usize>(n: usize) -> Vec<[f64; D]> {
    vec![[0.0; D]; n]
}

fn add_acc<const D: usize>(mut a: Vec<[f64; D]>, b: Vec<[f64; D]>) -> Vec<[f64; D]> {
    for (ai, bi) in a.iter_mut().zip(b.iter()) {
        for k in 0..D {
            ai[k] += bi[k];
        }
    }
    a
}

/// All-pairs (non-neighbour-list) index pairs with `i < j`, excluding
/// permanently-excluded pairs. Used by interactions with `nl_only =
/// false` (e.g. unscreened gravity).
fn all_pairs<const D: usize, B: BoundaryConditions<D>>(system: &System<D, B>) -> Vec<(usize, usize, bool)> {
    let n = system.num_atoms();
    let mut out = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if !system.exclusions.is_excluded(i, j) {
                out.push((i, j, system.exclusions.is_14(i, j)));
            }
        }
    }
    out
}

/// Sum of per-atom forces from every pairwise and specific interaction in
/// `system`, over `neighbors` for neighbour-list-only interactions.
pub fn forces<const D: usize, B: BoundaryConditions<D> + Sync>(
    system: &System<D, B>,
    neighbors: &NeighborList,
) -> Vec<[f64; D]> {
    let n = system.num_atoms();
    let mut acc = zero_acc::<D>(n);

    let nl_only: Vec<&crate::pairwise::PairwiseInteraction> =
        system.pairwise.iter().filter(|p| p.nl_only).collect();
    if !nl_only.is_empty() {
        let nl_acc = neighbors
            .pairs()
            .par_iter()
            .fold(
                || zero_acc::<D>(n),
                |mut local, &(i, j, is_14)| {
                    let dr = system.boundary.displacement(system.positions[i], system.positions[j]);
                    for inter in &nl_only {
                        let (f, _) = inter.evaluate(dr, &system.atoms[i], &system.atoms[j], is_14);
                        for k in 0..D {
                            local[i][k] += f[k];
                            local[j][k] -= f[k];
                        }
                    }
                    local
                },
            )
            .reduce(|| zero_acc::<D>(n), add_acc);
        acc = add_acc(acc, nl_acc);
    }

    let all_pairs_interactions: Vec<&crate::pairwise::PairwiseInteraction> =
        system.pairwise.iter().filter(|p| !p.nl_only).collect();
    if !all_pairs_interactions.is_empty() {
        let pairs = all_pairs(system);
        let ap_acc = pairs
            .par_iter()
            .fold(
                || zero_acc::<D>(n),
                |mut local, &(i, j, is_14)| {
                    let dr = system.boundary.displacement(system.positions[i], system.positions[j]);
                    for inter in &all_pairs_interactions {
                        let (f, _) = inter.evaluate(dr, &system.atoms[i], &system.atoms[j], is_14);
                        for k in 0..D {
                            local[i][k] += f[k];
                            local[j][k] -= f[k];
                        }
                    }
                    local
                },
            )
            .reduce(|| zero_acc::<D>(n), add_acc);
        acc = add_acc(acc, ap_acc);
    }

    harmonic_bond_forces(&system.bonds, &system.positions, &system.boundary, &mut acc);
    harmonic_angle_forces(&system.angles, &system.positions, &system.boundary, &mut acc);
    torsion_forces(&system.propers, &system.positions, &system.boundary, &mut acc);
    torsion_forces(&system.impropers, &system.positions, &system.boundary, &mut acc);

    acc
}

/// Forces divided by each atom's mass.
pub fn accelerations<const D: usize, B: BoundaryConditions<D> + Sync>(
    system: &System<D, B>,
    neighbors: &NeighborList,
) -> Vec<[f64; D]> {
    let mut f = forces(system, neighbors);
    for (fi, atom) in f.iter_mut().zip(system.atoms.iter()) {
        for k in 0..D {
            fi[k] /= atom.mass;
        }
    }
    f
}

/// Total potential energy of `system`: the sum of every pairwise
/// interaction over `neighbors` (or all pairs, for `nl_only = false`
/// interactions) plus every specific interaction. Each pair is counted
/// once (natural from the `i < j` traversal), so this never double-counts.
pub fn potential_energy<const D: usize, B: BoundaryConditions<D> + Sync>(
    system: &System<D, B>,
    neighbors: &NeighborList,
) -> f64 {
    let mut energy = 0.0;

    let nl_only: Vec<&crate::pairwise::PairwiseInteraction> =
        system.pairwise.iter().filter(|p| p.nl_only).collect();
    energy += neighbors
        .pairs()
        .par_iter()
        .map(|&(i, j, is_14)| {
            let dr = system.boundary.displacement(system.positions[i], system.positions[j]);
            nl_only
                .iter()
                .map(|inter| inter.evaluate(dr, &system.atoms[i], &system.atoms[j], is_14).1)
                .sum::<f64>()
        })
        .sum::<f64>();

    let all_pairs_interactions: Vec<&crate::pairwise::PairwiseInteraction> =
        system.pairwise.iter().filter(|p| !p.nl_only).collect();
    if !all_pairs_interactions.is_empty() {
        let pairs = all_pairs(system);
        energy += pairs
            .par_iter()
            .map(|&(i, j, is_14)| {
                let dr = system.boundary.displacement(system.positions[i], system.positions[j]);
                all_pairs_interactions
                    .iter()
                    .map(|inter| inter.evaluate(dr, &system.atoms[i], &system.atoms[j], is_14).1)
                    .sum::<f64>()
            })
            .sum::<f64>();
    }

    let mut scratch = zero_acc::<D>(system.num_atoms());
    energy += harmonic_bond_forces(&system.bonds, &system.positions, &system.boundary, &mut scratch);
    energy += harmonic_angle_forces(&system.angles, &system.positions, &system.boundary, &mut scratch);
    energy += torsion_forces(&system.propers, &system.positions, &system.boundary, &mut scratch);
    energy += torsion_forces(&system.impropers, &system.positions, &system.boundary, &mut scratch);

    energy
}

/// Total kinetic energy, `sum(1/2 m v^2)`.
pub fn kinetic_energy<const D: usize, B: BoundaryConditions<D>>(system: &System<D, B>) -> f64 {
    system
        .velocities
        .iter()
        .zip(system.atoms.iter())
        .map(|(v, atom)| 0.5 * atom.mass * crate::boundaries::norm2(*v))
        .sum()
}

/// Instantaneous temperature from the equipartition theorem,
/// `2 KE / (D N k_B)`.
pub fn temperature<const D: usize, B: BoundaryConditions<D>>(system: &System<D, B>) -> f64 {
    let dof = (D * system.num_atoms()) as f64;
    2.0 * kinetic_energy(system) / (dof * crate::units::f64::BOLTZMANN_CONSTANT.value)
}
