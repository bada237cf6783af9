//! The simulation system: atoms, coordinates, velocities, box and the
//! composed interactions that act on them.
//!
//! Construction is the single validation point (spec's error policy):
//! [`System::new`] checks every length and index invariant once, up
//! front, so every later hot-path call (integrators, the force/energy
//! pipeline) can assume a well-formed system.

use crate::atom::Atom;
use crate::boundaries::BoundaryConditions;
use crate::finder::ExclusionMatrix;
use crate::pairwise::PairwiseInteraction;
use crate::result::*;
use crate::specific::{HarmonicAngleList, HarmonicBondList, TorsionList};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// The full state of a simulation: atoms, their coordinates and
/// velocities, the boundary conditions containing them, and the
/// interactions that act between them.
///
/// `D` is the dimensionality (2 or 3); `B` is the boundary condition type
/// ([`NoBounds`](crate::boundaries::NoBounds) or
/// [`Pbc`](crate::boundaries::Pbc)).
pub struct System<const D: usize, B: BoundaryConditions<D>> {
    pub atoms: Vec<Atom>,
    pub positions: Vec<[f64; D]>,
    pub velocities: Vec<[f64; D]>,
    pub boundary: B,
    pub pairwise: Vec<PairwiseInteraction>,
    pub bonds: HarmonicBondList,
    pub angles: HarmonicAngleList,
    pub propers: TorsionList,
    pub impropers: TorsionList,
    pub exclusions: ExclusionMatrix,
    /// Whether this system was constructed from typed `uom` quantities
    /// (`true`) or raw numbers (`false`). Provenance only: the hot path
    /// never reads it, so unitless and unit-tagged construction of the
    /// same configuration produce identical internal state (spec
    /// invariant 7).
    pub units: bool,
}

impl<const D: usize, B: BoundaryConditions<D>> System<D, B> {
    /// Construct a system from raw numbers in the crate's base units (nm,
    /// ps, Da, e, kJ/mol). Validates that `atoms`, `positions` and
    /// `velocities` have equal length and that every specific-interaction
    /// index is in range.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        atoms: Vec<Atom>,
        positions: Vec<[f64; D]>,
        velocities: Vec<[f64; D]>,
        boundary: B,
        pairwise: Vec<PairwiseInteraction>,
        bonds: HarmonicBondList,
        angles: HarmonicAngleList,
        propers: TorsionList,
        impropers: TorsionList,
        exclusions: ExclusionMatrix,
    ) -> Result<Self> {
        let n = atoms.len();
        if positions.len() != n {
            return Err(LengthMismatch("positions"));
        }
        if velocities.len() != n {
            return Err(LengthMismatch("velocities"));
        }

        // The system's unit policy is set by its first interaction (or
        // unitless, if it has none); every other interaction must agree
        // (spec invariant 3).
        let units = pairwise.first().map_or(false, |inter| inter.units);
        if pairwise.iter().any(|inter| inter.units != units) {
            return Err(UnitMismatch);
        }

        Ok(System {
            atoms,
            positions,
            velocities,
            boundary,
            pairwise,
            bonds,
            angles,
            propers,
            impropers,
            exclusions,
            units,
        })
    }

    /// Construct a system with no interactions at all, useful for tests
    /// and as a base for `with_*` builder calls.
    pub fn bare(atoms: Vec<Atom>, positions: Vec<[f64; D]>, velocities: Vec<[f64; D]>, boundary: B) -> Result<Self> {
        let n = atoms.len();
        Self::new(
            atoms,
            positions,
            velocities,
            boundary,
            Vec::new(),
            HarmonicBondList::new(Vec::new(), Vec::new(), n)?,
            HarmonicAngleList::new(Vec::new(), Vec::new(), n)?,
            TorsionList::new(Vec::new(), Vec::new(), n)?,
            TorsionList::new(Vec::new(), Vec::new(), n)?,
            ExclusionMatrix::new(),
        )
    }

    pub fn num_atoms(&self) -> usize {
        self.atoms.len()
    }

    /// Wrap every coordinate back into the primary cell (spec invariant
    /// 2), in place.
    pub fn wrap_coords(&mut self) {
        for c in self.positions.iter_mut() {
            *c = self.boundary.wrap(*c);
        }
    }
}

/// Draw fresh velocities for every atom from the Maxwell-Boltzmann
/// distribution at temperature `temperature_kelvin`, overwriting
/// `system.velocities` in place. Each component is independently
/// `N(0, sqrt(k_B T / m))`.
pub fn random_velocities<const D: usize, B: BoundaryConditions<D>, R: Rng>(
    system: &mut System<D, B>,
    temperature_kelvin: f64,
    rng: &mut R,
) {
    for (v, atom) in system.velocities.iter_mut().zip(system.atoms.iter()) {
        let sigma = (crate::units::f64::BOLTZMANN_CONSTANT.value * temperature_kelvin / atom.mass).sqrt();
        let normal = Normal::new(0.0, sigma).expect("sigma must be finite and non-negative");
        for k in 0..D {
            v[k] = normal.sample(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundaries::{NoBounds, Pbc};

    fn lj_fluid<const D: usize>(n: usize) -> System<D, NoBounds<D>> {
        let atoms = vec![Atom::new(12.0, 0.0, 0.3, 0.5); n];
        let positions = vec![[0.0; D]; n];
        let velocities = vec![[0.0; D]; n];
        System::bare(atoms, positions, velocities, NoBounds::<D>).unwrap()
    }

    #[test]
    fn rejects_mismatched_interaction_units() {
        let atoms = vec![Atom::new(12.0, 0.0, 0.3, 0.5); 2];
        let positions = vec![[0.0, 0.0, 0.0]; 2];
        let velocities = vec![[0.0, 0.0, 0.0]; 2];
        let pairwise = vec![
            crate::pairwise::PairwiseInteraction::lennard_jones(crate::cutoff::Cutoff::none()).with_units(true),
            crate::pairwise::PairwiseInteraction::coulomb(crate::cutoff::Cutoff::none()),
        ];
        let result = System::new(
            atoms,
            positions,
            velocities,
            NoBounds::<3>,
            pairwise,
            HarmonicBondList::new(Vec::new(), Vec::new(), 2).unwrap(),
            HarmonicAngleList::new(Vec::new(), Vec::new(), 2).unwrap(),
            TorsionList::new(Vec::new(), Vec::new(), 2).unwrap(),
            TorsionList::new(Vec::new(), Vec::new(), 2).unwrap(),
            ExclusionMatrix::new(),
        );
        assert!(matches!(result, Err(UnitMismatch)));
    }

    #[test]
    fn accepts_interactions_that_agree_on_units() {
        let atoms = vec![Atom::new(12.0, 0.0, 0.3, 0.5); 2];
        let positions = vec![[0.0, 0.0, 0.0]; 2];
        let velocities = vec![[0.0, 0.0, 0.0]; 2];
        let pairwise = vec![
            crate::pairwise::PairwiseInteraction::lennard_jones(crate::cutoff::Cutoff::none()).with_units(true),
            crate::pairwise::PairwiseInteraction::coulomb(crate::cutoff::Cutoff::none()).with_units(true),
        ];
        let sys = System::new(
            atoms,
            positions,
            velocities,
            NoBounds::<3>,
            pairwise,
            HarmonicBondList::new(Vec::new(), Vec::new(), 2).unwrap(),
            HarmonicAngleList::new(Vec::new(), Vec::new(), 2).unwrap(),
            TorsionList::new(Vec::new(), Vec::new(), 2).unwrap(),
            TorsionList::new(Vec::new(), Vec::new(), 2).unwrap(),
            ExclusionMatrix::new(),
        )
        .unwrap();
        assert!(sys.units);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let atoms = vec![Atom::new(12.0, 0.0, 0.3, 0.5); 3];
        let positions = vec![[0.0, 0.0, 0.0]; 2];
        let velocities = vec![[0.0, 0.0, 0.0]; 3];
        let result = System::bare(atoms, positions, velocities, NoBounds::<3>);
        assert!(result.is_err());
    }

    #[test]
    fn wrap_coords_respects_periodic_box() {
        let atoms = vec![Atom::new(12.0, 0.0, 0.3, 0.5)];
        let positions = vec![[2.5, -0.5, 0.0]];
        let velocities = vec![[0.0, 0.0, 0.0]];
        let mut sys = System::bare(atoms, positions, velocities, Pbc::<3>::cubic(2.0).unwrap()).unwrap();
        sys.wrap_coords();
        for k in 0..3 {
            assert!(sys.positions[0][k] >= 0.0 && sys.positions[0][k] < 2.0);
        }
    }

    #[test]
    fn random_velocities_scale_with_temperature() {
        let mut sys = lj_fluid::<3>(500);
        let mut rng = rand::thread_rng();
        random_velocities(&mut sys, 300.0, &mut rng);
        let ke: f64 = sys
            .velocities
            .iter()
            .zip(&sys.atoms)
            .map(|(v, a)| 0.5 * a.mass * crate::boundaries::norm2(*v))
            .sum();
        let temp = 2.0 * ke / (3.0 * sys.num_atoms() as f64 * crate::units::f64::BOLTZMANN_CONSTANT.value);
        // Equipartition is a statistical statement; allow generous slack for 500 atoms.
        assert!((temp - 300.0).abs() < 60.0, "measured temperature {}", temp);
    }
}
