//! Pairwise non-bonded interactions.
//!
//! A [`PairwiseInteraction`] is a tagged variant (not a trait object) so the
//! match in [`PairwiseInteraction::evaluate`] monomorphizes and vectorizes
//! per kind rather than going through a virtual call on every pair in the
//! inner loop.

pub mod kernels;

use crate::atom::Atom;
use crate::cutoff::Cutoff;

/// Combining rule for Lennard-Jones-like sigma parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixingRule {
    /// Arithmetic mean, `(sigma_i + sigma_j) / 2`.
    LorentzBerthelot,
    /// Geometric mean, `sqrt(sigma_i * sigma_j)`.
    Geometric,
}

impl MixingRule {
    fn mix_sigma(self, sigma_i: f64, sigma_j: f64) -> f64 {
        match self {
            MixingRule::LorentzBerthelot => (sigma_i + sigma_j) / 2.0,
            MixingRule::Geometric => (sigma_i * sigma_j).sqrt(),
        }
    }
}

/// Epsilon always combines by geometric mean, independent of the sigma
/// mixing rule.
fn mix_epsilon(epsilon_i: f64, epsilon_j: f64) -> f64 {
    (epsilon_i * epsilon_j).sqrt()
}

/// The closed-form kernel a [`PairwiseInteraction`] evaluates.
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    LennardJones,
    LjSoftCore { alpha: f64, lambda: f64, p: i32 },
    SoftSphere,
    Mie { m: f64, n: f64 },
    Coulomb,
    CoulombReactionField { k_rf: f64, c_rf: f64 },
    Gravity { g: f64 },
}

impl Kind {
    fn is_lj_like(self) -> bool {
        !matches!(
            self,
            Kind::Coulomb | Kind::CoulombReactionField { .. } | Kind::Gravity { .. }
        )
    }

    fn is_charge_based(self) -> bool {
        matches!(self, Kind::Coulomb | Kind::CoulombReactionField { .. })
    }

    fn evaluate(self, r2: f64, sigma: f64, epsilon: f64, q_i: f64, q_j: f64, m_i: f64, m_j: f64) -> (f64, f64) {
        match self {
            Kind::LennardJones => kernels::lennard_jones(r2, sigma, epsilon),
            Kind::LjSoftCore { alpha, lambda, p } => {
                kernels::lj_soft_core(r2, sigma, epsilon, alpha, lambda, p)
            }
            Kind::SoftSphere => kernels::soft_sphere(r2, sigma, epsilon),
            Kind::Mie { m, n } => kernels::mie(r2, sigma, epsilon, m, n),
            Kind::Coulomb => kernels::coulomb(r2, q_i, q_j),
            Kind::CoulombReactionField { k_rf, c_rf } => {
                kernels::coulomb_reaction_field(r2, q_i, q_j, k_rf, c_rf)
            }
            Kind::Gravity { g } => kernels::gravity(r2, m_i, m_j, g),
        }
    }
}

/// A single pairwise non-bonded interaction, applied either to every
/// neighbour-list pair (`nl_only = true`) or to every non-excluded i<j
/// pair in the system.
#[derive(Debug, Clone, Copy)]
pub struct PairwiseInteraction {
    kind: Kind,
    cutoff: Cutoff,
    /// Whether this interaction is only evaluated over the neighbour list
    /// (true for short-range terms) or over every non-excluded pair
    /// (typically only appropriate for `Cutoff::None` with a small system,
    /// e.g. plain gravity).
    pub nl_only: bool,
    /// Sigma mixing rule for Lennard-Jones-family kernels. Unused by
    /// Coulomb and gravity.
    pub mixing_rule: MixingRule,
    /// Scale factor applied to epsilon when exactly one atom in the pair
    /// is flagged solute.
    pub weight_solute_solvent: f64,
    /// Scale factor applied to force and energy for pairs flagged as 1-4
    /// in the neighbour list. `None` means 1-4 pairs are not treated
    /// specially by this interaction.
    pub weight_14: Option<f64>,
    /// When false (the default), pairs with a zero sigma/epsilon (for
    /// Lennard-Jones-family kernels) or zero charge (for Coulomb kernels)
    /// short-circuit to zero force and energy rather than being evaluated.
    pub skip_shortcut: bool,
    /// Whether this interaction's force/energy constants were derived from
    /// typed `uom` quantities (`true`) or raw numbers (`false`). Every
    /// interaction attached to a `System` must agree with the system's own
    /// `units` flag and with each other; `System::new` checks this once at
    /// construction (spec invariant 3) rather than per-step.
    pub units: bool,
}

impl PairwiseInteraction {
    fn new(kind: Kind, cutoff: Cutoff) -> Self {
        PairwiseInteraction {
            kind,
            cutoff,
            nl_only: true,
            mixing_rule: MixingRule::LorentzBerthelot,
            weight_solute_solvent: 1.0,
            weight_14: None,
            skip_shortcut: false,
            units: false,
        }
    }

    pub fn lennard_jones(cutoff: Cutoff) -> Self {
        Self::new(Kind::LennardJones, cutoff)
    }

    pub fn lj_soft_core(cutoff: Cutoff, alpha: f64, lambda: f64, p: i32) -> Self {
        Self::new(Kind::LjSoftCore { alpha, lambda, p }, cutoff)
    }

    pub fn soft_sphere(cutoff: Cutoff) -> Self {
        Self::new(Kind::SoftSphere, cutoff)
    }

    pub fn mie(cutoff: Cutoff, m: f64, n: f64) -> crate::result::Result<Self> {
        if !(m < n) {
            return Err(crate::result::IllegalTopology);
        }
        Ok(Self::new(Kind::Mie { m, n }, cutoff))
    }

    pub fn coulomb(cutoff: Cutoff) -> Self {
        Self::new(Kind::Coulomb, cutoff)
    }

    /// `r_c` must match the distance cutoff of `cutoff` for the reaction
    /// field correction to be consistent; `epsilon_rf` is the relative
    /// permittivity of the continuum dielectric assumed beyond `r_c`.
    pub fn coulomb_reaction_field(cutoff: Cutoff, r_c: f64, epsilon_rf: f64) -> Self {
        let (k_rf, c_rf) = kernels::reaction_field_coefficients(r_c, epsilon_rf);
        Self::new(Kind::CoulombReactionField { k_rf, c_rf }, cutoff)
    }

    pub fn gravity(cutoff: Cutoff, g: f64) -> Self {
        let mut inter = Self::new(Kind::Gravity { g }, cutoff);
        inter.nl_only = false;
        inter
    }

    pub fn with_mixing_rule(mut self, rule: MixingRule) -> Self {
        self.mixing_rule = rule;
        self
    }

    pub fn with_weight_solute_solvent(mut self, weight: f64) -> Self {
        self.weight_solute_solvent = weight;
        self
    }

    pub fn with_weight_14(mut self, weight: f64) -> Self {
        self.weight_14 = Some(weight);
        self
    }

    pub fn with_skip_shortcut(mut self, skip_shortcut: bool) -> Self {
        self.skip_shortcut = skip_shortcut;
        self
    }

    pub fn with_nl_only(mut self, nl_only: bool) -> Self {
        self.nl_only = nl_only;
        self
    }

    /// Flag this interaction as constructed from typed `uom` quantities
    /// rather than raw numbers, so `System::new` can check it against the
    /// system's own `units` flag and every other interaction's.
    pub fn with_units(mut self, units: bool) -> Self {
        self.units = units;
        self
    }

    pub fn cutoff(&self) -> &Cutoff {
        &self.cutoff
    }

    fn solute_scale(&self, solute_i: bool, solute_j: bool) -> f64 {
        if solute_i != solute_j {
            self.weight_solute_solvent
        } else {
            1.0
        }
    }

    /// Evaluate this interaction for a pair with minimum-image
    /// displacement `dr = pos_i - pos_j`. Returns `(force_on_i,
    /// potential_energy)`; the force on j is the negation.
    pub fn evaluate<const D: usize>(
        &self,
        dr: [f64; D],
        atom_i: &Atom,
        atom_j: &Atom,
        is_14: bool,
    ) -> ([f64; D], f64) {
        if !self.skip_shortcut {
            if self.kind.is_lj_like()
                && (atom_i.sigma == 0.0
                    || atom_i.epsilon == 0.0
                    || atom_j.sigma == 0.0
                    || atom_j.epsilon == 0.0)
            {
                return ([0.0; D], 0.0);
            }
            if self.kind.is_charge_based() && (atom_i.charge == 0.0 || atom_j.charge == 0.0) {
                return ([0.0; D], 0.0);
            }
        }

        let r2 = crate::boundaries::norm2(dr);

        if let Some(rc2) = self.cutoff.sqdist_cutoff() {
            if r2 >= rc2 {
                return ([0.0; D], 0.0);
            }
        }

        let sigma = self.mixing_rule.mix_sigma(atom_i.sigma, atom_j.sigma);
        let epsilon =
            mix_epsilon(atom_i.epsilon, atom_j.epsilon) * self.solute_scale(atom_i.solute, atom_j.solute);

        let r = r2.sqrt();
        let (force_divr_raw, potential_raw) =
            self.kind
                .evaluate(r2, sigma, epsilon, atom_i.charge, atom_j.charge, atom_i.mass, atom_j.mass);

        let kind = self.kind;
        let kernel_at_cutoff = move |r_c: f64| {
            kind.evaluate(r_c * r_c, sigma, epsilon, atom_i.charge, atom_j.charge, atom_i.mass, atom_j.mass)
        };

        let (mut force_divr, mut potential) =
            self.cutoff
                .apply(r2, force_divr_raw, potential_raw, r, kernel_at_cutoff);

        if is_14 {
            if let Some(w) = self.weight_14 {
                force_divr *= w;
                potential *= w;
            }
        }

        let mut force = [0.0; D];
        for k in 0..D {
            force[k] = force_divr * dr[k];
        }

        (force, potential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use more_asserts::assert_lt;

    fn atom(sigma: f64, epsilon: f64, charge: f64) -> Atom {
        Atom {
            mass: 12.0,
            charge,
            sigma,
            epsilon,
            solute: false,
        }
    }

    #[test]
    fn newtons_third_law_holds() {
        let inter = PairwiseInteraction::lennard_jones(Cutoff::none());
        let a = atom(0.3, 0.5, 0.0);
        let b = atom(0.35, 0.4, 0.0);
        let dr = [0.2, -0.1, 0.05];
        let (force_on_i, u_ij) = inter.evaluate(dr, &a, &b, false);
        let neg_dr = [-dr[0], -dr[1], -dr[2]];
        let (force_on_j_from_ji, u_ji) = inter.evaluate(neg_dr, &b, &a, false);
        for k in 0..3 {
            assert_lt!((force_on_i[k] + force_on_j_from_ji[k]).abs(), 1e-10);
        }
        assert_lt!((u_ij - u_ji).abs(), 1e-10);
    }

    #[test]
    fn zero_sigma_short_circuits() {
        let inter = PairwiseInteraction::lennard_jones(Cutoff::none());
        let a = atom(0.0, 0.0, 0.0);
        let b = atom(0.3, 0.4, 0.0);
        let (force, u) = inter.evaluate([0.3, 0.0, 0.0], &a, &b, false);
        assert_eq!(force, [0.0, 0.0, 0.0]);
        assert_eq!(u, 0.0);
    }

    #[test]
    fn beyond_cutoff_is_zero() {
        let inter = PairwiseInteraction::lennard_jones(Cutoff::distance(1.0));
        let a = atom(0.3, 0.5, 0.0);
        let b = atom(0.3, 0.5, 0.0);
        let (force, u) = inter.evaluate([2.0, 0.0, 0.0], &a, &b, false);
        assert_eq!(force, [0.0, 0.0, 0.0]);
        assert_eq!(u, 0.0);
    }

    #[test]
    fn weight_14_scales_force_and_energy() {
        let inter = PairwiseInteraction::coulomb(Cutoff::none()).with_weight_14(0.5);
        let a = atom(0.0, 0.0, 1.0);
        let b = atom(0.0, 0.0, -1.0);
        let dr = [0.3, 0.0, 0.0];
        let (force_full, u_full) = PairwiseInteraction::coulomb(Cutoff::none()).evaluate(dr, &a, &b, false);
        let (force_14, u_14) = inter.evaluate(dr, &a, &b, true);
        for k in 0..3 {
            assert_lt!((force_14[k] - 0.5 * force_full[k]).abs(), 1e-12);
        }
        assert_lt!((u_14 - 0.5 * u_full).abs(), 1e-12);
    }

    #[test]
    fn mie_rejects_m_greater_than_n() {
        assert!(PairwiseInteraction::mie(Cutoff::none(), 12.0, 6.0).is_err());
        assert!(PairwiseInteraction::mie(Cutoff::none(), 6.0, 12.0).is_ok());
    }

    #[test]
    fn geometric_mixing_matches_sqrt() {
        let rule = MixingRule::Geometric;
        assert_lt!((rule.mix_sigma(0.2, 0.8) - 0.4).abs(), 1e-12);
    }
}
