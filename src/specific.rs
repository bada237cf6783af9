//! Specific (bonded) interactions: indexed tuples of atoms evaluated in
//! list order, as opposed to the pairwise interactions of
//! [`crate::pairwise`] which run over a neighbour list or all pairs.

use crate::boundaries::{norm, norm2, BoundaryConditions};
use crate::result::*;

/// A homogeneous list of `ARITY`-atom interactions sharing one parameter
/// type `P`. `indices[k]` and `params[k]` together describe interaction
/// `k`; both arrays have equal length, and every index is in `0..num_atoms`.
#[derive(Debug, Clone)]
pub struct SpecificInteractionList<const ARITY: usize, P> {
    indices: Vec<[usize; ARITY]>,
    params: Vec<P>,
}

impl<const ARITY: usize, P> SpecificInteractionList<ARITY, P> {
    pub fn new(indices: Vec<[usize; ARITY]>, params: Vec<P>, num_atoms: usize) -> Result<Self> {
        if indices.len() != params.len() {
            return Err(LengthMismatch("specific interaction indices and parameters"));
        }
        for tuple in &indices {
            for &i in tuple {
                if i >= num_atoms {
                    return Err(AtomIndexOutOfRange(i));
                }
            }
        }
        Ok(SpecificInteractionList { indices, params })
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[usize; ARITY], &P)> {
        self.indices.iter().zip(self.params.iter())
    }
}

/// `U = 1/2 kb (r - b0)^2`.
#[derive(Debug, Clone, Copy)]
pub struct HarmonicBond {
    pub b0: f64,
    pub kb: f64,
}

pub type HarmonicBondList = SpecificInteractionList<2, HarmonicBond>;

/// `U = 1/2 ktheta (theta - theta0)^2`, angle at the middle (second) atom
/// of the triple.
#[derive(Debug, Clone, Copy)]
pub struct HarmonicAngle {
    pub theta0: f64,
    pub ktheta: f64,
}

pub type HarmonicAngleList = SpecificInteractionList<3, HarmonicAngle>;

/// `U = k (1 + cos(n*phi - phi0))`, used for both proper and improper
/// torsions; only the atom ordering and intent differ between the two.
#[derive(Debug, Clone, Copy)]
pub struct Torsion {
    pub phi0: f64,
    pub k: f64,
    pub n: f64,
}

pub type TorsionList = SpecificInteractionList<4, Torsion>;

/// Accumulate harmonic bond forces into `forces` and return the summed
/// potential energy.
pub fn harmonic_bond_forces<const D: usize, B: BoundaryConditions<D>>(
    list: &HarmonicBondList,
    positions: &[[f64; D]],
    bounds: &B,
    forces: &mut [[f64; D]],
) -> f64 {
    let mut energy = 0.0;
    for (&[i, j], bond) in list.iter() {
        let dr = bounds.displacement(positions[i], positions[j]);
        let r = norm(dr);
        let delta = r - bond.b0;
        energy += 0.5 * bond.kb * delta * delta;

        let coeff = -bond.kb * delta / r;
        for k in 0..D {
            let f = coeff * dr[k];
            forces[i][k] += f;
            forces[j][k] -= f;
        }
    }
    energy
}

/// Accumulate harmonic angle forces into `forces` and return the summed
/// potential energy. The angle is measured at atom `j` of each `[i, j, k]`
/// triple.
pub fn harmonic_angle_forces<const D: usize, B: BoundaryConditions<D>>(
    list: &HarmonicAngleList,
    positions: &[[f64; D]],
    bounds: &B,
    forces: &mut [[f64; D]],
) -> f64 {
    let mut energy = 0.0;
    for (&[i, j, k], angle) in list.iter() {
        let rij = bounds.displacement(positions[i], positions[j]);
        let rkj = bounds.displacement(positions[k], positions[j]);

        let norm_ij = norm(rij);
        let norm_kj = norm(rkj);

        let mut cos_theta = dot(rij, rkj) / (norm_ij * norm_kj);
        cos_theta = cos_theta.clamp(-1.0, 1.0);
        let theta = cos_theta.acos();
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt().max(1e-12);

        let delta = theta - angle.theta0;
        energy += 0.5 * angle.ktheta * delta * delta;

        let dvdtheta = angle.ktheta * delta;
        let st = -dvdtheta / sin_theta;
        let sth = st * cos_theta;

        let cik = st / (norm_ij * norm_kj);
        let cii = sth / (norm_ij * norm_ij);
        let ckk = sth / (norm_kj * norm_kj);

        let mut f_i = [0.0; D];
        let mut f_k = [0.0; D];
        for d in 0..D {
            f_i[d] = cik * rkj[d] - cii * rij[d];
            f_k[d] = cik * rij[d] - ckk * rkj[d];
        }

        for d in 0..D {
            forces[i][d] += f_i[d];
            forces[k][d] += f_k[d];
            forces[j][d] += -f_i[d] - f_k[d];
        }
    }
    energy
}

/// Accumulate torsion forces (proper or improper; the formula is the same,
/// only the physical meaning of the four-atom tuple differs) using
/// Bekker's formulation of the dihedral gradient, and return the summed
/// potential energy.
pub fn torsion_forces<const D: usize, B: BoundaryConditions<D>>(
    list: &TorsionList,
    positions: &[[f64; D]],
    bounds: &B,
    forces: &mut [[f64; D]],
) -> f64 {
    assert!(D == 3, "torsions are only defined in 3 dimensions");

    let mut energy = 0.0;
    for (&[i, j, k, l], t) in list.iter() {
        let rij = to3(bounds.displacement(positions[i], positions[j]));
        let rkj = to3(bounds.displacement(positions[k], positions[j]));
        let rkl = to3(bounds.displacement(positions[k], positions[l]));

        let m = cross(rij, rkj);
        let n = cross(rkj, rkl);

        let norm_m2 = dot3(m, m);
        let norm_n2 = dot3(n, n);
        let norm_rkj = dot3(rkj, rkj).sqrt();

        let phi = {
            let y = dot3(cross(m, n), rkj) / norm_rkj;
            let x = dot3(m, n);
            y.atan2(x)
        };

        energy += t.k * (1.0 + (t.n * phi - t.phi0).cos());
        let dvdphi = -t.k * t.n * (t.n * phi - t.phi0).sin();

        let f_i = scale3(m, -dvdphi * norm_rkj / norm_m2);
        let f_l = scale3(n, dvdphi * norm_rkj / norm_n2);

        let p = dot3(rij, rkj) / dot3(rkj, rkj);
        let q = dot3(rkl, rkj) / dot3(rkj, rkj);

        // f_j = -f_i + p*f_i - q*f_l; f_k = -f_l - p*f_i + q*f_l
        let f_j = sub3(scale3(f_i, p - 1.0), scale3(f_l, q));
        let f_k = sub3(scale3(f_l, q - 1.0), scale3(f_i, p));

        for (idx, f) in [(i, f_i), (j, f_j), (k, f_k), (l, f_l)] {
            for d in 0..3 {
                forces[idx][d] += f[d];
            }
        }
    }
    energy
}

fn dot<const D: usize>(a: [f64; D], b: [f64; D]) -> f64 {
    (0..D).map(|k| a[k] * b[k]).sum()
}

fn to3<const D: usize>(v: [f64; D]) -> [f64; 3] {
    let mut out = [0.0; 3];
    for k in 0..D.min(3) {
        out[k] = v[k];
    }
    out
}

fn dot3(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn scale3(a: [f64; 3], s: f64) -> [f64; 3] {
    [a[0] * s, a[1] * s, a[2] * s]
}

fn sub3(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundaries::NoBounds;
    use more_asserts::assert_lt;

    #[test]
    fn harmonic_bond_pulls_stretched_atoms_together() {
        let list = HarmonicBondList::new(
            vec![[0, 1]],
            vec![HarmonicBond { b0: 0.1, kb: 1000.0 }],
            2,
        )
        .unwrap();
        let positions = [[0.0, 0.0, 0.0], [0.15, 0.0, 0.0]];
        let bounds = NoBounds::<3>;
        let mut forces = [[0.0; 3]; 2];
        let energy = harmonic_bond_forces(&list, &positions, &bounds, &mut forces);

        assert!(energy > 0.0);
        // Stretched beyond b0: force on atom 0 should point toward atom 1 (+x).
        assert!(forces[0][0] > 0.0);
        assert!(forces[1][0] < 0.0);
        for k in 0..3 {
            assert_lt!((forces[0][k] + forces[1][k]).abs(), 1e-10);
        }
    }

    #[test]
    fn harmonic_bond_at_equilibrium_has_zero_force() {
        let list = HarmonicBondList::new(
            vec![[0, 1]],
            vec![HarmonicBond { b0: 0.1, kb: 1000.0 }],
            2,
        )
        .unwrap();
        let positions = [[0.0, 0.0, 0.0], [0.1, 0.0, 0.0]];
        let bounds = NoBounds::<3>;
        let mut forces = [[0.0; 3]; 2];
        let energy = harmonic_bond_forces(&list, &positions, &bounds, &mut forces);
        assert_lt!(energy.abs(), 1e-10);
        assert_lt!(forces[0][0].abs(), 1e-10);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let result = HarmonicBondList::new(vec![[0, 5]], vec![HarmonicBond { b0: 0.1, kb: 1.0 }], 2);
        assert!(result.is_err());
    }

    #[test]
    fn harmonic_angle_at_equilibrium_has_zero_force() {
        let list = HarmonicAngleList::new(
            vec![[0, 1, 2]],
            vec![HarmonicAngle {
                theta0: std::f64::consts::FRAC_PI_2,
                ktheta: 500.0,
            }],
            3,
        )
        .unwrap();
        let positions = [[0.1, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.1, 0.0]];
        let bounds = NoBounds::<3>;
        let mut forces = [[0.0; 3]; 3];
        let energy = harmonic_angle_forces(&list, &positions, &bounds, &mut forces);
        assert_lt!(energy.abs(), 1e-8);
    }
}
