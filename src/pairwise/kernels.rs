//! Closed-form pairwise kernels.
//!
//! Every kernel is a pure function of squared distance and a handful of
//! parameters, returning `(force_divr, potential)` where `force_divr` is
//! the force magnitude divided by `r` (so callers can get the force vector
//! with a single multiply by the displacement, without an extra
//! normalization square root). None of these apply a cutoff; that's
//! [`crate::cutoff::Cutoff`]'s job, composed on top.

use crate::units::f64::COULOMB_CONSTANT;

/// `U = 4E(s^12 - s^6)`, `F/r = 24E/r^2 (2s^12 - s^6)`, `s = (sigma/r)^6`.
pub fn lennard_jones(r2: f64, sigma: f64, epsilon: f64) -> (f64, f64) {
    let sr2 = sigma * sigma / r2;
    let sr6 = sr2 * sr2 * sr2;
    let sr12 = sr6 * sr6;
    let potential = 4.0 * epsilon * (sr12 - sr6);
    let force_divr = 24.0 * epsilon / r2 * (2.0 * sr12 - sr6);
    (force_divr, potential)
}

/// Lennard-Jones with Beutler soft-core distance `r_sc^6 = r^6 + alpha
/// sigma^6 lambda^p`, used to avoid the singularity at `r=0` while
/// alchemically decoupling an atom (`lambda` from 1 = fully coupled to 0 =
/// fully decoupled).
pub fn lj_soft_core(
    r2: f64,
    sigma: f64,
    epsilon: f64,
    alpha: f64,
    lambda: f64,
    p: i32,
) -> (f64, f64) {
    let r6 = r2 * r2 * r2;
    let sigma6 = sigma.powi(6);
    let rsc6 = r6 + alpha * sigma6 * lambda.powi(p);
    let rsc2 = rsc6.powf(1.0 / 3.0);

    let sr2 = sigma * sigma / rsc2;
    let sr6 = sr2 * sr2 * sr2;
    let sr12 = sr6 * sr6;

    let potential = 4.0 * epsilon * (sr12 - sr6);
    let f_sc_divrsc = 24.0 * epsilon / rsc2 * (2.0 * sr12 - sr6);

    let r = r2.sqrt();
    let rsc = rsc2.sqrt();
    let force_divr = f_sc_divrsc * (r / rsc).powi(4);

    (force_divr, potential)
}

/// Purely repulsive `U = 4E s^12`, `F/r = 48E/r^2 s^12`.
pub fn soft_sphere(r2: f64, sigma: f64, epsilon: f64) -> (f64, f64) {
    let sr2 = sigma * sigma / r2;
    let sr12 = sr2 * sr2 * sr2 * sr2 * sr2 * sr2;
    let potential = 4.0 * epsilon * sr12;
    let force_divr = 48.0 * epsilon / r2 * sr12;
    (force_divr, potential)
}

/// Generalized Mie(m,n) potential, `U = C*E*((s/r)^n - (s/r)^m)`. Requires
/// `m < n`; the closed-form normalization `C` is only positive for
/// repulsive exponent `n` stronger than attractive exponent `m`.
pub fn mie(r2: f64, sigma: f64, epsilon: f64, m: f64, n: f64) -> (f64, f64) {
    let c = (n / (n - m)) * (n / m).powf(m / (n - m));
    let r = r2.sqrt();
    let sr_m = (sigma / r).powf(m);
    let sr_n = (sigma / r).powf(n);
    let potential = c * epsilon * (sr_n - sr_m);
    let force_divr = -c * epsilon / r2 * (m * sr_m - n * sr_n);
    (force_divr, potential)
}

/// Plain Coulomb interaction, `U = k q_i q_j / r`.
pub fn coulomb(r2: f64, q_i: f64, q_j: f64) -> (f64, f64) {
    let r = r2.sqrt();
    let potential = COULOMB_CONSTANT * q_i * q_j / r;
    let force_divr = COULOMB_CONSTANT * q_i * q_j / (r2 * r);
    (force_divr, potential)
}

/// Reaction-field Coulomb: a plain Coulomb term plus a quadratic
/// correction representing a continuum dielectric `epsilon_rf` beyond the
/// cutoff `r_c`. `k_rf` and `c_rf` are precomputed once per interaction at
/// construction.
pub fn coulomb_reaction_field(r2: f64, q_i: f64, q_j: f64, k_rf: f64, c_rf: f64) -> (f64, f64) {
    let r = r2.sqrt();
    let kqq = COULOMB_CONSTANT * q_i * q_j;
    let potential = kqq * (1.0 / r + k_rf * r2 - c_rf);
    let force_divr = kqq * (1.0 / (r2 * r) - 2.0 * k_rf);
    (force_divr, potential)
}

/// Precompute the reaction-field coefficients `(k_rf, c_rf)` for cutoff
/// `r_c` and relative permittivity `epsilon_rf` of the continuum beyond it
/// (vacuum beyond the cutoff is `epsilon_rf = 1`).
pub fn reaction_field_coefficients(r_c: f64, epsilon_rf: f64) -> (f64, f64) {
    let k_rf = (epsilon_rf - 1.0) / (2.0 * epsilon_rf + 1.0) / r_c.powi(3);
    let c_rf = 1.0 / r_c + k_rf * r_c * r_c;
    (k_rf, c_rf)
}

/// Newtonian gravity, `U = -G m_i m_j / r`. Attractive: `force_divr` is
/// negative, pulling i toward j when multiplied by the `i - j`
/// displacement.
pub fn gravity(r2: f64, m_i: f64, m_j: f64, g: f64) -> (f64, f64) {
    let r = r2.sqrt();
    let potential = -g * m_i * m_j / r;
    let force_divr = -g * m_i * m_j / (r2 * r);
    (force_divr, potential)
}

#[cfg(test)]
mod tests {
    use super::*;
    use more_asserts::assert_lt;

    #[test]
    fn lj_force_matches_finite_difference_of_potential() {
        let sigma = 0.3;
        let epsilon = 0.5;
        let r = 0.35;
        let h = 1e-6;
        let (_, u_minus) = lennard_jones((r - h) * (r - h), sigma, epsilon);
        let (_, u_plus) = lennard_jones((r + h) * (r + h), sigma, epsilon);
        let dudr = (u_plus - u_minus) / (2.0 * h);

        let (force_divr, _) = lennard_jones(r * r, sigma, epsilon);
        let force = force_divr * r;

        assert_lt!((force - (-dudr)).abs(), 1e-4);
    }

    #[test]
    fn lj_potential_is_zero_at_sigma() {
        let (_, u) = lennard_jones(0.09, 0.3, 0.5);
        assert_lt!(u.abs(), 1e-10);
    }

    #[test]
    fn soft_sphere_is_purely_repulsive() {
        let (force_divr, potential) = soft_sphere(0.09, 0.3, 0.5);
        assert!(force_divr > 0.0);
        assert!(potential > 0.0);
    }

    #[test]
    fn mie_12_6_matches_lennard_jones() {
        let (f_mie, u_mie) = mie(0.1225, 0.3, 0.5, 6.0, 12.0);
        let (f_lj, u_lj) = lennard_jones(0.1225, 0.3, 0.5);
        assert_lt!((f_mie - f_lj).abs(), 1e-10);
        assert_lt!((u_mie - u_lj).abs(), 1e-10);
    }

    #[test]
    fn coulomb_like_charges_repel() {
        let (force_divr, potential) = coulomb(0.25, 1.0, 1.0);
        assert!(force_divr > 0.0);
        assert!(potential > 0.0);
    }

    #[test]
    fn coulomb_opposite_charges_attract() {
        let (force_divr, potential) = coulomb(0.25, 1.0, -1.0);
        assert!(force_divr < 0.0);
        assert!(potential < 0.0);
    }

    #[test]
    fn reaction_field_reduces_to_plain_coulomb_when_epsilon_rf_is_one() {
        let (k_rf, _c_rf) = reaction_field_coefficients(1.2, 1.0);
        assert_lt!(k_rf.abs(), 1e-12);
    }

    #[test]
    fn gravity_is_always_attractive_for_positive_masses() {
        let (force_divr, potential) = gravity(4.0, 1.0, 1.0, 1.0);
        assert!(force_divr < 0.0);
        assert!(potential < 0.0);
    }
}
