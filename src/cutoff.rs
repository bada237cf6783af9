//! Cutoff policies applied to pairwise interactions.
//!
//! A [`Cutoff`] takes the raw `(force_divr, potential)` pair a kernel
//! computes at squared distance `r2` and transforms it according to one of
//! the variants below. Every variant precomputes the squared radii it
//! needs so the hot pair loop never takes a square root to decide whether
//! a pair is inside the cutoff.

/// A cutoff policy for a pairwise interaction.
#[derive(Debug, Clone, Copy)]
pub enum Cutoff {
    /// No cutoff: the raw potential applies at every distance.
    None,
    /// Hard distance cutoff: zero outside `r_c`, raw inside.
    Distance { sqdist_cutoff: f64 },
    /// Shifted potential: zero outside `r_c`, `U(r) - U(r_c)` inside (force
    /// unchanged).
    ShiftedPotential { sqdist_cutoff: f64 },
    /// Shifted force: zero outside `r_c`; inside, the force is shifted so
    /// it vanishes continuously at `r_c`, and the potential is adjusted to
    /// match by integrating that shift back in.
    ShiftedForce { sqdist_cutoff: f64 },
    /// Cubic-spline switching function: raw inside `r_on`, a cubic
    /// polynomial smoothly bringing both force and potential to zero
    /// across `[r_on, r_c]`, zero outside `r_c`.
    CubicSwitch {
        sqdist_activation: f64,
        sqdist_cutoff: f64,
    },
}

impl Cutoff {
    /// No cutoff.
    pub fn none() -> Self {
        Cutoff::None
    }

    /// Hard distance cutoff at `r_c`.
    pub fn distance(r_c: f64) -> Self {
        Cutoff::Distance {
            sqdist_cutoff: r_c * r_c,
        }
    }

    /// Shifted-potential cutoff at `r_c`.
    pub fn shifted_potential(r_c: f64) -> Self {
        Cutoff::ShiftedPotential {
            sqdist_cutoff: r_c * r_c,
        }
    }

    /// Shifted-force cutoff at `r_c`.
    pub fn shifted_force(r_c: f64) -> Self {
        Cutoff::ShiftedForce {
            sqdist_cutoff: r_c * r_c,
        }
    }

    /// Cubic-spline switching between `r_on` and `r_c`.
    pub fn cubic_switch(r_on: f64, r_c: f64) -> Self {
        Cutoff::CubicSwitch {
            sqdist_activation: r_on * r_on,
            sqdist_cutoff: r_c * r_c,
        }
    }

    /// The squared distance beyond which this cutoff always returns zero,
    /// if any. Used by neighbour finders to size cell grids and prune
    /// all-pairs scans.
    pub fn sqdist_cutoff(&self) -> Option<f64> {
        match self {
            Cutoff::None => None,
            Cutoff::Distance { sqdist_cutoff }
            | Cutoff::ShiftedPotential { sqdist_cutoff }
            | Cutoff::ShiftedForce { sqdist_cutoff }
            | Cutoff::CubicSwitch { sqdist_cutoff, .. } => Some(*sqdist_cutoff),
        }
    }

    /// Apply this cutoff policy to a raw `(force_divr, potential, r)`
    /// triple computed by a pairwise kernel at squared distance `r2`.
    /// `raw_potential_at_cutoff` is `U(r_c)` from the same kernel, needed
    /// by the shifted variants; callers that never use `ShiftedPotential`
    /// or `ShiftedForce` may pass `0.0`.
    ///
    /// Returns `(force_divr, potential)`, both zero when `r2` is beyond
    /// the cutoff.
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        &self,
        r2: f64,
        force_divr: f64,
        potential: f64,
        r: f64,
        kernel_at_cutoff: impl Fn(f64) -> (f64, f64),
    ) -> (f64, f64) {
        match *self {
            Cutoff::None => (force_divr, potential),
            Cutoff::Distance { sqdist_cutoff } => {
                if r2 < sqdist_cutoff {
                    (force_divr, potential)
                } else {
                    (0.0, 0.0)
                }
            }
            Cutoff::ShiftedPotential { sqdist_cutoff } => {
                if r2 < sqdist_cutoff {
                    let r_c = sqdist_cutoff.sqrt();
                    let (_, u_rc) = kernel_at_cutoff(r_c);
                    (force_divr, potential - u_rc)
                } else {
                    (0.0, 0.0)
                }
            }
            Cutoff::ShiftedForce { sqdist_cutoff } => {
                if r2 < sqdist_cutoff {
                    let r_c = sqdist_cutoff.sqrt();
                    let (f_rc_divr, u_rc) = kernel_at_cutoff(r_c);
                    let f_rc = f_rc_divr * r_c;
                    // Shift the (scalar) force by the constant F(r_c) so it
                    // vanishes at r_c, then integrate that constant shift
                    // back into the energy:
                    // F_shifted(r) = F(r) - F(r_c)
                    // U_shifted(r) = U(r) - U(r_c) + (r - r_c) * F(r_c)
                    let f_shifted_divr = force_divr - f_rc / r;
                    let u_shifted = potential - u_rc + (r - r_c) * f_rc;
                    (f_shifted_divr, u_shifted)
                } else {
                    (0.0, 0.0)
                }
            }
            Cutoff::CubicSwitch {
                sqdist_activation,
                sqdist_cutoff,
            } => {
                if r2 < sqdist_activation {
                    (force_divr, potential)
                } else if r2 < sqdist_cutoff {
                    let r_on = sqdist_activation.sqrt();
                    let r_c = sqdist_cutoff.sqrt();
                    let (s, ds_dr) = switching_polynomial(r, r_on, r_c);
                    // Product rule: F_switched/r = (s*F - U*ds/dr)/r
                    let u_switched = potential * s;
                    let f_switched_divr = (force_divr * r * s - potential * ds_dr) / r;
                    (f_switched_divr, u_switched)
                } else {
                    (0.0, 0.0)
                }
            }
        }
    }
}

/// Evaluate the standard cubic switching polynomial `s(r)` and its
/// derivative `ds/dr` on `[r_on, r_c]`. `s(r_on) = 1`, `s(r_c) = 0`, and
/// both endpoints have zero derivative, giving a smooth transition for
/// both force and potential.
fn switching_polynomial(r: f64, r_on: f64, r_c: f64) -> (f64, f64) {
    let t = (r - r_on) / (r_c - r_on);
    let t = t.clamp(0.0, 1.0);
    let s = 1.0 - t * t * t * (10.0 - 15.0 * t + 6.0 * t * t);
    let ds_dt = -(30.0 * t * t - 60.0 * t * t * t + 30.0 * t * t * t * t);
    let ds_dr = ds_dt / (r_c - r_on);
    (s, ds_dr)
}
