//! A molecular dynamics simulation engine: pairwise and specific
//! interactions, neighbour finders, symplectic/stochastic integrators and
//! thermostats, composed over a periodic or unbounded [`system::System`].
//!
//! The crate version, used by [`result::Error::explain`] to build a
//! documentation link.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
extern crate uom;

extern crate rand;
extern crate rand_distr;
extern crate chemfiles;
extern crate rayon;
extern crate log;

pub mod analysis;
pub mod atom;
pub mod boundaries;
pub mod cutoff;
pub mod finder;
pub mod integrators;
pub mod io;
pub mod loggers;
pub mod pairwise;
pub mod pipeline;
pub mod result;
pub mod specific;
pub mod system;
pub mod units;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
