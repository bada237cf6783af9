//! Demo binary: a 3D Lennard-Jones fluid equilibrated with velocity
//! Verlet under periodic boundaries, logging temperature and energy to
//! stdout and appending a trajectory to `trajout.pdb`.

extern crate mdforge;
extern crate rand;

use mdforge::atom::Atom;
use mdforge::boundaries::Pbc;
use mdforge::cutoff::Cutoff;
use mdforge::finder::{CellListNeighborFinder, ExclusionMatrix, NeighborFinder};
use mdforge::integrators::{simulate, VelocityVerlet};
use mdforge::loggers::{EnergyLogger, Logger, TemperatureLogger, TrajectoryLogger};
use mdforge::pairwise::PairwiseInteraction;
use mdforge::result::FriendlyResult;
use mdforge::specific::{HarmonicAngleList, HarmonicBondList, TorsionList};
use mdforge::system::{random_velocities, System};

use rand::SeedableRng;

fn main() {
    env_logger::init();

    let n_per_side = 8;
    let box_l = 3.0;
    let spacing = box_l / n_per_side as f64;

    let mut positions = Vec::new();
    for i in 0..n_per_side {
        for j in 0..n_per_side {
            for k in 0..n_per_side {
                positions.push([i as f64 * spacing, j as f64 * spacing, k as f64 * spacing]);
            }
        }
    }
    let n_atoms = positions.len();
    let atoms = vec![Atom::new(12.0, 0.0, 0.3, 0.5); n_atoms];
    let velocities = vec![[0.0, 0.0, 0.0]; n_atoms];
    let boundary = Pbc::cubic(box_l).unwrap_nicely();

    let r_cutoff = 1.0;
    let pairwise = vec![PairwiseInteraction::lennard_jones(Cutoff::shifted_force(r_cutoff))];

    let mut system = System::new(
        atoms,
        positions,
        velocities,
        boundary,
        pairwise,
        HarmonicBondList::new(Vec::new(), Vec::new(), n_atoms).unwrap_nicely(),
        HarmonicAngleList::new(Vec::new(), Vec::new(), n_atoms).unwrap_nicely(),
        TorsionList::new(Vec::new(), Vec::new(), n_atoms).unwrap_nicely(),
        TorsionList::new(Vec::new(), Vec::new(), n_atoms).unwrap_nicely(),
        ExclusionMatrix::new(),
    )
    .unwrap_nicely();

    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    random_velocities(&mut system, 300.0, &mut rng);

    let finder = CellListNeighborFinder::new(r_cutoff, 10);
    let mut integrator = VelocityVerlet;

    let mut temperature_logger = TemperatureLogger { period: 100 };
    let mut energy_logger = EnergyLogger { period: 100 };
    let mut trajectory_logger = TrajectoryLogger::open("trajout.pdb", 500).unwrap_nicely();

    println!("Equilibrating {} LJ atoms in a {:.1} nm cubic box...", n_atoms, box_l);

    simulate(&mut system, &mut integrator, &finder, 5_000, 0.002, |step, sys| {
        let due = [temperature_logger.period, energy_logger.period, trajectory_logger.period]
            .iter()
            .any(|&period| step % period == 0);
        if !due {
            return;
        }
        let neighbors = finder.build(&sys.positions, &sys.boundary, &sys.exclusions);
        if step % temperature_logger.period() == 0 {
            temperature_logger.log(step, sys, &neighbors).unwrap_nicely();
        }
        if step % energy_logger.period() == 0 {
            energy_logger.log(step, sys, &neighbors).unwrap_nicely();
        }
        if step % trajectory_logger.period() == 0 {
            trajectory_logger.log(step, sys, &neighbors).unwrap_nicely();
        }
    })
    .unwrap_nicely();

    println!("Done.");
}
