//! Simulation loggers.
//!
//! A [`Logger`] observes a [`System`] once per call and is responsible for
//! its own period gating; [`simulate`](crate::integrators::simulate)'s
//! caller decides which loggers to call from its `on_step` closure. The
//! built-ins here cover the ambient reporting every run wants (structured
//! `log` records for temperature and energies) plus a [`TrajectoryLogger`]
//! that appends PDB frames through `chemfiles`, the same library the rest
//! of the crate uses for file I/O.

use crate::boundaries::BoundaryConditions;
use crate::finder::NeighborList;
use crate::pipeline;
use crate::result::{Error, Result};
use crate::system::System;
use chemfiles::{Atom as ChemfilesAtom, Frame, Trajectory, UnitCell};
use std::path::Path;

/// Something that observes a system every `period` steps of a simulation.
pub trait Logger<const D: usize, B: BoundaryConditions<D>> {
    /// How often, in steps, this logger wants to be called.
    fn period(&self) -> usize;

    /// Record `system` at `step`. Only called when `step % period() == 0`
    /// (`0 < period()`), left to whatever drives the simulation loop.
    fn log(&mut self, step: usize, system: &System<D, B>, neighbors: &NeighborList) -> Result<()>;
}

/// Emits `log::info!` records of the instantaneous temperature.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureLogger {
    pub period: usize,
}

impl<const D: usize, B: BoundaryConditions<D>> Logger<D, B> for TemperatureLogger {
    fn period(&self) -> usize {
        self.period
    }

    fn log(&mut self, step: usize, system: &System<D, B>, _neighbors: &NeighborList) -> Result<()> {
        log::info!("step {}: temperature = {:.2} K", step, pipeline::temperature(system));
        Ok(())
    }
}

/// Emits `log::info!` records of potential, kinetic and total energy.
#[derive(Debug, Clone, Copy)]
pub struct EnergyLogger {
    pub period: usize,
}

impl<const D: usize, B: BoundaryConditions<D> + Sync> Logger<D, B> for EnergyLogger {
    fn period(&self) -> usize {
        self.period
    }

    fn log(&mut self, step: usize, system: &System<D, B>, neighbors: &NeighborList) -> Result<()> {
        let potential = pipeline::potential_energy(system, neighbors);
        let kinetic = pipeline::kinetic_energy(system);
        log::info!(
            "step {}: potential = {:.4} kJ/mol, kinetic = {:.4} kJ/mol, total = {:.4} kJ/mol",
            step,
            potential,
            kinetic,
            potential + kinetic
        );
        Ok(())
    }
}

/// Accumulates a copy of every atom's position at each logged step, for
/// callers that want the raw trajectory in memory rather than on disk.
#[derive(Debug, Clone, Default)]
pub struct CoordinateLogger<const D: usize> {
    pub period: usize,
    pub frames: Vec<Vec<[f64; D]>>,
}

impl<const D: usize> CoordinateLogger<D> {
    pub fn new(period: usize) -> Self {
        CoordinateLogger { period, frames: Vec::new() }
    }
}

impl<const D: usize, B: BoundaryConditions<D>> Logger<D, B> for CoordinateLogger<D> {
    fn period(&self) -> usize {
        self.period
    }

    fn log(&mut self, _step: usize, system: &System<D, B>, _neighbors: &NeighborList) -> Result<()> {
        self.frames.push(system.positions.clone());
        Ok(())
    }
}

/// Accumulates a copy of every atom's velocity at each logged step.
#[derive(Debug, Clone, Default)]
pub struct VelocityLogger<const D: usize> {
    pub period: usize,
    pub frames: Vec<Vec<[f64; D]>>,
}

impl<const D: usize> VelocityLogger<D> {
    pub fn new(period: usize) -> Self {
        VelocityLogger { period, frames: Vec::new() }
    }
}

impl<const D: usize, B: BoundaryConditions<D>> Logger<D, B> for VelocityLogger<D> {
    fn period(&self) -> usize {
        self.period
    }

    fn log(&mut self, _step: usize, system: &System<D, B>, _neighbors: &NeighborList) -> Result<()> {
        self.frames.push(system.velocities.clone());
        Ok(())
    }
}

/// Appends a frame to a trajectory file (PDB by default, or any format
/// `chemfiles` infers from the extension) every `period` steps. Positions
/// are in nanometres internally and converted to Angstrom, `chemfiles`'
/// native length unit, on write. 2D systems are written with `z = 0`.
pub struct TrajectoryLogger {
    pub period: usize,
    trajectory: Trajectory,
}

const NM_TO_ANGSTROM: f64 = 10.0;

impl TrajectoryLogger {
    /// Opens `path` for appending (creating it if absent). `period` must
    /// be strictly positive.
    pub fn open<P: AsRef<Path>>(path: P, period: usize) -> Result<Self> {
        let trajectory = Trajectory::open(path, 'a').map_err(|_| {
            log::warn!("could not open trajectory sink");
            Error::LoggerIoError(std::io::Error::new(std::io::ErrorKind::Other, "could not open trajectory file"))
        })?;
        Ok(TrajectoryLogger { period, trajectory })
    }
}

impl<const D: usize, B: BoundaryConditions<D>> Logger<D, B> for TrajectoryLogger {
    fn period(&self) -> usize {
        self.period
    }

    fn log(&mut self, _step: usize, system: &System<D, B>, _neighbors: &NeighborList) -> Result<()> {
        let mut frame = Frame::new();

        for position in &system.positions {
            let mut xyz = [0.0; 3];
            for k in 0..D.min(3) {
                xyz[k] = position[k] * NM_TO_ANGSTROM;
            }
            let atom = ChemfilesAtom::new("X");
            frame.add_atom(&atom, xyz, None);
        }

        if let Some(box_size) = system.boundary.box_size() {
            let mut sides = [0.0; 3];
            for k in 0..D.min(3) {
                sides[k] = box_size[k] * NM_TO_ANGSTROM;
            }
            frame.set_cell(&UnitCell::new(sides));
        }

        self.trajectory.write(&frame).map_err(|_| {
            log::warn!("could not write trajectory frame");
            Error::LoggerIoError(std::io::Error::new(std::io::ErrorKind::Other, "could not write trajectory frame"))
        })
    }
}
