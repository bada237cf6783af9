/// Error type enum for this crate
#[derive(Debug)]
pub enum Error {
    /// Error variant when the minimum image convention is not
    /// justified for a combination of box size and cutoff.
    ///
    /// If the cutoff for an interaction is larger than half the smallest
    /// dimension of the box, a pair of atoms could legitimately interact
    /// with more than one periodic image of its partner, which the
    /// single-image minimum-image scan cannot represent.
    MinimumImageConventionNotJustified,

    /// Error variant when attempting to create an illegal topology.
    IllegalTopology,

    /// Error variant when a potential is computed on an incompatible
    /// neighbourlist
    NeighbourlistNotCompatible,

    /// Error variant when a cutoff is required but not present
    CutoffRequired,

    /// Error variant when a topology doesn't match positions passed
    /// to it for force or potential calculations
    PositionTopologyMismatch,

    /// Error variant for illegal combinations of function arguments.
    ValueError(&'static str),

    /// A `System` was constructed with mismatched lengths among atoms,
    /// positions, velocities or per-axis box extents.
    LengthMismatch(&'static str),

    /// A box extent was zero or negative.
    NonPositiveBoxExtent,

    /// An interaction's force or energy unit tag didn't match the
    /// system it was being attached to.
    UnitMismatch,

    /// A specific-interaction list, neighbour list or pairwise interaction
    /// referenced an atom index outside `0..num_atoms`.
    AtomIndexOutOfRange(usize),

    /// A non-finite (NaN or infinite) force component was produced during
    /// a simulation step.
    NonFiniteForce,

    /// A logger sink failed to open or write.
    LoggerIoError(std::io::Error),
}

impl Error {
    /// Convert an error variant to its own name
    ///
    /// Used to point users to documentation
    fn get_variant_str(&self) -> &'static str{
        match self {
            MinimumImageConventionNotJustified => "MinimumImageConventionNotJustified",
            ValueError(_) => "ValueError",
            IllegalTopology => "IllegalTopology",
            CutoffRequired => "CutoffRequired",
            NeighbourlistNotCompatible => "NeighbourlistNotCompatible",
            PositionTopologyMismatch => "PositionTopologyMismatch",
            LengthMismatch(_) => "LengthMismatch",
            NonPositiveBoxExtent => "NonPositiveBoxExtent",
            UnitMismatch => "UnitMismatch",
            AtomIndexOutOfRange(_) => "AtomIndexOutOfRange",
            NonFiniteForce => "NonFiniteForce",
            LoggerIoError(_) => "LoggerIoError",
        }
    }

    /// Get a brief description for an error
    fn get_description_str(&self) -> String {
        match self {
            MinimumImageConventionNotJustified => concat!(
                "Minimum image convention not justified. ",
                "Make the cutoff smaller or the box bigger."
            ).to_string(),
            IllegalTopology => "Atom mismatch in proposed topology".to_string(),
            CutoffRequired => "Cutoff required but not found".to_string(),
            NeighbourlistNotCompatible => concat!(
                "Potential was incompatible with a neighbourlist"
            ).to_string(),
            PositionTopologyMismatch => concat!(
                "Number of atom positions does not match number of ",
                "atoms in topology"
            ).to_string(),
            ValueError(s) => format!(
                "Illegal combination of arguments: {}",
                s
            ),
            LengthMismatch(what) => format!(
                "Length mismatch while constructing a system: {}",
                what
            ),
            NonPositiveBoxExtent => "Box extent must be strictly positive on every axis".to_string(),
            UnitMismatch => "Interaction force/energy units did not match the system's units".to_string(),
            AtomIndexOutOfRange(i) => format!(
                "Atom index {} is out of range for this system",
                i
            ),
            NonFiniteForce => "A non-finite force component was produced during a step".to_string(),
            LoggerIoError(e) => format!("Logger sink I/O error: {}", e),
        }
    }

    pub fn explain(self) {
        let variant = self.get_variant_str();
        let description = self.get_description_str();

        let url = match std::env::current_exe() {
            Ok(mut path) => {
                path.pop();
                path.pop();
                path.push("doc");
                format!("file://{}", path.display())
            },
            Err(_) => format!("https://docs.rs/mdforge/{}", crate::VERSION)
        };

        let url = format!(
            "{}/mdforge/result/enum.Error.html#variant.{}",
            url,
            variant
        );

        println!("{}", description);
        println!("For more information, see {}", url);
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_description_str())
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        LoggerIoError(e)
    }
}

pub use Error::*;

/// Result type for this module
pub type Result<T> = std::result::Result<T, Error>;

pub trait FriendlyResult {
    type Value;

    fn unwrap_nicely(self) -> Self::Value;
}

impl<T> FriendlyResult for Result<T> {
    type Value = T;
    fn unwrap_nicely(self) -> Self::Value {
        match self {
            Ok(v) => v,
            Err(e) => {
                println!("-----------------------");
                e.explain();
                println!("-----------------------");
                panic!();
            }
        }
    }
}
