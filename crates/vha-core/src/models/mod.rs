//! Domain models for the village health assistant.

mod ambulance;
mod appointment;
mod operation;
mod order;
mod profile;

pub use ambulance::*;
pub use appointment::*;
pub use operation::*;
pub use order::*;
pub use profile::*;
