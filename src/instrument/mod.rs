//! Instrument data structures and CSV loading

mod data;
pub mod loader;

pub use data::{InstrumentParameters, InstrumentRecord};
pub use loader::{load_instruments, load_instruments_from_reader};
