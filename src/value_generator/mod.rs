//! Deterministic value sequences, used to build structures of a known size
//! in benchmarks and tests
mod random;
mod sequential;

pub use random::*;
pub use sequential::*;
