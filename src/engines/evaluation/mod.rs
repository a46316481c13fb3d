pub mod fitness;

pub use fitness::{FitnessFunction, PalindromeFitness};
