//! The EPA penetration-depth algorithm.

pub use self::epa::Epa;

mod epa;
