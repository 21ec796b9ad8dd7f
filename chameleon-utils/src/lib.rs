//! Utility library for the Chameleon testbed analysis scripts

pub mod measurement;
pub mod path;
