//! Step definitions for connector catalog filtering scenarios.

pub mod world;

mod given;
mod then;
mod when;
