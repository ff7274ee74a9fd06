//! Configuration management for the simulation runner

pub mod settings;

pub use settings::{
    AutoplayConfig, CliOverrides, OutputConfig, OutputFormat, SeedConfig, Settings,
    SimulationConfig, Speed,
};
