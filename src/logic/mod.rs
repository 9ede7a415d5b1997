//! Logic Module - Detection Engines
//!
//! Contains the detection pipeline: traffic generation, entropy analysis,
//! baseline calibration, windowed detection, scoring, and the session
//! driver that wires them together.

// Core modules
pub mod baseline;
pub mod config;
pub mod detector;
pub mod entropy;
pub mod scorer;
pub mod session;
pub mod traffic;
pub mod window;

// Boundaries (storage + import/export)
pub mod dataset;
pub mod history;
