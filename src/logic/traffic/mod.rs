//! Traffic Module - Synthetic Packet Generation
//!
//! - `packet.rs`: the immutable `Packet` record
//! - `generator.rs`: RNG-driven generator and the canned attack scenario

pub mod generator;
pub mod packet;


pub use generator::{Scenario, TrafficGenerator};
pub use packet::Packet;
