pub mod action;
pub mod config;
pub mod error;
pub mod hunter;
pub mod input;
pub mod simulation;
pub mod strategy;
pub mod threat;
pub mod vec2;
pub mod world;

pub use action::*;
pub use config::*;
pub use error::*;
pub use hunter::*;
pub use input::*;
pub use simulation::*;
pub use strategy::*;
pub use threat::*;
pub use vec2::*;
pub use world::*;
