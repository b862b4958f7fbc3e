//! Single-screen invaders simulation.
//!
//! The library owns the game rules only: entity data, collision, wave
//! generation, the per-tick engine and the input controller. Drawing and
//! terminal handling live in the binary.

pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod input;
pub mod wave;

pub use compute::Game;
pub use config::GameConfig;
pub use entities::{Alien, AlienSprite, Bounds, GameStatus, Projectile, Ship, World};
pub use error::{ConfigError, Error};
pub use input::Input;
