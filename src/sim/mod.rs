//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Stable iteration order (level construction order)
//! - No rendering or platform dependencies

pub mod bounds;
pub mod collision;
pub mod state;
pub mod tick;

pub use bounds::Aabb;
pub use collision::resolve_platform_landing;
pub use state::{Camera, Coin, Enemy, GameEvent, GamePhase, GameState, Platform, Player};
pub use tick::{TickInput, tick};
