//! Ledge Dash - a side-scrolling coin platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Keyboard/window boundary (winit events -> input snapshot)
//!
//! The simulation never touches winit or wgpu types; the shell in `main.rs`
//! feeds it held-key snapshots and draws whatever state comes back.

pub mod platform;
pub mod renderer;
pub mod sim;

/// Game configuration constants
///
/// All tuning is fixed at compile time; there are no flags or config files.
/// World coordinates are in pixels with y growing downward, and velocities
/// are in units per tick (the loop runs at a fixed 60 Hz).
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_TICKS_PER_FRAME: u32 = 4;

    /// Visible world area (the camera frames this much of the level)
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;

    /// Player body size and spawn point (top-left anchored)
    pub const PLAYER_SIZE: Vec2 = Vec2::new(30.0, 50.0);
    pub const SPAWN_POINT: Vec2 = Vec2::new(100.0, 300.0);

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.5;
    /// Upward velocity applied on jump
    pub const JUMP_STRENGTH: f32 = 12.0;
    /// Horizontal speed while a direction key is held
    pub const MOVE_SPEED: f32 = 5.0;
    /// Fallback ground: the player's top edge never passes below this
    pub const FLOOR_Y: f32 = 550.0;

    /// Landing band below a platform's top surface; the player snaps onto
    /// the platform only while its bottom edge is inside this band
    pub const LANDING_BAND: f32 = 20.0;

    /// Coin geometry and reward
    pub const COIN_RADIUS: f32 = 10.0;
    pub const COIN_VALUE: u32 = 10;

    /// Enemy body size and patrol speed
    pub const ENEMY_SIZE: Vec2 = Vec2::new(30.0, 30.0);
    pub const ENEMY_SPEED: f32 = 2.0;

    /// Camera look-ahead offset and horizontal scroll limits
    pub const CAMERA_LOOKAHEAD: f32 = 150.0;
    pub const CAMERA_MIN_X: f32 = 400.0;
    pub const CAMERA_MAX_X: f32 = 1000.0;
    /// Vertical camera center is fixed; the level never scrolls vertically
    pub const CAMERA_Y: f32 = 300.0;
}
