//! Game state and core simulation types
//!
//! The `GameState` aggregate exclusively owns every entity; interactions
//! between entities are computed centrally in [`super::tick`], never through
//! cross-references.

use glam::Vec2;

use super::bounds::Aabb;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; only the restart command is accepted
    GameOver,
}

/// Things that happened during a tick, drained by the shell for logging
/// and HUD updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CoinCollected,
    PlayerKilled,
    Restarted,
}

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner of the body
    pub pos: Vec2,
    pub vel: Vec2,
    /// Set by floor/platform contact, cleared by jumping
    pub grounded: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            grounded: false,
        }
    }

    /// Apply gravity, advance one Euler step, then clamp to the world floor.
    ///
    /// The floor acts as a fallback ground even where no platform sits
    /// underneath: crossing it resets the player onto it, zeroes vertical
    /// velocity and grounds the player.
    pub fn integrate(&mut self) {
        self.vel.y += GRAVITY;
        self.pos += self.vel;
        if self.pos.y > FLOOR_Y {
            self.pos.y = FLOOR_Y;
            self.vel.y = 0.0;
            self.grounded = true;
        }
    }

    /// Jump if grounded; no-op while airborne (no double jump)
    pub fn jump(&mut self) {
        if self.grounded {
            self.vel.y = -JUMP_STRENGTH;
            self.grounded = false;
        }
    }

    pub fn move_left(&mut self) {
        self.vel.x = -MOVE_SPEED;
    }

    pub fn move_right(&mut self) {
        self.vel.x = MOVE_SPEED;
    }

    pub fn stop_horizontal(&mut self) {
        self.vel.x = 0.0;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, PLAYER_SIZE)
    }
}

/// A static platform; immutable after construction
#[derive(Debug, Clone)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A collectible coin
#[derive(Debug, Clone)]
pub struct Coin {
    /// Top-left corner of the bounding square
    pub pos: Vec2,
    pub radius: f32,
    pub collected: bool,
}

impl Coin {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            radius: COIN_RADIUS,
            collected: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(self.radius * 2.0))
    }

    /// One-shot collect: returns true exactly once, on the first overlapping
    /// check. Collected coins report false forever after. This is the sole
    /// mutation path for a coin.
    pub fn try_collect(&mut self, player: &Aabb) -> bool {
        if !self.collected && self.bounds().intersects(player) {
            self.collected = true;
            return true;
        }
        false
    }
}

/// An enemy patrolling a fixed horizontal span
#[derive(Debug, Clone)]
pub struct Enemy {
    /// Top-left corner of the body
    pub pos: Vec2,
    pub speed: f32,
    pub start_x: f32,
    pub patrol_distance: f32,
    pub moving_right: bool,
}

impl Enemy {
    pub fn new(x: f32, y: f32, patrol_distance: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            speed: ENEMY_SPEED,
            start_x: x,
            patrol_distance,
            moving_right: true,
        }
    }

    /// One patrol step along x. A step past either bound clamps onto the
    /// bound and reverses direction, keeping `pos.x` inside
    /// `[start_x, start_x + patrol_distance]` at all times.
    pub fn advance(&mut self) {
        if self.moving_right {
            self.pos.x += self.speed;
            if self.pos.x > self.start_x + self.patrol_distance {
                self.pos.x = self.start_x + self.patrol_distance;
                self.moving_right = false;
            }
        } else {
            self.pos.x -= self.speed;
            if self.pos.x < self.start_x {
                self.pos.x = self.start_x;
                self.moving_right = true;
            }
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, ENEMY_SIZE)
    }

    /// Pure overlap test; re-triggers on every overlapping tick
    pub fn collides(&self, player: &Aabb) -> bool {
        self.bounds().intersects(player)
    }
}

/// Side-scrolling camera
#[derive(Debug, Clone)]
pub struct Camera {
    pub center: Vec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            center: Vec2::new(CAMERA_MIN_X, CAMERA_Y),
        }
    }
}

impl Camera {
    /// Look ahead of the player, clamped to the level's scroll range. The
    /// lower clamp keeps the camera still until the player has moved far
    /// enough right; the upper clamp stops scrolling at the level edge.
    pub fn follow(&mut self, player_pos: Vec2) {
        self.center.x = (player_pos.x + CAMERA_LOOKAHEAD).clamp(CAMERA_MIN_X, CAMERA_MAX_X);
        self.center.y = CAMERA_Y;
    }
}

/// Complete game state: the single owning aggregate for all entities
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u32,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    pub camera: Camera,
    /// Events since the shell last drained them
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build the level at its starting state
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Playing,
            score: 0,
            player: Player::new(SPAWN_POINT),
            platforms: level_platforms(),
            coins: level_coins(),
            enemies: level_enemies(),
            camera: Camera::default(),
            events: Vec::new(),
        }
    }

    /// Reset the run: fresh player at the spawn point, score zeroed, coins
    /// respawned, phase back to `Playing`. Enemies and platforms keep the
    /// state they had when the run ended.
    pub fn restart(&mut self) {
        self.player = Player::new(SPAWN_POINT);
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.coins = level_coins();
        self.events.push(GameEvent::Restarted);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Static platform layout; built once per session
fn level_platforms() -> Vec<Platform> {
    vec![
        Platform::new(0.0, 580.0, 800.0, 20.0),
        Platform::new(100.0, 450.0, 200.0, 20.0),
        Platform::new(400.0, 350.0, 150.0, 20.0),
        Platform::new(200.0, 250.0, 100.0, 20.0),
        Platform::new(500.0, 200.0, 200.0, 20.0),
    ]
}

/// Coin layout; rebuilt on every restart
fn level_coins() -> Vec<Coin> {
    vec![
        Coin::new(150.0, 400.0),
        Coin::new(450.0, 300.0),
        Coin::new(250.0, 200.0),
        Coin::new(550.0, 150.0),
        Coin::new(350.0, 100.0),
    ]
}

/// Enemy layout; built once per session
fn level_enemies() -> Vec<Enemy> {
    vec![
        Enemy::new(300.0, 530.0, 150.0),
        Enemy::new(500.0, 430.0, 100.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_tick_applies_gravity() {
        let mut player = Player::new(Vec2::new(100.0, 300.0));
        player.integrate();
        assert_eq!(player.vel.y, 0.5);
        assert_eq!(player.pos.y, 300.5);
        assert!(!player.grounded);
    }

    #[test]
    fn floor_clamp_resets_vertical_velocity() {
        let mut player = Player::new(Vec2::new(100.0, 549.8));
        player.vel.y = 30.0;
        player.integrate();
        assert_eq!(player.pos.y, FLOOR_Y);
        assert_eq!(player.vel.y, 0.0);
        assert!(player.grounded);
    }

    #[test]
    fn jump_requires_ground_contact() {
        let mut player = Player::new(Vec2::new(100.0, 300.0));
        player.jump();
        assert_eq!(player.vel.y, 0.0);

        player.grounded = true;
        player.jump();
        assert_eq!(player.vel.y, -JUMP_STRENGTH);
        assert!(!player.grounded);

        // Airborne now; a second jump is a no-op
        player.jump();
        assert_eq!(player.vel.y, -JUMP_STRENGTH);
    }

    #[test]
    fn horizontal_commands_set_velocity_directly() {
        let mut player = Player::new(SPAWN_POINT);
        player.move_left();
        assert_eq!(player.vel.x, -MOVE_SPEED);
        player.move_right();
        assert_eq!(player.vel.x, MOVE_SPEED);
        player.stop_horizontal();
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn enemy_reaches_far_bound_then_flips_next_tick() {
        let mut enemy = Enemy::new(300.0, 530.0, 150.0);
        for _ in 0..75 {
            enemy.advance();
        }
        assert_eq!(enemy.pos.x, 450.0);
        assert!(enemy.moving_right);

        // The overshooting step clamps to the bound and reverses
        enemy.advance();
        assert_eq!(enemy.pos.x, 450.0);
        assert!(!enemy.moving_right);
    }

    #[test]
    fn coin_collects_exactly_once() {
        let mut coin = Coin::new(150.0, 400.0);
        let player = Player::new(Vec2::new(145.0, 390.0));
        assert!(coin.try_collect(&player.bounds()));
        assert!(!coin.try_collect(&player.bounds()));
        assert!(coin.collected);
    }

    #[test]
    fn coin_out_of_reach_stays_uncollected() {
        let mut coin = Coin::new(150.0, 400.0);
        let player = Player::new(Vec2::new(600.0, 400.0));
        assert!(!coin.try_collect(&player.bounds()));
        assert!(!coin.collected);
    }

    #[test]
    fn camera_clamps_to_scroll_range() {
        let mut camera = Camera::default();

        camera.follow(Vec2::new(0.0, 300.0));
        assert_eq!(camera.center.x, CAMERA_MIN_X);

        camera.follow(Vec2::new(500.0, 300.0));
        assert_eq!(camera.center.x, 650.0);

        camera.follow(Vec2::new(2000.0, 300.0));
        assert_eq!(camera.center.x, CAMERA_MAX_X);
        assert_eq!(camera.center.y, CAMERA_Y);
    }

    #[test]
    fn restart_preserves_enemies_and_platforms() {
        let mut state = GameState::new();
        state.score = 30;
        state.phase = GamePhase::GameOver;
        state.coins[0].collected = true;
        for _ in 0..10 {
            state.enemies[0].advance();
        }
        let enemy_x = state.enemies[0].pos.x;

        state.restart();
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.pos, SPAWN_POINT);
        assert!(state.coins.iter().all(|c| !c.collected));
        assert_eq!(state.enemies[0].pos.x, enemy_x);
        assert_eq!(state.platforms.len(), 5);
        assert_eq!(state.events.last(), Some(&GameEvent::Restarted));
    }

    proptest! {
        /// Gravity never decreases vertical speed while airborne
        #[test]
        fn gravity_is_monotone_while_airborne(
            vy in -100.0f32..100.0,
            y in -500.0f32..500.0,
        ) {
            let mut player = Player::new(Vec2::new(100.0, y));
            player.vel.y = vy;
            let before = player.vel.y;
            player.integrate();
            prop_assert!(player.vel.y >= before || player.pos.y == FLOOR_Y);
        }

        /// Patrol stays inside its span no matter the speed or duration
        #[test]
        fn patrol_never_leaves_its_span(
            speed in 0.5f32..50.0,
            patrol in 1.0f32..500.0,
            ticks in 1usize..1000,
        ) {
            let mut enemy = Enemy::new(300.0, 530.0, patrol);
            enemy.speed = speed;
            for _ in 0..ticks {
                enemy.advance();
                prop_assert!(enemy.pos.x >= enemy.start_x);
                prop_assert!(enemy.pos.x <= enemy.start_x + patrol);
            }
        }

        /// Camera center is the clamped look-ahead of the player position
        #[test]
        fn camera_follow_matches_clamped_lookahead(x in -2000.0f32..4000.0) {
            let mut camera = Camera::default();
            camera.follow(Vec2::new(x, 0.0));
            let expected = (x + CAMERA_LOOKAHEAD).clamp(CAMERA_MIN_X, CAMERA_MAX_X);
            prop_assert_eq!(camera.center.x, expected);
        }
    }
}
