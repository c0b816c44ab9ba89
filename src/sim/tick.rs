//! Fixed timestep simulation tick
//!
//! Core loop that advances the game deterministically. One call is one
//! tick; all velocities in [`crate::consts`] are expressed per tick.

use super::collision::resolve_platform_landing;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::COIN_VALUE;

/// Held-key snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub restart: bool,
}

/// Advance the game state by one fixed timestep.
///
/// Order within a tick: input application, physics integration, collision
/// resolution (platforms, then coins, then enemies), camera follow. While
/// the game is over everything is suspended except the restart command.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.restart();
        }
        return;
    }

    // Exactly one horizontal command per tick; left wins if both are held
    if input.left {
        state.player.move_left();
    } else if input.right {
        state.player.move_right();
    } else {
        state.player.stop_horizontal();
    }
    if input.jump {
        state.player.jump();
    }

    state.player.integrate();
    for enemy in &mut state.enemies {
        enemy.advance();
    }

    resolve_platform_landing(&mut state.player, &state.platforms);

    // Coin and enemy checks use the post-snap bounds
    let player_bounds = state.player.bounds();
    for coin in &mut state.coins {
        if coin.try_collect(&player_bounds) {
            state.score += COIN_VALUE;
            state.events.push(GameEvent::CoinCollected);
        }
    }

    // Lethal contact: the flag is idempotent, so overlapping several
    // enemies in one tick still ends the run exactly once
    if state.enemies.iter().any(|e| e.collides(&player_bounds)) {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::PlayerKilled);
    }

    state.camera.follow(state.player.pos);
}
