//! Collision resolution between the player and level geometry
//!
//! Platform contact is top-surface only: the player lands on a platform
//! when falling onto its upper edge, and is never blocked by the sides or
//! the underside. Coins and enemies are plain overlap checks and live on
//! their own types; this module owns the one resolution that moves the
//! player.

use super::state::{Platform, Player};
use crate::consts::LANDING_BAND;

/// Snap the player onto any platform it is landing on.
///
/// For each platform whose bounds intersect the player's, if the player's
/// bottom edge lies within `[top, top + LANDING_BAND)` the player's bottom
/// is placed exactly on the platform top, vertical velocity is zeroed and
/// the player becomes grounded. A deeper overlap means the player came from
/// the side or below and passes through untouched.
pub fn resolve_platform_landing(player: &mut Player, platforms: &[Platform]) {
    for platform in platforms {
        let player_bounds = player.bounds();
        let platform_bounds = platform.bounds();
        if !player_bounds.intersects(&platform_bounds) {
            continue;
        }

        let player_bottom = player_bounds.bottom();
        let platform_top = platform_bounds.pos.y;
        if player_bottom >= platform_top && player_bottom < platform_top + LANDING_BAND {
            player.pos.y = platform_top - player_bounds.size.y;
            player.vel.y = 0.0;
            player.grounded = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn falling_onto_platform_top_snaps_and_grounds() {
        // Platform top at y=450; player bottom just inside the landing band
        let platforms = vec![Platform::new(100.0, 450.0, 200.0, 20.0)];
        let mut player = Player::new(Vec2::new(150.0, 405.0));
        player.vel.y = 6.0;

        resolve_platform_landing(&mut player, &platforms);
        assert_eq!(player.bounds().bottom(), 450.0);
        assert_eq!(player.pos.y, 400.0);
        assert_eq!(player.vel.y, 0.0);
        assert!(player.grounded);
    }

    #[test]
    fn bottom_of_landing_band_is_exclusive() {
        let platforms = vec![Platform::new(100.0, 450.0, 200.0, 20.0)];
        // Bottom edge at 470 = top + LANDING_BAND; too deep to land
        let mut player = Player::new(Vec2::new(150.0, 420.0));
        player.vel.y = 9.0;

        resolve_platform_landing(&mut player, &platforms);
        assert_eq!(player.pos.y, 420.0);
        assert_eq!(player.vel.y, 9.0);
        assert!(!player.grounded);
    }

    #[test]
    fn side_overlap_does_not_block() {
        let platforms = vec![Platform::new(100.0, 450.0, 200.0, 20.0)];
        // Player straddles the platform's left edge, bottom well below the
        // landing band
        let mut player = Player::new(Vec2::new(80.0, 430.0));
        player.vel.x = 5.0;
        player.vel.y = 3.0;

        resolve_platform_landing(&mut player, &platforms);
        assert_eq!(player.pos, Vec2::new(80.0, 430.0));
        assert_eq!(player.vel.x, 5.0);
        assert!(!player.grounded);
    }

    #[test]
    fn approach_from_below_passes_through() {
        let platforms = vec![Platform::new(100.0, 450.0, 200.0, 20.0)];
        // Jumping up through the platform: head inside it, bottom far below
        let mut player = Player::new(Vec2::new(150.0, 460.0));
        player.vel.y = -12.0;

        resolve_platform_landing(&mut player, &platforms);
        assert_eq!(player.pos.y, 460.0);
        assert_eq!(player.vel.y, -12.0);
        assert!(!player.grounded);
    }

    #[test]
    fn no_snap_without_overlap() {
        let platforms = vec![Platform::new(100.0, 450.0, 200.0, 20.0)];
        let mut player = Player::new(Vec2::new(600.0, 300.0));

        resolve_platform_landing(&mut player, &platforms);
        assert_eq!(player.pos, Vec2::new(600.0, 300.0));
        assert!(!player.grounded);
    }
}
