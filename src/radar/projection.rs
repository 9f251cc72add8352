//! Panel projection math
//!
//! Converts a tracked object's world position into a rotated, scaled
//! offset on the 2D radar panel. Pure functions with no registry state,
//! so the transform is testable on its own.
//!
//! Panel axes after projection: a contact dead ahead of the player
//! plots toward +y (panel top), a contact to the player's right plots
//! toward +x (panel right).

use glam::{Vec2, Vec3};

use crate::core::config::RadarConfig;
use crate::core::types::PlayerPose;

/// Axis-alignment correction, in degrees, so that a contact dead ahead
/// plots toward the panel's top.
const PANEL_UP_CORRECTION: f32 = 270.0;

/// Bearing of `target` in the player's heading frame, in degrees
pub fn bearing_degrees(player: &PlayerPose, target: Vec3) -> f32 {
    let d = target - player.position;
    d.x.atan2(d.z).to_degrees() - PANEL_UP_CORRECTION - player.yaw_degrees
}

/// Rotated, scaled offset of `target` from the panel pivot
///
/// The radius uses the full 3D distance, so a height difference between
/// player and target widens the projected ring.
pub fn panel_offset(player: &PlayerPose, target: Vec3, map_scale: f32) -> Vec2 {
    let r = player.position.distance(target) * map_scale;
    let theta = bearing_degrees(player, target).to_radians();
    Vec2::new(-r * theta.cos(), r * theta.sin())
}

/// Final panel-space position for an icon tracking `target`
pub fn project_onto_panel(player: &PlayerPose, target: Vec3, config: &RadarConfig) -> Vec3 {
    let offset = panel_offset(player, target, config.map_scale);
    Vec3::new(offset.x + config.pivot.x, offset.y + config.pivot.y, 0.0) + config.panel_position
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn assert_vec2_near(actual: Vec2, expected: Vec2) {
        assert!(
            (actual - expected).length() < EPSILON,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_forward_contact_plots_straight_up() {
        let player = PlayerPose::new(Vec3::ZERO, 0.0);
        let offset = panel_offset(&player, Vec3::new(0.0, 0.0, 10.0), 2.0);
        // Regression value for the stated formula: (0.0, 20.0)
        assert_vec2_near(offset, Vec2::new(0.0, 20.0));
    }

    #[test]
    fn test_cardinal_contacts_at_zero_yaw() {
        let player = PlayerPose::new(Vec3::ZERO, 0.0);
        // Right of the player -> panel right
        assert_vec2_near(
            panel_offset(&player, Vec3::new(10.0, 0.0, 0.0), 2.0),
            Vec2::new(20.0, 0.0),
        );
        // Behind the player -> panel bottom
        assert_vec2_near(
            panel_offset(&player, Vec3::new(0.0, 0.0, -10.0), 2.0),
            Vec2::new(0.0, -20.0),
        );
        // Left of the player -> panel left
        assert_vec2_near(
            panel_offset(&player, Vec3::new(-10.0, 0.0, 0.0), 2.0),
            Vec2::new(-20.0, 0.0),
        );
    }

    #[test]
    fn test_dead_ahead_plots_up_for_any_yaw() {
        for yaw in [0.0f32, 45.0, 90.0, 180.0, 270.0, -30.0] {
            let player = PlayerPose::new(Vec3::ZERO, yaw);
            let forward = Vec3::new(
                yaw.to_radians().sin() * 10.0,
                0.0,
                yaw.to_radians().cos() * 10.0,
            );
            let offset = panel_offset(&player, forward, 1.0);
            assert!(
                (offset - Vec2::new(0.0, 10.0)).length() < EPSILON,
                "yaw {yaw}: got {offset:?}"
            );
        }
    }

    #[test]
    fn test_coincident_contact_projects_to_pivot() {
        let player = PlayerPose::new(Vec3::new(5.0, 1.0, -3.0), 123.0);
        let offset = panel_offset(&player, player.position, 2.0);
        assert_vec2_near(offset, Vec2::ZERO);
    }

    #[test]
    fn test_height_difference_widens_radius() {
        let player = PlayerPose::new(Vec3::ZERO, 0.0);
        // 3-4-5 triangle: planar distance 4, height 3, full distance 5
        let offset = panel_offset(&player, Vec3::new(0.0, 3.0, 4.0), 2.0);
        assert!((offset.length() - 10.0).abs() < EPSILON);
        assert_vec2_near(offset, Vec2::new(0.0, 10.0));
    }

    #[test]
    fn test_bearing_is_relative_to_heading() {
        let player_facing_north = PlayerPose::new(Vec3::ZERO, 0.0);
        let player_facing_east = PlayerPose::new(Vec3::ZERO, 90.0);
        let target = Vec3::new(10.0, 0.0, 0.0);

        let north = bearing_degrees(&player_facing_north, target);
        let east = bearing_degrees(&player_facing_east, target);
        assert!((north - east - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_project_applies_pivot_and_panel_position() {
        let config = RadarConfig {
            map_scale: 2.0,
            pivot: Vec2::new(64.0, 64.0),
            panel_position: Vec3::new(640.0, 360.0, 0.0),
        };
        let player = PlayerPose::new(Vec3::ZERO, 0.0);
        let position = project_onto_panel(&player, Vec3::new(0.0, 0.0, 10.0), &config);

        assert!((position.x - (0.0 + 64.0 + 640.0)).abs() < EPSILON);
        assert!((position.y - (20.0 + 64.0 + 360.0)).abs() < EPSILON);
        assert_eq!(position.z, 0.0);
    }
}
