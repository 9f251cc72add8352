//! Core type definitions used throughout the crate

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Caller-supplied identifier for a tracked world entity
///
/// The radar never interprets this beyond equality; it is whatever
/// handle the host game uses to name the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackedId(pub u32);

impl TrackedId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Player world pose sampled once per frame
#[derive(Debug, Clone, Copy)]
pub struct PlayerPose {
    /// World position
    pub position: Vec3,
    /// Rotation about the world up axis, in degrees
    pub yaw_degrees: f32,
}

impl PlayerPose {
    pub fn new(position: Vec3, yaw_degrees: f32) -> Self {
        Self {
            position,
            yaw_degrees,
        }
    }
}
