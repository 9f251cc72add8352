//! Icon handles and the UI-layer seam
//!
//! The radar never draws anything itself. It acquires icon instances
//! from an [`IconHost`] at registration, keeps the handles alive while
//! the owner is tracked, and releases them on removal.

use glam::Vec3;
use serde::{Deserialize, Serialize};

pub mod panel;

pub use panel::IconPanel;

/// Handle to one live icon instance inside an icon host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconId(pub u32);

/// Description of an icon visual
///
/// Cloned into a live instance each time an owner is registered, so
/// one template can back any number of icons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconTemplate {
    /// Sprite key into the UI layer's atlas
    pub sprite: String,
    /// Icon size in panel units
    pub size: f32,
    /// Color tint as RGBA8
    pub tint: [u8; 4],
}

impl IconTemplate {
    /// Create a template for the named sprite with default size and tint
    pub fn new(sprite: impl Into<String>) -> Self {
        Self {
            sprite: sprite.into(),
            size: 8.0,
            tint: [255, 255, 255, 255],
        }
    }
}

/// UI layer providing icon instances for the radar panel
///
/// Handles passed to `release`, `attach`, and `place` that are no
/// longer alive must be ignored. `attach` is idempotent; the radar
/// re-attaches every icon each frame.
pub trait IconHost {
    /// Clone the template into a new live icon and return its handle
    fn instantiate(&mut self, template: &IconTemplate) -> IconId;

    /// Destroy a live icon
    fn release(&mut self, icon: IconId);

    /// Parent the icon to the radar panel surface
    fn attach(&mut self, icon: IconId);

    /// Write the icon's panel-space position
    fn place(&mut self, icon: IconId, position: Vec3);
}
