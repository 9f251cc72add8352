//! Radar Overlay - minimap radar component for a 3D game
//!
//! Tracks registered world objects and projects each onto a 2D radar
//! panel relative to the player's position and heading. Rendering and
//! UI layout stay on the host side, behind the [`icons::IconHost`] seam.

pub mod core;
pub mod icons;
pub mod radar;
