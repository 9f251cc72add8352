//! Radar registry and per-frame update
//!
//! [`Radar`] owns the tracked-object list and the icon host. Game code
//! registers an owner together with an icon template, and the owning
//! loop calls [`Radar::update`] once per rendered frame to reposition
//! every icon on the panel.

pub mod projection;

use ahash::AHashMap;
use glam::Vec3;
use tracing::{debug, trace};

use crate::core::config::RadarConfig;
use crate::core::types::{PlayerPose, TrackedId};
use crate::icons::{IconHost, IconId, IconTemplate};

/// Resolves tracked ids to world positions each frame
pub trait PositionSource {
    /// World position of `id`, or `None` once the entity is gone
    fn position_of(&self, id: TrackedId) -> Option<Vec3>;
}

impl PositionSource for AHashMap<TrackedId, Vec3> {
    fn position_of(&self, id: TrackedId) -> Option<Vec3> {
        self.get(&id).copied()
    }
}

/// One tracked object: the owning entity and its live icon
#[derive(Debug, Clone, Copy)]
pub struct RadarEntry {
    pub owner: TrackedId,
    pub icon: IconId,
}

/// Minimap radar: projects tracked world objects onto a 2D panel
pub struct Radar<H: IconHost> {
    config: RadarConfig,
    icons: H,
    entries: Vec<RadarEntry>,
}

impl<H: IconHost> Radar<H> {
    /// Create a radar with default configuration
    pub fn new(icons: H) -> Self {
        Self::with_config(icons, RadarConfig::default())
    }

    pub fn with_config(icons: H, config: RadarConfig) -> Self {
        Self {
            config,
            icons,
            entries: Vec::new(),
        }
    }

    /// Track `owner`, cloning `template` into a fresh icon
    ///
    /// Duplicate registrations are accepted: each call adds its own
    /// entry with its own icon, and all of them are dropped together by
    /// [`remove`](Self::remove).
    pub fn register(&mut self, owner: TrackedId, template: &IconTemplate) -> IconId {
        let icon = self.icons.instantiate(template);
        self.entries.push(RadarEntry { owner, icon });
        debug!("registered radar object {} ({} tracked)", owner.0, self.entries.len());
        icon
    }

    /// Stop tracking `owner`, releasing every matching entry's icon
    ///
    /// Keeps non-matching entries in registration order. Removing an
    /// owner that was never registered is a no-op.
    pub fn remove(&mut self, owner: TrackedId) {
        let icons = &mut self.icons;
        let before = self.entries.len();
        self.entries.retain(|entry| {
            if entry.owner == owner {
                icons.release(entry.icon);
                false
            } else {
                true
            }
        });
        if self.entries.len() != before {
            debug!("removed radar object {} ({} tracked)", owner.0, self.entries.len());
        }
    }

    /// Release every icon and forget all tracked objects
    pub fn clear(&mut self) {
        for entry in self.entries.drain(..) {
            self.icons.release(entry.icon);
        }
    }

    /// Project every tracked object onto the panel
    ///
    /// Call once per rendered frame. With no player pose the update is
    /// skipped entirely and icons keep their last written positions.
    /// An owner the source no longer resolves leaves its icon untouched
    /// for the frame; stale entries stay registered until removed.
    pub fn update(&mut self, player: Option<&PlayerPose>, world: &impl PositionSource) {
        let player = match player {
            Some(pose) => pose,
            None => {
                trace!("player pose unset, radar update skipped");
                return;
            }
        };

        for entry in &self.entries {
            let target = match world.position_of(entry.owner) {
                Some(position) => position,
                None => continue,
            };
            let position = projection::project_onto_panel(player, target, &self.config);
            self.icons.attach(entry.icon);
            self.icons.place(entry.icon, position);
        }
    }

    /// Number of tracked objects (duplicates counted)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tracked entries in registration order
    pub fn entries(&self) -> &[RadarEntry] {
        &self.entries
    }

    pub fn icons(&self) -> &H {
        &self.icons
    }

    pub fn icons_mut(&mut self) -> &mut H {
        &mut self.icons
    }

    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RadarConfig {
        &mut self.config
    }
}
