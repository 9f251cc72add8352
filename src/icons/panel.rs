//! In-memory icon panel
//!
//! A minimal [`IconHost`] that keeps live icons in a slot map. Stands
//! in for a real UI layer in tests, demos, and headless runs; a
//! renderer-backed host implements the same trait against its own
//! widget tree.

use ahash::AHashMap;
use glam::Vec3;

use super::{IconHost, IconId, IconTemplate};

/// One live icon on the panel
#[derive(Debug, Clone)]
pub struct IconSlot {
    /// Template the icon was cloned from
    pub template: IconTemplate,
    /// Last written panel-space position
    pub position: Vec3,
    /// Whether the icon has been parented to the panel
    pub attached: bool,
}

/// In-memory icon host backing the radar panel
#[derive(Debug, Default)]
pub struct IconPanel {
    slots: AHashMap<IconId, IconSlot>,
    next_id: u32,
}

impl IconPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live icons
    pub fn icon_count(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, icon: IconId) -> Option<&IconSlot> {
        self.slots.get(&icon)
    }

    /// Last written position, if the icon is alive
    pub fn position_of(&self, icon: IconId) -> Option<Vec3> {
        self.slots.get(&icon).map(|slot| slot.position)
    }

    pub fn is_attached(&self, icon: IconId) -> bool {
        self.slots.get(&icon).map(|slot| slot.attached).unwrap_or(false)
    }
}

impl IconHost for IconPanel {
    fn instantiate(&mut self, template: &IconTemplate) -> IconId {
        let id = IconId(self.next_id);
        self.next_id += 1;
        self.slots.insert(
            id,
            IconSlot {
                template: template.clone(),
                position: Vec3::ZERO,
                attached: false,
            },
        );
        id
    }

    fn release(&mut self, icon: IconId) {
        self.slots.remove(&icon);
    }

    fn attach(&mut self, icon: IconId) {
        if let Some(slot) = self.slots.get_mut(&icon) {
            slot.attached = true;
        }
    }

    fn place(&mut self, icon: IconId, position: Vec3) {
        if let Some(slot) = self.slots.get_mut(&icon) {
            slot.position = position;
        }
    }
}
