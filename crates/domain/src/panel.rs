//! Panel — the fully synthesized control surface.
//!
//! Built once from the parsed schema and treated as immutable from then on:
//! sections and widgets never change at runtime, only the interior state of
//! analog pairs and remote sub-panels does.

use crate::id::ControlId;
use crate::schema::{DeviceKind, Schema};
use crate::widget::{AnalogPair, Button, ButtonAction, ControlSet, RemotePanel};

/// A titled block of control sets: one room, or the block of groups.
#[derive(Debug)]
pub struct Section {
    pub title: String,
    pub sets: Vec<ControlSet>,
}

/// The whole control panel.
#[derive(Debug)]
pub struct Panel {
    /// Sections in schema order.
    pub sections: Vec<Section>,
    /// Reserved panel-wide buttons appended after all sections.
    pub extras: Vec<Button>,
}

impl Panel {
    /// Build the panel from a parsed schema.
    ///
    /// A section covers a consecutive run of descriptors sharing a room;
    /// the same room reappearing later opens a fresh section. Descriptors
    /// of kind `groups` always fall under a section titled `Groups`. Two
    /// reserved buttons, `Restart` and `Get info`, close the panel.
    #[must_use]
    pub fn from_schema(schema: &Schema) -> Self {
        let mut sections: Vec<Section> = Vec::new();
        for descriptor in &schema.descriptors {
            let title = match &descriptor.kind {
                DeviceKind::Groups { .. } => "Groups",
                _ => descriptor.room.as_str(),
            };
            let sets = ControlSet::build(descriptor);
            match sections.last_mut() {
                Some(section) if section.title == title => section.sets.extend(sets),
                _ => sections.push(Section {
                    title: title.to_string(),
                    sets,
                }),
            }
        }

        Self {
            sections,
            extras: vec![
                Button::new("Restart", ButtonAction::Restart),
                Button::new("Get info", ButtonAction::Info),
            ],
        }
    }

    /// All control sets in panel order.
    pub fn sets(&self) -> impl Iterator<Item = &ControlSet> {
        self.sections.iter().flat_map(|section| section.sets.iter())
    }

    /// Find a button anywhere in the panel: set rows, remote sub-panels
    /// (toggle and keys), and the reserved extras.
    #[must_use]
    pub fn find_button(&self, control: ControlId) -> Option<ButtonRef<'_>> {
        for set in self.sets() {
            for button in &set.buttons {
                if button.id == control {
                    return Some(ButtonRef {
                        button,
                        set: Some(set),
                    });
                }
            }
            if let Some(remote) = &set.remote {
                for button in std::iter::once(&remote.toggle).chain(remote.buttons.iter()) {
                    if button.id == control {
                        return Some(ButtonRef {
                            button,
                            set: Some(set),
                        });
                    }
                }
            }
        }
        self.extras
            .iter()
            .find(|button| button.id == control)
            .map(|button| ButtonRef { button, set: None })
    }

    /// Find the analog pair owning either half id, with its control set.
    #[must_use]
    pub fn find_pair(&self, control: ControlId) -> Option<(&ControlSet, &AnalogPair)> {
        self.sets().find_map(|set| {
            set.pair
                .as_ref()
                .filter(|pair| pair.owns(control))
                .map(|pair| (set, pair))
        })
    }

    /// Find the remote sub-panel whose toggle has the given id.
    #[must_use]
    pub fn find_remote(&self, control: ControlId) -> Option<&RemotePanel> {
        self.sets()
            .filter_map(|set| set.remote.as_ref())
            .find(|remote| remote.toggle.id == control)
    }
}

/// A button together with its owning control set; reserved extras have none.
#[derive(Debug, Clone, Copy)]
pub struct ButtonRef<'a> {
    pub button: &'a Button,
    pub set: Option<&'a ControlSet>,
}
