//! Widgets — the controls synthesized from device descriptors.
//!
//! A [`ControlSet`] is everything the panel shows for one device: its
//! buttons, an optional slider/numeric [`AnalogPair`], and an optional
//! [`RemotePanel`]. Synthesis is a pure function of the descriptor; ids are
//! minted here and stay stable for the lifetime of the panel.

mod analog;
mod button;
mod remote;

pub use analog::{AnalogPair, midpoint};
pub use button::{Button, ButtonAction};
pub use remote::{RemotePanel, RemoteVisibility};

use crate::schema::{DeviceDescriptor, DeviceKind, GroupEntry};

/// The widgets synthesized for one device or one device group.
#[derive(Debug)]
pub struct ControlSet {
    /// Device id (or group name) this set belongs to.
    pub device: String,
    /// Room of the owning descriptor.
    pub room: String,
    /// Presentation tag; `group` for sets expanded from a `groups` entry.
    pub device_type: &'static str,
    /// Buttons on the main row. Empty for remote sets, whose buttons live
    /// behind the toggle in [`ControlSet::remote`].
    pub buttons: Vec<Button>,
    pub pair: Option<AnalogPair>,
    pub remote: Option<RemotePanel>,
}

impl ControlSet {
    /// Synthesize the control set(s) for one descriptor.
    ///
    /// Every kind yields exactly one set, except `groups`, which expands
    /// into one set per group entry.
    #[must_use]
    pub fn build(descriptor: &DeviceDescriptor) -> Vec<Self> {
        match &descriptor.kind {
            DeviceKind::Digital => vec![Self::switch_set(descriptor, "digital")],
            DeviceKind::Proove => vec![Self::switch_set(descriptor, "proove")],
            DeviceKind::Analog { min, max } => {
                vec![Self::analog_set(descriptor, *min, *max, "analog")]
            }
            DeviceKind::Custom { min, max } => {
                vec![Self::analog_set(descriptor, *min, *max, "custom")]
            }
            DeviceKind::Remote { buttons } => {
                let keys = buttons
                    .keys()
                    .map(|label| Button::new(label.clone(), ButtonAction::Switch))
                    .collect();
                vec![Self {
                    device: descriptor.device.clone(),
                    room: descriptor.room.clone(),
                    device_type: "remote",
                    buttons: Vec::new(),
                    pair: None,
                    remote: Some(RemotePanel::new(keys)),
                }]
            }
            DeviceKind::Groups { devices } => devices
                .iter()
                .map(|entry| Self::group_set(descriptor, entry))
                .collect(),
        }
    }

    fn switch_set(descriptor: &DeviceDescriptor, device_type: &'static str) -> Self {
        Self {
            device: descriptor.device.clone(),
            room: descriptor.room.clone(),
            device_type,
            buttons: vec![
                Button::new("On", ButtonAction::Switch),
                Button::new("Off", ButtonAction::Switch),
            ],
            pair: None,
            remote: None,
        }
    }

    fn analog_set(
        descriptor: &DeviceDescriptor,
        min: i64,
        max: i64,
        device_type: &'static str,
    ) -> Self {
        Self {
            device: descriptor.device.clone(),
            room: descriptor.room.clone(),
            device_type,
            buttons: vec![
                Button::new("On", ButtonAction::SetLevel { value: max }),
                Button::new("Off", ButtonAction::SetLevel { value: min }),
            ],
            pair: Some(AnalogPair::new(min, max)),
            remote: None,
        }
    }

    fn group_set(descriptor: &DeviceDescriptor, entry: &GroupEntry) -> Self {
        Self {
            device: entry.name.clone(),
            room: descriptor.room.clone(),
            device_type: "group",
            buttons: vec![
                Button::new(
                    "On",
                    ButtonAction::Fanout {
                        triples: entry.on.clone(),
                    },
                ),
                Button::new(
                    "Off",
                    ButtonAction::Fanout {
                        triples: entry.off.clone(),
                    },
                ),
            ],
            pair: None,
            remote: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CommandTriple;

    fn descriptor(device: &str, kind: DeviceKind) -> DeviceDescriptor {
        DeviceDescriptor {
            room: "Living room".to_string(),
            device: device.to_string(),
            kind,
        }
    }

    #[test]
    fn should_build_on_and_off_switches_for_digital() {
        let sets = ControlSet::build(&descriptor("lampA", DeviceKind::Digital));

        assert_eq!(sets.len(), 1);
        let set = &sets[0];
        assert_eq!(set.device, "lampA");
        assert_eq!(set.device_type, "digital");
        assert!(set.pair.is_none());
        assert!(set.remote.is_none());

        let labels: Vec<&str> = set.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["On", "Off"]);
        assert!(
            set.buttons
                .iter()
                .all(|b| b.action == ButtonAction::Switch)
        );
    }

    #[test]
    fn should_tag_proove_sets_with_their_own_type() {
        let sets = ControlSet::build(&descriptor("outdoor", DeviceKind::Proove));
        assert_eq!(sets[0].device_type, "proove");
        assert_eq!(sets[0].buttons.len(), 2);
    }

    #[test]
    fn should_bind_analog_buttons_to_the_range_ends() {
        let sets = ControlSet::build(&descriptor(
            "dimmer",
            DeviceKind::Analog { min: 10, max: 90 },
        ));

        let set = &sets[0];
        assert_eq!(set.device_type, "analog");
        assert_eq!(set.buttons[0].label, "On");
        assert_eq!(set.buttons[0].action, ButtonAction::SetLevel { value: 90 });
        assert_eq!(set.buttons[1].label, "Off");
        assert_eq!(set.buttons[1].action, ButtonAction::SetLevel { value: 10 });

        let pair = set.pair.as_ref().unwrap();
        assert_eq!((pair.min, pair.max), (10, 90));
        assert!(!pair.percent);
    }

    #[test]
    fn should_build_custom_sets_like_analog_but_tagged_custom() {
        let sets = ControlSet::build(&descriptor("fan", DeviceKind::Custom { min: 1, max: 6 }));
        let set = &sets[0];
        assert_eq!(set.device_type, "custom");
        assert!(set.pair.is_some());
        assert_eq!(set.buttons[0].action, ButtonAction::SetLevel { value: 6 });
    }

    #[test]
    fn should_hide_remote_keys_behind_the_toggle() {
        let mut buttons = indexmap::IndexMap::new();
        buttons.insert("Power".to_string(), serde_json::json!(1));
        buttons.insert("Mute".to_string(), serde_json::json!(2));
        let sets = ControlSet::build(&descriptor("tvRemote", DeviceKind::Remote { buttons }));

        let set = &sets[0];
        assert_eq!(set.device_type, "remote");
        assert!(set.buttons.is_empty());

        let remote = set.remote.as_ref().unwrap();
        assert_eq!(remote.visibility(), RemoteVisibility::Hidden);
        let labels: Vec<&str> = remote.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Power", "Mute"]);
    }

    #[test]
    fn should_expand_groups_into_one_set_per_entry() {
        let entry = |name: &str| GroupEntry {
            name: name.to_string(),
            on: vec![CommandTriple::new("lampA", "digital", "On")],
            off: vec![CommandTriple::new("lampA", "digital", "Off")],
        };
        let sets = ControlSet::build(&descriptor(
            "groups",
            DeviceKind::Groups {
                devices: vec![entry("Evening"), entry("Night")],
            },
        ));

        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].device, "Evening");
        assert_eq!(sets[1].device, "Night");
        assert!(sets.iter().all(|s| s.device_type == "group"));
    }

    #[test]
    fn should_attach_the_entry_triples_to_group_buttons() {
        let sets = ControlSet::build(&descriptor(
            "groups",
            DeviceKind::Groups {
                devices: vec![GroupEntry {
                    name: "Evening".to_string(),
                    on: vec![
                        CommandTriple::new("lampA", "digital", "On"),
                        CommandTriple::new("dimmer", "analog", 75),
                    ],
                    off: vec![CommandTriple::new("lampA", "digital", "Off")],
                }],
            },
        ));

        let set = &sets[0];
        let ButtonAction::Fanout { triples } = &set.buttons[0].action else {
            panic!("expected the On button to fan out");
        };
        assert_eq!(triples.len(), 2);
        assert_eq!(triples[1].device(), "dimmer");

        let ButtonAction::Fanout { triples } = &set.buttons[1].action else {
            panic!("expected the Off button to fan out");
        };
        assert_eq!(triples.len(), 1);
    }
}
