//! Remote sub-panels — collapsible key pads with a visibility toggle.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::button::{Button, ButtonAction};

/// Visibility of a remote sub-panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteVisibility {
    #[default]
    Hidden,
    Shown,
}

impl RemoteVisibility {
    /// The label the toggle button shows while in this state.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Hidden => "Show remote",
            Self::Shown => "Hide remote",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
        }
    }
}

impl std::fmt::Display for RemoteVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hidden => f.write_str("hidden"),
            Self::Shown => f.write_str("shown"),
        }
    }
}

/// A collapsible sub-panel holding one key button per remote key.
///
/// The sub-panel starts hidden; pressing the toggle alternates between the
/// two states and nothing else in the engine depends on which one is
/// current.
#[derive(Debug)]
pub struct RemotePanel {
    /// The always-visible button that shows or hides the key pad.
    pub toggle: Button,
    /// Key buttons in schema order.
    pub buttons: Vec<Button>,
    visibility: Mutex<RemoteVisibility>,
}

impl RemotePanel {
    #[must_use]
    pub fn new(buttons: Vec<Button>) -> Self {
        Self {
            toggle: Button::new(
                RemoteVisibility::Hidden.toggle_label(),
                ButtonAction::ToggleRemote,
            ),
            buttons,
            visibility: Mutex::new(RemoteVisibility::Hidden),
        }
    }

    #[must_use]
    pub fn visibility(&self) -> RemoteVisibility {
        self.visibility
            .lock()
            .map_or_else(|poisoned| *poisoned.into_inner(), |guard| *guard)
    }

    /// Flip the visibility and return the new state.
    pub fn toggle(&self) -> RemoteVisibility {
        let mut guard = self
            .visibility
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = guard.flipped();
        *guard
    }

    /// The label the toggle button should currently show.
    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        self.visibility().toggle_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_panel() -> RemotePanel {
        RemotePanel::new(vec![
            Button::new("Power", ButtonAction::Switch),
            Button::new("Mute", ButtonAction::Switch),
        ])
    }

    #[test]
    fn should_start_hidden_with_show_label() {
        let panel = sample_panel();
        assert_eq!(panel.visibility(), RemoteVisibility::Hidden);
        assert_eq!(panel.toggle_label(), "Show remote");
    }

    #[test]
    fn should_show_and_relabel_on_first_toggle() {
        let panel = sample_panel();
        assert_eq!(panel.toggle(), RemoteVisibility::Shown);
        assert_eq!(panel.toggle_label(), "Hide remote");
    }

    #[test]
    fn should_return_to_hidden_on_second_toggle() {
        let panel = sample_panel();
        panel.toggle();
        assert_eq!(panel.toggle(), RemoteVisibility::Hidden);
        assert_eq!(panel.toggle_label(), "Show remote");
    }

    #[test]
    fn should_keep_key_buttons_in_given_order() {
        let panel = sample_panel();
        let labels: Vec<&str> = panel.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Power", "Mute"]);
    }

    #[test]
    fn should_mark_the_toggle_as_a_remote_toggle() {
        let panel = sample_panel();
        assert_eq!(panel.toggle.action, ButtonAction::ToggleRemote);
    }
}
