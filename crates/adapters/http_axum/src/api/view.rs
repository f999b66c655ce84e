//! Serializable snapshots of the panel.
//!
//! The panel itself holds live interior state (pair values, remote
//! visibility); these DTOs copy that state out at request time so the
//! response is a plain value.

use serde::Serialize;

use rfpanel_domain::id::ControlId;
use rfpanel_domain::panel::{Panel, Section};
use rfpanel_domain::widget::{AnalogPair, Button, ControlSet, RemotePanel, RemoteVisibility};

/// The whole panel as returned by `GET /api/panel`.
#[derive(Debug, Serialize)]
pub struct PanelView {
    pub sections: Vec<SectionView>,
    pub extras: Vec<ButtonView>,
}

#[derive(Debug, Serialize)]
pub struct SectionView {
    pub title: String,
    pub sets: Vec<ControlSetView>,
}

#[derive(Debug, Serialize)]
pub struct ControlSetView {
    pub device: String,
    pub room: String,
    pub device_type: &'static str,
    pub buttons: Vec<ButtonView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair: Option<PairView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteView>,
}

#[derive(Debug, Serialize)]
pub struct ButtonView {
    pub id: ControlId,
    pub label: String,
}

/// Snapshot of an analog pair, including its current live value.
#[derive(Debug, Serialize)]
pub struct PairView {
    pub slider_id: ControlId,
    pub field_id: ControlId,
    pub min: i64,
    pub max: i64,
    pub value: i64,
    pub percent: bool,
}

/// Snapshot of a remote sub-panel; the toggle label reflects the current
/// visibility.
#[derive(Debug, Serialize)]
pub struct RemoteView {
    pub toggle: ButtonView,
    pub visibility: RemoteVisibility,
    pub buttons: Vec<ButtonView>,
}

impl From<&Panel> for PanelView {
    fn from(panel: &Panel) -> Self {
        Self {
            sections: panel.sections.iter().map(SectionView::from).collect(),
            extras: panel.extras.iter().map(ButtonView::from).collect(),
        }
    }
}

impl From<&Section> for SectionView {
    fn from(section: &Section) -> Self {
        Self {
            title: section.title.clone(),
            sets: section.sets.iter().map(ControlSetView::from).collect(),
        }
    }
}

impl From<&ControlSet> for ControlSetView {
    fn from(set: &ControlSet) -> Self {
        Self {
            device: set.device.clone(),
            room: set.room.clone(),
            device_type: set.device_type,
            buttons: set.buttons.iter().map(ButtonView::from).collect(),
            pair: set.pair.as_ref().map(PairView::from),
            remote: set.remote.as_ref().map(RemoteView::from),
        }
    }
}

impl From<&Button> for ButtonView {
    fn from(button: &Button) -> Self {
        Self {
            id: button.id,
            label: button.label.clone(),
        }
    }
}

impl From<&AnalogPair> for PairView {
    fn from(pair: &AnalogPair) -> Self {
        Self {
            slider_id: pair.slider_id,
            field_id: pair.field_id,
            min: pair.min,
            max: pair.max,
            value: pair.value(),
            percent: pair.percent,
        }
    }
}

impl From<&RemotePanel> for RemoteView {
    fn from(remote: &RemotePanel) -> Self {
        Self {
            toggle: ButtonView {
                id: remote.toggle.id,
                label: remote.toggle_label().to_string(),
            },
            visibility: remote.visibility(),
            buttons: remote.buttons.iter().map(ButtonView::from).collect(),
        }
    }
}
