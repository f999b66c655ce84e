//! Analog pairs — a slider and a numeric field sharing one live value.

use std::sync::Mutex;

use crate::id::ControlId;

/// The two halves of an analog control.
///
/// The slider and the numeric field are distinct controls with distinct ids,
/// but they render the same underlying value: live input on either half is
/// mirrored into the shared value, so the siblings can never disagree.
#[derive(Debug)]
pub struct AnalogPair {
    pub slider_id: ControlId,
    pub field_id: ControlId,
    pub min: i64,
    pub max: i64,
    /// Cosmetic percent decoration for exact 0..=100 ranges.
    pub percent: bool,
    value: Mutex<i64>,
}

impl AnalogPair {
    /// Create a pair initialized to the midpoint of its range.
    ///
    /// The midpoint is a rendering default, not a read of real device state;
    /// the engine never learns the device's actual level.
    #[must_use]
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            slider_id: ControlId::new(),
            field_id: ControlId::new(),
            min,
            max,
            percent: min == 0 && max == 100,
            value: Mutex::new(midpoint(min, max)),
        }
    }

    /// The current shared value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
            .lock()
            .map_or_else(|poisoned| *poisoned.into_inner(), |guard| *guard)
    }

    /// Mirror a raw input from either half into the shared value.
    ///
    /// Values are taken as-is; out-of-range input is the presentation
    /// layer's problem, exactly as a raw slider would behave.
    pub fn set_value(&self, value: i64) {
        let mut guard = self
            .value
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = value;
    }

    /// Whether `control` addresses either half of this pair.
    #[must_use]
    pub fn owns(&self, control: ControlId) -> bool {
        control == self.slider_id || control == self.field_id
    }
}

/// Midpoint of an inclusive range, rounded half up.
#[must_use]
pub fn midpoint(min: i64, max: i64) -> i64 {
    (min + max + 1).div_euclid(2)
}
