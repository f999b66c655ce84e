//! Device schema — the JSON document describing every controllable device.
//!
//! The schema is fetched once at startup from the schema endpoint. Each
//! entry is a [`DeviceDescriptor`]; the closed set of device kinds lives in
//! [`DeviceKind`], so everything past parsing is exhaustively matched.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::command::CommandValue;
use crate::error::{SchemaLoadError, SchemaTypeError};

/// One schema entry describing a controllable device or a block of groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    /// Room the device belongs to; only used for section headers.
    pub room: String,
    /// Device id, unique within the schema and used to address commands.
    pub device: String,
    #[serde(flatten)]
    pub kind: DeviceKind,
}

impl DeviceDescriptor {
    /// Check invariants the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaLoadError::Bounds`] when numeric bounds are inverted.
    pub fn validate(&self) -> Result<(), SchemaLoadError> {
        if let DeviceKind::Analog { min, max } | DeviceKind::Custom { min, max } = &self.kind {
            if min > max {
                return Err(SchemaLoadError::Bounds {
                    device: self.device.clone(),
                    min: *min,
                    max: *max,
                });
            }
        }
        Ok(())
    }
}

/// The closed set of device kinds and their type-dependent payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DeviceKind {
    /// Plain on/off switch.
    Digital,
    /// Self-learning on/off switch on the Proove protocol.
    Proove,
    /// Dimmable device with a continuous level between `min` and `max`.
    Analog { min: i64, max: i64 },
    /// Like [`Analog`](Self::Analog), driven by a device-specific protocol.
    Custom { min: i64, max: i64 },
    /// IR/RF remote with named keys; the payload values are opaque codes
    /// interpreted by the station, not by this engine.
    Remote {
        buttons: IndexMap<String, serde_json::Value>,
    },
    /// Named groups of devices switched together.
    Groups { devices: Vec<GroupEntry> },
}

impl DeviceKind {
    /// Schema tags this engine recognizes.
    pub const KNOWN_TAGS: [&'static str; 6] =
        ["digital", "proove", "analog", "custom", "remote", "groups"];

    #[must_use]
    pub fn is_known_tag(tag: &str) -> bool {
        Self::KNOWN_TAGS.contains(&tag)
    }

    /// The schema tag this kind serializes under.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Digital => "digital",
            Self::Proove => "proove",
            Self::Analog { .. } => "analog",
            Self::Custom { .. } => "custom",
            Self::Remote { .. } => "remote",
            Self::Groups { .. } => "groups",
        }
    }
}

/// One named group: every member receives the same on/off commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupEntry {
    pub name: String,
    pub on: Vec<CommandTriple>,
    pub off: Vec<CommandTriple>,
}

/// One fan-out command as stored in the schema: `[device, deviceType, value]`.
///
/// The middle element is informational; commands on the wire only carry the
/// device id and a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandTriple(String, String, CommandValue);

impl CommandTriple {
    #[must_use]
    pub fn new(
        device: impl Into<String>,
        device_type: impl Into<String>,
        value: impl Into<CommandValue>,
    ) -> Self {
        Self(device.into(), device_type.into(), value.into())
    }

    #[must_use]
    pub fn device(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn device_type(&self) -> &str {
        &self.1
    }

    #[must_use]
    pub fn value(&self) -> &CommandValue {
        &self.2
    }
}

/// The parsed schema: accepted descriptors plus individually rejected entries.
///
/// An entry with an unrecognized `type` is isolated into `rejected` so the
/// rest of the panel still builds. Structural problems (a non-array root, a
/// malformed payload under a known type, inverted bounds) fail the whole
/// load instead; there is no trustworthy panel to build from a schema that
/// is broken rather than merely ahead of this engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub descriptors: Vec<DeviceDescriptor>,
    pub rejected: Vec<SchemaTypeError>,
}

impl Schema {
    /// Parse a schema document that was already decoded into JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaLoadError`] when the document is structurally broken.
    pub fn from_value(value: serde_json::Value) -> Result<Self, SchemaLoadError> {
        let serde_json::Value::Array(entries) = value else {
            return Err(SchemaLoadError::NotAnArray);
        };

        let mut descriptors = Vec::with_capacity(entries.len());
        let mut rejected = Vec::new();
        for entry in entries {
            let device = entry
                .get("device")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown")
                .to_string();

            if !entry.is_object() {
                return Err(SchemaLoadError::Descriptor {
                    device,
                    reason: "entry is not an object".to_string(),
                });
            }

            let tag = entry.get("type").and_then(serde_json::Value::as_str);
            if !tag.is_some_and(DeviceKind::is_known_tag) {
                rejected.push(SchemaTypeError { device });
                continue;
            }

            let descriptor: DeviceDescriptor =
                serde_json::from_value(entry).map_err(|err| SchemaLoadError::Descriptor {
                    device,
                    reason: err.to_string(),
                })?;
            descriptor.validate()?;
            descriptors.push(descriptor);
        }

        Ok(Self {
            descriptors,
            rejected,
        })
    }
}

impl std::str::FromStr for Schema {
    type Err = SchemaLoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = serde_json::from_str(s).map_err(|err| SchemaLoadError::Json {
            reason: err.to_string(),
        })?;
        Self::from_value(value)
    }
}
