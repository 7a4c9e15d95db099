//! Wire types exchanged with the native actionsheet plugin.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::warn;

/// Response value native code sends when no action was chosen.
pub const DISMISSED_SENTINEL: i64 = -1;

/// Visual style of a single button. Passed through to the native widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ActionStyle {
    #[default]
    Default = 0,
    Cancel = 1,
    Destructive = 2,
}

/// Presentation variant of the whole dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DialogStyle {
    /// Sheet sliding up from the bottom edge (`UIAlertController.Style.actionSheet`).
    ActionSheet = 0,
    /// Centered modal alert.
    #[default]
    Alert = 1,
}

// Both style enums travel as their integer index, which is what the native
// plugins switch on.
macro_rules! index_serde {
    ($ty:ident { $($index:literal => $variant:ident),+ $(,)? }) => {
        impl $ty {
            /// Integer index used on the wire.
            pub fn index(self) -> u8 {
                self as u8
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_u8(self.index())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                match u8::deserialize(deserializer)? {
                    $($index => Ok($ty::$variant),)+
                    other => Err(serde::de::Error::custom(format!(
                        concat!("invalid ", stringify!($ty), " index: {}"),
                        other
                    ))),
                }
            }
        }
    };
}

index_serde!(ActionStyle { 0 => Default, 1 => Cancel, 2 => Destructive });
index_serde!(DialogStyle { 0 => ActionSheet, 1 => Alert });

/// Serialized form of one button. The handler never crosses the bridge,
/// only whether one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPayload {
    /// Button label.
    pub text: String,
    /// Visual style, sent as its integer index.
    pub style: ActionStyle,
    /// Whether the button has a handler and can be tapped.
    pub enabled: bool,
}

/// Request sent to the native `showDialog` method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowDialogRequest {
    /// Optional headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Optional body text below the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Alert or action sheet, sent as its integer index.
    #[serde(default)]
    pub style: DialogStyle,
    /// Buttons in construction order.
    #[serde(default)]
    pub actions: Vec<ActionPayload>,
}

/// Response returned to the frontend by the `show_dialog` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowDialogResponse {
    /// Construction-order index of the chosen action, `None` when dismissed.
    pub index: Option<usize>,
}

impl From<Selection> for ShowDialogResponse {
    fn from(selection: Selection) -> Self {
        Self {
            index: selection.index(),
        }
    }
}

/// Outcome of one presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The user picked the action at this construction-order index.
    Chosen(usize),
    /// The dialog went away without any action being picked.
    Dismissed,
}

impl Selection {
    /// Chosen index, `None` for a dismissal.
    pub fn index(self) -> Option<usize> {
        match self {
            Selection::Chosen(index) => Some(index),
            Selection::Dismissed => None,
        }
    }

    /// Interpret whatever the native layer resolved with.
    ///
    /// Swift plugins resolve with an object (`{"index": 1}`), others may
    /// send the bare integer. `null`, `{}`, and the `-1` sentinel mean
    /// nothing was chosen. Anything else is logged and treated the same way.
    pub fn from_response(value: &Value) -> Self {
        match value {
            Value::Null => Selection::Dismissed,
            Value::Number(number) => Self::from_index(number),
            Value::Object(map) => match map.get("index") {
                None | Some(Value::Null) => Selection::Dismissed,
                Some(Value::Number(number)) => Self::from_index(number),
                Some(other) => {
                    warn!("Ignoring unexpected dialog response index: {}", other);
                    Selection::Dismissed
                }
            },
            other => {
                warn!("Ignoring unexpected dialog response: {}", other);
                Selection::Dismissed
            }
        }
    }

    fn from_index(number: &serde_json::Number) -> Self {
        match number.as_i64() {
            Some(DISMISSED_SENTINEL) => Selection::Dismissed,
            Some(index) if index >= 0 => usize::try_from(index)
                .map(Selection::Chosen)
                .unwrap_or(Selection::Dismissed),
            _ => {
                warn!("Ignoring invalid dialog response index: {}", number);
                Selection::Dismissed
            }
        }
    }
}
