//! Click events delivered by the bar host

use serde::{Deserialize, Deserializer};

/// Mouse button reported in a click event.
///
/// The bar host sends X11-style numeric button codes; codes outside the known
/// range map to `Unknown` rather than failing the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    #[default]
    Unknown,
    Left,
    Middle,
    Right,
    WheelUp,
    WheelDown,
    WheelLeft,
    WheelRight,
}

impl From<u64> for MouseButton {
    fn from(code: u64) -> Self {
        match code {
            1 => MouseButton::Left,
            2 => MouseButton::Middle,
            3 => MouseButton::Right,
            4 => MouseButton::WheelUp,
            5 => MouseButton::WheelDown,
            6 => MouseButton::WheelLeft,
            7 => MouseButton::WheelRight,
            _ => MouseButton::Unknown,
        }
    }
}

fn button_from_code<'de, D>(deserializer: D) -> Result<MouseButton, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(MouseButton::from(u64::deserialize(deserializer)?))
}

/// One click event, parsed from one JSON line of the input protocol.
#[derive(Debug, Clone, Deserialize)]
pub struct ClickEvent {
    /// Name of the module that owns the clicked block.
    pub name: String,
    #[serde(default, deserialize_with = "button_from_code")]
    pub button: MouseButton,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}
