//! Tag color definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Background color used for message tags.
///
/// Each variant carries the ANSI background escape code it renders with
/// (`ESC[<code>m`), covering the classic 40..47 range only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Color {
    Black = 40,
    Red = 41,
    Green = 42,
    Yellow = 43,
    #[default]
    Blue = 44,
    Purple = 45,
    Cyan = 46,
    White = 47,
}

impl Color {
    /// All colors, in escape-code order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Purple,
        Color::Cyan,
        Color::White,
    ];

    /// The ANSI background escape code for this color.
    #[must_use]
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "black" => Ok(Color::Black),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            "purple" | "magenta" => Ok(Color::Purple),
            "cyan" => Ok(Color::Cyan),
            "white" => Ok(Color::White),
            _ => Err(format!("Invalid color: '{}'", s)),
        }
    }
}
