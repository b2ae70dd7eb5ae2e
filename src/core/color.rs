//! Colors of mana and color sets.
//!
//! `Color::ALL` doubles as the fixed priority order W > U > B > R > G used by
//! every tie-break in the builder.

use serde::{Deserialize, Serialize};

use super::error::DeckError;

/// One of the five colors of mana.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    /// All colors in priority order.
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    /// Single-letter color code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }

    /// Parse a single-letter color code (case-insensitive).
    pub fn from_code(code: &str) -> Result<Self, DeckError> {
        match code.trim().to_ascii_uppercase().as_str() {
            "W" => Ok(Color::White),
            "U" => Ok(Color::Blue),
            "B" => Ok(Color::Black),
            "R" => Ok(Color::Red),
            "G" => Ok(Color::Green),
            _ => Err(DeckError::UnknownColor(code.to_string())),
        }
    }

    /// Color for a mana symbol character, if it is one of WUBRG.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'W' => Some(Color::White),
            'U' => Some(Color::Blue),
            'B' => Some(Color::Black),
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            _ => None,
        }
    }

    /// Position in the priority order (0 = highest priority).
    #[must_use]
    pub const fn priority(self) -> usize {
        self as usize
    }

    /// Name of the basic land that produces this color.
    #[must_use]
    pub const fn basic_land_name(self) -> &'static str {
        match self {
            Color::White => "Plains",
            Color::Blue => "Island",
            Color::Black => "Swamp",
            Color::Red => "Mountain",
            Color::Green => "Forest",
        }
    }

    /// Color produced by a basic land type, if `name` is one.
    #[must_use]
    pub fn from_basic_land_type(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.basic_land_name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<String> for Color {
    type Error = DeckError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.code().to_string()
    }
}

/// A set of colors stored as bitflags. Empty means colorless.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ColorSet(u8);

impl ColorSet {
    pub const COLORLESS: Self = Self(0);
    pub const ALL: Self = Self(0b1_1111);

    /// Creates a new empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn from_color(color: Color) -> Self {
        Self(1 << color as u8)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn contains(self, color: Color) -> bool {
        self.0 & Self::from_color(color).0 != 0
    }

    /// True if every color of `other` is in this set.
    #[must_use]
    pub const fn contains_all(self, other: ColorSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if the sets share at least one color.
    #[must_use]
    pub const fn intersects(self, other: ColorSet) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn union(self, other: ColorSet) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn intersection(self, other: ColorSet) -> Self {
        Self(self.0 & other.0)
    }

    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[must_use]
    pub const fn with(self, color: Color) -> Self {
        self.union(Self::from_color(color))
    }

    pub fn insert(&mut self, color: Color) {
        *self = self.with(color);
    }

    /// Colors in priority order.
    pub fn iter(self) -> impl Iterator<Item = Color> {
        Color::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    /// WUBRG codes, or "C" for colorless.
    #[must_use]
    pub fn codes(self) -> String {
        if self.is_empty() {
            return "C".to_string();
        }
        self.iter().map(Color::code).collect()
    }
}

impl From<Color> for ColorSet {
    fn from(color: Color) -> Self {
        Self::from_color(color)
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<T: IntoIterator<Item = Color>>(iter: T) -> Self {
        iter.into_iter()
            .fold(ColorSet::COLORLESS, |set, color| set.with(color))
    }
}

impl TryFrom<Vec<String>> for ColorSet {
    type Error = DeckError;

    fn try_from(codes: Vec<String>) -> Result<Self, Self::Error> {
        codes
            .iter()
            .map(|code| Color::from_code(code))
            .collect::<Result<ColorSet, _>>()
    }
}

/// Parses WUBRG codes such as "UR". "C" and the empty string are colorless.
impl std::str::FromStr for ColorSet {
    type Err = DeckError;

    fn from_str(codes: &str) -> Result<Self, Self::Err> {
        let codes = codes.trim();
        if codes.is_empty() || codes.eq_ignore_ascii_case("C") {
            return Ok(ColorSet::COLORLESS);
        }
        codes
            .chars()
            .map(|c| Color::from_code(&c.to_string()))
            .collect()
    }
}

impl From<ColorSet> for Vec<String> {
    fn from(set: ColorSet) -> Self {
        set.iter().map(String::from).collect()
    }
}
