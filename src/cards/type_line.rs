//! Structured type line.
//!
//! "Legendary Artifact Creature — Elf Warrior" decomposes into supertypes
//! (Legendary), card types (Artifact, Creature) and subtypes (Elf, Warrior).
//! The decomposition happens once, when the card is ingested, and every
//! predicate in the builder consults it instead of re-scanning raw text.
//! Double-faced lines ("Sorcery // Land") are classified by the front face.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

const SUPERTYPES: [&str; 6] = ["Basic", "Legendary", "Snow", "World", "Ongoing", "Host"];

/// Separator between card types and subtypes.
pub const SUBTYPE_SEPARATOR: char = '—';

/// Separator between the faces of a double-faced card.
pub const FACE_SEPARATOR: &str = "//";

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TypeLine {
    raw: String,
    supertypes: SmallVec<[String; 2]>,
    types: SmallVec<[String; 2]>,
    subtypes: SmallVec<[String; 3]>,
}

impl TypeLine {
    /// Decompose a raw type line. Only the front face of a double-faced
    /// line ("A // B") is decomposed; the raw text keeps both.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut line = TypeLine {
            raw: raw.trim().to_string(),
            ..TypeLine::default()
        };

        let front = raw.split(FACE_SEPARATOR).next().unwrap_or_default();
        let (left, right) = match front.split_once(SUBTYPE_SEPARATOR) {
            Some((left, right)) => (left, right),
            None => (front, ""),
        };

        for word in left.split_whitespace() {
            if SUPERTYPES.iter().any(|s| s.eq_ignore_ascii_case(word)) {
                push_unique(&mut line.supertypes, word);
            } else {
                push_unique(&mut line.types, word);
            }
        }
        for word in right.split_whitespace() {
            push_unique(&mut line.subtypes, word);
        }

        line
    }

    /// The type line as printed.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn is_double_faced(&self) -> bool {
        self.raw.contains(FACE_SEPARATOR)
    }

    #[must_use]
    pub fn supertypes(&self) -> &[String] {
        &self.supertypes
    }

    #[must_use]
    pub fn types(&self) -> &[String] {
        &self.types
    }

    #[must_use]
    pub fn subtypes(&self) -> &[String] {
        &self.subtypes
    }

    /// True if the line carries card type `name` (case-insensitive).
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.types.iter().any(|t| t.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn has_supertype(&self, name: &str) -> bool {
        self.supertypes.iter().any(|t| t.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn has_subtype(&self, name: &str) -> bool {
        self.subtypes.iter().any(|t| t.eq_ignore_ascii_case(name))
    }

    /// True if every word of `phrase` appears somewhere in the decomposition.
    ///
    /// "Legendary Creature" matches "Legendary Creature — Elf", as does "Elf".
    #[must_use]
    pub fn mentions(&self, phrase: &str) -> bool {
        let mut words = phrase.split_whitespace().peekable();
        if words.peek().is_none() {
            return true;
        }
        words.all(|w| self.is(w) || self.has_supertype(w) || self.has_subtype(w))
    }

    #[must_use]
    pub fn is_land(&self) -> bool {
        self.is("Land")
    }

    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.is("Creature")
    }

    #[must_use]
    pub fn is_basic_land(&self) -> bool {
        self.is_land() && self.has_supertype("Basic")
    }

    /// True for cards whose subtypes are creature types (creatures, kindred spells).
    #[must_use]
    pub fn has_creature_subtypes(&self) -> bool {
        self.is_creature() || self.is("Kindred") || self.is("Tribal")
    }
}

fn push_unique<A: smallvec::Array<Item = String>>(list: &mut SmallVec<A>, word: &str) {
    if !list.iter().any(|w| w == word) {
        list.push(word.to_string());
    }
}

impl From<String> for TypeLine {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for TypeLine {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<TypeLine> for String {
    fn from(line: TypeLine) -> Self {
        line.raw
    }
}

impl std::fmt::Display for TypeLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
