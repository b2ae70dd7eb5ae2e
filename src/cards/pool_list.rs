//! "count name" pool lists.
//!
//! ```text
//! 2 Grizzly Bears
//! 1 Lightning Bolt
//! ```
//!
//! Names resolve against a `CardCatalog`. Names the catalog does not know are
//! reported back rather than failing the whole list.

use tracing::warn;

use crate::core::DeckError;

use super::catalog::CardCatalog;
use super::deck::Pool;

/// Result of parsing a pool list.
#[derive(Clone, Debug, Default)]
pub struct PoolListing {
    pub pool: Pool,
    /// Names not found in the catalog, with their requested counts.
    pub unresolved: Vec<(String, i64)>,
}

/// Parse a pool list. Blank lines are skipped; lines are trimmed.
///
/// Fails on the first line that is not "count name", whose count is not an
/// integer, or whose count is below 1.
pub fn parse_pool_list(text: &str, catalog: &CardCatalog) -> Result<PoolListing, DeckError> {
    let mut listing = PoolListing::default();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let (count_text, name) = line
            .split_once(char::is_whitespace)
            .map(|(c, n)| (c, n.trim()))
            .filter(|(_, n)| !n.is_empty())
            .ok_or_else(|| DeckError::MalformedPoolLine {
                line: line_no,
                text: line.to_string(),
            })?;

        let count: i64 = count_text.parse().map_err(|_| DeckError::MalformedCount {
            line: line_no,
            text: line.to_string(),
        })?;

        match catalog.get(name) {
            Some(card) => listing.pool.add(card.clone(), count)?,
            None => {
                if count < 1 {
                    return Err(DeckError::InvalidCount {
                        name: name.to_string(),
                        count,
                    });
                }
                warn!(line = line_no, name, "card not found in catalog");
                listing.unresolved.push((name.to_string(), count));
            }
        }
    }

    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::Color;

    fn catalog() -> CardCatalog {
        [
            Card::new("Grizzly Bears", "Creature — Bear").with_colors(Color::Green),
            Card::new("Lightning Bolt", "Instant").with_colors(Color::Red),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_parse_merges_duplicates() {
        let text = "2 Grizzly Bears\n\n  1 Lightning Bolt  \n1 grizzly bears\n";
        let listing = parse_pool_list(text, &catalog()).unwrap();

        assert_eq!(listing.pool.len(), 2);
        assert_eq!(listing.pool.count_of("Grizzly Bears"), 3);
        assert_eq!(listing.pool.total_cards(), 4);
        assert!(listing.unresolved.is_empty());
    }

    #[test]
    fn test_unknown_names_are_reported() {
        let listing = parse_pool_list("3 Black Lotus\n1 Lightning Bolt", &catalog()).unwrap();
        assert_eq!(listing.unresolved, vec![("Black Lotus".to_string(), 3)]);
        assert_eq!(listing.pool.total_cards(), 1);
    }

    #[test]
    fn test_malformed_lines_fail_with_line_number() {
        let err = parse_pool_list("1 Lightning Bolt\nGrizzly", &catalog()).unwrap_err();
        assert!(matches!(err, DeckError::MalformedPoolLine { line: 2, .. }));

        let err = parse_pool_list("two Grizzly Bears", &catalog()).unwrap_err();
        assert!(matches!(err, DeckError::MalformedCount { line: 1, .. }));

        let err = parse_pool_list("1.5 Grizzly Bears", &catalog()).unwrap_err();
        assert!(matches!(err, DeckError::MalformedCount { .. }));
    }

    #[test]
    fn test_non_positive_counts_fail() {
        let err = parse_pool_list("-1 Grizzly Bears", &catalog()).unwrap_err();
        assert!(matches!(err, DeckError::InvalidCount { count: -1, .. }));

        let err = parse_pool_list("0 Unknown Card", &catalog()).unwrap_err();
        assert!(matches!(err, DeckError::InvalidCount { count: 0, .. }));
    }
}
