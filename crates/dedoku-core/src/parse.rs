//! Parsing puzzle text into a [`Grid`].

use std::str::FromStr;

use crate::grid::Grid;

/// Error parsing a puzzle string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input contained a character that is neither a cell nor
    /// whitespace.
    #[display("invalid character in puzzle: {character:?}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// The input did not contain exactly 81 cells.
    #[display("expected 81 cells, got {count}")]
    WrongCellCount {
        /// The number of cells found.
        count: usize,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses 81 cells: digits `1`-`9`, with `.`, `_` or `0` for blanks.
    ///
    /// ASCII whitespace is ignored, so both single-line and multi-line
    /// layouts are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use dedoku_core::{CellId, Digit, Grid};
    ///
    /// let grid: Grid = "
    ///     53_ _7_ ___
    ///     6__ 195 ___
    ///     _98 ___ _6_
    ///     8__ _6_ __3
    ///     4__ 8_3 __1
    ///     7__ _2_ __6
    ///     _6_ ___ 28_
    ///     ___ 419 __5
    ///     ___ _8_ _79
    /// "
    /// .parse()?;
    ///
    /// assert_eq!(grid.cell(CellId::new(0)).value(), Some(Digit::D5));
    /// assert_eq!(grid.cell(CellId::new(2)).value(), None);
    /// # Ok::<(), dedoku_core::ParseGridError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut seed = [0; 81];
        let mut count = 0;
        for character in s.chars() {
            if character.is_ascii_whitespace() {
                continue;
            }
            let value = match character {
                '.' | '_' | '0' => 0,
                #[expect(clippy::cast_possible_truncation)]
                '1'..='9' => character as u8 - b'0',
                _ => return Err(ParseGridError::InvalidCharacter { character }),
            };
            if count < 81 {
                seed[count] = value;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(Grid::from_seed(seed))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::cell::CellId;

    #[test]
    fn test_parses_line_form() {
        let line = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
        let grid: Grid = line.parse().unwrap();
        assert_eq!(grid.to_line_string(), line);
    }

    #[test]
    fn test_blank_markers_are_equivalent() {
        let dots: Grid = ".".repeat(81).parse().unwrap();
        let zeros: Grid = "0".repeat(81).parse().unwrap();
        let underscores: Grid = "_".repeat(81).parse().unwrap();

        for id in CellId::ALL {
            assert_eq!(dots.cell(id).value(), None);
            assert_eq!(zeros.cell(id).value(), None);
            assert_eq!(underscores.cell(id).value(), None);
        }
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let blocky = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        ";
        let grid: Grid = blocky.parse().unwrap();
        assert_eq!(
            grid.to_line_string(),
            "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
        );
    }

    #[test]
    fn test_rejects_invalid_character() {
        let err = "x".repeat(81).parse::<Grid>().unwrap_err();
        assert_eq!(err, ParseGridError::InvalidCharacter { character: 'x' });
        assert_eq!(err.to_string(), "invalid character in puzzle: 'x'");
    }

    #[test]
    fn test_rejects_wrong_cell_count() {
        let err = ".".repeat(80).parse::<Grid>().unwrap_err();
        assert_eq!(err, ParseGridError::WrongCellCount { count: 80 });

        let err = ".".repeat(82).parse::<Grid>().unwrap_err();
        assert_eq!(err, ParseGridError::WrongCellCount { count: 82 });
        assert_eq!(err.to_string(), "expected 81 cells, got 82");
    }

    proptest! {
        #[test]
        fn prop_line_string_round_trips(
            seed in prop::collection::vec(0u8..=9, 81),
        ) {
            let seed: [u8; 81] = seed.try_into().unwrap();
            let grid = Grid::from_seed(seed);
            let reparsed: Grid = grid.to_line_string().parse().unwrap();
            for id in CellId::ALL {
                prop_assert_eq!(reparsed.cell(id).value(), grid.cell(id).value());
            }
        }
    }
}
