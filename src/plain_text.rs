//! Plain-text grid format: one glyph per interior cell, one line per row.
//!
//! ```text
//!  *
//!   *
//! ***
//! ```
//!
//! The glyph alphabet belongs to the rule ([`Rule::parse_char`],
//! [`Rule::generate_char`]). Loading never fails: short rows and missing rows
//! are padded with the base state, overlong rows wrap, and glyphs past the
//! last row are dropped.

use log::{debug, warn};

use crate::{Engine, Rule};

/// What happened while loading text into a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Cells taken from the text.
    pub cells: usize,
    /// Cells left in the base state because the text ran short.
    pub padded: usize,
    /// Glyphs that did not fit into the grid.
    pub dropped: usize,
}

impl LoadReport {
    /// The text described every cell exactly once.
    pub fn is_exact(&self) -> bool {
        self.padded == 0 && self.dropped == 0
    }
}

/// Row-major dump, `columns` glyphs per line, each line ending in `'\n'`.
pub fn dump<R: Rule>(engine: &Engine<R>) -> String {
    let columns = engine.columns();
    let mut text = String::with_capacity(engine.rows() * (columns + 1));
    for (_, column, cell) in engine.grid().interior() {
        text.push(R::generate_char(cell.state()));
        if column == columns {
            text.push('\n');
        }
    }
    text
}

/// Replaces the grid contents with `text`; generation and population restart.
///
/// A newline ends the current row unless it directly follows a row that was
/// already filled by `columns` glyphs. `'\r'` is ignored.
pub fn load<R: Rule>(engine: &mut Engine<R>, text: &str) -> LoadReport {
    engine.clear();
    let (rows, columns) = (engine.rows(), engine.columns());
    let (mut row, mut column) = (1, 1);
    let mut wrapped = false;
    let mut report = LoadReport::default();

    for glyph in text.chars() {
        match glyph {
            '\r' => {}
            '\n' if wrapped => wrapped = false,
            '\n' => {
                (row, column) = (row + 1, 1);
            }
            _ if row > rows => {
                wrapped = false;
                report.dropped += 1;
            }
            _ => {
                engine.put(row, column, R::parse_char(glyph));
                report.cells += 1;
                column += 1;
                wrapped = column > columns;
                if wrapped {
                    (row, column) = (row + 1, 1);
                }
            }
        }
    }
    report.padded = rows * columns - report.cells;

    engine.recount_all_neighbors();
    if report.is_exact() {
        debug!("loaded {} {}x{} grid", R::NAME, rows, columns);
    } else {
        warn!(
            "{} text does not fit {}x{}: {} cells padded, {} glyphs dropped",
            R::NAME,
            rows,
            columns,
            report.padded,
            report.dropped
        );
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LifeEngine, LifeState, WireState, WireworldEngine};

    #[test]
    fn test_dump_life() {
        let mut life = LifeEngine::new(2, 3).unwrap();
        life.set_cell(1, 2, LifeState::Alive, true).unwrap();
        life.set_cell(2, 3, LifeState::Alive, true).unwrap();
        assert_eq!(dump(&life), " * \n  *\n");
    }

    #[test]
    fn test_load_wireworld_alphabet() {
        let mut wire = WireworldEngine::new(1, 5).unwrap();
        let report = load(&mut wire, "#+* x\n");
        assert!(report.is_exact());
        let states = wire.states().collect::<Vec<_>>();
        assert_eq!(
            states,
            [
                WireState::Head,
                WireState::Tail,
                WireState::Wire,
                WireState::Empty,
                WireState::Empty
            ]
        );
        assert_eq!(wire.population(), 1);
        assert_eq!(wire.grid().cell(1, 2).unwrap().neighbor_count(), 1);
    }

    #[test]
    fn test_load_resets_generation() {
        let mut life = LifeEngine::new(3, 3).unwrap();
        life.fill_random(4, Some(3));
        life.step();
        load(&mut life, "***\n");
        assert_eq!(life.generation(), 0);
        assert_eq!(life.population(), 3);
        assert_eq!(dump(&life), "***\n   \n   \n");
    }

    #[test]
    fn test_load_pads_short_rows() {
        let mut life = LifeEngine::new(3, 3).unwrap();
        let report = load(&mut life, "*\n\n  *");
        assert_eq!(
            report,
            LoadReport {
                cells: 4,
                padded: 5,
                dropped: 0
            }
        );
        assert_eq!(dump(&life), "*  \n   \n  *\n");
    }

    #[test]
    fn test_load_wraps_and_truncates() {
        let mut life = LifeEngine::new(2, 2).unwrap();
        let report = load(&mut life, "* * **");
        assert_eq!(report.cells, 4);
        assert_eq!(report.dropped, 2);
        assert_eq!(dump(&life), "* \n* \n");
    }

    #[test]
    fn test_load_accepts_crlf() {
        let mut life = LifeEngine::new(2, 2).unwrap();
        assert!(load(&mut life, "**\r\n *\r\n").is_exact());
        assert_eq!(life.population(), 3);
        assert_eq!(life.grid().cell(2, 1).unwrap().neighbor_count(), 3);
    }
}
