//! One simulation session: an engine of either family behind a single API.
//!
//! Drivers that switch between automata at runtime hold a [`Session`] and
//! talk to it in integer state codes (Life: 0 dead, 1 alive; Wireworld:
//! 0 empty, 1 wire, 2 tail, 3 head).

use std::{fmt, str::FromStr};

use crate::{
    plain_text::{self, LoadReport},
    Change, Engine, Error, Life, LifeEngine, Result, Rule, UpdateStrategy, Wireworld,
    WireworldEngine,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    #[default]
    Life,
    Wireworld,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Life => Life::NAME,
            Variant::Wireworld => Wireworld::NAME,
        }
    }

    /// Number of states; valid codes are `0..state_count()`.
    pub fn state_count(self) -> u8 {
        match self {
            Variant::Life => Life::STATES.len() as u8,
            Variant::Wireworld => Wireworld::STATES.len() as u8,
        }
    }

    pub fn supports_random_fill(self) -> bool {
        self == Variant::Life
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "life" => Ok(Variant::Life),
            "wireworld" | "wire" => Ok(Variant::Wireworld),
            _ => Err(Error::UnknownVariant { name: s.to_string() }),
        }
    }
}

/// A changed cell with its state given as an integer code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paint {
    pub row: usize,
    pub column: usize,
    pub code: u8,
}

#[derive(Clone, Debug)]
enum Automaton {
    Life(LifeEngine),
    Wireworld(WireworldEngine),
}

macro_rules! dispatch {
    ($automaton:expr, $engine:ident => $body:expr) => {
        match $automaton {
            Automaton::Life($engine) => $body,
            Automaton::Wireworld($engine) => $body,
        }
    };
}

fn paints<R: Rule>(changes: Vec<Change<R::State>>) -> Vec<Paint> {
    changes
        .into_iter()
        .map(|change| Paint {
            row: change.row,
            column: change.column,
            code: R::code(change.state),
        })
        .collect()
}

fn decode<R: Rule>(code: u8) -> Result<R::State> {
    R::from_code(code).ok_or(Error::InvalidState {
        code,
        variant: R::NAME,
    })
}

/// Sets a cell to the brush state, or back to the base state when it
/// already holds the brush. Returns the code the cell ends up with.
fn toggle<R: Rule>(engine: &mut Engine<R>, row: usize, column: usize, brush: u8) -> Result<u8> {
    let state = decode::<R>(brush)?;
    if engine.set_cell(row, column, state, true)?.changed {
        return Ok(brush);
    }
    let base = R::State::default();
    engine.set_cell(row, column, base, true)?;
    Ok(R::code(base))
}

/// Explicit session state handed to every operation by the driver.
#[derive(Clone, Debug)]
pub struct Session {
    automaton: Automaton,
}

impl Session {
    pub fn new(variant: Variant, rows: usize, columns: usize) -> Result<Self> {
        let automaton = match variant {
            Variant::Life => Automaton::Life(Engine::new(rows, columns)?),
            Variant::Wireworld => Automaton::Wireworld(Engine::new(rows, columns)?),
        };
        Ok(Self { automaton })
    }

    pub fn variant(&self) -> Variant {
        match self.automaton {
            Automaton::Life(_) => Variant::Life,
            Automaton::Wireworld(_) => Variant::Wireworld,
        }
    }

    pub fn rows(&self) -> usize {
        dispatch!(&self.automaton, e => e.rows())
    }

    pub fn columns(&self) -> usize {
        dispatch!(&self.automaton, e => e.columns())
    }

    pub fn population(&self) -> usize {
        dispatch!(&self.automaton, e => e.population())
    }

    pub fn generation(&self) -> u64 {
        dispatch!(&self.automaton, e => e.generation())
    }

    pub fn set_strategy(&mut self, strategy: UpdateStrategy) {
        dispatch!(&mut self.automaton, e => e.set_strategy(strategy))
    }

    pub fn code(&self, row: usize, column: usize) -> Result<u8> {
        match &self.automaton {
            Automaton::Life(e) => e.state(row, column).map(Life::code),
            Automaton::Wireworld(e) => e.state(row, column).map(Wireworld::code),
        }
    }

    /// All interior codes, row-major.
    pub fn codes(&self) -> Vec<u8> {
        match &self.automaton {
            Automaton::Life(e) => e.states().map(Life::code).collect(),
            Automaton::Wireworld(e) => e.states().map(Wireworld::code).collect(),
        }
    }

    pub fn step(&mut self) -> Vec<Paint> {
        match &mut self.automaton {
            Automaton::Life(e) => paints::<Life>(e.step().changes),
            Automaton::Wireworld(e) => paints::<Wireworld>(e.step().changes),
        }
    }

    /// Manual edit with full bookkeeping. Returns whether the cell changed.
    pub fn set_code(&mut self, row: usize, column: usize, code: u8) -> Result<bool> {
        match &mut self.automaton {
            Automaton::Life(e) => Ok(e.set_cell(row, column, decode::<Life>(code)?, true)?.changed),
            Automaton::Wireworld(e) => {
                Ok(e.set_cell(row, column, decode::<Wireworld>(code)?, true)?.changed)
            }
        }
    }

    /// Click semantics: paint with `brush`, or erase if the cell already
    /// holds it.
    pub fn toggle(&mut self, row: usize, column: usize, brush: u8) -> Result<Paint> {
        let code = match &mut self.automaton {
            Automaton::Life(e) => toggle(e, row, column, brush)?,
            Automaton::Wireworld(e) => toggle(e, row, column, brush)?,
        };
        Ok(Paint { row, column, code })
    }

    pub fn clear(&mut self) {
        dispatch!(&mut self.automaton, e => e.clear())
    }

    pub fn fill_random(&mut self, count: usize, seed: Option<u64>) -> Result<Vec<Paint>> {
        match &mut self.automaton {
            Automaton::Life(e) => Ok(paints::<Life>(e.fill_random(count, seed))),
            Automaton::Wireworld(_) => Err(Error::Unsupported {
                operation: "random fill",
                variant: Wireworld::NAME,
            }),
        }
    }

    pub fn dump(&self) -> String {
        dispatch!(&self.automaton, e => plain_text::dump(e))
    }

    pub fn load(&mut self, text: &str) -> LoadReport {
        dispatch!(&mut self.automaton, e => plain_text::load(e, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parsing() {
        assert_eq!("life".parse::<Variant>().unwrap(), Variant::Life);
        assert_eq!("WireWorld".parse::<Variant>().unwrap(), Variant::Wireworld);
        assert_eq!(
            "brian".parse::<Variant>(),
            Err(Error::UnknownVariant {
                name: "brian".to_string()
            })
        );
        assert_eq!(Variant::Wireworld.to_string(), "Wireworld");
        assert_eq!(Variant::Life.state_count(), 2);
        assert_eq!(Variant::Wireworld.state_count(), 4);
    }

    #[test]
    fn test_toggle_paints_then_erases() {
        let mut session = Session::new(Variant::Wireworld, 3, 3).unwrap();
        assert_eq!(session.toggle(2, 2, 3).unwrap().code, 3);
        assert_eq!(session.population(), 1);
        assert_eq!(session.toggle(2, 2, 3).unwrap().code, 0);
        assert_eq!(session.population(), 0);
        assert_eq!(session.toggle(2, 2, 1).unwrap().code, 1);
        assert_eq!(session.code(2, 2).unwrap(), 1);
    }

    #[test]
    fn test_invalid_codes_are_rejected() {
        let mut session = Session::new(Variant::Life, 3, 3).unwrap();
        assert_eq!(
            session.set_code(1, 1, 2),
            Err(Error::InvalidState {
                code: 2,
                variant: "Life"
            })
        );
        assert!(matches!(session.toggle(4, 1, 1), Err(Error::OutOfBounds { .. })));
        assert!(session.codes().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_random_fill_only_for_life() {
        let mut life = Session::new(Variant::Life, 4, 4).unwrap();
        assert_eq!(life.fill_random(6, Some(42)).unwrap().len(), 6);
        assert_eq!(life.population(), 6);

        let mut wire = Session::new(Variant::Wireworld, 4, 4).unwrap();
        assert!(matches!(
            wire.fill_random(6, Some(42)),
            Err(Error::Unsupported { .. })
        ));
    }

    #[test]
    fn test_step_reports_paints() {
        let mut session = Session::new(Variant::Wireworld, 1, 4).unwrap();
        session.load("#***");
        let paints = session.step();
        assert_eq!(
            paints,
            [
                Paint {
                    row: 1,
                    column: 1,
                    code: 2
                },
                Paint {
                    row: 1,
                    column: 2,
                    code: 3
                }
            ]
        );
        assert_eq!(session.dump(), "+#**\n");
        assert_eq!(session.generation(), 1);
        assert_eq!(session.population(), 1);
    }
}
