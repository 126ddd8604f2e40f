mod life;
mod wireworld;

pub use life::{Life, LifeState};
pub use wireworld::{WireState, Wireworld};

use std::fmt::Debug;

/// Transition rule and text alphabet of one automaton family.
///
/// Rules are stateless: the grid and its neighbor counts live in
/// [`crate::Engine`], which calls these functions.
pub trait Rule {
    type State: Copy + Default + Eq + Debug + Send + Sync + 'static;

    /// Human readable name of the family.
    const NAME: &'static str;

    /// All states ordered by their integer code; the first one is the base
    /// state every cell starts in.
    const STATES: &'static [Self::State];

    /// Whether a cell in `state` counts toward population and toward its
    /// neighbors' counts.
    fn is_active(state: Self::State) -> bool;

    /// Next state of a cell given the number of active cells around it in
    /// the previous generation.
    fn transition(state: Self::State, active_neighbors: u8) -> Self::State;

    /// Glyph to state; unknown glyphs map to the base state.
    fn parse_char(glyph: char) -> Self::State;

    fn generate_char(state: Self::State) -> char;

    fn code(state: Self::State) -> u8;

    fn from_code(code: u8) -> Option<Self::State> {
        Self::STATES.get(code as usize).copied()
    }
}
