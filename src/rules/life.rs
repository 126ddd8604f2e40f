use super::Rule;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LifeState {
    #[default]
    Dead = 0,
    Alive = 1,
}

/// Conway's Game of Life, B3/S23.
#[derive(Clone, Copy, Debug, Default)]
pub struct Life;

impl Rule for Life {
    type State = LifeState;

    const NAME: &'static str = "Life";
    const STATES: &'static [LifeState] = &[LifeState::Dead, LifeState::Alive];

    fn is_active(state: LifeState) -> bool {
        state == LifeState::Alive
    }

    fn transition(state: LifeState, active_neighbors: u8) -> LifeState {
        match (state, active_neighbors) {
            (LifeState::Alive, 2 | 3) | (LifeState::Dead, 3) => LifeState::Alive,
            _ => LifeState::Dead,
        }
    }

    fn parse_char(glyph: char) -> LifeState {
        match glyph {
            '*' => LifeState::Alive,
            _ => LifeState::Dead,
        }
    }

    fn generate_char(state: LifeState) -> char {
        match state {
            LifeState::Alive => '*',
            LifeState::Dead => ' ',
        }
    }

    fn code(state: LifeState) -> u8 {
        state as u8
    }
}
