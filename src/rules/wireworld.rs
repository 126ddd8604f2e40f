use super::Rule;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WireState {
    #[default]
    Empty = 0,
    Wire = 1,
    /// Electron tail.
    Tail = 2,
    /// Electron head.
    Head = 3,
}

/// Brian Silverman's Wireworld. Population is the number of electron heads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Wireworld;

impl Rule for Wireworld {
    type State = WireState;

    const NAME: &'static str = "Wireworld";
    const STATES: &'static [WireState] = &[
        WireState::Empty,
        WireState::Wire,
        WireState::Tail,
        WireState::Head,
    ];

    fn is_active(state: WireState) -> bool {
        state == WireState::Head
    }

    fn transition(state: WireState, active_neighbors: u8) -> WireState {
        match state {
            WireState::Wire if matches!(active_neighbors, 1 | 2) => WireState::Head,
            WireState::Head => WireState::Tail,
            WireState::Tail => WireState::Wire,
            other => other,
        }
    }

    fn parse_char(glyph: char) -> WireState {
        match glyph {
            '#' => WireState::Head,
            '+' => WireState::Tail,
            '*' => WireState::Wire,
            _ => WireState::Empty,
        }
    }

    fn generate_char(state: WireState) -> char {
        match state {
            WireState::Head => '#',
            WireState::Tail => '+',
            WireState::Wire => '*',
            WireState::Empty => ' ',
        }
    }

    fn code(state: WireState) -> u8 {
        state as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_fires_on_one_or_two_heads() {
        for n in 0..=8 {
            let expected = if n == 1 || n == 2 {
                WireState::Head
            } else {
                WireState::Wire
            };
            assert_eq!(Wireworld::transition(WireState::Wire, n), expected, "{n} heads");
        }
    }

    #[test]
    fn test_electron_decays_regardless_of_neighbors() {
        for n in 0..=8 {
            assert_eq!(Wireworld::transition(WireState::Head, n), WireState::Tail);
            assert_eq!(Wireworld::transition(WireState::Tail, n), WireState::Wire);
            assert_eq!(Wireworld::transition(WireState::Empty, n), WireState::Empty);
        }
    }

    #[test]
    fn test_glyphs_cover_every_state() {
        for &state in Wireworld::STATES {
            assert_eq!(Wireworld::parse_char(Wireworld::generate_char(state)), state);
            assert_eq!(Wireworld::from_code(Wireworld::code(state)), Some(state));
        }
        assert_eq!(Wireworld::parse_char('?'), WireState::Empty);
        assert_eq!(Wireworld::from_code(4), None);
    }
}
