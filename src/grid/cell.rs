/// One grid square: its automaton state and how many of its eight Moore
/// neighbors are currently active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell<S> {
    pub(crate) state: S,
    pub(crate) neighbor_count: u8,
}

impl<S: Copy> Cell<S> {
    pub fn state(&self) -> S {
        self.state
    }

    pub fn neighbor_count(&self) -> u8 {
        self.neighbor_count
    }

    #[inline]
    pub(crate) fn shift_count(&mut self, delta: i8) {
        let count = self.neighbor_count.checked_add_signed(delta);
        debug_assert!(count.is_some(), "neighbor count {} + {delta}", self.neighbor_count);
        self.neighbor_count = count.unwrap_or(self.neighbor_count);
    }
}
