use cellworld::{Engine, Rule};

/// Recounts every interior neighborhood by hand and checks it against the
/// engine's bookkeeping, together with the population.
pub fn assert_invariants<R: Rule>(engine: &Engine<R>) {
    let grid = engine.grid();
    let mut population = 0;
    for (row, column, cell) in grid.interior() {
        let mut expected = 0;
        for r in row - 1..=row + 1 {
            for c in column - 1..=column + 1 {
                if (r, c) != (row, column) && grid.contains(r, c) {
                    expected += R::is_active(grid.state(r, c).unwrap()) as u8;
                }
            }
        }
        assert_eq!(
            cell.neighbor_count(),
            expected,
            "neighbor count at ({}, {})",
            row,
            column
        );
        population += R::is_active(cell.state()) as usize;
    }
    assert_eq!(engine.population(), population, "population");
}
