//! Game of Life and Wireworld on a bounded rectangular grid.
//!
//! Every cell carries the number of active cells around it. Counts are kept
//! up to date incrementally by [`Engine::set_cell`] and [`Engine::step`] and
//! rebuilt from scratch only after bulk operations (loading text, clearing).
//!
//! ```rust
//! use cellworld::{plain_text, LifeEngine};
//!
//! let mut life = LifeEngine::new(5, 5).unwrap();
//! plain_text::load(&mut life, " * \n  *\n***\n");
//! for _ in 0..4 {
//!     life.step();
//! }
//! assert_eq!(plain_text::dump(&life), "     \n  *  \n   * \n *** \n     \n");
//! ```

mod engine;
mod error;
mod grid;
mod gui;
pub mod plain_text;
mod rules;
mod session;

pub use engine::{
    Change, Edit, Engine, LifeEngine, StepReport, UpdateStrategy, WireworldEngine,
};
pub use error::{Error, Result};
pub use grid::{Cell, Grid};
pub use gui::{App, Config};
pub use plain_text::LoadReport;
pub use rules::{Life, LifeState, Rule, WireState, Wireworld};
pub use session::{Paint, Session, Variant};
