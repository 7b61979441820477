//! Coating mass calculator with history.
//!
//! [`CoatingSession`] composes the pure calculator from `coatmass-calc` with
//! a [`HistoryStore`](coatmass_history::HistoryStore). A presentation layer
//! owns one session, calls [`CoatingSession::preview`] while the user types
//! and [`CoatingSession::calculate`] when they submit.
//!
//! # Example
//!
//! ```
//! use coatmass_history::{HistoryConfig, MemorySlot};
//! use coatmass_model::CalculationInput;
//! use coatmass_session::CoatingSession;
//!
//! let mut session = CoatingSession::open(MemorySlot::new("history"), HistoryConfig::default());
//! let calculated = session.calculate(&CalculationInput::example()).unwrap();
//! assert_eq!(calculated.result.total_weight, 0.0176);
//! assert_eq!(session.history().len(), 1);
//! ```

mod error;
pub mod logging;
mod session;

pub use error::{Result, SessionError};
pub use session::{Calculated, CoatingSession};
