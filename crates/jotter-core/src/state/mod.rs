//! Request events, outcomes, and emissions shared by every interactor.

mod emission;
mod event;
mod outcome;

pub use emission::Emission;
pub use event::{EventKind, StateEvent};
pub use outcome::{Disposition, MessageKind, Outcome};
