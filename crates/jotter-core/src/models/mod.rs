//! Data models for Jotter

mod factory;
mod note;
mod timestamp;

pub use factory::NoteFactory;
pub use note::{Note, NoteId};
pub use timestamp::{Timestamp, TIMESTAMP_FORMAT};
