//! Data models for the curriculum hierarchy: tracks own phases, phases own modules.

pub mod module;
pub mod phase;
pub mod track;

pub use module::{CodeExample, Difficulty, InterviewQuestion, Module};
pub use phase::Phase;
pub use track::{Entry, Track};
