pub mod config;
pub mod core;
pub mod kana;
pub mod learning;
pub mod roster;

pub use crate::core::analyzer::{analyze, NameAnalysis, SyllableBreakdown};
pub use crate::core::components::{PhonemicComponents, SyllablePosition};
pub use crate::core::explain::explain;
pub use crate::core::romanizer::romanize;
pub use crate::core::unicode::{compose_syllable, decompose_syllable};
