//! 한글 음절 분해와 로마자 변환

pub mod analyzer;
pub mod components;
pub mod explain;
pub mod romanizer;
pub mod unicode;
