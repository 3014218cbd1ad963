pub mod analyzer;
pub mod search;
