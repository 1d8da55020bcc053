//! # Template Aggregation Module
//!
//! Rebuilds the four-level template document (template → days → meals →
//! items) from the normalized tables via a sequence of dependent queries.

pub mod assembler;
pub mod tree;

pub use assembler::{AssembleError, TemplateAssembler, MAX_DAYS_PER_TEMPLATE, MAX_MEALS_PER_DAY};
pub use tree::{DayNode, MealNode, TemplateTree};
