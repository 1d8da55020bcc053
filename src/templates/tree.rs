//! # Template Tree
//!
//! The nested document emitted by the assembler. Each node flattens its
//! record's fields and appends the child list, matching the wire shape:
//! `{...template fields..., days:[{...day..., meals:[{...meal..., items:[..]}]}]}`.

use serde::Serialize;

use crate::records::{DayRecord, MealItemRecord, MealRecord, TemplateRecord};

/// Aggregation root: one template with its ordered days
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TemplateTree {
    #[serde(flatten)]
    pub template: TemplateRecord,
    pub days: Vec<DayNode>,
}

/// One day with its ordered meals
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayNode {
    #[serde(flatten)]
    pub day: DayRecord,
    pub meals: Vec<MealNode>,
}

/// One meal with its ordered items
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MealNode {
    #[serde(flatten)]
    pub meal: MealRecord,
    pub items: Vec<MealItemRecord>,
}
