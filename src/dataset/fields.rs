// src/dataset/fields.rs
//! Column names of the survey export.

pub const LIVING_STYLE: &str = "living_style";
pub const SOCIAL_STYLE: &str = "social_style";
pub const WORK_STYLE: &str = "work_style";
pub const HOBBY_STYLE: &str = "hobby_style";
pub const PACE: &str = "pace";
pub const BUDGET: &str = "budget";
pub const PURCHASE_TYPE: &str = "purchase_type";
pub const OCCUPATION: &str = "occupation";
pub const CREATED_AT: &str = "created_at";

/// Categorical fields counted by the distribution analyzer, in report order.
pub const CATEGORY_FIELDS: &[&str] = &[
    LIVING_STYLE,
    SOCIAL_STYLE,
    WORK_STYLE,
    HOBBY_STYLE,
    PACE,
    BUDGET,
    PURCHASE_TYPE,
];

/// Cross-tabulated pairs: (report key, row field, column field).
pub const CORRELATION_PAIRS: &[(&str, &str, &str)] = &[
    ("living_work", LIVING_STYLE, WORK_STYLE),
    ("hobby_social", HOBBY_STYLE, SOCIAL_STYLE),
    ("budget_purchase", BUDGET, PURCHASE_TYPE),
];
