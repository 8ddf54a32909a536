//! Reference category list
//!
//! The ledger accepts any non-empty category name; this list is advisory.
//! It seeds the `categories` listing and marks which categories feed the
//! tax itemization hints.

/// A suggested spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRef {
    pub name: &'static str,

    /// Whether spending here can reduce taxable income
    pub deductible: bool,
}

/// The built-in category list shown by `finsight categories`
pub const REFERENCE_CATEGORIES: &[CategoryRef] = &[
    CategoryRef { name: "Housing", deductible: false },
    CategoryRef { name: "Transportation", deductible: false },
    CategoryRef { name: "Food", deductible: false },
    CategoryRef { name: "Utilities", deductible: false },
    CategoryRef { name: "Healthcare", deductible: false },
    CategoryRef { name: "Entertainment", deductible: false },
    CategoryRef { name: "Savings", deductible: false },
    CategoryRef { name: "Income", deductible: false },
    CategoryRef { name: "Other", deductible: false },
    CategoryRef { name: "mortgage_interest", deductible: true },
    CategoryRef { name: "charitable_contributions", deductible: true },
    CategoryRef { name: "medical_expenses", deductible: true },
    CategoryRef { name: "child_care", deductible: true },
    CategoryRef { name: "education", deductible: true },
];

/// Look up a reference category by name (case-sensitive, as stored)
pub fn reference_category(name: &str) -> Option<&'static CategoryRef> {
    REFERENCE_CATEGORIES.iter().find(|c| c.name == name)
}
