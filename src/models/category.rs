//! Recognized transaction categories
//!
//! Records store the category as its display name so imported free-form
//! categories survive; these enums cover the choices offered when a user
//! records a transaction by hand.

use clap::ValueEnum;
use std::fmt;

/// Categories offered for income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum IncomeCategory {
    Salary,
    Freelance,
    Investment,
    Business,
    Gift,
    Refund,
    Other,
}

impl IncomeCategory {
    /// Display name stored on the transaction
    pub fn name(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Investment => "Investment",
            Self::Business => "Business",
            Self::Gift => "Gift",
            Self::Refund => "Refund",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Categories offered for expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ExpenseCategory {
    #[value(name = "food")]
    FoodAndDining,
    Transportation,
    Shopping,
    Entertainment,
    #[value(name = "bills")]
    BillsAndUtilities,
    Healthcare,
    Education,
    Travel,
    Other,
}

impl ExpenseCategory {
    /// Display name stored on the transaction
    pub fn name(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::BillsAndUtilities => "Bills & Utilities",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Travel => "Travel",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
