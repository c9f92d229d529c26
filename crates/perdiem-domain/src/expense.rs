//! Expense records and their category taxonomy.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Amounted, Identifiable};

/// A single recorded expense. Immutable once created; removed by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub amount: f64,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    pub recorded_at: DateTime<Utc>,
}

impl Expense {
    /// Creates a new expense stamped with the current instant.
    ///
    /// Amounts are positive by construction; callers validate user input
    /// before reaching this point.
    pub fn new(amount: f64, category: Category, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category,
            description: description.into(),
            recorded_at: Utc::now(),
        }
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Enumerates the expense categories the product recognizes.
#[derive(Default)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Healthcare,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Shopping,
        Category::Bills,
        Category::Healthcare,
        Category::Other,
    ];

    /// Maps a raw label to a category, treating anything unknown as `Other`.
    pub fn from_label(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "food" => Category::Food,
            "transport" => Category::Transport,
            "entertainment" => Category::Entertainment,
            "shopping" => Category::Shopping,
            "bills" => Category::Bills,
            "healthcare" => Category::Healthcare,
            _ => Category::Other,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Healthcare => "Healthcare",
            Category::Other => "Other",
        };
        f.write_str(label)
    }
}
