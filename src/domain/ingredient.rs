use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantity of an ingredient. The store accepts either a free-form string
/// ("2 cups") or a bare JSON number, and hands back whatever it was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(serde_json::Number),
    Text(String),
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Text(String::new())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) => write!(f, "{n}"),
            Amount::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Amount {
    fn from(s: &str) -> Self {
        Amount::Text(s.to_string())
    }
}

impl From<String> for Amount {
    fn from(s: String) -> Self {
        Amount::Text(s)
    }
}

impl From<u64> for Amount {
    fn from(n: u64) -> Self {
        Amount::Number(n.into())
    }
}

/// An ingredient as submitted by the form, before the backend assigns an id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewIngredient {
    pub title: String,
    pub amount: Amount,
}

impl NewIngredient {
    pub fn new(title: impl Into<String>, amount: impl Into<Amount>) -> Self {
        Self {
            title: title.into(),
            amount: amount.into(),
        }
    }

    pub fn with_id(self, id: impl Into<String>) -> Ingredient {
        Ingredient {
            id: id.into(),
            title: self.title,
            amount: self.amount,
        }
    }
}

/// A stored ingredient. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub title: String,
    pub amount: Amount,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.amount, self.id)
    }
}
