//! Expense categories
//!
//! A closed set of categories plus a free-form `Custom` variant. The custom
//! label lives on the variant itself, so a label can only exist when the
//! category is actually custom.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an expense
///
/// Serialized adjacently tagged, so the label field appears in the JSON
/// if and only if the category is `Custom`:
/// `{"kind": "food"}` vs `{"kind": "custom", "label": "Coffee"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "label", rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Shopping,
    Travel,
    Other,
    /// User-defined category with a free-text label
    Custom(String),
}

impl ExpenseCategory {
    /// Human-readable name; the label itself for custom categories
    pub fn label(&self) -> &str {
        match self {
            Self::Food => "Food",
            Self::Shopping => "Shopping",
            Self::Travel => "Travel",
            Self::Other => "Other",
            Self::Custom(label) => label,
        }
    }

    /// Check if this is a custom category
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Return this category with the custom label trimmed of surrounding
    /// whitespace. Fixed categories are returned unchanged.
    pub fn normalized(self) -> Self {
        match self {
            Self::Custom(label) => Self::Custom(label.trim().to_string()),
            other => other,
        }
    }

    /// Build a category from CLI input: a kind keyword plus an optional label
    ///
    /// The label is required for `custom` and rejected for the fixed kinds.
    pub fn from_kind_label(kind: &str, label: Option<&str>) -> Result<Self, String> {
        let category = match kind.to_ascii_lowercase().as_str() {
            "food" => Self::Food,
            "shopping" => Self::Shopping,
            "travel" => Self::Travel,
            "other" => Self::Other,
            "custom" => {
                let label = label.map(str::trim).unwrap_or_default();
                if label.is_empty() {
                    return Err("a non-empty --label is required for a custom category".into());
                }
                return Ok(Self::Custom(label.to_string()));
            }
            unknown => {
                return Err(format!(
                    "unknown category '{}': expected food, shopping, travel, other, or custom",
                    unknown
                ))
            }
        };

        if label.is_some() {
            return Err(format!("--label is only valid with --category custom, not '{}'", kind));
        }

        Ok(category)
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        assert_eq!(ExpenseCategory::Food.label(), "Food");
        assert_eq!(ExpenseCategory::Custom("Coffee".into()).label(), "Coffee");
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_string(&ExpenseCategory::Food).unwrap();
        assert_eq!(json, r#"{"kind":"food"}"#);

        let json = serde_json::to_string(&ExpenseCategory::Custom("Coffee".into())).unwrap();
        assert_eq!(json, r#"{"kind":"custom","label":"Coffee"}"#);

        let back: ExpenseCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ExpenseCategory::Custom("Coffee".into()));
    }

    #[test]
    fn test_normalized_trims_custom_label() {
        let cat = ExpenseCategory::Custom("  Coffee \n".into()).normalized();
        assert_eq!(cat, ExpenseCategory::Custom("Coffee".into()));

        // Fixed categories are untouched
        assert_eq!(ExpenseCategory::Travel.normalized(), ExpenseCategory::Travel);
    }

    #[test]
    fn test_from_kind_label() {
        assert_eq!(
            ExpenseCategory::from_kind_label("food", None).unwrap(),
            ExpenseCategory::Food
        );
        assert_eq!(
            ExpenseCategory::from_kind_label("Custom", Some(" Coffee ")).unwrap(),
            ExpenseCategory::Custom("Coffee".into())
        );
    }

    #[test]
    fn test_from_kind_label_rejects_bad_input() {
        assert!(ExpenseCategory::from_kind_label("custom", None).is_err());
        assert!(ExpenseCategory::from_kind_label("custom", Some("   ")).is_err());
        assert!(ExpenseCategory::from_kind_label("food", Some("x")).is_err());
        assert!(ExpenseCategory::from_kind_label("groceries", None).is_err());
    }
}
