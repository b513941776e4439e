//! Category model
//!
//! Categories label transactions. The backend counts how many transactions
//! use each one, which drives ordering in pickers.

use serde::{Deserialize, Serialize};

use super::ids::CategoryId;
use super::resource::{id_unassigned, Resource};
use super::transaction::TransactionType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default, skip_serializing_if = "id_unassigned")]
    pub id: CategoryId,

    pub name: String,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing)]
    pub usage_count: u32,
}

impl Category {
    /// Case-insensitive name match, used to pick a category by name
    pub fn matches(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}

impl Resource for Category {
    type Id = CategoryId;
    const LABEL: &'static str = "Category";
    const PATH: &'static str = "categories";

    fn id(&self) -> &CategoryId {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}

/// Sort categories most-used first, then by name
pub fn sort_by_usage(categories: &mut [Category]) {
    categories.sort_by(|a, b| {
        b.usage_count
            .cmp(&a.usage_count)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, usage: u32) -> Category {
        Category {
            id: CategoryId::from(name),
            name: name.into(),
            kind: TransactionType::Expense,
            color: None,
            usage_count: usage,
        }
    }

    #[test]
    fn test_sort_by_usage() {
        let mut list = vec![category("rent", 1), category("Food", 9), category("fuel", 1)];
        sort_by_usage(&mut list);
        let names: Vec<_> = list.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Food", "fuel", "rent"]);
    }

    #[test]
    fn test_usage_count_is_read_only() {
        let json = serde_json::to_value(category("Food", 4)).unwrap();
        assert!(json.get("usageCount").is_none());
        assert!(category("Food", 0).matches(" food "));
    }
}
