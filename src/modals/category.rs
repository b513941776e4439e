//! Category form

use super::{require, EntityForm};
use crate::context::FinanceContext;
use crate::models::{Category, CategoryId, TransactionType};
use crate::stores::CategoryStore;

#[derive(Debug, Clone, Default)]
pub struct CategoryForm {
    pub name: String,
    pub kind: TransactionType,
    pub color: String,
}

impl EntityForm for CategoryForm {
    type Record = Category;

    fn from_record(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            kind: category.kind,
            color: category.color.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        let name = require("Category name", &self.name)?;
        if name.len() > 50 {
            return Err("Category name too long (max 50 characters)".into());
        }
        let color = self.color.trim();
        if !color.is_empty() && !is_hex_color(color) {
            return Err("Color must be a hex value like #4caf50".into());
        }
        Ok(())
    }

    fn build(&self) -> Result<Category, String> {
        self.validate()?;
        let color = self.color.trim();
        Ok(Category {
            id: CategoryId::unassigned(),
            name: require("Category name", &self.name)?,
            kind: self.kind,
            color: (!color.is_empty()).then(|| color.to_lowercase()),
            usage_count: 0,
        })
    }

    fn store(ctx: &FinanceContext) -> &CategoryStore {
        &ctx.categories
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .map(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}
