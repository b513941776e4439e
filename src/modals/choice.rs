//! Choice fields: a constrained list with a custom escape
//!
//! The selection is tagged so a form knows whether the user picked one of
//! their options or typed something else; it becomes a plain string when
//! the record is built.

use crate::models::{OptionList, UserOptions};

/// List entry that switches the field to custom input
pub const CUSTOM_ENTRY: &str = "__custom__";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceValue {
    Predefined(String),
    Custom(String),
}

impl ChoiceValue {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Predefined(v) | Self::Custom(v) => v,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

#[derive(Debug, Clone)]
pub struct ChoiceField {
    label: &'static str,
    source: OptionList,
    options: Vec<String>,
    value: Option<ChoiceValue>,
}

impl ChoiceField {
    pub fn new(label: &'static str, source: OptionList) -> Self {
        let options = UserOptions::default().list(source).to_vec();
        Self {
            label,
            source,
            options,
            value: None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn source(&self) -> OptionList {
        self.source
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// No list to choose from: the field is plain text
    pub fn is_free_text(&self) -> bool {
        self.options.is_empty()
    }

    /// Entries to offer, ending with the custom-value entry
    pub fn entries(&self) -> Vec<String> {
        let mut entries = self.options.clone();
        if !entries.is_empty() {
            entries.push(CUSTOM_ENTRY.to_string());
        }
        entries
    }

    /// Swap in the user's list, keeping the current value
    pub fn set_options(&mut self, options: &UserOptions) {
        self.options = options.list(self.source).to_vec();
        if let Some(current) = self.value.take() {
            self.set_value(current.as_str());
        }
    }

    /// Pick a list entry; the custom entry starts an empty custom value
    pub fn select(&mut self, entry: &str) {
        if entry == CUSTOM_ENTRY {
            self.value = Some(ChoiceValue::Custom(String::new()));
        } else {
            self.set_value(entry);
        }
    }

    /// Pick by 1-based position in [`entries`](Self::entries)
    pub fn select_index(&mut self, index: usize) -> bool {
        match index.checked_sub(1).and_then(|i| self.entries().get(i).cloned()) {
            Some(entry) => {
                self.select(&entry);
                true
            }
            None => false,
        }
    }

    pub fn set_custom(&mut self, text: &str) {
        self.value = Some(ChoiceValue::Custom(text.trim().to_string()));
    }

    /// Classify raw text: a known option (case-insensitive) or a custom value
    pub fn set_value(&mut self, raw: &str) {
        let raw = raw.trim();
        if raw.is_empty() {
            self.value = None;
            return;
        }
        self.value = Some(
            match self.options.iter().find(|o| o.eq_ignore_ascii_case(raw)) {
                Some(option) => ChoiceValue::Predefined(option.clone()),
                None => ChoiceValue::Custom(raw.to_string()),
            },
        );
    }

    pub fn value(&self) -> Option<&ChoiceValue> {
        self.value.as_ref()
    }

    /// The plain string the record will carry, if any
    pub fn resolve(&self) -> Option<String> {
        self.value
            .as_ref()
            .map(|v| v.as_str().trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn require(&self) -> Result<String, String> {
        self.resolve()
            .ok_or_else(|| format!("{} is required", self.label))
    }
}
