//! Product attributes: named axes of variation and their values.

use serde::{Deserialize, Serialize};

use skugen_core::ValueObject;

/// One point on an attribute's axis (e.g. "Red" on "Color").
///
/// `value` is the normalized machine string; when absent it is derived from
/// the label on demand (lowercased, whitespace runs replaced with `-`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl AttributeValue {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
        }
    }

    pub fn with_value(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: Some(value.into()),
        }
    }

    /// The machine value: the explicit `value` when set, otherwise a slug
    /// derived from the label.
    pub fn normalized_value(&self) -> String {
        match &self.value {
            Some(v) if !v.trim().is_empty() => v.clone(),
            _ => slugify(&self.label),
        }
    }

    /// A value participates in generation only with a non-empty label.
    pub fn has_label(&self) -> bool {
        !self.label.trim().is_empty()
    }
}

impl ValueObject for AttributeValue {}

/// A named axis of product variation (e.g. "Color") with its ordered values.
///
/// Value insertion order is significant: it drives the combination order of
/// generated variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttribute {
    pub name: String,
    #[serde(default)]
    pub values: Vec<AttributeValue>,
}

impl ProductAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn with_values<I, S>(name: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: labels.into_iter().map(AttributeValue::new).collect(),
        }
    }

    /// Validity filter for generation: non-empty trimmed name, at least one
    /// value, and every value carries a non-empty trimmed label.
    ///
    /// Attributes failing this are silently skipped (not an error) so that
    /// half-typed input never blocks regeneration.
    pub fn is_generable(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.values.is_empty()
            && self.values.iter().all(AttributeValue::has_label)
    }
}

impl ValueObject for ProductAttribute {}

fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut in_gap = false;
    for c in label.trim().chars() {
        if c.is_whitespace() {
            in_gap = true;
            continue;
        }
        if in_gap && !slug.is_empty() {
            slug.push('-');
        }
        in_gap = false;
        slug.extend(c.to_lowercase());
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_value_prefers_explicit_value() {
        let value = AttributeValue::with_value("Red", "crimson");
        assert_eq!(value.normalized_value(), "crimson");
    }

    #[test]
    fn normalized_value_derives_slug_from_label() {
        assert_eq!(AttributeValue::new("Red").normalized_value(), "red");
        assert_eq!(
            AttributeValue::new("Extra  Large").normalized_value(),
            "extra-large"
        );
        assert_eq!(
            AttributeValue::new("  Heather Grey ").normalized_value(),
            "heather-grey"
        );
    }

    #[test]
    fn blank_explicit_value_falls_back_to_label() {
        let value = AttributeValue::with_value("Red", "   ");
        assert_eq!(value.normalized_value(), "red");
    }

    #[test]
    fn generable_requires_name_and_labeled_values() {
        assert!(ProductAttribute::with_values("Color", ["Red"]).is_generable());
        assert!(!ProductAttribute::with_values("  ", ["Red"]).is_generable());
        assert!(!ProductAttribute::new("Color").is_generable());
        assert!(!ProductAttribute::with_values("Color", ["Red", "  "]).is_generable());
    }
}
