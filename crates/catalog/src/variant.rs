//! Product variants: one purchasable SKU per attribute-value combination.

use serde::{Deserialize, Serialize};

use skugen_core::ValueObject;

/// Reference to an uploaded variant image.
///
/// Uploads happen in a separate flow; the catalog only holds the resulting
/// references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

impl VariantImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            public_id: None,
            is_default: false,
        }
    }
}

impl ValueObject for VariantImage {}

/// Denormalized snapshot of one attribute/value pair at generation time.
///
/// These echo the owning attribute's name and value label; they are copies,
/// not live references, so later attribute edits do not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantAttributeValue {
    pub attribute_name: String,
    pub value_label: String,
}

impl VariantAttributeValue {
    pub fn new(attribute_name: impl Into<String>, value_label: impl Into<String>) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            value_label: value_label.into(),
        }
    }
}

impl ValueObject for VariantAttributeValue {}

/// One purchasable variant: a SKU plus pricing, stock and images for exactly
/// one combination of attribute values.
///
/// Prices are integer cents. Stock is `i64` so hand-edited drafts can hold
/// out-of-range values for the validation pass to report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub sku: String,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<u64>,
    pub stock: i64,
    pub attribute_values: Vec<VariantAttributeValue>,
    #[serde(default)]
    pub images: Vec<VariantImage>,
}

impl ProductVariant {
    /// Order-independent set equality between this variant's combination and
    /// `combination`.
    ///
    /// This is the preservation key: a regeneration reuses an existing
    /// variant whenever its exact combination survives, regardless of the
    /// order attributes were processed in.
    pub fn matches_combination(&self, combination: &[VariantAttributeValue]) -> bool {
        self.attribute_values.len() == combination.len()
            && self
                .attribute_values
                .iter()
                .all(|own| combination.contains(own))
            && combination
                .iter()
                .all(|other| self.attribute_values.contains(other))
    }
}
