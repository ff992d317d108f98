//! Deterministic expansion of product attributes into purchasable variants.
//!
//! The generator is a pure function: the editing session calls it after every
//! attribute change and replaces its variant list wholesale with the result.
//! Preservation-by-combination keeps a seller's per-variant edits (price,
//! stock, images) alive across those regenerations.

use serde::{Deserialize, Serialize};

use crate::attribute::ProductAttribute;
use crate::variant::{ProductVariant, VariantAttributeValue};

/// Per-attribute SKU fragment length cap.
const SKU_FRAGMENT_LEN: usize = 3;

/// Defaults inherited by newly generated variants.
///
/// Prices are integer cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantDefaults {
    pub base_sku: String,
    pub base_price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_sale_price: Option<u64>,
    pub base_stock: i64,
}

/// Expand `attributes` into the full cartesian product of variants.
///
/// - Attributes failing the validity filter are silently skipped; if none
///   survive, the result is empty (clearing any previously generated set).
/// - Output order is lexicographic over attribute order, then value insertion
///   order. Callers rely on this ordering.
/// - A combination already present in `existing_variants` (order-independent
///   set match) keeps that variant's sku, price, sale price, stock and images
///   unchanged; only genuinely new combinations receive derived defaults.
/// - New variants get `base_stock / combination_count` stock (floored,
///   clamped to zero), where the count includes preserved combinations.
pub fn generate_variants(
    attributes: &[ProductAttribute],
    existing_variants: &[ProductVariant],
    defaults: &VariantDefaults,
) -> Vec<ProductVariant> {
    let valid: Vec<&ProductAttribute> = attributes
        .iter()
        .filter(|attribute| attribute.is_generable())
        .collect();
    if valid.is_empty() {
        return Vec::new();
    }

    let combinations = cartesian_product(&valid);
    let apportioned_stock = (defaults.base_stock / combinations.len() as i64).max(0);

    combinations
        .into_iter()
        .map(|combination| {
            match existing_variants
                .iter()
                .find(|variant| variant.matches_combination(&combination))
            {
                Some(existing) => {
                    let mut preserved = existing.clone();
                    // Editable fields stay untouched; only the combination
                    // snapshot is refreshed to the current processing order.
                    preserved.attribute_values = combination;
                    preserved
                }
                None => ProductVariant {
                    sku: derive_sku(&defaults.base_sku, &combination),
                    price: defaults.base_price,
                    sale_price: defaults.base_sale_price,
                    stock: apportioned_stock,
                    attribute_values: combination,
                    images: Vec::new(),
                },
            }
        })
        .collect()
}

/// Iterative cartesian product: each attribute in order extends every partial
/// combination with each of its values, preserving insertion order.
fn cartesian_product(attributes: &[&ProductAttribute]) -> Vec<Vec<VariantAttributeValue>> {
    let mut combinations: Vec<Vec<VariantAttributeValue>> = vec![Vec::new()];
    for attribute in attributes {
        let mut extended = Vec::with_capacity(combinations.len() * attribute.values.len());
        for combination in &combinations {
            for value in &attribute.values {
                let mut next = Vec::with_capacity(combination.len() + 1);
                next.extend_from_slice(combination);
                next.push(VariantAttributeValue::new(
                    attribute.name.clone(),
                    value.label.clone(),
                ));
                extended.push(next);
            }
        }
        combinations = extended;
    }
    combinations
}

/// `{base_sku}-{FRAG-FRAG-...}` where each fragment is the value label,
/// uppercased, whitespace stripped, truncated to three characters.
fn derive_sku(base_sku: &str, combination: &[VariantAttributeValue]) -> String {
    let suffix = combination
        .iter()
        .map(|pair| sku_fragment(&pair.value_label))
        .collect::<Vec<_>>()
        .join("-");
    format!("{base_sku}-{suffix}")
}

fn sku_fragment(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .take(SKU_FRAGMENT_LEN)
        .collect()
}
