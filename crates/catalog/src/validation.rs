//! Pre-submission validation of variants.
//!
//! This pass never runs during generation and never mutates anything: it
//! produces human-readable findings for the seller, and only submission is
//! blocked on them. Message texts are part of the UI contract.

use crate::variant::ProductVariant;

/// Validate one variant, returning every finding (empty = submission-ready).
pub fn validate_variant(variant: &ProductVariant) -> Vec<String> {
    let mut findings = Vec::new();

    if variant.sku.trim().is_empty() {
        findings.push("SKU required".to_string());
    }

    if variant.price == 0 {
        findings.push("Price must be greater than 0".to_string());
    }

    if let Some(sale_price) = variant.sale_price {
        if sale_price >= variant.price {
            findings.push("Sale price must be less than regular price".to_string());
        }
    }

    if variant.stock < 0 {
        findings.push("Stock quantity is required and must be 0 or positive".to_string());
    }

    if !variant.images.iter().any(|image| !image.url.trim().is_empty()) {
        findings.push("At least one image is required".to_string());
    }

    findings
}

/// Validate a whole variant list, one findings list per variant, in order.
pub fn validate_variants(variants: &[ProductVariant]) -> Vec<Vec<String>> {
    variants.iter().map(validate_variant).collect()
}

/// True when every variant passes the validation pass.
pub fn is_submission_ready(variants: &[ProductVariant]) -> bool {
    variants.iter().all(|v| validate_variant(v).is_empty())
}
