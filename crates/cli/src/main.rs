//! `skugen` — operational harness for the variant generator.
//!
//! `skugen generate <request.json>` expands attributes into variants and
//! prints them as JSON. `skugen validate <variants.json>` runs the
//! pre-submission validation pass and exits non-zero on findings.

use std::fs;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use skugen_catalog::{
    generate_variants, is_submission_ready, validate_variants, ProductAttribute, ProductVariant,
    VariantDefaults,
};

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    #[serde(flatten)]
    defaults: VariantDefaults,
    attributes: Vec<ProductAttribute>,
    #[serde(default)]
    existing_variants: Vec<ProductVariant>,
}

fn main() -> ExitCode {
    skugen_observability::init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [cmd, path] if cmd.as_str() == "generate" => generate(path),
        [cmd, path] if cmd.as_str() == "validate" => validate(path),
        _ => bail!("usage: skugen <generate|validate> <file.json>"),
    }
}

fn generate(path: &str) -> Result<ExitCode> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let request: GenerateRequest =
        serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;

    let variants = generate_variants(
        &request.attributes,
        &request.existing_variants,
        &request.defaults,
    );
    tracing::info!(
        combinations = variants.len(),
        base_sku = %request.defaults.base_sku,
        "generated variants"
    );

    println!("{}", serde_json::to_string_pretty(&variants)?);
    Ok(ExitCode::SUCCESS)
}

fn validate(path: &str) -> Result<ExitCode> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let variants: Vec<ProductVariant> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;

    let reports = validate_variants(&variants);
    println!("{}", serde_json::to_string_pretty(&reports)?);

    if is_submission_ready(&variants) {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::warn!(
            variants = variants.len(),
            failing = reports.iter().filter(|r| !r.is_empty()).count(),
            "validation findings present"
        );
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_parses_flattened_defaults() {
        let request: GenerateRequest = serde_json::from_str(
            r#"{
                "base_sku": "TS",
                "base_price": 2000,
                "base_stock": 10,
                "attributes": [
                    {"name": "Color", "values": [{"label": "Red"}, {"label": "Blue"}]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(request.defaults.base_sku, "TS");
        assert_eq!(request.defaults.base_sale_price, None);
        assert!(request.existing_variants.is_empty());

        let variants = generate_variants(
            &request.attributes,
            &request.existing_variants,
            &request.defaults,
        );
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0].sku, "TS-RED");
    }
}
