//! Catalog domain module: seller product attributes and variants.
//!
//! This crate contains the business rules for expanding product attributes
//! into purchasable variants, implemented purely as deterministic domain
//! logic (no IO, no HTTP, no storage). The expansion itself is a pure
//! function ([`generator::generate_variants`]); the editing-session
//! lifecycle around it is an event-sourced aggregate ([`draft::VariantDraft`]).

pub mod attribute;
pub mod draft;
pub mod generator;
pub mod validation;
pub mod variant;

pub use attribute::{AttributeValue, ProductAttribute};
pub use draft::{
    AttachVariantImage, DraftCommand, DraftEvent, DraftId, DraftOpened, DraftStatus,
    DraftSubmitted, EditVariant, OpenDraft, ReplaceAttributes, SubmitDraft, VariantDraft,
    VariantEdited, VariantImageAttached, AttributesReplaced,
};
pub use generator::{generate_variants, VariantDefaults};
pub use validation::{is_submission_ready, validate_variant, validate_variants};
pub use variant::{ProductVariant, VariantAttributeValue, VariantImage};
