//! Variant editing session, modeled as an event-sourced aggregate.
//!
//! A draft holds the seller's attribute list and the generated variant list
//! for the duration of a create/edit session. Replacing the attributes is the
//! explicit regeneration trigger: the variant list is rebuilt wholesale by the
//! pure generator, preserving per-combination edits. Submission runs the
//! validation pass and closes the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use skugen_core::{Aggregate, AggregateId, AggregateRoot, DomainError, TenantId};
use skugen_events::Event;

use crate::attribute::ProductAttribute;
use crate::generator::{generate_variants, VariantDefaults};
use crate::validation::validate_variants;
use crate::variant::{ProductVariant, VariantImage};

/// Draft identifier (tenant-scoped via `tenant_id` fields in events/commands).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftId(pub AggregateId);

impl DraftId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for DraftId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    Editing,
    Submitted,
}

/// Aggregate root: VariantDraft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDraft {
    id: DraftId,
    tenant_id: Option<TenantId>,
    defaults: VariantDefaults,
    attributes: Vec<ProductAttribute>,
    variants: Vec<ProductVariant>,
    status: DraftStatus,
    version: u64,
    opened: bool,
}

impl VariantDraft {
    /// Create an empty, not-yet-opened aggregate instance for rehydration.
    pub fn empty(id: DraftId) -> Self {
        Self {
            id,
            tenant_id: None,
            defaults: VariantDefaults {
                base_sku: String::new(),
                base_price: 0,
                base_sale_price: None,
                base_stock: 0,
            },
            attributes: Vec::new(),
            variants: Vec::new(),
            status: DraftStatus::Editing,
            version: 0,
            opened: false,
        }
    }

    pub fn id_typed(&self) -> DraftId {
        self.id
    }

    pub fn tenant_id(&self) -> Option<TenantId> {
        self.tenant_id
    }

    pub fn defaults(&self) -> &VariantDefaults {
        &self.defaults
    }

    pub fn attributes(&self) -> &[ProductAttribute] {
        &self.attributes
    }

    pub fn variants(&self) -> &[ProductVariant] {
        &self.variants
    }

    pub fn status(&self) -> DraftStatus {
        self.status
    }
}

impl AggregateRoot for VariantDraft {
    type Id = DraftId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: OpenDraft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenDraft {
    pub tenant_id: TenantId,
    pub draft_id: DraftId,
    pub defaults: VariantDefaults,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ReplaceAttributes (the explicit regeneration trigger).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceAttributes {
    pub tenant_id: TenantId,
    pub draft_id: DraftId,
    pub attributes: Vec<ProductAttribute>,
    pub occurred_at: DateTime<Utc>,
}

/// Command: EditVariant (per-variant pricing/stock edit after generation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditVariant {
    pub tenant_id: TenantId,
    pub draft_id: DraftId,
    pub sku: String,
    pub price: u64,
    pub sale_price: Option<u64>,
    pub stock: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: AttachVariantImage (the upload itself happens elsewhere).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachVariantImage {
    pub tenant_id: TenantId,
    pub draft_id: DraftId,
    pub sku: String,
    pub image: VariantImage,
    pub occurred_at: DateTime<Utc>,
}

/// Command: SubmitDraft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitDraft {
    pub tenant_id: TenantId,
    pub draft_id: DraftId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftCommand {
    OpenDraft(OpenDraft),
    ReplaceAttributes(ReplaceAttributes),
    EditVariant(EditVariant),
    AttachVariantImage(AttachVariantImage),
    SubmitDraft(SubmitDraft),
}

/// Event: DraftOpened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftOpened {
    pub tenant_id: TenantId,
    pub draft_id: DraftId,
    pub defaults: VariantDefaults,
    pub occurred_at: DateTime<Utc>,
}

/// Event: AttributesReplaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributesReplaced {
    pub tenant_id: TenantId,
    pub draft_id: DraftId,
    pub attributes: Vec<ProductAttribute>,
    pub occurred_at: DateTime<Utc>,
}

/// Event: VariantEdited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantEdited {
    pub tenant_id: TenantId,
    pub draft_id: DraftId,
    pub sku: String,
    pub price: u64,
    pub sale_price: Option<u64>,
    pub stock: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: VariantImageAttached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantImageAttached {
    pub tenant_id: TenantId,
    pub draft_id: DraftId,
    pub sku: String,
    pub image: VariantImage,
    pub occurred_at: DateTime<Utc>,
}

/// Event: DraftSubmitted (carries the final submission payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSubmitted {
    pub tenant_id: TenantId,
    pub draft_id: DraftId,
    pub variants: Vec<ProductVariant>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftEvent {
    DraftOpened(DraftOpened),
    AttributesReplaced(AttributesReplaced),
    VariantEdited(VariantEdited),
    VariantImageAttached(VariantImageAttached),
    DraftSubmitted(DraftSubmitted),
}

impl Event for DraftEvent {
    fn event_type(&self) -> &'static str {
        match self {
            DraftEvent::DraftOpened(_) => "catalog.draft.opened",
            DraftEvent::AttributesReplaced(_) => "catalog.draft.attributes_replaced",
            DraftEvent::VariantEdited(_) => "catalog.draft.variant_edited",
            DraftEvent::VariantImageAttached(_) => "catalog.draft.image_attached",
            DraftEvent::DraftSubmitted(_) => "catalog.draft.submitted",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            DraftEvent::DraftOpened(e) => e.occurred_at,
            DraftEvent::AttributesReplaced(e) => e.occurred_at,
            DraftEvent::VariantEdited(e) => e.occurred_at,
            DraftEvent::VariantImageAttached(e) => e.occurred_at,
            DraftEvent::DraftSubmitted(e) => e.occurred_at,
        }
    }
}

impl Aggregate for VariantDraft {
    type Command = DraftCommand;
    type Event = DraftEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            DraftEvent::DraftOpened(e) => {
                self.id = e.draft_id;
                self.tenant_id = Some(e.tenant_id);
                self.defaults = e.defaults.clone();
                self.status = DraftStatus::Editing;
                self.opened = true;
            }
            DraftEvent::AttributesReplaced(e) => {
                self.attributes = e.attributes.clone();
                // Wholesale replacement: regeneration preserves edits for
                // combinations that survive and drops the rest.
                self.variants =
                    generate_variants(&self.attributes, &self.variants, &self.defaults);
            }
            DraftEvent::VariantEdited(e) => {
                if let Some(variant) = self.variants.iter_mut().find(|v| v.sku == e.sku) {
                    variant.price = e.price;
                    variant.sale_price = e.sale_price;
                    variant.stock = e.stock;
                }
            }
            DraftEvent::VariantImageAttached(e) => {
                if let Some(variant) = self.variants.iter_mut().find(|v| v.sku == e.sku) {
                    variant.images.push(e.image.clone());
                }
            }
            DraftEvent::DraftSubmitted(_) => {
                self.status = DraftStatus::Submitted;
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            DraftCommand::OpenDraft(cmd) => self.handle_open(cmd),
            DraftCommand::ReplaceAttributes(cmd) => self.handle_replace_attributes(cmd),
            DraftCommand::EditVariant(cmd) => self.handle_edit_variant(cmd),
            DraftCommand::AttachVariantImage(cmd) => self.handle_attach_image(cmd),
            DraftCommand::SubmitDraft(cmd) => self.handle_submit(cmd),
        }
    }
}

impl VariantDraft {
    fn ensure_tenant(&self, tenant_id: TenantId) -> Result<(), DomainError> {
        if !self.opened {
            return Ok(());
        }
        if self.tenant_id != Some(tenant_id) {
            return Err(DomainError::invariant("tenant mismatch"));
        }
        Ok(())
    }

    fn ensure_draft_id(&self, draft_id: DraftId) -> Result<(), DomainError> {
        if self.id != draft_id {
            return Err(DomainError::invariant("draft_id mismatch"));
        }
        Ok(())
    }

    fn ensure_editable(
        &self,
        tenant_id: TenantId,
        draft_id: DraftId,
    ) -> Result<(), DomainError> {
        if !self.opened {
            return Err(DomainError::not_found());
        }
        self.ensure_tenant(tenant_id)?;
        self.ensure_draft_id(draft_id)?;
        if self.status == DraftStatus::Submitted {
            return Err(DomainError::conflict("draft is already submitted"));
        }
        Ok(())
    }

    fn find_variant(&self, sku: &str) -> Result<&ProductVariant, DomainError> {
        self.variants
            .iter()
            .find(|v| v.sku == sku)
            .ok_or_else(DomainError::not_found)
    }

    fn handle_open(&self, cmd: &OpenDraft) -> Result<Vec<DraftEvent>, DomainError> {
        if self.opened {
            return Err(DomainError::conflict("draft already opened"));
        }

        if cmd.defaults.base_sku.trim().is_empty() {
            return Err(DomainError::validation("base SKU cannot be empty"));
        }

        Ok(vec![DraftEvent::DraftOpened(DraftOpened {
            tenant_id: cmd.tenant_id,
            draft_id: cmd.draft_id,
            defaults: cmd.defaults.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_replace_attributes(
        &self,
        cmd: &ReplaceAttributes,
    ) -> Result<Vec<DraftEvent>, DomainError> {
        self.ensure_editable(cmd.tenant_id, cmd.draft_id)?;

        // Malformed attributes are not rejected here: the generator filters
        // them, so half-typed input keeps regenerating without errors.
        Ok(vec![DraftEvent::AttributesReplaced(AttributesReplaced {
            tenant_id: cmd.tenant_id,
            draft_id: cmd.draft_id,
            attributes: cmd.attributes.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_edit_variant(&self, cmd: &EditVariant) -> Result<Vec<DraftEvent>, DomainError> {
        self.ensure_editable(cmd.tenant_id, cmd.draft_id)?;
        self.find_variant(&cmd.sku)?;

        Ok(vec![DraftEvent::VariantEdited(VariantEdited {
            tenant_id: cmd.tenant_id,
            draft_id: cmd.draft_id,
            sku: cmd.sku.clone(),
            price: cmd.price,
            sale_price: cmd.sale_price,
            stock: cmd.stock,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_attach_image(
        &self,
        cmd: &AttachVariantImage,
    ) -> Result<Vec<DraftEvent>, DomainError> {
        self.ensure_editable(cmd.tenant_id, cmd.draft_id)?;
        self.find_variant(&cmd.sku)?;

        Ok(vec![DraftEvent::VariantImageAttached(VariantImageAttached {
            tenant_id: cmd.tenant_id,
            draft_id: cmd.draft_id,
            sku: cmd.sku.clone(),
            image: cmd.image.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_submit(&self, cmd: &SubmitDraft) -> Result<Vec<DraftEvent>, DomainError> {
        self.ensure_editable(cmd.tenant_id, cmd.draft_id)?;

        if self.variants.is_empty() {
            return Err(DomainError::validation("draft has no variants"));
        }

        let findings: Vec<String> = validate_variants(&self.variants)
            .into_iter()
            .zip(&self.variants)
            .flat_map(|(variant_findings, variant)| {
                let sku = variant.sku.clone();
                variant_findings
                    .into_iter()
                    .map(move |finding| format!("{sku}: {finding}"))
            })
            .collect();
        if !findings.is_empty() {
            return Err(DomainError::validation_report(findings));
        }

        Ok(vec![DraftEvent::DraftSubmitted(DraftSubmitted {
            tenant_id: cmd.tenant_id,
            draft_id: cmd.draft_id,
            variants: self.variants.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }
}
