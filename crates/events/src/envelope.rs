use serde::{Deserialize, Serialize};
use uuid::Uuid;

use skugen_core::{AggregateId, TenantId};

use crate::event::Event;

/// Envelope for an event, containing multi-tenant + stream metadata.
///
/// This is the unit you append to a session's event stream.
///
/// Notes:
/// - **Multi-tenancy** is enforced here via `tenant_id`.
/// - **Append-only**: `sequence_number` is monotonically increasing per stream.
/// - `payload` is the domain event itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    tenant_id: TenantId,

    aggregate_id: AggregateId,
    aggregate_type: String,

    /// Monotonically increasing position in the session stream.
    sequence_number: u64,

    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(
        event_id: Uuid,
        tenant_id: TenantId,
        aggregate_id: AggregateId,
        aggregate_type: impl Into<String>,
        sequence_number: u64,
        payload: E,
    ) -> Self {
        Self {
            event_id,
            tenant_id,
            aggregate_id,
            aggregate_type: aggregate_type.into(),
            sequence_number,
            payload,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn aggregate_id(&self) -> AggregateId {
        self.aggregate_id
    }

    pub fn aggregate_type(&self) -> &str {
        &self.aggregate_type
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}

impl<E: Event> EventEnvelope<E> {
    /// Wrap a freshly emitted event, minting a time-ordered event id.
    pub fn wrap(
        tenant_id: TenantId,
        aggregate_id: AggregateId,
        aggregate_type: impl Into<String>,
        sequence_number: u64,
        payload: E,
    ) -> Self {
        Self::new(
            Uuid::now_v7(),
            tenant_id,
            aggregate_id,
            aggregate_type,
            sequence_number,
            payload,
        )
    }

    /// Stable type name of the wrapped event.
    pub fn event_type(&self) -> &'static str {
        self.payload.event_type()
    }
}
