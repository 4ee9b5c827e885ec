//! Domain types and models

pub mod catalog;
pub mod credentials;
pub mod envelope;
pub mod params;
pub mod response;

pub use catalog::{
    classify, describe, entity_type_label, operations, operations_for, EntityType,
    EnvelopeShape, Family, OperationDescriptor, Resource, SchedulerType, UNKNOWN_ENTITY,
};
pub use credentials::{BusinessCentralCredentials, Credentials};
pub use envelope::{
    ApiContext, PushResponseBody, PushResponseContext, RequestEnvelope, SchedulerContext,
    SchedulerRequest, StandardRequestBody, TokenRequest,
};
pub use params::{FamilyInput, ItemParameters};
pub use response::{now_timestamp, redact_token, ApiResponse};
