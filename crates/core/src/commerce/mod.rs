//! Commerce API flows (pull/push data and responses)

pub mod executor;
pub mod helpers;

pub use executor::{parse_request_data, CommerceExecutor};
pub use helpers::{build_api_context, get_bearer_token, get_scheduler_id};
