//! Resource/operation dispatcher
//!
//! Routing is a pure catalog lookup; unknown inputs become failure responses
//! rather than errors.

use std::sync::Arc;

use i95connect_domain::constants::{INVALID_OPERATION, INVALID_RESOURCE};
use i95connect_domain::{
    classify, entity_type_label, ApiResponse, BusinessCentralEndpoints, ConnectorConfig,
    Credentials, EntityType, Family, ItemParameters, Resource,
};
use tracing::{instrument, warn};

use crate::business_central::BusinessCentralExecutor;
use crate::commerce::CommerceExecutor;
use crate::transport_ports::HttpTransport;

/// Where a `(resource, operation)` pair goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// One of the four commerce families.
    Family {
        /// Entity the operation targets.
        entity: EntityType,
        /// Family selecting scheduler tag, suffix and envelope.
        family: Family,
    },
    /// Business Central customer creation.
    BcCreateCustomer,
    /// Known resource, operation not offered under it.
    UnknownOperation(Resource),
    /// Resource is not one of the exact wire names.
    UnknownResource,
}

/// Resolve a `(resource, operation)` pair. No I/O.
///
/// Both names must match exactly; `ECommerce` is an unknown resource.
#[must_use]
pub fn route(resource: &str, operation: &str) -> Route {
    let Some(resource) = Resource::from_wire(resource) else {
        return Route::UnknownResource;
    };

    match (resource, classify(operation)) {
        (Resource::Ecommerce, Some((entity, family))) => match family {
            Family::PullData | Family::PushData | Family::PullResponse | Family::PushResponse => {
                Route::Family { entity, family }
            }
            Family::BcCreateCustomer => Route::UnknownOperation(resource),
        },
        (Resource::BcActions, Some((_, Family::BcCreateCustomer))) => Route::BcCreateCustomer,
        (resource, _) => Route::UnknownOperation(resource),
    }
}

/// Routes each item to the matching executor.
pub struct Dispatcher {
    commerce: CommerceExecutor,
    business_central: BusinessCentralExecutor,
}

impl Dispatcher {
    /// Dispatcher whose executors share `transport` and `credentials`.
    #[must_use]
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        credentials: Credentials,
        endpoints: BusinessCentralEndpoints,
    ) -> Self {
        let credentials = Arc::new(credentials);
        Self {
            commerce: CommerceExecutor::new(Arc::clone(&transport), Arc::clone(&credentials)),
            business_central: BusinessCentralExecutor::new(transport, credentials, endpoints),
        }
    }

    /// Build a dispatcher from loaded configuration.
    #[must_use]
    pub fn from_config(transport: Arc<dyn HttpTransport>, config: &ConnectorConfig) -> Self {
        Self::new(transport, config.credentials.clone(), config.business_central.clone())
    }

    /// Run one item. Always produces a response.
    ///
    /// The span carries the entity label of the operation for diagnostics.
    #[instrument(skip(self, params), fields(entity = entity_type_label(operation)))]
    pub async fn dispatch(
        &self,
        resource: &str,
        operation: &str,
        params: &ItemParameters,
    ) -> ApiResponse {
        match route(resource, operation) {
            Route::Family { entity, family } => match params.family_input(entity, family) {
                Some(input) => self.commerce.execute(family, &input).await,
                None => unknown_operation(Resource::Ecommerce, operation),
            },
            Route::BcCreateCustomer => {
                self.business_central.execute(operation, &params.customer_data_json).await
            }
            Route::UnknownOperation(resource) => unknown_operation(resource, operation),
            Route::UnknownResource => {
                warn!(resource, "Unknown resource");
                ApiResponse::failure(format!("Unknown resource: {resource}"), INVALID_RESOURCE)
            }
        }
    }
}

fn unknown_operation(resource: Resource, operation: &str) -> ApiResponse {
    warn!(%resource, operation, "Unknown operation");
    let message = match resource {
        Resource::Ecommerce => format!("Unknown eCommerce operation: {operation}"),
        Resource::BcActions => format!("Unknown BC Action operation: {operation}"),
    };
    ApiResponse::failure(message, INVALID_OPERATION)
}
