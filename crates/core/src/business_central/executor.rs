//! Business Central actions

use std::sync::Arc;

use i95connect_domain::constants::INVALID_OPERATION;
use i95connect_domain::{
    ApiResponse, BusinessCentralEndpoints, ConnectorError, Credentials, Result,
};
use serde_json::{json, Value};
use tracing::{debug, info, instrument, warn};

use super::oauth::acquire_token;
use crate::transport_ports::HttpTransport;

/// Operation id of the only Business Central action.
pub const CREATE_CUSTOMER: &str = "createCustomer";

const CREATE_CUSTOMER_SUCCESS: &str = "Customer created successfully";
const CREATE_CUSTOMER_FAILURE: &str = "Failed to create customer in Business Central";

/// Runs Business Central actions: OAuth token, company lookup, create.
pub struct BusinessCentralExecutor {
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<Credentials>,
    endpoints: BusinessCentralEndpoints,
}

impl BusinessCentralExecutor {
    /// Executor sharing `transport`, calling the given endpoints.
    #[must_use]
    pub const fn new(
        transport: Arc<dyn HttpTransport>,
        credentials: Arc<Credentials>,
        endpoints: BusinessCentralEndpoints,
    ) -> Self {
        Self { transport, credentials, endpoints }
    }

    /// Run a Business Central action by operation id.
    pub async fn execute(&self, operation: &str, customer_data_json: &str) -> ApiResponse {
        if operation == CREATE_CUSTOMER {
            return self.create_customer(customer_data_json).await;
        }
        warn!(operation, "Unknown Business Central operation");
        ApiResponse::failure(format!("Unknown BC Action operation: {operation}"), INVALID_OPERATION)
    }

    /// Create a customer in the first company of the configured environment.
    ///
    /// Credentials and customer JSON are checked before any network call.
    #[instrument(skip_all)]
    pub async fn create_customer(&self, customer_data_json: &str) -> ApiResponse {
        match self.try_create_customer(customer_data_json).await {
            Ok(api_response) => {
                info!("Business Central customer created");
                ApiResponse::success(CREATE_CUSTOMER_SUCCESS, api_response)
            }
            Err(err) => {
                warn!(error = %err, kind = err.label(), "Business Central customer creation failed");
                ApiResponse::failure(CREATE_CUSTOMER_FAILURE, err.to_string())
            }
        }
    }

    async fn try_create_customer(&self, customer_data_json: &str) -> Result<Value> {
        let bc = self.credentials.business_central()?;
        let customer: Value = serde_json::from_str(customer_data_json).map_err(|err| {
            ConnectorError::InvalidInput(format!("Invalid JSON in customer data: {err}"))
        })?;

        let token = acquire_token(self.transport.as_ref(), &self.endpoints, &bc).await?;

        let companies_url = self.endpoints.companies_url(bc.tenant_id, bc.environment);
        debug!(method = "GET", url = %companies_url, "Listing Business Central companies");
        let companies = self.transport.get_json(&companies_url, &token).await?;

        let company = first_company(&companies).ok_or_else(no_company)?;
        let company_id = company_id(company).ok_or_else(no_company)?;
        let company_name = company.get("name").and_then(Value::as_str).map(str::to_owned);

        let customers_url =
            self.endpoints.customers_url(bc.tenant_id, bc.environment, &company_id);
        debug!(method = "POST", url = %customers_url, "Creating Business Central customer");
        let created = self.transport.post_json(&customers_url, Some(&token), &customer).await?;

        let mut result = json!({ "customer": created, "companyId": company_id });
        // Companies without a string name get no companyName key
        if let (Some(name), Some(fields)) = (company_name, result.as_object_mut()) {
            fields.insert("companyName".to_string(), Value::String(name));
        }
        Ok(result)
    }
}

fn no_company() -> ConnectorError {
    ConnectorError::MissingField("No company found to create customer in".to_string())
}

/// First company of a `{ value: [...] }` envelope or a bare array.
fn first_company(companies: &Value) -> Option<&Value> {
    companies.get("value").unwrap_or(companies).as_array()?.first()
}

fn company_id(company: &Value) -> Option<String> {
    match company.get("id")? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
