//! Per-item batch loop
//!
//! Items run one at a time in input order. Each produces exactly one output
//! tagged with its index.

use i95connect_domain::{ApiResponse, ConnectorError, ItemParameters, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::dispatcher::Dispatcher;

/// Output payload of one item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ItemJson {
    /// Response of the dispatched operation.
    Response(ApiResponse),
    /// Item could not be processed and the batch continued past it.
    Error {
        /// Why the item was skipped.
        error: String,
    },
}

/// Index of the input item an output belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairedItem {
    /// Zero-based input position.
    pub item: usize,
}

/// One output record: `{ json, pairedItem: { item } }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOutput {
    /// Response or skip record.
    pub json: ItemJson,
    /// Input item this output answers.
    pub paired_item: PairedItem,
}

/// Runs a batch of items through a [`Dispatcher`].
pub struct BatchRunner {
    dispatcher: Dispatcher,
    continue_on_fail: bool,
}

impl BatchRunner {
    /// Runner that aborts on the first undecodable item.
    #[must_use]
    pub const fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher, continue_on_fail: false }
    }

    /// Turn item-level errors into `{ error }` outputs instead of aborting.
    #[must_use]
    pub const fn with_continue_on_fail(mut self, enabled: bool) -> Self {
        self.continue_on_fail = enabled;
        self
    }

    /// Process `items` in order.
    ///
    /// Fails only when an item cannot be decoded into [`ItemParameters`] and
    /// continue-on-fail is off.
    ///
    /// # Errors
    /// Returns [`ConnectorError::InvalidInput`] for the first item that is
    /// neither `null` nor a decodable object.
    pub async fn run(
        &self,
        resource: &str,
        operation: &str,
        items: &[Value],
    ) -> Result<Vec<ItemOutput>> {
        let mut outputs = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            let span = info_span!("item", item = index, correlation_id = %Uuid::new_v4());

            let json = match decode_item(index, item) {
                Ok(params) => {
                    let response = self
                        .dispatcher
                        .dispatch(resource, operation, &params)
                        .instrument(span)
                        .await;
                    ItemJson::Response(response)
                }
                Err(err) if self.continue_on_fail => {
                    span.in_scope(|| warn!(error = %err, "Skipping item"));
                    ItemJson::Error { error: err.to_string() }
                }
                Err(err) => return Err(err),
            };

            outputs.push(ItemOutput { json, paired_item: PairedItem { item: index } });
        }

        info!(resource, operation, items = outputs.len(), "Batch complete");
        Ok(outputs)
    }
}

/// `null` means "all defaults"; anything else must be an object.
fn decode_item(index: usize, item: &Value) -> Result<ItemParameters> {
    match item {
        Value::Null => Ok(ItemParameters::default()),
        Value::Object(_) => ItemParameters::deserialize(item)
            .map_err(|err| ConnectorError::InvalidInput(format!("item {index}: {err}"))),
        other => Err(ConnectorError::InvalidInput(format!(
            "item {index}: expected an object, got {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use i95connect_domain::BusinessCentralEndpoints;
    use serde_json::json;

    use super::*;
    use crate::test_support::{sample_credentials, session_replies, Reply, StubTransport};

    fn runner(transport: Arc<StubTransport>) -> BatchRunner {
        BatchRunner::new(Dispatcher::new(
            transport,
            sample_credentials(),
            BusinessCentralEndpoints::default(),
        ))
    }

    fn commerce_round(transport: StubTransport, scheduler_id: &str) -> StubTransport {
        session_replies(transport, "tok-tok-tok-tok-tok-tok", scheduler_id)
            .reply(Reply::json(json!({ "scheduler": scheduler_id })))
    }

    #[tokio::test]
    async fn outputs_follow_input_order() {
        let transport = commerce_round(commerce_round(StubTransport::new(), "S-0"), "S-1");
        let transport = Arc::new(transport);
        let items = [json!({ "packetSize": 1 }), Value::Null];

        let outputs = runner(transport.clone())
            .run("ecommerce", "pullProductData", &items)
            .await
            .unwrap();

        assert_eq!(outputs.len(), 2);
        for (index, output) in outputs.iter().enumerate() {
            assert_eq!(output.paired_item.item, index);
            let ItemJson::Response(resp) = &output.json else { panic!("expected response") };
            assert!(resp.success);
            assert_eq!(resp.scheduler_id.as_deref(), Some(format!("S-{index}").as_str()));
        }
        let calls = transport.calls();
        assert_eq!(calls[2].body.as_ref().unwrap()["PacketSize"], 1);
        assert_eq!(calls[5].body.as_ref().unwrap()["PacketSize"], 5);
    }

    #[tokio::test]
    async fn continue_on_fail_records_error_and_keeps_going() {
        let transport = Arc::new(commerce_round(StubTransport::new(), "S-9"));
        let items = [json!({ "packetSize": "five" }), json!({})];

        let outputs = runner(transport)
            .with_continue_on_fail(true)
            .run("ecommerce", "pushInvoiceData", &items)
            .await
            .unwrap();

        assert_eq!(outputs.len(), 2);
        let ItemJson::Error { error } = &outputs[0].json else { panic!("expected error") };
        assert!(error.starts_with("Invalid input: item 0:"), "{error}");
        let ItemJson::Response(resp) = &outputs[1].json else { panic!("expected response") };
        assert!(resp.success);
        assert_eq!(outputs[1].paired_item.item, 1);
    }

    #[tokio::test]
    async fn decode_failure_aborts_without_continue_on_fail() {
        let transport = Arc::new(StubTransport::new());
        let items = [json!({}), json!("not an object")];

        let err = runner(transport.clone())
            .run("bcactions", "unknownOp", &items)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ConnectorError::InvalidInput("item 1: expected an object, got string".to_string())
        );
    }

    #[tokio::test]
    async fn failure_responses_are_data_not_errors() {
        let transport = Arc::new(StubTransport::new());
        let outputs = runner(transport)
            .run("nowhere", "pullProductData", &[json!({})])
            .await
            .unwrap();

        let value = serde_json::to_value(&outputs).unwrap();
        assert_eq!(value[0]["pairedItem"], json!({ "item": 0 }));
        assert_eq!(value[0]["json"]["success"], false);
        assert_eq!(value[0]["json"]["message"], "Unknown resource: nowhere");
    }

    #[test]
    fn error_output_serializes_flat() {
        let output = ItemOutput {
            json: ItemJson::Error { error: "boom".into() },
            paired_item: PairedItem { item: 3 },
        };
        assert_eq!(
            serde_json::to_value(output).unwrap(),
            json!({ "json": { "error": "boom" }, "pairedItem": { "item": 3 } })
        );
    }
}
