//! `run` - execute one operation over a batch of items

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};
use i95connect_core::ItemOutput;
use serde_json::Value;

use crate::cli::RunArgs;
use crate::context::AppContext;

/// Path argument meaning "read items from stdin".
const STDIN_MARKER: &str = "-";

/// Load items and configuration, run the batch and render the outputs.
///
/// # Errors
/// Fails when items or configuration cannot be loaded, or the batch aborts.
pub async fn execute(args: &RunArgs) -> anyhow::Result<String> {
    let items = read_items(args.items.as_deref())?;
    let context = AppContext::load(args.config.clone()).context("failed to load configuration")?;
    let outputs = run_batch(&context, args, &items).await?;
    super::render(&outputs, args.pretty)
}

/// Run every item through the batch runner built from `context`.
///
/// Fails only when an item cannot be decoded and continue-on-fail is off;
/// per-item API failures are part of the output.
///
/// # Errors
/// Returns the undecodable-item error with `batch aborted` context.
pub async fn run_batch(
    context: &AppContext,
    args: &RunArgs,
    items: &[Value],
) -> anyhow::Result<Vec<ItemOutput>> {
    tracing::info!(
        resource = %args.resource,
        operation = %args.operation,
        items = items.len(),
        continue_on_fail = args.continue_on_fail,
        "Running batch"
    );

    let outputs = context
        .runner(args.continue_on_fail)
        .run(&args.resource, &args.operation, items)
        .await
        .context("batch aborted")?;
    Ok(outputs)
}

/// Load the input items. No source means a single item with defaults.
///
/// # Errors
/// Fails when the source cannot be read or does not parse as items.
pub fn read_items(source: Option<&Path>) -> anyhow::Result<Vec<Value>> {
    let Some(path) = source else {
        return Ok(vec![Value::Null]);
    };

    let text = if path.as_os_str() == STDIN_MARKER {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer).context("failed to read items from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read items file {}", path.display()))?
    };

    parse_items(&text)
}

/// An array is a batch; an object (or `null`) is a single item.
///
/// # Errors
/// Fails on invalid JSON or a scalar document.
pub fn parse_items(text: &str) -> anyhow::Result<Vec<Value>> {
    let value: Value = serde_json::from_str(text).context("items are not valid JSON")?;
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(_) | Value::Null => Ok(vec![value]),
        other => bail!("items must be a JSON array or object, got {other}"),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn no_source_is_one_default_item() {
        assert_eq!(read_items(None).unwrap(), vec![Value::Null]);
    }

    #[test]
    fn array_is_a_batch() {
        let items = parse_items(r#"[{"packetSize": 3}, null]"#).unwrap();
        assert_eq!(items, vec![json!({ "packetSize": 3 }), Value::Null]);
    }

    #[test]
    fn object_is_a_single_item() {
        let items = parse_items(r#"{"pushType": "full"}"#).unwrap();
        assert_eq!(items, vec![json!({ "pushType": "full" })]);
    }

    #[test]
    fn scalar_is_rejected() {
        let err = parse_items("42").unwrap_err();
        assert!(err.to_string().contains("JSON array or object"), "{err}");
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(parse_items("[{").is_err());
    }

    #[test]
    fn items_are_read_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"[{"packetSize": 1}, {"packetSize": 2}]"#).unwrap();

        let items = read_items(Some(file.path())).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["packetSize"], 2);
    }

    #[test]
    fn missing_items_file_names_the_path() {
        let err = read_items(Some(Path::new("/nonexistent/items.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/items.json"), "{err}");
    }
}
