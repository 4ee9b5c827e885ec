//! `operations` - list the operation catalog

use std::str::FromStr;

use anyhow::anyhow;
use i95connect_domain::{operations, operations_for, OperationDescriptor, Resource};
use serde::Serialize;

use crate::cli::OperationsArgs;

/// One catalog row as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationListing {
    /// Operation id passed to `run --operation`.
    pub id: &'static str,
    /// Wire resource name.
    pub resource: &'static str,
    /// Target entity.
    pub entity: &'static str,
    /// Executor family.
    pub family: &'static str,
    /// Human-readable name.
    pub display_name: &'static str,
    /// Short action description.
    pub action: &'static str,
}

impl From<&OperationDescriptor> for OperationListing {
    fn from(op: &OperationDescriptor) -> Self {
        Self {
            id: op.id,
            resource: op.resource().as_str(),
            entity: op.entity.as_str(),
            family: op.family.as_str(),
            display_name: op.display_name,
            action: op.action,
        }
    }
}

/// Render the (optionally filtered) catalog.
///
/// # Errors
/// Fails on an unknown resource filter.
pub fn execute(args: &OperationsArgs) -> anyhow::Result<String> {
    let listing = list(args.resource.as_deref())?;
    super::render(&listing, args.pretty)
}

/// Catalog rows, optionally filtered by resource (case-insensitive).
///
/// # Errors
/// Fails when `resource` names no known resource.
pub fn list(resource: Option<&str>) -> anyhow::Result<Vec<OperationListing>> {
    let rows = match resource {
        Some(name) => {
            let resource = Resource::from_str(name).map_err(|err| anyhow!(err))?;
            operations_for(resource).map(OperationListing::from).collect()
        }
        None => operations().iter().map(OperationListing::from).collect(),
    };
    Ok(rows)
}
