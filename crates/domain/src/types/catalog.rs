//! Operation catalog
//!
//! Static mapping from the operation ids the workflow host sends to the
//! entity type they touch and the call family that serves them. The table is
//! the single source of truth for routing and for the operation listing.

use serde::{Deserialize, Serialize};

use crate::impl_catalog_conversions;

/// Commerce entity being synchronized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    /// Catalog products.
    Product,
    /// Customer accounts.
    Customer,
    /// Sales orders.
    SalesOrder,
    /// Posted invoices.
    Invoice,
    /// Shipments.
    Shipment,
    /// Stock levels.
    Inventory,
}

impl_catalog_conversions!(EntityType {
    Product => "Product",
    Customer => "Customer",
    SalesOrder => "SalesOrder",
    Invoice => "Invoice",
    Shipment => "Shipment",
    Inventory => "Inventory",
});

impl EntityType {
    /// Every entity, in catalog order.
    pub const ALL: [Self; 6] = [
        Self::Product,
        Self::Customer,
        Self::SalesOrder,
        Self::Invoice,
        Self::Shipment,
        Self::Inventory,
    ];
}

/// Scheduler tag sent to `/api/Index` and echoed in the request context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchedulerType {
    /// Session for reading from the commerce side.
    PullData,
    /// Session for writing to the commerce side.
    PushData,
}

impl_catalog_conversions!(SchedulerType {
    PullData => "PullData",
    PushData => "PushData",
});

/// Top-level resource selected by the workflow host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// i95Dev commerce synchronization API.
    Ecommerce,
    /// Business Central actions.
    BcActions,
}

impl_catalog_conversions!(Resource {
    Ecommerce => "ecommerce",
    BcActions => "bcactions",
});

impl Resource {
    /// Every resource, in listing order.
    pub const ALL: [Self; 2] = [Self::Ecommerce, Self::BcActions];

    /// Resource for the exact value the workflow host sends.
    ///
    /// Unlike `FromStr`, which accepts any casing for user-facing filters,
    /// this only matches the canonical lower-case spelling.
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|resource| resource.as_str() == value)
    }
}

/// Shape of the body posted to the commerce entity endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeShape {
    /// `{ Context, RequestData, PacketSize, type }`
    Standard,
    /// `{ context, packetSize, requestData }` with lower-case keys
    PushResponse,
}

/// Structurally distinct call sequence serving an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    /// Pull entity data (`pull{E}Data`).
    PullData,
    /// Push entity data (`push{E}Data`).
    PushData,
    /// Pull entity responses (`pull{E}Response`).
    PullResponse,
    /// Push entity responses (`push{E}Response`).
    PushResponse,
    /// Create a customer in Business Central.
    BcCreateCustomer,
}

impl_catalog_conversions!(Family {
    PullData => "PullData",
    PushData => "PushData",
    PullResponse => "PullResponse",
    PushResponse => "PushResponse",
    BcCreateCustomer => "BcCreateCustomer",
});

impl Family {
    /// The four commerce families, in catalog order.
    pub const COMMERCE: [Self; 4] =
        [Self::PullData, Self::PushData, Self::PullResponse, Self::PushResponse];

    /// Resource the family belongs to.
    #[must_use]
    pub const fn resource(self) -> Resource {
        match self {
            Self::BcCreateCustomer => Resource::BcActions,
            _ => Resource::Ecommerce,
        }
    }

    /// Scheduler tag requested before the data call; `None` for the BC flow.
    #[must_use]
    pub const fn scheduler_type(self) -> Option<SchedulerType> {
        match self {
            Self::PullData | Self::PullResponse => Some(SchedulerType::PullData),
            Self::PushData | Self::PushResponse => Some(SchedulerType::PushData),
            Self::BcCreateCustomer => None,
        }
    }

    /// Last path segment of the entity endpoint.
    ///
    /// `PullResponse` posts to `PullData`; there is no `PullResponse` endpoint
    /// on the commerce API side.
    #[must_use]
    pub const fn endpoint_suffix(self) -> Option<&'static str> {
        match self {
            Self::PullData | Self::PullResponse => Some("PullData"),
            Self::PushData => Some("PushData"),
            Self::PushResponse => Some("PushResponse"),
            Self::BcCreateCustomer => None,
        }
    }

    /// Envelope shape; `None` for the BC flow.
    #[must_use]
    pub const fn envelope_shape(self) -> Option<EnvelopeShape> {
        match self {
            Self::PullData | Self::PushData | Self::PullResponse => Some(EnvelopeShape::Standard),
            Self::PushResponse => Some(EnvelopeShape::PushResponse),
            Self::BcCreateCustomer => None,
        }
    }

    /// Noun used in messages: `Data` or `Response`.
    #[must_use]
    pub const fn subject(self) -> &'static str {
        match self {
            Self::PullData | Self::PushData => "Data",
            Self::PullResponse | Self::PushResponse => "Response",
            Self::BcCreateCustomer => "Customer",
        }
    }

    /// Direction used in messages: `Pulled`/`pulling` or `Pushed`/`pushing`.
    const fn direction(self) -> (&'static str, &'static str) {
        match self {
            Self::PullData | Self::PullResponse => ("Pulled", "pulling"),
            Self::PushData | Self::PushResponse | Self::BcCreateCustomer => ("Pushed", "pushing"),
        }
    }

    /// `i95Dev API - {Entity} {Data|Response} {Pulled|Pushed} Successfully`
    #[must_use]
    pub fn success_message(self, entity_label: &str) -> String {
        let subject = self.subject();
        let (done, _) = self.direction();
        format!("i95Dev API - {entity_label} {subject} {done} Successfully")
    }

    /// `i95Dev API - Error {pulling|pushing} {Entity} {data|response}`
    #[must_use]
    pub fn failure_message(self, entity_label: &str) -> String {
        let subject = self.subject().to_ascii_lowercase();
        let (_, doing) = self.direction();
        format!("i95Dev API - Error {doing} {entity_label} {subject}")
    }
}

/// One row of the operation catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDescriptor {
    /// Operation id as sent by the workflow host (e.g. `pullProductData`).
    pub id: &'static str,
    /// Entity the operation touches.
    pub entity: EntityType,
    /// Call sequence serving the operation.
    pub family: Family,
    /// Human-readable option name.
    pub display_name: &'static str,
    /// One-line description of what the operation does.
    pub action: &'static str,
}

impl OperationDescriptor {
    const fn new(
        id: &'static str,
        entity: EntityType,
        family: Family,
        display_name: &'static str,
        action: &'static str,
    ) -> Self {
        Self { id, entity, family, display_name, action }
    }

    /// Resource this operation is listed under.
    #[must_use]
    pub const fn resource(&self) -> Resource {
        self.family.resource()
    }
}

use EntityType::{Customer, Inventory, Invoice, Product, SalesOrder, Shipment};
use Family::{BcCreateCustomer, PullData, PullResponse, PushData, PushResponse};

static OPERATIONS: [OperationDescriptor; 25] = [
    // Pull data
    OperationDescriptor::new("pullProductData", Product, PullData, "Pull Product Data", "Pull product data from i95Dev API"),
    OperationDescriptor::new("pullCustomerData", Customer, PullData, "Pull Customer Data", "Pull customer data from i95Dev API"),
    OperationDescriptor::new("pullSalesOrderData", SalesOrder, PullData, "Pull Sales Order Data", "Pull sales order data from i95Dev API"),
    OperationDescriptor::new("pullInvoiceData", Invoice, PullData, "Pull Invoice Data", "Pull invoice data from i95Dev API"),
    OperationDescriptor::new("pullShipmentData", Shipment, PullData, "Pull Shipment Data", "Pull shipment data from i95Dev API"),
    OperationDescriptor::new("pullInventoryData", Inventory, PullData, "Pull Inventory Data", "Pull inventory data from i95Dev API"),
    // Push data
    OperationDescriptor::new("pushProductData", Product, PushData, "Push Product Data", "Push product data to i95Dev API"),
    OperationDescriptor::new("pushCustomerData", Customer, PushData, "Push Customer Data", "Push customer data to i95Dev API"),
    OperationDescriptor::new("pushSalesOrderData", SalesOrder, PushData, "Push Sales Order Data", "Push sales order data to i95Dev API"),
    OperationDescriptor::new("pushInvoiceData", Invoice, PushData, "Push Invoice Data", "Push invoice data to i95Dev API"),
    OperationDescriptor::new("pushShipmentData", Shipment, PushData, "Push Shipment Data", "Push shipment data to i95Dev API"),
    OperationDescriptor::new("pushInventoryData", Inventory, PushData, "Push Inventory Data", "Push inventory data to i95Dev API"),
    // Pull response
    OperationDescriptor::new("pullProductResponse", Product, PullResponse, "Pull Product Response", "Pull product response from message queue"),
    OperationDescriptor::new("pullCustomerResponse", Customer, PullResponse, "Pull Customer Response", "Pull customer response from message queue"),
    OperationDescriptor::new("pullSalesOrderResponse", SalesOrder, PullResponse, "Pull Sales Order Response", "Pull sales order response from message queue"),
    OperationDescriptor::new("pullInvoiceResponse", Invoice, PullResponse, "Pull Invoice Response", "Pull invoice response from message queue"),
    OperationDescriptor::new("pullShipmentResponse", Shipment, PullResponse, "Pull Shipment Response", "Pull shipment response from message queue"),
    OperationDescriptor::new("pullInventoryResponse", Inventory, PullResponse, "Pull Inventory Response", "Pull inventory response from message queue"),
    // Push response
    OperationDescriptor::new("pushProductResponse", Product, PushResponse, "Push Product Response", "Push product response to message queue"),
    OperationDescriptor::new("pushCustomerResponse", Customer, PushResponse, "Push Customer Response", "Push customer response to message queue"),
    OperationDescriptor::new("pushSalesOrderResponse", SalesOrder, PushResponse, "Push Sales Order Response", "Push sales order response to message queue"),
    OperationDescriptor::new("pushInvoiceResponse", Invoice, PushResponse, "Push Invoice Response", "Push invoice response to message queue"),
    OperationDescriptor::new("pushShipmentResponse", Shipment, PushResponse, "Push Shipment Response", "Push shipment response to message queue"),
    OperationDescriptor::new("pushInventoryResponse", Inventory, PushResponse, "Push Inventory Response", "Push inventory response to message queue"),
    // Business Central
    OperationDescriptor::new("createCustomer", Customer, BcCreateCustomer, "Create Customer", "Create customer in Business Central"),
];

/// Label used when an operation id is not in the commerce table.
pub const UNKNOWN_ENTITY: &str = "Unknown";

/// All catalog rows, in listing order.
#[must_use]
pub fn operations() -> &'static [OperationDescriptor] {
    &OPERATIONS
}

/// Catalog rows listed under `resource`.
pub fn operations_for(resource: Resource) -> impl Iterator<Item = &'static OperationDescriptor> {
    OPERATIONS.iter().filter(move |descriptor| descriptor.resource() == resource)
}

/// Look up the catalog row for an operation id (exact match).
#[must_use]
pub fn describe(operation: &str) -> Option<&'static OperationDescriptor> {
    OPERATIONS.iter().find(|descriptor| descriptor.id == operation)
}

/// Classify an operation id into its entity type and family.
#[must_use]
pub fn classify(operation: &str) -> Option<(EntityType, Family)> {
    describe(operation).map(|descriptor| (descriptor.entity, descriptor.family))
}

/// Entity label for diagnostics; `"Unknown"` when the id is not a commerce
/// operation. Never fails.
///
/// The dispatcher attaches it to the log fields of every dispatched item.
#[must_use]
pub fn entity_type_label(operation: &str) -> &'static str {
    match describe(operation) {
        Some(descriptor) if descriptor.resource() == Resource::Ecommerce => {
            descriptor.entity.as_str()
        }
        _ => UNKNOWN_ENTITY,
    }
}
