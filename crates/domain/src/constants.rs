//! Connector constants
//!
//! Centralized location for the wire constants shared by the commerce and
//! Business Central flows.

// Commerce API
/// `requestType` sent with every scheduler request and API context.
pub const REQUEST_TYPE_SOURCE: &str = "Source";
/// Refresh-token exchange path, relative to the commerce base URL.
pub const TOKEN_PATH: &str = "/api/client/Token";
/// Scheduler id resolution path, relative to the commerce base URL.
pub const SCHEDULER_PATH: &str = "/api/Index";
/// Packet size used when an item does not set one.
pub const DEFAULT_PACKET_SIZE: i64 = 5;

// Diagnostics
/// Number of bearer-token characters echoed in responses.
pub const TOKEN_PREVIEW_LEN: usize = 20;
/// Appended to the truncated token preview.
pub const TOKEN_PREVIEW_SUFFIX: &str = "...";

// Business Central
/// Microsoft identity platform host.
pub const BC_LOGIN_BASE_URL: &str = "https://login.microsoftonline.com";
/// Business Central API root, without tenant or environment.
pub const BC_API_BASE_URL: &str = "https://api.businesscentral.dynamics.com/v2.0";
/// Scope requested by the client-credentials grant.
pub const BC_OAUTH_SCOPE: &str = "https://api.businesscentral.dynamics.com/.default";
/// Environment used when credentials do not name one.
pub const DEFAULT_BC_ENVIRONMENT: &str = "N8N";

// Dispatcher error labels
/// `error` of a response for an operation the resource does not know.
pub const INVALID_OPERATION: &str = "Invalid operation specified";
/// `error` of a response for an unknown resource.
pub const INVALID_RESOURCE: &str = "Invalid resource specified";
