//! Business Central ERP flows

pub mod executor;
pub mod oauth;

pub use executor::{BusinessCentralExecutor, CREATE_CUSTOMER};
pub use oauth::acquire_token;
