pub mod promise;
pub mod authority;

pub use promise::{Promise, PromiseBuilder, PromiseSourceClient};
pub use authority::{
    OrderAuthorityClient, OrderCondition, OrderResult, OrderResultItem, OrderShipment, ShipmentItem,
};

/// "Not found" is never an error here; lookups return `Ok(None)` for it.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// An upstream collaborator call failed (network, deserialization, ...)
    #[error("Upstream service {service} failed: {message}")]
    Upstream { service: String, message: String },
}

impl CoreError {
    pub fn upstream(service: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::Upstream {
            service: service.into(),
            message: message.into(),
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
