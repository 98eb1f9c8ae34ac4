pub mod entry_service;
pub mod flow_service;

pub use entry_service::EntryService;
pub use flow_service::{BudgetSummary, FlowDiagram, FlowLink, FlowService};

use crate::errors::StoreError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{0}")]
    Invalid(String),
}
