pub mod metrics;
pub mod pages;
pub mod plan_builder;
pub mod report;
pub mod share;
pub mod store;

pub use crate::domain::model::{Client, Plan, PlanPreview, SignupReceipt, SignupRequest, Snapshot};
pub use crate::domain::ports::{ConfigProvider, KeyValueStore};
pub use crate::utils::error::Result;
