pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::MemoryStorage;
pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::metrics::{aggregate_clients, aggregate_revenue, find_plan, DashboardMetrics};
pub use crate::core::plan_builder::preview_plan;
pub use crate::core::store::{seed_snapshot, DemoStore, StoreSettings};
pub use crate::core::{Client, ConfigProvider, KeyValueStore, Plan, SignupRequest, Snapshot};
pub use crate::utils::error::{PawPlanError, Result};
