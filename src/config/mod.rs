pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::report::ExportFormat;
#[cfg(feature = "cli")]
use crate::core::store::{DEFAULT_DATA_KEY, DEFAULT_DEMO_MODE_KEY};
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pawplan")]
#[command(about = "Demo store for veterinary membership plans")]
pub struct CliConfig {
    #[arg(long, default_value = "./.pawplan")]
    pub data_dir: String,

    #[arg(long, help = "TOML config file; overrides the flags above")]
    pub config: Option<String>,

    #[arg(long, default_value = "http://localhost:8000")]
    pub origin: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List membership plans
    Plans,
    /// List clients
    Clients,
    /// Show total revenue and client count
    Metrics,
    /// Create a new plan
    CreatePlan {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, allow_hyphen_values = true)]
        price: i64,
        #[arg(long, value_delimiter = ',')]
        services: Vec<String>,
    },
    /// Look up a plan by id
    FindPlan { id: String },
    /// Print the signup link for a plan
    ShareLink { id: String },
    /// Preview a plan without saving it
    Preview {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long, value_delimiter = ',')]
        services: Vec<String>,
    },
    /// Submit the client signup form
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        pet_name: Option<String>,
        #[arg(long)]
        pet_type: Option<String>,
        #[arg(long)]
        pet_age: Option<String>,
        #[arg(long)]
        plan_id: Option<String>,
    },
    /// Show or change the demo mode flag
    DemoMode {
        #[arg(value_enum, default_value_t = DemoModeAction::Status)]
        action: DemoModeAction,
    },
    /// Export plans or clients as CSV/TSV
    Export {
        #[arg(value_enum)]
        target: ExportTarget,
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },
    /// Drop the stored snapshot; the next read re-seeds it
    Reset,
    /// Show the data a page path would render
    Page {
        path: String,
        #[arg(long)]
        link: Option<String>,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoModeAction {
    Status,
    On,
    Off,
    Toggle,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    Plans,
    Clients,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn data_key(&self) -> &str {
        DEFAULT_DATA_KEY
    }

    fn demo_mode_key(&self) -> &str {
        DEFAULT_DEMO_MODE_KEY
    }

    fn share_origin(&self) -> &str {
        &self.origin
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("data_dir", &self.data_dir)?;
        validation::validate_url("origin", &self.origin)?;
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        Ok(())
    }
}
