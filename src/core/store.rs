use crate::core::metrics::{find_plan, DashboardMetrics};
use crate::core::plan_builder::{clean_services, next_plan_id, validate_plan_input};
use crate::domain::model::{Client, Plan, SignupReceipt, SignupRequest, Snapshot};
use crate::domain::ports::{ConfigProvider, KeyValueStore};
use crate::utils::error::{PawPlanError, Result};
use chrono::{NaiveDate, Utc};

pub const DEFAULT_DATA_KEY: &str = "pawplan_demo_data";
pub const DEFAULT_DEMO_MODE_KEY: &str = "pawplan_demo_mode";
pub const DEFAULT_PLAN_DESCRIPTION: &str = "Custom veterinary care plan";
pub const SIGNUP_REDIRECT: &str = "client-dashboard.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub data_key: String,
    pub demo_mode_key: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            data_key: DEFAULT_DATA_KEY.to_string(),
            demo_mode_key: DEFAULT_DEMO_MODE_KEY.to_string(),
        }
    }
}

impl StoreSettings {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            data_key: config.data_key().to_string(),
            demo_mode_key: config.demo_mode_key().to_string(),
        }
    }
}

/// The snapshot written the first time no data exists under the data key.
pub fn seed_snapshot() -> Snapshot {
    Snapshot {
        plans: vec![
            Plan {
                id: "plan_001".to_string(),
                name: "Essential Care".to_string(),
                price: 49,
                services: strings(&["Annual Exam", "Vaccinations", "Flea/Tick Prevention"]),
                description: "Basic preventive care for healthy pets".to_string(),
                client_count: 12,
                revenue: 588.0,
            },
            Plan {
                id: "plan_002".to_string(),
                name: "Premium Wellness".to_string(),
                price: 89,
                services: strings(&[
                    "Annual Exam",
                    "Vaccinations",
                    "Dental Cleaning",
                    "Blood Work",
                    "Unlimited Consultations",
                ]),
                description: "Comprehensive care for optimal pet health".to_string(),
                client_count: 8,
                revenue: 712.0,
            },
        ],
        clients: vec![
            Client {
                id: "client_001".to_string(),
                name: "Sarah Johnson".to_string(),
                email: "sarah.j@email.com".to_string(),
                pets: strings(&["Max (Golden Retriever)", "Luna (Cat)"]),
                plan: "Premium Wellness".to_string(),
                join_date: seed_date(2024, 1, 15),
            },
            Client {
                id: "client_002".to_string(),
                name: "Mike Chen".to_string(),
                email: "mike.chen@email.com".to_string(),
                pets: strings(&["Bella (Beagle)"]),
                plan: "Essential Care".to_string(),
                join_date: seed_date(2024, 2, 3),
            },
        ],
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Plans and clients persisted as one snapshot behind a [`KeyValueStore`].
///
/// Every mutation is a full read-modify-write of the snapshot: the latest
/// stored state is read, changed in memory and written back whole. With more
/// than one writer the last write wins.
#[derive(Debug)]
pub struct DemoStore<S: KeyValueStore> {
    storage: S,
    settings: StoreSettings,
}

impl<S: KeyValueStore> DemoStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_settings(storage, StoreSettings::default())
    }

    pub fn with_settings(storage: S, settings: StoreSettings) -> Self {
        Self { storage, settings }
    }

    /// Returns the stored snapshot, writing the seed first if nothing is stored.
    pub fn load_or_seed(&self) -> Result<Snapshot> {
        if self.storage.get(&self.settings.data_key)?.is_none() {
            self.save(&seed_snapshot())?;
            tracing::info!("Seeded demo data under '{}'", self.settings.data_key);
        }

        let raw = self
            .storage
            .get(&self.settings.data_key)?
            .ok_or_else(|| PawPlanError::storage("snapshot vanished right after seeding"))?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        tracing::debug!(
            "Loaded {} plans and {} clients",
            snapshot.plans.len(),
            snapshot.clients.len()
        );
        Ok(snapshot)
    }

    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let raw = serde_json::to_string(snapshot)?;
        self.storage.set(&self.settings.data_key, &raw)
    }

    pub fn plans(&self) -> Result<Vec<Plan>> {
        Ok(self.load_or_seed()?.plans)
    }

    pub fn clients(&self) -> Result<Vec<Client>> {
        Ok(self.load_or_seed()?.clients)
    }

    pub fn metrics(&self) -> Result<DashboardMetrics> {
        Ok(DashboardMetrics::from_plans(&self.plans()?))
    }

    /// Looks a plan up in the latest snapshot.
    pub fn get_plan(&self, id: &str) -> Result<Plan> {
        let plans = self.plans()?;
        find_plan(&plans, id)
            .cloned()
            .ok_or_else(|| PawPlanError::PlanNotFound { id: id.to_string() })
    }

    /// Appends a plan with no clients and no revenue yet. Invalid input is
    /// rejected before anything is read or written.
    pub fn create_plan(&self, name: &str, price: i64, services: Vec<String>) -> Result<Plan> {
        let services = clean_services(services);
        let price = validate_plan_input(name, price, &services)?;

        let mut snapshot = self.load_or_seed()?;
        let plan = Plan {
            id: next_plan_id(&snapshot.plans, Utc::now().timestamp_millis()),
            name: name.trim().to_string(),
            price,
            services,
            description: DEFAULT_PLAN_DESCRIPTION.to_string(),
            client_count: 0,
            revenue: 0.0,
        };
        snapshot.plans.push(plan.clone());
        self.save(&snapshot)?;

        tracing::info!("Created plan '{}' ({}) at ${}/month", plan.name, plan.id, plan.price);
        Ok(plan)
    }

    /// Drops the stored snapshot; the next read writes the seed again.
    pub fn reset(&self) -> Result<()> {
        self.storage.clear(&self.settings.data_key)?;
        tracing::info!("Cleared demo data under '{}'", self.settings.data_key);
        Ok(())
    }

    pub fn is_demo_mode(&self) -> Result<bool> {
        Ok(self.storage.get(&self.settings.demo_mode_key)?.as_deref() == Some("true"))
    }

    pub fn set_demo_mode(&self, enabled: bool) -> Result<()> {
        let value = if enabled { "true" } else { "false" };
        self.storage.set(&self.settings.demo_mode_key, value)?;
        tracing::info!("Demo mode {}", if enabled { "enabled" } else { "disabled" });
        Ok(())
    }

    pub fn toggle_demo_mode(&self) -> Result<bool> {
        let enabled = !self.is_demo_mode()?;
        self.set_demo_mode(enabled)?;
        Ok(enabled)
    }

    /// Accepts the signup form once a plan is selected. No client record is
    /// written; the receipt only carries where to go next.
    pub fn submit_signup(&self, request: &SignupRequest) -> Result<SignupReceipt> {
        let plan_id = request
            .plan_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| PawPlanError::validation("planId", "Please select a membership plan"))?;

        let plans = self.plans()?;
        let plan = find_plan(&plans, plan_id).cloned();
        if plan.is_none() {
            tracing::warn!("Signup selected unknown plan '{}'", plan_id);
        }
        tracing::info!("Signup accepted for {} <{}>", request.name, request.email);

        Ok(SignupReceipt {
            plan_id: plan_id.to_string(),
            plan,
            redirect_to: SIGNUP_REDIRECT.to_string(),
        })
    }
}
