use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub services: Vec<String>,
    pub description: String,
    pub client_count: u32,
    pub revenue: f64,
}

/// A signed-up pet owner. `plan` is the plan's display name, not its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub pets: Vec<String>,
    pub plan: String,
    pub join_date: NaiveDate,
}

/// The unit that is read and written as a whole under the data key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, alias = "vetPlans")]
    pub plans: Vec<Plan>,
    #[serde(default)]
    pub clients: Vec<Client>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanPreview {
    pub name: String,
    pub price: u32,
    pub services: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub pet_name: Option<String>,
    pub pet_type: Option<String>,
    pub pet_age: Option<String>,
    pub plan_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupReceipt {
    pub plan_id: String,
    /// `None` when the selected id no longer matches a stored plan.
    pub plan: Option<Plan>,
    pub redirect_to: String,
}
