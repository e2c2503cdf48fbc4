use crate::core::metrics::{find_plan_by_name, DashboardMetrics};
use crate::core::share::preselect_plan;
use crate::core::store::DemoStore;
use crate::domain::model::{Client, Plan};
use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use serde::Serialize;

/// Client shown on the client dashboard when no one is signed in.
pub const DEMO_CLIENT_ID: &str = "client_001";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    VetDashboard,
    ClientSignup,
    ClientDashboard,
    Other,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        if path.contains("vet-dashboard.html") {
            Page::VetDashboard
        } else if path.contains("client-signup.html") {
            Page::ClientSignup
        } else if path.contains("client-dashboard.html") {
            Page::ClientDashboard
        } else {
            Page::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VetDashboardView {
    pub plans: Vec<Plan>,
    pub clients: Vec<Client>,
    pub metrics: DashboardMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientSignupView {
    pub plans: Vec<Plan>,
    pub preselected: Option<Plan>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientDashboardView {
    pub client: Option<Client>,
    pub membership: Option<Plan>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum PageView {
    VetDashboard(VetDashboardView),
    ClientSignup(ClientSignupView),
    ClientDashboard(ClientDashboardView),
    Other,
}

/// Assembles the data a page renders. `link` is the page's own URL, used to
/// preselect a plan on the signup page.
pub fn build_view<S: KeyValueStore>(
    store: &DemoStore<S>,
    page: Page,
    link: Option<&str>,
) -> Result<PageView> {
    let view = match page {
        Page::VetDashboard => {
            let snapshot = store.load_or_seed()?;
            let metrics = DashboardMetrics::from_plans(&snapshot.plans);
            PageView::VetDashboard(VetDashboardView {
                plans: snapshot.plans,
                clients: snapshot.clients,
                metrics,
            })
        }
        Page::ClientSignup => {
            let plans = store.plans()?;
            let preselected = link.and_then(|l| preselect_plan(&plans, l)).cloned();
            PageView::ClientSignup(ClientSignupView { plans, preselected })
        }
        Page::ClientDashboard => {
            let snapshot = store.load_or_seed()?;
            let client = snapshot
                .clients
                .into_iter()
                .find(|c| c.id == DEMO_CLIENT_ID);
            let membership = client
                .as_ref()
                .and_then(|c| find_plan_by_name(&snapshot.plans, &c.plan))
                .cloned();
            PageView::ClientDashboard(ClientDashboardView { client, membership })
        }
        Page::Other => PageView::Other,
    };
    Ok(view)
}
