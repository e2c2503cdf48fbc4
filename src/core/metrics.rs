use crate::domain::model::Plan;
use serde::Serialize;

pub fn aggregate_revenue(plans: &[Plan]) -> f64 {
    plans.iter().map(|p| p.revenue).sum()
}

pub fn aggregate_clients(plans: &[Plan]) -> u64 {
    plans.iter().map(|p| u64::from(p.client_count)).sum()
}

pub fn find_plan<'a>(plans: &'a [Plan], id: &str) -> Option<&'a Plan> {
    plans.iter().find(|p| p.id == id)
}

/// Clients reference plans by display name; the first match wins.
pub fn find_plan_by_name<'a>(plans: &'a [Plan], name: &str) -> Option<&'a Plan> {
    plans.iter().find(|p| p.name == name)
}

/// Headline numbers of the vet dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_revenue: f64,
    pub total_clients: u64,
    pub plan_count: usize,
}

impl DashboardMetrics {
    pub fn from_plans(plans: &[Plan]) -> Self {
        Self {
            total_revenue: aggregate_revenue(plans),
            total_clients: aggregate_clients(plans),
            plan_count: plans.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(id: &str, client_count: u32, revenue: f64) -> Plan {
        Plan {
            id: id.to_string(),
            name: format!("Plan {}", id),
            price: 10,
            services: vec!["Exam".to_string()],
            description: String::new(),
            client_count,
            revenue,
        }
    }

    #[test]
    fn test_empty_aggregates_are_zero() {
        assert_eq!(aggregate_revenue(&[]), 0.0);
        assert_eq!(aggregate_clients(&[]), 0);
        let metrics = DashboardMetrics::from_plans(&[]);
        assert_eq!(metrics.plan_count, 0);
    }

    #[test]
    fn test_aggregates_are_additive() {
        let left = vec![plan("a", 12, 588.0), plan("b", 8, 712.0)];
        let right = vec![plan("c", 3, 147.0)];
        let mut both = left.clone();
        both.extend(right.clone());

        assert_eq!(
            aggregate_revenue(&both),
            aggregate_revenue(&left) + aggregate_revenue(&right)
        );
        assert_eq!(
            aggregate_clients(&both),
            aggregate_clients(&left) + aggregate_clients(&right)
        );
        assert_eq!(aggregate_revenue(&both), 1447.0);
        assert_eq!(aggregate_clients(&both), 23);
    }

    #[test]
    fn test_find_plan() {
        let plans = vec![plan("a", 0, 0.0), plan("b", 0, 0.0)];
        assert_eq!(find_plan(&plans, "b").map(|p| p.id.as_str()), Some("b"));
        assert!(find_plan(&plans, "nonexistent").is_none());
        assert_eq!(find_plan_by_name(&plans, "Plan a").map(|p| p.id.as_str()), Some("a"));
    }
}
