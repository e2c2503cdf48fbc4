use crate::core::metrics::find_plan;
use crate::domain::model::Plan;
use crate::utils::error::{PawPlanError, Result};
use crate::utils::validation::validate_url;
use url::Url;

pub const SIGNUP_PAGE: &str = "client-signup.html";
pub const PLAN_ID_PARAM: &str = "planId";

/// `<origin>/client-signup.html?planId=<id>`
pub fn share_link(origin: &str, plan_id: &str) -> Result<Url> {
    let mut url = validate_url("origin", origin)?;

    url.path_segments_mut()
        .map_err(|_| PawPlanError::ConfigError {
            message: format!("Origin cannot carry a path: {}", origin),
        })?
        .pop_if_empty()
        .push(SIGNUP_PAGE);
    url.set_fragment(None);
    url.query_pairs_mut()
        .clear()
        .append_pair(PLAN_ID_PARAM, plan_id);

    Ok(url)
}

/// Accepts a full link, a relative link, or a bare query string like `?planId=plan_001`.
pub fn plan_id_from_link(link: &str) -> Option<String> {
    let url = Url::parse(link)
        .or_else(|_| Url::parse("http://localhost/").and_then(|base| base.join(link)))
        .ok()?;

    url.query_pairs()
        .find(|(key, _)| key == PLAN_ID_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

pub fn preselect_plan<'a>(plans: &'a [Plan], link: &str) -> Option<&'a Plan> {
    let plan_id = plan_id_from_link(link)?;
    find_plan(plans, &plan_id)
}
