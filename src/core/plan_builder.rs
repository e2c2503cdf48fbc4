use crate::domain::model::{Plan, PlanPreview};
use crate::utils::error::{PawPlanError, Result};

pub const PREVIEW_PLACEHOLDER_NAME: &str = "New Plan";

const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";

/// Checks the plan builder form and returns the accepted monthly price.
pub fn validate_plan_input(name: &str, price: i64, services: &[String]) -> Result<u32> {
    if name.trim().is_empty() {
        return Err(PawPlanError::validation("name", MISSING_FIELDS_MESSAGE));
    }

    let price = match u32::try_from(price) {
        Ok(p) if p > 0 => p,
        _ => return Err(PawPlanError::validation("price", MISSING_FIELDS_MESSAGE)),
    };

    if services.is_empty() {
        return Err(PawPlanError::validation("services", MISSING_FIELDS_MESSAGE));
    }

    Ok(price)
}

/// Trims service names and drops blank ones, so `"Exam,"` on the command line is just `Exam`.
pub fn clean_services(services: Vec<String>) -> Vec<String> {
    services
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// `plan_<millis>`, bumped past any id already taken.
pub fn next_plan_id(existing: &[Plan], millis: i64) -> String {
    let mut stamp = millis;
    loop {
        let candidate = format!("plan_{}", stamp);
        if !existing.iter().any(|p| p.id == candidate) {
            return candidate;
        }
        stamp += 1;
    }
}

/// Live preview of the plan builder form. Never fails: a blank name shows the
/// placeholder and an unreadable price shows as 0.
pub fn preview_plan(name: Option<&str>, price: Option<&str>, services: &[String]) -> PlanPreview {
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(PREVIEW_PLACEHOLDER_NAME)
        .to_string();

    let price = price
        .and_then(parse_leading_int)
        .map(|p| p.clamp(0, i64::from(u32::MAX)) as u32)
        .unwrap_or(0);

    PlanPreview {
        name,
        price,
        services: clean_services(services.to_vec()),
    }
}

/// Reads an optionally signed run of digits at the start of `raw`, so "49/month" is 49.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // saturate instead of overflowing on absurd input
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * value)
}
