use pawplan::core::store::{DEFAULT_DATA_KEY, DEFAULT_PLAN_DESCRIPTION};
use pawplan::{
    aggregate_clients, aggregate_revenue, find_plan, DemoStore, KeyValueStore, MemoryStorage,
    PawPlanError, SignupRequest,
};

fn services(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_seed_written_once_and_idempotent() {
    let storage = MemoryStorage::new();
    let store = DemoStore::new(&storage);
    assert!(storage.get(DEFAULT_DATA_KEY).unwrap().is_none());

    let first = store.load_or_seed().unwrap();
    let stored_after_first = storage.get(DEFAULT_DATA_KEY).unwrap();
    let second = store.load_or_seed().unwrap();
    let stored_after_second = storage.get(DEFAULT_DATA_KEY).unwrap();

    assert_eq!(first, second);
    assert!(stored_after_first.is_some());
    assert_eq!(stored_after_first, stored_after_second);
    assert_eq!(first.plans.len(), 2);
    assert_eq!(first.clients.len(), 2);
}

#[test]
fn test_existing_snapshot_is_not_overwritten() {
    let storage = MemoryStorage::new();
    storage
        .set(DEFAULT_DATA_KEY, r#"{"plans":[],"clients":[]}"#)
        .unwrap();

    let store = DemoStore::new(&storage);
    let snapshot = store.load_or_seed().unwrap();
    assert!(snapshot.plans.is_empty());
    assert!(snapshot.clients.is_empty());
}

#[test]
fn test_malformed_snapshot_is_serialization_error() {
    let storage = MemoryStorage::new();
    storage.set(DEFAULT_DATA_KEY, "{not json").unwrap();

    let store = DemoStore::new(&storage);
    let err = store.load_or_seed().unwrap_err();
    assert!(matches!(err, PawPlanError::SerializationError(_)));
}

#[test]
fn test_seeded_aggregates() {
    let store = DemoStore::new(MemoryStorage::new());
    let plans = store.plans().unwrap();

    assert_eq!(aggregate_revenue(&plans), 1300.0);
    assert_eq!(aggregate_clients(&plans), 20);

    let metrics = store.metrics().unwrap();
    assert_eq!(metrics.total_revenue, 1300.0);
    assert_eq!(metrics.total_clients, 20);
    assert_eq!(metrics.plan_count, 2);
}

#[test]
fn test_create_plan_appends_one_plan() {
    let store = DemoStore::new(MemoryStorage::new());
    let before = store.plans().unwrap();

    let plan = store
        .create_plan("Basic", 49, services(&["Exam"]))
        .unwrap();

    assert_eq!(plan.name, "Basic");
    assert_eq!(plan.price, 49);
    assert_eq!(plan.services, services(&["Exam"]));
    assert_eq!(plan.client_count, 0);
    assert_eq!(plan.revenue, 0.0);
    assert_eq!(plan.description, DEFAULT_PLAN_DESCRIPTION);
    assert!(plan.id.starts_with("plan_"));
    assert!(before.iter().all(|p| p.id != plan.id));

    let after = store.plans().unwrap();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last(), Some(&plan));
    assert_eq!(&after[..before.len()], &before[..]);
}

#[test]
fn test_create_plan_ids_are_unique() {
    let store = DemoStore::new(MemoryStorage::new());
    let mut ids = Vec::new();
    for i in 0..20 {
        let plan = store
            .create_plan(&format!("Plan {}", i), 10 + i, services(&["Exam"]))
            .unwrap();
        ids.push(plan.id);
    }

    let plans = store.plans().unwrap();
    let mut all_ids: Vec<&str> = plans.iter().map(|p| p.id.as_str()).collect();
    all_ids.sort_unstable();
    all_ids.dedup();
    assert_eq!(all_ids.len(), plans.len());
    assert_eq!(plans.len(), 22);
}

#[test]
fn test_invalid_create_plan_leaves_store_unchanged() {
    let storage = MemoryStorage::new();
    let store = DemoStore::new(&storage);
    store.load_or_seed().unwrap();
    let stored_before = storage.get(DEFAULT_DATA_KEY).unwrap();

    let attempts = [
        store.create_plan("", 49, services(&["Exam"])),
        store.create_plan("Basic", 0, services(&["Exam"])),
        store.create_plan("Basic", 49, vec![]),
        store.create_plan("Basic", 49, services(&["", "  "])),
    ];
    for attempt in attempts {
        assert!(matches!(attempt, Err(PawPlanError::ValidationError { .. })));
    }

    assert_eq!(storage.get(DEFAULT_DATA_KEY).unwrap(), stored_before);
}

#[test]
fn test_create_plan_drops_blank_services() {
    let store = DemoStore::new(MemoryStorage::new());
    let plan = store
        .create_plan("Basic", 49, services(&["Exam", ""]))
        .unwrap();

    assert_eq!(plan.services, services(&["Exam"]));
    assert_eq!(store.plans().unwrap().last(), Some(&plan));
}

#[test]
fn test_invalid_create_plan_does_not_seed() {
    let storage = MemoryStorage::new();
    let store = DemoStore::new(&storage);

    assert!(store.create_plan("", 49, services(&["Exam"])).is_err());
    assert!(storage.is_empty().unwrap());
}

#[test]
fn test_find_plan_on_seed() {
    let store = DemoStore::new(MemoryStorage::new());
    let plans = store.plans().unwrap();

    let found = find_plan(&plans, "plan_001").unwrap();
    assert_eq!(found.name, "Essential Care");
    assert!(find_plan(&plans, "nonexistent").is_none());

    assert_eq!(store.get_plan("plan_002").unwrap().name, "Premium Wellness");
    assert!(matches!(
        store.get_plan("nonexistent"),
        Err(PawPlanError::PlanNotFound { .. })
    ));
}

#[test]
fn test_reset_reseeds_on_next_read() {
    let storage = MemoryStorage::new();
    let store = DemoStore::new(&storage);
    store.create_plan("Basic", 49, services(&["Exam"])).unwrap();
    assert_eq!(store.plans().unwrap().len(), 3);

    store.reset().unwrap();
    assert!(storage.get(DEFAULT_DATA_KEY).unwrap().is_none());
    assert_eq!(store.plans().unwrap().len(), 2);
}

#[test]
fn test_demo_mode_flag() {
    let storage = MemoryStorage::new();
    let store = DemoStore::new(&storage);

    assert!(!store.is_demo_mode().unwrap());
    assert!(store.toggle_demo_mode().unwrap());
    assert!(store.is_demo_mode().unwrap());
    assert_eq!(
        storage.get("pawplan_demo_mode").unwrap().as_deref(),
        Some("true")
    );

    store.set_demo_mode(false).unwrap();
    assert_eq!(
        storage.get("pawplan_demo_mode").unwrap().as_deref(),
        Some("false")
    );
    assert!(!store.is_demo_mode().unwrap());

    // anything but the exact string "true" is off
    storage.set("pawplan_demo_mode", "TRUE").unwrap();
    assert!(!store.is_demo_mode().unwrap());
}

#[test]
fn test_signup_requires_plan() {
    let storage = MemoryStorage::new();
    let store = DemoStore::new(&storage);
    let mut request = SignupRequest {
        name: "Ana Ruiz".to_string(),
        email: "ana@example.com".to_string(),
        pet_name: Some("Toby".to_string()),
        ..SignupRequest::default()
    };

    let err = store.submit_signup(&request).unwrap_err();
    assert_eq!(err.user_friendly_message(), "Please select a membership plan");

    request.plan_id = Some("plan_002".to_string());
    let receipt = store.submit_signup(&request).unwrap();
    assert_eq!(receipt.plan_id, "plan_002");
    assert_eq!(receipt.plan.map(|p| p.name).as_deref(), Some("Premium Wellness"));
    assert_eq!(receipt.redirect_to, "client-dashboard.html");

    // signup never writes client records
    assert_eq!(store.clients().unwrap().len(), 2);
}

#[test]
fn test_signup_with_unknown_plan_still_accepted() {
    let store = DemoStore::new(MemoryStorage::new());
    let request = SignupRequest {
        name: "Ana Ruiz".to_string(),
        email: "ana@example.com".to_string(),
        plan_id: Some("plan_gone".to_string()),
        ..SignupRequest::default()
    };

    let receipt = store.submit_signup(&request).unwrap();
    assert_eq!(receipt.plan_id, "plan_gone");
    assert!(receipt.plan.is_none());
}
