mod common;

use trackme::{
    auth,
    core::services::{EntryService, FlowService},
    domain::{Month, Period, TOTAL_INCOME_LABEL},
    session::Session,
    store::{Collection, DocumentStore},
};

const MARCH_INCOMES: [(&str, i64); 3] = [("Salary", 5000), ("Business", 0), ("Other Income", 0)];
const MARCH_EXPENSES: [(&str, i64); 6] = [
    ("Rent", 1500),
    ("Utilities", 200),
    ("Groceries", 300),
    ("Car", 0),
    ("Savings", 1000),
    ("Other Expenses", 0),
];

#[test]
fn full_journey_from_sign_up_to_plot_and_logout() {
    let (mut store, mut directory, _config) = common::setup_test_env();

    // Sign-up alone leaves the visitor anonymous; login authenticates.
    auth::sign_up(&mut directory, "me@example.com", "pw").expect("sign up");
    let mut session = Session::new();
    assert!(!session.is_authenticated());
    let user = auth::login(&directory, &mut session, "me@example.com").expect("login");
    assert_eq!(session.user(), Some(user));

    let period = Period::new(2024, Month::March);
    EntryService::save_entry(&mut store, user, &period, &MARCH_INCOMES, &MARCH_EXPENSES)
        .expect("save entry");

    let periods = EntryService::list_periods(&store).expect("list periods");
    assert_eq!(periods, vec!["2024_March".to_string()]);

    let incomes =
        EntryService::period_data(&store, Collection::Incomes, "2024_March").expect("incomes");
    let expenses =
        EntryService::period_data(&store, Collection::Expenses, "2024_March").expect("expenses");

    let summary = FlowService::summarize(&incomes, &expenses);
    assert_eq!(summary.total_income, 5000);
    assert_eq!(summary.total_expense, 3000);
    assert_eq!(summary.remaining, 2000);

    let diagram = FlowService::diagram(&incomes, &expenses);
    assert_eq!(diagram.labels.len(), 9);
    assert_eq!(diagram.links.len(), 6);
    assert!(diagram.labels.contains(&TOTAL_INCOME_LABEL.to_string()));

    session.clear();
    assert!(!session.is_authenticated(), "gate must route back to auth");
}

#[test]
fn repeated_saves_leave_store_identical_to_one_save() {
    let (mut store, mut directory, _config) = common::setup_test_env();
    auth::sign_up(&mut directory, "me@example.com", "pw").expect("sign up");
    let mut session = Session::new();
    let user = auth::login(&directory, &mut session, "me@example.com").expect("login");

    let period = Period::new(2024, Month::March);
    EntryService::save_entry(&mut store, user, &period, &MARCH_INCOMES, &MARCH_EXPENSES)
        .expect("first save");
    let after_first = (
        store.list_documents(Collection::Incomes).expect("incomes"),
        store.list_documents(Collection::Expenses).expect("expenses"),
    );

    EntryService::save_entry(&mut store, user, &period, &MARCH_INCOMES, &MARCH_EXPENSES)
        .expect("second save");
    let after_second = (
        store.list_documents(Collection::Incomes).expect("incomes"),
        store.list_documents(Collection::Expenses).expect("expenses"),
    );

    assert_eq!(after_first, after_second);
}

#[test]
fn periods_are_visible_across_users() {
    let (mut store, mut directory, _config) = common::setup_test_env();

    auth::sign_up(&mut directory, "alice@example.com", "pw").expect("sign up alice");
    auth::sign_up(&mut directory, "bob@example.com", "pw").expect("sign up bob");

    let mut alice = Session::new();
    let alice_id = auth::login(&directory, &mut alice, "alice@example.com").expect("login alice");
    EntryService::save_entry(
        &mut store,
        alice_id,
        &Period::new(2024, Month::January),
        &MARCH_INCOMES,
        &MARCH_EXPENSES,
    )
    .expect("alice saves");

    // Bob lists and plots Alice's period; there is no ownership filter.
    let mut bob = Session::new();
    auth::login(&directory, &mut bob, "bob@example.com").expect("login bob");
    let periods = EntryService::list_periods(&store).expect("list");
    assert_eq!(periods, vec!["2024_January".to_string()]);
    let incomes =
        EntryService::period_data(&store, Collection::Incomes, "2024_January").expect("read");
    assert_eq!(incomes.get("Salary"), Some(&5000));
}
