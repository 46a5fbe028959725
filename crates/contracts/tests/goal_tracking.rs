use contracts::dashboards::d100_goal_tracking::summary::{revenue_status, RevenueStatus};
use contracts::dashboards::d100_goal_tracking::{
    DashboardState, EditSession, MetricField, MetricKey, MetricSet,
};

fn default_state() -> DashboardState {
    DashboardState::new(MetricSet::default(), "OUTUBRO DE 2026".to_string())
}

#[test]
fn default_revenue_scenario() {
    let set = MetricSet::default();
    assert_eq!(set.revenue.target, 230000.00);
    assert_eq!(set.revenue.current, 69634.24);
    assert!((set.revenue.progress_percent() - 30.28).abs() < 0.01);
    assert!((set.revenue.remaining() - 160365.76).abs() < 0.005);
    assert!(!set.revenue.is_goal_met());
}

#[test]
fn drinks_goal_met_scenario() {
    let set = MetricSet::default().with_value(MetricKey::Drinks, MetricField::Current, 3000.0);
    let drinks = set.get(MetricKey::Drinks);
    assert_eq!(drinks.target, 3000.0);
    assert!(drinks.is_goal_met());
    assert_eq!(drinks.remaining(), 0.0);
    assert_eq!(drinks.progress_percent(), 100.0);
}

#[test]
fn cancel_leaves_committed_set_unchanged() {
    let state = default_state();
    let snapshot = state.clone();

    let mut session = state.open_editor();
    session.set_field(MetricKey::Revenue, MetricField::Current, "R$ 1,00");
    session.set_field(MetricKey::Share, MetricField::Target, "99");
    session.set_period_label("rascunho");
    session.cancel();

    assert_eq!(state, snapshot);
}

#[test]
fn commit_changes_only_the_edited_field() {
    let state = default_state();
    let mut session = state.open_editor();
    session.set_field(MetricKey::Revenue, MetricField::Current, "R$ 50.000,00");

    let next = state.apply(session.commit());

    let expected = state
        .metrics
        .with_value(MetricKey::Revenue, MetricField::Current, 50000.00);
    assert_eq!(next.metrics, expected);
    assert_eq!(next.period_label, state.period_label);
    assert_eq!(next.revision, state.revision + 1);
}

#[test]
fn commit_replaces_period_label() {
    let state = default_state();
    let mut session = state.open_editor();
    session.set_period_label("NOVEMBRO DE 2026");
    let next = state.apply(session.commit());
    assert_eq!(next.period_label, "NOVEMBRO DE 2026");
    assert_eq!(next.metrics, state.metrics);
}

#[test]
fn editing_revenue_past_target_reaches_goal() {
    let state = default_state();
    let mut session = EditSession::open(&state.metrics, &state.period_label);
    // typed like a cash register: digits are cents
    session.set_field(MetricKey::Revenue, MetricField::Current, "23000001");
    let next = state.apply(session.commit());

    assert_eq!(next.metrics.revenue.current, 230000.01);
    assert!(next.metrics.revenue.is_goal_met());
    assert_eq!(next.metrics.revenue.progress_percent(), 100.0);
    assert_eq!(revenue_status(&next.metrics), RevenueStatus::GoalReached);
}

#[test]
fn reopening_after_cancel_starts_clean() {
    let state = default_state();
    let mut draft = state.open_editor();
    draft.set_field(MetricKey::Ticket, MetricField::Target, "1");
    draft.cancel();

    let fresh = state.open_editor();
    assert_eq!(fresh.buffer(), state.open_editor().buffer());
    assert_eq!(
        fresh.field_text(MetricKey::Ticket, MetricField::Target),
        "R$\u{a0}32,00"
    );
}
