use contracts::dashboards::d100_goal_tracking::{
    DashboardState, EditSession, MetricField, MetricKey,
};
use leptos::prelude::*;

/// ViewModel for the metrics edit form.
///
/// `session` is `None` while the form is closed, so no edit can reach the
/// committed state except through `save_command`.
#[derive(Clone, Copy)]
pub struct GoalEditorViewModel {
    pub session: RwSignal<Option<EditSession>>,
    state: RwSignal<DashboardState>,
}

impl GoalEditorViewModel {
    pub fn new(state: RwSignal<DashboardState>) -> Self {
        Self {
            session: RwSignal::new(None),
            state,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.with(Option::is_some)
    }

    /// Opens a fresh session seeded from the committed state.
    pub fn open_command(&self) {
        let session = self.state.with_untracked(DashboardState::open_editor);
        self.session.set(Some(session));
    }

    pub fn field_text(&self, key: MetricKey, field: MetricField) -> String {
        self.session.with(|s| {
            s.as_ref()
                .map(|s| s.field_text(key, field).to_string())
                .unwrap_or_default()
        })
    }

    pub fn set_field(&self, key: MetricKey, field: MetricField, raw: String) {
        self.session.update(|s| {
            if let Some(session) = s {
                session.set_field(key, field, &raw);
            }
        });
    }

    pub fn period_label(&self) -> String {
        self.session.with(|s| {
            s.as_ref()
                .map(|s| s.period_label().to_string())
                .unwrap_or_default()
        })
    }

    pub fn set_period_label(&self, text: String) {
        self.session.update(|s| {
            if let Some(session) = s {
                session.set_period_label(&text);
            }
        });
    }

    /// Commits the session and replaces the committed state wholesale.
    pub fn save_command(&self) {
        let mut taken = None;
        self.session.update(|s| taken = s.take());
        let Some(session) = taken else {
            return;
        };

        let outcome = session.commit();
        let next = self.state.with_untracked(|current| current.apply(outcome));
        log::info!(
            "Metrics committed (revision {}, period '{}')",
            next.revision,
            next.period_label
        );
        self.state.set(next);
    }

    pub fn cancel_command(&self) {
        let mut taken = None;
        self.session.update(|s| taken = s.take());
        if let Some(session) = taken {
            session.cancel();
            log::debug!("Metrics edit cancelled");
        }
    }
}
