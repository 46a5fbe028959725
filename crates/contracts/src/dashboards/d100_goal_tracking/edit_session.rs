//! Staged editing of the metric set.
//!
//! An [`EditSession`] only exists while the edit form is open: it is created
//! by [`EditSession::open`] and consumed by [`EditSession::commit`] or
//! [`EditSession::cancel`]. The committed [`MetricSet`] is never touched until
//! a commit produces a new one.

use super::metrics::{Metric, MetricField, MetricKey, MetricSet};
use serde::{Deserialize, Serialize};

/// Form text of one input plus whether the user has typed into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBuffer {
    pub text: String,
    pub touched: bool,
}

impl FieldBuffer {
    fn seeded(text: String) -> Self {
        Self {
            text,
            touched: false,
        }
    }
}

/// Buffered current/target text of one metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricBuffer {
    pub current: FieldBuffer,
    pub target: FieldBuffer,
}

impl MetricBuffer {
    fn from_metric(metric: &Metric) -> Self {
        Self {
            current: FieldBuffer::seeded(metric.unit.format_input(metric.current)),
            target: FieldBuffer::seeded(metric.unit.format_input(metric.target)),
        }
    }

    fn field(&self, field: MetricField) -> &FieldBuffer {
        match field {
            MetricField::Current => &self.current,
            MetricField::Target => &self.target,
        }
    }

    fn field_mut(&mut self, field: MetricField) -> &mut FieldBuffer {
        match field {
            MetricField::Current => &mut self.current,
            MetricField::Target => &mut self.target,
        }
    }
}

/// Per-role text buffers, same fixed shape as [`MetricSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditBuffer {
    pub revenue: MetricBuffer,
    pub drinks: MetricBuffer,
    pub ticket: MetricBuffer,
    pub share: MetricBuffer,
    pub period_label: String,
}

impl EditBuffer {
    fn get(&self, key: MetricKey) -> &MetricBuffer {
        match key {
            MetricKey::Revenue => &self.revenue,
            MetricKey::Drinks => &self.drinks,
            MetricKey::Ticket => &self.ticket,
            MetricKey::Share => &self.share,
        }
    }

    fn get_mut(&mut self, key: MetricKey) -> &mut MetricBuffer {
        match key {
            MetricKey::Revenue => &mut self.revenue,
            MetricKey::Drinks => &mut self.drinks,
            MetricKey::Ticket => &mut self.ticket,
            MetricKey::Share => &mut self.share,
        }
    }
}

/// Result of a successful commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitOutcome {
    pub metrics: MetricSet,
    pub period_label: String,
}

/// An open edit form over a snapshot of the committed metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    base: MetricSet,
    buffer: EditBuffer,
}

impl EditSession {
    /// Seeds a fresh buffer from the committed set. Nothing from an earlier
    /// session survives.
    pub fn open(committed: &MetricSet, period_label: &str) -> Self {
        Self {
            base: committed.clone(),
            buffer: EditBuffer {
                revenue: MetricBuffer::from_metric(&committed.revenue),
                drinks: MetricBuffer::from_metric(&committed.drinks),
                ticket: MetricBuffer::from_metric(&committed.ticket),
                share: MetricBuffer::from_metric(&committed.share),
                period_label: period_label.to_string(),
            },
        }
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub fn field_text(&self, key: MetricKey, field: MetricField) -> &str {
        &self.buffer.get(key).field(field).text
    }

    pub fn period_label(&self) -> &str {
        &self.buffer.period_label
    }

    /// Overwrites one input with the reformatted keystroke text.
    pub fn set_field(&mut self, key: MetricKey, field: MetricField, raw: &str) {
        let text = key.unit().reformat_keystroke(raw);
        let slot = self.buffer.get_mut(key).field_mut(field);
        slot.text = text;
        slot.touched = true;
    }

    pub fn set_period_label(&mut self, text: &str) {
        self.buffer.period_label = text.to_string();
    }

    /// Value the commit would store for one field.
    fn resolve(&self, key: MetricKey, field: MetricField) -> f64 {
        let slot = self.buffer.get(key).field(field);
        if slot.touched {
            key.unit().parse_input(&slot.text)
        } else {
            self.base.get(key).value(field)
        }
    }

    /// Parses every touched input and builds a brand-new set.
    ///
    /// Untouched inputs keep the committed value exactly. Parsing is lenient,
    /// so this cannot fail.
    pub fn commit(self) -> CommitOutcome {
        let mut metrics = self.base.clone();
        for key in MetricKey::ALL {
            for field in MetricField::ALL {
                metrics = metrics.with_value(key, field, self.resolve(key, field));
            }
        }
        CommitOutcome {
            metrics,
            period_label: self.buffer.period_label,
        }
    }

    /// Drops the buffer. The committed set was never borrowed mutably.
    pub fn cancel(self) {}
}
