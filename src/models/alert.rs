//! Derived alert records
//!
//! Alerts are recomputed from current state on every request and have no
//! identity or lifecycle of their own.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Danger,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Danger => write!(f, "danger"),
        }
    }
}

/// What triggered an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    BudgetExceeded,
    BudgetNearLimit,
    SpendingIncrease,
    GoalOverdue,
    GoalNearDue,
    IncomeDrop,
}

impl AlertKind {
    /// Exceeded budgets and overdue goals are dangers; everything else warns
    pub fn severity(&self) -> AlertSeverity {
        match self {
            Self::BudgetExceeded | Self::GoalOverdue => AlertSeverity::Danger,
            _ => AlertSeverity::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    /// Underlying percentage, unclamped
    pub value: f64,
    /// `value` clamped to [0, 100] for progress bars
    pub progress: f64,
}

impl Alert {
    pub fn new(
        kind: AlertKind,
        title: impl Into<String>,
        message: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            title: title.into(),
            message: message.into(),
            value,
            progress: value.clamp(0.0, 100.0),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.title, self.message)
    }
}
