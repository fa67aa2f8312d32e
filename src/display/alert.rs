//! Alert display formatting

use super::report::format_bar;
use crate::models::{Alert, AlertSeverity};

fn severity_marker(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Danger => "!!",
        AlertSeverity::Warning => " !",
    }
}

/// Format alerts, one block each
pub fn format_alerts(alerts: &[Alert]) -> String {
    if alerts.is_empty() {
        return "No alerts. Everything is on track.\n".to_string();
    }

    let mut output = String::new();
    for alert in alerts {
        output.push_str(&format!(
            "{} {} [{}]\n   {}\n   {} {:.0}%\n",
            severity_marker(alert.severity),
            alert.title,
            alert.severity,
            alert.message,
            format_bar(alert.progress, 100.0, 20),
            alert.progress
        ));
    }
    output
}
