//! Display formatting for terminal output

pub mod alert;
pub mod budget;
pub mod goal;
pub mod report;
pub mod transaction;

pub use alert::format_alerts;
pub use budget::format_budget_statuses;
pub use goal::format_goal_list;
pub use report::{format_bar, format_duration, format_percentage, separator, truncate};
pub use transaction::{format_transaction_list, format_transaction_row};
