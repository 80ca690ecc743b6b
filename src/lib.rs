pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod reference;
pub mod schedule;
pub mod validation;
pub mod workflow;

pub use error::WorkflowError;
pub use workflow::{BookingWorkflow, WorkflowSnapshot};

use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber, honouring `RUST_LOG` when set.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init_logging() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} booking core v{}", config::APP_NAME, config::APP_VERSION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_is_idempotent() {
        init_logging();
        init_logging();
    }

    #[test]
    fn default_workflow_uses_wall_clock() {
        init_logging();
        let workflow = BookingWorkflow::new(config::BookingConfig::demo());
        assert_eq!(workflow.appointments().len(), 2);
        let dates: Vec<_> = workflow.available_dates().collect();
        assert_eq!(dates.len(), 14);
        let today = chrono::Local::now().date_naive();
        assert!(dates.iter().all(|d| d.date > today));
    }
}
