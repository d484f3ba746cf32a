//! Scrapes the Stadtbad Babelsberg e-ticket listing and pushes the slots to
//! the lake booking backend, alerting an operator on any failure.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};

use timeslot_scout::application::SlotCollector;
use timeslot_scout::error::ScoutResult;
use timeslot_scout::infrastructure::alert::TelegramNotifier;
use timeslot_scout::infrastructure::backend::BackendPublisher;
use timeslot_scout::infrastructure::config::{AppConfig, RunConfig};
use timeslot_scout::infrastructure::http_client::HttpClient;
use timeslot_scout::infrastructure::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            // The alert channel itself comes out of the environment; with
            // nothing readable the log is all that is left.
            error!("Something went wrong ({err})");
            return ExitCode::FAILURE;
        }
    };
    let notifier = TelegramNotifier::from_config(&config);

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Something went wrong ({err})");
            notifier.alert(&err.to_string()).await;
            ExitCode::FAILURE
        }
    }
}

/// One full pipeline run: validate, collect, publish.
async fn run(config: &AppConfig) -> ScoutResult<()> {
    let run_config = RunConfig::from_app_config(config)?;
    let http = HttpClient::new()?;
    let collector = SlotCollector::new(Arc::new(http.clone()), run_config.days_ahead)?;
    let publisher = BackendPublisher::new(http, &run_config);

    let slots = collector.collect().await?;
    publisher.publish(&slots).await?;

    info!("run finished, published slots for {} date(s)", slots.len());
    Ok(())
}
