use std::process::ExitCode;

use pixel_tracker::{app, bootstrap};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let (config, tracker) = match bootstrap::app::setup().await {
        Ok(setup) => setup,
        Err(err) => {
            eprintln!("Unable to load the configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    let jobs = match app::start(&config, tracker).await {
        Ok(jobs) => jobs,
        Err(err) => {
            error!("Unable to start the pixel tracker: {err}");
            return ExitCode::FAILURE;
        }
    };

    // handle the signals
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Pixel tracker shutting down..");

            // Await for all jobs to shutdown
            futures::future::join_all(jobs).await;
            info!("Pixel tracker successfully shutdown.");
        }
    }

    ExitCode::SUCCESS
}
