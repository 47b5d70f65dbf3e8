//! Fraud Prediction Form - Desktop Entry Point

use anyhow::Result;
use fraud_prediction_form::{
    app::AppState,
    config::AppConfig,
    telemetry,
    ui::{FatalErrorApp, FraudFormApp},
};
use tracing::{error, info, warn};

fn main() -> Result<()> {
    let config = AppConfig::load()?;
    telemetry::init_logging(&config.logging)?;

    info!("Starting Fraud Prediction Form");

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Financial Transaction Fraud Prediction"),
        ..Default::default()
    };

    match AppState::bootstrap(config) {
        Ok(state) => {
            for report in state.startup_reports() {
                warn!("{}", report);
            }
            info!("Launching form");

            eframe::run_native(
                "Fraud Prediction Form",
                native_options,
                Box::new(|_cc| Ok(Box::new(FraudFormApp::new(state)))),
            )
            .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

            Ok(())
        }
        Err(startup_error) => {
            error!(error = %startup_error, "Startup failed, showing error screen");
            let message = startup_error.to_string();

            eframe::run_native(
                "Fraud Prediction Form",
                native_options,
                Box::new(|_cc| Ok(Box::new(FatalErrorApp::new(startup_error)))),
            )
            .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

            anyhow::bail!(message)
        }
    }
}
