use std::process::ExitCode;
use std::sync::Arc;

use symptom_recommender::classifier::{Classifier, ClassifierError, LinearModel};
use symptom_recommender::engine::Engine;
use symptom_recommender::reference::ReferenceTables;
use symptom_recommender::{api, config, init_tracing};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("startup failed: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Load-all-or-fail startup: a missing table or classifier artifact keeps
/// the process from ever becoming ready.
async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = config::data_dir();
    let tables = ReferenceTables::load(&data_dir)?;

    let engine = Arc::new(Engine::new(tables, load_classifier()?));

    let addr = config::bind_addr()?;
    let mut server = api::server::start_server(engine, addr).await?;
    tracing::info!(addr = %server.addr, "ready to serve");

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");
    server.shutdown();
    Ok(())
}

fn load_classifier() -> Result<Box<dyn Classifier>, ClassifierError> {
    #[cfg(feature = "onnx-model")]
    if let Some(path) = config::onnx_model_path() {
        use symptom_recommender::classifier::OnnxModel;
        use symptom_recommender::vocabulary::SYMPTOMS;

        let model = OnnxModel::load(&path, SYMPTOMS.len())?;
        return Ok(Box::new(model));
    }

    let model = LinearModel::load(&config::model_path())?;
    Ok(Box::new(model))
}
