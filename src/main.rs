// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::{info, warn};

use camirror::config::Config;
use camirror::metrics::Metrics;
use camirror::probes::{run_health_server, run_metrics_server};
use camirror::reconcilers::SecretReconciler;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting camirror operator");

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: namespace={}", config.namespace);

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    let metrics = Metrics::new()?;

    let reconciler = SecretReconciler::new(client, config.clone(), metrics.clone());

    info!("Starting reconciler...");

    // Run the reconciler and the probe/metrics servers concurrently
    tokio::try_join!(
        reconciler.run(),
        run_health_server(config.health_bind_addr),
        run_metrics_server(metrics, config.metrics_bind_addr),
    )?;

    // This should never be reached as the reconciler runs forever
    warn!("All tasks stopped unexpectedly");
    Ok(())
}
