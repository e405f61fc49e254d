// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Secret reconciler - watches TLS bundle secrets and drives the sync engine.
//!
//! The controller delivers change events at-least-once, serialized per
//! secret, and requeues on error. The engine itself is a plain
//! request/response procedure and relies on this loop for retry/backoff.

use crate::config::Config;
use crate::error::{MirrorError, Result};
use crate::metrics::Metrics;
use crate::sync::{sync_tls_bundle, SyncOutcome};
use futures::StreamExt;
use k8s_openapi::api::core::v1::Secret;
use kube::{
    runtime::{controller::Action, Controller},
    Api, Client, ResourceExt,
};
use kube_runtime::watcher::Config as WatcherConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

pub struct SecretReconciler {
    client: Client,
    config: Config,
    metrics: Metrics,
}

impl SecretReconciler {
    pub fn new(client: Client, config: Config, metrics: Metrics) -> Self {
        Self {
            client,
            config,
            metrics,
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let secrets: Api<Secret> =
            Api::namespaced(self.client.clone(), &self.config.namespace);
        let context = Arc::new(self);

        Controller::new(secrets, WatcherConfig::default())
            .run(reconcile, error_policy, context)
            .for_each(|res| async move {
                match res {
                    Ok(o) => debug!("Reconciled secret: {:?}", o),
                    Err(e) => warn!("Reconciliation error: {:?}", e),
                }
            })
            .await;

        Ok(())
    }
}

async fn reconcile(secret: Arc<Secret>, ctx: Arc<SecretReconciler>) -> Result<Action> {
    debug!(
        "Reconciling secret: {}/{}",
        secret.namespace().unwrap_or_default(),
        secret.name_any()
    );

    let outcome = sync_tls_bundle(&ctx.client, &ctx.config, &secret).await?;

    if let SyncOutcome::Applied { created, updated } = outcome {
        ctx.metrics.record_writes(created, updated);
    }
    ctx.metrics.record_outcome(outcome.as_str());

    Ok(Action::await_change())
}

fn error_policy(
    _secret: Arc<Secret>,
    error: &MirrorError,
    ctx: Arc<SecretReconciler>,
) -> Action {
    error!("Reconciliation error: {}", error);
    ctx.metrics.record_failure();
    Action::requeue(Duration::from_secs(60))
}
