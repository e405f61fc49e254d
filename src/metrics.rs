// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Prometheus metrics for the operator.

use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

/// Reconciliation metrics backed by a dedicated Prometheus registry.
///
/// Cheap to clone; all counters share interior state.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    reconciliations: IntCounterVec,
    target_writes: IntCounterVec,
    failures: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let reconciliations = IntCounterVec::new(
            Opts::new(
                "camirror_reconciliations_total",
                "Reconciliation attempts by terminal outcome",
            ),
            &["outcome"],
        )?;
        let target_writes = IntCounterVec::new(
            Opts::new(
                "camirror_target_writes_total",
                "Target secret writes by action",
            ),
            &["action"],
        )?;
        let failures = IntCounter::new(
            "camirror_reconcile_failures_total",
            "Reconciliation attempts that ended in an error",
        )?;

        registry.register(Box::new(reconciliations.clone()))?;
        registry.register(Box::new(target_writes.clone()))?;
        registry.register(Box::new(failures.clone()))?;

        Ok(Self {
            registry,
            reconciliations,
            target_writes,
            failures,
        })
    }

    pub fn record_outcome(&self, outcome: &str) {
        self.reconciliations.with_label_values(&[outcome]).inc();
    }

    pub fn record_writes(&self, created: u32, updated: u32) {
        if created > 0 {
            self.target_writes
                .with_label_values(&["create"])
                .inc_by(created as u64);
        }
        if updated > 0 {
            self.target_writes
                .with_label_values(&["update"])
                .inc_by(updated as u64);
        }
    }

    pub fn record_failure(&self) {
        self.failures.inc();
    }

    /// Render all metrics in Prometheus text exposition format
    pub fn encode_text(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
