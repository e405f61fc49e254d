// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace in which source secrets are watched and targets written
    pub namespace: String,
    /// Bind address for the health/readiness endpoints
    pub health_bind_addr: SocketAddr,
    /// Bind address for the Prometheus metrics endpoint
    pub metrics_bind_addr: SocketAddr,
    /// Maximum length of the fingerprint label value. Kubernetes caps label
    /// values at 63 characters.
    pub hash_label_max_len: usize,
    /// When true, a target secret's prior generation is archived before it
    /// is overwritten.
    pub archive_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let namespace =
            env::var("CONTROLLER_NAMESPACE").unwrap_or_else(|_| "kafka".to_string());

        let health_bind_addr = env::var("HEALTH_BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8081".to_string())
            .parse()
            .context("invalid HEALTH_BIND_ADDR")?;

        let metrics_bind_addr = env::var("METRICS_BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:9000".to_string())
            .parse()
            .context("invalid METRICS_BIND_ADDR")?;

        let hash_label_max_len = match env::var("HASH_LABEL_MAX_LEN") {
            Ok(v) => v.parse().context("invalid HASH_LABEL_MAX_LEN")?,
            Err(_) => 63,
        };

        let archive_enabled: bool = env::var("ARCHIVE_GENERATIONS")
            .unwrap_or("false".to_string())
            .parse()
            .unwrap_or(false);

        Ok(Config {
            namespace,
            health_bind_addr,
            metrics_bind_addr,
            hash_label_max_len,
            archive_enabled,
        })
    }
}
