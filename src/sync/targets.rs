// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Target secret resolution, generation sequencing, and desired-state
//! construction.

use crate::constants::{generation, labels, SECRET_TYPE_OPAQUE};
use crate::error::{MirrorError, Result};
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::{api::ObjectMeta, Api, ResourceExt};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Resolved state of a single target secret relative to the source bundle's
/// fingerprint.
#[derive(Debug, Clone)]
pub enum TargetState {
    /// The target does not exist yet and must be created
    Absent,
    /// The target exists and its fingerprint matches the source
    Current,
    /// The target exists but was produced from an older bundle
    Stale { existing: Box<Secret> },
}

impl TargetState {
    pub fn is_current(&self) -> bool {
        matches!(self, TargetState::Current)
    }
}

/// Look up a target secret and compare its fingerprint label against the
/// freshly computed source fingerprint.
///
/// A lookup miss is a normal outcome, not an error. A hit without the
/// fingerprint label means the secret is not managed by this operator and
/// must not be overwritten.
pub async fn resolve_target(
    api: &Api<Secret>,
    name: &str,
    fingerprint: &str,
) -> Result<TargetState> {
    match api.get(name).await {
        Err(kube::Error::Api(err)) if err.code == 404 => {
            debug!("Target secret {} does not exist yet", name);
            Ok(TargetState::Absent)
        }
        Err(e) => Err(e.into()),
        Ok(existing) => {
            let Some(stored) = existing.labels().get(labels::HASH) else {
                return Err(MirrorError::UnmanagedTarget {
                    name: existing.name_any(),
                    label: labels::HASH,
                });
            };
            if stored == fingerprint {
                debug!("Target secret {} is up-to-date", name);
                Ok(TargetState::Current)
            } else {
                debug!("Target secret {} is stale", name);
                Ok(TargetState::Stale {
                    existing: Box::new(existing),
                })
            }
        }
    }
}

/// Compute the next generation value for a target secret.
///
/// A new target starts at generation 0. An existing target advances by one
/// from the generation annotation it carries; an absent or unparsable value
/// counts as 0.
pub fn next_generation(existing: Option<&Secret>, generation_key: &str) -> String {
    let Some(existing) = existing else {
        return generation::INITIAL.to_string();
    };

    let prior = existing
        .annotations()
        .get(generation_key)
        .map(String::as_str)
        .unwrap_or_default();

    let parsed: u64 = prior.parse().unwrap_or_else(|_| {
        warn!(
            "Target secret {} has unparsable generation '{}', treating as 0",
            existing.name_any(),
            prior
        );
        0
    });

    (parsed + 1).to_string()
}

/// Build the full desired state of a target secret.
///
/// The payload replaces whatever the target held before; labels and the
/// generation annotation are set from scratch. Pure: identical inputs yield
/// an identical secret.
pub fn build_target_secret(
    existing: Option<&Secret>,
    data: BTreeMap<String, ByteString>,
    name: &str,
    namespace: &str,
    fingerprint: &str,
    generation_key: &str,
    cluster: &str,
) -> Secret {
    let next = next_generation(existing, generation_key);

    Secret {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            labels: Some(BTreeMap::from([
                (
                    labels::MANAGED_BY.to_string(),
                    labels::MANAGED_BY_VALUE.to_string(),
                ),
                (labels::HASH.to_string(), fingerprint.to_string()),
                (labels::STRIMZI_CLUSTER.to_string(), cluster.to_string()),
                (
                    labels::STRIMZI_KIND.to_string(),
                    labels::STRIMZI_KIND_VALUE.to_string(),
                ),
            ])),
            annotations: Some(BTreeMap::from([(generation_key.to_string(), next)])),
            // Carried over so a replace of a concurrently modified target is
            // rejected by the API server instead of clobbering it.
            resource_version: existing.and_then(|e| e.metadata.resource_version.clone()),
            ..Default::default()
        },
        data: Some(data),
        type_: Some(SECRET_TYPE_OPAQUE.to_string()),
        ..Default::default()
    }
}
