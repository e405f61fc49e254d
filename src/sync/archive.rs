// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Archival of superseded target secret generations.
//!
//! Before a stale target is overwritten, its current state can be preserved
//! as an immutably named snapshot secret. Snapshots are created once per
//! generation and never updated or deleted.

use crate::constants::{generation, labels};
use crate::error::Result;
use k8s_openapi::api::core::v1::Secret;
use kube::{
    api::{ObjectMeta, PostParams},
    Api, ResourceExt,
};
use tracing::{debug, info};

/// Name of the snapshot preserving the target's current generation
pub fn snapshot_name(target: &Secret, generation_key: &str) -> String {
    let preserved = target
        .annotations()
        .get(generation_key)
        .map(String::as_str)
        .unwrap_or(generation::INITIAL);
    format!("{}-gen-{}", target.name_any(), preserved)
}

/// Build the snapshot secret for a target about to be overwritten.
///
/// The snapshot carries all of the target's labels plus the historical
/// marker, its annotations (including the generation it preserves), and all
/// payload fields.
pub fn build_snapshot(target: &Secret, generation_key: &str) -> Secret {
    let mut snapshot_labels = target.labels().clone();
    snapshot_labels.insert(
        labels::HISTORICAL.to_string(),
        labels::HISTORICAL_VALUE.to_string(),
    );

    Secret {
        metadata: ObjectMeta {
            name: Some(snapshot_name(target, generation_key)),
            namespace: target.namespace(),
            labels: Some(snapshot_labels),
            annotations: Some(target.annotations().clone()),
            ..Default::default()
        },
        data: target.data.clone(),
        string_data: target.string_data.clone(),
        type_: target.type_.clone(),
        ..Default::default()
    }
}

/// Archive a target secret's current generation before it is replaced.
///
/// A name collision on create means the snapshot was already taken by an
/// earlier delivery of the same event and is not an error.
pub async fn archive_superseded(
    api: &Api<Secret>,
    target: &Secret,
    generation_key: &str,
) -> Result<()> {
    let snapshot = build_snapshot(target, generation_key);
    let name = snapshot.name_any();

    match api.create(&PostParams::default(), &snapshot).await {
        Ok(_) => {
            info!(
                "Archived superseded generation of {} as {}",
                target.name_any(),
                name
            );
            Ok(())
        }
        Err(kube::Error::Api(err)) if err.code == 409 => {
            debug!("Snapshot {} already exists", name);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
