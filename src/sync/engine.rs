// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The synchronization decision engine.
//!
//! Given a source TLS bundle secret, decides per target whether a create,
//! an update, or no action is required, and issues the writes. Safe to run
//! arbitrarily often against the same source state: a repeated run detects
//! both targets as current and performs zero writes.

use crate::config::Config;
use crate::constants::{annotations, data_keys, generation, SECRET_TYPE_TLS};
use crate::error::{MirrorError, Result};
use crate::fingerprint::bundle_fingerprint;
use crate::sync::archive::archive_superseded;
use crate::sync::targets::{build_target_secret, resolve_target, TargetState};
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::{api::PostParams, Api, Client, ResourceExt};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{error, info, instrument};

/// Terminal outcome of a single reconciliation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Wrong secret type or missing/mismatched sync marker
    Ineligible,
    /// Routing metadata incomplete; nothing to do until the secret is fixed
    Skipped(SkipReason),
    /// Both targets already reflect the source fingerprint
    InSync,
    /// Writes were issued
    Applied { created: u32, updated: u32 },
}

impl SyncOutcome {
    /// Stable label value for metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncOutcome::Ineligible => "ineligible",
            SyncOutcome::Skipped(_) => "skipped",
            SyncOutcome::InSync => "in_sync",
            SyncOutcome::Applied { .. } => "applied",
        }
    }
}

/// Why an eligible secret was skipped rather than synced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingAnnotation(&'static str),
    EmptyAnnotation(&'static str),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingAnnotation(key) => write!(f, "missing annotation '{}'", key),
            SkipReason::EmptyAnnotation(key) => write!(f, "annotation '{}' is empty", key),
        }
    }
}

/// Routing metadata extracted from a source secret's annotations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingMeta {
    pub cert_target: String,
    pub key_target: String,
    pub cluster: String,
}

/// Check that a secret is of the TLS bundle type
pub fn is_tls_bundle(secret: &Secret) -> bool {
    secret.type_.as_deref() == Some(SECRET_TYPE_TLS)
}

/// Check that a secret carries the sync marker annotation
pub fn has_sync_marker(secret: &Secret) -> bool {
    secret
        .annotations()
        .get(annotations::SYNC)
        .is_some_and(|v| v == annotations::SYNC_VALUE)
}

/// Admission filter: only TLS bundles carrying the sync marker are eligible
pub fn is_eligible(secret: &Secret) -> bool {
    is_tls_bundle(secret) && has_sync_marker(secret)
}

/// Extract and validate the routing annotations of an eligible secret.
///
/// The target name annotations must be present and non-empty; the first
/// violation short-circuits with a skip. The cluster name is optional and
/// defaults to empty.
pub fn validate_routing(secret: &Secret) -> std::result::Result<RoutingMeta, SkipReason> {
    let cert_target = required_annotation(secret, annotations::TARGET_CERT_NAME)?;
    let key_target = required_annotation(secret, annotations::TARGET_KEY_NAME)?;
    let cluster = secret
        .annotations()
        .get(annotations::TARGET_CLUSTER_NAME)
        .cloned()
        .unwrap_or_default();

    Ok(RoutingMeta {
        cert_target,
        key_target,
        cluster,
    })
}

fn required_annotation(
    secret: &Secret,
    key: &'static str,
) -> std::result::Result<String, SkipReason> {
    match secret.annotations().get(key) {
        None => Err(SkipReason::MissingAnnotation(key)),
        Some(value) if value.is_empty() => Err(SkipReason::EmptyAnnotation(key)),
        Some(value) => Ok(value.clone()),
    }
}

/// One target's share of the work for a reconciliation attempt
struct TargetPlan {
    name: String,
    state: TargetState,
    payload: BTreeMap<String, ByteString>,
    generation_key: &'static str,
}

enum TargetAction {
    Created,
    Updated,
    Untouched,
}

/// Reconcile a source TLS bundle secret against its two target secrets.
#[instrument(
    skip(client, config, secret),
    fields(secret = %format!("{}/{}", secret.namespace().unwrap_or_default(), secret.name_any()))
)]
pub async fn sync_tls_bundle(
    client: &Client,
    config: &Config,
    secret: &Secret,
) -> Result<SyncOutcome> {
    let name = secret.name_any();
    let namespace = secret.namespace().unwrap_or_default();

    if !is_tls_bundle(secret) {
        info!(
            "Skipping secret {}/{} because it is not of type {}",
            namespace, name, SECRET_TYPE_TLS
        );
        return Ok(SyncOutcome::Ineligible);
    }

    if !has_sync_marker(secret) {
        info!(
            "Skipping secret {}/{} because it does not carry the '{}: {}' annotation",
            namespace,
            name,
            annotations::SYNC,
            annotations::SYNC_VALUE
        );
        return Ok(SyncOutcome::Ineligible);
    }

    let routing = match validate_routing(secret) {
        Ok(routing) => routing,
        Err(reason) => {
            info!("Secret {}/{} skipped: {}", namespace, name, reason);
            return Ok(SyncOutcome::Skipped(reason));
        }
    };

    let empty = BTreeMap::new();
    let data = secret.data.as_ref().unwrap_or(&empty);
    let fingerprint = bundle_fingerprint(data, config.hash_label_max_len);

    let api: Api<Secret> = Api::namespaced(client.clone(), &namespace);

    let cert_state = resolve_target(&api, &routing.cert_target, &fingerprint).await?;
    let key_state = resolve_target(&api, &routing.key_target, &fingerprint).await?;

    if cert_state.is_current() && key_state.is_current() {
        info!("All target secrets for {}/{} are up-to-date", namespace, name);
        return Ok(SyncOutcome::InSync);
    }

    let bytes_of =
        |key: &str| -> Vec<u8> { data.get(key).map(|b| b.0.clone()).unwrap_or_default() };

    // The chain target holds the leaf certificate with the CA appended; the
    // key target holds the private key verbatim.
    let mut combined_chain = bytes_of(data_keys::TLS_CRT);
    combined_chain.extend(bytes_of(data_keys::CA_CRT));

    let plan = [
        TargetPlan {
            name: routing.cert_target,
            state: cert_state,
            payload: BTreeMap::from([(
                data_keys::CA_CRT.to_string(),
                ByteString(combined_chain),
            )]),
            generation_key: generation::CA_CERT,
        },
        TargetPlan {
            name: routing.key_target,
            state: key_state,
            payload: BTreeMap::from([(
                data_keys::CA_KEY.to_string(),
                ByteString(bytes_of(data_keys::TLS_KEY)),
            )]),
            generation_key: generation::CA_KEY,
        },
    ];

    let mut created = 0;
    let mut updated = 0;
    let mut first_error: Option<MirrorError> = None;

    // Targets are independent: a failed write on one must not prevent the
    // attempt on the other, but any failure fails the attempt as a whole.
    for target in plan {
        let target_name = target.name.clone();
        match apply_target(&api, config, &namespace, target, &routing.cluster, &fingerprint).await
        {
            Ok(TargetAction::Created) => created += 1,
            Ok(TargetAction::Updated) => updated += 1,
            Ok(TargetAction::Untouched) => {}
            Err(e) => {
                error!(
                    "Failed to reconcile target secret {}/{}: {}",
                    namespace, target_name, e
                );
                first_error.get_or_insert(e);
            }
        }
    }

    if let Some(e) = first_error {
        return Err(e);
    }

    info!(
        "Target secrets for {}/{} successfully reconciled",
        namespace, name
    );
    Ok(SyncOutcome::Applied { created, updated })
}

async fn apply_target(
    api: &Api<Secret>,
    config: &Config,
    namespace: &str,
    target: TargetPlan,
    cluster: &str,
    fingerprint: &str,
) -> Result<TargetAction> {
    match target.state {
        TargetState::Current => Ok(TargetAction::Untouched),
        TargetState::Absent => {
            let desired = build_target_secret(
                None,
                target.payload,
                &target.name,
                namespace,
                fingerprint,
                target.generation_key,
                cluster,
            );
            info!("Creating target secret {}/{}", namespace, target.name);
            api.create(&PostParams::default(), &desired)
                .await
                .map_err(|source| MirrorError::TargetWriteError {
                    name: target.name,
                    source,
                })?;
            Ok(TargetAction::Created)
        }
        TargetState::Stale { existing } => {
            if config.archive_enabled {
                archive_superseded(api, &existing, target.generation_key).await?;
            }
            let desired = build_target_secret(
                Some(&existing),
                target.payload,
                &target.name,
                namespace,
                fingerprint,
                target.generation_key,
                cluster,
            );
            info!("Updating target secret {}/{}", namespace, target.name);
            api.replace(&target.name, &PostParams::default(), &desired)
                .await
                .map_err(|source| MirrorError::TargetWriteError {
                    name: target.name,
                    source,
                })?;
            Ok(TargetAction::Updated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::labels;
    use crate::test_utils::{status_json, MockService, RecordedRequest};
    use kube::api::ObjectMeta;

    const SECRETS_PATH: &str = "/api/v1/namespaces/kafka/secrets";

    fn make_config(archive_enabled: bool) -> Config {
        Config {
            namespace: "kafka".to_string(),
            health_bind_addr: "127.0.0.1:8081".parse().unwrap(),
            metrics_bind_addr: "127.0.0.1:9000".parse().unwrap(),
            hash_label_max_len: 63,
            archive_enabled,
        }
    }

    fn bundle_data(
        ca_crt: &str,
        tls_crt: &str,
        tls_key: &str,
    ) -> BTreeMap<String, ByteString> {
        BTreeMap::from([
            (
                data_keys::CA_CRT.to_string(),
                ByteString(ca_crt.as_bytes().to_vec()),
            ),
            (
                data_keys::TLS_CRT.to_string(),
                ByteString(tls_crt.as_bytes().to_vec()),
            ),
            (
                data_keys::TLS_KEY.to_string(),
                ByteString(tls_key.as_bytes().to_vec()),
            ),
        ])
    }

    fn routing_annotations() -> BTreeMap<String, String> {
        BTreeMap::from([
            (
                annotations::SYNC.to_string(),
                annotations::SYNC_VALUE.to_string(),
            ),
            (
                annotations::TARGET_CERT_NAME.to_string(),
                "out-cert".to_string(),
            ),
            (
                annotations::TARGET_KEY_NAME.to_string(),
                "out-key".to_string(),
            ),
            (
                annotations::TARGET_CLUSTER_NAME.to_string(),
                "kafka1".to_string(),
            ),
        ])
    }

    fn make_source(annotations: BTreeMap<String, String>) -> Secret {
        Secret {
            metadata: ObjectMeta {
                name: Some("ca-bundle".to_string()),
                namespace: Some("kafka".to_string()),
                annotations: Some(annotations),
                ..Default::default()
            },
            data: Some(bundle_data("A", "B", "C")),
            type_: Some(SECRET_TYPE_TLS.to_string()),
            ..Default::default()
        }
    }

    fn make_target(name: &str, hash: Option<&str>, gen_key: &str, gen_value: &str) -> Secret {
        let mut target_labels = BTreeMap::new();
        if let Some(hash) = hash {
            target_labels.insert(labels::HASH.to_string(), hash.to_string());
        }
        Secret {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some("kafka".to_string()),
                labels: Some(target_labels),
                annotations: Some(BTreeMap::from([(
                    gen_key.to_string(),
                    gen_value.to_string(),
                )])),
                resource_version: Some("42".to_string()),
                ..Default::default()
            },
            type_: Some("Opaque".to_string()),
            ..Default::default()
        }
    }

    fn secret_json(secret: &Secret) -> String {
        serde_json::to_string(secret).unwrap()
    }

    fn source_fingerprint(secret: &Secret) -> String {
        bundle_fingerprint(secret.data.as_ref().unwrap(), 63)
    }

    fn parse_body(request: &RecordedRequest) -> Secret {
        serde_json::from_slice(&request.body).unwrap()
    }

    fn writes(requests: &[RecordedRequest]) -> Vec<&RecordedRequest> {
        requests
            .iter()
            .filter(|r| r.method == "POST" || r.method == "PUT")
            .collect()
    }

    #[test]
    fn test_is_eligible() {
        let secret = make_source(routing_annotations());
        assert!(is_eligible(&secret));

        let mut opaque = make_source(routing_annotations());
        opaque.type_ = Some("Opaque".to_string());
        assert!(!is_eligible(&opaque));

        let mut unmarked = routing_annotations();
        unmarked.remove(annotations::SYNC);
        assert!(!is_eligible(&make_source(unmarked)));

        let mut wrong_value = routing_annotations();
        wrong_value.insert(annotations::SYNC.to_string(), "later".to_string());
        assert!(!is_eligible(&make_source(wrong_value)));
    }

    #[test]
    fn test_validate_routing_extracts_targets() {
        let secret = make_source(routing_annotations());
        let routing = validate_routing(&secret).unwrap();

        assert_eq!(routing.cert_target, "out-cert");
        assert_eq!(routing.key_target, "out-key");
        assert_eq!(routing.cluster, "kafka1");
    }

    #[test]
    fn test_validate_routing_cluster_is_optional() {
        let mut annotations = routing_annotations();
        annotations.remove(annotations::TARGET_CLUSTER_NAME);
        let routing = validate_routing(&make_source(annotations)).unwrap();

        assert_eq!(routing.cluster, "");
    }

    #[test]
    fn test_validate_routing_missing_cert_name() {
        let mut annotations = routing_annotations();
        annotations.remove(annotations::TARGET_CERT_NAME);

        assert_eq!(
            validate_routing(&make_source(annotations)),
            Err(SkipReason::MissingAnnotation(annotations::TARGET_CERT_NAME))
        );
    }

    #[test]
    fn test_validate_routing_empty_key_name() {
        let mut annotations = routing_annotations();
        annotations.insert(annotations::TARGET_KEY_NAME.to_string(), String::new());

        assert_eq!(
            validate_routing(&make_source(annotations)),
            Err(SkipReason::EmptyAnnotation(annotations::TARGET_KEY_NAME))
        );
    }

    #[tokio::test]
    async fn test_sync_ineligible_secret_does_nothing() {
        let mock = MockService::new();
        let client = mock.clone().into_client();

        let mut secret = make_source(routing_annotations());
        secret.type_ = Some("Opaque".to_string());

        let outcome = sync_tls_bundle(&client, &make_config(false), &secret)
            .await
            .unwrap();

        assert_eq!(outcome, SyncOutcome::Ineligible);
        assert!(mock.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_sync_skips_on_missing_routing() {
        let mock = MockService::new();
        let client = mock.clone().into_client();

        let mut annotations = routing_annotations();
        annotations.remove(annotations::TARGET_KEY_NAME);
        let secret = make_source(annotations);

        let outcome = sync_tls_bundle(&client, &make_config(false), &secret)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SyncOutcome::Skipped(SkipReason::MissingAnnotation(annotations::TARGET_KEY_NAME))
        );
        assert!(mock.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_sync_creates_both_targets() {
        let created = make_target("created", Some("x"), generation::CA_CERT, "0");
        let mock = MockService::new().on_post(SECRETS_PATH, 201, &secret_json(&created));
        let client = mock.clone().into_client();

        let secret = make_source(routing_annotations());
        let fingerprint = source_fingerprint(&secret);

        let outcome = sync_tls_bundle(&client, &make_config(false), &secret)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SyncOutcome::Applied {
                created: 2,
                updated: 0
            }
        );

        let requests = mock.recorded();
        let posts: Vec<_> = requests.iter().filter(|r| r.method == "POST").collect();
        assert_eq!(posts.len(), 2);

        let cert = parse_body(posts[0]);
        assert_eq!(cert.metadata.name.as_deref(), Some("out-cert"));
        assert_eq!(
            cert.data.as_ref().unwrap().get(data_keys::CA_CRT).unwrap().0,
            b"BA"
        );
        let cert_labels = cert.metadata.labels.as_ref().unwrap();
        assert_eq!(cert_labels.get(labels::HASH).unwrap(), &fingerprint);
        assert_eq!(cert_labels.get(labels::STRIMZI_CLUSTER).unwrap(), "kafka1");
        assert_eq!(
            cert.metadata
                .annotations
                .as_ref()
                .unwrap()
                .get(generation::CA_CERT)
                .unwrap(),
            "0"
        );

        let key = parse_body(posts[1]);
        assert_eq!(key.metadata.name.as_deref(), Some("out-key"));
        assert_eq!(
            key.data.as_ref().unwrap().get(data_keys::CA_KEY).unwrap().0,
            b"C"
        );
        assert_eq!(
            key.metadata.labels.as_ref().unwrap().get(labels::HASH).unwrap(),
            &fingerprint
        );
        assert_eq!(
            key.metadata
                .annotations
                .as_ref()
                .unwrap()
                .get(generation::CA_KEY)
                .unwrap(),
            "0"
        );
    }

    #[tokio::test]
    async fn test_sync_in_sync_performs_zero_writes() {
        let secret = make_source(routing_annotations());
        let fingerprint = source_fingerprint(&secret);

        let cert = make_target("out-cert", Some(&fingerprint), generation::CA_CERT, "0");
        let key = make_target("out-key", Some(&fingerprint), generation::CA_KEY, "0");
        let mock = MockService::new()
            .on_get(&format!("{}/out-cert", SECRETS_PATH), 200, &secret_json(&cert))
            .on_get(&format!("{}/out-key", SECRETS_PATH), 200, &secret_json(&key));
        let client = mock.clone().into_client();

        let outcome = sync_tls_bundle(&client, &make_config(false), &secret)
            .await
            .unwrap();

        assert_eq!(outcome, SyncOutcome::InSync);
        assert!(writes(&mock.recorded()).is_empty());
    }

    #[tokio::test]
    async fn test_sync_updates_stale_target() {
        let secret = make_source(routing_annotations());
        let fingerprint = source_fingerprint(&secret);

        let cert = make_target("out-cert", Some(&fingerprint), generation::CA_CERT, "0");
        let stale_key = make_target("out-key", Some("stale"), generation::CA_KEY, "0");
        let mock = MockService::new()
            .on_get(&format!("{}/out-cert", SECRETS_PATH), 200, &secret_json(&cert))
            .on_get(&format!("{}/out-key", SECRETS_PATH), 200, &secret_json(&stale_key))
            .on_put(&format!("{}/out-key", SECRETS_PATH), 200, &secret_json(&stale_key));
        let client = mock.clone().into_client();

        let outcome = sync_tls_bundle(&client, &make_config(false), &secret)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SyncOutcome::Applied {
                created: 0,
                updated: 1
            }
        );

        let requests = mock.recorded();
        let write_requests = writes(&requests);
        assert_eq!(write_requests.len(), 1);
        assert_eq!(write_requests[0].method, "PUT");

        let updated = parse_body(write_requests[0]);
        assert_eq!(updated.metadata.name.as_deref(), Some("out-key"));
        // Generation advances from 0 to 1, optimistic concurrency preserved
        assert_eq!(
            updated
                .metadata
                .annotations
                .as_ref()
                .unwrap()
                .get(generation::CA_KEY)
                .unwrap(),
            "1"
        );
        assert_eq!(updated.metadata.resource_version.as_deref(), Some("42"));
        assert_eq!(
            updated.data.as_ref().unwrap().get(data_keys::CA_KEY).unwrap().0,
            b"C"
        );
    }

    #[tokio::test]
    async fn test_sync_aborts_on_unmanaged_target() {
        let secret = make_source(routing_annotations());

        let foreign = make_target("out-cert", None, generation::CA_CERT, "0");
        let mock = MockService::new().on_get(
            &format!("{}/out-cert", SECRETS_PATH),
            200,
            &secret_json(&foreign),
        );
        let client = mock.clone().into_client();

        let result = sync_tls_bundle(&client, &make_config(false), &secret).await;

        match result {
            Err(MirrorError::UnmanagedTarget { name, label }) => {
                assert_eq!(name, "out-cert");
                assert_eq!(label, labels::HASH);
            }
            other => panic!("expected UnmanagedTarget, got {:?}", other),
        }
        assert!(writes(&mock.recorded()).is_empty());
    }

    #[tokio::test]
    async fn test_sync_write_failure_does_not_block_other_target() {
        let secret = make_source(routing_annotations());

        // Stale cert target whose update fails; absent key target whose
        // create succeeds.
        let stale_cert = make_target("out-cert", Some("stale"), generation::CA_CERT, "0");
        let created = make_target("out-key", Some("x"), generation::CA_KEY, "0");
        let mock = MockService::new()
            .on_get(&format!("{}/out-cert", SECRETS_PATH), 200, &secret_json(&stale_cert))
            .on_put(
                &format!("{}/out-cert", SECRETS_PATH),
                500,
                &status_json(500, "InternalError", "boom"),
            )
            .on_post(SECRETS_PATH, 201, &secret_json(&created));
        let client = mock.clone().into_client();

        let result = sync_tls_bundle(&client, &make_config(false), &secret).await;

        match result {
            Err(MirrorError::TargetWriteError { name, .. }) => assert_eq!(name, "out-cert"),
            other => panic!("expected TargetWriteError, got {:?}", other),
        }

        // Both writes were attempted despite the first one failing
        let requests = mock.recorded();
        assert!(requests
            .iter()
            .any(|r| r.method == "PUT" && r.path.ends_with("/out-cert")));
        assert!(requests.iter().any(|r| r.method == "POST"));
    }

    #[tokio::test]
    async fn test_sync_archives_before_update_when_enabled() {
        let secret = make_source(routing_annotations());
        let fingerprint = source_fingerprint(&secret);

        let cert = make_target("out-cert", Some(&fingerprint), generation::CA_CERT, "0");
        let stale_key = make_target("out-key", Some("stale"), generation::CA_KEY, "0");
        let mock = MockService::new()
            .on_get(&format!("{}/out-cert", SECRETS_PATH), 200, &secret_json(&cert))
            .on_get(&format!("{}/out-key", SECRETS_PATH), 200, &secret_json(&stale_key))
            .on_post(SECRETS_PATH, 201, &secret_json(&stale_key))
            .on_put(&format!("{}/out-key", SECRETS_PATH), 200, &secret_json(&stale_key));
        let client = mock.clone().into_client();

        let outcome = sync_tls_bundle(&client, &make_config(true), &secret)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SyncOutcome::Applied {
                created: 0,
                updated: 1
            }
        );

        let requests = mock.recorded();
        let write_requests = writes(&requests);
        assert_eq!(write_requests.len(), 2);

        // Snapshot create precedes the target update
        assert_eq!(write_requests[0].method, "POST");
        let snapshot = parse_body(write_requests[0]);
        assert_eq!(snapshot.metadata.name.as_deref(), Some("out-key-gen-0"));
        assert_eq!(
            snapshot
                .metadata
                .labels
                .as_ref()
                .unwrap()
                .get(labels::HISTORICAL)
                .unwrap(),
            "true"
        );

        assert_eq!(write_requests[1].method, "PUT");
    }

    #[tokio::test]
    async fn test_sync_tolerates_existing_snapshot() {
        let secret = make_source(routing_annotations());
        let fingerprint = source_fingerprint(&secret);

        let cert = make_target("out-cert", Some(&fingerprint), generation::CA_CERT, "0");
        let stale_key = make_target("out-key", Some("stale"), generation::CA_KEY, "0");
        let mock = MockService::new()
            .on_get(&format!("{}/out-cert", SECRETS_PATH), 200, &secret_json(&cert))
            .on_get(&format!("{}/out-key", SECRETS_PATH), 200, &secret_json(&stale_key))
            .on_post(
                SECRETS_PATH,
                409,
                &status_json(409, "AlreadyExists", "secret \"out-key-gen-0\" already exists"),
            )
            .on_put(&format!("{}/out-key", SECRETS_PATH), 200, &secret_json(&stale_key));
        let client = mock.clone().into_client();

        let outcome = sync_tls_bundle(&client, &make_config(true), &secret)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SyncOutcome::Applied {
                created: 0,
                updated: 1
            }
        );
    }
}
