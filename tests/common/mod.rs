//! In-process fixture server shared by the integration tests.
//!
//! The server runs on its own thread and runtime so that both async tests
//! and blocking-client tests can talk to it. Every request is recorded for
//! later assertions.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use welldatalabs::{blocking, ClientConfig, WellDataClient};

pub const TEST_API_KEY: &str = "b+S15uKWEK0lFU+NomEmvekn8yk/ALTTBAYOJalVKrI=";

pub const JOB_A: &str = "8eeefc91-8b9e-403b-ad27-1d53f339f8a3";
pub const WELL_A: &str = "0c3f3b2e-6a51-4b6c-9d1f-0f3d2e1c4b5a";
pub const API_A: &str = "10-203-04050-60-";

pub const JOB_B: &str = "be9b1ff9-34b2-43bb-bf9a-aec7f77770ee";
pub const WELL_B: &str = "5d1c0a7e-2f4b-4e8a-b1c3-7a9e0d2f6b84";
pub const API_B: &str = "42-123-45678-00-00";

/// Job id that makes the fixture stall before answering.
pub const SLOW_ID: &str = "slow";
/// Job id whose body is not valid JSON.
pub const CORRUPT_ID: &str = "corrupt";

pub const PER_SEC_ROWS: usize = 20_000;

static INIT: Once = Once::new();

/// Initialize logging for tests
pub fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// One request as the fixture saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub api_version: Option<String>,
    pub accept: Option<String>,
    pub connection: Option<String>,
}

#[derive(Clone, Default)]
pub struct Fixture {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Fixture {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last(&self) -> Recorded {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

/// Start the fixture server on a background thread.
pub fn spawn_fixture() -> (SocketAddr, Fixture) {
    init_logging();

    let fixture = Fixture::default();
    let state = fixture.clone();
    let (tx, rx) = std::sync::mpsc::channel();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("fixture runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind fixture");
            tx.send(listener.local_addr().expect("fixture addr"))
                .expect("send fixture addr");
            let app = Router::new().fallback(handle).with_state(state);
            axum::serve(listener, app).await.expect("fixture server");
        });
    });

    let addr = rx.recv().expect("fixture address");
    (addr, fixture)
}

pub fn config_for(addr: SocketAddr) -> ClientConfig {
    ClientConfig::new()
        .with_base_url(format!("http://{}", addr))
        .with_timeout(Duration::from_secs(5))
}

/// Async client pointed at the fixture.
pub fn client_for(addr: SocketAddr) -> WellDataClient {
    WellDataClient::with_config(TEST_API_KEY, config_for(addr)).expect("client")
}

/// Blocking client pointed at the fixture.
pub fn blocking_client_for(addr: SocketAddr) -> blocking::Client {
    blocking::Client::with_config(TEST_API_KEY, config_for(addr)).expect("blocking client")
}

/// An address nothing listens on.
pub fn dead_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.local_addr().expect("addr")
}

// ============================================================================
// FIXTURE DATA
// ============================================================================

/// Map a job id or API number onto a known job id.
fn resolve_job(id: &str) -> Option<&'static str> {
    match id {
        JOB_A | API_A => Some(JOB_A),
        JOB_B | API_B => Some(JOB_B),
        _ => None,
    }
}

fn api_for(job: &str) -> &'static str {
    if job == JOB_A {
        API_A
    } else {
        API_B
    }
}

fn job_header(job: &str) -> Value {
    let (well, api, name, modified) = if job == JOB_A {
        (WELL_A, API_A, "Smith 1H", "2017-06-30T18:00:00")
    } else {
        (WELL_B, API_B, "Jones 4H", "2018-02-14T09:30:00Z")
    };
    json!({
        "jobId": job,
        "wellId": well,
        "wellName": name,
        "api": api,
        "jobStartDate": "2017-06-12T00:00:00",
        "serviceCompany": "Frac Co",
        "operator": "Acme Energy",
        "formation": "Wolfcamp A",
        "bottomholeLatitude": 31.9686,
        "bottomholeLongitude": -102.0779,
        "measuredDepth": 18250,
        "measuredDepthUnitText": "ft",
        "stageCount": 3,
        "surfaceLatitude": null,
        "surfaceLongitude": null,
        "modifiedUtc": modified
    })
}

fn job_summary(job: &str) -> Value {
    let api = api_for(job);
    json!({
        "jobId": job,
        "columnMetadata": [
            {"name": "Stage", "wdlFieldName": "stage_number", "unitText": null, "columnIndex": 0, "dataType": "decimal"},
            {"name": "Clean Volume", "wdlFieldName": "clean_volume", "unitText": "bbl", "columnIndex": 1, "dataType": "decimal"},
            {"name": "Well API", "wdlFieldName": "well_api", "unitText": null, "columnIndex": 2, "dataType": "string"}
        ],
        "rowData": [
            ["Total", "21450.5", api],
            ["1", "7100", api],
            ["2", "7150.5", api],
            ["3", "7200", api]
        ]
    })
}

fn stage_records(job: &str, extra: impl Fn(u32) -> Value) -> Value {
    let api = api_for(job);
    Value::Array(
        (1..=3)
            .map(|stage| {
                let mut record = json!({
                    "jobId": job,
                    "wellName": "Smith 1H",
                    "api": api,
                    "stageNumber": stage,
                });
                if let (Some(base), Value::Object(more)) = (record.as_object_mut(), extra(stage)) {
                    base.extend(more);
                }
                record
            })
            .collect(),
    )
}

fn depth_features(job: &str) -> Value {
    stage_records(job, |stage| {
        json!({
            "feature": "Perforation",
            "name": format!("Cluster {}", stage),
            "topMeasuredDepth": 18000 - stage * 200,
            "bottomMeasuredDepth": 18050 - stage * 200,
            "depthUnit": "ft",
            "seatID": null
        })
    })
}

fn plugs(job: &str) -> Value {
    stage_records(job, |stage| {
        json!({"name": format!("Plug {}", stage), "ordinal": 1, "diameter": 4.5, "diameterUnit": "in"})
    })
}

fn perforations(job: &str) -> Value {
    stage_records(job, |_| json!({"ordinal": 1, "clusters": 5, "shotDensity": 6, "shotDensityUnit": "spf"}))
}

fn proppants(job: &str) -> Value {
    Value::Array(
        (1..=3)
            .map(|stage| {
                json!({
                    "jobId": job,
                    "stageNumber": stage,
                    "name": "100 Mesh",
                    "mass": 150000.25,
                    "massUnit": "lbs",
                    "material": "Sand",
                    "meshSize": "100"
                })
            })
            .collect(),
    )
}

fn sleeves(job: &str) -> Value {
    stage_records(job, |_| json!({"ordinal": 1, "portSize": 2.5, "portSizeUnit": "in", "seatID": 3.25}))
}

fn fluids(job: &str) -> Value {
    stage_records(job, |_| {
        json!({"type": "Chemical", "subType": "Friction Reducer", "name": "FR-66", "volume": 42.5, "volumeUnit": "gal"})
    })
}

fn stage_comments(job: &str) -> Value {
    Value::Array(
        (1..=2)
            .map(|stage| json!({"jobId": job, "stageNumber": stage, "comment": "screened out", "userName": "jdoe"}))
            .collect(),
    )
}

fn custom_flags(job: &str) -> Value {
    json!([{
        "jobId": job,
        "jobTime": "2017-06-12T14:30:00",
        "type": "Screenout",
        "commentText": "pressure spike",
        "associatedValues": [
            {"channelName": "Treating Pressure", "value": 9350.5, "unitText": "psi"}
        ]
    }])
}

/// Per-second CSV: channel names, units, then samples.
pub fn per_sec_csv() -> String {
    let mut csv = String::from(
        "Job Time,Treating Pressure,Slurry Rate,Proppant Concentration\ns,psi,bpm,ppa\n",
    );
    for i in 0..PER_SEC_ROWS {
        csv.push_str(&format!("{},{}.5,{}.2,{}\n", i, 8000 + i % 500, 60 + i % 20, i % 4));
    }
    csv
}

// ============================================================================
// ROUTING
// ============================================================================

fn json_response(status: StatusCode, body: Value) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body.to_string(),
    )
        .into_response()
}

fn text_response(status: StatusCode, content_type: &'static str, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
}

/// Everything known about both jobs for list endpoints.
fn both(records: fn(&str) -> Value) -> Value {
    let mut all = records(JOB_A).as_array().cloned().unwrap_or_default();
    all.extend(records(JOB_B).as_array().cloned().unwrap_or_default());
    Value::Array(all)
}

/// Records for one job, or `[]` when the id is unknown.
fn one(id: &str, records: fn(&str) -> Value) -> Value {
    resolve_job(id).map(records).unwrap_or_else(|| json!([]))
}

async fn handle(State(fixture): State<Fixture>, request: Request) -> Response {
    let recorded = {
        let header = |name: &str| {
            request
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(String::from)
        };
        Recorded {
            path: request.uri().path().to_string(),
            query: request.uri().query().map(String::from),
            authorization: header("authorization"),
            api_version: header("api-version"),
            accept: header("accept"),
            connection: header("connection"),
        }
    };
    drop(request);
    fixture.requests.lock().unwrap().push(recorded.clone());

    if recorded.authorization.as_deref() != Some(format!("Bearer {}", TEST_API_KEY).as_str()) {
        return json_response(StatusCode::UNAUTHORIZED, json!({"message": "Invalid API key"}));
    }

    route(&recorded).await
}

async fn route(recorded: &Recorded) -> Response {
    let path = recorded.path.trim_start_matches('/');
    let (resource, id) = match path.split_once('/') {
        Some((resource, id)) => (resource, Some(id)),
        None => (path, None),
    };

    match (resource, id) {
        ("jobheaders", None) => json_response(StatusCode::OK, json!([job_header(JOB_A), job_header(JOB_B)])),
        ("jobheaders", Some(id)) => json_response(StatusCode::OK, one(id, |job| json!([job_header(job)]))),

        ("jobsummaries", None) => json_response(StatusCode::OK, json!([job_summary(JOB_A), job_summary(JOB_B)])),
        ("jobsummaries", Some(id)) => json_response(StatusCode::OK, one(id, |job| json!([job_summary(job)]))),

        ("depthfeatures", None) => json_response(StatusCode::OK, both(depth_features)),
        ("depthfeatures", Some(id)) => json_response(StatusCode::OK, one(id, depth_features)),

        ("customflags", Some(SLOW_ID)) => {
            tokio::time::sleep(Duration::from_secs(10)).await;
            json_response(StatusCode::OK, json!([]))
        }
        ("customflags", None) => json_response(StatusCode::OK, both(custom_flags)),
        ("customflags", Some(id)) => json_response(StatusCode::OK, one(id, custom_flags)),

        ("fluidsandchemicals", None) => json_response(StatusCode::OK, both(fluids)),
        ("fluidsandchemicals", Some(id)) => json_response(StatusCode::OK, one(id, fluids)),

        ("plugs", Some(id)) => match resolve_job(id) {
            Some(job) => json_response(StatusCode::OK, plugs(job)),
            None => json_response(StatusCode::NOT_FOUND, json!({"message": "No job found for id"})),
        },

        ("perforations", Some(id)) => match resolve_job(id) {
            Some(job) => json_response(StatusCode::OK, perforations(job)),
            None => text_response(StatusCode::INTERNAL_SERVER_ERROR, "text/plain", "boom".into()),
        },

        ("proppants", Some(id)) => json_response(StatusCode::OK, one(id, proppants)),

        ("sleeves", Some(CORRUPT_ID)) => text_response(StatusCode::OK, "application/json", "{not json".into()),
        ("sleeves", Some(id)) => json_response(StatusCode::OK, one(id, sleeves)),

        ("stagecomments", Some(id)) => match resolve_job(id) {
            Some(job) => json_response(StatusCode::OK, stage_comments(job)),
            None => text_response(StatusCode::OK, "application/json", String::new()),
        },

        ("persecdata", None) => {
            let id = recorded.query.as_deref().and_then(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .find(|(k, _)| k == "id")
                    .map(|(_, v)| v.into_owned())
            });
            match id.as_deref().and_then(resolve_job) {
                Some(_) => text_response(StatusCode::OK, "text/csv", per_sec_csv()),
                None => json_response(
                    StatusCode::NOT_FOUND,
                    json!({"message": "Per-sec data not available for this job"}),
                ),
            }
        }

        _ => json_response(StatusCode::NOT_FOUND, json!({"message": "Unknown route"})),
    }
}
