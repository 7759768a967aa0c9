use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use url::Url;

use crate::proteomic::errors::AnalysisError;
use crate::proteomic::models::analysis_result::AnalysisResult;
use crate::proteomic::models::enzymes::catalog::EnzymeCatalog;
use crate::proteomic::models::sequence::AlphabetPolicy;
use crate::proteomic::tasks::analysis::{AnalysisJob, AnalysisRequest, Analyzer};
use crate::proteomic::utility::identification::{self, IdentificationPolicy};
use crate::proteomic::utility::identification::remote_lookup::DEFAULT_PREFIX_LENGTH;
use crate::proteomic::utility::record_search::{HttpRecordSearch, RecordSearch};

pub const PORT_VARIABLE: &str = "PORT";
pub const DEFAULT_PORT: u16 = 10000;
const DEFAULT_MAX_CANDIDATES: usize = 10;
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

pub struct ServerArguments {
    port: u16,
    policy: IdentificationPolicy,
    catalog_file: Option<PathBuf>,
    alphabet_policy: AlphabetPolicy,
    record_search_url: Option<Url>,
    prefix_length: usize,
    max_candidates: usize,
    request_timeout: Duration,
    thread_count: usize
}

impl ServerArguments {
    pub fn get_port(&self) -> u16 {
        return self.port;
    }

    pub fn get_policy(&self) -> IdentificationPolicy {
        return self.policy;
    }

    pub fn get_catalog_file(&self) -> Option<&PathBuf> {
        return self.catalog_file.as_ref();
    }

    pub fn get_alphabet_policy(&self) -> AlphabetPolicy {
        return self.alphabet_policy;
    }

    pub fn get_record_search_url(&self) -> Option<&Url> {
        return self.record_search_url.as_ref();
    }

    pub fn get_prefix_length(&self) -> usize {
        return self.prefix_length;
    }

    pub fn get_max_candidates(&self) -> usize {
        return self.max_candidates;
    }

    pub fn get_request_timeout(&self) -> Duration {
        return self.request_timeout;
    }

    pub fn get_thread_count(&self) -> usize {
        return self.thread_count;
    }

    pub fn build_cli() -> clap::App<'static, 'static> {
        return clap::App::new("enzyme-damage")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Identifies pancreatic enzymes and estimates the functional impact of sequence damage")
            .arg(clap::Arg::with_name("PORT")
                .long("port")
                .short("p")
                .takes_value(true)
                .help("Listening port, overrides the PORT environment variable (default 10000)"))
            .arg(clap::Arg::with_name("POLICY")
                .long("policy")
                .takes_value(true)
                .possible_values(&["signature", "length-motif", "remote", "cascade"])
                .help("How reference sequences are matched to enzymes (default signature)"))
            .arg(clap::Arg::with_name("CATALOG_FILE")
                .long("catalog")
                .takes_value(true)
                .help("CSV file replacing the built-in enzyme catalog"))
            .arg(clap::Arg::with_name("LENIENT_ALPHABET")
                .long("lenient-alphabet")
                .help("Drop non-canonical residue letters instead of rejecting the request"))
            .arg(clap::Arg::with_name("RECORD_SEARCH_URL")
                .long("record-search-url")
                .takes_value(true)
                .help("Endpoint of the external protein record search"))
            .arg(clap::Arg::with_name("PREFIX_LENGTH")
                .long("prefix-length")
                .takes_value(true)
                .help("Residues of the reference sent to the record search (default 20)"))
            .arg(clap::Arg::with_name("MAX_CANDIDATES")
                .long("max-candidates")
                .takes_value(true)
                .help("Maximum records taken from one record search (default 10)"))
            .arg(clap::Arg::with_name("REQUEST_TIMEOUT")
                .long("request-timeout")
                .takes_value(true)
                .help("Seconds a single analysis may take (default 30)"))
            .arg(clap::Arg::with_name("THREAD_COUNT")
                .long("threads")
                .takes_value(true)
                .help("Worker threads (default number of CPUs)"));
    }

    /// Flags win over the environment, the environment over defaults.
    pub fn from_cli_args(cli_args: &clap::ArgMatches) -> Result<Self> {
        let port: u16 = match cli_args.value_of("PORT") {
            Some(port) => parse_number("port", port)?,
            None => match env::var(PORT_VARIABLE) {
                Ok(port) => parse_number(PORT_VARIABLE, port.as_str())?,
                Err(_) => DEFAULT_PORT
            }
        };
        let policy: IdentificationPolicy = match cli_args.value_of("POLICY") {
            Some(policy) => policy.parse::<IdentificationPolicy>().map_err(|err| anyhow!(err))?,
            None => IdentificationPolicy::Signature
        };
        let record_search_url: Option<Url> = match cli_args.value_of("RECORD_SEARCH_URL") {
            Some(url) => Some(Url::parse(url).with_context(|| format!("invalid record-search-url '{}'", url))?),
            None => None
        };
        if policy.needs_record_search() && record_search_url.is_none() {
            bail!("policy '{}' needs --record-search-url", policy);
        }
        let request_timeout_seconds: u64 = match cli_args.value_of("REQUEST_TIMEOUT") {
            Some(seconds) => parse_number("request-timeout", seconds)?,
            None => DEFAULT_REQUEST_TIMEOUT_SECONDS
        };
        if request_timeout_seconds == 0 {
            bail!("request-timeout must be at least one second");
        }
        return Ok(Self {
            port: port,
            policy: policy,
            catalog_file: cli_args.value_of("CATALOG_FILE").map(PathBuf::from),
            alphabet_policy: if cli_args.is_present("LENIENT_ALPHABET") { AlphabetPolicy::Lenient } else { AlphabetPolicy::Strict },
            record_search_url: record_search_url,
            prefix_length: match cli_args.value_of("PREFIX_LENGTH") {
                Some(length) => parse_number("prefix-length", length)?,
                None => DEFAULT_PREFIX_LENGTH
            },
            max_candidates: match cli_args.value_of("MAX_CANDIDATES") {
                Some(count) => parse_number("max-candidates", count)?,
                None => DEFAULT_MAX_CANDIDATES
            },
            request_timeout: Duration::from_secs(request_timeout_seconds),
            thread_count: match cli_args.value_of("THREAD_COUNT") {
                Some(count) => parse_number("threads", count)?,
                None => num_cpus::get()
            }
        });
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    return value.trim().parse::<T>().map_err(|_| anyhow!("could not parse {} '{}' as a non-negative integer", name, value));
}

/// Shared by all handlers.
#[derive(Clone)]
pub struct ServerState {
    analyzer: Arc<Analyzer>,
    request_timeout: Duration,
    started_at: OffsetDateTime
}

impl ServerState {
    pub fn new(analyzer: Analyzer, request_timeout: Duration) -> Self {
        return Self {
            analyzer: Arc::new(analyzer),
            request_timeout: request_timeout,
            started_at: OffsetDateTime::now_utc()
        }
    }
}

/// Loads the catalog and wires the identification strategy.
/// Must run outside the async runtime, the HTTP record search uses a blocking client.
pub fn build_analyzer(server_args: &ServerArguments) -> Result<Analyzer> {
    let catalog = match server_args.get_catalog_file() {
        Some(path) => EnzymeCatalog::from_csv_file(path)
            .with_context(|| format!("could not load enzyme catalog from {}", path.display()))?,
        None => EnzymeCatalog::pancreatic().context("built-in enzyme catalog is invalid")?
    };
    let record_search: Option<Arc<dyn RecordSearch>> = match server_args.get_record_search_url() {
        Some(url) => Some(Arc::new(HttpRecordSearch::new(
            url.clone(),
            server_args.get_max_candidates(),
            server_args.get_request_timeout()
        )?)),
        None => None
    };
    if server_args.get_policy() == IdentificationPolicy::Cascade && record_search.is_none() {
        warn!("cascade policy without record search, remote step disabled");
    }
    let strategy = identification::get(server_args.get_policy(), record_search, server_args.get_prefix_length());
    info!(enzymes = catalog.len(), policy = %server_args.get_policy(), "enzyme catalog loaded");
    return Ok(Analyzer::new(catalog, strategy, server_args.get_alphabet_policy()));
}

/// Browser frontends on any origin may call both routes.
pub fn cors_layer() -> CorsLayer {
    return CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);
}

pub fn router(state: ServerState) -> Router {
    return Router::new()
        .route("/", get(status_handler))
        .route("/analyze", post(analyze_handler))
        .layer(cors_layer())
        .with_state(state);
}

pub async fn serve(port: u16, state: ServerState) -> Result<()> {
    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await
        .with_context(|| format!("could not bind {}", addr))?;
    info!("Backend running on port {}", port);
    axum::serve(listener, app).await?;
    return Ok(());
}

#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    identification_policy: String,
    started_at: String
}

/// `GET /`, liveness.
pub async fn status_handler(State(state): State<ServerState>) -> Json<ServiceStatus> {
    return Json(ServiceStatus {
        status: "running",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        identification_policy: state.analyzer.get_strategy_name().to_owned(),
        started_at: state.started_at.format(&Rfc3339).unwrap_or_default()
    });
}

/// `POST /analyze`. The pipeline runs on the blocking pool under the request timeout.
pub async fn analyze_handler(
    State(state): State<ServerState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>
) -> Result<Json<AnalysisResult>, AnalysisError> {
    let Json(request) = payload.map_err(|rejection| AnalysisError::MalformedBody(rejection.body_text()))?;
    let job = AnalysisJob::from_request(request)?;
    let analyzer = state.analyzer.clone();
    let task = tokio::task::spawn_blocking(move || analyzer.analyze(&job));
    match tokio::time::timeout(state.request_timeout, task).await {
        Ok(Ok(result)) => return result.map(Json),
        Ok(Err(join_error)) => return Err(AnalysisError::Internal(join_error.to_string())),
        Err(_) => return Err(AnalysisError::Timeout)
    }
}
