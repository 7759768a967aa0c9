use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// One hit returned by an external protein record search.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawCandidateRecord")]
pub struct CandidateRecord {
    pub name: String,
    pub accession: String,
    pub sequence: String
}

/// Every known spelling of a field gets its own slot, the first non-blank one wins.
#[derive(Deserialize)]
struct RawCandidateRecord {
    name: Option<String>,
    protein_name: Option<String>,
    #[serde(rename = "proteinName")]
    protein_name_camel: Option<String>,
    description: Option<String>,
    accession: Option<String>,
    accession_id: Option<String>,
    #[serde(rename = "accessionId")]
    accession_id_camel: Option<String>,
    #[serde(rename = "primaryAccession")]
    primary_accession: Option<String>,
    id: Option<String>,
    sequence: Option<String>
}

fn first_present(values: Vec<Option<String>>) -> String {
    return values.into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .unwrap_or_default();
}

impl From<RawCandidateRecord> for CandidateRecord {
    fn from(raw: RawCandidateRecord) -> Self {
        return Self {
            name: first_present(vec![raw.name, raw.protein_name, raw.protein_name_camel, raw.description]),
            accession: first_present(vec![raw.accession, raw.accession_id, raw.accession_id_camel, raw.primary_accession, raw.id]),
            sequence: raw.sequence.unwrap_or_default()
        }
    }
}

/// Remote lookup keyed by a sequence prefix. Implementations never fail:
/// an unreachable or misbehaving service yields no candidates.
pub trait RecordSearch: Send + Sync {
    fn search(&self, sequence_prefix: &str) -> Vec<CandidateRecord>;
}

/// Lets plain closures stand in for the remote service.
impl<F> RecordSearch for F where F: Fn(&str) -> Vec<CandidateRecord> + Send + Sync {
    fn search(&self, sequence_prefix: &str) -> Vec<CandidateRecord> {
        return self(sequence_prefix);
    }
}

#[derive(Debug, Error)]
pub enum RecordSearchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("service answered with status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response: {0}")]
    Payload(#[from] serde_json::Error)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SearchResponse {
    List(Vec<CandidateRecord>),
    Wrapped { results: Vec<CandidateRecord> }
}

/// Record search over HTTP: `GET <base_url>?query=<prefix>&size=<max_candidates>`,
/// answered by a JSON list of records (optionally wrapped in `{"results": [...]}`).
///
/// Uses the blocking client, so `search` must run on a blocking thread.
pub struct HttpRecordSearch {
    client: reqwest::blocking::Client,
    base_url: Url,
    max_candidates: usize
}

impl HttpRecordSearch {
    pub fn new(base_url: Url, max_candidates: usize, timeout: Duration) -> Result<Self, RecordSearchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        return Ok(Self {
            client: client,
            base_url: base_url,
            max_candidates: max_candidates
        });
    }

    pub fn get_query_url(&self, sequence_prefix: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("query", sequence_prefix)
            .append_pair("size", self.max_candidates.to_string().as_str());
        return url;
    }

    fn fetch(&self, sequence_prefix: &str) -> Result<Vec<CandidateRecord>, RecordSearchError> {
        let response = self.client.get(self.get_query_url(sequence_prefix)).send()?;
        if !response.status().is_success() {
            return Err(RecordSearchError::Status(response.status()));
        }
        let body = response.text()?;
        let mut candidates = match serde_json::from_str::<SearchResponse>(body.as_str())? {
            SearchResponse::List(candidates) => candidates,
            SearchResponse::Wrapped { results } => results
        };
        candidates.truncate(self.max_candidates);
        return Ok(candidates);
    }
}

impl RecordSearch for HttpRecordSearch {
    fn search(&self, sequence_prefix: &str) -> Vec<CandidateRecord> {
        match self.fetch(sequence_prefix) {
            Ok(candidates) => {
                debug!(count = candidates.len(), "record search returned candidates");
                return candidates;
            },
            Err(err) => {
                warn!(error = %err, host = self.base_url.host_str().unwrap_or(""), "record search failed, treating as no candidates");
                return Vec::new();
            }
        }
    }
}
