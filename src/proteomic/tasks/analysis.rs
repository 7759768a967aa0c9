use serde::Deserialize;
use time::OffsetDateTime;
use tracing::info;

use crate::proteomic::errors::AnalysisError;
use crate::proteomic::models::analysis_result::AnalysisResult;
use crate::proteomic::models::enzymes::catalog::EnzymeCatalog;
use crate::proteomic::models::sequence::{AlphabetPolicy, NormalizedSequence};
use crate::proteomic::utility::classifier;
use crate::proteomic::utility::comparator;
use crate::proteomic::utility::identification::IdentificationStrategy;
use crate::proteomic::utility::logger;

const BOTH_SEQUENCES_REQUIRED: &str = "Both reference and damaged sequences are required";
const REFERENCE_SEQUENCE_REQUIRED: &str = "reference_sequence is required";
const DAMAGED_SEQUENCE_REQUIRED: &str = "damaged_sequence is required";

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default, alias = "normalSeq")]
    pub reference_sequence: Option<String>,
    #[serde(default, alias = "damagedSeq")]
    pub damaged_sequence: Option<String>,
    /// single-sequence form: identification only
    #[serde(default)]
    pub sequence: Option<String>
}

/// A request whose required fields are present (not yet normalized).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisJob {
    Compare { reference: String, damaged: String },
    IdentifyOnly { reference: String }
}

impl AnalysisJob {
    pub fn from_request(request: AnalysisRequest) -> Result<Self, AnalysisError> {
        let reference = non_blank(request.reference_sequence);
        let damaged = non_blank(request.damaged_sequence);
        let single = non_blank(request.sequence);
        match (reference, damaged, single) {
            (Some(reference), Some(damaged), _) => return Ok(AnalysisJob::Compare { reference: reference, damaged: damaged }),
            (None, None, Some(sequence)) => return Ok(AnalysisJob::IdentifyOnly { reference: sequence }),
            (Some(_), None, _) => return Err(AnalysisError::MissingSequence(DAMAGED_SEQUENCE_REQUIRED)),
            (None, Some(_), _) => return Err(AnalysisError::MissingSequence(REFERENCE_SEQUENCE_REQUIRED)),
            (None, None, None) => return Err(AnalysisError::MissingSequence(BOTH_SEQUENCES_REQUIRED))
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    return value.filter(|value| !value.trim().is_empty());
}

/// The normalize -> identify -> compare -> classify pipeline. Holds only
/// read-only state, so one instance serves all requests concurrently.
pub struct Analyzer {
    catalog: EnzymeCatalog,
    strategy: Box<dyn IdentificationStrategy>,
    alphabet_policy: AlphabetPolicy
}

impl Analyzer {
    pub fn new(catalog: EnzymeCatalog, strategy: Box<dyn IdentificationStrategy>, alphabet_policy: AlphabetPolicy) -> Self {
        return Self {
            catalog: catalog,
            strategy: strategy,
            alphabet_policy: alphabet_policy
        }
    }

    pub fn get_strategy_name(&self) -> &str {
        return self.strategy.get_name();
    }

    /// May block (remote record search), call from a blocking context.
    pub fn analyze(&self, job: &AnalysisJob) -> Result<AnalysisResult, AnalysisError> {
        let start_time = OffsetDateTime::now_utc();
        let (reference_raw, damaged_raw) = match job {
            AnalysisJob::Compare { reference, damaged } => (reference.as_str(), Some(damaged.as_str())),
            AnalysisJob::IdentifyOnly { reference } => (reference.as_str(), None)
        };
        let reference = self.parse("reference_sequence", reference_raw)?;
        let damaged = match damaged_raw {
            Some(raw) => Some(self.parse("damaged_sequence", raw)?),
            None => None
        };

        let enzyme = self.strategy.identify(&reference, &self.catalog);
        let result = match (&enzyme, &damaged) {
            (None, _) => AnalysisResult::new(None, classifier::unrecognized(), Vec::new()),
            (Some(record), None) => AnalysisResult::new(Some(record), classifier::identification_only(Some(record)), Vec::new()),
            (Some(record), Some(damaged)) => {
                let differences = comparator::compare(&reference, damaged);
                let assessment = classifier::classify(&differences, Some(record));
                AnalysisResult::new(Some(record), assessment, differences)
            }
        };

        let elapsed = OffsetDateTime::now_utc() - start_time;
        info!(
            reference = logger::fingerprint(reference.get_aa_sequence()).as_str(),
            reference_length = reference.len(),
            damaged_length = damaged.as_ref().map_or(0, |damaged| damaged.len()),
            strategy = self.strategy.get_name(),
            accession = result.get_accession_id(),
            damage_type = %result.get_damage_type(),
            elapsed_ms = elapsed.whole_milliseconds() as u64,
            "analysis finished"
        );
        return Ok(result);
    }

    fn parse(&self, field: &'static str, raw: &str) -> Result<NormalizedSequence, AnalysisError> {
        return NormalizedSequence::parse(raw, self.alphabet_policy)
            .map_err(|source| AnalysisError::InvalidSequence { field: field, source: source });
    }
}
