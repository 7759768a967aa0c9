use std::sync::Arc;

use tracing::{debug, info};

use crate::proteomic::models::enzymes::catalog::EnzymeCatalog;
use crate::proteomic::models::enzymes::enzyme_record::EnzymeRecord;
use crate::proteomic::models::sequence::NormalizedSequence;
use crate::proteomic::utility::identification::IdentificationStrategy;
use crate::proteomic::utility::record_search::{CandidateRecord, RecordSearch};

pub const DEFAULT_PREFIX_LENGTH: usize = 20;

/// Names containing one of these (case-insensitively) are pancreatic enzymes.
/// Zymogen forms are listed although their active names already match.
pub const PANCREATIC_ENZYME_KEYWORDS: [&str; 15] = [
    "trypsin",
    "trypsinogen",
    "chymotrypsin",
    "chymotrypsinogen",
    "elastase",
    "proelastase",
    "carboxypeptidase",
    "procarboxypeptidase",
    "amylase",
    "lipase",
    "colipase",
    "procolipase",
    "phospholipase",
    "prophospholipase",
    "ribonuclease"
];

/// Asks an external record search with a prefix of the sequence and takes
/// the first candidate named like a pancreatic enzyme.
pub struct RemoteLookup {
    name: &'static str,
    record_search: Option<Arc<dyn RecordSearch>>,
    prefix_length: usize
}

impl RemoteLookup {
    pub fn new(record_search: Option<Arc<dyn RecordSearch>>, prefix_length: usize) -> Self {
        return Self {
            name: "remote",
            record_search: record_search,
            prefix_length: prefix_length.max(1)
        }
    }

    pub fn is_pancreatic_enzyme_name(name: &str) -> bool {
        let lowercase_name = name.to_lowercase();
        return PANCREATIC_ENZYME_KEYWORDS.iter().any(|keyword| lowercase_name.contains(keyword));
    }

    /// Catalytic positions and description come from the catalog when it knows the accession.
    fn to_enzyme_record(candidate: &CandidateRecord, catalog: &EnzymeCatalog) -> EnzymeRecord {
        return match catalog.find_by_accession(&candidate.accession) {
            Some(known) => EnzymeRecord::new(&candidate.name, &candidate.accession, known.get_description())
                .with_catalytic_positions(known.get_catalytic_positions()),
            None => EnzymeRecord::new(&candidate.name, &candidate.accession, "Retrieved from external record search")
        }
    }
}

impl IdentificationStrategy for RemoteLookup {
    fn get_name(&self) -> &str {
        return self.name;
    }

    fn identify(&self, sequence: &NormalizedSequence, catalog: &EnzymeCatalog) -> Option<EnzymeRecord> {
        let record_search = match &self.record_search {
            Some(record_search) => record_search,
            None => return None
        };
        if sequence.is_empty() {
            return None;
        }
        let candidates = record_search.search(sequence.prefix(self.prefix_length));
        debug!(count = candidates.len(), "remote candidates received");
        let hit = candidates.iter()
            .find(|candidate| !candidate.accession.trim().is_empty() && Self::is_pancreatic_enzyme_name(&candidate.name))?;
        info!(accession = hit.accession.as_str(), "remote record search identified enzyme");
        return Some(Self::to_enzyme_record(hit, catalog));
    }
}
