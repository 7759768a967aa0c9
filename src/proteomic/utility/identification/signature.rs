use crate::proteomic::models::enzymes::catalog::EnzymeCatalog;
use crate::proteomic::models::enzymes::enzyme_record::EnzymeRecord;
use crate::proteomic::models::sequence::NormalizedSequence;
use crate::proteomic::utility::identification::IdentificationStrategy;

/// First catalog entry with at least one signature motif inside the sequence.
pub struct SignatureMatch {
    name: &'static str
}

impl SignatureMatch {
    pub fn new() -> Self {
        return Self { name: "signature" }
    }
}

impl IdentificationStrategy for SignatureMatch {
    fn get_name(&self) -> &str {
        return self.name;
    }

    fn identify(&self, sequence: &NormalizedSequence, catalog: &EnzymeCatalog) -> Option<EnzymeRecord> {
        return catalog.get_records().iter()
            .find(|record| record.get_signature_motifs().iter().any(|motif| sequence.contains(motif)))
            .cloned();
    }
}
