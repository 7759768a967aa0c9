use crate::proteomic::models::enzymes::catalog::EnzymeCatalog;
use crate::proteomic::models::enzymes::enzyme_record::EnzymeRecord;
use crate::proteomic::models::sequence::NormalizedSequence;
use crate::proteomic::utility::identification::IdentificationStrategy;

/// Among entries whose length range holds the sequence length, the one with
/// most motif hits. All motifs but one must hit (at least one in any case).
/// Equal scores go to the entry listed first.
pub struct LengthMotifMatch {
    name: &'static str
}

impl LengthMotifMatch {
    pub fn new() -> Self {
        return Self { name: "length-motif" }
    }

    pub fn get_required_hits(motif_count: usize) -> usize {
        return motif_count.saturating_sub(1).max(1);
    }
}

impl IdentificationStrategy for LengthMotifMatch {
    fn get_name(&self) -> &str {
        return self.name;
    }

    fn identify(&self, sequence: &NormalizedSequence, catalog: &EnzymeCatalog) -> Option<EnzymeRecord> {
        let mut best_match: Option<(&EnzymeRecord, usize)> = None;
        for record in catalog.get_records() {
            if !record.accepts_length(sequence.len()) {
                continue;
            }
            let motifs = record.get_signature_motifs();
            let hits = motifs.iter().filter(|motif| sequence.contains(motif)).count();
            if hits < Self::get_required_hits(motifs.len()) {
                continue;
            }
            // strictly greater keeps the earlier entry on ties
            match best_match {
                Some((_, best_hits)) if best_hits >= hits => (),
                _ => best_match = Some((record, hits))
            }
        }
        return best_match.map(|(record, _)| record.clone());
    }
}
