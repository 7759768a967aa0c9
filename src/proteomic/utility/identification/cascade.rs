use tracing::debug;

use crate::proteomic::models::enzymes::catalog::EnzymeCatalog;
use crate::proteomic::models::enzymes::enzyme_record::EnzymeRecord;
use crate::proteomic::models::sequence::NormalizedSequence;
use crate::proteomic::utility::identification::IdentificationStrategy;

/// Tries each strategy in order, first hit wins.
pub struct Cascade {
    strategies: Vec<Box<dyn IdentificationStrategy>>
}

impl Cascade {
    pub fn new(strategies: Vec<Box<dyn IdentificationStrategy>>) -> Self {
        return Self { strategies: strategies }
    }
}

impl IdentificationStrategy for Cascade {
    fn get_name(&self) -> &str {
        return "cascade";
    }

    fn identify(&self, sequence: &NormalizedSequence, catalog: &EnzymeCatalog) -> Option<EnzymeRecord> {
        for strategy in self.strategies.iter() {
            if let Some(record) = strategy.identify(sequence, catalog) {
                debug!(strategy = strategy.get_name(), accession = record.get_accession(), "cascade step matched");
                return Some(record);
            }
        }
        return None;
    }
}
