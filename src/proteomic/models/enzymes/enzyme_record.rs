use std::ops::RangeInclusive;

use serde::Serialize;

/// Description of one known enzyme plus the hints used to recognise it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnzymeRecord {
    name: String,
    accession: String,
    description: String,
    signature_motifs: Vec<String>,
    length_range: Option<RangeInclusive<usize>>,
    // 1-based, ascending, no duplicates
    catalytic_positions: Vec<usize>
}

impl EnzymeRecord {
    pub fn new(name: &str, accession: &str, description: &str) -> Self {
        return Self {
            name: name.trim().to_owned(),
            accession: accession.trim().to_owned(),
            description: description.trim().to_owned(),
            signature_motifs: Vec::new(),
            length_range: None,
            catalytic_positions: Vec::new()
        }
    }

    pub fn with_signature_motifs(mut self, signature_motifs: &[&str]) -> Self {
        self.signature_motifs = signature_motifs.iter()
            .map(|motif| motif.trim().to_ascii_uppercase())
            .filter(|motif| !motif.is_empty())
            .collect();
        return self;
    }

    pub fn with_length_range(mut self, min_length: usize, max_length: usize) -> Self {
        self.length_range = Some(min_length..=max_length);
        return self;
    }

    pub fn with_catalytic_positions(mut self, catalytic_positions: &[usize]) -> Self {
        let mut positions = catalytic_positions.to_vec();
        positions.sort_unstable();
        positions.dedup();
        self.catalytic_positions = positions;
        return self;
    }

    pub fn get_name(&self) -> &str {
        return self.name.as_str();
    }

    pub fn get_accession(&self) -> &str {
        return self.accession.as_str();
    }

    pub fn get_description(&self) -> &str {
        return self.description.as_str();
    }

    pub fn get_signature_motifs(&self) -> &[String] {
        return &self.signature_motifs;
    }

    pub fn get_length_range(&self) -> Option<&RangeInclusive<usize>> {
        return self.length_range.as_ref();
    }

    pub fn get_catalytic_positions(&self) -> &[usize] {
        return &self.catalytic_positions;
    }

    pub fn is_catalytic_position(&self, position: usize) -> bool {
        return self.catalytic_positions.binary_search(&position).is_ok();
    }

    /// An entry without motifs or length range cannot be matched by any catalog strategy.
    pub fn has_identification_hint(&self) -> bool {
        return !self.signature_motifs.is_empty() || self.length_range.is_some();
    }

    pub fn accepts_length(&self, length: usize) -> bool {
        return match &self.length_range {
            Some(range) => range.contains(&length),
            None => false
        }
    }
}
