use std::fmt;

use serde::{Serialize, Serializer};

use crate::proteomic::models::diff_entry::DiffEntry;
use crate::proteomic::models::enzymes::enzyme_record::EnzymeRecord;

pub const UNKNOWN_ENZYME_NAME: &str = "Unknown pancreatic enzyme";
pub const UNKNOWN_ACCESSION: &str = "N/A";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DamageType {
    NoDamage,
    Minor,
    Moderate,
    Severe,
    Catalytic,
    Unknown,
    NotAssessed
}

impl DamageType {
    pub fn as_str(&self) -> &'static str {
        return match self {
            DamageType::NoDamage => "no damage",
            DamageType::Minor => "minor damage",
            DamageType::Moderate => "moderate damage",
            DamageType::Severe => "severe damage",
            DamageType::Catalytic => "catalytic damage",
            DamageType::Unknown => "unknown",
            DamageType::NotAssessed => "not assessed"
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for DamageType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh
}

impl ConfidenceLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            return ConfidenceLevel::VeryHigh;
        } else if score >= 0.7 {
            return ConfidenceLevel::High;
        } else if score >= 0.4 {
            return ConfidenceLevel::Medium;
        }
        return ConfidenceLevel::Low;
    }
}

/// Score in [0, 1] together with its coarse level.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Confidence {
    score: f64,
    level: ConfidenceLevel
}

impl Confidence {
    pub fn new(score: f64) -> Self {
        let score = score.clamp(0.0, 1.0);
        return Self {
            score: score,
            level: ConfidenceLevel::from_score(score)
        }
    }

    pub fn get_score(&self) -> f64 {
        return self.score;
    }

    pub fn get_level(&self) -> ConfidenceLevel {
        return self.level;
    }
}

/// The classifier's verdict, before enzyme identity is merged in.
#[derive(Debug, Clone, PartialEq)]
pub struct DamageAssessment {
    pub damage_type: DamageType,
    pub damaged_region: &'static str,
    pub functional_impact: String,
    pub confidence: Confidence,
    pub affected_catalytic_positions: Vec<usize>
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    enzyme_name: String,
    accession_id: String,
    enzyme_function: String,
    damage_type: DamageType,
    damaged_region: String,
    functional_impact: String,
    confidence: f64,
    confidence_level: ConfidenceLevel,
    differences_count: usize,
    affected_catalytic_positions: Vec<usize>,
    differences: Vec<DiffEntry>
}

impl AnalysisResult {
    /// `enzyme` is `None` when identification found nothing.
    pub fn new(enzyme: Option<&EnzymeRecord>, assessment: DamageAssessment, differences: Vec<DiffEntry>) -> Self {
        let (enzyme_name, accession_id, enzyme_function) = match enzyme {
            Some(record) => (
                record.get_name().to_owned(),
                record.get_accession().to_owned(),
                record.get_description().to_owned()
            ),
            None => (UNKNOWN_ENZYME_NAME.to_owned(), UNKNOWN_ACCESSION.to_owned(), String::new())
        };
        return Self {
            enzyme_name: enzyme_name,
            accession_id: accession_id,
            enzyme_function: enzyme_function,
            damage_type: assessment.damage_type,
            damaged_region: assessment.damaged_region.to_owned(),
            functional_impact: assessment.functional_impact,
            confidence: assessment.confidence.get_score(),
            confidence_level: assessment.confidence.get_level(),
            differences_count: differences.len(),
            affected_catalytic_positions: assessment.affected_catalytic_positions,
            differences: differences
        }
    }

    pub fn get_enzyme_name(&self) -> &str {
        return self.enzyme_name.as_str();
    }

    pub fn get_accession_id(&self) -> &str {
        return self.accession_id.as_str();
    }

    pub fn get_damage_type(&self) -> DamageType {
        return self.damage_type;
    }

    pub fn get_damaged_region(&self) -> &str {
        return self.damaged_region.as_str();
    }

    pub fn get_functional_impact(&self) -> &str {
        return self.functional_impact.as_str();
    }

    pub fn get_confidence(&self) -> f64 {
        return self.confidence;
    }

    pub fn get_confidence_level(&self) -> ConfidenceLevel {
        return self.confidence_level;
    }

    pub fn get_affected_catalytic_positions(&self) -> &[usize] {
        return &self.affected_catalytic_positions;
    }

    pub fn get_differences(&self) -> &[DiffEntry] {
        return &self.differences;
    }
}
