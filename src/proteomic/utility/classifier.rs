use crate::proteomic::models::analysis_result::{Confidence, DamageAssessment, DamageType};
use crate::proteomic::models::diff_entry::DiffEntry;
use crate::proteomic::models::enzymes::enzyme_record::EnzymeRecord;

/// Diff counts below this are minor damage.
pub const MODERATE_DAMAGE_THRESHOLD: usize = 5;
/// Diff counts from this on are severe damage.
pub const SEVERE_DAMAGE_THRESHOLD: usize = 20;

const NO_DAMAGE_CONFIDENCE: f64 = 0.95;
const MINOR_DAMAGE_CONFIDENCE: f64 = 0.85;
const MODERATE_DAMAGE_CONFIDENCE: f64 = 0.70;
const SEVERE_DAMAGE_CONFIDENCE: f64 = 0.55;
// subtracted from the count band when a catalytic residue is hit
const CATALYTIC_DAMAGE_PENALTY: f64 = 0.35;
const UNRECOGNIZED_CONFIDENCE: f64 = 0.10;
const IDENTIFICATION_ONLY_CONFIDENCE: f64 = 0.75;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SeverityBand {
    None,
    Minor,
    Moderate,
    Severe
}

impl SeverityBand {
    pub fn from_diff_count(diff_count: usize) -> Self {
        if diff_count == 0 {
            return SeverityBand::None;
        } else if diff_count < MODERATE_DAMAGE_THRESHOLD {
            return SeverityBand::Minor;
        } else if diff_count < SEVERE_DAMAGE_THRESHOLD {
            return SeverityBand::Moderate;
        }
        return SeverityBand::Severe;
    }

    pub fn get_confidence_score(&self) -> f64 {
        return match self {
            SeverityBand::None => NO_DAMAGE_CONFIDENCE,
            SeverityBand::Minor => MINOR_DAMAGE_CONFIDENCE,
            SeverityBand::Moderate => MODERATE_DAMAGE_CONFIDENCE,
            SeverityBand::Severe => SEVERE_DAMAGE_CONFIDENCE
        }
    }

    fn get_damage_type(&self) -> DamageType {
        return match self {
            SeverityBand::None => DamageType::NoDamage,
            SeverityBand::Minor => DamageType::Minor,
            SeverityBand::Moderate => DamageType::Moderate,
            SeverityBand::Severe => DamageType::Severe
        }
    }

    fn get_functional_impact(&self) -> &'static str {
        return match self {
            SeverityBand::None => "No functional damage detected",
            SeverityBand::Minor => "Minor substitutions outside known catalytic residues; enzymatic activity likely retained",
            SeverityBand::Moderate => "Partial loss of enzymatic activity likely",
            SeverityBand::Severe => "Severe functional impairment likely"
        }
    }
}

/// Maps the differences found against an identified enzyme to a verdict.
/// `None` for the enzyme yields the fixed unrecognized verdict and ignores `differences`.
pub fn classify(differences: &[DiffEntry], enzyme: Option<&EnzymeRecord>) -> DamageAssessment {
    let enzyme = match enzyme {
        Some(enzyme) => enzyme,
        None => return unrecognized()
    };
    let band = SeverityBand::from_diff_count(differences.len());
    let affected_catalytic_positions: Vec<usize> = differences.iter()
        .map(|difference| difference.get_position())
        .filter(|position| enzyme.is_catalytic_position(*position))
        .collect();

    if !affected_catalytic_positions.is_empty() {
        let positions = affected_catalytic_positions.iter()
            .map(|position| position.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        return DamageAssessment {
            damage_type: DamageType::Catalytic,
            damaged_region: "Catalytic site affected",
            functional_impact: format!(
                "Catalytic residue altered at position {}; loss of {} activity highly likely",
                positions,
                enzyme.get_name()
            ),
            confidence: Confidence::new(band.get_confidence_score() - CATALYTIC_DAMAGE_PENALTY),
            affected_catalytic_positions: affected_catalytic_positions
        }
    }

    return DamageAssessment {
        damage_type: band.get_damage_type(),
        damaged_region: match band {
            SeverityBand::None => "None",
            _ => "Structural region affected"
        },
        functional_impact: band.get_functional_impact().to_owned(),
        confidence: Confidence::new(band.get_confidence_score()),
        affected_catalytic_positions: Vec::new()
    }
}

pub fn unrecognized() -> DamageAssessment {
    return DamageAssessment {
        damage_type: DamageType::Unknown,
        damaged_region: "Unable to determine",
        functional_impact: "Sequence does not match known pancreatic enzymes".to_owned(),
        confidence: Confidence::new(UNRECOGNIZED_CONFIDENCE),
        affected_catalytic_positions: Vec::new()
    }
}

/// Verdict when only a reference sequence was supplied.
pub fn identification_only(enzyme: Option<&EnzymeRecord>) -> DamageAssessment {
    match enzyme {
        Some(enzyme) => return DamageAssessment {
            damage_type: DamageType::NotAssessed,
            damaged_region: "Not assessed",
            functional_impact: format!("Identified as {}; no damaged sequence supplied for comparison", enzyme.get_name()),
            confidence: Confidence::new(IDENTIFICATION_ONLY_CONFIDENCE),
            affected_catalytic_positions: Vec::new()
        },
        None => return unrecognized()
    }
}
