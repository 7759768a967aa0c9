use std::fmt;

use serde::Serialize;

use crate::proteomic::models::amino_acids::amino_acid::AminoAcid;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    Substitution,
    /// damaged sequence carries a residue past the end of the reference
    Insertion,
    /// damaged sequence ends before the reference does
    Deletion
}

/// One residue-level discrepancy between reference and damaged sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffEntry {
    position: usize,
    reference_residue: Option<char>,
    damaged_residue: Option<char>,
    kind: DiffKind,
    mass_shift: f64
}

impl DiffEntry {
    /// `position` is 1-based, at least one residue must be present
    pub fn new(position: usize, reference_residue: Option<char>, damaged_residue: Option<char>) -> Self {
        let kind = match (reference_residue, damaged_residue) {
            (Some(_), Some(_)) => DiffKind::Substitution,
            (None, _) => DiffKind::Insertion,
            (Some(_), None) => DiffKind::Deletion
        };
        return Self {
            position: position,
            reference_residue: reference_residue,
            damaged_residue: damaged_residue,
            kind: kind,
            mass_shift: AminoAcid::get_mass_shift(reference_residue, damaged_residue)
        }
    }

    pub fn get_position(&self) -> usize {
        return self.position;
    }

    pub fn get_reference_residue(&self) -> Option<char> {
        return self.reference_residue;
    }

    pub fn get_damaged_residue(&self) -> Option<char> {
        return self.damaged_residue;
    }

    pub fn get_kind(&self) -> DiffKind {
        return self.kind;
    }

    pub fn get_mass_shift(&self) -> f64 {
        return self.mass_shift;
    }
}

impl fmt::Display for DiffEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let describe = |residue: Option<char>| match residue {
            Some(one_letter_code) => AminoAcid::get(one_letter_code).get_three_letter_code(),
            None => "-"
        };
        write!(f, "Position {}: {} -> {}", self.position, describe(self.reference_residue), describe(self.damaged_residue))
    }
}
