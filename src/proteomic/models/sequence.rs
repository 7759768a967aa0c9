use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use thiserror::Error;

use crate::proteomic::models::amino_acids::amino_acid::AminoAcid;

/// Everything that is not an ASCII letter, including line breaks.
static NON_LETTER_REGEX: LazyLock<onig::Regex> = LazyLock::new(|| {
    onig::Regex::new(r"[^A-Za-z]+").expect("static non-letter pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetPolicy {
    /// letters outside the 20 canonical residues are rejected
    Strict,
    /// letters outside the 20 canonical residues are dropped
    Lenient
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("sequence contains residues outside the 20 canonical amino acids: {}", join_residues(.0))]
    InvalidResidues(Vec<char>)
}

fn join_residues(residues: &[char]) -> String {
    return residues.iter().map(|residue| residue.to_string()).collect::<Vec<String>>().join(", ");
}

/// Strips header lines (starting with `>`) and every non-letter character,
/// then uppercases what is left.
pub fn normalize(raw: &str) -> String {
    let mut body = String::with_capacity(raw.len());
    for line in raw.lines() {
        if !line.starts_with('>') {
            body.push_str(line);
        }
    }
    return NON_LETTER_REGEX.replace_all(body.as_str(), "").to_ascii_uppercase();
}

/// A sequence over the 20 canonical amino acid letters. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedSequence {
    aa_sequence: String
}

impl NormalizedSequence {
    pub fn parse(raw: &str, policy: AlphabetPolicy) -> Result<Self, SequenceError> {
        let normalized = normalize(raw);
        let invalid_residues: BTreeSet<char> = normalized.chars()
            .filter(|one_letter_code| !AminoAcid::is_canonical_code(*one_letter_code))
            .collect();
        if invalid_residues.is_empty() {
            return Ok(Self { aa_sequence: normalized });
        }
        match policy {
            AlphabetPolicy::Strict => return Err(SequenceError::InvalidResidues(invalid_residues.into_iter().collect())),
            AlphabetPolicy::Lenient => return Ok(Self {
                aa_sequence: normalized.chars().filter(|one_letter_code| AminoAcid::is_canonical_code(*one_letter_code)).collect()
            })
        }
    }

    pub fn get_aa_sequence(&self) -> &str {
        return self.aa_sequence.as_str();
    }

    pub fn len(&self) -> usize {
        return self.aa_sequence.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.aa_sequence.is_empty();
    }

    pub fn contains(&self, motif: &str) -> bool {
        return !motif.is_empty() && self.aa_sequence.contains(motif);
    }

    /// Residue at a 1-based position.
    pub fn residue_at(&self, position: usize) -> Option<char> {
        if position == 0 {
            return None;
        }
        return self.aa_sequence.as_bytes().get(position - 1).map(|byte| *byte as char);
    }

    /// The first `length` residues (or the whole sequence if it is shorter).
    pub fn prefix(&self, length: usize) -> &str {
        return &self.aa_sequence[..length.min(self.aa_sequence.len())];
    }
}

impl fmt::Display for NormalizedSequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.aa_sequence)
    }
}
