mod comparator;
mod identification;

use crate::proteomic::models::sequence::{AlphabetPolicy, NormalizedSequence};

fn sequence(raw: &str) -> NormalizedSequence {
    return NormalizedSequence::parse(raw, AlphabetPolicy::Strict).unwrap();
}

/// `length` alanines with `motif` starting at 1-based `position`.
fn poly_alanine_with_motif(length: usize, motif: &str, position: usize) -> String {
    let mut residues = "A".repeat(length);
    residues.replace_range((position - 1)..(position - 1 + motif.len()), motif);
    return residues;
}
