use crate::proteomic::models::diff_entry::DiffEntry;
use crate::proteomic::models::sequence::NormalizedSequence;

/// Fixed-offset comparison, no alignment. Runs over the longer of both
/// sequences, a residue missing on one side counts as a difference. An indel
/// therefore shows up as a run of mismatches from its position onwards.
pub fn compare(reference: &NormalizedSequence, damaged: &NormalizedSequence) -> Vec<DiffEntry> {
    let reference_residues = reference.get_aa_sequence().as_bytes();
    let damaged_residues = damaged.get_aa_sequence().as_bytes();
    let compare_length = reference_residues.len().max(damaged_residues.len());
    let mut differences: Vec<DiffEntry> = Vec::new();
    for idx in 0..compare_length {
        let reference_residue = reference_residues.get(idx).map(|byte| *byte as char);
        let damaged_residue = damaged_residues.get(idx).map(|byte| *byte as char);
        if reference_residue != damaged_residue {
            differences.push(DiffEntry::new(idx + 1, reference_residue, damaged_residue));
        }
    }
    return differences;
}
