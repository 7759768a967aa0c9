
use crate::proteomic::models::enzymes::catalog::EnzymeCatalog;
use crate::proteomic::models::sequence::AlphabetPolicy;
use crate::proteomic::tasks::analysis::Analyzer;
use crate::proteomic::utility::identification::{self, IdentificationPolicy};

fn signature_analyzer(alphabet_policy: AlphabetPolicy) -> Analyzer {
    return Analyzer::new(
        EnzymeCatalog::pancreatic().unwrap(),
        identification::get(IdentificationPolicy::Signature, None, 20),
        alphabet_policy
    );
}

/// Trypsinogen-like reference: 245 alanines carrying the IVGGY motif at position 1.
fn trypsinogen_like() -> String {
    let mut residues = "A".repeat(245);
    residues.replace_range(0..5, "IVGGY");
    return residues;
}

/// `reference` with the residue at 1-based `position` replaced.
fn substitute(reference: &str, position: usize, residue: char) -> String {
    return reference.chars()
        .enumerate()
        .map(|(index, original)| if index + 1 == position { residue } else { original })
        .collect();
}
