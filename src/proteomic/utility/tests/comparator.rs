use proptest::prelude::*;

use super::sequence;
use crate::proteomic::models::diff_entry::DiffKind;
use crate::proteomic::models::sequence::{AlphabetPolicy, NormalizedSequence};
use crate::proteomic::utility::comparator::compare;

#[test]
fn identical_sequences_have_no_differences() {
    assert!(compare(&sequence("ACDEFGHIK"), &sequence("ACDEFGHIK")).is_empty());
    assert!(compare(&sequence(""), &sequence("")).is_empty());
}

#[test]
fn single_substitution_at_position_four() {
    let differences = compare(&sequence("ACDE"), &sequence("ACDW"));
    assert_eq!(differences.len(), 1);
    assert_eq!(differences[0].get_position(), 4);
    assert_eq!(differences[0].get_reference_residue(), Some('E'));
    assert_eq!(differences[0].get_damaged_residue(), Some('W'));
    assert_eq!(differences[0].get_kind(), DiffKind::Substitution);
}

#[test]
fn lenient_unknown_residue_leaves_a_deletion() {
    let damaged = NormalizedSequence::parse("ACDX", AlphabetPolicy::Lenient).unwrap();
    assert_eq!(damaged.get_aa_sequence(), "ACD");
    let differences = compare(&sequence("ACDE"), &damaged);
    assert_eq!(differences.len(), 1);
    assert_eq!(differences[0].get_position(), 4);
    assert_eq!(differences[0].get_reference_residue(), Some('E'));
    assert_eq!(differences[0].get_damaged_residue(), None);
    assert_eq!(differences[0].get_kind(), DiffKind::Deletion);
}

#[test]
fn extra_residues_count_as_insertions() {
    let differences = compare(&sequence("ACD"), &sequence("ACDKR"));
    let positions: Vec<usize> = differences.iter().map(|difference| difference.get_position()).collect();
    assert_eq!(positions, vec![4, 5]);
    assert!(differences.iter().all(|difference| difference.get_kind() == DiffKind::Insertion));
}

#[test]
fn truncation_counts_as_deletions() {
    let differences = compare(&sequence("ACDKR"), &sequence("AC"));
    assert_eq!(differences.len(), 3);
    assert!(differences.iter().all(|difference| difference.get_kind() == DiffKind::Deletion));
    assert_eq!(differences[0].get_position(), 3);
}

#[test]
fn indel_cascades_into_positional_mismatches() {
    // deleting the C shifts everything after it
    let differences = compare(&sequence("ACDEF"), &sequence("ADEF"));
    let positions: Vec<usize> = differences.iter().map(|difference| difference.get_position()).collect();
    assert_eq!(positions, vec![2, 3, 4, 5]);
}

proptest! {
    #[test]
    fn self_comparison_is_empty(raw in "[ACDEFGHIKLMNPQRSTVWY]{0,300}") {
        prop_assert!(compare(&sequence(&raw), &sequence(&raw)).is_empty());
    }

    #[test]
    fn differences_are_bounded_and_ordered(
        reference in "[ACDEFGHIKLMNPQRSTVWY]{0,120}",
        damaged in "[ACDEFGHIKLMNPQRSTVWY]{0,120}"
    ) {
        let differences = compare(&sequence(&reference), &sequence(&damaged));
        prop_assert!(differences.len() <= reference.len().max(damaged.len()));
        prop_assert!(differences.windows(2).all(|pair| pair[0].get_position() < pair[1].get_position()));
    }
}
