use crate::proteomic::models::diff_entry::{DiffEntry, DiffKind};

#[test]
fn kind_follows_missing_residue() {
    assert_eq!(DiffEntry::new(3, Some('A'), Some('V')).get_kind(), DiffKind::Substitution);
    assert_eq!(DiffEntry::new(5, None, Some('K')).get_kind(), DiffKind::Insertion);
    assert_eq!(DiffEntry::new(5, Some('K'), None).get_kind(), DiffKind::Deletion);
}

#[test]
fn display_uses_three_letter_codes() {
    assert_eq!(DiffEntry::new(4, Some('E'), Some('W')).to_string(), "Position 4: Glu -> Trp");
    assert_eq!(DiffEntry::new(7, Some('S'), None).to_string(), "Position 7: Ser -> -");
}

#[test]
fn serializes_missing_residue_as_null() {
    let json = serde_json::to_value(DiffEntry::new(2, Some('S'), None)).unwrap();
    assert_eq!(json["position"], 2);
    assert_eq!(json["reference_residue"], "S");
    assert!(json["damaged_residue"].is_null());
    assert_eq!(json["kind"], "deletion");
}
