use std::sync::{Arc, Mutex};

use super::{poly_alanine_with_motif, sequence};
use crate::proteomic::models::enzymes::catalog::EnzymeCatalog;
use crate::proteomic::models::enzymes::enzyme_record::EnzymeRecord;
use crate::proteomic::utility::identification::{self, IdentificationPolicy, IdentificationStrategy};
use crate::proteomic::utility::identification::length_motif::LengthMotifMatch;
use crate::proteomic::utility::identification::remote_lookup::RemoteLookup;
use crate::proteomic::utility::identification::signature::SignatureMatch;
use crate::proteomic::utility::record_search::{CandidateRecord, RecordSearch};

fn candidate(name: &str, accession: &str) -> CandidateRecord {
    return CandidateRecord {
        name: name.to_owned(),
        accession: accession.to_owned(),
        sequence: String::new()
    }
}

fn two_motif_catalog() -> EnzymeCatalog {
    return EnzymeCatalog::from_records(vec![
        EnzymeRecord::new("First", "P11111", "").with_signature_motifs(&["WWWW", "YYYY"]).with_length_range(20, 40),
        EnzymeRecord::new("Second", "P22222", "").with_signature_motifs(&["WWWW", "CCCC", "HHHH"]).with_length_range(20, 40),
        EnzymeRecord::new("Short", "P33333", "").with_signature_motifs(&["WWWW"]).with_length_range(5, 10)
    ]).unwrap();
}

#[test]
fn signature_identifies_trypsinogen() {
    let catalog = EnzymeCatalog::pancreatic().unwrap();
    let reference = sequence(&poly_alanine_with_motif(250, "IVGGY", 20));
    let record = SignatureMatch::new().identify(&reference, &catalog).unwrap();
    assert_eq!(record.get_accession(), "P07477");
}

#[test]
fn signature_without_any_motif_is_not_found() {
    let catalog = EnzymeCatalog::pancreatic().unwrap();
    assert!(SignatureMatch::new().identify(&sequence(&"A".repeat(250)), &catalog).is_none());
    assert!(SignatureMatch::new().identify(&sequence(""), &catalog).is_none());
}

#[test]
fn signature_ties_go_to_catalog_order() {
    let catalog = EnzymeCatalog::from_records(vec![
        EnzymeRecord::new("Trypsinogen", "P07477", "").with_signature_motifs(&["IVGGY"]),
        EnzymeRecord::new("Elastase", "P08246", "").with_signature_motifs(&["IVGGY"])
    ]).unwrap();
    let record = SignatureMatch::new().identify(&sequence("MKIVGGYTC"), &catalog).unwrap();
    assert_eq!(record.get_name(), "Trypsinogen");
}

#[test]
fn length_motif_requires_all_but_one_motif() {
    assert_eq!(LengthMotifMatch::get_required_hits(0), 1);
    assert_eq!(LengthMotifMatch::get_required_hits(1), 1);
    assert_eq!(LengthMotifMatch::get_required_hits(2), 1);
    assert_eq!(LengthMotifMatch::get_required_hits(3), 2);

    let catalog = two_motif_catalog();
    // one of three motifs is not enough for Second, one of two is enough for First
    let reference = sequence(&poly_alanine_with_motif(30, "CCCC", 5));
    assert!(LengthMotifMatch::new().identify(&reference, &catalog).is_none());
    let reference = sequence(&poly_alanine_with_motif(30, "YYYY", 5));
    assert_eq!(LengthMotifMatch::new().identify(&reference, &catalog).unwrap().get_name(), "First");
}

#[test]
fn length_motif_prefers_most_hits() {
    let catalog = two_motif_catalog();
    let mut raw = poly_alanine_with_motif(30, "CCCC", 5);
    raw.replace_range(14..18, "HHHH");
    let record = LengthMotifMatch::new().identify(&sequence(&raw), &catalog).unwrap();
    assert_eq!(record.get_name(), "Second");
}

#[test]
fn length_motif_ties_go_to_catalog_order() {
    let catalog = EnzymeCatalog::from_records(vec![
        EnzymeRecord::new("Earlier", "P44444", "").with_signature_motifs(&["WWWW", "YYYY"]).with_length_range(20, 40),
        EnzymeRecord::new("Later", "P55555", "").with_signature_motifs(&["WWWW", "CCCC"]).with_length_range(20, 40)
    ]).unwrap();
    let record = LengthMotifMatch::new().identify(&sequence(&poly_alanine_with_motif(30, "WWWW", 1)), &catalog).unwrap();
    assert_eq!(record.get_name(), "Earlier");
}

#[test]
fn length_motif_respects_length_range() {
    let catalog = two_motif_catalog();
    let record = LengthMotifMatch::new().identify(&sequence("AWWWWA"), &catalog).unwrap();
    assert_eq!(record.get_name(), "Short");
    assert!(LengthMotifMatch::new().identify(&sequence(&poly_alanine_with_motif(60, "WWWW", 1)), &catalog).is_none());
}

#[test]
fn remote_takes_first_pancreatic_candidate() {
    let catalog = EnzymeCatalog::pancreatic().unwrap();
    let fake = |_prefix: &str| vec![
        candidate("Serum albumin", "P02768"),
        candidate("Chymotrypsinogen B", "P17538"),
        candidate("Cationic trypsinogen", "P07477")
    ];
    let strategy = RemoteLookup::new(Some(Arc::new(fake)), 20);
    let record = strategy.identify(&sequence(&"M".repeat(40)), &catalog).unwrap();
    assert_eq!(record.get_accession(), "P17538");
    // enriched from the catalog entry with the same accession
    assert_eq!(record.get_catalytic_positions(), &[57, 102, 195]);
}

#[test]
fn remote_queries_with_sequence_prefix() {
    let catalog = EnzymeCatalog::pancreatic().unwrap();
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let recorder = seen.clone();
    let fake = move |prefix: &str| {
        recorder.lock().unwrap().push(prefix.to_owned());
        Vec::new()
    };
    let strategy = RemoteLookup::new(Some(Arc::new(fake)), 5);
    assert!(strategy.identify(&sequence("MKTLLILAVVAAALA"), &catalog).is_none());
    assert_eq!(*seen.lock().unwrap(), vec!["MKTLL".to_owned()]);
}

#[test]
fn remote_keyword_match_is_case_insensitive() {
    assert!(RemoteLookup::is_pancreatic_enzyme_name("PANCREATIC ALPHA-AMYLASE"));
    assert!(RemoteLookup::is_pancreatic_enzyme_name("Procarboxypeptidase A1"));
    assert!(!RemoteLookup::is_pancreatic_enzyme_name("Insulin"));
}

#[test]
fn remote_without_keyword_hit_is_not_found() {
    let catalog = EnzymeCatalog::pancreatic().unwrap();
    let fake = |_prefix: &str| vec![candidate("Hemoglobin subunit alpha", "P69905")];
    let strategy = RemoteLookup::new(Some(Arc::new(fake)), 20);
    assert!(strategy.identify(&sequence("MVLSPADKTNVKAAW"), &catalog).is_none());
}

#[test]
fn remote_unknown_accession_keeps_candidate_name() {
    let catalog = EnzymeCatalog::pancreatic().unwrap();
    let fake = |_prefix: &str| vec![candidate("Bovine pancreatic ribonuclease", "P61823")];
    let record = RemoteLookup::new(Some(Arc::new(fake)), 20).identify(&sequence("KETAAAKFERQHMDS"), &catalog).unwrap();
    assert_eq!(record.get_name(), "Bovine pancreatic ribonuclease");
    assert!(record.get_catalytic_positions().is_empty());
}

#[test]
fn remote_without_record_search_never_matches() {
    let catalog = EnzymeCatalog::pancreatic().unwrap();
    let strategy = identification::get(IdentificationPolicy::RemoteLookup, None, 20);
    assert!(strategy.identify(&sequence("IVGGYAAAA"), &catalog).is_none());
}

#[test]
fn cascade_falls_through_to_remote() {
    let catalog = EnzymeCatalog::pancreatic().unwrap();
    let record_search: Arc<dyn RecordSearch> = Arc::new(|_prefix: &str| vec![candidate("Pancreatic lipase-related protein 2", "P54317")]);
    let strategy = identification::get(IdentificationPolicy::Cascade, Some(record_search), 20);
    assert_eq!(strategy.get_name(), "cascade");

    // signature hit wins before the remote step
    let record = strategy.identify(&sequence(&poly_alanine_with_motif(250, "IVGGY", 1)), &catalog).unwrap();
    assert_eq!(record.get_accession(), "P07477");
    let record = strategy.identify(&sequence(&"A".repeat(250)), &catalog).unwrap();
    assert_eq!(record.get_accession(), "P54317");
}

#[test]
fn policy_names_parse() {
    assert_eq!("signature".parse::<IdentificationPolicy>(), Ok(IdentificationPolicy::Signature));
    assert_eq!("Length-Motif".parse::<IdentificationPolicy>(), Ok(IdentificationPolicy::LengthMotif));
    assert_eq!("remote".parse::<IdentificationPolicy>(), Ok(IdentificationPolicy::RemoteLookup));
    assert_eq!("cascade".parse::<IdentificationPolicy>(), Ok(IdentificationPolicy::Cascade));
    assert!("blast".parse::<IdentificationPolicy>().is_err());
}
