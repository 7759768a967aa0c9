pub mod signature;
pub mod length_motif;
pub mod remote_lookup;
pub mod cascade;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::proteomic::models::enzymes::catalog::EnzymeCatalog;
use crate::proteomic::models::enzymes::enzyme_record::EnzymeRecord;
use crate::proteomic::models::sequence::NormalizedSequence;
use crate::proteomic::utility::record_search::RecordSearch;

use self::cascade::Cascade;
use self::length_motif::LengthMotifMatch;
use self::remote_lookup::RemoteLookup;
use self::signature::SignatureMatch;

/// One way of deciding which catalog enzyme a reference sequence represents.
/// `None` means the sequence was not recognised, which is a valid outcome.
pub trait IdentificationStrategy: Send + Sync {
    fn get_name(&self) -> &str;
    fn identify(&self, sequence: &NormalizedSequence, catalog: &EnzymeCatalog) -> Option<EnzymeRecord>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IdentificationPolicy {
    Signature,
    LengthMotif,
    RemoteLookup,
    Cascade
}

impl IdentificationPolicy {
    pub fn as_str(&self) -> &'static str {
        return match self {
            IdentificationPolicy::Signature => "signature",
            IdentificationPolicy::LengthMotif => "length-motif",
            IdentificationPolicy::RemoteLookup => "remote",
            IdentificationPolicy::Cascade => "cascade"
        }
    }

    pub fn needs_record_search(&self) -> bool {
        return *self == IdentificationPolicy::RemoteLookup;
    }
}

impl FromStr for IdentificationPolicy {
    type Err = String;

    fn from_str(policy: &str) -> Result<Self, Self::Err> {
        match policy.trim().to_lowercase().as_str() {
            "signature" => return Ok(IdentificationPolicy::Signature),
            "length-motif" | "length_motif" => return Ok(IdentificationPolicy::LengthMotif),
            "remote" => return Ok(IdentificationPolicy::RemoteLookup),
            "cascade" => return Ok(IdentificationPolicy::Cascade),
            other => return Err(format!("unknown identification policy '{}'", other))
        }
    }
}

impl fmt::Display for IdentificationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Builds the strategy for a policy. Remote lookups need a record search;
/// without one `RemoteLookup` never matches and `Cascade` skips its remote step.
pub fn get(policy: IdentificationPolicy, record_search: Option<Arc<dyn RecordSearch>>, prefix_length: usize) -> Box<dyn IdentificationStrategy> {
    match policy {
        IdentificationPolicy::Signature => Box::new(SignatureMatch::new()),
        IdentificationPolicy::LengthMotif => Box::new(LengthMotifMatch::new()),
        IdentificationPolicy::RemoteLookup => Box::new(RemoteLookup::new(record_search, prefix_length)),
        IdentificationPolicy::Cascade => {
            let mut strategies: Vec<Box<dyn IdentificationStrategy>> = vec![
                Box::new(SignatureMatch::new()),
                Box::new(LengthMotifMatch::new())
            ];
            if record_search.is_some() {
                strategies.push(Box::new(RemoteLookup::new(record_search, prefix_length)));
            }
            Box::new(Cascade::new(strategies))
        }
    }
}
