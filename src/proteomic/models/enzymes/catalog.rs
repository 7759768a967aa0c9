use std::io;
use std::path::Path;
use std::sync::LazyLock;

use thiserror::Error;
use tracing::{debug, warn};

use crate::proteomic::models::enzymes::enzyme_record::EnzymeRecord;

const PANCREATIC_ENZYMES_CSV: &str = include_str!("pancreatic_enzymes.csv");
const CSV_COLUMN_COUNT: usize = 7;
const LIST_SEPARATOR: char = ';';

static UNIPROT_ACCESSION_REGEX: LazyLock<onig::Regex> = LazyLock::new(|| {
    onig::Regex::new(r"\A(?:[OPQ][0-9][A-Z0-9]{3}[0-9]|[A-NR-Z][0-9](?:[A-Z][A-Z0-9]{2}[0-9]){1,2})\z")
        .expect("static accession pattern is valid")
});

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read enzyme catalog: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog row {row}: expected 7 columns, found {found}")]
    ColumnCount { row: usize, found: usize },
    #[error("catalog row {row}: could not parse '{value}' in column '{column}' as a positive integer")]
    InvalidNumber { row: usize, column: &'static str, value: String },
    #[error("catalog entry #{index} has an empty name or accession")]
    MissingIdentity { index: usize },
    #[error("catalog entry '{accession}' has neither signature motifs nor a length range")]
    MissingIdentificationHint { accession: String },
    #[error("catalog entry '{accession}' declares a length range whose minimum exceeds its maximum")]
    InvertedLengthRange { accession: String },
    #[error("catalog entry '{accession}' declares catalytic position {position} outside of its length range")]
    CatalyticPositionOutOfRange { accession: String, position: usize },
    #[error("catalog contains no entries")]
    Empty
}

/// Read-only table of known enzymes. Built once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct EnzymeCatalog {
    records: Vec<EnzymeRecord>
}

impl EnzymeCatalog {
    /// Validates every record and keeps them in the given order (order decides ties).
    pub fn from_records(records: Vec<EnzymeRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, record) in records.iter().enumerate() {
            Self::validate_record(index, record)?;
        }
        return Ok(Self { records: records });
    }

    /// The built-in table of pancreatic enzymes.
    pub fn pancreatic() -> Result<Self, CatalogError> {
        return Self::from_reader(PANCREATIC_ENZYMES_CSV.as_bytes());
    }

    pub fn from_csv_file(csv_file_path: &Path) -> Result<Self, CatalogError> {
        let reader = csv::Reader::from_path(csv_file_path)?;
        return Self::from_csv_reader(reader);
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, CatalogError> {
        return Self::from_csv_reader(csv::Reader::from_reader(reader));
    }

    fn from_csv_reader<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Self, CatalogError> {
        let mut records: Vec<EnzymeRecord> = Vec::new();
        for (row_index, row) in reader.records().enumerate() {
            // +2: one for the header line, one because rows are counted from 1
            records.push(Self::new_record_from_csv_row(row_index + 2, &row?)?);
        }
        debug!(count = records.len(), "parsed enzyme catalog");
        return Self::from_records(records);
    }

    fn new_record_from_csv_row(row_number: usize, row: &csv::StringRecord) -> Result<EnzymeRecord, CatalogError> {
        if row.len() != CSV_COLUMN_COUNT {
            return Err(CatalogError::ColumnCount { row: row_number, found: row.len() });
        }
        let signature_motifs: Vec<&str> = split_list(&row[3]);
        let catalytic_positions: Vec<usize> = split_list(&row[6]).into_iter()
            .map(|value| parse_positive(row_number, "catalytic_positions", value))
            .collect::<Result<Vec<usize>, CatalogError>>()?;
        let mut record = EnzymeRecord::new(&row[0], &row[1], &row[2])
            .with_signature_motifs(&signature_motifs)
            .with_catalytic_positions(&catalytic_positions);
        let min_length = row[4].trim();
        let max_length = row[5].trim();
        if !min_length.is_empty() || !max_length.is_empty() {
            record = record.with_length_range(
                parse_positive(row_number, "min_length", min_length)?,
                parse_positive(row_number, "max_length", max_length)?
            );
        }
        return Ok(record);
    }

    fn validate_record(index: usize, record: &EnzymeRecord) -> Result<(), CatalogError> {
        if record.get_name().is_empty() || record.get_accession().is_empty() {
            return Err(CatalogError::MissingIdentity { index: index });
        }
        if !record.has_identification_hint() {
            return Err(CatalogError::MissingIdentificationHint { accession: record.get_accession().to_owned() });
        }
        if !is_uniprot_accession(record.get_accession()) {
            warn!(accession = record.get_accession(), "catalog accession does not look like a UniProt accession");
        }
        if let Some(range) = record.get_length_range() {
            if range.start() > range.end() {
                return Err(CatalogError::InvertedLengthRange { accession: record.get_accession().to_owned() });
            }
        }
        for position in record.get_catalytic_positions() {
            let out_of_range = match record.get_length_range() {
                Some(range) => *position == 0 || *position > *range.end(),
                None => *position == 0
            };
            if out_of_range {
                return Err(CatalogError::CatalyticPositionOutOfRange {
                    accession: record.get_accession().to_owned(),
                    position: *position
                });
            }
        }
        return Ok(());
    }

    /// All candidates in catalog order.
    pub fn get_records(&self) -> &[EnzymeRecord] {
        return &self.records;
    }

    pub fn find_by_accession(&self, accession: &str) -> Option<&EnzymeRecord> {
        return self.records.iter().find(|record| record.get_accession().eq_ignore_ascii_case(accession.trim()));
    }

    pub fn len(&self) -> usize {
        return self.records.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.records.is_empty();
    }
}

pub fn is_uniprot_accession(accession: &str) -> bool {
    return UNIPROT_ACCESSION_REGEX.find(accession).is_some();
}

fn split_list(cell: &str) -> Vec<&str> {
    return cell.split(LIST_SEPARATOR).map(|value| value.trim()).filter(|value| !value.is_empty()).collect();
}

fn parse_positive(row: usize, column: &'static str, value: &str) -> Result<usize, CatalogError> {
    match value.trim().parse::<usize>() {
        Ok(number) if number > 0 => return Ok(number),
        _ => return Err(CatalogError::InvalidNumber { row: row, column: column, value: value.to_owned() })
    }
}
