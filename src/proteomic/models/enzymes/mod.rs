pub mod catalog;
pub mod enzyme_record;
