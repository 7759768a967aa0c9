pub mod amino_acids;
pub mod analysis_result;
pub mod diff_entry;
pub mod enzymes;
pub mod mass;
pub mod sequence;

#[cfg(test)]
mod tests;
