pub mod classifier;
pub mod comparator;
pub mod identification;
pub mod logger;
pub mod record_search;

#[cfg(test)]
mod tests;
