pub mod analysis;
pub mod server;

#[cfg(test)]
mod tests;
