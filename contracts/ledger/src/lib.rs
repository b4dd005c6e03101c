pub mod contract;
pub mod entrypoints;
pub mod msg;
pub mod state;

#[cfg(test)]
mod tests;
