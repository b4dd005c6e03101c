pub mod constants;
pub mod contract;
pub mod entrypoints;
pub mod model;
pub mod msg;
pub mod state;

#[cfg(test)]
mod tests;
