pub mod constants;
pub mod contract;
pub mod entrypoints;
pub mod msg;
pub mod reply;
pub mod state;

#[cfg(test)]
mod tests;
