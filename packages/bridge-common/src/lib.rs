pub mod adapter;
pub mod bitcoin_script;
pub mod error;
pub mod math;
pub mod oracle;
pub mod relay;

pub use adapter::Adapter;
pub use error::{ContractError, ContractResult};
