use cosmwasm_std::StdError;

/// Error kinds per §7: authorization, validation, state, proof, economic,
/// external. Each failure aborts the enclosing operation with full state
/// rollback; nothing here is retried internally.
#[derive(thiserror::Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),
    #[error(transparent)]
    Bitcoin(#[from] bitcoin::Error),
    #[error(transparent)]
    ParseOutPoint(#[from] bitcoin::blockdata::transaction::ParseOutPointError),
    #[error(transparent)]
    BitcoinEncode(#[from] bitcoin::consensus::encode::Error),
    #[error(transparent)]
    TryFrom(#[from] std::num::TryFromIntError),
    #[error("unauthorized")]
    Unauthorized {},
    #[error("reentrant call rejected")]
    Reentrancy {},
    #[error("validation: {0}")]
    Validation(String),
    #[error("state: {0}")]
    State(String),
    #[error("proof: {0}")]
    Proof(String),
    #[error("economic: {0}")]
    Economic(String),
    #[error("external: {0}")]
    External(String),
}

impl From<ContractError> for StdError {
    fn from(source: ContractError) -> Self {
        Self::generic_err(source.to_string())
    }
}

pub type ContractResult<T> = std::result::Result<T, ContractError>;
