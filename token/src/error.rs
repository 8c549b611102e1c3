use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("ledger error: {0}")]
    Ledger(#[from] ashc_ledger::LedgerError),

    #[error("faucet error: {0}")]
    Faucet(#[from] ashc_faucet::FaucetError),

    #[error("config error: {0}")]
    Config(String),
}
