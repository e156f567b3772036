use data_pool::error::PoolError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Data pool error: {0}")]
    Pool(#[from] PoolError),

    #[error("Pooled mode requested but no data pool is attached")]
    NoPool,

    #[error("Invalid registration configuration: {0}")]
    Config(String),
}
