/// Errors raised while configuring, fitting, or feeding the miner.
#[derive(Debug, thiserror::Error)]
pub enum FpError {
    #[error("invalid configuration: {name} = {value} (expected {expected})")]
    InvalidConfiguration {
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("cannot mine an empty transaction set")]
    EmptyInput,

    #[error("missing column '{0}' in transaction source")]
    MissingColumn(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FpError>;
