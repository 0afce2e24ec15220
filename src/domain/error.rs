#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no account with number '{0}'")]
    NotFound(String),

    #[error("not enough money on account '{0}'")]
    InsufficientFunds(String),

    #[error("Incorrect command '{0}'")]
    UnknownCommand(String),
}
