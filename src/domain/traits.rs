use futures::Stream;

use crate::domain::{Account, Command, Error};

pub trait CommandStream {
    type CmdStream: Stream<Item = Result<Command, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::CmdStream;
}

/// Supplies fresh account numbers. Uniqueness is not guaranteed.
pub trait NumberGenerator {
    fn generate(&mut self) -> String;
}

/// Authoritative store of accounts, keyed by number. Callers fetch a copy,
/// mutate it, and save it back.
pub trait AccountRepository {
    fn get(&self, number: &str) -> Result<Account, Error>;
    fn save(&mut self, account: Account) -> Result<(), Error>;
    fn delete(&mut self, number: &str) -> Result<(), Error>;
}
