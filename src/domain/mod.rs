pub mod account;
pub mod command;
pub mod error;
pub mod traits;

pub use account::{Account, Tier};
pub use command::Command;
pub use error::Error;
pub use traits::{AccountRepository, CommandStream, NumberGenerator};
