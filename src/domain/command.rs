use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::Error;

/// One parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewAccount { name: String, email: String },
    Deposit { number: String, amount: Decimal },
    Withdraw { number: String, amount: Decimal },
    Close { number: String },
    Exit,
}

fn next_word<'a>(words: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<String, Error> {
    match words.next() {
        Some(w) if !w.is_empty() => Ok(w.to_string()),
        _ => Err(Error::InvalidArgument(format!("missing {what}"))),
    }
}

fn parse_amount(word: &str) -> Result<Decimal, Error> {
    word.parse::<Decimal>()
        .map_err(|_| Error::InvalidArgument(format!("cannot parse amount '{word}'")))
}

impl FromStr for Command {
    type Err = Error;

    /// Lines split on single spaces; the first token (uppercased) selects the
    /// command. An unrecognized token keeps its original casing in the error.
    fn from_str(line: &str) -> Result<Self, Error> {
        let mut words = line.trim().split(' ');
        let token = words.next().unwrap_or_default();

        match token.to_ascii_uppercase().as_str() {
            "NEWACC" => {
                let name = next_word(&mut words, "holder name")?;
                let email = next_word(&mut words, "holder email")?;
                Ok(Command::NewAccount { name, email })
            }
            "DEPOSIT" => {
                let number = next_word(&mut words, "account number")?;
                let amount = parse_amount(&next_word(&mut words, "deposit amount")?)?;
                Ok(Command::Deposit { number, amount })
            }
            "WITHDRAW" => {
                let number = next_word(&mut words, "account number")?;
                let amount = parse_amount(&next_word(&mut words, "withdraw amount")?)?;
                Ok(Command::Withdraw { number, amount })
            }
            "CLOSE" => {
                let number = next_word(&mut words, "account number")?;
                Ok(Command::Close { number })
            }
            "EXIT" => Ok(Command::Exit),
            _ => Err(Error::UnknownCommand(token.to_string())),
        }
    }
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Command::NewAccount { name, email } => write!(f, "NEWACC {name} {email}"),
            Command::Deposit { number, amount } => write!(f, "DEPOSIT {number} {amount}"),
            Command::Withdraw { number, amount } => write!(f, "WITHDRAW {number} {amount}"),
            Command::Close { number } => write!(f, "CLOSE {number}"),
            Command::Exit => f.write_str("EXIT"),
        }
    }
}
