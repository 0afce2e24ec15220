use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, info};

use crate::domain::{Account, AccountRepository, Error, NumberGenerator, Tier};
use crate::factory::AccountFactory;

/// Orchestrates account operations against a repository. Every operation is a
/// single fetch-mutate-save sequence.
#[derive(Debug)]
pub struct BankService<R, G>
where
    R: AccountRepository,
    G: NumberGenerator,
{
    repository: R,
    factory: AccountFactory<G>,
}

impl<R, G> BankService<R, G>
where
    R: AccountRepository,
    G: NumberGenerator,
{
    pub fn new(repository: R, factory: AccountFactory<G>) -> Self {
        Self {
            repository,
            factory,
        }
    }

    /// Opens a new account and returns its number. Holders are not
    /// deduplicated; the same name and email may open any number of accounts.
    pub fn create_account(&mut self, name: &str, email: &str, tier: Tier) -> Result<String, Error> {
        if name.is_empty() {
            return Err(Error::InvalidArgument(
                "holder name must not be empty".to_string(),
            ));
        }
        if email.is_empty() {
            return Err(Error::InvalidArgument(
                "holder email must not be empty".to_string(),
            ));
        }

        let mut account = self.factory.create(tier);
        account.holder_name = name.to_string();
        account.holder_email = email.to_string();

        let number = account.number.clone();
        info!(number = %number, tier = %tier, "opened account");
        debug!("{account}");
        self.repository.save(account)?;

        Ok(number)
    }

    pub fn deposit(&mut self, number: &str, amount: Decimal) -> Result<(), Error> {
        validate_operation_args(number, amount, "deposit")?;

        let mut account = self.repository.get(number)?;
        account.balance += amount;
        account.bonus_points += bonus_points(account.tier, amount);

        debug!(number = %number, amount = %amount, balance = %account.balance, "deposit");
        self.repository.save(account)
    }

    pub fn withdraw(&mut self, number: &str, amount: Decimal) -> Result<(), Error> {
        validate_operation_args(number, amount, "withdraw")?;

        let mut account = self.repository.get(number)?;
        if account.balance - account.min_withdraw_floor < amount {
            return Err(Error::InsufficientFunds(number.to_string()));
        }

        account.balance -= amount;
        account.bonus_points -= bonus_points(account.tier, amount);

        debug!(number = %number, amount = %amount, balance = %account.balance, "withdraw");
        self.repository.save(account)
    }

    /// Removes the account from the repository. Closing an unknown number is
    /// silent, mirroring the repository's no-op delete.
    pub fn close_account(&mut self, number: &str) -> Result<(), Error> {
        if number.is_empty() {
            return Err(Error::InvalidArgument(
                "account number must not be empty".to_string(),
            ));
        }

        info!(number = %number, "closed account");
        self.repository.delete(number)
    }

    pub fn account(&self, number: &str) -> Result<Account, Error> {
        self.repository.get(number)
    }
}

fn validate_operation_args(number: &str, amount: Decimal, what: &str) -> Result<(), Error> {
    if number.is_empty() {
        return Err(Error::InvalidArgument(
            "account number must not be empty".to_string(),
        ));
    }
    if amount < Decimal::ZERO {
        return Err(Error::InvalidArgument(format!(
            "{what} amount must not be negative"
        )));
    }
    Ok(())
}

/// Bonus points for one operation: the tier rate times the number of whole
/// hundreds in the amount, truncated toward zero.
fn bonus_points(tier: Tier, amount: Decimal) -> i64 {
    let hundreds = (amount / Decimal::from(100)).trunc();
    tier.bonus_rate() * hundreds.to_i64().unwrap_or(0)
}
