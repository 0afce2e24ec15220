use std::collections::HashMap;

use crate::domain::{Account, AccountRepository, Error};

/// The only persistence layer: a map from account number to account.
#[derive(Default, Debug)]
pub struct InMemoryRepository {
    accounts: HashMap<String, Account>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }
}

impl AccountRepository for InMemoryRepository {
    fn get(&self, number: &str) -> Result<Account, Error> {
        if number.is_empty() {
            return Err(Error::InvalidArgument(
                "account number must not be empty".to_string(),
            ));
        }

        self.accounts
            .get(number)
            .cloned()
            .ok_or_else(|| Error::NotFound(number.to_string()))
    }

    fn save(&mut self, account: Account) -> Result<(), Error> {
        if account.number.is_empty() {
            return Err(Error::InvalidArgument(
                "account number must not be empty".to_string(),
            ));
        }

        // Upsert: insert if absent, overwrite otherwise.
        self.accounts.insert(account.number.clone(), account);
        Ok(())
    }

    fn delete(&mut self, number: &str) -> Result<(), Error> {
        if number.is_empty() {
            return Err(Error::InvalidArgument(
                "account number must not be empty".to_string(),
            ));
        }

        // Deleting a missing number is a no-op, not an error.
        self.accounts.remove(number);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryRepository;
    use crate::domain::{Account, AccountRepository, Error, Tier};
    use rust_decimal::Decimal;

    #[test]
    fn save_upserts_by_number() {
        let mut repo = InMemoryRepository::new();
        let mut account = Account::new("111111111".to_string(), Tier::Silver);
        repo.save(account.clone()).unwrap();

        account.balance = Decimal::from(42);
        repo.save(account).unwrap();

        assert_eq!(repo.get("111111111").unwrap().balance, Decimal::from(42));
    }

    #[test]
    fn get_missing_is_not_found() {
        let repo = InMemoryRepository::new();
        assert!(matches!(repo.get("999999999"), Err(Error::NotFound(_))));
    }

    #[test]
    fn delete_missing_is_a_no_op() {
        let mut repo = InMemoryRepository::new();
        repo.delete("999999999").unwrap();
    }

    #[test]
    fn empty_number_is_rejected_everywhere() {
        let mut repo = InMemoryRepository::new();
        assert!(matches!(repo.get(""), Err(Error::InvalidArgument(_))));
        assert!(matches!(repo.delete(""), Err(Error::InvalidArgument(_))));
        let account = Account::new(String::new(), Tier::Base);
        assert!(matches!(repo.save(account), Err(Error::InvalidArgument(_))));
    }
}
