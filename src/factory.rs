use crate::domain::{Account, NumberGenerator, Tier};

/// Builds fresh accounts with tier-specific defaults. One factory covers all
/// tiers; the tier only decides the floor and bonus rate baked into the
/// account.
#[derive(Debug)]
pub struct AccountFactory<G: NumberGenerator> {
    generator: G,
}

impl<G: NumberGenerator> AccountFactory<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn create(&mut self, tier: Tier) -> Account {
        Account::new(self.generator.generate(), tier)
    }
}

#[cfg(test)]
mod tests {
    use super::AccountFactory;
    use crate::domain::{NumberGenerator, Tier};
    use rust_decimal::Decimal;

    struct FixedGenerator;

    impl NumberGenerator for FixedGenerator {
        fn generate(&mut self) -> String {
            "123456789".to_string()
        }
    }

    #[test]
    fn created_account_carries_tier_defaults() {
        let mut factory = AccountFactory::new(FixedGenerator);
        let account = factory.create(Tier::Gold);
        assert_eq!(account.number, "123456789");
        assert_eq!(account.tier, Tier::Gold);
        assert_eq!(account.balance, Decimal::ZERO);
        assert_eq!(account.bonus_points, 0);
        assert_eq!(account.min_withdraw_floor, Decimal::from(-500));
    }
}
