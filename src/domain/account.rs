use rust_decimal::Decimal;

/// Account tier. The ordinal doubles as the bonus-point rate, which is why
/// Base accounts never earn points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Base,
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    /// Minimum permitted balance after a withdrawal.
    pub fn min_withdraw_floor(self) -> Decimal {
        match self {
            Tier::Base => Decimal::ZERO,
            Tier::Silver => Decimal::from(-200),
            Tier::Gold => Decimal::from(-500),
            Tier::Platinum => Decimal::from(-1000),
        }
    }

    pub fn bonus_rate(self) -> i64 {
        match self {
            Tier::Base => 0,
            Tier::Silver => 1,
            Tier::Gold => 2,
            Tier::Platinum => 3,
        }
    }
}

impl core::fmt::Display for Tier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Tier::Base => "Base",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    pub number: String,
    pub holder_name: String,
    pub holder_email: String,
    pub balance: Decimal,
    pub bonus_points: i64,
    pub tier: Tier,
    pub min_withdraw_floor: Decimal,
}

impl Account {
    /// Fresh account with zero balance and no holder; the service fills in
    /// the holder fields before the first save.
    pub fn new(number: String, tier: Tier) -> Self {
        Self {
            number,
            holder_name: String::new(),
            holder_email: String::new(),
            balance: Decimal::ZERO,
            bonus_points: 0,
            tier,
            min_withdraw_floor: tier.min_withdraw_floor(),
        }
    }
}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "#{}| name: {}| email: {}| balance: {}| bonus: {}| status: {}",
            self.number,
            self.holder_name,
            self.holder_email,
            self.balance,
            self.bonus_points,
            self.tier
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Account, Tier};
    use rust_decimal::Decimal;

    #[test]
    fn floors_follow_tier() {
        assert_eq!(Tier::Base.min_withdraw_floor(), Decimal::ZERO);
        assert_eq!(Tier::Silver.min_withdraw_floor(), Decimal::from(-200));
        assert_eq!(Tier::Gold.min_withdraw_floor(), Decimal::from(-500));
        assert_eq!(Tier::Platinum.min_withdraw_floor(), Decimal::from(-1000));
    }

    #[test]
    fn new_account_starts_empty() {
        for tier in [Tier::Base, Tier::Silver, Tier::Gold, Tier::Platinum] {
            let account = Account::new("123456789".to_string(), tier);
            assert_eq!(account.balance, Decimal::ZERO);
            assert_eq!(account.bonus_points, 0);
            assert_eq!(account.min_withdraw_floor, tier.min_withdraw_floor());
            assert!(account.holder_name.is_empty());
        }
    }
}
