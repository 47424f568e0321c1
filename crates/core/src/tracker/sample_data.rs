use rand::Rng;

use crate::accounts::{AccountType, NewAccount};

pub(crate) fn sample_accounts() -> Vec<NewAccount> {
    [
        ("Merchants Bank savings card", AccountType::Bank, "Salary card"),
        ("Alipay balance", AccountType::Pay, "Daily spending"),
        ("WeChat wallet", AccountType::Pay, "Daily spending"),
        ("Cash", AccountType::Cash, "Emergency cash"),
    ]
    .into_iter()
    .map(|(name, account_type, description)| NewAccount {
        name: name.to_string(),
        account_type,
        description: Some(description.to_string()),
    })
    .collect()
}

/// Whole-unit balance in `[1000, 11000)`.
pub(crate) fn sample_balance<R: Rng>(rng: &mut R) -> f64 {
    f64::from(rng.gen_range(1_000u32..11_000))
}
