/// Values overriding the stored ones when an account is valuated.
/// Lets a proposed state be checked before it is written.
#[derive(Clone, Default)]
pub struct CalcAccountDataCache {
    pub mb_who_debt: Option<i128>,
}

impl CalcAccountDataCache {
    pub fn none() -> Self {
        Self { mb_who_debt: None }
    }

    pub fn with_debt(debt: i128) -> Self {
        Self {
            mb_who_debt: Some(debt),
        }
    }
}
