pub mod reentrancy;
pub mod token;
pub mod validation;
