pub mod auth;
pub mod beneficiary;
pub mod child;
pub mod donation;
pub mod operator;
pub mod sponsor;
pub mod sponsorship;
