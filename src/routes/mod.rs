pub mod auth;
pub mod beneficiaries;
pub mod children;
pub mod donations;
pub mod health;
pub mod payments;
pub mod sponsors;
pub mod upload;
