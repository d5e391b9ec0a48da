//! Resource handlers, one module per back-office resource.

pub mod bills;
pub mod diet_plans;
pub mod fee_packages;
pub mod members;
pub mod notifications;
pub mod reports;
pub mod supplements;
