pub mod identity;
pub mod ledger;
pub mod month;
pub mod settings;
pub mod transaction;
pub mod visual;
