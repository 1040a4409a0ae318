pub mod identity_service;
pub mod ledger_service;
pub mod month_service;
pub mod visual_service;
