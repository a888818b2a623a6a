pub mod event;
pub mod timehistory;
pub mod units;
