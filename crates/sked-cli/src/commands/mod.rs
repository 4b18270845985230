pub mod add;
pub mod export;
pub mod list;
pub mod recur;
pub mod remove;
pub mod schedule;
pub mod week;
