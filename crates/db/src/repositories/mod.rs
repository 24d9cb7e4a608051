//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. State-machine preconditions are
//! folded into the `WHERE` clause of a single conditional `UPDATE` so that
//! two racing mutations on the same order resolve deterministically: the
//! loser sees zero rows and the caller classifies the failure by refetching.

pub mod order_repo;
pub mod printer_repo;
pub mod rates_repo;
pub mod settings_repo;

pub use order_repo::OrderRepo;
pub use printer_repo::PrinterRepo;
pub use rates_repo::RatesRepo;
pub use settings_repo::SettingsRepo;
