pub mod home;
pub mod order_lookup;

pub use home::home_page;
pub use order_lookup::{order_lookup_page, order_lookup_result, LookupOutcome, OrderLookupVm};
