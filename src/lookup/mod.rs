mod client;
mod lookup_error;
mod models;
mod phone;

pub use client::{HttpShipmentLookup, ShipmentLookup};
pub use lookup_error::LookupError;
pub use phone::PhoneNumber;
