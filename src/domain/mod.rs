pub mod aggregate;
pub mod group;
pub mod progress;
pub mod registry;
pub mod shipment;
pub mod view_state;

pub use aggregate::{aggregate, AggregateView, StatusBucket};
pub use group::{GroupId, GROUP_ORDER};
pub use shipment::{Product, Shipment};
pub use view_state::{filter_shipments, ViewState};
