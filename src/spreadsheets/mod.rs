pub mod shipments_xlsx;

pub use shipments_xlsx::{export_filename, shipments_workbook};
