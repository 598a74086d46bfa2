use crate::domain::Shipment;
use crate::errors::ServerError;
use rust_xlsxwriter::{Format, Workbook};

const HEADERS: [&str; 7] = [
    "Order Code",
    "Shipment Code",
    "Status Code",
    "Status",
    "Group",
    "Progress (%)",
    "Products",
];

/// One row per shipment, in the order given.
pub fn shipments_workbook(shipments: &[&Shipment]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, shipment) in shipments.iter().enumerate() {
        let r = (i + 1) as u32;
        let descriptor = shipment.descriptor();

        worksheet
            .write_string(r, 0, &shipment.order_code)
            .map_err(|e| ServerError::XlsxError(format!("order code: {}", e)))?;

        worksheet
            .write_string(r, 1, shipment.shipment_code.as_deref().unwrap_or(""))
            .map_err(|e| ServerError::XlsxError(format!("shipment code: {}", e)))?;

        worksheet
            .write_string(r, 2, &shipment.status)
            .map_err(|e| ServerError::XlsxError(format!("status code: {}", e)))?;

        worksheet
            .write_string(r, 3, descriptor.label)
            .map_err(|e| ServerError::XlsxError(format!("status label: {}", e)))?;

        worksheet
            .write_string(r, 4, shipment.group().as_str())
            .map_err(|e| ServerError::XlsxError(format!("group: {}", e)))?;

        worksheet
            .write_number(r, 5, f64::from(shipment.percent()))
            .map_err(|e| ServerError::XlsxError(format!("progress: {}", e)))?;

        worksheet
            .write_string(r, 6, &product_names(shipment))
            .map_err(|e| ServerError::XlsxError(format!("products: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

fn product_names(shipment: &Shipment) -> String {
    shipment
        .products
        .iter()
        .map(|p| p.product_name.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// `orders_<digits>_<YYYYMMDD>.xlsx`; the `+` of an international number is
/// dropped so the name stays header-safe.
pub fn export_filename(phone: &str, date: chrono::NaiveDate) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("orders_{}_{}.xlsx", digits, date.format("%Y%m%d"))
}
