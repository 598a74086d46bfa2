use crate::domain::{Product, Shipment};
use serde::Deserialize;

// [
//   {
//     "orderCode": "...",
//     "shipmentCode": "..." | null,
//     "status": "DANG_GIAO",
//     "products": [
//       { "productName": "...", "productLink": "..." | null }
//     ]
//   }
// ]

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRecord {
    pub order_code: String,
    pub shipment_code: Option<String>,
    pub status: String,
    #[serde(default)]
    pub products: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub product_name: String,
    pub product_link: Option<String>,
}

impl From<ShipmentRecord> for Shipment {
    fn from(rec: ShipmentRecord) -> Self {
        Shipment {
            order_code: rec.order_code,
            shipment_code: rec.shipment_code.filter(|s| !s.is_empty()),
            status: rec.status,
            products: rec.products.into_iter().map(Product::from).collect(),
        }
    }
}

impl From<ProductRecord> for Product {
    fn from(rec: ProductRecord) -> Self {
        Product {
            product_name: rec.product_name,
            product_link: rec.product_link.filter(|s| !s.is_empty()),
        }
    }
}
