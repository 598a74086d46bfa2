// src/domain/shipment.rs

use crate::domain::group::{group_of, GroupId};
use crate::domain::progress::percent;
use crate::domain::registry::{describe, StatusDescriptor};

/// One order as returned by a phone lookup. `order_code` is the identity key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shipment {
    pub order_code: String,
    pub shipment_code: Option<String>,
    /// Raw status code exactly as the order system sent it.
    pub status: String,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub product_name: String,
    pub product_link: Option<String>,
}

impl Shipment {
    pub fn descriptor(&self) -> StatusDescriptor<'_> {
        describe(&self.status)
    }

    pub fn group(&self) -> GroupId {
        group_of(&self.status)
    }

    pub fn percent(&self) -> u8 {
        percent(&self.status)
    }
}

#[cfg(test)]
pub(crate) fn shipment(order_code: &str, status: &str) -> Shipment {
    Shipment {
        order_code: order_code.to_string(),
        shipment_code: None,
        status: status.to_string(),
        products: Vec::new(),
    }
}
