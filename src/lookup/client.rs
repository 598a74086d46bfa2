// client.rs
use crate::domain::Shipment;
use crate::lookup::models::ShipmentRecord;
use crate::lookup::{LookupError, PhoneNumber};
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("order-console/", env!("CARGO_PKG_VERSION"));

/// Anything that can turn a phone number into that customer's shipments.
///
/// "Nothing on file" is reported as `LookupError::NotFound`, never as an
/// empty `Ok`.
pub trait ShipmentLookup: Send + Sync {
    fn find_by_phone(&self, phone: &PhoneNumber) -> Result<Vec<Shipment>, LookupError>;
}

pub struct HttpShipmentLookup {
    client: Client,
    base_url: String,
}

impl HttpShipmentLookup {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn lookup_url(&self) -> String {
        format!("{}/orders/lookup", self.base_url)
    }
}

impl ShipmentLookup for HttpShipmentLookup {
    fn find_by_phone(&self, phone: &PhoneNumber) -> Result<Vec<Shipment>, LookupError> {
        let resp = self
            .client
            .get(self.lookup_url())
            .query(&[("phone", phone.as_str())])
            .send()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        decode_lookup_response(status, &body)
    }
}

/// Maps an order API reply onto the lookup contract: 404 or an empty array
/// means not found, any other non-2xx is an upstream failure.
pub fn decode_lookup_response(status: u16, body: &str) -> Result<Vec<Shipment>, LookupError> {
    if status == 404 {
        return Err(LookupError::NotFound);
    }
    if !(200..300).contains(&status) {
        return Err(LookupError::Upstream { status });
    }

    let records: Vec<ShipmentRecord> =
        serde_json::from_str(body).map_err(|e| LookupError::Decode(e.to_string()))?;

    if records.is_empty() {
        return Err(LookupError::NotFound);
    }

    Ok(records.into_iter().map(Shipment::from).collect())
}
