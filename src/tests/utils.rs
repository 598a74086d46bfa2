use crate::domain::{Product, Shipment};
use crate::lookup::{LookupError, PhoneNumber, ShipmentLookup};
use crate::router::AppState;
use astra::{Body, Request, Response};
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory stand-in for the order API.
pub enum FakeLookup {
    Found(Vec<Shipment>),
    NotFound,
    Down,
}

pub struct CountingLookup {
    pub inner: FakeLookup,
    pub calls: AtomicUsize,
}

impl ShipmentLookup for CountingLookup {
    fn find_by_phone(&self, _phone: &PhoneNumber) -> Result<Vec<Shipment>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.inner {
            FakeLookup::Found(list) => Ok(list.clone()),
            FakeLookup::NotFound => Err(LookupError::NotFound),
            FakeLookup::Down => Err(LookupError::Transport("connection refused".into())),
        }
    }
}

/// App state wired to a fake; the returned handle exposes the call count.
pub fn app_with(fake: FakeLookup) -> (AppState, Arc<CountingLookup>) {
    crate::logging::init_test();

    let lookup = Arc::new(CountingLookup {
        inner: fake,
        calls: AtomicUsize::new(0),
    });
    (AppState::new(lookup.clone()), lookup)
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.uri_mut() = uri.parse().expect("valid test uri");
    req
}

pub fn htmx_get(uri: &str) -> Request {
    let mut req = get(uri);
    req.headers_mut()
        .insert("hx-request", "true".parse().expect("valid header"));
    req
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .expect("readable body");
    body
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body()
        .reader()
        .read_to_end(&mut body)
        .expect("readable body");
    body
}

pub fn shipment(order_code: &str, status: &str, products: &[&str]) -> Shipment {
    Shipment {
        order_code: order_code.to_string(),
        shipment_code: Some(format!("SHP-{order_code}")),
        status: status.to_string(),
        products: products
            .iter()
            .map(|name| Product {
                product_name: name.to_string(),
                product_link: None,
            })
            .collect(),
    }
}

pub fn sample_shipments() -> Vec<Shipment> {
    vec![
        shipment("ORD-1", "DA_GIAO", &["Nồi chiên không dầu"]),
        shipment("ORD-2", "CHO_MUA", &["Máy lọc nước"]),
        shipment("ORD-3", "DA_HUY", &[]),
        shipment("ORD-4", "UNKNOWN_CODE", &["Balo"]),
        shipment("ORD-5", "DA_MUA", &["Tai nghe"]),
        shipment("ORD-6", "DAU_GIA_THANH_CONG", &["Đồng hồ cũ"]),
    ]
}
