use crate::domain::{filter_shipments, GroupId, Shipment, ViewState};
use crate::errors::ServerError;
use crate::lookup::{LookupError, PhoneNumber, ShipmentLookup};
use crate::responses::{
    css_response, html_response, html_response_with_status, xlsx_response, ResultResp,
};
use crate::spreadsheets::{export_filename, shipments_workbook};
use crate::templates;
use crate::templates::pages::{LookupOutcome, OrderLookupVm};
use astra::Request;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Shared, read-only handles every request needs.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<dyn ShipmentLookup>,
}

impl AppState {
    pub fn new(lookup: Arc<dyn ShipmentLookup>) -> Self {
        Self { lookup }
    }
}

pub fn handle(req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    tracing::debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") => html_response(templates::pages::home_page()),
        ("GET", "/orders") => order_lookup(&req, app),
        ("GET", "/orders/export") => order_export(&req, app),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),
        _ => Err(ServerError::NotFound),
    }
}

fn order_lookup(req: &Request, app: &AppState) -> ResultResp {
    let pairs = query_pairs(req);
    let partial = is_htmx(req);

    let raw_phone = pairs
        .iter()
        .find(|(k, _)| k == "phone")
        .map(|(_, v)| v.trim().to_string())
        .unwrap_or_default();

    if raw_phone.is_empty() {
        return render_lookup(
            OrderLookupVm {
                phone: raw_phone,
                state: ViewState::default(),
                outcome: LookupOutcome::Blank,
            },
            200,
            partial,
        );
    }

    let phone = match PhoneNumber::parse(&raw_phone) {
        Ok(p) => p,
        Err(_) => {
            return render_lookup(
                OrderLookupVm {
                    phone: raw_phone,
                    state: ViewState::default(),
                    outcome: LookupOutcome::InvalidPhone,
                },
                400,
                partial,
            );
        }
    };

    let state = ViewState::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    match find_shipments(app, &phone) {
        Ok(shipments) => render_lookup(
            OrderLookupVm {
                phone: phone.to_string(),
                state,
                outcome: LookupOutcome::Found(&shipments),
            },
            200,
            partial,
        ),
        Err(LookupError::NotFound) => render_lookup(
            OrderLookupVm {
                phone: phone.to_string(),
                state: ViewState::default(),
                outcome: LookupOutcome::NotFound,
            },
            200,
            partial,
        ),
        Err(_) => render_lookup(
            OrderLookupVm {
                phone: phone.to_string(),
                state: ViewState::default(),
                outcome: LookupOutcome::Unavailable,
            },
            502,
            partial,
        ),
    }
}

fn order_export(req: &Request, app: &AppState) -> ResultResp {
    let params: HashMap<String, String> = query_pairs(req).into_iter().collect();

    let raw_phone = params
        .get("phone")
        .ok_or_else(|| ServerError::BadRequest("Missing phone".into()))?;
    let phone = PhoneNumber::parse(raw_phone).map_err(|e| ServerError::BadRequest(e.to_string()))?;
    let selected = params.get("group").and_then(|g| GroupId::parse(g));

    let shipments = find_shipments(app, &phone).map_err(|e| match e {
        LookupError::NotFound => ServerError::NotFound,
        other => ServerError::Upstream(other.to_string()),
    })?;

    let rows = filter_shipments(&shipments, selected);
    let buffer = shipments_workbook(&rows)?;

    tracing::info!(phone = %phone.masked(), rows = rows.len(), "exported lookup");

    let filename = export_filename(phone.as_str(), chrono::Local::now().date_naive());
    xlsx_response(buffer, &filename)
}

/// One upstream call per search, with timing and unknown-status logging.
fn find_shipments(app: &AppState, phone: &PhoneNumber) -> Result<Vec<Shipment>, LookupError> {
    let started = Instant::now();
    let result = app.lookup.find_by_phone(phone);
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match &result {
        Ok(shipments) => {
            tracing::info!(phone = %phone.masked(), count = shipments.len(), elapsed_ms, "lookup ok");
            for s in shipments.iter().filter(|s| s.group() == GroupId::Unknown) {
                tracing::debug!(order = %s.order_code, status = %s.status, "unrecognized status");
            }
        }
        Err(LookupError::NotFound) => {
            tracing::info!(phone = %phone.masked(), elapsed_ms, "lookup found nothing");
        }
        Err(e) => {
            tracing::warn!(
                phone = %phone.masked(),
                elapsed_ms,
                retryable = e.is_retryable(),
                error = %e,
                "lookup failed"
            );
        }
    }

    result
}

fn render_lookup(vm: OrderLookupVm<'_>, status: u16, partial: bool) -> ResultResp {
    let markup = if partial {
        templates::pages::order_lookup_result(&vm)
    } else {
        templates::pages::order_lookup_page(&vm)
    };

    // htmx won't swap 4xx/5xx bodies, so fragments always go out as 200.
    if status == 200 || partial {
        html_response(markup)
    } else {
        html_response_with_status(status, markup)
    }
}

fn is_htmx(req: &Request) -> bool {
    req.headers().contains_key("HX-Request")
}

/// Decoded query pairs, in order, repeated keys kept.
fn query_pairs(req: &Request) -> Vec<(String, String)> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
