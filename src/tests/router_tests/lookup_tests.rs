use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    app_with, body_string, get, htmx_get, sample_shipments, shipment, FakeLookup,
};
use std::sync::atomic::Ordering;

const PHONE: &str = "0912345678";

/// The markup following `marker`, for checks scoped to one element.
fn after<'a>(body: &'a str, marker: &str, len: usize) -> &'a str {
    let start = body
        .find(marker)
        .unwrap_or_else(|| panic!("{marker} not found in body"));
    let end = (start + len).min(body.len());
    let end = (end..body.len())
        .find(|&i| body.is_char_boundary(i))
        .unwrap_or(body.len());
    &body[start..end]
}

fn position(body: &str, marker: &str) -> usize {
    body.find(marker)
        .unwrap_or_else(|| panic!("{marker} not found in body"))
}

#[test]
fn home_page_has_lookup_form() {
    let (app, _) = app_with(FakeLookup::NotFound);

    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"action="/orders""#));
    assert!(body.contains(r#"name="phone""#));
}

#[test]
fn htmx_script_is_pinned_by_integrity_hash() {
    use crate::templates::layouts::desktop::{HTMX_INTEGRITY, HTMX_SRC};

    let (app, _) = app_with(FakeLookup::NotFound);
    let body = body_string(handle(get("/"), &app).expect("Handler failed"));

    let script = after(&body, "<script", 300);
    assert!(script.contains(&format!(r#"src="{HTMX_SRC}""#)));
    assert!(script.contains(&format!(r#"integrity="{HTMX_INTEGRITY}""#)));
    assert!(script.contains(r#"crossorigin="anonymous""#));
}

#[test]
fn stylesheet_is_served() {
    let (app, _) = app_with(FakeLookup::NotFound);

    let resp = handle(get("/static/main.css"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(resp).contains(".timeline-step"));
}

#[test]
fn blank_lookup_renders_empty_form_without_calling_upstream() {
    let (app, lookup) = app_with(FakeLookup::Found(sample_shipments()));

    let resp = handle(get("/orders"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"id="lookup-result""#));
    assert!(!body.contains("data-status"));
    assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn invalid_phone_is_rejected_before_lookup() {
    let (app, lookup) = app_with(FakeLookup::Found(sample_shipments()));

    let resp = handle(get("/orders?phone=12345"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 400);

    let body = body_string(resp);
    assert!(body.contains("Số điện thoại không hợp lệ"));
    assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn htmx_fragments_are_always_200() {
    let (app, _) = app_with(FakeLookup::Down);

    let resp = handle(htmx_get("/orders?phone=12345"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Số điện thoại không hợp lệ"));

    let resp = handle(htmx_get(&format!("/orders?phone={PHONE}")), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("thử lại"));
}

#[test]
fn found_page_shows_counts_buckets_and_progress() {
    let (app, lookup) = app_with(FakeLookup::Found(sample_shipments()));

    let resp = handle(get(&format!("/orders?phone={PHONE}")), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(lookup.calls.load(Ordering::SeqCst), 1, "one upstream call per search");

    let body = body_string(resp);
    assert!(body.starts_with("<!DOCTYPE html>"));

    // Summary; the unknown-status order is mentioned but not counted.
    assert!(body.contains("<strong>6</strong>"));
    assert!(body.contains("(1 đơn chưa xác định trạng thái)"));

    // Two raw statuses collapse into one timeline group.
    assert!(after(&body, r#"data-group="DA_MUA_GROUP""#, 600).contains(r#"step-count">2<"#));
    assert!(after(&body, r#"data-group="DA_GIAO""#, 600).contains(r#"step-count">1<"#));
    assert!(after(&body, r#"data-group="DANG_GIAO""#, 200).contains(r#"step-count">0<"#));
    assert!(body.contains(r#"data-group="DA_HUY""#));

    // ...but keep their own percentages.
    assert!(body.contains(r#"aria-valuenow="25""#));
    assert!(body.contains(r#"aria-valuenow="38""#));
    assert!(body.contains(r#"aria-valuenow="100""#));

    // Buckets: most advanced first, rank-0 ties in first-seen order.
    let order = [
        r#"data-status="DA_GIAO""#,
        r#"data-status="DAU_GIA_THANH_CONG""#,
        r#"data-status="DA_MUA""#,
        r#"data-status="CHO_MUA""#,
        r#"data-status="DA_HUY""#,
        r#"data-status="UNKNOWN_CODE""#,
    ];
    let positions: Vec<usize> = order.iter().map(|m| position(&body, m)).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");

    // Unknown status falls back to its raw code as label.
    assert!(body.contains("<td>UNKNOWN_CODE</td>"));

    // Nothing expanded on a fresh lookup.
    assert!(!body.contains("Nồi chiên không dầu"));
}

#[test]
fn cancelled_filter_shows_only_cancelled_orders() {
    let (app, _) = app_with(FakeLookup::Found(sample_shipments()));

    let resp = handle(get(&format!("/orders?phone={PHONE}&group=DA_HUY")), &app).expect("Handler failed");
    let body = body_string(resp);

    assert!(body.contains(r#"data-status="DA_HUY""#));
    assert!(!body.contains(r#"data-status="DA_GIAO""#));
    assert!(!body.contains(r#"data-status="UNKNOWN_CODE""#));
    assert!(!body.contains(r#"data-order="ORD-2""#));

    // The timeline still reflects the whole lookup.
    assert!(after(&body, r#"data-group="DA_GIAO""#, 600).contains(r#"step-count">1<"#));
    assert!(body.contains(r#"class="timeline-step active selected" data-group="DA_HUY""#));
}

#[test]
fn group_filter_keeps_both_raw_statuses_of_a_shared_group() {
    let (app, _) = app_with(FakeLookup::Found(sample_shipments()));

    let resp = handle(
        get(&format!("/orders?phone={PHONE}&group=DA_MUA_GROUP")),
        &app,
    )
    .expect("Handler failed");
    let body = body_string(resp);

    assert!(body.contains(r#"data-status="DA_MUA""#));
    assert!(body.contains(r#"data-status="DAU_GIA_THANH_CONG""#));
    assert!(!body.contains(r#"data-status="CHO_MUA""#));

    // Clicking the selected group again clears the filter.
    assert!(body.contains(&format!(r#"href="/orders?phone={PHONE}""#)));
}

#[test]
fn unknown_group_in_url_is_ignored() {
    let (app, _) = app_with(FakeLookup::Found(sample_shipments()));

    let resp = handle(get(&format!("/orders?phone={PHONE}&group=NOPE")), &app).expect("Handler failed");
    let body = body_string(resp);

    assert!(body.contains(r#"data-status="DA_GIAO""#));
    assert!(body.contains(r#"data-status="CHO_MUA""#));
    assert!(!body.contains("selected"));
}

#[test]
fn expanded_orders_show_products() {
    let (app, _) = app_with(FakeLookup::Found(sample_shipments()));

    let resp = handle(
        get(&format!("/orders?phone={PHONE}&expanded=ORD-1&expanded=ORD-3")),
        &app,
    )
    .expect("Handler failed");
    let body = body_string(resp);

    assert!(body.contains("Nồi chiên không dầu"));
    assert!(body.contains("Không có sản phẩm."));
    assert!(!body.contains("Máy lọc nước"), "ORD-2 is collapsed");
    assert!(body.contains("Ẩn sản phẩm"));
}

#[test]
fn international_prefix_round_trips_in_links() {
    let (app, lookup) = app_with(FakeLookup::Found(sample_shipments()));

    let resp = handle(get("/orders?phone=%2B84912345678"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);

    let body = body_string(resp);
    assert!(body.contains("phone=%2B84912345678"));
}

#[test]
fn not_found_is_a_normal_page() {
    let (app, lookup) = app_with(FakeLookup::NotFound);

    let resp = handle(get(&format!("/orders?phone={PHONE}")), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);

    let body = body_string(resp);
    assert!(body.contains("Không tìm thấy đơn hàng"));
    assert!(!body.contains("data-group"));
}

#[test]
fn upstream_failure_shows_retry_message() {
    let (app, _) = app_with(FakeLookup::Down);

    let resp = handle(get(&format!("/orders?phone={PHONE}")), &app).expect("Handler failed");
    assert_eq!(resp.status(), 502);

    let body = body_string(resp);
    assert!(body.contains("Vui lòng thử lại"));
    assert!(!body.contains("connection refused"), "transport details stay in logs");
}

#[test]
fn unknown_routes_are_not_found() {
    let (app, _) = app_with(FakeLookup::NotFound);

    assert!(matches!(handle(get("/nope"), &app), Err(ServerError::NotFound)));

    let resp = crate::responses::error_to_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn product_links_only_render_for_web_urls() {
    let mut order = shipment("X1", "DA_GIAO", &["Evil", "Kính"]);
    order.products[0].product_link = Some("javascript:alert(document.cookie)".to_string());
    order.products[1].product_link = Some("https://shop.example.com/kinh".to_string());
    let (app, _) = app_with(FakeLookup::Found(vec![order]));

    let resp = handle(get(&format!("/orders?phone={PHONE}&expanded=X1")), &app)
        .expect("Handler failed");
    let body = body_string(resp);

    assert!(!body.contains(r#"href="javascript:"#));
    assert!(body.contains("<li>Evil</li>"));
    assert!(body.contains(r#"href="https://shop.example.com/kinh""#));
}
