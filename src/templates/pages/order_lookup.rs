use crate::domain::aggregate::bucket_by_raw_status;
use crate::domain::{
    aggregate, filter_shipments, GroupId, Product, Shipment, StatusBucket, ViewState,
};
use crate::templates::components::{lookup_form, notice, progress_bar, timeline};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub enum LookupOutcome<'a> {
    /// No phone submitted yet.
    Blank,
    InvalidPhone,
    NotFound,
    /// Transport or order API failure.
    Unavailable,
    Found(&'a [Shipment]),
}

pub struct OrderLookupVm<'a> {
    pub phone: String,
    pub state: ViewState,
    pub outcome: LookupOutcome<'a>,
}

pub fn order_lookup_page(vm: &OrderLookupVm<'_>) -> Markup {
    desktop_layout(
        "Tra cứu đơn hàng",
        html! {
            main class="container" {
                h1 { "Tra cứu đơn hàng" }

                (lookup_form(&vm.phone))

                div id="lookup-result" aria-live="polite" {
                    (order_lookup_result(vm))
                }
            }
        },
    )
}

/// The part below the form. Returned on its own for htmx requests.
pub fn order_lookup_result(vm: &OrderLookupVm<'_>) -> Markup {
    match vm.outcome {
        LookupOutcome::Blank => html! {},
        LookupOutcome::InvalidPhone => notice(
            "error",
            "Số điện thoại không hợp lệ. Vui lòng nhập số di động Việt Nam (0xxxxxxxxx hoặc +84xxxxxxxxx).",
        ),
        LookupOutcome::NotFound => notice(
            "info",
            "Không tìm thấy đơn hàng nào với số điện thoại này.",
        ),
        LookupOutcome::Unavailable => notice(
            "error",
            "Hệ thống tra cứu đang gặp sự cố. Vui lòng thử lại sau ít phút.",
        ),
        LookupOutcome::Found(shipments) => found(shipments, &vm.state, &vm.phone),
    }
}

fn found(shipments: &[Shipment], state: &ViewState, phone: &str) -> Markup {
    let view = aggregate(shipments);
    let filtered = filter_shipments(shipments, state.selected_group);
    let buckets = bucket_by_raw_status(filtered.iter().copied());
    let unclassified = shipments.len() - view.counted_total();

    let export_state = ViewState {
        selected_group: state.selected_group,
        ..ViewState::default()
    };
    let export_href = format!("/orders/export?{}", export_state.to_query(phone));

    html! {
        section class="card" {
            div class="flex items-center justify-between" {
                p {
                    "Tìm thấy " strong { (shipments.len()) } " đơn hàng"
                    @if unclassified > 0 {
                        " (" (unclassified) " đơn chưa xác định trạng thái)"
                    }
                    "."
                }
                a href=(export_href) class="btn" download { "Tải Excel" }
            }

            (timeline(&view, state, phone))

            @if let Some(group) = state.selected_group {
                p class="filter-hint" {
                    "Đang lọc: " strong { (group.label()) } " · "
                    a
                        href=(format!("/orders?{}", state.with_group(group).to_query(phone)))
                        hx-get=(format!("/orders?{}", state.with_group(group).to_query(phone)))
                        hx-target="#lookup-result"
                        hx-push-url="true"
                    { "Bỏ lọc" }
                }
            }
        }

        @if buckets.is_empty() {
            (notice("info", "Không có đơn hàng nào trong nhóm này."))
        }

        @for bucket in &buckets {
            (bucket_section(bucket, state, phone))
        }
    }
}

fn bucket_section(bucket: &StatusBucket<'_>, state: &ViewState, phone: &str) -> Markup {
    html! {
        section class="card status-bucket" data-status=(bucket.status) {
            h3 { (bucket.label()) " " span class="badge" { (bucket.shipments.len()) } }
            table class="shipments" {
                thead {
                    tr {
                        th { "Mã đơn" }
                        th { "Mã vận đơn" }
                        th { "Trạng thái" }
                        th { "Tiến độ" }
                        th {}
                    }
                }
                tbody {
                    @for shipment in &bucket.shipments {
                        (shipment_rows(shipment, state, phone))
                    }
                }
            }
        }
    }
}

fn shipment_rows(shipment: &Shipment, state: &ViewState, phone: &str) -> Markup {
    let expanded = state.is_expanded(&shipment.order_code);
    let href = format!("/orders?{}", state.with_toggled(&shipment.order_code).to_query(phone));
    let cancelled = shipment.group() == GroupId::DaHuy;

    html! {
        tr data-order=(shipment.order_code) {
            td { (shipment.order_code) }
            td { (shipment.shipment_code.as_deref().unwrap_or("—")) }
            td { (shipment.descriptor().label) }
            td { (progress_bar(shipment.percent(), cancelled)) }
            td {
                a
                    href=(href)
                    hx-get=(href)
                    hx-target="#lookup-result"
                    hx-push-url="true"
                    aria-expanded=(if expanded { "true" } else { "false" })
                {
                    @if expanded { "Ẩn sản phẩm" } @else { "Xem sản phẩm" }
                }
            }
        }
        @if expanded {
            tr class="products" {
                td colspan="5" {
                    @if shipment.products.is_empty() {
                        span class="muted" { "Không có sản phẩm." }
                    } @else {
                        ol {
                            @for product in &shipment.products {
                                li {
                                    @match web_link(product) {
                                        Some(link) => {
                                            a href=(link) target="_blank" rel="noopener noreferrer" { (product.product_name) }
                                        }
                                        None => { (product.product_name) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Product links are typed in by customers; only http(s) becomes an anchor.
fn web_link(product: &Product) -> Option<&str> {
    let link = product.product_link.as_deref()?;
    let parsed = url::Url::parse(link).ok()?;
    matches!(parsed.scheme(), "http" | "https").then_some(link)
}
