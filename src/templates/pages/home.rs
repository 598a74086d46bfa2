// templates/pages/home.rs

use crate::templates::{
    components::{card, lookup_form},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Trang chủ",
        html! {
            main class="container narrow" {
                h1 { "Theo dõi đơn hàng" }
                p class="lead" {
                    "Kiểm tra tình trạng mua hộ, vận chuyển và giao hàng chỉ với số điện thoại."
                }

                (card("Tra cứu nhanh", lookup_form("")))

                div id="lookup-result" aria-live="polite" {}

                (card("Quy trình vận chuyển", html! {
                    ol class="pipeline-legend" {
                        @for group in crate::domain::GROUP_ORDER {
                            li { (group.label()) }
                        }
                    }
                }))
            }
        },
    )
}
