use maud::{html, Markup, DOCTYPE};

pub const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";
/// Subresource integrity of htmx 1.9.12; the browser refuses any other bytes.
pub const HTMX_INTEGRITY: &str =
    "sha384-ujb1lZYygJmzgSwoxRggbCHcjc0rB2XoQrxeTUQyRjrOnlCoYta87iKBWq3EsdM2";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="vi" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Order Console" }
                link rel="stylesheet" href="/static/main.css";
                script
                    src=(HTMX_SRC)
                    integrity=(HTMX_INTEGRITY)
                    crossorigin="anonymous"
                    defer {};
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class="icon icon-tabler icon-tabler-truck"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M7 17m-2 0a2 2 0 1 0 4 0a2 2 0 1 0 -4 0" {}
                        path d="M17 17m-2 0a2 2 0 1 0 4 0a2 2 0 1 0 -4 0" {}
                        path d="M5 17h-2v-11a1 1 0 0 1 1 -1h9v12m-4 0h6m4 0h2v-6h-8m0 -5h5l3 5" {}
                    }
                    h3 { "Tra cứu đơn hàng" }
                    nav {
                        ul {
                            li { a href="/" { "Trang chủ" } }
                            li { a href="/orders" { "Tra cứu" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
