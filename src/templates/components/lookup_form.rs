use maud::{html, Markup};

/// Phone search form. Submits only `phone`, so every search starts from a
/// clean view state. `hx-sync` drops an in-flight search when a newer one
/// is submitted.
pub fn lookup_form(phone: &str) -> Markup {
    html! {
        div class="lookup-form-wrapper" {
            form
                method="get"
                action="/orders"
                hx-get="/orders"
                hx-target="#lookup-result"
                hx-swap="innerHTML"
                hx-push-url="true"
                hx-sync="this:replace"
                hx-indicator=".spinner"
                class="lookup-form"
            {
                label class="sr-only" for="phone" { "Số điện thoại" }
                input
                    type="tel"
                    id="phone"
                    name="phone"
                    value=(phone)
                    placeholder="0912 345 678"
                    autocomplete="tel"
                    required;

                button type="submit" class="primary" {
                    span class="btn-text" { "Tra cứu" }
                    span class="spinner" aria-hidden="true" {}
                }

                p class="microcopy" {
                    "Nhập số điện thoại đã dùng khi đặt hàng (bắt đầu bằng 0 hoặc +84)."
                }
            }
        }
    }
}
