use maud::{html, Markup};

pub fn progress_bar(percent: u8, cancelled: bool) -> Markup {
    let width = percent.min(100);
    html! {
        div
            class=(if cancelled { "progress progress-cancelled" } else { "progress" })
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=(width)
        {
            div class="progress-fill" style=(format!("width: {width}%;")) {}
            span class="progress-label" { (width) "%" }
        }
    }
}
