use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Small notice box used for not-found and retry messages.
pub fn notice(kind: &str, message: &str) -> Markup {
    html! {
        div class=(format!("notice notice-{kind}")) role="status" {
            p { (message) }
        }
    }
}
