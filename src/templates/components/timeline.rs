use crate::domain::{AggregateView, GroupId, ViewState, GROUP_ORDER};
use maud::{html, Markup};

/// Group counts across the fixed pipeline order, with the cancelled bucket
/// after it. Each step links to the same page with that group toggled.
pub fn timeline(view: &AggregateView<'_>, state: &ViewState, phone: &str) -> Markup {
    let cancelled = view.count(GroupId::DaHuy);

    html! {
        nav class="timeline" aria-label="Trạng thái đơn hàng" {
            ol class="timeline-steps" {
                @for group in GROUP_ORDER {
                    (step(group, view, state, phone))
                }
            }
            @if cancelled > 0 {
                ul class="timeline-cancelled" {
                    (step(GroupId::DaHuy, view, state, phone))
                }
            }
        }
    }
}

fn step(group: GroupId, view: &AggregateView<'_>, state: &ViewState, phone: &str) -> Markup {
    let count = view.count(group);
    let selected = state.selected_group == Some(group);
    let href = format!("/orders?{}", state.with_group(group).to_query(phone));

    let mut class = String::from("timeline-step");
    if count > 0 {
        class.push_str(" active");
    }
    if selected {
        class.push_str(" selected");
    }

    html! {
        li class=(class) data-group=(group.as_str()) {
            @if count > 0 || selected {
                a
                    href=(href)
                    hx-get=(href)
                    hx-target="#lookup-result"
                    hx-swap="innerHTML"
                    hx-push-url="true"
                    aria-pressed=(if selected { "true" } else { "false" })
                {
                    span class="step-label" { (group.label()) }
                    span class="step-count" { (count) }
                }
            } @else {
                span class="step-label" { (group.label()) }
                span class="step-count" { (count) }
            }
        }
    }
}
