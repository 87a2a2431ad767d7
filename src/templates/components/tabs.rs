use maud::{html, Markup};

/// CSS-only tabs: radio inputs drive which panel is shown, no script needed.
/// The inputs must stay direct siblings of the `.tab-panels` wrapper that follows.
/// `tabs` is (id, label, count); the first one starts checked.
pub fn tab_bar(group: &str, tabs: &[(&str, &str, usize)]) -> Markup {
    html! {
        @for (i, (id, _, _)) in tabs.iter().enumerate() {
            input type="radio" name=(group) id=(format!("tab-{id}")) class="tab-toggle" checked[i == 0];
        }
        nav class="tab-bar" role="tablist" {
            @for (id, label, count) in tabs {
                label for=(format!("tab-{id}")) class="tab" role="tab" {
                    (label) " " span class="tab-count" { "(" (count) ")" }
                }
            }
        }
    }
}

pub fn tab_panel(id: &str, body: Markup) -> Markup {
    html! {
        section class="tab-panel" id=(format!("panel-{id}")) role="tabpanel" {
            (body)
        }
    }
}
