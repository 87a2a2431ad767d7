use crate::locale::{Locale, Text};
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, locale: Locale, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(locale.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
              header class="app-header" {
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
                      class="icon icon-tabler icon-tabler-calendar"
                  {
                      path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                      path d="M4 7a2 2 0 0 1 2 -2h12a2 2 0 0 1 2 2v12a2 2 0 0 1 -2 2h-12a2 2 0 0 1 -2 -2v-12z" {}
                      path d="M16 3v4" {}
                      path d="M8 3v4" {}
                      path d="M4 11h16" {}
                  }
                  h3 { (locale.text(Text::ManageCampaigns)) }
                  nav {
                      ul {
                          li { a href="/" { "Dashboard" } }
                          li { a href="/api/campaigns" { "JSON" } }
                      }
                  }
              }
                (content)
                // popup fragments are swapped in here
                div id="popup" {}
            }
        }
    }
}
