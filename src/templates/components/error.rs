use crate::locale::{Locale, Text};
use maud::{html, Markup, DOCTYPE};

/// Standalone error page; does not use the desktop layout.
pub fn error_page(status: u16, message: &str, locale: Locale) -> Markup {
    let heading = format!("{} {status}", locale.text(Text::Error));

    html! {
        (DOCTYPE)
        html lang=(locale.code()) {
            head {
                meta charset="utf-8";
                title { (heading) }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="error-page" {
                h1 { (heading) }
                p { (message) }
                p { a href="/" { (locale.text(Text::BackToDashboard)) } }
            }
        }
    }
}
