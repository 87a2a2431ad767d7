use crate::domain::{to_rows, Campaign, PriceValue};
use crate::locale::{Locale, Text};
use maud::{html, Markup};

/// The popup gets its own copy of the campaign, never a reference into the board.
pub struct PricingVm {
    pub campaign: Campaign,
    pub locale: Locale,
}

pub fn pricing_popup(vm: &PricingVm) -> Markup {
    let record = &vm.campaign.record;
    let rows = to_rows(record.price.as_ref());

    html! {
        dialog open class="pricing-popup" {
            header {
                h2 { (record.name) }
                @if let Some(region) = &record.region {
                    p class="region" { (region) }
                }
                p class="date" { (vm.locale.format_date(record.created_on)) }
            }

            h3 { (vm.locale.text(Text::Pricing)) }
            @if rows.is_empty() {
                p class="empty" { (vm.locale.text(Text::NoPricing)) }
            } @else {
                table class="pricing" {
                    tbody {
                        @for row in &rows {
                            tr {
                                td { (row.label) }
                                td class="price" { (price_text(&row.value)) }
                            }
                        }
                    }
                }
            }

            form method="dialog" {
                button type="submit" { (vm.locale.text(Text::Close)) }
            }
        }
    }
}

fn price_text(value: &PriceValue) -> String {
    match value {
        PriceValue::Amount(n) => format!("$ {n}"),
        PriceValue::Text(s) => s.clone(),
    }
}
