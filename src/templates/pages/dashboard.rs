use crate::domain::{Bucket, Campaign, CampaignBoard};
use crate::locale::{Locale, Text};
use crate::templates::components::{tab_bar, tab_panel};
use crate::templates::desktop_layout;
use chrono::{DateTime, Utc};
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub board: &'a CampaignBoard,
    pub locale: Locale,
    pub today: DateTime<Utc>,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let tabs: Vec<(&str, &str, usize)> = Bucket::ALL
        .iter()
        .map(|&b| (b.as_str(), vm.locale.bucket_title(b), vm.board.bucket(b).len()))
        .collect();

    desktop_layout(
        vm.locale.text(Text::ManageCampaigns),
        vm.locale,
        html! {
            main class="container" {
                h1 { (vm.locale.text(Text::ManageCampaigns)) }
                p class="today" { (vm.locale.text(Text::Today)) strong { (vm.locale.format_date(vm.today)) } }

                div class="tabs" {
                    (tab_bar("bucket", &tabs))
                    div class="tab-panels" {
                        @for bucket in Bucket::ALL {
                            (tab_panel(bucket.as_str(), campaign_table(vm, bucket)))
                        }
                    }
                }
            }
        },
    )
}

fn campaign_table(vm: &DashboardVm, bucket: Bucket) -> Markup {
    let campaigns = vm.board.bucket(bucket);

    html! {
        @if campaigns.is_empty() {
            p class="empty" { (vm.locale.text(Text::NoCampaigns)) }
        } @else {
            table class="campaigns" {
                thead {
                    tr {
                        th { (vm.locale.text(Text::Date)) }
                        th { (vm.locale.text(Text::Campaign)) }
                        th { (vm.locale.text(Text::View)) }
                        th { (vm.locale.text(Text::Actions)) }
                    }
                }
                tbody {
                    @for (index, campaign) in campaigns.iter().enumerate() {
                        (campaign_row(vm, bucket, index, campaign))
                    }
                }
            }
        }
    }
}

fn campaign_row(vm: &DashboardVm, bucket: Bucket, index: usize, campaign: &Campaign) -> Markup {
    let record = &campaign.record;
    let base = format!("/campaigns/{bucket}/{index}");

    html! {
        tr {
            td {
                div class="date" { (vm.locale.format_date(record.created_on)) }
                div class="relative" { (vm.locale.relative_days(campaign.time_diff)) }
            }
            td class="campaign" {
                @if let Some(src) = &record.image_url {
                    img class="thumb" src=(src) alt="";
                }
                div {
                    div class="name" { (record.name) }
                    @if let Some(region) = &record.region {
                        div class="region" { (region) }
                    }
                }
            }
            td {
                a
                    href=(format!("{base}/pricing"))
                    hx-get=(format!("{base}/pricing"))
                    hx-target="#popup"
                    hx-swap="innerHTML"
                    class="view-pricing"
                { (vm.locale.text(Text::ViewPricing)) }
            }
            td class="actions" {
                @if let Some(csv) = &record.csv {
                    a href=(csv) { "CSV" }
                }
                @if let Some(report) = &record.report {
                    a href=(report) { "Report" }
                }
                form method="post" action=(format!("{base}/reschedule")) class="reschedule" {
                    label class="sr-only" for=(format!("date-{bucket}-{index}")) { (vm.locale.text(Text::NewDate)) }
                    input
                        type="date"
                        id=(format!("date-{bucket}-{index}"))
                        name="created_on"
                        value=(record.created_on.format("%Y-%m-%d").to_string())
                        required;
                    input
                        type="hidden"
                        name="current"
                        value=(record.created_on.timestamp_millis());
                    button type="submit" { (vm.locale.text(Text::ScheduleAgain)) }
                }
            }
        }
    }
}
