// locale.rs
use crate::domain::Bucket;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Display language. Only switches fixed strings and date formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    pub fn format_date(self, date: DateTime<Utc>) -> String {
        match self {
            Locale::En => date.format("%b %-d, %Y").to_string(),
            Locale::Fr => date.format("%d/%m/%Y").to_string(),
        }
    }

    /// "in 3 days", "2 days ago", "today"
    pub fn relative_days(self, diff: i64) -> String {
        let n = diff.unsigned_abs();
        match (self, diff.signum()) {
            (Locale::En, 0) => "today".to_string(),
            (Locale::En, 1) => format!("in {n} {}", plural(n, "day", "days")),
            (Locale::En, _) => format!("{n} {} ago", plural(n, "day", "days")),
            (Locale::Fr, 0) => "aujourd'hui".to_string(),
            (Locale::Fr, 1) => format!("dans {n} {}", plural(n, "jour", "jours")),
            (Locale::Fr, _) => format!("il y a {n} {}", plural(n, "jour", "jours")),
        }
    }

    pub fn bucket_title(self, bucket: Bucket) -> &'static str {
        match (self, bucket) {
            (Locale::En, Bucket::Upcoming) => "Upcoming Campaigns",
            (Locale::En, Bucket::Live) => "Live Campaigns",
            (Locale::En, Bucket::Past) => "Past Campaigns",
            (Locale::Fr, Bucket::Upcoming) => "Campagnes à venir",
            (Locale::Fr, Bucket::Live) => "Campagnes en cours",
            (Locale::Fr, Bucket::Past) => "Campagnes passées",
        }
    }

    pub fn text(self, text: Text) -> &'static str {
        match self {
            Locale::En => text.en(),
            Locale::Fr => text.fr(),
        }
    }
}

/// Fixed interface strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    ManageCampaigns,
    Today,
    Date,
    Campaign,
    View,
    Actions,
    NoCampaigns,
    ViewPricing,
    NewDate,
    ScheduleAgain,
    Pricing,
    NoPricing,
    Close,
    Error,
    BackToDashboard,
}

impl Text {
    fn en(self) -> &'static str {
        match self {
            Text::ManageCampaigns => "Manage Campaigns",
            Text::Today => "Today: ",
            Text::Date => "Date",
            Text::Campaign => "Campaign",
            Text::View => "View",
            Text::Actions => "Actions",
            Text::NoCampaigns => "No campaigns here.",
            Text::ViewPricing => "View Pricing",
            Text::NewDate => "New date",
            Text::ScheduleAgain => "Schedule Again",
            Text::Pricing => "Pricing",
            Text::NoPricing => "No pricing configured for this campaign.",
            Text::Close => "Close",
            Text::Error => "Error",
            Text::BackToDashboard => "← Back to dashboard",
        }
    }

    fn fr(self) -> &'static str {
        match self {
            Text::ManageCampaigns => "Gérer les campagnes",
            Text::Today => "Aujourd'hui : ",
            Text::Date => "Date",
            Text::Campaign => "Campagne",
            Text::View => "Voir",
            Text::Actions => "Actions",
            Text::NoCampaigns => "Aucune campagne ici.",
            Text::ViewPricing => "Voir les tarifs",
            Text::NewDate => "Nouvelle date",
            Text::ScheduleAgain => "Reprogrammer",
            Text::Pricing => "Tarifs",
            Text::NoPricing => "Aucun tarif configuré pour cette campagne.",
            Text::Close => "Fermer",
            Text::Error => "Erreur",
            Text::BackToDashboard => "← Retour au tableau de bord",
        }
    }
}

fn plural(n: u64, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            other => Err(format!("unsupported locale '{other}' (expected en or fr)")),
        }
    }
}
