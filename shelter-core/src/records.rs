use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: Option<u32>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub content: String,
    pub location: Option<String>,
    pub emergency: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub description: String,
    pub contact: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub verified: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Lost,
    Stray,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Open,
    Resolved,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ReportKind,
    pub pet_name: Option<String>,
    pub species: String,
    pub description: String,
    pub location: String,
    pub last_seen: NaiveDate,
    pub image_url: Option<String>,
    pub contact: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}

impl Report {
    /// Card title. The pet name is only ever shown for lost-pet reports.
    pub fn headline(&self) -> String {
        match self.kind {
            ReportKind::Lost => match non_empty(&self.pet_name) {
                Some(name) => format!("Lost Pet - {name}"),
                None => "Lost Pet".to_string(),
            },
            ReportKind::Stray => "Stray Animal".to_string(),
        }
    }
}

/// Optional columns render only when present and non-blank.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub fn relative_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return ago(minutes, "minute");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return ago(hours, "hour");
    }
    let days = elapsed.num_days();
    if days < 30 {
        return ago(days, "day");
    }
    if days < 365 {
        return ago(days / 30, "month");
    }
    ago(days / 365, "year")
}

fn ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn report(kind: ReportKind, pet_name: Option<&str>) -> Report {
        Report {
            id: "rep-1".into(),
            kind,
            pet_name: pet_name.map(Into::into),
            species: "Dog".into(),
            description: "brown terrier".into(),
            location: "Elm Street".into(),
            last_seen: NaiveDate::from_ymd_opt(2026, 8, 1).expect("date"),
            image_url: None,
            contact: "555-0100".into(),
            status: ReportStatus::Open,
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn lost_headline_carries_pet_name() {
        assert_eq!(report(ReportKind::Lost, Some("Rex")).headline(), "Lost Pet - Rex");
        assert_eq!(report(ReportKind::Lost, None).headline(), "Lost Pet");
        assert_eq!(report(ReportKind::Lost, Some("  ")).headline(), "Lost Pet");
    }

    #[test]
    fn stray_headline_never_shows_pet_name() {
        assert_eq!(report(ReportKind::Stray, Some("Rex")).headline(), "Stray Animal");
        assert_eq!(report(ReportKind::Stray, None).headline(), "Stray Animal");
    }

    #[test]
    fn report_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ReportKind::Lost).expect("json"), "\"lost\"");
        assert_eq!(serde_json::to_string(&ReportStatus::Open).expect("json"), "\"open\"");
    }

    #[test]
    fn report_type_column_maps_to_kind() {
        let row = serde_json::json!({
            "id": "rep-9",
            "type": "stray",
            "pet_name": null,
            "species": "Cat",
            "description": "grey tabby near the park",
            "location": "Riverside Park",
            "last_seen": "2026-08-01",
            "image_url": null,
            "contact": "555-0101",
            "status": "open",
            "created_at": "2026-08-01T09:30:00+00:00"
        });
        let parsed: Report = serde_json::from_value(row).expect("report row");
        assert_eq!(parsed.kind, ReportKind::Stray);
        assert_eq!(parsed.last_seen, NaiveDate::from_ymd_opt(2026, 8, 1).expect("date"));
    }

    #[test]
    fn non_empty_skips_blank_values() {
        assert_eq!(non_empty(&Some("Husky".into())), Some("Husky"));
        assert_eq!(non_empty(&Some("   ".into())), None);
        assert_eq!(non_empty(&None), None);
    }

    #[test]
    fn relative_age_picks_the_largest_unit() {
        let now = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();
        let at = |secs: i64| now - chrono::Duration::seconds(secs);

        assert_eq!(relative_age(at(30), now), "just now");
        assert_eq!(relative_age(at(60), now), "1 minute ago");
        assert_eq!(relative_age(at(45 * 60), now), "45 minutes ago");
        assert_eq!(relative_age(at(3 * 3600), now), "3 hours ago");
        assert_eq!(relative_age(at(2 * 86400), now), "2 days ago");
        assert_eq!(relative_age(at(90 * 86400), now), "3 months ago");
        assert_eq!(relative_age(at(800 * 86400), now), "2 years ago");
    }
}
