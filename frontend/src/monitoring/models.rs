use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MonitoringStatus {
    NotConfigured,
    Active,
    Paused,
    Completed,
    Error,
}

impl MonitoringStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MonitoringStatus::NotConfigured => "Not configured",
            MonitoringStatus::Active => "Active",
            MonitoringStatus::Paused => "Paused",
            MonitoringStatus::Completed => "Completed",
            MonitoringStatus::Error => "Error",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            MonitoringStatus::NotConfigured => "bg-gray-100 text-gray-800",
            MonitoringStatus::Active => "bg-green-100 text-green-800",
            MonitoringStatus::Paused => "bg-yellow-100 text-yellow-800",
            MonitoringStatus::Completed => "bg-blue-100 text-blue-800",
            MonitoringStatus::Error => "bg-red-100 text-red-800",
        }
    }
}

/// Summary row returned by `GET /monitoring`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Monitoring {
    pub id: i64,
    pub name: String,
    pub channel_name: String,
    pub channel_avatar: Option<String>,
    pub status: MonitoringStatus,
    pub is_continuous: bool,
    pub interval_time: Option<i64>,
    pub created_at: String,
    pub last_check_at: Option<String>,
    pub total_videos: i64,
    pub processed_videos: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VideoProcessingStatus {
    Pending,
    Processing,
    Completed,
    Error,
}

impl VideoProcessingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VideoProcessingStatus::Pending => "Pending",
            VideoProcessingStatus::Processing => "Processing",
            VideoProcessingStatus::Completed => "Completed",
            VideoProcessingStatus::Error => "Error",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            VideoProcessingStatus::Pending => "bg-gray-100 text-gray-800",
            VideoProcessingStatus::Processing => "bg-yellow-100 text-yellow-800",
            VideoProcessingStatus::Completed => "bg-green-100 text-green-800",
            VideoProcessingStatus::Error => "bg-red-100 text-red-800",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MonitoringVideo {
    pub id: i64,
    pub video_id: i64,
    pub status: VideoProcessingStatus,
    pub error_message: Option<String>,
    pub processed_at: Option<String>,
}

/// Full record returned by `GET /monitoring/{id}` and by updates.
///
/// `interval_time` is minutes. Older server builds named the playlist field
/// `playlists`; the alias keeps both shapes readable.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MonitoringDetails {
    pub id: i64,
    pub name: String,
    pub channel_id: i64,
    #[serde(default)]
    pub channel_name: String,
    pub channel_avatar: Option<String>,
    pub status: MonitoringStatus,
    pub is_continuous: bool,
    pub interval_time: Option<i64>,
    pub created_at: String,
    pub last_check_at: Option<String>,
    #[serde(default)]
    pub total_videos: i64,
    #[serde(default)]
    pub processed_videos: i64,
    #[serde(default, alias = "playlists")]
    pub playlist_ids: Vec<String>,
    #[serde(default)]
    pub videos: Vec<MonitoringVideo>,
}

/// A playlist fetched for selection in continuous mode.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlaylistCandidate {
    pub playlist_id: String,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub video_count: i64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MonitoringCreate {
    pub name: String,
    pub channel_id: i64,
    pub is_continuous: bool,
}

/// `PUT /monitoring/{id}` payload composed by the detail form.
/// `interval_time` serializes as an explicit null in one-shot mode.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MonitoringConfigUpdate {
    pub is_continuous: bool,
    pub interval_time: Option<i64>,
    pub playlist_ids: Vec<String>,
    pub videos: Vec<i64>,
}

/// `PUT /monitoring/{id}` payload used by the pause/resume control only.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct MonitoringStatusUpdate {
    pub status: MonitoringStatus,
}

/// Check intervals offered in continuous mode, in minutes.
pub const INTERVAL_OPTIONS: &[(i64, &str)] = &[
    (10, "10 minutes"),
    (20, "20 minutes"),
    (30, "30 minutes"),
    (45, "45 minutes"),
    (60, "1 hour"),
    (120, "2 hours"),
    (300, "5 hours"),
    (720, "12 hours"),
    (1440, "1 day"),
    (2880, "2 days"),
    (10080, "1 week"),
    (43200, "30 days"),
];

pub fn interval_label(minutes: i64) -> String {
    for (value, label) in INTERVAL_OPTIONS {
        if *value == minutes {
            return (*label).to_string();
        }
    }
    format!("{} minutes", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_snake_case() {
        let status: MonitoringStatus = serde_json::from_str("\"not_configured\"").unwrap();
        assert_eq!(status, MonitoringStatus::NotConfigured);
        assert_eq!(
            serde_json::to_string(&MonitoringStatus::Paused).unwrap(),
            "\"paused\""
        );
    }

    #[test]
    fn details_accepts_the_legacy_playlists_field_name() {
        let body = r#"{
            "id": 7,
            "name": "sermons",
            "channel_id": 2,
            "channel_name": "Channel",
            "channel_avatar": null,
            "status": "active",
            "is_continuous": true,
            "interval_time": 60,
            "created_at": "2025-01-01T00:00:00Z",
            "last_check_at": null,
            "total_videos": 4,
            "processed_videos": 1,
            "playlists": ["PL1", "PL2"]
        }"#;
        let details: MonitoringDetails = serde_json::from_str(body).unwrap();
        assert_eq!(details.playlist_ids, vec!["PL1", "PL2"]);
        assert!(details.videos.is_empty());
    }

    #[test]
    fn status_update_serializes_only_the_status_field() {
        let payload = MonitoringStatusUpdate {
            status: MonitoringStatus::Active,
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"status":"active"}"#
        );
    }

    #[test]
    fn config_update_keeps_an_explicit_null_interval() {
        let payload = MonitoringConfigUpdate {
            is_continuous: false,
            interval_time: None,
            playlist_ids: Vec::new(),
            videos: vec![3, 5],
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"is_continuous":false,"interval_time":null,"playlist_ids":[],"videos":[3,5]}"#
        );
    }

    #[test]
    fn interval_labels_cover_the_fixed_choices() {
        assert_eq!(interval_label(60), "1 hour");
        assert_eq!(interval_label(10080), "1 week");
        assert_eq!(interval_label(17), "17 minutes");
    }
}
