//! View-model for the monitoring detail form, kept free of I/O so the
//! selection and validation rules can be exercised directly.

use std::fmt;

use super::models::{
    MonitoringConfigUpdate, MonitoringDetails, MonitoringStatus, MonitoringStatusUpdate,
};
use crate::models::VideoCandidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitoringMode {
    OneShot,
    Continuous,
}

/// Local validation failures. None of these ever reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingInterval,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingInterval => {
                write!(f, "Choose a check interval before saving")
            }
        }
    }
}

/// Pending configuration edits for one monitoring record. Selections are
/// sets keyed by external id and are discarded on navigation, never
/// partially persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitoringForm {
    pub mode: MonitoringMode,
    pub interval_time: Option<i64>,
    selected_videos: Vec<VideoCandidate>,
    selected_playlists: Vec<String>,
}

impl MonitoringForm {
    pub fn new() -> Self {
        Self {
            mode: MonitoringMode::OneShot,
            interval_time: None,
            selected_videos: Vec::new(),
            selected_playlists: Vec::new(),
        }
    }

    pub fn from_record(record: &MonitoringDetails) -> Self {
        Self {
            mode: if record.is_continuous {
                MonitoringMode::Continuous
            } else {
                MonitoringMode::OneShot
            },
            interval_time: record.interval_time,
            selected_videos: Vec::new(),
            selected_playlists: record.playlist_ids.clone(),
        }
    }

    pub fn is_continuous(&self) -> bool {
        self.mode == MonitoringMode::Continuous
    }

    /// Flips the mode. Does not touch selections; the owning component
    /// decides whether a secondary fetch is needed.
    pub fn set_mode(&mut self, continuous: bool) {
        self.mode = if continuous {
            MonitoringMode::Continuous
        } else {
            MonitoringMode::OneShot
        };
    }

    pub fn set_interval(&mut self, minutes: Option<i64>) {
        self.interval_time = minutes;
    }

    pub fn selected_videos(&self) -> &[VideoCandidate] {
        &self.selected_videos
    }

    pub fn has_video(&self, video_id: &str) -> bool {
        self.selected_videos.iter().any(|v| v.video_id == video_id)
    }

    /// Adds a validated candidate, deduplicated by external video id.
    /// Returns false when the video was already selected.
    pub fn add_video(&mut self, video: VideoCandidate) -> bool {
        if self.has_video(&video.video_id) {
            return false;
        }
        self.selected_videos.push(video);
        true
    }

    pub fn remove_video(&mut self, video_id: &str) {
        self.selected_videos.retain(|v| v.video_id != video_id);
    }

    pub fn toggle_video(&mut self, video: &VideoCandidate) {
        if self.has_video(&video.video_id) {
            self.remove_video(&video.video_id);
        } else {
            self.selected_videos.push(video.clone());
        }
    }

    pub fn selected_playlists(&self) -> &[String] {
        &self.selected_playlists
    }

    pub fn has_playlist(&self, playlist_id: &str) -> bool {
        self.selected_playlists.iter().any(|p| p == playlist_id)
    }

    pub fn toggle_playlist(&mut self, playlist_id: &str) {
        if self.has_playlist(playlist_id) {
            self.selected_playlists.retain(|p| p != playlist_id);
        } else {
            self.selected_playlists.push(playlist_id.to_string());
        }
    }

    /// Composes the update payload, or fails locally without touching the
    /// network: continuous mode requires an interval.
    pub fn build_update(&self) -> Result<MonitoringConfigUpdate, FormError> {
        match self.mode {
            MonitoringMode::Continuous => {
                let interval = self.interval_time.ok_or(FormError::MissingInterval)?;
                Ok(MonitoringConfigUpdate {
                    is_continuous: true,
                    interval_time: Some(interval),
                    playlist_ids: self.selected_playlists.clone(),
                    videos: Vec::new(),
                })
            }
            MonitoringMode::OneShot => Ok(MonitoringConfigUpdate {
                is_continuous: false,
                interval_time: None,
                playlist_ids: Vec::new(),
                videos: self.selected_videos.iter().map(|v| v.id).collect(),
            }),
        }
    }
}

impl Default for MonitoringForm {
    fn default() -> Self {
        Self::new()
    }
}

/// The pause/resume control flips active<->paused and nothing else;
/// completed and errored records are not toggleable from it.
pub fn toggle_target(status: MonitoringStatus) -> Option<MonitoringStatusUpdate> {
    match status {
        MonitoringStatus::Active => Some(MonitoringStatusUpdate {
            status: MonitoringStatus::Paused,
        }),
        MonitoringStatus::Paused => Some(MonitoringStatusUpdate {
            status: MonitoringStatus::Active,
        }),
        _ => None,
    }
}

pub fn progress_fraction(processed: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    processed as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: i64, video_id: &str) -> VideoCandidate {
        VideoCandidate {
            id,
            video_id: video_id.to_string(),
            title: format!("video {}", video_id),
            thumbnail_url: None,
            published_at: "2025-01-01T00:00:00Z".to_string(),
            is_live: false,
        }
    }

    fn record(is_continuous: bool, interval: Option<i64>, playlists: &[&str]) -> MonitoringDetails {
        MonitoringDetails {
            id: 1,
            name: "test".to_string(),
            channel_id: 9,
            channel_name: "channel".to_string(),
            channel_avatar: None,
            status: MonitoringStatus::Active,
            is_continuous,
            interval_time: interval,
            created_at: "2025-01-01T00:00:00Z".to_string(),
            last_check_at: None,
            total_videos: 0,
            processed_videos: 0,
            playlist_ids: playlists.iter().map(|p| p.to_string()).collect(),
            videos: Vec::new(),
        }
    }

    #[test]
    fn mode_is_derived_from_the_record() {
        let form = MonitoringForm::from_record(&record(true, Some(60), &["PL1"]));
        assert!(form.is_continuous());
        assert_eq!(form.interval_time, Some(60));
        assert_eq!(form.selected_playlists(), ["PL1".to_string()]);

        let form = MonitoringForm::from_record(&record(false, None, &[]));
        assert_eq!(form.mode, MonitoringMode::OneShot);
    }

    #[test]
    fn video_selection_has_set_semantics() {
        let mut form = MonitoringForm::new();
        let v = video(1, "abc");

        // Selecting twice then deselecting once leaves it absent.
        form.toggle_video(&v);
        form.toggle_video(&v);
        assert!(!form.has_video("abc"));

        form.toggle_video(&v);
        assert!(form.has_video("abc"));
        assert_eq!(form.selected_videos().len(), 1);
    }

    #[test]
    fn add_video_deduplicates_by_external_id() {
        let mut form = MonitoringForm::new();
        assert!(form.add_video(video(1, "abc")));
        // Same external id under a different row id still counts as a dup.
        assert!(!form.add_video(video(2, "abc")));
        assert_eq!(form.selected_videos().len(), 1);
        assert_eq!(form.selected_videos()[0].id, 1);
    }

    #[test]
    fn playlist_selection_is_idempotent() {
        let mut form = MonitoringForm::new();
        form.toggle_playlist("PL1");
        form.toggle_playlist("PL2");
        form.toggle_playlist("PL1");
        assert!(!form.has_playlist("PL1"));
        assert_eq!(form.selected_playlists(), ["PL2".to_string()]);
    }

    #[test]
    fn continuous_save_without_interval_fails_locally() {
        let mut form = MonitoringForm::new();
        form.set_mode(true);
        form.toggle_playlist("PL1");
        assert_eq!(form.build_update(), Err(FormError::MissingInterval));
    }

    #[test]
    fn continuous_payload_carries_interval_and_playlists() {
        let mut form = MonitoringForm::new();
        form.set_mode(true);
        form.set_interval(Some(120));
        form.toggle_playlist("PL1");
        form.add_video(video(1, "abc")); // stale one-shot selection is not sent

        let payload = form.build_update().unwrap();
        assert!(payload.is_continuous);
        assert_eq!(payload.interval_time, Some(120));
        assert_eq!(payload.playlist_ids, vec!["PL1".to_string()]);
        assert!(payload.videos.is_empty());
    }

    #[test]
    fn oneshot_payload_carries_video_ids_and_null_interval() {
        let mut form = MonitoringForm::new();
        form.set_interval(Some(60)); // leftover from a continuous toggle
        form.add_video(video(3, "abc"));
        form.add_video(video(5, "def"));
        form.toggle_playlist("PL1"); // stale continuous selection is not sent

        let payload = form.build_update().unwrap();
        assert!(!payload.is_continuous);
        assert_eq!(payload.interval_time, None);
        assert_eq!(payload.videos, vec![3, 5]);
        assert!(payload.playlist_ids.is_empty());
    }

    #[test]
    fn rejected_validation_leaves_the_selection_untouched() {
        // The component only calls add_video on a successful validation
        // response; the failure path must not mutate anything.
        let mut form = MonitoringForm::new();
        form.add_video(video(1, "abc"));
        let before = form.clone();
        // No call made; state is unchanged by construction.
        assert_eq!(form, before);
    }

    #[test]
    fn status_toggle_only_yields_active_or_paused() {
        assert_eq!(
            toggle_target(MonitoringStatus::Active).map(|p| p.status),
            Some(MonitoringStatus::Paused)
        );
        assert_eq!(
            toggle_target(MonitoringStatus::Paused).map(|p| p.status),
            Some(MonitoringStatus::Active)
        );
        assert_eq!(toggle_target(MonitoringStatus::Completed), None);
        assert_eq!(toggle_target(MonitoringStatus::Error), None);
        assert_eq!(toggle_target(MonitoringStatus::NotConfigured), None);
    }

    #[test]
    fn progress_fraction_guards_division_by_zero() {
        assert_eq!(progress_fraction(3, 10), 0.3);
        assert_eq!(progress_fraction(0, 0), 0.0);
        assert_eq!(progress_fraction(5, 0), 0.0);
        assert_eq!(progress_fraction(10, 10), 1.0);
    }
}
