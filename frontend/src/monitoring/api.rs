use serde::Serialize;

use super::models::{
    Monitoring, MonitoringConfigUpdate, MonitoringCreate, MonitoringDetails,
    MonitoringStatusUpdate, PlaylistCandidate,
};
use crate::api::{ApiClient, ApiError};
use crate::models::VideoCandidate;

pub async fn list_monitorings(client: &ApiClient) -> Result<Vec<Monitoring>, ApiError> {
    client.get_json("/monitoring").await
}

pub async fn get_monitoring(client: &ApiClient, id: i64) -> Result<MonitoringDetails, ApiError> {
    client.get_json(&format!("/monitoring/{}", id)).await
}

pub async fn create_monitoring(
    client: &ApiClient,
    request: &MonitoringCreate,
) -> Result<(), ApiError> {
    client.post_json_unit("/monitoring", request).await
}

pub async fn update_monitoring(
    client: &ApiClient,
    id: i64,
    update: &MonitoringConfigUpdate,
) -> Result<MonitoringDetails, ApiError> {
    client.put_json(&format!("/monitoring/{}", id), update).await
}

pub async fn update_monitoring_status(
    client: &ApiClient,
    id: i64,
    update: &MonitoringStatusUpdate,
) -> Result<MonitoringDetails, ApiError> {
    client.put_json(&format!("/monitoring/{}", id), update).await
}

pub async fn delete_monitoring(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/monitoring/{}", id)).await
}

pub async fn get_channel_videos(
    client: &ApiClient,
    channel_id: i64,
) -> Result<Vec<VideoCandidate>, ApiError> {
    client
        .get_json(&format!(
            "/youtube/channels/{}/videos?limit=12&sort=-published_at",
            channel_id
        ))
        .await
}

pub async fn get_channel_playlists(
    client: &ApiClient,
    channel_id: i64,
) -> Result<Vec<PlaylistCandidate>, ApiError> {
    client
        .get_json(&format!("/youtube/channels/{}/playlists", channel_id))
        .await
}

#[derive(Debug, Serialize)]
struct ValidateVideoRequest {
    video_url: String,
}

/// Asks the backend whether `url` points at a video of this channel.
/// The response is the candidate to add; any failure means the selection
/// must stay untouched.
pub async fn validate_video_url(
    client: &ApiClient,
    channel_id: i64,
    url: &str,
) -> Result<VideoCandidate, ApiError> {
    client
        .post_json(
            &format!("/youtube/channels/{}/validate-video", channel_id),
            &ValidateVideoRequest {
                video_url: url.to_string(),
            },
        )
        .await
}
