use crate::{
    Res,
    spotify::SpotifyClient,
    types::{AddTrackToPlaylistRequest, AddTrackToPlaylistResponse},
};

/// Tracks are always inserted at the top of the playlist.
pub const INSERT_POSITION: u32 = 0;

/// Inserts track uris into a playlist.
///
/// Uses `POST /playlists/{playlist_id}/tracks` with the body
/// `{"uris": [...], "position": 0}`. The call is not idempotent: sending the
/// same uris twice inserts them twice, each time at position 0.
///
/// # Errors
///
/// Transport and status failures are logged and returned; nothing is retried.
///
/// # Example
///
/// ```
/// let uris = vec!["spotify:track:4uLU6hMCjMI75M1A2tKUQC".to_string()];
/// let snapshot = add_tracks(&client, "37i9dQZF1DXcBWIGoYBM5M", &uris).await?;
/// ```
pub async fn add_tracks(
    client: &SpotifyClient,
    playlist_id: &str,
    uris: &[String],
) -> Res<AddTrackToPlaylistResponse> {
    let api_url = client.url(&format!(
        "/playlists/{playlist_id}/tracks",
        playlist_id = playlist_id
    ));

    let body = AddTrackToPlaylistRequest {
        uris: uris.to_vec(),
        position: INSERT_POSITION,
    };

    client
        .send_json::<AddTrackToPlaylistResponse>(client.post(&api_url).json(&body))
        .await
}
