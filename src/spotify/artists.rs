use crate::{
    Res,
    spotify::SpotifyClient,
    types::{Artist, SearchArtistsResponse, TopTracksResponse, Track},
};

/// Searches the Spotify artist index for `query`.
///
/// Uses `GET /search?q={query}&type=artist`. The query is URL-encoded by
/// reqwest. Only the first page of results is read; candidates keep the
/// order the service returns them in.
///
/// # Errors
///
/// Transport failures, non-success status codes and undecodable bodies are
/// logged and returned.
///
/// # Example
///
/// ```
/// let candidates = search_artists(&client, "The Interrupters").await?;
/// for artist in candidates {
///     println!("{} {:?}", artist.name, artist.genres);
/// }
/// ```
pub async fn search_artists(client: &SpotifyClient, query: &str) -> Res<Vec<Artist>> {
    let api_url = client.url("/search");
    let request = client
        .get(&api_url)
        .query(&[("q", query), ("type", "artist")]);

    let res = client.send_json::<SearchArtistsResponse>(request).await?;
    Ok(res.artists.items)
}

/// Retrieves the top tracks of an artist for the client's market.
///
/// Uses `GET /artists/{id}/top-tracks?market={market}`. A response without a
/// `tracks` field yields an empty list. Only id, name and uri are kept for
/// each track.
pub async fn get_top_tracks(client: &SpotifyClient, artist_id: &str) -> Res<Vec<Track>> {
    let api_url = client.url(&format!("/artists/{id}/top-tracks", id = artist_id));
    let request = client
        .get(&api_url)
        .query(&[("market", client.market())]);

    let res = client.send_json::<TopTracksResponse>(request).await?;
    Ok(res.tracks)
}
