//! Read endpoints of the catalog. All of them are plain GET requests that
//! return the usual `{headers, results}` envelope.

use url::Url;

use crate::{
    error::Result,
    jamendo::{client::Jamendo, params::Parameters},
    types::ApiResponse,
};

impl Jamendo {
    pub async fn albums(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/albums", params).await
    }

    pub async fn album_tracks(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/albums/tracks", params).await
    }

    pub async fn album_musicinfo(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/albums/musicinfo", params).await
    }

    /// Download URL for an album archive; the endpoint redirects to the file.
    pub fn album_file_url(&self, params: &Parameters) -> Result<Url> {
        self.endpoint_url("/albums/file", params)
    }

    pub async fn artists(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/artists", params).await
    }

    pub async fn artist_albums(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/artists/albums", params).await
    }

    pub async fn artist_tracks(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/artists/tracks", params).await
    }

    pub async fn artist_locations(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/artists/locations", params).await
    }

    pub async fn artist_musicinfo(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/artists/musicinfo", params).await
    }

    pub async fn autocomplete(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/autocomplete", params).await
    }

    pub async fn feeds(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/feeds", params).await
    }

    pub async fn playlists(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/playlists", params).await
    }

    pub async fn playlist_tracks(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/playlists/tracks", params).await
    }

    pub async fn radios(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/radios", params).await
    }

    pub async fn radio_stream(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/radios/stream", params).await
    }

    pub async fn reviews(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/reviews", params).await
    }

    pub async fn review_albums(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/reviews/albums", params).await
    }

    pub async fn tracks(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/tracks", params).await
    }

    /// Audio URL for a track; the endpoint redirects to the stream.
    pub fn track_file_url(&self, params: &Parameters) -> Result<Url> {
        self.endpoint_url("/tracks/file", params)
    }

    pub async fn similar_tracks(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/tracks/similar", params).await
    }

    pub async fn users(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/users", params).await
    }

    pub async fn user_albums(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/users/albums", params).await
    }

    pub async fn user_artists(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/users/artists", params).await
    }

    pub async fn user_tracks(&self, params: Parameters) -> Result<ApiResponse> {
        self.request("/users/tracks", params).await
    }
}
