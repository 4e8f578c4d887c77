//! Write requests acting on behalf of an authorized user.

use crate::{
    error::{JamendoError, Result},
    jamendo::{client::Jamendo, params::Parameters},
    types::ApiResponse,
};

impl Jamendo {
    /// POSTs `params` to a write endpoint using the user's access token.
    pub async fn write(
        &self,
        path: &str,
        access_token: &str,
        mut params: Parameters,
    ) -> Result<ApiResponse> {
        if access_token.trim().is_empty() {
            return Err(JamendoError::MissingAccessToken);
        }
        params.set("access_token", access_token);
        self.post(path, params).await
    }

    /// Become a fan of one or more artists.
    pub async fn set_fan<T: ToString>(
        &self,
        access_token: &str,
        artist_ids: &[T],
    ) -> Result<ApiResponse> {
        self.write_ids("/setuser/fan", access_token, "artist_id", artist_ids)
            .await
    }

    pub async fn set_favorite<T: ToString>(
        &self,
        access_token: &str,
        track_ids: &[T],
    ) -> Result<ApiResponse> {
        self.write_ids("/setuser/favorite", access_token, "track_id", track_ids)
            .await
    }

    pub async fn set_like<T: ToString>(
        &self,
        access_token: &str,
        track_ids: &[T],
    ) -> Result<ApiResponse> {
        self.write_ids("/setuser/like", access_token, "track_id", track_ids)
            .await
    }

    pub async fn set_dislike<T: ToString>(
        &self,
        access_token: &str,
        track_ids: &[T],
    ) -> Result<ApiResponse> {
        self.write_ids("/setuser/dislike", access_token, "track_id", track_ids)
            .await
    }

    /// Add one or more albums to the user's collection.
    pub async fn set_myalbum<T: ToString>(
        &self,
        access_token: &str,
        album_ids: &[T],
    ) -> Result<ApiResponse> {
        self.write_ids("/setuser/myalbum", access_token, "album_id", album_ids)
            .await
    }

    async fn write_ids<T: ToString>(
        &self,
        path: &str,
        access_token: &str,
        key: &str,
        ids: &[T],
    ) -> Result<ApiResponse> {
        if ids.iter().all(|id| id.to_string().trim().is_empty()) {
            return Err(JamendoError::invalid_parameter(key, "at least one id is required"));
        }
        self.write(path, access_token, Parameters::new().with(key, ids))
            .await
    }
}
