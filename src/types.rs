use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tabled::Tabled;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseHeaders {
    pub status: String,
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub error_message: String,
    #[serde(default)]
    pub warnings: String,
    #[serde(default)]
    pub results_count: u64,
    #[serde(default)]
    pub next: Option<String>,
}

impl ResponseHeaders {
    pub fn is_failed(&self) -> bool {
        self.status == "failed"
    }
}

/// The `{headers, results}` envelope returned by every read endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T = Value> {
    pub headers: ResponseHeaders,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl ApiResponse<Value> {
    /// Converts the untyped results into one of the typed views.
    pub fn results_as<T: DeserializeOwned>(&self) -> Result<Vec<T>, serde_json::Error> {
        self.results
            .iter()
            .cloned()
            .map(serde_json::from_value)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Raw body of a successful `/oauth/grant` call.
#[derive(Debug, Clone, Deserialize)]
pub struct GrantResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

fn default_expires_in() -> u64 {
    3600
}

impl GrantResponse {
    pub fn into_token(self, obtained_at: u64) -> Token {
        Token {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            token_type: self.token_type,
            scope: self.scope,
            expires_in: self.expires_in,
            obtained_at,
        }
    }
}

/// A pending authorization: the `state` sent to the authorize page and the
/// token once the callback has exchanged the code.
#[derive(Debug, Clone)]
pub struct OAuthState {
    pub state: String,
    pub redirect_uri: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub releasedate: String,
    pub artist_id: String,
    pub artist_name: String,
    pub image: String,
    pub zip: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub website: String,
    pub joindate: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub duration: u64,
    pub artist_id: String,
    pub artist_name: String,
    pub album_id: String,
    pub album_name: String,
    pub releasedate: String,
    pub audio: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub creationdate: String,
    pub user_id: String,
    pub user_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub dispname: String,
    pub lang: String,
    pub creationdate: String,
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub released: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub id: String,
    pub name: String,
    pub website: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub duration: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub created: String,
}

#[derive(Tabled)]
pub struct UserTableRow {
    pub id: String,
    pub name: String,
    pub display_name: String,
}

impl From<Album> for AlbumTableRow {
    fn from(a: Album) -> Self {
        AlbumTableRow {
            id: a.id,
            name: a.name,
            artist: a.artist_name,
            released: a.releasedate,
        }
    }
}

impl From<Artist> for ArtistTableRow {
    fn from(a: Artist) -> Self {
        ArtistTableRow {
            id: a.id,
            name: a.name,
            website: a.website,
        }
    }
}

impl From<Track> for TrackTableRow {
    fn from(t: Track) -> Self {
        TrackTableRow {
            id: t.id,
            name: t.name,
            artist: t.artist_name,
            album: t.album_name,
            duration: format!("{}:{:02}", t.duration / 60, t.duration % 60),
        }
    }
}

impl From<Playlist> for PlaylistTableRow {
    fn from(p: Playlist) -> Self {
        PlaylistTableRow {
            id: p.id,
            name: p.name,
            owner: p.user_name,
            created: p.creationdate,
        }
    }
}

impl From<User> for UserTableRow {
    fn from(u: User) -> Self {
        UserTableRow {
            id: u.id,
            name: u.name,
            display_name: u.dispname,
        }
    }
}
