use serde::de::DeserializeOwned;
use tabled::{Table, Tabled};

use crate::{
    Res,
    jamendo::{Jamendo, Parameters},
    types::{
        Album, AlbumTableRow, ApiResponse, Artist, ArtistTableRow, Playlist, PlaylistTableRow,
        Track, TrackTableRow, User, UserTableRow,
    },
    utils, warning,
};

/// Catalog collections reachable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Albums,
    Artists,
    Tracks,
    Playlists,
    Users,
    Radios,
    Feeds,
    Reviews,
    Autocomplete,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Albums => "/albums",
            Resource::Artists => "/artists",
            Resource::Tracks => "/tracks",
            Resource::Playlists => "/playlists",
            Resource::Users => "/users",
            Resource::Radios => "/radios",
            Resource::Feeds => "/feeds",
            Resource::Reviews => "/reviews",
            Resource::Autocomplete => "/autocomplete",
        }
    }
}

/// Fetches a catalog collection and prints it as a table, or as JSON when
/// asked to or when there is no table layout for it.
pub async fn catalog(jamendo: &Jamendo, resource: Resource, params: Parameters, json: bool) {
    let pb = utils::spinner(&format!("Fetching {}...", resource.path()));
    let result = jamendo.request(resource.path(), params).await;
    pb.finish_and_clear();

    let response = match result {
        Ok(r) => r,
        Err(e) => crate::error!("Request failed: {}", e),
    };

    if json {
        print_json(&response);
        return;
    }

    let printed = match resource {
        Resource::Albums => print_table::<Album, AlbumTableRow>(&response),
        Resource::Artists => print_table::<Artist, ArtistTableRow>(&response),
        Resource::Tracks => print_table::<Track, TrackTableRow>(&response),
        Resource::Playlists => print_table::<Playlist, PlaylistTableRow>(&response),
        Resource::Users => print_table::<User, UserTableRow>(&response),
        _ => Err("no table layout".into()),
    };

    if printed.is_err() {
        print_json(&response);
    }

    if !response.headers.warnings.is_empty() {
        warning!("{}", response.headers.warnings);
    }
}

/// Sends a GET to an arbitrary API path and prints the raw envelope.
pub async fn query(jamendo: &Jamendo, path: &str, params: Parameters) {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    let pb = utils::spinner(&format!("Fetching {path}..."));
    let result = jamendo.request(&path, params).await;
    pb.finish_and_clear();

    match result {
        Ok(response) => print_json(&response),
        Err(e) => crate::error!("Request failed: {}", e),
    }
}

fn print_table<T, R>(response: &ApiResponse) -> Res<()>
where
    T: DeserializeOwned,
    R: Tabled + From<T>,
{
    let rows: Vec<R> = response
        .results_as::<T>()?
        .into_iter()
        .map(R::from)
        .collect();

    println!("{}", Table::new(rows));
    Ok(())
}

fn print_json(response: &ApiResponse) {
    match serde_json::to_string_pretty(&response.results) {
        Ok(s) => println!("{s}"),
        Err(e) => warning!("Cannot render response: {}", e),
    }
}
