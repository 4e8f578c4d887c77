use std::sync::Arc;

use chrono::NaiveDate;
use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use jamendo::{
    ParamValue,
    cli::{self, Resource, UserAction},
    config, error,
    types::OAuthState,
    utils,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Log requests and retries
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Jamendo (OAuth)
    Auth,

    /// List albums
    Albums(QueryOptions),

    /// List artists
    Artists(QueryOptions),

    /// List tracks
    Tracks(QueryOptions),

    /// List playlists
    Playlists(QueryOptions),

    /// List users
    Users(QueryOptions),

    /// List radios
    Radios(QueryOptions),

    /// List feeds
    Feeds(QueryOptions),

    /// List reviews
    Reviews(QueryOptions),

    /// Autocomplete artist, album, track or tag names
    Autocomplete(QueryOptions),

    #[clap(about = "GET any API path and print the raw results")]
    Query(RawQueryOptions),

    /// Become a fan of artists
    Fan(IdsOption),

    /// Add tracks to your favorites
    Favorite(IdsOption),

    /// Like tracks
    Like(IdsOption),

    /// Dislike tracks
    Dislike(IdsOption),

    /// Add albums to your collection
    Myalbum(IdsOption),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct QueryOptions {
    /// Request parameter as key=value; comma separated values become a list
    #[clap(
        long = "param",
        short = 'p',
        value_parser = utils::parse_param,
        action = ArgAction::Append,
        num_args = 1
    )]
    pub params: Vec<(String, ParamValue)>,

    /// Only items dated within FROM..TO (YYYY-MM-DD..YYYY-MM-DD)
    #[clap(long, value_parser = utils::parse_date_range)]
    pub between: Option<(NaiveDate, NaiveDate)>,

    /// Print raw JSON results instead of a table
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct RawQueryOptions {
    /// API path, e.g. artists/musicinfo
    pub path: String,

    #[clap(
        long = "param",
        short = 'p',
        value_parser = utils::parse_param,
        action = ArgAction::Append,
        num_args = 1
    )]
    pub params: Vec<(String, ParamValue)>,
}

#[derive(Parser, Debug, Clone)]
pub struct IdsOption {
    #[clap(required = true, num_args = 1..)]
    ids: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("jamendo=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let jamendo = match config::client() {
        Ok(c) => c,
        Err(e) => error!("Cannot create Jamendo client. Err: {}", e),
    };

    match cli.command {
        Command::Auth => {
            let oauth_state: Arc<Mutex<Option<OAuthState>>> = Arc::new(Mutex::new(None));
            cli::auth(jamendo, Arc::clone(&oauth_state)).await;
        }
        Command::Query(opt) => {
            let params = utils::build_parameters(&opt.params, None);
            cli::query(&jamendo, &opt.path, params).await
        }
        Command::Fan(opt) => cli::user_action(&jamendo, UserAction::Fan, opt.ids).await,
        Command::Favorite(opt) => cli::user_action(&jamendo, UserAction::Favorite, opt.ids).await,
        Command::Like(opt) => cli::user_action(&jamendo, UserAction::Like, opt.ids).await,
        Command::Dislike(opt) => cli::user_action(&jamendo, UserAction::Dislike, opt.ids).await,
        Command::Myalbum(opt) => cli::user_action(&jamendo, UserAction::MyAlbum, opt.ids).await,
        Command::Completions(_) => {}
        command => {
            if let Some((resource, opt)) = catalog_command(command) {
                let params = utils::build_parameters(&opt.params, opt.between);
                cli::catalog(&jamendo, resource, params, opt.json).await
            }
        }
    }
}

fn catalog_command(command: Command) -> Option<(Resource, QueryOptions)> {
    match command {
        Command::Albums(opt) => Some((Resource::Albums, opt)),
        Command::Artists(opt) => Some((Resource::Artists, opt)),
        Command::Tracks(opt) => Some((Resource::Tracks, opt)),
        Command::Playlists(opt) => Some((Resource::Playlists, opt)),
        Command::Users(opt) => Some((Resource::Users, opt)),
        Command::Radios(opt) => Some((Resource::Radios, opt)),
        Command::Feeds(opt) => Some((Resource::Feeds, opt)),
        Command::Reviews(opt) => Some((Resource::Reviews, opt)),
        Command::Autocomplete(opt) => Some((Resource::Autocomplete, opt)),
        _ => None,
    }
}
