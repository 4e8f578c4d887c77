use crate::{
    error,
    jamendo::Jamendo,
    management::TokenManager,
    success, utils,
};

/// Write actions available to a logged-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Fan,
    Favorite,
    Like,
    Dislike,
    MyAlbum,
}

impl UserAction {
    fn describe(&self) -> &'static str {
        match self {
            UserAction::Fan => "Became a fan of",
            UserAction::Favorite => "Added to favorites",
            UserAction::Like => "Liked",
            UserAction::Dislike => "Disliked",
            UserAction::MyAlbum => "Added to your albums",
        }
    }
}

pub async fn user_action(jamendo: &Jamendo, action: UserAction, ids: Vec<String>) {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run jamendo auth\n Error: {}",
                e
            );
        }
    };

    let token = match token_mgr.get_valid_token(jamendo).await {
        Ok(t) => t,
        Err(e) => error!("Cannot refresh token. Please run jamendo auth\n Error: {}", e),
    };

    let pb = utils::spinner("Sending...");
    let result = match action {
        UserAction::Fan => jamendo.set_fan(&token, &ids).await,
        UserAction::Favorite => jamendo.set_favorite(&token, &ids).await,
        UserAction::Like => jamendo.set_like(&token, &ids).await,
        UserAction::Dislike => jamendo.set_dislike(&token, &ids).await,
        UserAction::MyAlbum => jamendo.set_myalbum(&token, &ids).await,
    };
    pb.finish_and_clear();

    match result {
        Ok(_) => success!("{} {}", action.describe(), ids.join(", ")),
        Err(e) => error!("Request failed: {}", e),
    }
}
