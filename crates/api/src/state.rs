use std::sync::Arc;

use pledger_config::Settings;
use pledger_services::{
    AuthService, StatsService,
    dao::{
        challenge::ChallengeDao, charity::CharityDao, invitation::InvitationDao, user::UserDao,
    },
};
use pledger_store::JsonStore;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub store: Arc<JsonStore>,
    pub auth: Arc<AuthService>,
    pub users: Arc<UserDao>,
    pub challenges: Arc<ChallengeDao>,
    pub invitations: Arc<InvitationDao>,
    pub charities: Arc<CharityDao>,
    pub stats: Arc<StatsService>,
}

impl AppState {
    pub fn new(store: Arc<JsonStore>, settings: Settings) -> Self {
        Self {
            auth: Arc::new(AuthService::new()),
            users: Arc::new(UserDao::new(store.clone())),
            challenges: Arc::new(ChallengeDao::new(store.clone())),
            invitations: Arc::new(InvitationDao::new(store.clone())),
            charities: Arc::new(CharityDao::new(store.clone())),
            stats: Arc::new(StatsService::new(store.clone())),
            store,
            settings,
        }
    }
}
