use std::sync::Arc;

use crate::application::address::address_service::AddressService;
use crate::application::comment::comment_service::CommentService;
use crate::application::feed::{AddressFeed, CommentFeed};
use crate::application::profile::profile_service::ProfileService;
use crate::core::configure::AppConfig;
use crate::core::error::AppResult;
use crate::domain::address::address_repository_interface::AddressRepositoryInterface;
use crate::domain::comment::comment_repository_interface::CommentRepositoryInterface;
use crate::domain::user::user_repository_interface::ProfileRepositoryInterface;
use crate::infrastructure::model::address_repository::AddressRepository;
use crate::infrastructure::model::comment_repository::CommentRepository;
use crate::infrastructure::model::profile_repository::ProfileRepository;
use crate::infrastructure::store::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn DocumentStore>,
    pub address_repository: Arc<AddressRepository>,
    pub comment_repository: Arc<CommentRepository>,
    pub profile_repository: Arc<ProfileRepository>,
    pub address_service: Arc<AddressService>,
    pub comment_service: Arc<CommentService>,
    pub profile_service: Arc<ProfileService>,
}

impl AppState {
    /// Wires repositories and services over one backend adapter. The mobile
    /// shell passes the real provider; tests and the sandbox pass a
    /// `MemoryStore`.
    pub fn new(config: AppConfig, store: Arc<dyn DocumentStore>) -> AppResult<Self> {
        let config = Arc::new(config);

        let address_repository = Arc::new(AddressRepository::new(store.clone()));
        let comment_repository = Arc::new(CommentRepository::new(store.clone()));
        let profile_repository = Arc::new(ProfileRepository::new(store.clone()));

        let address_service = Arc::new(AddressService::new(
            address_repository.clone() as Arc<dyn AddressRepositoryInterface>,
            comment_repository.clone() as Arc<dyn CommentRepositoryInterface>,
        ));
        let comment_service = Arc::new(CommentService::new(
            comment_repository.clone() as Arc<dyn CommentRepositoryInterface>,
            address_repository.clone() as Arc<dyn AddressRepositoryInterface>,
        ));
        let profile_service = Arc::new(ProfileService::new(
            profile_repository.clone() as Arc<dyn ProfileRepositoryInterface>,
            address_repository.clone() as Arc<dyn AddressRepositoryInterface>,
            comment_repository.clone() as Arc<dyn CommentRepositoryInterface>,
        ));

        Ok(Self {
            config,
            store,
            address_repository,
            comment_repository,
            profile_repository,
            address_service,
            comment_service,
            profile_service,
        })
    }

    /// Fresh feed instance for a map/list surface becoming active.
    pub fn address_feed(&self) -> AddressFeed {
        AddressFeed::new(self.address_repository.clone() as Arc<dyn AddressRepositoryInterface>)
    }

    /// Fresh feed instance for one address detail surface.
    pub fn comment_feed(&self) -> CommentFeed {
        CommentFeed::new(self.comment_repository.clone() as Arc<dyn CommentRepositoryInterface>)
    }
}
