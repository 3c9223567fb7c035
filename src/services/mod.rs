//! Business logic services

pub mod accounts;
pub mod books;
pub mod masters;

use crate::{config::MessagesConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BookService,
    pub accounts: accounts::AccountService,
    pub masters: masters::MasterService,
    pub repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, messages: MessagesConfig) -> Self {
        Self {
            books: books::BookService::new(repository.clone(), messages),
            accounts: accounts::AccountService::new(repository.clone()),
            masters: masters::MasterService::new(repository.clone()),
            repository,
        }
    }
}
