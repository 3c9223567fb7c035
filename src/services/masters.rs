//! Category and format lookups

use crate::{
    error::AppResult,
    models::{Category, Format},
    repository::Repository,
};

#[derive(Clone)]
pub struct MasterService {
    repository: Repository,
}

impl MasterService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn find_all_categories(&self) -> AppResult<Vec<Category>> {
        self.repository.categories_list().await
    }

    pub async fn find_all_formats(&self) -> AppResult<Vec<Format>> {
        self.repository.formats_list().await
    }
}
