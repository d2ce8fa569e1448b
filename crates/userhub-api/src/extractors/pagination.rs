//! Query parameters for the user listing.

use serde::{Deserialize, Serialize};

use userhub_core::types::pagination::{DEFAULT_PAGE_SIZE, PageRequest};
use userhub_database::UserFilter;

/// Filter and paging parameters for `GET /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListParams {
    /// Login substring.
    pub login: Option<String>,
    /// Email substring.
    pub email: Option<String>,
    /// Name substring.
    pub name: Option<String>,
    /// Page number (0-based, default: 0).
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10, max: 100).
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl UserListParams {
    /// The filter part of the query.
    pub fn filter(&self) -> UserFilter {
        UserFilter {
            login: self.login.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }

    /// Converts to a clamped `PageRequest`.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}
