//! User repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;
use uuid::Uuid;

use userhub_core::error::AppError;
use userhub_core::result::AppResult;
use userhub_core::types::pagination::{PageRequest, PageResponse};
use userhub_entity::{NewUser, User, UserPatch};

use crate::filter::UserFilter;

/// Storage operations for user records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Find a user by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by exact login.
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>>;

    /// List users matching `filter`, ordered by login.
    async fn find_all(&self, filter: &UserFilter, page: &PageRequest)
    -> AppResult<PageResponse<User>>;

    /// Insert a new user. Fails with a conflict if the login is taken.
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Merge `patch` into the stored user. Returns `None` if the id is unknown.
    async fn update(&self, id: Uuid, patch: UserPatch) -> AppResult<Option<User>>;

    /// Delete a user. Returns `true` if a record was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Concurrent in-memory user store.
///
/// A secondary login index keeps logins unique.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: DashMap<Uuid, User>,
    logins: DashMap<String, Uuid>,
}

impl MemoryUserRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` if the store holds no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        let id = self.logins.get(login).map(|id| *id);
        Ok(id.and_then(|id| self.users.get(&id).map(|u| u.clone())))
    }

    async fn find_all(
        &self,
        filter: &UserFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<User>> {
        let mut matched: Vec<User> = self
            .users
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        matched.sort_by(|a, b| a.login.cmp(&b.login));

        let total = matched.len() as u64;
        let items = matched
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();

        Ok(PageResponse::new(items, page, total))
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let user = user.into_user();

        match self.logins.entry(user.login.clone()) {
            Entry::Occupied(_) => return Err(AppError::conflict("Login is already taken")),
            Entry::Vacant(slot) => {
                slot.insert(user.id);
            }
        }
        self.users.insert(user.id, user.clone());

        debug!(user_id = %user.id, login = %user.login, "User stored");
        Ok(user)
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> AppResult<Option<User>> {
        let Some(mut user) = self.users.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(new_login) = patch.login.as_ref().filter(|l| **l != user.login) {
            match self.logins.entry(new_login.clone()) {
                Entry::Occupied(_) => return Err(AppError::conflict("Login is already taken")),
                Entry::Vacant(slot) => {
                    slot.insert(id);
                }
            }
            self.logins.remove(&user.login);
        }

        patch.apply(&mut user);
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let Some((_, user)) = self.users.remove(&id) else {
            return Ok(false);
        };
        self.logins.remove(&user.login);

        debug!(user_id = %id, login = %user.login, "User removed");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userhub_core::error::ErrorKind;

    fn new_user(login: &str) -> NewUser {
        NewUser {
            name: format!("{login} name"),
            login: login.to_string(),
            email: Some(format!("{login}@example.com")),
            password_hash: "hash".to_string(),
            permissions: "READ_USER".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MemoryUserRepository::new();
        let user = repo.create(new_user("ana")).await.unwrap();

        assert_eq!(repo.find_by_id(user.id).await.unwrap(), Some(user.clone()));
        assert_eq!(repo.find_by_login("ana").await.unwrap(), Some(user));
        assert_eq!(repo.find_by_login("ANA").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_login_conflicts() {
        let repo = MemoryUserRepository::new();
        repo.create(new_user("ana")).await.unwrap();

        let err = repo.create(new_user("ana")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_update_moves_login_index() {
        let repo = MemoryUserRepository::new();
        let user = repo.create(new_user("ana")).await.unwrap();

        let patch = UserPatch {
            login: Some("ana.maria".into()),
            ..Default::default()
        };
        let updated = repo.update(user.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.login, "ana.maria");
        assert_eq!(updated.name, "ana name");
        assert!(repo.find_by_login("ana").await.unwrap().is_none());
        assert!(repo.find_by_login("ana.maria").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_update_to_taken_login_conflicts() {
        let repo = MemoryUserRepository::new();
        let ana = repo.create(new_user("ana")).await.unwrap();
        repo.create(new_user("bob")).await.unwrap();

        let patch = UserPatch {
            login: Some("bob".into()),
            ..Default::default()
        };
        let err = repo.update(ana.id, patch).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(repo.find_by_id(ana.id).await.unwrap().unwrap().login, "ana");
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = MemoryUserRepository::new();
        let result = repo
            .update(Uuid::new_v4(), UserPatch::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_frees_login() {
        let repo = MemoryUserRepository::new();
        let user = repo.create(new_user("ana")).await.unwrap();

        assert!(repo.delete(user.id).await.unwrap());
        assert!(!repo.delete(user.id).await.unwrap());
        assert!(repo.create(new_user("ana")).await.is_ok());
    }

    #[tokio::test]
    async fn test_find_all_filters_and_paginates() {
        let repo = MemoryUserRepository::new();
        for login in ["carla", "ana", "bruno", "anabel"] {
            repo.create(new_user(login)).await.unwrap();
        }

        let filter = UserFilter {
            login: Some("ana".into()),
            ..Default::default()
        };
        let page = repo
            .find_all(&filter, &PageRequest::new(0, 10))
            .await
            .unwrap();
        let logins: Vec<_> = page.items.iter().map(|u| u.login.as_str()).collect();
        assert_eq!(logins, ["ana", "anabel"]);

        let second = repo
            .find_all(&UserFilter::default(), &PageRequest::new(1, 3))
            .await
            .unwrap();
        assert_eq!(second.total_items, 4);
        assert_eq!(second.total_pages, 2);
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].login, "carla");
    }
}
