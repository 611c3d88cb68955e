//! Single Responsibility Principle: "...You had one job"
//!
//! A type should have only one reason to change. The user record keeps its
//! properties; persistence lives in a repository; a facade puts the two back
//! together for callers that want a single entry point.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::debug;

use crate::error::Result;

const CREATE_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL
)";

// =============================================================================
// Before: one type, two reasons to change
// =============================================================================

pub mod before {
    use super::*;

    /// Holds the username *and* knows how to store itself. A schema change
    /// forces an edit here even though nothing about users changed.
    #[derive(Debug, Clone, PartialEq)]
    pub struct User {
        username: String,
    }

    impl User {
        pub fn new(username: impl Into<String>) -> Self {
            User {
                username: username.into(),
            }
        }

        pub fn username(&self) -> &str {
            &self.username
        }

        pub fn save_to_database(&self, conn: &Connection) -> Result<UserId> {
            conn.execute(CREATE_USERS, [])?;
            conn.execute(
                "INSERT INTO users (username) VALUES (?1)",
                params![self.username],
            )?;
            Ok(UserId(conn.last_insert_rowid()))
        }
    }
}

// =============================================================================
// After: properties and persistence split apart
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        User {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Storage for users. The only reason to change an implementation is a change
/// in how users are stored.
pub trait UserRepository {
    fn save(&mut self, user: &User) -> Result<UserId>;
    fn get(&self, id: UserId) -> Result<Option<User>>;
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn save(&mut self, user: &User) -> Result<UserId> {
        self.users.push(user.clone());
        let id = UserId(self.users.len() as i64);
        debug!(%id, username = user.username(), "saved user in memory");
        Ok(id)
    }

    fn get(&self, id: UserId) -> Result<Option<User>> {
        let found = usize::try_from(id.0)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| self.users.get(index))
            .cloned();
        Ok(found)
    }
}

pub struct SqliteUserRepository {
    conn: Connection,
}

impl SqliteUserRepository {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "opened user database");
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute(CREATE_USERS, [])?;
        Ok(SqliteUserRepository { conn })
    }
}

impl UserRepository for SqliteUserRepository {
    fn save(&mut self, user: &User) -> Result<UserId> {
        self.conn.execute(
            "INSERT INTO users (username) VALUES (?1)",
            params![user.username()],
        )?;
        let id = UserId(self.conn.last_insert_rowid());
        debug!(%id, username = user.username(), "saved user to sqlite");
        Ok(id)
    }

    fn get(&self, id: UserId) -> Result<Option<User>> {
        let username: Option<String> = self
            .conn
            .query_row(
                "SELECT username FROM users WHERE id = ?1",
                params![id.0],
                |row| row.get(0),
            )
            .optional()?;
        Ok(username.map(User::new))
    }
}

// =============================================================================
// Facade: one type for clients, two responsibilities inside
// =============================================================================

pub struct UserService<R: UserRepository> {
    user: User,
    repository: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(username: impl Into<String>, repository: R) -> Self {
        UserService {
            user: User::new(username),
            repository,
        }
    }

    pub fn username(&self) -> &str {
        self.user.username()
    }

    pub fn save(&mut self) -> Result<UserId> {
        self.repository.save(&self.user)
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_user_only_holds_properties() {
        let user = User::new("alice");
        assert_eq!(user.username(), "alice");
    }

    #[test]
    fn test_in_memory_ids_are_sequential() {
        let mut repo = InMemoryUserRepository::new();
        assert_eq!(repo.save(&User::new("alice")).unwrap(), UserId(1));
        assert_eq!(repo.save(&User::new("bob")).unwrap(), UserId(2));
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.get(UserId(2)).unwrap(), Some(User::new("bob")));
    }

    #[test]
    fn test_unknown_id_is_none() {
        let repo = InMemoryUserRepository::new();
        assert_eq!(repo.get(UserId(0)).unwrap(), None);
        assert_eq!(repo.get(UserId(-3)).unwrap(), None);
        assert_eq!(repo.get(UserId(7)).unwrap(), None);

        let sqlite = SqliteUserRepository::open_in_memory().unwrap();
        assert_eq!(sqlite.get(UserId(1)).unwrap(), None);
    }

    #[test]
    fn test_sqlite_repository_on_disk() {
        let db = NamedTempFile::new().unwrap();
        let id = {
            let mut repo = SqliteUserRepository::open(db.path()).unwrap();
            repo.save(&User::new("carol")).unwrap()
        };

        let repo = SqliteUserRepository::open(db.path()).unwrap();
        assert_eq!(repo.get(id).unwrap(), Some(User::new("carol")));
    }

    #[test]
    fn test_facade_saves_through_repository() {
        let mut service = UserService::new("dave", InMemoryUserRepository::new());
        assert_eq!(service.username(), "dave");

        let id = service.save().unwrap();
        assert_eq!(
            service.repository().get(id).unwrap(),
            Some(User::new("dave"))
        );
    }

    #[test]
    fn test_facade_works_with_any_repository() {
        let repository = SqliteUserRepository::open_in_memory().unwrap();
        let mut service = UserService::new("erin", repository);
        let id = service.save().unwrap();
        assert_eq!(
            service.repository().get(id).unwrap().map(|u| u.username().to_string()),
            Some("erin".to_string())
        );
    }

    #[test]
    fn test_before_user_saves_itself() {
        let conn = Connection::open_in_memory().unwrap();
        let user = before::User::new("frank");
        let id = user.save_to_database(&conn).unwrap();

        let stored: String = conn
            .query_row("SELECT username FROM users WHERE id = ?1", [id.0], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(stored, user.username());
    }

    proptest! {
        #[test]
        fn prop_repositories_return_what_was_saved(name in "\\PC{0,24}") {
            let user = User::new(name);

            let mut memory = InMemoryUserRepository::new();
            let id = memory.save(&user).unwrap();
            prop_assert_eq!(memory.get(id).unwrap(), Some(user.clone()));

            let mut sqlite = SqliteUserRepository::open_in_memory().unwrap();
            let id = sqlite.save(&user).unwrap();
            prop_assert_eq!(sqlite.get(id).unwrap(), Some(user));
        }
    }
}
