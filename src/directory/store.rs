//! Directory lookups
//!
//! The record list is private and only ever handed out by shared reference,
//! so a built directory cannot change for the rest of the process.

use log::debug;
use std::collections::HashSet;

use crate::config::AppConfig;
use crate::directory::UserRecord;
use crate::error::{AppError, DirectoryError};

#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<UserRecord>,
}

impl UserDirectory {
    /// Builds a directory, rejecting zero ids and duplicate ids or usernames.
    ///
    /// Username uniqueness is case-insensitive.
    pub fn new(users: Vec<UserRecord>) -> Result<Self, DirectoryError> {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();

        for user in &users {
            if user.id == 0 {
                return Err(DirectoryError::ZeroId(user.username.clone()));
            }
            if !ids.insert(user.id) {
                return Err(DirectoryError::DuplicateId(user.id));
            }
            if !names.insert(user.username.to_lowercase()) {
                return Err(DirectoryError::DuplicateUsername(user.username.clone()));
            }
        }

        debug!("User directory loaded with {} accounts", users.len());
        Ok(Self { users })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, DirectoryError> {
        Self::new(config.users.clone())
    }

    /// Directory built from the seed compiled into the binary
    pub fn bundled() -> Result<Self, AppError> {
        let config = AppConfig::bundled()?;
        Ok(Self::from_config(&config)?)
    }

    /// All accounts in load order
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// First account whose username matches `name` ignoring case
    pub fn find_user_by_username(&self, name: &str) -> Option<&UserRecord> {
        let wanted = name.to_lowercase();
        self.users
            .iter()
            .find(|user| user.username.to_lowercase() == wanted)
    }

    pub fn username_exists(&self, name: &str) -> bool {
        self.find_user_by_username(name).is_some()
    }

    pub fn get_user_by_id(&self, id: u32) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
