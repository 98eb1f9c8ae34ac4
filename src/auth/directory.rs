use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::utils::{ensure_dir, write_atomic};
use crate::errors::StoreError;

use super::{AuthError, IdentityProvider};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccountRecord {
    id: Uuid,
    password: String,
}

/// JSON-file backed account directory standing in for the hosted identity
/// service: one file mapping email addresses to account records.
pub struct AccountDirectory {
    path: PathBuf,
}

impl AccountDirectory {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_accounts(&self) -> Result<BTreeMap<String, AccountRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn write_accounts(&self, accounts: &BTreeMap<String, AccountRecord>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(accounts)?;
        write_atomic(&self.path, &json)
    }
}

impl IdentityProvider for AccountDirectory {
    fn lookup_account(&self, email: &str) -> Result<Uuid, AuthError> {
        let accounts = self.read_accounts()?;
        accounts
            .get(email)
            .map(|record| record.id)
            .ok_or_else(|| AuthError::Provider(format!("no account for `{email}`")))
    }

    fn create_account(&mut self, email: &str, password: &str) -> Result<Uuid, AuthError> {
        let mut accounts = self.read_accounts()?;
        if accounts.contains_key(email) {
            return Err(AuthError::DuplicateAccount(email.to_string()));
        }
        let id = Uuid::new_v4();
        accounts.insert(
            email.to_string(),
            AccountRecord {
                id,
                password: password.to_string(),
            },
        );
        self.write_accounts(&accounts)?;
        Ok(id)
    }
}
