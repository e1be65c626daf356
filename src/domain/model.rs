use crate::utils::error::Result;
use crate::utils::format::greet;
use crate::utils::validation::{validate_address_field, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROLE: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub address: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default = "default_roles")]
    pub roles: Vec<String>,
}

fn default_active() -> bool {
    true
}

fn default_roles() -> Vec<String> {
    vec![DEFAULT_ROLE.to_string()]
}

impl Record {
    pub fn new(id: i64, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            active: default_active(),
            roles: default_roles(),
        }
    }

    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn greeting(&self) -> String {
        greet(&self.name, None)
    }
}

impl Validate for Record {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("record.name", &self.name)?;
        validate_address_field("record.address", &self.address)?;
        Ok(())
    }
}
