//! Command-line flags for one form submission.

use clap::Args;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Args)]
pub struct FormArgs {
    /// Full name (at least 2 characters)
    #[arg(long)]
    pub full_name: String,

    /// Username (at least 3 characters)
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub email: String,

    /// Department literal, e.g. IT, HR or Πωλήσεις
    #[arg(long)]
    pub department: String,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    /// Role literal (EMPLOYEE when omitted)
    #[arg(long)]
    pub role: Option<String>,

    /// Hire date as YYYY-MM-DD
    #[arg(long)]
    pub hire_date: Option<String>,
}

impl FormArgs {
    /// Candidate form as sent to `POST /profiles`. Omitted flags are left out
    /// so the service applies its own defaults.
    pub fn to_candidate(&self) -> Value {
        let mut form = Map::new();
        form.insert("full_name".into(), self.full_name.clone().into());
        form.insert("username".into(), self.username.clone().into());
        form.insert("email".into(), self.email.clone().into());
        form.insert("department".into(), self.department.clone().into());
        let optional = [
            ("phone", &self.phone),
            ("address", &self.address),
            ("role", &self.role),
            ("hire_date", &self.hire_date),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                form.insert(key.into(), value.clone().into());
            }
        }
        Value::Object(form)
    }
}
