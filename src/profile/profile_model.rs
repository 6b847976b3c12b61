use serde::{Deserialize, Serialize};

use crate::error::AutofillError;

/// Candidate profile, the single source of fill values. Every section and
/// field is optional in the serialized form; missing data simply means the
/// matching fields are skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub personal: PersonalInfo,
    #[serde(default)]
    pub links: ProfileLinks,
    #[serde(default)]
    pub work_history: Vec<WorkExperience>,
    /// Not projected onto any field type; carried for host round-trips.
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub preferences: JobPreferences,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileLinks {
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub portfolio: String,
}

/// One employment entry. Dates are "YYYY-MM-DD", "YYYY-MM" or "YYYY"; an
/// empty end date (or the current flag) marks an ongoing job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkExperience {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPreferences {
    #[serde(default)]
    pub salary_min: Option<u64>,
    #[serde(default)]
    pub salary_max: Option<u64>,
    /// Prefix symbol for salary formatting ("$", "€", ...).
    #[serde(default)]
    pub salary_currency: String,
}

impl Profile {
    pub fn from_json_str(json: &str) -> Result<Self, AutofillError> {
        serde_json::from_str(json).map_err(|e| AutofillError::ProfileParse {
            context: "json profile".to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, AutofillError> {
        serde_yaml::from_str(yaml).map_err(|e| AutofillError::ProfileParse {
            context: "yaml profile".to_string(),
            message: e.to_string(),
        })
    }
}
