use chrono::{Datelike, NaiveDate};

use crate::fields::field_model::FieldType;
use crate::profile::profile_model::{JobPreferences, Profile, WorkExperience};

/// Resolve the profile value for a classified field type. Returns "" when
/// the profile has nothing to offer; callers treat that as a skip, never an
/// error. `today` is injected so experience math stays deterministic.
pub fn field_value(field_type: FieldType, profile: &Profile, today: NaiveDate) -> String {
    match field_type {
        FieldType::FirstName => profile.personal.first_name.clone(),
        FieldType::LastName => profile.personal.last_name.clone(),
        FieldType::FullName => full_name(profile),
        FieldType::Email => profile.personal.email.clone(),
        FieldType::Phone => profile.personal.phone.clone(),
        FieldType::Linkedin => profile.links.linkedin.clone(),
        FieldType::Github => profile.links.github.clone(),
        FieldType::Portfolio => profile.links.portfolio.clone(),
        FieldType::Address => profile.personal.address.clone(),
        FieldType::City => profile.personal.city.clone(),
        FieldType::State => profile.personal.state.clone(),
        FieldType::PostalCode => profile.personal.postal_code.clone(),
        FieldType::Country => profile.personal.country.clone(),
        FieldType::CurrentCompany => most_recent_job(profile)
            .map(|job| job.company.clone())
            .unwrap_or_default(),
        FieldType::CurrentTitle => most_recent_job(profile)
            .map(|job| job.title.clone())
            .unwrap_or_default(),
        FieldType::YearsExperience => years_of_experience(profile, today),
        FieldType::Salary => salary_range(&profile.preferences),
        // Uploads, demographics and free-form questions have no mappable value.
        FieldType::Resume
        | FieldType::CoverLetter
        | FieldType::Gender
        | FieldType::Ethnicity
        | FieldType::VeteranStatus
        | FieldType::Disability
        | FieldType::CustomQuestion
        | FieldType::Unknown => String::new(),
    }
}

/// First and last name joined; trims cleanly when either half is missing.
pub fn full_name(profile: &Profile) -> String {
    format!(
        "{} {}",
        profile.personal.first_name.trim(),
        profile.personal.last_name.trim()
    )
    .trim()
    .to_string()
}

/// Current job first, otherwise the entry with the latest start date. A long
/// tenure that ended late never outranks a role started more recently.
pub fn most_recent_job(profile: &Profile) -> Option<&WorkExperience> {
    profile
        .work_history
        .iter()
        .max_by_key(|job| (job.current, parse_date(&job.start_date).unwrap_or(NaiveDate::MIN)))
}

/// Whole months per entry summed, divided by 12 and rounded, as a string.
/// Open-ended entries run to `today`. "" when there is no work history.
pub fn years_of_experience(profile: &Profile, today: NaiveDate) -> String {
    if profile.work_history.is_empty() {
        return String::new();
    }
    let mut total_months = 0i32;
    for job in &profile.work_history {
        let Some(start) = parse_date(&job.start_date) else {
            continue;
        };
        let end = if job.current || job.end_date.trim().is_empty() {
            today
        } else {
            parse_date(&job.end_date).unwrap_or(today)
        };
        total_months += months_between(start, end).max(0);
    }
    let years = (f64::from(total_months) / 12.0).round() as i64;
    years.to_string()
}

fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

/// Formatted salary range; omits whichever bound is absent.
pub fn salary_range(preferences: &JobPreferences) -> String {
    let currency = preferences.salary_currency.trim();
    match (preferences.salary_min, preferences.salary_max) {
        (Some(min), Some(max)) => format!("{}{} - {}{}", currency, min, currency, max),
        (Some(min), None) => format!("{}{}", currency, min),
        (None, Some(max)) => format!("{}{}", currency, max),
        (None, None) => String::new(),
    }
}

/// Lenient profile date parsing: full date, year-month, or bare year.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    let mut parts = raw.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next().and_then(|m| m.parse().ok()).unwrap_or(1);
    NaiveDate::from_ymd_opt(year, month, 1)
}
