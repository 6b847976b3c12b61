use chrono::NaiveDate;

use form_autofill::dom::document::Document;
use form_autofill::dom::dom_model::{NodeId, UiNode};
use form_autofill::profile::profile_model::{
    JobPreferences, PersonalInfo, Profile, ProfileLinks, WorkExperience,
};

// ============================================================================
// Shared builders
// ============================================================================

/// Fixed reference date so experience math is deterministic.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
}

pub fn sample_profile() -> Profile {
    Profile {
        personal: PersonalInfo {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada.lovelace@example.com".into(),
            phone: "+1 555 0100".into(),
            address: "12 Analytical Way".into(),
            city: "London".into(),
            state: "Greater London".into(),
            postal_code: "SW1A 1AA".into(),
            country: "USA".into(),
        },
        links: ProfileLinks {
            linkedin: "https://linkedin.com/in/ada".into(),
            github: "https://github.com/ada".into(),
            portfolio: "https://ada.dev".into(),
        },
        work_history: vec![
            WorkExperience {
                company: "Acme Analytics".into(),
                title: "Senior Engineer".into(),
                start_date: "2022-07".into(),
                end_date: "".into(),
                current: true,
            },
            WorkExperience {
                company: "Babbage Works".into(),
                title: "Engineer".into(),
                start_date: "2020-03".into(),
                end_date: "2022-06".into(),
                current: false,
            },
        ],
        preferences: JobPreferences {
            salary_min: Some(90000),
            salary_max: Some(120000),
            salary_currency: "$".into(),
        },
        ..Default::default()
    }
}

/// `<label for>` plus input pair appended under `parent`. Returns the input.
pub fn labeled_input(
    doc: &mut Document,
    parent: NodeId,
    name: &str,
    label: &str,
    input_type: &str,
) -> NodeId {
    doc.push(
        parent,
        UiNode::new("label").with_attr("for", name).with_text(label),
    );
    doc.push(
        parent,
        UiNode::new("input")
            .with_attr("id", name)
            .with_attr("name", name)
            .with_attr("type", input_type),
    )
}

// ============================================================================
// Platform pages
// ============================================================================

/// Greenhouse board page with the classic `#application_form` container.
pub fn greenhouse_page() -> Document {
    let mut doc = Document::new(
        "https://boards.greenhouse.io/acme/jobs/4012",
        "Acme - Senior Rust Engineer",
    );
    let root = doc.root();

    doc.push(
        root,
        UiNode::new("h1")
            .with_attr("class", "app-title")
            .with_text("Senior Rust Engineer"),
    );
    doc.push(
        root,
        UiNode::new("div")
            .with_attr("class", "company-name")
            .with_text("Acme"),
    );
    doc.push(
        root,
        UiNode::new("div")
            .with_attr("class", "location")
            .with_text("Remote - EU"),
    );
    doc.push(
        root,
        UiNode::new("div")
            .with_attr("id", "content")
            .with_text("Acme builds analytical engines."),
    );

    let form = doc.push(
        root,
        UiNode::new("form")
            .with_attr("id", "application_form")
            .with_attr("action", "/acme/jobs/4012/apply"),
    );

    doc.push(
        form,
        UiNode::new("label")
            .with_attr("for", "first_name")
            .with_text("First Name"),
    );
    doc.push(
        form,
        UiNode::new("input")
            .with_attr("id", "first_name")
            .with_attr("name", "first_name")
            .with_attr("type", "text")
            .with_attr("required", ""),
    );
    labeled_input(&mut doc, form, "last_name", "Last Name", "text");
    doc.push(
        form,
        UiNode::new("label")
            .with_attr("for", "email")
            .with_text("Email"),
    );
    doc.push(
        form,
        UiNode::new("input")
            .with_attr("id", "email")
            .with_attr("name", "email")
            .with_attr("type", "email")
            .with_attr("required", ""),
    );
    labeled_input(&mut doc, form, "phone", "Phone", "tel");
    labeled_input(&mut doc, form, "resume", "Resume/CV", "file");

    doc.push(
        form,
        UiNode::new("label")
            .with_attr("for", "cover_letter")
            .with_text("Cover Letter"),
    );
    doc.push(
        form,
        UiNode::new("textarea")
            .with_attr("id", "cover_letter")
            .with_attr("name", "cover_letter"),
    );

    doc.push(
        form,
        UiNode::new("label")
            .with_attr("for", "gender")
            .with_text("Gender"),
    );
    doc.push(
        form,
        UiNode::new("select")
            .with_attr("id", "gender")
            .with_attr("name", "gender")
            .with_option("", "Select...")
            .with_option("male", "Male")
            .with_option("female", "Female")
            .with_option("decline", "Decline to self-identify"),
    );

    doc.push(
        form,
        UiNode::new("label")
            .with_attr("for", "how_did_you_hear")
            .with_text("How did you hear about us?"),
    );
    doc.push(
        form,
        UiNode::new("select")
            .with_attr("id", "how_did_you_hear")
            .with_attr("name", "how_did_you_hear")
            .with_option("", "Select...")
            .with_option("linkedin", "LinkedIn")
            .with_option("referral", "Referral"),
    );

    doc.push(
        form,
        UiNode::new("input")
            .with_attr("type", "submit")
            .with_value("Submit Application"),
    );

    doc
}

/// Lever posting. The form markup is always present; only the apply sub-path
/// makes it count.
pub fn lever_page(apply: bool) -> Document {
    let url = if apply {
        "https://jobs.lever.co/acme/f8e1c2/apply"
    } else {
        "https://jobs.lever.co/acme/f8e1c2"
    };
    let mut doc = Document::new(url, "Acme - Senior Platform Engineer");
    let root = doc.root();

    let headline = doc.push(
        root,
        UiNode::new("div").with_attr("class", "posting-headline"),
    );
    doc.push(
        headline,
        UiNode::new("h2").with_text("Senior Platform Engineer"),
    );
    doc.push(
        root,
        UiNode::new("div")
            .with_attr("class", "location")
            .with_text("London"),
    );

    let page = doc.push(
        root,
        UiNode::new("div").with_attr("class", "application-page"),
    );
    let form = doc.push(
        page,
        UiNode::new("form").with_attr("class", "application-form"),
    );

    labeled_input(&mut doc, form, "name", "Full name", "text");
    labeled_input(&mut doc, form, "email", "Email", "email");
    labeled_input(&mut doc, form, "phone", "Phone", "tel");
    labeled_input(&mut doc, form, "org", "Current company", "text");

    doc
}

/// Workday single-page app: no semantic form, `data-automation-id` hooks,
/// page chrome inside the container, and one control whose label text lives
/// two ancestors away.
pub fn workday_page() -> Document {
    let mut doc = Document::new(
        "https://acme.wd5.myworkdayjobs.com/en-US/External/job/Boston/Engineer_R123/apply",
        "Engineer - Acme",
    );
    let root = doc.root();

    doc.push(
        root,
        UiNode::new("div")
            .with_attr("data-automation-id", "jobPostingHeader")
            .with_text("Software Engineer"),
    );
    doc.push(
        root,
        UiNode::new("div")
            .with_attr("data-automation-id", "locations")
            .with_text("Boston, MA"),
    );

    let container = doc.push(
        root,
        UiNode::new("div").with_attr("data-automation-id", "applicationPage"),
    );

    // Page chrome that must not surface as fields.
    let nav = doc.push(
        container,
        UiNode::new("nav").with_attr("role", "navigation"),
    );
    doc.push(
        nav,
        UiNode::new("input")
            .with_attr("type", "text")
            .with_attr("placeholder", "Search jobs"),
    );

    let section = doc.push(
        container,
        UiNode::new("div").with_attr("data-automation-id", "personalInformation"),
    );

    // Label text in a sibling subtree, not a sibling of the control itself.
    let years_group = doc.push(section, UiNode::new("div"));
    let years_text = doc.push(years_group, UiNode::new("div"));
    doc.push(
        years_text,
        UiNode::new("span").with_text("Years of Experience"),
    );
    let years_wrap = doc.push(years_group, UiNode::new("div"));
    doc.push(
        years_wrap,
        UiNode::new("input")
            .with_attr("type", "text")
            .with_attr("data-automation-id", "yearsOfExperience"),
    );

    let email_group = doc.push(section, UiNode::new("div"));
    doc.push(email_group, UiNode::new("span").with_text("Email Address"));
    doc.push(
        email_group,
        UiNode::new("input")
            .with_attr("type", "email")
            .with_attr("data-automation-id", "email"),
    );

    let phone_group = doc.push(section, UiNode::new("div"));
    doc.push(phone_group, UiNode::new("span").with_text("Phone Number"));
    doc.push(
        phone_group,
        UiNode::new("input")
            .with_attr("type", "text")
            .with_attr("data-automation-id", "phoneNumber"),
    );

    let country_group = doc.push(section, UiNode::new("div"));
    doc.push(country_group, UiNode::new("span").with_text("Country"));
    doc.push(
        country_group,
        UiNode::new("select")
            .with_attr("data-automation-id", "countryDropdown")
            .with_option("", "Select One")
            .with_option("USA", "United States of America")
            .with_option("GBR", "United Kingdom"),
    );

    let footer = doc.push(container, UiNode::new("div"));
    doc.push(
        footer,
        UiNode::new("button").with_text("Save and Continue"),
    );

    doc
}

/// LinkedIn Easy Apply modal.
pub fn linkedin_page() -> Document {
    let mut doc = Document::new(
        "https://www.linkedin.com/jobs/view/3991234567/",
        "Senior Engineer | Acme | LinkedIn",
    );
    let root = doc.root();

    doc.push(
        root,
        UiNode::new("div")
            .with_attr("class", "job-details-jobs-unified-top-card__job-title")
            .with_text("Senior Engineer"),
    );
    doc.push(
        root,
        UiNode::new("div")
            .with_attr("class", "job-details-jobs-unified-top-card__company-name")
            .with_text("Acme"),
    );

    let modal = doc.push(
        root,
        UiNode::new("div")
            .with_attr("role", "dialog")
            .with_attr("class", "jobs-easy-apply-modal"),
    );
    let content = doc.push(
        modal,
        UiNode::new("div").with_attr("class", "jobs-easy-apply-content"),
    );

    labeled_input(&mut doc, content, "ea-first", "First name", "text");
    labeled_input(&mut doc, content, "ea-email", "Email address", "email");
    labeled_input(&mut doc, content, "ea-phone", "Mobile phone number", "tel");
    labeled_input(&mut doc, content, "ea-city", "City", "text");

    doc
}

/// Unbranded careers page whose form wins on the scoring cascade alone.
pub fn generic_page() -> Document {
    let mut doc = Document::new("https://careers.acme.dev/openings/42", "Careers at Acme");
    let root = doc.root();

    doc.push(
        root,
        UiNode::new("meta")
            .with_attr("property", "og:site_name")
            .with_attr("content", "Acme Careers"),
    );

    let form = doc.push(
        root,
        UiNode::new("form")
            .with_attr("id", "apply-form")
            .with_attr("action", "/careers/apply"),
    );

    labeled_input(&mut doc, form, "applicant_name", "Your Name", "text");
    labeled_input(&mut doc, form, "applicant_email", "Email", "email");
    labeled_input(&mut doc, form, "applicant_phone", "Phone", "tel");

    doc.push(
        form,
        UiNode::new("label")
            .with_attr("for", "motivation")
            .with_text("Why do you want to work here?"),
    );
    doc.push(
        form,
        UiNode::new("textarea")
            .with_attr("id", "motivation")
            .with_attr("name", "motivation"),
    );

    doc
}

/// A contact form that must never be mistaken for an application: three
/// plain text inputs, no typed inputs, no vocabulary anywhere.
pub fn sparse_page() -> Document {
    let mut doc = Document::new("https://example.com/contact", "Contact Us");
    let root = doc.root();

    let form = doc.push(root, UiNode::new("form").with_attr("id", "contact"));
    for name in ["one", "two", "three"] {
        doc.push(
            form,
            UiNode::new("input")
                .with_attr("name", name)
                .with_attr("type", "text"),
        );
    }

    doc
}
