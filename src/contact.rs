use serde::Deserialize;

/// What the visitor typed. Phone is optional and never validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    MissingRequired,
    InvalidEmail,
}

impl ContactFields {
    /// Required fields are checked before the email shape, so an empty email
    /// reports as missing rather than malformed.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(FieldError::MissingRequired);
        }
        if !email_looks_valid(&self.email) {
            return Err(FieldError::InvalidEmail);
        }
        Ok(())
    }
}

/// Accepts `local@domain.tld`: no whitespace anywhere, exactly one `@`, and
/// a dot inside the domain with something on both sides of the last one.
pub fn email_looks_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(3, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(domain) => domain,
        None => return false,
    };
    if parts.next().is_some() || local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Outcome of the latest submission attempt, rendered inline next to the
/// form. The in-flight state is tracked separately so typing can dismiss an
/// old outcome without re-enabling a submit that is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Invalid(FieldError),
    NotConfigured,
    Sent,
    Failed,
}

impl FormStatus {
    /// Translation key for the inline message, `None` while idle.
    pub fn message_key(self) -> Option<&'static str> {
        match self {
            FormStatus::Idle => None,
            FormStatus::Invalid(FieldError::MissingRequired) => Some("form_status_missing"),
            FormStatus::Invalid(FieldError::InvalidEmail) => Some("form_status_bad_email"),
            FormStatus::NotConfigured => Some("form_status_unconfigured"),
            FormStatus::Sent => Some("form_status_success"),
            FormStatus::Failed => Some("form_status_error"),
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            FormStatus::Idle => "form-status",
            FormStatus::Sent => "form-status success",
            FormStatus::Invalid(_) | FormStatus::NotConfigured | FormStatus::Failed => {
                "form-status error"
            }
        }
    }
}

/// Body the relay answers with. Only the flag drives behavior; the note is
/// kept for the console.
#[derive(Debug, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Status a finished relay exchange maps to. Anything short of an explicit
/// success flag counts as a failure.
pub fn relay_outcome(response: Option<RelayResponse>) -> FormStatus {
    match response {
        Some(r) if r.success => FormStatus::Sent,
        _ => FormStatus::Failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Mamadou Diallo".into(),
            email: "mamadou@example.com".into(),
            phone: String::new(),
            message: "Looking for NPK pricing.".into(),
        }
    }

    #[test]
    fn accepts_a_complete_form_without_phone() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn each_required_field_is_enforced() {
        for wipe in [
            |f: &mut ContactFields| f.name.clear(),
            |f: &mut ContactFields| f.email.clear(),
            |f: &mut ContactFields| f.message.clear(),
        ] {
            let mut fields = filled();
            wipe(&mut fields);
            assert_eq!(fields.validate(), Err(FieldError::MissingRequired));
        }
    }

    #[test]
    fn missing_fields_report_before_email_shape() {
        let mut fields = filled();
        fields.email.clear();
        fields.name.clear();
        assert_eq!(fields.validate(), Err(FieldError::MissingRequired));
    }

    #[test]
    fn bad_email_reports_after_required_fields() {
        let mut fields = filled();
        fields.email = "not-an-address".into();
        assert_eq!(fields.validate(), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn email_shape_matrix() {
        for good in ["user@example.com", "a@b.c", "first.last@mail.co.uk"] {
            assert!(email_looks_valid(good), "{good} should pass");
        }
        for bad in [
            "",
            "user",
            "user@",
            "@example.com",
            "user@example",
            "user@.com",
            "user@example.",
            "user@@example.com",
            "us er@example.com",
            "user@exa mple.com",
            "user@example.com ",
        ] {
            assert!(!email_looks_valid(bad), "{bad} should fail");
        }
    }

    #[test]
    fn relay_outcome_requires_an_explicit_success_flag() {
        let ok = RelayResponse {
            success: true,
            message: String::new(),
        };
        let refused = RelayResponse {
            success: false,
            message: "key rejected".into(),
        };
        assert_eq!(relay_outcome(Some(ok)), FormStatus::Sent);
        assert_eq!(relay_outcome(Some(refused)), FormStatus::Failed);
        assert_eq!(relay_outcome(None), FormStatus::Failed);
    }

    #[test]
    fn relay_response_decodes_with_and_without_a_note() {
        let full: RelayResponse =
            serde_json::from_str(r#"{"success":true,"message":"Email sent"}"#).unwrap();
        assert!(full.success);
        assert_eq!(full.message, "Email sent");

        let bare: RelayResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!bare.success);
        assert_eq!(bare.message, "");
    }

    #[test]
    fn status_messages_exist_in_both_tables() {
        use crate::i18n::{lookup, Lang};

        let statuses = [
            FormStatus::Invalid(FieldError::MissingRequired),
            FormStatus::Invalid(FieldError::InvalidEmail),
            FormStatus::NotConfigured,
            FormStatus::Sent,
            FormStatus::Failed,
        ];
        for status in statuses {
            let key = status.message_key().unwrap();
            assert!(lookup(Lang::En, key).is_some(), "missing en {key}");
            assert!(lookup(Lang::Fr, key).is_some(), "missing fr {key}");
        }
    }
}
