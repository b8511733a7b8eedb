use thiserror::Error;

/// Which password a length or match check is about. Only the wording differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordSubject {
    /// The sign-in password.
    Login,
    /// The password chosen at registration.
    Account,
    /// The replacement password in the change dialog.
    New,
}

impl PasswordSubject {
    fn noun(self) -> &'static str {
        match self {
            PasswordSubject::Login | PasswordSubject::Account => "Password",
            PasswordSubject::New => "New password",
        }
    }

    fn length_suffix(self) -> &'static str {
        match self {
            PasswordSubject::Login => "",
            PasswordSubject::Account | PasswordSubject::New => " long",
        }
    }

    fn plural(self) -> &'static str {
        match self {
            PasswordSubject::Login | PasswordSubject::Account => "Passwords",
            PasswordSubject::New => "New passwords",
        }
    }
}

/// Input-shape failures raised by the auth forms.
///
/// Every variant is recoverable; the form keeps at most one of these as its
/// current message and clears it at the start of the next submit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{message}")]
    MissingField { message: &'static str },
    #[error("Please enter a valid email address")]
    InvalidEmailShape,
    #[error("{} must be at least {} characters{}", .subject.noun(), .min, .subject.length_suffix())]
    PasswordTooShort { subject: PasswordSubject, min: usize },
    #[error("{} do not match", .subject.plural())]
    PasswordMismatch { subject: PasswordSubject },
    #[error("Please choose a stronger password")]
    PasswordTooWeak { score: u8 },
    #[error("Please accept the Terms & Conditions")]
    TermsNotAccepted,
}

impl FormError {
    pub fn missing(message: &'static str) -> Self {
        FormError::MissingField { message }
    }

    /// Short name used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            FormError::MissingField { .. } => "missing_field",
            FormError::InvalidEmailShape => "invalid_email",
            FormError::PasswordTooShort { .. } => "password_too_short",
            FormError::PasswordMismatch { .. } => "password_mismatch",
            FormError::PasswordTooWeak { .. } => "password_too_weak",
            FormError::TermsNotAccepted => "terms_not_accepted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wording_follows_the_form() {
        let short = |subject, min| FormError::PasswordTooShort { subject, min }.to_string();
        assert_eq!(short(PasswordSubject::Login, 6), "Password must be at least 6 characters");
        assert_eq!(
            short(PasswordSubject::Account, 8),
            "Password must be at least 8 characters long"
        );
        assert_eq!(
            short(PasswordSubject::New, 8),
            "New password must be at least 8 characters long"
        );

        let mismatch = |subject| FormError::PasswordMismatch { subject }.to_string();
        assert_eq!(mismatch(PasswordSubject::Account), "Passwords do not match");
        assert_eq!(mismatch(PasswordSubject::New), "New passwords do not match");
    }
}
