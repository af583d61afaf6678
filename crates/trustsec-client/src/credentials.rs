use std::fmt;

use crate::error::{ClientError, CredentialField};

/// Login name and password sent with every request.
///
/// Both values are trimmed on construction and must not be empty afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    login_name: String,
    password: String,
}

impl Credentials {
    pub fn new(login_name: impl AsRef<str>, password: impl AsRef<str>) -> Result<Self, ClientError> {
        let login_name = login_name.as_ref().trim();
        let password = password.as_ref().trim();

        if login_name.is_empty() {
            return Err(ClientError::EmptyCredential {
                field: CredentialField::LoginName,
            });
        }
        if password.is_empty() {
            return Err(ClientError::EmptyCredential {
                field: CredentialField::Password,
            });
        }

        Ok(Self {
            login_name: login_name.to_string(),
            password: password.to_string(),
        })
    }

    pub fn login_name(&self) -> &str {
        &self.login_name
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login_name", &self.login_name)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_both_fields() {
        let credentials = Credentials::new("  school-admin \n", "\tsecret  ").expect("valid");
        assert_eq!(credentials.login_name(), "school-admin");
        assert_eq!(credentials.password(), "secret");
    }

    #[test]
    fn rejects_empty_or_whitespace_values() {
        let cases = [
            ("", "secret", CredentialField::LoginName),
            ("   ", "secret", CredentialField::LoginName),
            ("admin", "", CredentialField::Password),
            ("admin", " \t\n", CredentialField::Password),
            ("", "", CredentialField::LoginName),
        ];

        for (login, password, expected) in cases {
            match Credentials::new(login, password) {
                Err(ClientError::EmptyCredential { field }) => {
                    assert_eq!(field, expected, "login={login:?} password={password:?}")
                }
                other => panic!("expected empty credential error, got {other:?}"),
            }
        }
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = Credentials::new(" ", "secret").unwrap_err();
        assert_eq!(err.to_string(), "login name is empty");
        let err = Credentials::new("admin", " ").unwrap_err();
        assert_eq!(err.to_string(), "login password is empty");
    }

    #[test]
    fn debug_output_hides_password() {
        let credentials = Credentials::new("admin", "hunter2").unwrap();
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
    }
}
