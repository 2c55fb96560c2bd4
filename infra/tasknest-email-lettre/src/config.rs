use std::{fmt, path::PathBuf};

use thiserror::Error;

const SERVICE_VAR: &str = "TASKNEST_EMAIL_SERVICE";
const HOST_VAR: &str = "TASKNEST_EMAIL_HOST";
const PORT_VAR: &str = "TASKNEST_EMAIL_PORT";
const FROM_VAR: &str = "TASKNEST_EMAIL_FROM";
const USER_VAR: &str = "TASKNEST_EMAIL_USER";
const PASSWORD_VAR: &str = "TASKNEST_EMAIL_PASSWORD";
const PASSWORD_FILE_VAR: &str = "TASKNEST_EMAIL_PASSWORD_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} env var not set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },

    #[error("unknown email service '{0}'")]
    UnknownService(String),

    #[error("either TASKNEST_EMAIL_SERVICE or TASKNEST_EMAIL_HOST must be set")]
    NoRelay,

    #[error("failed to read credential file {}: {source}", .path.display())]
    CredentialFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid from address: {0}")]
    InvalidSender(String),

    #[error("Failed to create SMTP transport: {0}")]
    Transport(String),
}

/// Maps a provider service name to its SMTP relay host.
pub fn service_host(service: &str) -> Option<&'static str> {
    match service.trim().to_ascii_lowercase().as_str() {
        "gmail" | "googlemail" => Some("smtp.gmail.com"),
        "outlook" | "outlook365" | "hotmail" => Some("smtp-mail.outlook.com"),
        "yahoo" => Some("smtp.mail.yahoo.com"),
        "icloud" => Some("smtp.mail.me.com"),
        "zoho" => Some("smtp.zoho.com"),
        "sendgrid" => Some("smtp.sendgrid.net"),
        _ => None,
    }
}

/// Sender identity and SMTP credentials, fixed for the lifetime of the process.
#[derive(Clone)]
pub struct LettreEmailConfig {
    pub service: Option<String>,
    /// Takes precedence over `service`.
    pub host: Option<String>,
    pub port: Option<u16>,
    pub sender: String,
    /// Defaults to `sender`.
    pub user: Option<String>,
    pub credential: String,
}

impl LettreEmailConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let service = var(SERVICE_VAR);
        let host = var(HOST_VAR);
        if service.is_none() && host.is_none() {
            return Err(ConfigError::NoRelay);
        }

        let port = var(PORT_VAR)
            .map(|p| {
                p.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                    name: PORT_VAR,
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let sender = var(FROM_VAR).ok_or(ConfigError::Missing(FROM_VAR))?;
        let user = var(USER_VAR);

        let credential = match var(PASSWORD_VAR) {
            Some(password) => password,
            None => {
                let path = PathBuf::from(
                    var(PASSWORD_FILE_VAR).ok_or(ConfigError::Missing(PASSWORD_VAR))?,
                );
                let contents = std::fs::read_to_string(&path)
                    .map_err(|source| ConfigError::CredentialFile { path, source })?;
                let password = contents.trim_end_matches(['\r', '\n']).to_string();
                if password.is_empty() {
                    return Err(ConfigError::Invalid {
                        name: PASSWORD_FILE_VAR,
                        reason: "credential file is empty".to_string(),
                    });
                }
                password
            }
        };

        Ok(Self {
            service,
            host,
            port,
            sender,
            user,
            credential,
        })
    }

    pub fn smtp_host(&self) -> Result<String, ConfigError> {
        if let Some(host) = &self.host {
            return Ok(host.clone());
        }
        match &self.service {
            Some(service) => service_host(service)
                .map(str::to_string)
                .ok_or_else(|| ConfigError::UnknownService(service.clone())),
            None => Err(ConfigError::NoRelay),
        }
    }

    pub fn user(&self) -> &str {
        self.user.as_deref().unwrap_or(&self.sender)
    }
}

impl fmt::Debug for LettreEmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LettreEmailConfig")
            .field("service", &self.service)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("sender", &self.sender)
            .field("user", &self.user)
            .field("credential", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_service_host() {
        assert_eq!(service_host("gmail"), Some("smtp.gmail.com"));
        assert_eq!(service_host("Gmail"), Some("smtp.gmail.com"));
        assert_eq!(service_host("hotmail"), Some("smtp-mail.outlook.com"));
        assert_eq!(service_host("carrier-pigeon"), None);
    }

    #[test]
    fn test_from_lookup_with_service() {
        let config = LettreEmailConfig::from_lookup(lookup(&[
            (SERVICE_VAR, "gmail"),
            (FROM_VAR, "seller@tasknest.example"),
            (PASSWORD_VAR, "app-password"),
        ]))
        .unwrap();

        assert_eq!(config.smtp_host().unwrap(), "smtp.gmail.com");
        assert_eq!(config.user(), "seller@tasknest.example");
        assert_eq!(config.credential, "app-password");
        assert_eq!(config.port, None);
    }

    #[test]
    fn test_host_overrides_service() {
        let config = LettreEmailConfig::from_lookup(lookup(&[
            (SERVICE_VAR, "gmail"),
            (HOST_VAR, "mail.tasknest.example"),
            (PORT_VAR, "2525"),
            (FROM_VAR, "seller@tasknest.example"),
            (USER_VAR, "mailer"),
            (PASSWORD_VAR, "secret"),
        ]))
        .unwrap();

        assert_eq!(config.smtp_host().unwrap(), "mail.tasknest.example");
        assert_eq!(config.port, Some(2525));
        assert_eq!(config.user(), "mailer");
    }

    #[test]
    fn test_missing_values() {
        assert!(matches!(
            LettreEmailConfig::from_lookup(lookup(&[
                (FROM_VAR, "seller@tasknest.example"),
                (PASSWORD_VAR, "secret"),
            ])),
            Err(ConfigError::NoRelay)
        ));
        assert!(matches!(
            LettreEmailConfig::from_lookup(lookup(&[
                (SERVICE_VAR, "gmail"),
                (PASSWORD_VAR, "secret"),
            ])),
            Err(ConfigError::Missing(FROM_VAR))
        ));
        assert!(matches!(
            LettreEmailConfig::from_lookup(lookup(&[
                (SERVICE_VAR, "gmail"),
                (FROM_VAR, "seller@tasknest.example"),
            ])),
            Err(ConfigError::Missing(PASSWORD_VAR))
        ));
        assert!(matches!(
            LettreEmailConfig::from_lookup(lookup(&[
                (SERVICE_VAR, "gmail"),
                (PORT_VAR, "smtp"),
                (FROM_VAR, "seller@tasknest.example"),
                (PASSWORD_VAR, "secret"),
            ])),
            Err(ConfigError::Invalid { name: PORT_VAR, .. })
        ));
    }

    #[test]
    fn test_unknown_service() {
        let config = LettreEmailConfig::from_lookup(lookup(&[
            (SERVICE_VAR, "carrier-pigeon"),
            (FROM_VAR, "seller@tasknest.example"),
            (PASSWORD_VAR, "secret"),
        ]))
        .unwrap();
        assert!(matches!(
            config.smtp_host(),
            Err(ConfigError::UnknownService(s)) if s == "carrier-pigeon"
        ));
    }

    #[test]
    fn test_credential_file() {
        let path = std::env::temp_dir().join(format!(
            "tasknest-credential-{}",
            std::process::id()
        ));
        std::fs::write(&path, "from-secret-store\n").unwrap();

        let config = LettreEmailConfig::from_lookup(lookup(&[
            (SERVICE_VAR, "gmail"),
            (FROM_VAR, "seller@tasknest.example"),
            (PASSWORD_FILE_VAR, path.to_str().unwrap()),
        ]))
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.credential, "from-secret-store");

        assert!(matches!(
            LettreEmailConfig::from_lookup(lookup(&[
                (SERVICE_VAR, "gmail"),
                (FROM_VAR, "seller@tasknest.example"),
                (PASSWORD_FILE_VAR, "/nonexistent/tasknest/credential"),
            ])),
            Err(ConfigError::CredentialFile { .. })
        ));
    }

    #[test]
    fn test_debug_redacts_credential() {
        let config = LettreEmailConfig::from_lookup(lookup(&[
            (SERVICE_VAR, "gmail"),
            (FROM_VAR, "seller@tasknest.example"),
            (PASSWORD_VAR, "app-password"),
        ]))
        .unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("app-password"));
        assert!(debug.contains("<redacted>"));
    }
}
