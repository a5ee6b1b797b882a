use secrecy::{ExposeSecret, Secret, SecretString};

use crate::shape::{Shape, StringSlot, Substitute};

impl StringSlot for SecretString {
    fn read(&self) -> &str {
        self.expose_secret()
    }

    fn write(&mut self, value: String) {
        *self = Secret::new(value);
    }
}

impl Substitute for SecretString {
    fn shape(&mut self) -> Shape<'_> {
        Shape::String(self)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::collections::HashMap};

    struct Credentials {
        user: String,
        api_key: SecretString,
        previous_key: Option<SecretString>,
    }

    crate::record!(Credentials {
        user,
        api_key,
        previous_key,
    });

    #[test]
    fn secret_fields_are_substituted() {
        let env = HashMap::from([("API_KEY".to_string(), "sk-123".to_string())]);
        let mut creds = Credentials {
            user: "admin".into(),
            api_key: Secret::new("$API_KEY".into()),
            previous_key: None,
        };
        let report = crate::run_with(&mut creds, &env, &crate::Options::default()).unwrap();
        assert_eq!(creds.user, "admin");
        assert_eq!(creds.api_key.expose_secret(), "sk-123");
        assert!(creds.previous_key.is_none());
        assert_eq!(report.substituted, 1);
    }

    #[test]
    fn secret_debug_stays_redacted() {
        let env = HashMap::from([("API_KEY".to_string(), "sk-123".to_string())]);
        let mut key: SecretString = Secret::new("$API_KEY".into());
        crate::run_with(&mut key, &env, &crate::Options::default()).unwrap();
        assert!(!format!("{key:?}").contains("sk-123"));
    }
}
