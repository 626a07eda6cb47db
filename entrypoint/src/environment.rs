use std::fmt::Display;

mod var {
    env_var::env_var!(
        pub struct Environment;
    );
}

/// The environment the lambda is deployed to, read from `ENVIRONMENT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// Running on a developer machine, e.g. through `cargo lambda watch`
    Local,
}

impl Environment {
    /// read the [Environment], falling back to production if it is missing or unrecognized
    pub fn new_or_prod() -> Self {
        var::Environment::new()
            .ok()
            .and_then(|v| Self::parse(&v))
            .unwrap_or(Environment::Production)
    }

    fn parse(environment: &str) -> Option<Self> {
        match environment {
            "prod" => Some(Environment::Production),
            "dev" => Some(Environment::Develop),
            "local" => Some(Environment::Local),
            _ => None,
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}
