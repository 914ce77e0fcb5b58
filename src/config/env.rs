/// Environment variable holding the deployment environment name.
pub const ENVIRONMENT_VAR: &str = "APP_ENV";

/// Value of [`ENVIRONMENT_VAR`] that turns development mode on.
pub const DEVELOPMENT: &str = "development";

/// Read-only environment lookup, consulted once when a logger is built.
///
/// Implemented for closures so tests can substitute a fixed environment
/// without touching the real process state.
pub trait EnvLookup {
    fn get(&self, name: &str) -> Option<String>;
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Looks variables up in the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Infers development mode from the environment.
///
/// An unset or empty variable counts as development.
pub fn infer_development(env: &dyn EnvLookup) -> bool {
    match env.get(ENVIRONMENT_VAR) {
        Some(value) if !value.is_empty() => value == DEVELOPMENT,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |name: &str| {
            if name == ENVIRONMENT_VAR {
                value.map(str::to_string)
            } else {
                None
            }
        }
    }

    #[test]
    fn test_unset_environment_is_development() {
        assert!(infer_development(&env_with(None)));
    }

    #[test]
    fn test_empty_environment_is_development() {
        assert!(infer_development(&env_with(Some(""))));
    }

    #[test]
    fn test_explicit_environments() {
        assert!(infer_development(&env_with(Some("development"))));
        assert!(!infer_development(&env_with(Some("production"))));
        assert!(!infer_development(&env_with(Some("test"))));
        // Exact match only
        assert!(!infer_development(&env_with(Some("Development"))));
    }
}
