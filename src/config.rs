//! Configuration module
//!
//! This module handles loading lab configuration from TOML files.

pub mod loader;
pub mod schema;

pub use loader::TOKEN_ENV;
pub use schema::Config;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.preferred_domains, vec!["gitlab.com"]);
        assert!(config.tokens.is_empty());
        assert!(config.browser.is_none());
        assert_eq!(config.primary_domain(), "gitlab.com");
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            preferred_domains = ["gitlab.example.org", "gitlab.com"]
            browser = "firefox"

            [tokens]
            "gitlab.example.org" = "secret"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.preferred_domains,
            vec!["gitlab.example.org", "gitlab.com"]
        );
        assert_eq!(config.primary_domain(), "gitlab.example.org");
        assert_eq!(config.browser.as_deref(), Some("firefox"));
        assert_eq!(
            config.tokens.get("gitlab.example.org").map(String::as_str),
            Some("secret")
        );
    }

    #[test]
    fn test_missing_preferred_domains_defaults_to_gitlab() {
        let toml = r#"browser = "open""#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.preferred_domains, vec!["gitlab.com"]);
    }

    #[test]
    fn test_empty_preferred_domains_primary_falls_back() {
        let toml = "preferred_domains = []";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.primary_domain(), "gitlab.com");
    }

    #[test]
    fn test_invalid_toml_type() {
        let toml = r#"preferred_domains = "gitlab.com""#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_token_from_env_wins() {
        let mut config = Config::default();
        config
            .tokens
            .insert("gitlab.com".to_string(), "from-config".to_string());
        let token = config
            .token_for_with_env("gitlab.com", Some("from-env".to_string()))
            .unwrap();
        assert_eq!(token, "from-env");
    }

    #[test]
    fn test_token_from_config() {
        let mut config = Config::default();
        config
            .tokens
            .insert("gitlab.com".to_string(), " from-config \n".to_string());
        let token = config.token_for_with_env("gitlab.com", None).unwrap();
        assert_eq!(token, "from-config");
    }

    #[test]
    fn test_blank_env_token_is_ignored() {
        let mut config = Config::default();
        config
            .tokens
            .insert("gitlab.com".to_string(), "from-config".to_string());
        let token = config
            .token_for_with_env("gitlab.com", Some("  ".to_string()))
            .unwrap();
        assert_eq!(token, "from-config");
    }

    #[test]
    fn test_missing_token_names_domain() {
        let config = Config::default();
        let err = config
            .token_for_with_env("gitlab.example.org", None)
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("gitlab.example.org"));
        assert!(message.contains(TOKEN_ENV));
    }

    #[test]
    fn test_local_config_path() {
        assert_eq!(
            Config::local_config_path(),
            std::path::PathBuf::from(".lab.toml")
        );
    }

    #[test]
    fn test_local_config_path_from_repo_root() {
        let repo_root = std::path::PathBuf::from("/tmp/my-repo");
        let path = Config::local_config_path_from(&repo_root);
        assert_eq!(path, std::path::PathBuf::from("/tmp/my-repo/.lab.toml"));
    }

    #[test]
    #[serial_test::serial]
    fn test_global_config_path_with_xdg_env() {
        let xdg_path = std::env::temp_dir().join("lab_xdg_config");
        temp_env::with_var("XDG_CONFIG_HOME", Some(&xdg_path), || {
            let path = Config::global_config_path();
            assert_eq!(path, Some(xdg_path.join("lab/config.toml")));
        });
    }

    #[test]
    #[serial_test::serial]
    fn test_global_config_path_relative_xdg_ignored() {
        temp_env::with_var("XDG_CONFIG_HOME", Some("relative/path"), || {
            if let Some(path) = Config::global_config_path() {
                assert!(path.ends_with(".config/lab/config.toml"));
            }
        });
    }

    #[test]
    #[serial_test::serial]
    fn test_load_from_repo_root_without_any_config_uses_defaults() {
        let xdg = tempfile::tempdir().unwrap();
        let repo = tempfile::tempdir().unwrap();
        temp_env::with_var("XDG_CONFIG_HOME", Some(xdg.path()), || {
            let config = Config::load_from_repo_root(repo.path()).unwrap();
            assert_eq!(config.preferred_domains, vec!["gitlab.com"]);
        });
    }

    #[test]
    #[serial_test::serial]
    fn test_local_config_overrides_global_but_keeps_global_tokens() {
        let xdg = tempfile::tempdir().unwrap();
        let repo = tempfile::tempdir().unwrap();

        let global_dir = xdg.path().join("lab");
        std::fs::create_dir_all(&global_dir).unwrap();
        std::fs::write(
            global_dir.join("config.toml"),
            r#"
                preferred_domains = ["gitlab.com"]

                [tokens]
                "gitlab.local" = "global-token"
            "#,
        )
        .unwrap();
        std::fs::write(
            repo.path().join(".lab.toml"),
            r#"
                preferred_domains = ["gitlab.local"]

                [tokens]
                "gitlab.local" = "leaked-token"
            "#,
        )
        .unwrap();

        temp_env::with_var("XDG_CONFIG_HOME", Some(xdg.path()), || {
            let config = Config::load_from_repo_root(repo.path()).unwrap();
            assert_eq!(config.preferred_domains, vec!["gitlab.local"]);
            assert_eq!(
                config.tokens.get("gitlab.local").map(String::as_str),
                Some("global-token")
            );
        });
    }

    #[test]
    #[serial_test::serial]
    fn test_global_config_used_without_local() {
        let xdg = tempfile::tempdir().unwrap();
        let repo = tempfile::tempdir().unwrap();

        let global_dir = xdg.path().join("lab");
        std::fs::create_dir_all(&global_dir).unwrap();
        std::fs::write(
            global_dir.join("config.toml"),
            r#"preferred_domains = ["gitlab.example.org"]"#,
        )
        .unwrap();

        temp_env::with_var("XDG_CONFIG_HOME", Some(xdg.path()), || {
            let config = Config::load_from_repo_root(repo.path()).unwrap();
            assert_eq!(config.primary_domain(), "gitlab.example.org");
        });
    }

    #[test]
    #[serial_test::serial]
    fn test_local_config_without_domains_keeps_global_domains() {
        let xdg = tempfile::tempdir().unwrap();
        let repo = tempfile::tempdir().unwrap();

        let global_dir = xdg.path().join("lab");
        std::fs::create_dir_all(&global_dir).unwrap();
        std::fs::write(
            global_dir.join("config.toml"),
            r#"
                preferred_domains = ["gitlab.example.org"]
                browser = "open -a Safari"
            "#,
        )
        .unwrap();
        std::fs::write(repo.path().join(".lab.toml"), r#"browser = "firefox""#).unwrap();

        temp_env::with_var("XDG_CONFIG_HOME", Some(xdg.path()), || {
            let config = Config::load_from_repo_root(repo.path()).unwrap();
            assert_eq!(config.preferred_domains, vec!["gitlab.example.org"]);
            assert_eq!(config.browser.as_deref(), Some("firefox"));
        });
    }

    #[test]
    fn test_with_local_only_overrides_present_keys() {
        let global = Config {
            preferred_domains: vec!["gitlab.local".to_string()],
            browser: Some("firefox".to_string()),
            ..Config::default()
        };

        let merged = global.clone().with_local(schema::LocalConfig::default());
        assert_eq!(merged.preferred_domains, vec!["gitlab.local"]);
        assert_eq!(merged.browser.as_deref(), Some("firefox"));

        let merged = global.with_local(schema::LocalConfig {
            preferred_domains: Some(vec!["gitlab.com".to_string()]),
            browser: None,
        });
        assert_eq!(merged.preferred_domains, vec!["gitlab.com"]);
        assert_eq!(merged.browser.as_deref(), Some("firefox"));
    }

    #[test]
    fn test_template_local_sets_nothing() {
        let local: schema::LocalConfig = toml::from_str(Config::template_local()).unwrap();
        assert!(local.preferred_domains.is_none());
        assert!(local.browser.is_none());
    }

    #[test]
    #[serial_test::serial]
    fn test_broken_local_config_is_an_error() {
        let xdg = tempfile::tempdir().unwrap();
        let repo = tempfile::tempdir().unwrap();
        std::fs::write(repo.path().join(".lab.toml"), "preferred_domains = [").unwrap();
        temp_env::with_var("XDG_CONFIG_HOME", Some(xdg.path()), || {
            let err = Config::load_from_repo_root(repo.path()).unwrap_err();
            assert!(err.to_string().contains("Failed to parse config file"));
        });
    }

    #[test]
    fn test_template_global_is_valid_toml() {
        let result: Result<Config, _> = toml::from_str(Config::template_global());
        assert!(result.is_ok());
    }

    #[test]
    fn test_template_local_is_valid_toml() {
        let config: Config = toml::from_str(Config::template_local()).unwrap();
        assert!(config.tokens.is_empty());
    }

    #[test]
    fn test_template_global_has_tokens_section() {
        let template = Config::template_global();
        assert!(template.contains("[tokens]"));
        assert!(template.contains("# Location:"));
        assert!(!Config::template_local().contains("[tokens]"));
    }
}
