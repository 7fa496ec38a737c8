//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    providers::{Format, Serialized, Toml},
    Figment, Jail,
};
use gloss_config::GlossConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_llm_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[llm]
base_url = "http://llm.internal:8080/v1"
api_key = "secret-key"
model = "mistral-7b"
temperature = 0.2
timeout_secs = 30
"#,
        )?;

        let config: GlossConfig = Figment::from(Serialized::defaults(GlossConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.llm.base_url, "http://llm.internal:8080/v1");
        assert_eq!(config.llm.api_key, "secret-key");
        assert_eq!(config.llm.model, "mistral-7b");
        assert!((config.llm.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(config.llm.timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn partial_section_falls_back_to_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[llm]
model = "qwen-coder"
"#,
        )?;

        let config: GlossConfig = Figment::from(Serialized::defaults(GlossConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.llm.model, "qwen-coder");
        assert_eq!(config.llm.base_url, "http://localhost:1234/v1");
        assert!((config.llm.temperature - 0.7).abs() < f32::EPSILON);
        Ok(())
    });
}
