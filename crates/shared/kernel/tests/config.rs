use slim_kernel::config::{ConfigError, load_config};
use slim_kernel::domain::config::AppConfig;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_toml_sections_over_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        r#"
            [server]
            port = 8088

            [minify]
            json = true
            svg = true
            max_body_bytes = 65536

            [showcase]
            max_retries = 5
        "#,
    )?;

    let cfg: AppConfig = load_config(Some(&path))?;

    assert_eq!(cfg.server.port, 8088);
    assert!(cfg.minify.json && cfg.minify.svg);
    assert!(cfg.minify.html, "html stays enabled by default");
    assert_eq!(cfg.minify.max_body_bytes, Some(65_536));
    assert_eq!(cfg.showcase.max_retries, 5);
    assert_eq!(cfg.showcase.timeout_ms, 5000);
    Ok(())
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let err = load_config::<AppConfig>(Some(dir.path().join("absent.toml"))).unwrap_err();

    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}

#[test]
fn wrong_types_are_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[server]\nport = \"not-a-port\"\n")?;

    let err = load_config::<AppConfig>(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("Failed to deserialize config"));
    Ok(())
}
