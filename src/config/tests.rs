use super::load::{default_config_path, default_log_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_exhibition_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("EXHIBITION_CONFIG_PATH", "/tmp/exhibition-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/exhibition-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("exhibition")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("exhibition")
            .join("config.toml")
    );
}

#[test]
fn default_log_path_uses_xdg_state_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_STATE_HOME", "/tmp/xdg-state");

    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-state")
            .join("exhibition")
            .join("exhibition.log")
    );
}

#[test]
fn defaults_pass_validation() {
    let s = Settings::default();
    assert!(s.validate().is_ok());
    assert!(s.audio.autoplay);
    assert_eq!(s.audio.default_volume, 1.0);
    assert!(s.player.start_visible);
    assert!(!s.player.volume_control);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    s.audio.default_volume = 1.5;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.audio.volume_step = 0.0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.ui.tick_ms = 0;
    assert!(s.validate().is_err());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
autoplay = false
default_volume = 0.5
volume_step = 0.1
rewind_on_end = true

[player]
start_visible = false
volume_control = true
bottom_threshold = 100
hide_threshold = 100

[ui]
tick_ms = 40
title_threshold = 300
enter_offset = 4
picture_rows = 10
footer_credit = "hello"

[content]
assets_dir = "/srv/exhibition"

[logging]
level = "debug"
file = "/tmp/exhibition.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("EXHIBITION_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("EXHIBITION__AUDIO__DEFAULT_VOLUME");

    let s = Settings::load().unwrap();
    assert!(!s.audio.autoplay);
    assert_eq!(s.audio.default_volume, 0.5);
    assert_eq!(s.audio.volume_step, 0.1);
    assert!(s.audio.rewind_on_end);
    assert!(!s.player.start_visible);
    assert!(s.player.volume_control);
    assert_eq!(s.player.bottom_threshold, 100);
    assert_eq!(s.player.hide_threshold, 100);
    assert_eq!(s.ui.tick_ms, 40);
    assert_eq!(s.ui.title_threshold, 300);
    assert_eq!(s.ui.enter_offset, 4);
    assert_eq!(s.ui.picture_rows, 10);
    assert_eq!(s.ui.footer_credit, "hello");
    assert_eq!(
        s.content.assets_dir,
        std::path::PathBuf::from("/srv/exhibition")
    );
    assert_eq!(s.logging.level, "debug");
    assert_eq!(
        s.logging.file,
        Some(std::path::PathBuf::from("/tmp/exhibition.log"))
    );
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
default_volume = 1.0
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("EXHIBITION_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("EXHIBITION__AUDIO__DEFAULT_VOLUME", "0.25");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.default_volume, 0.25);
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let _g1 = EnvGuard::set(
        "EXHIBITION_CONFIG_PATH",
        dir.path().join("nope.toml").to_str().unwrap(),
    );
    let _g2 = EnvGuard::remove("EXHIBITION__AUDIO__DEFAULT_VOLUME");

    let s = Settings::load().unwrap();
    assert_eq!(s.ui.tick_ms, UiSettings::default().tick_ms);
    assert!(s.logging.file.is_none());
}
