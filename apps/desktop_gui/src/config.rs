use std::{collections::HashMap, fs};

#[derive(Debug, Clone)]
pub struct Settings {
    pub server_url: String,
    pub game_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".into(),
            game_id: "default".into(),
        }
    }
}

/// Layered settings: defaults, then an optional `client.toml` beside the
/// binary, then environment variables. CLI flags go on top via
/// [`Settings::with_overrides`].
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("client.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("server_url") {
                settings.server_url = v.clone();
            }
            if let Some(v) = file_cfg.get("game_id") {
                settings.game_id = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("SERVER_URL") {
        settings.server_url = v;
    }
    if let Ok(v) = std::env::var("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Ok(v) = std::env::var("GAME_ID") {
        settings.game_id = v;
    }
    if let Ok(v) = std::env::var("APP__GAME_ID") {
        settings.game_id = v;
    }

    settings
}

impl Settings {
    pub fn with_overrides(mut self, server_url: Option<String>, game_id: Option<String>) -> Self {
        if let Some(v) = server_url {
            self.server_url = v;
        }
        if let Some(v) = game_id {
            self.game_id = v;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_local_dev_server() {
        let settings = Settings::default();
        assert_eq!(settings.server_url, "http://127.0.0.1:5000");
        assert_eq!(settings.game_id, "default");
    }

    #[test]
    fn cli_overrides_win_over_everything_else() {
        let settings = Settings::default()
            .with_overrides(Some("http://game.example:8080".into()), None);
        assert_eq!(settings.server_url, "http://game.example:8080");
        assert_eq!(settings.game_id, "default");

        let settings = settings.with_overrides(None, Some("rematch".into()));
        assert_eq!(settings.server_url, "http://game.example:8080");
        assert_eq!(settings.game_id, "rematch");
    }
}
