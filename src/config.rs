use crate::source::{DataSource, FileSource, HttpSource};
use std::{env, net::SocketAddr, path::PathBuf};

/// Value `BACKEND_URL` falls back to. Loading against it is a configuration
/// error.
pub const PLACEHOLDER_BACKEND_URL: &str = "https://your-project-name.onrender.com";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub port: u16,
    pub backend_url: String,
    pub data_path: Option<PathBuf>,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let backend_url = lookup("BACKEND_URL")
            .map(|value| normalize_base_url(&value))
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_BACKEND_URL.to_owned());
        let data_path = lookup("DASHBOARD_DATA_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Self {
            port,
            backend_url,
            data_path,
        }
    }

    pub fn uses_placeholder(&self) -> bool {
        self.data_path.is_none() && self.backend_url == PLACEHOLDER_BACKEND_URL
    }

    pub fn data_source(&self) -> DataSource {
        match &self.data_path {
            Some(path) => DataSource::File(FileSource::new(path.clone())),
            None => DataSource::Http(HttpSource::new(self.backend_url.clone())),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> DashboardConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        DashboardConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_placeholder_backend() {
        let config = config_from(&[]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.backend_url, PLACEHOLDER_BACKEND_URL);
        assert!(config.uses_placeholder());
        assert!(matches!(config.data_source(), DataSource::Http(_)));
    }

    #[test]
    fn reads_port_and_trims_backend_url() {
        let config = config_from(&[("PORT", "9191"), ("BACKEND_URL", " http://localhost:4000/ ")]);
        assert_eq!(config.port, 9191);
        assert_eq!(config.backend_url, "http://localhost:4000");
        assert!(!config.uses_placeholder());
        assert_eq!(config.socket_addr().port(), 9191);
    }

    #[test]
    fn invalid_port_falls_back() {
        let config = config_from(&[("PORT", "eighty")]);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn data_path_selects_file_source() {
        let config = config_from(&[("DASHBOARD_DATA_PATH", "fixtures/snapshot.json")]);
        assert!(!config.uses_placeholder());
        assert!(matches!(config.data_source(), DataSource::File(_)));
    }
}
