use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Core server settings
    pub listen_addr: String,
    pub db_dir: PathBuf,
    pub debug: bool,

    // TLS settings
    pub tls_enabled: bool,
    pub tls_cert_path: PathBuf,
    pub tls_key_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            db_dir: PathBuf::from("./"),
            debug: false,
            tls_enabled: false,
            tls_cert_path: PathBuf::from("./cert.pem"),
            tls_key_path: PathBuf::from("./key.pem"),
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let listen_addr =
        std::env::var("GEOGATE_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let db_dir = std::env::var("GEOGATE_DB_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./"));

    let debug = std::env::var("DEBUG").is_ok();

    // TLS settings
    let tls_enabled = std::env::var("GEOGATE_TLS_ENABLED")
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false);

    let tls_cert_path = std::env::var("GEOGATE_TLS_CERT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./cert.pem"));

    let tls_key_path = std::env::var("GEOGATE_TLS_KEY")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./key.pem"));

    Ok(Config {
        listen_addr,
        db_dir,
        debug,
        tls_enabled,
        tls_cert_path,
        tls_key_path,
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // Tests mutate process-wide environment variables; serialize them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
        assert_eq!(cfg.db_dir, PathBuf::from("./"));
        assert!(!cfg.tls_enabled);
        assert!(!cfg.debug);
    }

    #[test]
    fn test_load_config_defaults() {
        let _guard = env_guard();
        std::env::remove_var("GEOGATE_LISTEN_ADDR");
        std::env::remove_var("GEOGATE_DB_DIR");

        let cfg = load_config().unwrap();
        assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
        assert_eq!(cfg.db_dir, PathBuf::from("./"));
        assert_eq!(cfg.tls_cert_path, PathBuf::from("./cert.pem"));
        assert_eq!(cfg.tls_key_path, PathBuf::from("./key.pem"));
    }

    #[test]
    fn test_load_config_with_custom_listen_addr() {
        let _guard = env_guard();
        std::env::set_var("GEOGATE_LISTEN_ADDR", "127.0.0.1:9000");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
        std::env::remove_var("GEOGATE_LISTEN_ADDR");
    }

    #[test]
    fn test_load_config_with_custom_db_dir() {
        let _guard = env_guard();
        std::env::set_var("GEOGATE_DB_DIR", "/var/lib/geoip");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.db_dir, PathBuf::from("/var/lib/geoip"));
        std::env::remove_var("GEOGATE_DB_DIR");
    }

    #[test]
    fn test_load_config_with_tls_enabled_1() {
        let _guard = env_guard();
        std::env::set_var("GEOGATE_TLS_ENABLED", "1");
        let cfg = load_config().unwrap();
        assert!(cfg.tls_enabled);
        std::env::remove_var("GEOGATE_TLS_ENABLED");
    }

    #[test]
    fn test_load_config_with_tls_enabled_true() {
        let _guard = env_guard();
        std::env::set_var("GEOGATE_TLS_ENABLED", "TRUE");
        let cfg = load_config().unwrap();
        assert!(cfg.tls_enabled);
        std::env::remove_var("GEOGATE_TLS_ENABLED");
    }

    #[test]
    fn test_load_config_with_tls_paths() {
        let _guard = env_guard();
        std::env::set_var("GEOGATE_TLS_CERT", "/etc/geogate/cert.pem");
        std::env::set_var("GEOGATE_TLS_KEY", "/etc/geogate/key.pem");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.tls_cert_path, PathBuf::from("/etc/geogate/cert.pem"));
        assert_eq!(cfg.tls_key_path, PathBuf::from("/etc/geogate/key.pem"));
        std::env::remove_var("GEOGATE_TLS_CERT");
        std::env::remove_var("GEOGATE_TLS_KEY");
    }

    #[test]
    fn test_load_config_with_debug() {
        let _guard = env_guard();
        std::env::set_var("DEBUG", "1");
        let cfg = load_config().unwrap();
        assert!(cfg.debug);
        std::env::remove_var("DEBUG");
    }
}
