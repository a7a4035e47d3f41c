use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
pub mod models;
pub use models::*;

/// Loads the application configuration.
///
/// Sources are layered, later sources overriding earlier ones:
/// `config/default`, `config/{RUN_ENV}`, then environment variables with the
/// `VELORA` prefix and `__` as the section separator
/// (e.g. `VELORA_DATABASE__URL`). Dependent crates call this so they do not
/// need to know where the configuration comes from.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "VELORA".to_string());

    let workspace_root = workspace_root();
    let default_path = workspace_root.join("config/default");
    let env_path = workspace_root.join(format!("config/{}", run_env));

    let builder = Config::builder()
        .add_source(File::with_name(default_path.to_str().unwrap_or("config/default")).required(false))
        .add_source(File::with_name(env_path.to_str().unwrap_or("config/debug")).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"));

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    Ok(raw_config)
}

// Resolve the workspace root: the nearest ancestor of the running crate's
// manifest (or of the current directory) that carries a `config/` folder.
// Binaries live at different depths, so a fixed ancestor count won't do.
fn workspace_root() -> PathBuf {
    let start = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .or_else(|_| env::current_dir())
        .unwrap_or_else(|_| PathBuf::from("."));

    if let Some(root) = start
        .ancestors()
        .find(|candidate| candidate.join("config").is_dir())
    {
        return root.to_path_buf();
    }
    start
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// This function checks if the dotenv file has already been loaded using a
/// `OnceCell`. If not, it loads the file named by `DOTENV_OVERRIDE`, falling
/// back to ".env". Missing files are ignored.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduling_config_defaults_to_zero_buffer() {
        let cfg: SchedulingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.buffer_minutes, 0);
    }

    #[test]
    fn app_config_tolerates_missing_sections() {
        let cfg: AppConfig = serde_json::from_str(
            r#"{ "server": { "host": "127.0.0.1", "port": 8086 } }"#,
        )
        .unwrap();
        assert!(!cfg.use_appointments);
        assert!(!cfg.use_shop);
        assert!(cfg.database.is_none());
        assert!(cfg.scheduling.is_none());
    }

    #[test]
    fn shop_config_parses_product_list() {
        let cfg: ShopConfig = serde_json::from_str(
            r#"{
                "default_currency": "CHF",
                "products": [
                    { "sku": "oil-30", "name": "Argan Oil 30ml", "unit_amount": 2450 }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.products.len(), 1);
        assert_eq!(cfg.products[0].unit_amount, 2450);
        assert!(cfg.products[0].currency.is_none());
    }
}
