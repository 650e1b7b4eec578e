use std::fmt;

use anyhow::{Result, bail};
use aws_credential_types::Credentials;
use config::{Config, File, FileFormat};
use serde::Deserialize;
use tracing::{debug, info};

/// Looked up relative to the working directory.
pub const CONFIG_FILE: &str = "conf.yaml";

#[derive(Deserialize)]
pub struct Conf {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub model_id: String,
}

impl fmt::Debug for Conf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conf")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("model_id", &self.model_id)
            .finish()
    }
}

impl Conf {
    /// Static credentials; no session token and no expiry.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            &self.access_key_id,
            &self.secret_access_key,
            None,
            None,
            CONFIG_FILE,
        )
    }

    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("access_key_id", &self.access_key_id),
            ("secret_access_key", &self.secret_access_key),
            ("model_id", &self.model_id),
        ] {
            if value.trim().is_empty() {
                bail!("{} must not be empty", field);
            }
        }
        Ok(())
    }
}

pub fn load_conf(path: &str) -> Result<Conf> {
    debug!("Reading configuration from {}", path);
    let settings = Config::builder()
        .add_source(File::new(path, FileFormat::Yaml))
        .build()?;

    let conf: Conf = settings.try_deserialize()?;
    conf.validate()?;

    info!("Loaded configuration for model: {}", conf.model_id);
    Ok(conf)
}
