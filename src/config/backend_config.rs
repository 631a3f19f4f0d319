use serde::{Serialize, Deserialize};
use std::path::Path;

use crate::error::{Result, ZooError};
use crate::layout::convention::LayoutConvention;

/// Environment variable consulted by [`BackendConfig::from_env`].
pub const IMAGE_DATA_FORMAT_ENV: &str = "FERRITE_IMAGE_DATA_FORMAT";

/// Framework-wide settings an application reads once at its edge and then
/// passes down explicitly.
///
/// The on-disk form mirrors a backend configuration file:
/// `{ "image_data_format": "channels_last" }`. The format is kept as a raw
/// string so an unknown value surfaces as a configuration error from
/// [`layout`](Self::layout) rather than as a JSON parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_image_data_format")]
    pub image_data_format: String,
}

fn default_image_data_format() -> String {
    LayoutConvention::default().as_str().to_owned()
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig { image_data_format: default_image_data_format() }
    }
}

impl BackendConfig {
    pub fn new(layout: LayoutConvention) -> BackendConfig {
        BackendConfig { image_data_format: layout.as_str().to_owned() }
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<BackendConfig> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: BackendConfig = serde_json::from_str(&text).map_err(|e| {
            ZooError::Configuration(format!("{}: {}", path.as_ref().display(), e))
        })?;
        log::debug!("loaded backend config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads [`IMAGE_DATA_FORMAT_ENV`]; `None` when unset or blank.
    pub fn from_env() -> Option<BackendConfig> {
        BackendConfig::from_env_value(std::env::var(IMAGE_DATA_FORMAT_ENV).ok())
    }

    /// Interprets a raw value of [`IMAGE_DATA_FORMAT_ENV`].
    pub fn from_env_value(value: Option<String>) -> Option<BackendConfig> {
        match value {
            Some(value) if !value.trim().is_empty() => {
                Some(BackendConfig { image_data_format: value.trim().to_owned() })
            }
            Some(_) => {
                log::warn!("{} is set but empty; ignoring it", IMAGE_DATA_FORMAT_ENV);
                None
            }
            None => None,
        }
    }

    /// Validated layout; fails for anything but the two known conventions.
    pub fn layout(&self) -> Result<LayoutConvention> {
        self.image_data_format.parse()
    }
}

/// Picks the layout for one run: an explicit `flag` wins, then the
/// environment value, then the config file at `config_path`, then
/// channels_last. The first source present decides; an invalid value there is
/// an error rather than a fall-through.
pub fn resolve_layout(
    flag: Option<&str>,
    env_value: Option<String>,
    config_path: Option<&Path>,
) -> Result<LayoutConvention> {
    if let Some(raw) = flag {
        return raw.parse();
    }
    if let Some(config) = BackendConfig::from_env_value(env_value) {
        return config.layout();
    }
    match config_path {
        Some(path) => BackendConfig::load_json(path)?.layout(),
        None => Ok(LayoutConvention::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_defaults_to_channels_last() {
        let config: BackendConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.layout().unwrap(), LayoutConvention::ChannelsLast);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let json = r#"{"floatx": "float32", "epsilon": 1e-07, "image_data_format": "channels_first"}"#;
        let config: BackendConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.layout().unwrap(), LayoutConvention::ChannelsFirst);
    }

    #[test]
    fn unknown_format_is_a_configuration_error() {
        let config = BackendConfig { image_data_format: "nhwc".to_owned() };
        assert!(matches!(config.layout(), Err(ZooError::Configuration(_))));
    }

    #[test]
    fn round_trips_through_a_file() {
        let path = std::env::temp_dir().join(format!("ferrite-zoo-backend-{}.json", std::process::id()));
        BackendConfig::new(LayoutConvention::ChannelsFirst).save_json(&path).unwrap();
        let loaded = BackendConfig::load_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.layout().unwrap(), LayoutConvention::ChannelsFirst);
    }

    fn config_file(name: &str, format: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir()
            .join(format!("ferrite-zoo-{}-{}.json", name, std::process::id()));
        BackendConfig { image_data_format: format.to_owned() }.save_json(&path).unwrap();
        path
    }

    #[test]
    fn flag_beats_environment_and_file() {
        let path = config_file("precedence-flag", "channels_last");
        let layout = resolve_layout(
            Some("channels_first"),
            Some("channels_last".to_owned()),
            Some(&path),
        );
        let _ = std::fs::remove_file(&path);
        assert_eq!(layout.unwrap(), LayoutConvention::ChannelsFirst);
    }

    #[test]
    fn environment_beats_file() {
        let path = config_file("precedence-env", "channels_last");
        let layout = resolve_layout(None, Some("channels_first".to_owned()), Some(&path));
        let _ = std::fs::remove_file(&path);
        assert_eq!(layout.unwrap(), LayoutConvention::ChannelsFirst);
    }

    #[test]
    fn file_beats_default() {
        let path = config_file("precedence-file", "channels_first");
        let layout = resolve_layout(None, None, Some(&path));
        let _ = std::fs::remove_file(&path);
        assert_eq!(layout.unwrap(), LayoutConvention::ChannelsFirst);
    }

    #[test]
    fn nothing_set_means_channels_last() {
        assert_eq!(resolve_layout(None, None, None).unwrap(), LayoutConvention::ChannelsLast);
    }

    #[test]
    fn blank_environment_value_falls_through_to_file() {
        assert_eq!(BackendConfig::from_env_value(Some("   ".to_owned())), None);
        let path = config_file("precedence-blank", "channels_first");
        let layout = resolve_layout(None, Some(String::new()), Some(&path));
        let _ = std::fs::remove_file(&path);
        assert_eq!(layout.unwrap(), LayoutConvention::ChannelsFirst);
    }

    #[test]
    fn invalid_values_are_configuration_errors() {
        assert!(matches!(
            resolve_layout(Some("nchw"), None, None),
            Err(ZooError::Configuration(_))
        ));
        assert!(matches!(
            resolve_layout(None, Some("nchw".to_owned()), None),
            Err(ZooError::Configuration(_))
        ));
        let path = config_file("precedence-invalid", "nchw");
        let layout = resolve_layout(None, None, Some(&path));
        let _ = std::fs::remove_file(&path);
        assert!(matches!(layout, Err(ZooError::Configuration(_))));
    }

    // The only test that touches the process environment.
    #[test]
    fn from_env_reads_the_variable() {
        std::env::set_var(IMAGE_DATA_FORMAT_ENV, " channels_first ");
        let set = BackendConfig::from_env();
        std::env::set_var(IMAGE_DATA_FORMAT_ENV, "");
        let blank = BackendConfig::from_env();
        std::env::remove_var(IMAGE_DATA_FORMAT_ENV);
        let unset = BackendConfig::from_env();

        assert_eq!(set.unwrap().layout().unwrap(), LayoutConvention::ChannelsFirst);
        assert_eq!(blank, None);
        assert_eq!(unset, None);
    }

    #[test]
    fn malformed_file_is_a_configuration_error() {
        let path = std::env::temp_dir().join(format!("ferrite-zoo-bad-{}.json", std::process::id()));
        std::fs::write(&path, "not json").unwrap();
        let result = BackendConfig::load_json(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(ZooError::Configuration(_))));
    }
}
