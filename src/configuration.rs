use serde_aux::field_attributes::deserialize_number_from_string;

/// Port used when `PORT` is absent from the environment.
pub const DEFAULT_PORT: u16 = 8081;

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    // Environment values arrive as strings, so the port needs a
    // string-or-number deserializer.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Assemble the runtime settings.
///
/// The only external input is the `PORT` environment variable, a bare
/// port number. Everything else is a built-in default: wildcard host,
/// port 8081. A `PORT` value that does not parse as a port is an error,
/// not a silent fallback.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let mut builder = config::Config::builder()
        .set_default("application.host", "0.0.0.0")?
        .set_default("application.port", i64::from(DEFAULT_PORT))?;
    if let Ok(port) = std::env::var("PORT") {
        builder = builder.set_override("application.port", port)?;
    }
    builder.build()?.try_deserialize::<Settings>()
}
