use crate::dispatcher::Dispatcher;
use crate::handler::{Handler, HandlerKind, UnknownHandler};
use crate::notification::Urgency;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config read error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    UnknownHandler(#[from] UnknownHandler),
    #[error("handler {0} is listed more than once")]
    DuplicateHandler(HandlerKind),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Routing order. Defaults to email, sms, chat.
    pub handlers: Option<Vec<String>>,
    pub timeout_ms: Option<u64>,
    pub email: Option<ChannelConfig>,
    pub sms: Option<ChannelConfig>,
    pub chat: Option<ChannelConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChannelConfig {
    pub urgency: Option<Urgency>,
}

impl Config {
    pub fn template() -> &'static str {
        r#"# notifroute config
# Handlers are tried in this order; the first that accepts and delivers wins.
# handlers = ["email", "sms", "chat"]

# Per-handler delivery timeout in milliseconds. Unset means no timeout.
# timeout_ms = 5000

[email]
# urgency = "low"

[sms]
# urgency = "medium"

[chat]
# urgency = "high"
"#
    }

    /// Reads `path`, or returns defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.order().map(|_| ())
    }

    /// Handler kinds in routing order.
    pub fn order(&self) -> Result<Vec<HandlerKind>, ConfigError> {
        let Some(names) = self.handlers.as_ref() else {
            return Ok(HandlerKind::ALL.to_vec());
        };
        let mut order = Vec::with_capacity(names.len());
        for name in names {
            let kind: HandlerKind = name.parse()?;
            if order.contains(&kind) {
                return Err(ConfigError::DuplicateHandler(kind));
            }
            order.push(kind);
        }
        Ok(order)
    }

    pub fn urgency_for(&self, kind: HandlerKind) -> Urgency {
        let channel = match kind {
            HandlerKind::Email => self.email.as_ref(),
            HandlerKind::Sms => self.sms.as_ref(),
            HandlerKind::Chat => self.chat.as_ref(),
        };
        channel
            .and_then(|c| c.urgency)
            .unwrap_or_else(|| kind.default_urgency())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    pub fn build_handlers(&self) -> Result<Vec<Arc<dyn Handler>>, ConfigError> {
        Ok(self
            .order()?
            .into_iter()
            .map(|kind| kind.build(self.urgency_for(kind)))
            .collect())
    }

    pub fn build_dispatcher(&self) -> Result<Dispatcher, ConfigError> {
        let dispatcher = Dispatcher::new(self.build_handlers()?);
        Ok(match self.timeout() {
            Some(timeout) => dispatcher.with_timeout(timeout),
            None => dispatcher,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(dir) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(dir).join("notifroute/config.toml");
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config/notifroute/config.toml");
    }
    PathBuf::from("notifroute.toml")
}
