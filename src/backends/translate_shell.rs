//! Backend para translate-shell (`trans`).

use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;

use super::base::{run_with_input, TranslationBackend};
use crate::types::config::TranslateShellConfig;
use crate::LingoResult;

/// Backend que usa translate-shell.
///
/// O motor padrão é o Google Translate.
pub struct TranslateShellBackend {
    command_name: String,
    engine: String,
    args: Vec<String>,
    timeout: Duration,
}

impl TranslateShellBackend {
    /// Cria um novo backend com valores padrão.
    pub fn new() -> Self {
        Self {
            command_name: "trans".to_string(),
            engine: "google".to_string(),
            args: Vec::new(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Cria backend a partir da configuração do TOML.
    pub fn from_config(config: &TranslateShellConfig, timeout: Duration) -> Self {
        Self {
            command_name: config.command.clone(),
            engine: config.engine.clone(),
            args: config.args.clone(),
            timeout,
        }
    }

    /// Define o timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Monta os argumentos para um par de idiomas.
    fn build_args(&self, source: &str, target: &str) -> Vec<String> {
        let mut args = vec![
            "-brief".to_string(),
            "-no-autocorrect".to_string(),
            "-no-ansi".to_string(),
            "-e".to_string(),
            self.engine.clone(),
        ];
        args.extend(self.args.iter().cloned());
        args.push(format!("{}:{}", source, target));
        args
    }
}

impl Default for TranslateShellBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationBackend for TranslateShellBackend {
    fn name(&self) -> &str {
        "translate-shell"
    }

    fn command(&self) -> &str {
        &self.command_name
    }

    async fn translate(&self, text: &str, source: &str, target: &str) -> LingoResult<String> {
        let mut cmd = Command::new(&self.command_name);
        cmd.args(self.build_args(source, target));

        tracing::debug!(
            engine = %self.engine,
            source,
            target,
            chars = text.chars().count(),
            "Calling translate-shell"
        );

        run_with_input(self.name(), cmd, text, self.timeout).await
    }
}
