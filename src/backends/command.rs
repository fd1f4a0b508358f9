//! Backend para um comando arbitrário.

use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;

use super::base::{run_with_input, TranslationBackend};
use crate::types::config::CommandConfig;
use crate::LingoResult;

/// Backend que executa um programa configurado pelo usuário.
///
/// O texto vai pela entrada padrão e a tradução é lida da saída padrão.
/// `{source}` e `{target}` nos argumentos são trocados pelos códigos.
pub struct CommandBackend {
    command_name: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandBackend {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command_name: command.into(),
            args,
            timeout: Duration::from_secs(30),
        }
    }

    /// Cria backend a partir da configuração do TOML.
    pub fn from_config(config: &CommandConfig, timeout: Duration) -> Self {
        Self {
            command_name: config.command.clone(),
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

    fn build_args(&self, source: &str, target: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace("{source}", source).replace("{target}", target))
            .collect()
    }
}

#[async_trait]
impl TranslationBackend for CommandBackend {
    fn name(&self) -> &str {
        &self.command_name
    }

    fn command(&self) -> &str {
        &self.command_name
    }

    async fn translate(&self, text: &str, source: &str, target: &str) -> LingoResult<String> {
        let mut cmd = Command::new(&self.command_name);
        cmd.args(self.build_args(source, target));

        run_with_input(self.name(), cmd, text, self.timeout).await
    }
}
