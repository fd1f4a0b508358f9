//! Trait base para backends de tradução.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::{LingoError, LingoResult};

/// Trait para backends de tradução.
///
/// Cada backend encapsula um programa externo que recebe o texto na entrada
/// padrão e imprime a tradução na saída padrão.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Retorna o nome do backend.
    fn name(&self) -> &str;

    /// Retorna o comando executado.
    fn command(&self) -> &str;

    /// Verifica se o programa está disponível no sistema.
    async fn is_available(&self) -> bool {
        Command::new(self.command())
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .await
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Retorna a versão do programa.
    async fn version(&self) -> LingoResult<String> {
        let output = Command::new(self.command())
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| spawn_error(self.name(), e))?;

        let version = String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .unwrap_or("unknown")
            .to_string();

        Ok(version)
    }

    /// Traduz um texto.
    ///
    /// # Arguments
    ///
    /// * `text` - Texto a traduzir
    /// * `source` - Código do idioma de origem
    /// * `target` - Código do idioma de destino
    async fn translate(&self, text: &str, source: &str, target: &str) -> LingoResult<String>;
}

/// Executa um comando passando `input` pela entrada padrão, com timeout.
///
/// Retorna a saída padrão sem a quebra de linha final.
pub(crate) async fn run_with_input(
    backend: &str,
    mut cmd: Command,
    input: &str,
    timeout: Duration,
) -> LingoResult<String> {
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let run = async {
        let mut child = cmd.spawn().map_err(|e| spawn_error(backend, e))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.as_bytes()).await?;
            // Fecha a entrada para o programa ver EOF
            drop(stdin);
        }

        Ok::<_, LingoError>(child.wait_with_output().await?)
    };

    let output = match tokio::time::timeout(timeout, run).await {
        Ok(result) => result?,
        Err(_) => return Err(LingoError::BackendTimeout(backend.to_string())),
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(LingoError::BackendFailed(
            backend.to_string(),
            format!("{} ({})", stderr.trim(), output.status),
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let translation = stdout.trim_end_matches(['\n', '\r']).to_string();

    if translation.trim().is_empty() {
        return Err(LingoError::BackendFailed(
            backend.to_string(),
            "Resposta vazia".to_string(),
        ));
    }

    Ok(translation)
}

fn spawn_error(backend: &str, e: std::io::Error) -> LingoError {
    if e.kind() == std::io::ErrorKind::NotFound {
        LingoError::BackendNotFound(backend.to_string())
    } else {
        LingoError::BackendFailed(backend.to_string(), e.to_string())
    }
}
