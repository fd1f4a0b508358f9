//! Backends de tradução do metalingo.
//!
//! Este módulo contém os wrappers para os programas externos que fazem a
//! tradução propriamente dita: translate-shell e um comando arbitrário.

mod base;
mod command;
mod translate_shell;

use std::time::Duration;

pub use base::TranslationBackend;
pub use command::CommandBackend;
pub use translate_shell::TranslateShellBackend;

use crate::types::config::{BackendKind, Config};

/// Cria o backend escolhido na configuração.
pub fn from_config(config: &Config) -> Box<dyn TranslationBackend> {
    let timeout = Duration::from_secs(config.translation.timeout_secs);

    match config.translation.backend {
        BackendKind::TranslateShell => Box::new(TranslateShellBackend::from_config(
            &config.backends.translate_shell,
            timeout,
        )),
        BackendKind::Command => Box::new(CommandBackend::from_config(
            &config.backends.command,
            timeout,
        )),
    }
}
