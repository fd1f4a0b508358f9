//! # metalingo
//!
//! Tradutor de metadados do fastlane com cache LRU persistente.
//!
//! metalingo lê os campos de texto do idioma de origem (`<locale>/<campo>.txt`),
//! traduz cada um por um programa externo e grava o resultado nas pastas dos
//! idiomas de destino. Traduções já feitas ficam num cache LRU limitado, um
//! arquivo JSON por par de idiomas.
//!
//! ## Módulos
//!
//! - [`cli`] - Interface de linha de comando
//! - [`translation`] - Catálogos, arquivos de metadados e motor de tradução
//! - [`backends`] - Wrappers para os programas de tradução
//! - [`cache`] - Cache LRU persistente de traduções
//! - [`types`] - Configuração e erros

pub mod backends;
pub mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod translation;
pub mod types;

pub use types::config::Config;
pub use types::errors::{ErrorKind, LingoError, LingoResult};
