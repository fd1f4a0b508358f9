//! Interface de linha de comando do metalingo.

pub mod commands;
pub mod interactive;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::config::CONFIG_FILE_NAME;

/// metalingo - Tradutor de metadados do fastlane.
#[derive(Parser, Debug)]
#[command(name = "metalingo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração.
    #[arg(short, long, global = true, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Modo verbose.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inicializa configuração no diretório atual.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Traduz os metadados para os idiomas de destino.
    Translate {
        /// Ignora o cache nesta execução.
        #[arg(long)]
        no_cache: bool,
    },

    /// Mostra status do backend de tradução.
    Status,

    /// Configura opções interativamente.
    Config,

    /// Diagnostica problemas de configuração.
    Doctor,

    /// Inspeciona ou limpa o cache de traduções.
    Cache {
        #[command(subcommand)]
        action: CacheCommand,
    },

    /// Mostra versão.
    Version,
}

/// Operações sobre o cache.
#[derive(Subcommand, Debug)]
pub enum CacheCommand {
    /// Mostra o tamanho do cache de cada par de idiomas.
    Stats,

    /// Remove arquivos de cache (todos, ou de um par).
    Clear {
        /// Código do idioma de origem (ex.: en).
        #[arg(long, requires = "target")]
        source: Option<String>,

        /// Código do idioma de destino (ex.: fr).
        #[arg(long, requires = "source")]
        target: Option<String>,
    },
}
