//! Configuração interativa do metalingo.
//!
//! Este módulo implementa a configuração interativa usando dialoguer.

use std::path::{Path, PathBuf};

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::translation::{Field, Language};
use crate::types::config::{BackendKind, Config};
use crate::LingoResult;

/// Executa a configuração interativa.
pub fn run_interactive_config(config_path: &Path) -> LingoResult<()> {
    let theme = ColorfulTheme::default();

    println!("\n🔧 Configuração Interativa do metalingo\n");

    // Carrega config existente ou cria nova
    let mut config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        println!("Criando nova configuração...\n");
        Config::default_config()
    };

    loop {
        let options = vec![
            "Configurações Gerais",
            "Tradução (idiomas, campos)",
            "Backend",
            "Cache",
            "Salvar e Sair",
            "Sair sem Salvar",
        ];

        let selection = Select::with_theme(&theme)
            .with_prompt("O que deseja configurar?")
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => configure_general(&theme, &mut config)?,
            1 => configure_translation(&theme, &mut config)?,
            2 => configure_backend(&theme, &mut config)?,
            3 => configure_cache(&theme, &mut config)?,
            4 => {
                if let Err(e) = config.validate() {
                    println!("\n✗ Configuração inválida: {}\n", e);
                    continue;
                }
                config.save(config_path)?;
                println!("\n✓ Configuração salva em: {}\n", config_path.display());
                break;
            }
            5 => {
                if Confirm::with_theme(&theme)
                    .with_prompt("Deseja realmente sair sem salvar?")
                    .default(false)
                    .interact()?
                {
                    println!("\nSaindo sem salvar.\n");
                    break;
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// Configura opções gerais.
fn configure_general(theme: &ColorfulTheme, config: &mut Config) -> LingoResult<()> {
    println!("\n📋 Configurações Gerais\n");

    let log_levels = vec!["error", "warn", "info", "debug", "trace"];
    let current_idx = log_levels
        .iter()
        .position(|&l| l == config.general.log_level)
        .unwrap_or(2);

    let log_level_idx = Select::with_theme(theme)
        .with_prompt("Nível de log")
        .items(&log_levels)
        .default(current_idx)
        .interact()?;

    config.general.log_level = log_levels[log_level_idx].to_string();

    let log_formats = vec!["text", "json"];
    let current_format_idx = log_formats
        .iter()
        .position(|&f| f == config.general.log_format)
        .unwrap_or(0);

    let log_format_idx = Select::with_theme(theme)
        .with_prompt("Formato de log")
        .items(&log_formats)
        .default(current_format_idx)
        .interact()?;

    config.general.log_format = log_formats[log_format_idx].to_string();

    println!("\n✓ Configurações gerais atualizadas.\n");
    Ok(())
}

/// Configura idiomas, campos e pasta de metadados.
fn configure_translation(theme: &ColorfulTheme, config: &mut Config) -> LingoResult<()> {
    println!("\n🌍 Configuração da Tradução\n");

    let languages = Language::supported();
    let names: Vec<&str> = languages.iter().map(|l| l.name).collect();
    let current_idx = Language::by_name(&config.translation.source_language)
        .ok()
        .and_then(|current| names.iter().position(|&n| n == current.name))
        .unwrap_or(0);

    let source_idx = Select::with_theme(theme)
        .with_prompt("Idioma de origem")
        .items(&names)
        .default(current_idx)
        .interact()?;

    config.translation.source_language = names[source_idx].to_string();

    let targets: String = Input::with_theme(theme)
        .with_prompt("Idiomas de destino (pastas separadas por espaço, ou AUTO)")
        .default(config.translation.target_languages.join(" "))
        .interact_text()?;

    config.translation.target_languages = targets.split_whitespace().map(String::from).collect();

    let metadata_folder: String = Input::with_theme(theme)
        .with_prompt("Pasta de metadados")
        .default(config.translation.metadata_folder.display().to_string())
        .interact_text()?;

    config.translation.metadata_folder = PathBuf::from(metadata_folder);

    let fields: String = Input::with_theme(theme)
        .with_prompt(format!(
            "Campos (separados por espaço; vazio = todos: {})",
            Field::ALL.map(|f| f.as_str()).join(", ")
        ))
        .default(config.translation.fields.join(" "))
        .allow_empty(true)
        .interact_text()?;

    config.translation.fields = fields.split_whitespace().map(String::from).collect();

    println!("\n✓ Tradução configurada.\n");
    Ok(())
}

/// Configura o backend de tradução.
fn configure_backend(theme: &ColorfulTheme, config: &mut Config) -> LingoResult<()> {
    println!("\n🤖 Configuração do Backend\n");

    let kinds = vec![
        "translate-shell (trans)",
        "Comando personalizado",
    ];
    let current_idx = match config.translation.backend {
        BackendKind::TranslateShell => 0,
        BackendKind::Command => 1,
    };

    let kind_idx = Select::with_theme(theme)
        .with_prompt("Backend")
        .items(&kinds)
        .default(current_idx)
        .interact()?;

    if kind_idx == 0 {
        config.translation.backend = BackendKind::TranslateShell;
        let shell = &mut config.backends.translate_shell;

        shell.command = Input::with_theme(theme)
            .with_prompt("Comando")
            .default(shell.command.clone())
            .interact_text()?;

        shell.engine = Input::with_theme(theme)
            .with_prompt("Motor (google, bing, yandex, apertium)")
            .default(shell.engine.clone())
            .interact_text()?;

        let args: String = Input::with_theme(theme)
            .with_prompt("Argumentos extras (separados por espaço)")
            .default(shell.args.join(" "))
            .allow_empty(true)
            .interact_text()?;
        shell.args = args.split_whitespace().map(String::from).collect();
    } else {
        config.translation.backend = BackendKind::Command;
        let command = &mut config.backends.command;

        command.command = Input::with_theme(theme)
            .with_prompt("Comando")
            .default(command.command.clone())
            .interact_text()?;

        let args: String = Input::with_theme(theme)
            .with_prompt("Argumentos ({source} e {target} viram os códigos)")
            .default(command.args.join(" "))
            .allow_empty(true)
            .interact_text()?;
        command.args = args.split_whitespace().map(String::from).collect();
    }

    let timeout: u64 = Input::with_theme(theme)
        .with_prompt("Timeout por tradução (segundos)")
        .default(config.translation.timeout_secs)
        .interact_text()?;

    config.translation.timeout_secs = timeout.max(1);

    println!("\n✓ Backend configurado.\n");
    Ok(())
}

/// Configura cache.
fn configure_cache(theme: &ColorfulTheme, config: &mut Config) -> LingoResult<()> {
    println!("\n💾 Configuração do Cache\n");

    config.cache.enabled = Confirm::with_theme(theme)
        .with_prompt("Cache habilitado?")
        .default(config.cache.enabled)
        .interact()?;

    if !config.cache.enabled {
        println!("Cache desabilitado.\n");
        return Ok(());
    }

    let folder: String = Input::with_theme(theme)
        .with_prompt("Pasta do cache")
        .default(config.cache.folder.display().to_string())
        .interact_text()?;

    config.cache.folder = PathBuf::from(folder);

    let capacity: usize = Input::with_theme(theme)
        .with_prompt("Capacidade máxima por par de idiomas")
        .default(config.cache.capacity)
        .interact_text()?;

    config.cache.capacity = capacity.max(1);

    println!("\n✓ Cache configurado.\n");
    Ok(())
}

/// Mostra resumo da configuração.
pub fn show_config_summary(config: &Config) {
    let settings = &config.translation;

    println!("\n📊 Resumo da Configuração\n");
    println!("┌─────────────────────────────────────────┐");
    println!("│ Geral                                   │");
    println!("├─────────────────────────────────────────┤");
    println!("│ Log level: {:<28} │", config.general.log_level);
    println!("│ Log format: {:<27} │", config.general.log_format);
    println!("├─────────────────────────────────────────┤");
    println!("│ Tradução                                │");
    println!("├─────────────────────────────────────────┤");
    println!("│ Origem: {:<31} │", settings.source_language);
    println!("│ Destinos: {:<29} │", settings.target_languages.join(" "));
    println!("│ Campos: {:<31} │", settings.fields.join(" "));
    println!("│ Backend: {:<30} │", settings.backend.to_string());
    println!("│ Timeout: {:<29}s │", settings.timeout_secs);
    println!("├─────────────────────────────────────────┤");
    println!("│ Cache                                   │");
    println!("├─────────────────────────────────────────┤");
    println!(
        "│ Habilitado: {:<27} │",
        if config.cache.enabled { "Sim" } else { "Não" }
    );
    if config.cache.enabled {
        println!("│ Pasta: {:<32} │", config.cache.folder.display().to_string());
        println!("│ Capacidade: {:<27} │", config.cache.capacity);
    }
    println!("└─────────────────────────────────────────┘");
    println!();
}
