//! Implementação dos comandos CLI do metalingo.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};

use crate::backends;
use crate::cache::TranslationCache;
use crate::translation::{metadata, Field, Language, TranslationReport, Translator};
use crate::types::config::{Config, CONFIG_FILE_NAME};
use crate::{LingoError, LingoResult};

/// Initializes configuration in the specified directory.
pub async fn init(path: Option<PathBuf>) -> LingoResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    // Create directory if it doesn't exist
    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join(CONFIG_FILE_NAME);
    let config = Config::create_initial(&config_path)?;

    let cache_dir = target_dir.join(&config.cache.folder);
    if !cache_dir.exists() {
        std::fs::create_dir_all(&cache_dir)?;
        tracing::info!("Cache directory created: {}", cache_dir.display());
    }

    update_gitignore(&target_dir, &config.cache.folder)?;

    println!("metalingo initialized successfully!");
    println!("Configuration created at: {}", config_path.display());
    println!("Cache directory: {}", config.cache.folder.display());
    println!();
    println!("Next steps:");
    println!("  1. Check the translation backend: metalingo status");
    println!("  2. Configure languages and fields: metalingo config");
    println!("  3. Translate: metalingo translate");

    Ok(())
}

/// Updates or creates .gitignore to include the cache folder.
fn update_gitignore(target_dir: &Path, cache_folder: &Path) -> LingoResult<()> {
    let gitignore_path = target_dir.join(".gitignore");
    let bare_entry = cache_folder
        .to_string_lossy()
        .trim_start_matches("./")
        .trim_end_matches('/')
        .to_string();
    let entry = format!("{}/", bare_entry);
    let comment = "# metalingo - translation cache";

    if gitignore_path.exists() {
        let content = std::fs::read_to_string(&gitignore_path)?;

        if content
            .lines()
            .any(|line| line.trim() == entry || line.trim() == bare_entry)
        {
            tracing::debug!(".gitignore already contains {}", entry);
            return Ok(());
        }

        let mut new_content = content.trim_end().to_string();
        if !new_content.is_empty() {
            new_content.push_str("\n\n");
        }
        new_content.push_str(comment);
        new_content.push('\n');
        new_content.push_str(&entry);
        new_content.push('\n');

        std::fs::write(&gitignore_path, new_content)?;
        println!(".gitignore updated with {}", entry);
    } else {
        std::fs::write(&gitignore_path, format!("{}\n{}\n", comment, entry))?;
        println!(".gitignore created with {}", entry);
    }

    Ok(())
}

/// Traduz os metadados com barra de progresso.
pub async fn translate(config: &Config, no_cache: bool) -> LingoResult<TranslationReport> {
    let mut config = config.clone();
    if no_cache {
        config.cache.enabled = false;
    }

    let mut translator = Translator::new(config)?;
    let jobs = translator.plan()?;

    if jobs.is_empty() {
        println!("Nada a traduzir: nenhum idioma de destino encontrado.");
        return Ok(TranslationReport::default());
    }

    tracing::info!(
        backend = translator.backend().name(),
        cache = translator.cache_enabled(),
        "Translating {} fields",
        jobs.len()
    );

    let progress = ProgressBar::new(jobs.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    let mut report = TranslationReport::default();
    for job in &jobs {
        progress.set_message(format!("{} ({})", job.target.folder, job.field));

        let outcome = match translator.execute(job).await {
            Ok(outcome) => outcome,
            Err(e) => {
                progress.abandon();
                return Err(e);
            }
        };

        report.record(job, outcome);
        progress.inc(1);
    }
    progress.finish_and_clear();

    print_report(&report);
    Ok(report)
}

fn print_report(report: &TranslationReport) {
    println!("Tradução concluída: {} campos", report.jobs);
    println!("  do backend: {}", report.backend_calls);
    println!("  do cache:   {}", report.cache_hits);
    if report.passthrough > 0 {
        println!("  copiados:   {}", report.passthrough);
    }
    println!();
    for (folder, count) in &report.per_language {
        println!("  {:<10} {} campos", folder, count);
    }
}

/// Mostra status do backend configurado.
pub async fn status(config: &Config) -> LingoResult<()> {
    println!("Verificando backend de tradução...\n");

    let backend = backends::from_config(config);
    let available = backend.is_available().await;
    let status_icon = if available { "✓" } else { "✗" };
    let status_text = if available {
        "disponível"
    } else {
        "não encontrado"
    };

    println!(
        "  {} {} ({}) - {}",
        status_icon,
        backend.name(),
        backend.command(),
        status_text
    );

    if available {
        if let Ok(version) = backend.version().await {
            println!("      versão: {}", version);
        }
    }

    println!();
    if config.cache.enabled {
        println!(
            "  cache: {} (capacidade {} por par)",
            config.cache.folder.display(),
            config.cache.capacity
        );
    } else {
        println!("  cache: desabilitado");
    }

    if !available {
        println!();
        println!("Dica: instale translate-shell ou configure [backends.command].");
    }

    Ok(())
}

/// Configura opções interativamente.
pub async fn config_cmd(config_path: &Path) -> LingoResult<()> {
    use super::interactive::{run_interactive_config, show_config_summary};

    // Mostra resumo antes de editar
    if config_path.exists() {
        let config = Config::load(config_path)?;
        show_config_summary(&config);
    }

    run_interactive_config(config_path)
}

/// Diagnostica problemas de configuração.
pub async fn doctor(config: &Config) -> LingoResult<()> {
    println!("Diagnosticando configuração do metalingo...\n");

    let mut issues: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    match config.validate() {
        Ok(()) => println!("✓ Configuração válida"),
        Err(e) => issues.push(e.to_string()),
    }

    let settings = &config.translation;
    let metadata_ok = settings.metadata_folder.is_dir();
    if metadata_ok {
        println!(
            "✓ Pasta de metadados encontrada: {}",
            settings.metadata_folder.display()
        );
    } else {
        issues.push(format!(
            "Pasta de metadados não encontrada: {}",
            settings.metadata_folder.display()
        ));
    }

    if metadata_ok {
        if let (Ok(source), Ok(fields)) = (
            Language::by_name(&settings.source_language),
            Field::fields_to_translate(&settings.fields),
        ) {
            check_source_files(config, source, &fields, &mut warnings);
        }

        match Language::languages_to_translate(&settings.target_languages, &settings.metadata_folder)
        {
            Ok(targets) if targets.len() <= 1 => {
                warnings.push("Nenhum idioma de destino encontrado".to_string())
            }
            Ok(targets) => println!("✓ {} idiomas na pasta de metadados", targets.len()),
            Err(e) => issues.push(e.to_string()),
        }
    }

    let backend = backends::from_config(config);
    if backend.is_available().await {
        println!(
            "✓ {} está disponível (comando: {})",
            backend.name(),
            backend.command()
        );
    } else {
        issues.push(format!(
            "{} não está instalado (comando esperado: {})",
            backend.name(),
            backend.command()
        ));
    }

    // Resumo
    println!();
    if issues.is_empty() && warnings.is_empty() {
        println!("✓ Tudo OK! metalingo está pronto para uso.");
    } else {
        if !warnings.is_empty() {
            println!("Avisos:");
            for warning in warnings {
                println!("  ⚠ {}", warning);
            }
        }
        if !issues.is_empty() {
            println!("Problemas:");
            for issue in issues {
                println!("  ✗ {}", issue);
            }
        }
    }

    Ok(())
}

fn check_source_files(
    config: &Config,
    source: &Language,
    fields: &[Field],
    warnings: &mut Vec<String>,
) {
    let folder = &config.translation.metadata_folder;
    let missing: Vec<_> = fields
        .iter()
        .filter(|&&field| !metadata::field_path(folder, source.folder, field).is_file())
        .map(|field| field.as_str())
        .collect();

    if missing.is_empty() {
        println!("✓ Campos de origem presentes em {}", source.folder);
    } else {
        warnings.push(format!(
            "Campos ausentes em {}: {}",
            source.folder,
            missing.join(", ")
        ));
    }
}

/// Mostra o tamanho do cache de cada par de idiomas.
pub async fn cache_stats(config: &Config) -> LingoResult<()> {
    let mut cache = TranslationCache::from_config(&config.cache)?;
    let pairs = cache.pairs()?;

    println!("Cache: {}", cache.folder().display());
    if pairs.is_empty() {
        println!("  (vazio)");
        return Ok(());
    }

    let mut total = 0;
    for pair in pairs {
        let stats = cache.stats(&pair.source, &pair.target)?;
        total += stats.size;
        println!("  {:<12} {:>6}/{}", pair.to_string(), stats.size, stats.capacity);
    }
    println!("  total: {} entradas", total);

    Ok(())
}

/// Remove arquivos de cache. Sem par, remove todos.
pub async fn cache_clear(
    config: &Config,
    source: Option<&str>,
    target: Option<&str>,
) -> LingoResult<()> {
    let mut cache = TranslationCache::from_config(&config.cache)?;

    match (source, target) {
        (Some(source), Some(target)) => {
            if cache.clear(source, target)? {
                println!("Cache {} -> {} removido.", source, target);
            } else {
                println!("Nenhum cache para {} -> {}.", source, target);
            }
        }
        (None, None) => {
            let removed = cache.clear_all()?;
            println!("{} arquivo(s) de cache removido(s).", removed);
        }
        _ => {
            return Err(LingoError::config(
                "informe --source e --target juntos para limpar um par",
            ))
        }
    }

    Ok(())
}

/// Mostra versão.
pub fn version() {
    println!("metalingo {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Tradutor de metadados do fastlane com cache LRU");
}
