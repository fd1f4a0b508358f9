//! Motor de tradução.
//!
//! Planeja os pares (idioma de destino, campo) a traduzir e executa cada um,
//! consultando o cache antes de chamar o backend.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::field::Field;
use super::language::Language;
use super::metadata;
use crate::backends::{self, TranslationBackend};
use crate::cache::TranslationCache;
use crate::types::config::Config;
use crate::LingoResult;

/// Um campo a traduzir para um idioma de destino.
#[derive(Debug, Clone)]
pub struct TranslationJob {
    pub source: &'static Language,
    pub target: &'static Language,
    pub field: Field,
    pub source_path: PathBuf,
    pub target_path: PathBuf,
}

/// Resultado de um job: de onde veio a tradução.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    /// Encontrada no cache.
    CacheHit,
    /// Obtida do backend.
    Translated,
    /// Texto copiado sem tradução (vazio ou mesmo idioma).
    Unchanged,
}

/// Resumo de uma execução.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationReport {
    /// Campos escritos.
    pub jobs: usize,
    /// Traduções vindas do cache.
    pub cache_hits: usize,
    /// Chamadas ao backend.
    pub backend_calls: usize,
    /// Textos copiados sem tradução.
    pub passthrough: usize,
    /// Campos escritos por pasta de destino.
    pub per_language: BTreeMap<String, usize>,
}

impl TranslationReport {
    /// Registra o resultado de um job.
    pub fn record(&mut self, job: &TranslationJob, outcome: JobOutcome) {
        self.jobs += 1;
        match outcome {
            JobOutcome::CacheHit => self.cache_hits += 1,
            JobOutcome::Translated => self.backend_calls += 1,
            JobOutcome::Unchanged => self.passthrough += 1,
        }
        *self
            .per_language
            .entry(job.target.folder.to_string())
            .or_default() += 1;
    }
}

/// Tradutor de metadados.
pub struct Translator {
    config: Config,
    backend: Box<dyn TranslationBackend>,
    cache: Option<TranslationCache>,
}

impl Translator {
    /// Cria o tradutor com o backend da configuração.
    pub fn new(config: Config) -> LingoResult<Self> {
        let backend = backends::from_config(&config);
        Self::with_backend(config, backend)
    }

    /// Cria o tradutor com um backend específico.
    pub fn with_backend(config: Config, backend: Box<dyn TranslationBackend>) -> LingoResult<Self> {
        config.validate()?;

        let cache = if config.cache.enabled {
            Some(TranslationCache::from_config(&config.cache)?)
        } else {
            tracing::debug!("Translation cache disabled");
            None
        };

        Ok(Self {
            config,
            backend,
            cache,
        })
    }

    pub fn backend(&self) -> &dyn TranslationBackend {
        self.backend.as_ref()
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Lista os jobs da execução. O próprio idioma de origem é ignorado.
    pub fn plan(&self) -> LingoResult<Vec<TranslationJob>> {
        let settings = &self.config.translation;

        let source = Language::by_name(&settings.source_language)?;
        let targets =
            Language::languages_to_translate(&settings.target_languages, &settings.metadata_folder)?;
        let fields = Field::fields_to_translate(&settings.fields)?;

        let mut jobs = Vec::with_capacity(targets.len() * fields.len());
        for target in targets {
            if target.folder == source.folder {
                continue;
            }

            for &field in &fields {
                jobs.push(TranslationJob {
                    source,
                    target,
                    field,
                    source_path: metadata::field_path(
                        &settings.metadata_folder,
                        source.folder,
                        field,
                    ),
                    target_path: metadata::field_path(
                        &settings.metadata_folder,
                        target.folder,
                        field,
                    ),
                });
            }
        }

        tracing::debug!(jobs = jobs.len(), source = %source, "Translation planned");
        Ok(jobs)
    }

    /// Traduz um campo e grava o resultado no arquivo de destino.
    pub async fn execute(&mut self, job: &TranslationJob) -> LingoResult<JobOutcome> {
        let content = metadata::read(&job.source_path)?;
        let (translation, outcome) = self
            .translate_text(&content, job.source.code, job.target.code)
            .await?;

        metadata::write(&job.target_path, &translation)?;

        tracing::debug!(
            field = %job.field,
            target = job.target.folder,
            outcome = ?outcome,
            "Field translated"
        );
        Ok(outcome)
    }

    /// Traduz um texto, usando o cache quando habilitado.
    pub async fn translate_text(
        &mut self,
        text: &str,
        source: &str,
        target: &str,
    ) -> LingoResult<(String, JobOutcome)> {
        if text.trim().is_empty() {
            return Ok((text.to_string(), JobOutcome::Unchanged));
        }

        if let Some(cache) = self.cache.as_mut() {
            if let Some(hit) = cache.get(source, target, text)? {
                return Ok((hit, JobOutcome::CacheHit));
            }
        }

        let (translation, outcome) = if source == target {
            (text.to_string(), JobOutcome::Unchanged)
        } else {
            let translated = self.backend.translate(text, source, target).await?;
            (
                with_line_ending_of(text, translated),
                JobOutcome::Translated,
            )
        };

        if let Some(cache) = self.cache.as_mut() {
            cache.set(source, target, text, &translation)?;
        }

        Ok((translation, outcome))
    }

    /// Executa todos os jobs em sequência.
    pub async fn run(&mut self) -> LingoResult<TranslationReport> {
        let jobs = self.plan()?;
        let mut report = TranslationReport::default();

        for (i, job) in jobs.iter().enumerate() {
            let outcome = self.execute(job).await?;
            report.record(job, outcome);

            let last_for_target = jobs
                .get(i + 1)
                .map_or(true, |next| next.target.folder != job.target.folder);
            if last_for_target {
                tracing::info!("Translated {} to {}", job.source.name, job.target.name);
            }
        }

        Ok(report)
    }
}

/// Devolve a `translation` com a mesma quebra de linha final de `text`.
///
/// Os backends removem as quebras finais da saída.
fn with_line_ending_of(text: &str, translation: String) -> String {
    let body = text.trim_end_matches(['\n', '\r']);
    let ending = &text[body.len()..];
    let mut translation = translation
        .trim_end_matches(['\n', '\r'])
        .to_string();
    translation.push_str(ending);
    translation
}
