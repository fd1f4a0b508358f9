//! Testes de integração para o motor de tradução.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use metalingo::backends::TranslationBackend;
use metalingo::translation::Translator;
use metalingo::{Config, LingoError, LingoResult};
use tempfile::TempDir;

/// Backend falso que registra cada chamada.
#[derive(Clone, Default)]
struct RecordingBackend {
    calls: Arc<Mutex<Vec<(String, String, String)>>>,
    fail: bool,
}

impl RecordingBackend {
    fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationBackend for RecordingBackend {
    fn name(&self) -> &str {
        "recording"
    }

    fn command(&self) -> &str {
        "recording"
    }

    async fn translate(&self, text: &str, source: &str, target: &str) -> LingoResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), source.to_string(), target.to_string()));

        if self.fail {
            return Err(LingoError::BackendFailed(
                "recording".to_string(),
                "quota exceeded".to_string(),
            ));
        }
        Ok(text.chars().rev().collect())
    }
}

fn write_field(metadata: &Path, locale: &str, field: &str, content: &str) {
    let dir = metadata.join(locale);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(format!("{}.txt", field)), content).unwrap();
}

fn project(dir: &TempDir) -> Config {
    let metadata = dir.path().join("fastlane/metadata");
    write_field(&metadata, "en-US", "name", "Metro");
    write_field(&metadata, "en-US", "description", "Trains");
    std::fs::create_dir_all(metadata.join("ja")).unwrap();
    std::fs::create_dir_all(metadata.join("en-GB")).unwrap();
    std::fs::create_dir_all(metadata.join("screenshots")).unwrap();

    let mut config = Config::default_config();
    config.translation.metadata_folder = metadata;
    config.cache.folder = dir.path().join(".metalingo-cache");
    config
}

#[tokio::test]
async fn test_cache_avoids_second_backend_call() {
    let dir = TempDir::new().unwrap();
    let config = project(&dir);
    let backend = RecordingBackend::default();

    let mut first = Translator::with_backend(config.clone(), Box::new(backend.clone())).unwrap();
    let report = first.run().await.unwrap();
    assert_eq!(report.backend_calls, 2);

    // Nova instância, mesmo diretório de cache
    let mut second = Translator::with_backend(config, Box::new(backend.clone())).unwrap();
    let report = second.run().await.unwrap();

    // en-GB também vem do cache
    assert_eq!(report.backend_calls, 0);
    assert_eq!(report.cache_hits, 4);
    assert_eq!(backend.calls().len(), 2);
}

#[tokio::test]
async fn test_same_language_variant_is_copied() {
    let dir = TempDir::new().unwrap();
    let config = project(&dir);
    let metadata = config.translation.metadata_folder.clone();
    let backend = RecordingBackend::default();

    let mut translator = Translator::with_backend(config, Box::new(backend.clone())).unwrap();
    let report = translator.run().await.unwrap();

    // en-GB compartilha o código "en" com a origem
    assert_eq!(report.passthrough, 2);
    assert_eq!(
        std::fs::read_to_string(metadata.join("en-GB/name.txt")).unwrap(),
        "Metro"
    );
    assert_eq!(
        std::fs::read_to_string(metadata.join("ja/name.txt")).unwrap(),
        "orteM"
    );
    assert!(backend.calls().iter().all(|(_, _, target)| target == "ja"));
}

#[tokio::test]
async fn test_explicit_targets_and_fields() {
    let dir = TempDir::new().unwrap();
    let mut config = project(&dir);
    config.translation.target_languages = vec!["pt-BR".to_string()];
    config.translation.fields = vec!["description".to_string()];
    let metadata = config.translation.metadata_folder.clone();
    let backend = RecordingBackend::default();

    let mut translator = Translator::with_backend(config, Box::new(backend.clone())).unwrap();
    let report = translator.run().await.unwrap();

    assert_eq!(report.jobs, 1);
    assert_eq!(
        backend.calls(),
        vec![("Trains".to_string(), "en".to_string(), "pt".to_string())]
    );
    assert!(metadata.join("pt-BR/description.txt").exists());
    assert!(!metadata.join("pt-BR/name.txt").exists());
}

#[tokio::test]
async fn test_backend_failure_is_not_cached() {
    let dir = TempDir::new().unwrap();
    let config = project(&dir);
    let failing = RecordingBackend {
        fail: true,
        ..Default::default()
    };

    let mut translator = Translator::with_backend(config.clone(), Box::new(failing)).unwrap();
    let result = translator.run().await;
    assert!(matches!(result, Err(LingoError::BackendFailed(_, _))));

    let backend = RecordingBackend::default();
    let mut translator = Translator::with_backend(config, Box::new(backend.clone())).unwrap();
    let report = translator.run().await.unwrap();
    assert_eq!(report.backend_calls, 2);
}

#[tokio::test]
async fn test_unknown_target_folder_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let mut config = project(&dir);
    config.translation.target_languages = vec!["xx-YY".to_string()];

    let translator =
        Translator::with_backend(config, Box::new(RecordingBackend::default())).unwrap();
    let err = translator.plan().unwrap_err();

    assert_eq!(err.kind(), metalingo::ErrorKind::Usage);
}
