//! Cache de traduções particionado por par de idiomas.
//!
//! Cada par ordenado (origem, destino) tem seu próprio arquivo JSON na pasta
//! do cache. Toda operação recarrega o arquivo do par, consulta ou altera o
//! cache LRU e, no caso de `set`, regrava o arquivo inteiro.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use super::codec;
use super::lru::{CacheStats, LruCache};
use crate::types::config::CacheConfig;
use crate::{LingoError, LingoResult};

/// Separador entre os códigos de idioma no nome do arquivo.
const PAIR_SEPARATOR: &str = "__";

/// Extensão dos arquivos de cache.
const CACHE_EXTENSION: &str = "json";

/// Par ordenado de idiomas.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Nome do arquivo de cache deste par.
    fn file_name(&self) -> String {
        format!(
            "{}{}{}.{}",
            self.source, PAIR_SEPARATOR, self.target, CACHE_EXTENSION
        )
    }

    /// Reconhece um nome de arquivo gerado por [`LanguagePair::file_name`].
    fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(CACHE_EXTENSION)?.strip_suffix('.')?;
        let (source, target) = stem.split_once(PAIR_SEPARATOR)?;
        if validate_code(source).is_err() || validate_code(target).is_err() {
            return None;
        }
        Some(Self::new(source, target))
    }
}

impl std::fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.source, self.target)
    }
}

/// Cache de traduções persistido em disco.
pub struct TranslationCache {
    folder: PathBuf,
    capacity: NonZeroUsize,
    loaded: Option<LruCache>,
}

impl TranslationCache {
    /// Cria o cache, criando a pasta se ela não existir.
    pub fn new(folder: impl Into<PathBuf>, capacity: NonZeroUsize) -> LingoResult<Self> {
        let folder = folder.into();
        if !folder.exists() {
            std::fs::create_dir_all(&folder)?;
            tracing::info!("Cache directory created: {}", folder.display());
        }

        Ok(Self {
            folder,
            capacity,
            loaded: None,
        })
    }

    /// Cria o cache a partir da configuração.
    pub fn from_config(config: &CacheConfig) -> LingoResult<Self> {
        let capacity = NonZeroUsize::new(config.capacity)
            .ok_or_else(|| LingoError::config("cache.capacity deve ser maior que zero"))?;
        Self::new(&config.folder, capacity)
    }

    /// Gera a chave de cache para um texto.
    ///
    /// A chave é um hash SHA256 de origem + destino + texto, com um byte nulo
    /// separando os códigos de idioma.
    pub fn cache_key(source: &str, target: &str, text: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(source.as_bytes());
        hasher.update([0u8]);
        hasher.update(target.as_bytes());
        hasher.update([0u8]);
        hasher.update(text.as_bytes());

        hex::encode(hasher.finalize())
    }

    /// Busca uma tradução. Nunca grava em disco.
    pub fn get(&mut self, source: &str, target: &str, text: &str) -> LingoResult<Option<String>> {
        let key = Self::cache_key(source, target, text);
        let cache = self.load(source, target)?;
        let hit = cache.get(&key).map(str::to_string);

        tracing::debug!(
            source,
            target,
            hit = hit.is_some(),
            "Translation cache lookup"
        );
        Ok(hit)
    }

    /// Grava uma tradução e persiste o arquivo do par imediatamente.
    pub fn set(
        &mut self,
        source: &str,
        target: &str,
        text: &str,
        translation: &str,
    ) -> LingoResult<()> {
        let key = Self::cache_key(source, target, text);
        let path = self.file_path(source, target)?;
        let cache = self.load(source, target)?;

        if let Some((evicted, _)) = cache.set(key, translation) {
            tracing::debug!(source, target, key = %evicted, "Translation evicted");
        }

        codec::save(cache, &path)
    }

    /// Caminho do arquivo de cache de um par.
    pub fn file_path(&self, source: &str, target: &str) -> LingoResult<PathBuf> {
        validate_code(source)?;
        validate_code(target)?;
        Ok(self.folder.join(LanguagePair::new(source, target).file_name()))
    }

    /// Lista os pares que têm arquivo de cache, ordenados.
    pub fn pairs(&self) -> LingoResult<Vec<LanguagePair>> {
        if !self.folder.exists() {
            return Ok(Vec::new());
        }

        let mut pairs = Vec::new();
        for entry in std::fs::read_dir(&self.folder)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(pair) = entry
                .file_name()
                .to_str()
                .and_then(LanguagePair::from_file_name)
            {
                pairs.push(pair);
            }
        }

        pairs.sort();
        Ok(pairs)
    }

    /// Estatísticas do arquivo de um par.
    ///
    /// Só `size` e `capacity` são significativos: o cache é relido do disco a
    /// cada operação, então acertos, falhas e remoções começam em zero.
    pub fn stats(&mut self, source: &str, target: &str) -> LingoResult<CacheStats> {
        Ok(self.load(source, target)?.stats())
    }

    /// Remove o arquivo de cache de um par. Retorna `true` se havia arquivo.
    pub fn clear(&mut self, source: &str, target: &str) -> LingoResult<bool> {
        let path = self.file_path(source, target)?;
        self.loaded = None;

        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Cache file removed");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove os arquivos de todos os pares. Retorna quantos foram removidos.
    pub fn clear_all(&mut self) -> LingoResult<usize> {
        let pairs = self.pairs()?;
        let mut removed = 0;
        for pair in pairs {
            if self.clear(&pair.source, &pair.target)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Recarrega do disco o cache do par e o mantém como cache atual.
    fn load(&mut self, source: &str, target: &str) -> LingoResult<&mut LruCache> {
        let path = self.file_path(source, target)?;
        let cache = codec::load(&path, self.capacity)?;

        Ok(self.loaded.insert(cache))
    }
}

/// Rejeita códigos que escapariam da pasta ou tornariam o nome ambíguo.
///
/// `_` nas pontas colaria no separador: `en_` + `fr` e `en` + `_fr` dariam
/// ambos `en___fr.json`.
fn validate_code(code: &str) -> LingoResult<()> {
    let invalid = code.is_empty()
        || code.starts_with('_')
        || code.ends_with('_')
        || code.contains(PAIR_SEPARATOR)
        || code.contains(['/', '\\', '\0'])
        || code.contains("..");

    if invalid {
        return Err(LingoError::InvalidLanguageCode(code.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> TranslationCache {
        TranslationCache::new(dir.path().join("cache"), NonZeroUsize::new(10).unwrap()).unwrap()
    }

    #[test]
    fn test_cache_key_generation() {
        let key1 = TranslationCache::cache_key("en", "fr", "hello");
        let key2 = TranslationCache::cache_key("en", "fr", "hello");
        let key3 = TranslationCache::cache_key("en", "de", "hello");

        // Mesma entrada = mesma chave
        assert_eq!(key1, key2);

        // Idioma diferente = chave diferente
        assert_ne!(key1, key3);

        // SHA256 em hex
        assert_eq!(key1.len(), 64);
        assert!(key1.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_cache_key_separates_codes() {
        let key1 = TranslationCache::cache_key("en", "fr", "x");
        let key2 = TranslationCache::cache_key("enf", "r", "x");
        let key3 = TranslationCache::cache_key("en", "frx", "");
        assert_ne!(key1, key2);
        assert_ne!(key1, key3);
    }

    #[test]
    fn test_new_creates_folder() {
        let dir = TempDir::new().unwrap();
        let cache = store(&dir);
        assert!(cache.folder().is_dir());
    }

    #[test]
    fn test_get_on_empty_folder_creates_no_file() {
        let dir = TempDir::new().unwrap();
        let mut cache = store(&dir);

        assert_eq!(cache.get("en", "fr", "hello").unwrap(), None);
        assert!(!cache.file_path("en", "fr").unwrap().exists());
        assert!(cache.pairs().unwrap().is_empty());
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let mut cache = store(&dir);

        cache.set("en", "fr", "hello", "bonjour").unwrap();

        assert!(cache.file_path("en", "fr").unwrap().exists());
        assert_eq!(
            cache.get("en", "fr", "hello").unwrap(),
            Some("bonjour".to_string())
        );
    }

    #[test]
    fn test_pairs_are_directional() {
        let dir = TempDir::new().unwrap();
        let mut cache = store(&dir);

        cache.set("en", "fr", "hello", "bonjour").unwrap();

        assert_eq!(cache.get("fr", "en", "hello").unwrap(), None);
        assert_ne!(
            cache.file_path("en", "fr").unwrap(),
            cache.file_path("fr", "en").unwrap()
        );
    }

    #[test]
    fn test_pairs_listing() {
        let dir = TempDir::new().unwrap();
        let mut cache = store(&dir);

        cache.set("en", "fr", "a", "b").unwrap();
        cache.set("en", "zh-CN", "a", "b").unwrap();
        std::fs::write(cache.folder().join("notes.txt"), "x").unwrap();
        std::fs::write(cache.folder().join("a..b__fr.json"), "{}").unwrap();
        std::fs::write(cache.folder().join("en___fr.json"), "{}").unwrap();

        let pairs = cache.pairs().unwrap();
        assert_eq!(
            pairs,
            vec![LanguagePair::new("en", "fr"), LanguagePair::new("en", "zh-CN")]
        );
    }

    #[test]
    fn test_eviction_is_persisted() {
        let dir = TempDir::new().unwrap();
        let mut cache =
            TranslationCache::new(dir.path(), NonZeroUsize::new(2).unwrap()).unwrap();

        cache.set("en", "fr", "a", "1").unwrap();
        cache.set("en", "fr", "b", "2").unwrap();
        cache.set("en", "fr", "c", "3").unwrap();

        assert_eq!(cache.get("en", "fr", "a").unwrap(), None);
        assert_eq!(cache.stats("en", "fr").unwrap().size, 2);
    }

    #[test]
    fn test_clear_pair() {
        let dir = TempDir::new().unwrap();
        let mut cache = store(&dir);

        cache.set("en", "fr", "hello", "bonjour").unwrap();
        assert!(cache.clear("en", "fr").unwrap());
        assert!(!cache.clear("en", "fr").unwrap());
        assert_eq!(cache.get("en", "fr", "hello").unwrap(), None);
    }

    #[test]
    fn test_pair_paths_are_distinct() {
        let dir = TempDir::new().unwrap();
        let cache = store(&dir);

        assert!(cache.file_path("en_", "fr").is_err());
        assert!(cache.file_path("en", "_fr").is_err());
        assert_ne!(
            cache.file_path("en", "fr").unwrap(),
            cache.file_path("e", "nfr").unwrap()
        );
    }

    #[test]
    fn test_clear_all_skips_stray_files() {
        let dir = TempDir::new().unwrap();
        let mut cache = store(&dir);

        cache.set("en", "fr", "a", "b").unwrap();
        let stray = cache.folder().join("a..b__fr.json");
        std::fs::write(&stray, "{}").unwrap();

        assert_eq!(cache.clear_all().unwrap(), 1);
        assert!(!cache.file_path("en", "fr").unwrap().exists());
        assert!(stray.exists());
    }

    #[test]
    fn test_stats_reports_size_and_capacity() {
        let dir = TempDir::new().unwrap();
        let mut cache = store(&dir);

        cache.set("en", "fr", "a", "b").unwrap();
        cache.set("en", "fr", "c", "d").unwrap();

        let stats = cache.stats("en", "fr").unwrap();
        assert_eq!(stats.size, 2);
        assert_eq!(stats.capacity, 10);
    }

    #[test]
    fn test_clear_all() {
        let dir = TempDir::new().unwrap();
        let mut cache = store(&dir);

        cache.set("en", "fr", "a", "b").unwrap();
        cache.set("en", "de", "a", "b").unwrap();

        assert_eq!(cache.clear_all().unwrap(), 2);
        assert!(cache.pairs().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_codes_rejected() {
        let dir = TempDir::new().unwrap();
        let mut cache = store(&dir);

        for code in ["", "../etc", "en/fr", "a__b", "en_", "_fr"] {
            let result = cache.get(code, "fr", "hello");
            assert!(
                matches!(result, Err(LingoError::InvalidLanguageCode(_))),
                "code {:?} should be rejected",
                code
            );
        }
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let mut cache = store(&dir);

        let path = cache.file_path("en", "fr").unwrap();
        std::fs::write(&path, "{ broken").unwrap();

        let result = cache.get("en", "fr", "hello");
        assert!(matches!(result, Err(LingoError::CorruptCache(_))));

        // O arquivo não é descartado
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ broken");
    }

    #[test]
    fn test_from_config_rejects_zero_capacity() {
        let dir = TempDir::new().unwrap();
        let config = CacheConfig {
            enabled: true,
            folder: dir.path().to_path_buf(),
            capacity: 0,
        };
        assert!(matches!(
            TranslationCache::from_config(&config),
            Err(LingoError::Config(_))
        ));
    }

    #[test]
    fn test_file_name_roundtrip() {
        let pair = LanguagePair::new("zh-CN", "pt");
        assert_eq!(pair.file_name(), "zh-CN__pt.json");
        assert_eq!(LanguagePair::from_file_name("zh-CN__pt.json"), Some(pair));
        assert_eq!(LanguagePair::from_file_name("zh-CN.json"), None);
        assert_eq!(LanguagePair::from_file_name("en__fr.txt"), None);
        assert_eq!(LanguagePair::from_file_name("a..b__fr.json"), None);
        assert_eq!(LanguagePair::from_file_name("en___fr.json"), None);
    }
}
