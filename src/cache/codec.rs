//! Persistência do cache LRU em JSON.
//!
//! O arquivo é um objeto JSON plano que mapeia cada chave para o seu valor e
//! sua posição na ordem de recência (`rank` 0 = menos recente):
//!
//! ```json
//! {
//!   "3f1a...": { "value": "bonjour", "rank": 0 },
//!   "9bc2...": { "value": "salut", "rank": 1 }
//! }
//! ```

use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::lru::LruCache;
use crate::{LingoError, LingoResult};

/// Registro persistido de uma entrada.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryRecord {
    /// Valor em cache.
    pub value: String,
    /// Posição na ordem de recência, da menos para a mais recente.
    pub rank: usize,
}

/// Serializa o cache completo, preservando a ordem de recência.
pub fn encode(cache: &LruCache) -> LingoResult<Vec<u8>> {
    let records: BTreeMap<&str, EntryRecord> = cache
        .iter()
        .enumerate()
        .map(|(rank, (key, value))| {
            (
                key,
                EntryRecord {
                    value: value.to_string(),
                    rank,
                },
            )
        })
        .collect();

    Ok(serde_json::to_vec_pretty(&records)?)
}

/// Reconstrói um cache a partir da forma serializada.
///
/// As entradas são reinseridas em ordem crescente de `rank`; se houver mais
/// entradas que `capacity`, as menos recentes são descartadas.
pub fn decode(bytes: &[u8], capacity: NonZeroUsize) -> LingoResult<LruCache> {
    let records: BTreeMap<String, EntryRecord> =
        serde_json::from_slice(bytes).map_err(|e| LingoError::CorruptCache(e.to_string()))?;

    let mut ordered: Vec<(String, EntryRecord)> = records.into_iter().collect();
    ordered.sort_by(|(ka, a), (kb, b)| a.rank.cmp(&b.rank).then_with(|| ka.cmp(kb)));

    let mut cache = LruCache::new(capacity);
    for (key, record) in ordered {
        cache.set(key, record.value);
    }

    Ok(cache)
}

/// Carrega o cache de um arquivo.
///
/// Arquivo inexistente resulta em cache vazio.
pub fn load(path: &Path, capacity: NonZeroUsize) -> LingoResult<LruCache> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Cache file not found, starting empty");
            return Ok(LruCache::new(capacity));
        }
        Err(e) => return Err(e.into()),
    };

    decode(&bytes, capacity).map_err(|e| match e {
        LingoError::CorruptCache(reason) => {
            LingoError::CorruptCache(format!("{}: {}", path.display(), reason))
        }
        other => other,
    })
}

/// Salva o cache completo em um arquivo, sobrescrevendo-o.
pub fn save(cache: &LruCache, path: &Path) -> LingoResult<()> {
    let bytes = encode(cache)?;
    std::fs::write(path, bytes)?;

    tracing::debug!(path = %path.display(), entries = cache.len(), "Cache saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cap(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn keys(cache: &LruCache) -> Vec<String> {
        cache.iter().map(|(k, _)| k.to_string()).collect()
    }

    #[test]
    fn test_roundtrip_preserves_values_and_order() {
        let mut cache = LruCache::new(cap(10));
        cache.set("a", "1");
        cache.set("b", "2");
        cache.set("c", "3");
        cache.get("a");

        let bytes = encode(&cache).unwrap();
        let mut restored = decode(&bytes, cap(10)).unwrap();

        assert_eq!(keys(&restored), vec!["b", "c", "a"]);
        assert_eq!(restored.get("a"), Some("1"));
        assert_eq!(restored.get("b"), Some("2"));
        assert_eq!(restored.get("c"), Some("3"));
    }

    #[test]
    fn test_encoded_shape_is_flat_mapping() {
        let mut cache = LruCache::new(cap(10));
        cache.set("k1", "v1");
        cache.set("k2", "v2");

        let bytes = encode(&cache).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["k1"]["value"], "v1");
        assert_eq!(json["k1"]["rank"], 0);
        assert_eq!(json["k2"]["rank"], 1);
        assert!(json["k1"].get("next").is_none());
    }

    #[test]
    fn test_encode_empty() {
        let cache = LruCache::new(cap(10));
        let bytes = encode(&cache).unwrap();
        let restored = decode(&bytes, cap(10)).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn test_decode_over_capacity_keeps_most_recent() {
        let json = r#"{
            "old": { "value": "1", "rank": 0 },
            "mid": { "value": "2", "rank": 1 },
            "new": { "value": "3", "rank": 2 }
        }"#;

        let restored = decode(json.as_bytes(), cap(2)).unwrap();
        assert_eq!(keys(&restored), vec!["mid", "new"]);
    }

    #[test]
    fn test_decode_malformed() {
        let result = decode(b"{ not json", cap(10));
        assert!(matches!(result, Err(LingoError::CorruptCache(_))));

        // Estrutura válida em JSON mas com formato errado
        let result = decode(br#"{"k": "v"}"#, cap(10));
        assert!(matches!(result, Err(LingoError::CorruptCache(_))));

        let result = decode(br#"[1, 2, 3]"#, cap(10));
        assert!(matches!(result, Err(LingoError::CorruptCache(_))));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");

        let cache = load(&path, cap(10)).unwrap();
        assert!(cache.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("en__fr.json");

        let mut cache = LruCache::new(cap(10));
        cache.set("hello", "bonjour");
        save(&cache, &path).unwrap();

        let mut loaded = load(&path, cap(10)).unwrap();
        assert_eq!(loaded.get("hello"), Some("bonjour"));
    }

    #[test]
    fn test_load_corrupt_file_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("en__fr.json");
        std::fs::write(&path, "garbage").unwrap();

        match load(&path, cap(10)) {
            Err(LingoError::CorruptCache(msg)) => assert!(msg.contains("en__fr.json")),
            other => panic!("expected CorruptCache, got {:?}", other.map(|c| c.len())),
        }
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = load(dir.path(), cap(10));
        assert!(matches!(result, Err(LingoError::Io(_))));
    }
}
