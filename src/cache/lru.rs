//! Cache LRU de capacidade fixa.

use std::collections::HashMap;
use std::num::NonZeroUsize;

use super::list::{Entry, EntryId, RecencyList};

/// Capacidade padrão do cache (número de entradas).
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(cap) => cap,
    None => unreachable!(),
};

/// Estatísticas do cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Número atual de entradas.
    pub size: usize,

    /// Capacidade máxima.
    pub capacity: usize,

    /// Número de acertos (cache hits).
    pub hits: u64,

    /// Número de erros (cache misses).
    pub misses: u64,

    /// Número de entradas removidas por falta de espaço.
    pub evictions: u64,
}

impl CacheStats {
    /// Calcula a taxa de acerto.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Cache LRU de chaves e valores em texto.
///
/// Combina um índice `chave -> EntryId` com uma [`RecencyList`]. O índice e a
/// lista contêm sempre o mesmo conjunto de entradas, e `len() <= capacity()`.
#[derive(Debug)]
pub struct LruCache {
    index: HashMap<String, EntryId>,
    list: RecencyList,
    capacity: NonZeroUsize,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl LruCache {
    /// Cria um cache vazio com a capacidade dada.
    pub fn new(capacity: NonZeroUsize) -> Self {
        // Reserva até o padrão; caches maiores crescem sob demanda
        let reserve = capacity.get().min(DEFAULT_CAPACITY.get());
        Self {
            index: HashMap::with_capacity(reserve),
            list: RecencyList::with_capacity(reserve),
            capacity,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Busca um valor e o promove a mais recente.
    ///
    /// Em caso de miss, a ordem e o tamanho do cache não mudam.
    pub fn get(&mut self, key: &str) -> Option<&str> {
        match self.index.get(key).copied() {
            Some(id) => {
                self.hits += 1;
                self.list.move_to_tail(id);
                self.list.get(id).map(|e| e.value.as_str())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Busca um valor sem alterar a ordem de recência nem as estatísticas.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .and_then(|id| self.list.get(*id))
            .map(|e| e.value.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Insere ou atualiza um valor, promovendo-o a mais recente.
    ///
    /// Se a chave é nova e o cache passa da capacidade, a entrada menos
    /// recente é removida e devolvida.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<(String, String)> {
        let key = key.into();
        let value = value.into();

        if let Some(id) = self.index.get(&key).copied() {
            self.list.move_to_tail(id);
            if let Some(entry) = self.list.get_mut(id) {
                entry.value = value;
            }
            return None;
        }

        let id = self.list.append(key.clone(), value);
        self.index.insert(key, id);

        if self.list.len() > self.capacity.get() {
            return self.evict_oldest();
        }
        None
    }

    /// Remove uma chave, devolvendo seu valor.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let id = self.index.remove(key)?;
        self.list.remove(id).map(|e| e.value)
    }

    /// Limpa todo o cache.
    pub fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Itera pelas entradas da menos recente para a mais recente.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.list
            .iter()
            .map(|e: &Entry| (e.key.as_str(), e.value.as_str()))
    }

    /// Retorna estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.len(),
            capacity: self.capacity.get(),
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
        }
    }

    fn evict_oldest(&mut self) -> Option<(String, String)> {
        let head = self.list.head()?;
        let entry = self.list.remove(head)?;
        self.index.remove(&entry.key);
        self.evictions += 1;

        tracing::trace!(key = %entry.key, "Entry evicted");
        Some((entry.key, entry.value))
    }
}

impl Default for LruCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
