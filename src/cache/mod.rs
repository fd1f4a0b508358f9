//! Cache LRU persistente de traduções.
//!
//! Este módulo implementa um cache Least Recently Used (LRU) para armazenar
//! traduções já calculadas, evitando chamadas repetidas ao backend de
//! tradução. Cada par de idiomas é persistido em seu próprio arquivo.

pub mod codec;
mod list;
mod lru;
mod store;


pub use list::{Entry, EntryId, RecencyList};
pub use lru::{CacheStats, LruCache, DEFAULT_CAPACITY};
pub use store::{LanguagePair, TranslationCache};
