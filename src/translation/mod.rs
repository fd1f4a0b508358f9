//! Tradução de metadados do fastlane.
//!
//! - [`language`] - Catálogo de idiomas e detecção de locales
//! - [`field`] - Campos traduzíveis
//! - [`metadata`] - Arquivos `<locale>/<campo>.txt`
//! - [`engine`] - Planejamento e execução da tradução

pub mod engine;
pub mod field;
pub mod language;
pub mod metadata;

pub use engine::{JobOutcome, TranslationJob, TranslationReport, Translator};
pub use field::Field;
pub use language::Language;
