//! Catálogo de idiomas suportados.
//!
//! Cada idioma liga o nome usado na configuração, a pasta de locale do
//! fastlane e o código enviado ao backend de tradução.

use std::path::Path;

use crate::types::config::AUTO_LANGUAGES;
use crate::{LingoError, LingoResult};

/// Um idioma do catálogo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// Nome legível, usado em `translation.source_language`.
    pub name: &'static str,
    /// Pasta do locale em `fastlane/metadata`.
    pub folder: &'static str,
    /// Código de idioma do backend de tradução.
    pub code: &'static str,
}

const fn lang(name: &'static str, folder: &'static str, code: &'static str) -> Language {
    Language { name, folder, code }
}

static SUPPORTED: &[Language] = &[
    lang("Arabic", "ar-SA", "ar"),
    lang("Catalan", "ca", "ca"),
    lang("Chinese (Simplified)", "zh-Hans", "zh-CN"),
    lang("Chinese (Traditional)", "zh-Hant", "zh-TW"),
    lang("Croatian", "hr", "hr"),
    lang("Czech", "cs", "cs"),
    lang("Danish", "da", "da"),
    lang("Dutch", "nl-NL", "nl"),
    lang("English (Australia)", "en-AU", "en"),
    lang("English (Canada)", "en-CA", "en"),
    lang("English (United Kingdom)", "en-GB", "en"),
    lang("English", "en-US", "en"),
    lang("Finnish", "fi", "fi"),
    lang("French (Canada)", "fr-CA", "fr"),
    lang("French (France)", "fr-FR", "fr"),
    lang("German", "de-DE", "de"),
    lang("Greek", "el", "el"),
    lang("Hebrew", "he", "iw"),
    lang("Hindi", "hi", "hi"),
    lang("Hungarian", "hu", "hu"),
    lang("Indonesian", "id", "id"),
    lang("Italian", "it", "it"),
    lang("Japanese", "ja", "ja"),
    lang("Korean", "ko", "ko"),
    lang("Malay", "ms", "ms"),
    lang("Norwegian", "no", "no"),
    lang("Polish", "pl", "pl"),
    lang("Portuguese (Brazil)", "pt-BR", "pt"),
    lang("Portuguese (Portugal)", "pt-PT", "pt"),
    lang("Romanian", "ro", "ro"),
    lang("Russian", "ru", "ru"),
    lang("Slovak", "sk", "sk"),
    lang("Spanish (Mexico)", "es-MX", "es"),
    lang("Spanish (Spain)", "es-ES", "es"),
    lang("Swedish", "sv", "sv"),
    lang("Thai", "th", "th"),
    lang("Turkish", "tr", "tr"),
    lang("Ukrainian", "uk", "uk"),
    lang("Vietnamese", "vi", "vi"),
];

impl Language {
    /// Todos os idiomas suportados.
    pub fn supported() -> &'static [Language] {
        SUPPORTED
    }

    /// Busca pelo nome, sem diferenciar maiúsculas.
    pub fn by_name(name: &str) -> LingoResult<&'static Language> {
        SUPPORTED
            .iter()
            .find(|l| l.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| LingoError::UnknownLanguage(name.to_string()))
    }

    /// Busca pela pasta do fastlane.
    pub fn by_folder(folder: &str) -> LingoResult<&'static Language> {
        SUPPORTED
            .iter()
            .find(|l| l.folder == folder)
            .ok_or_else(|| LingoError::UnknownLanguage(folder.to_string()))
    }

    /// Resolve os idiomas de destino a partir da configuração.
    ///
    /// Lista vazia ou começando por `AUTO` detecta os locales presentes na
    /// pasta de metadados. Caso contrário, cada entrada deve ser uma pasta
    /// conhecida.
    pub fn languages_to_translate(
        config_languages: &[String],
        metadata_folder: &Path,
    ) -> LingoResult<Vec<&'static Language>> {
        let auto = config_languages
            .first()
            .map_or(true, |first| first.eq_ignore_ascii_case(AUTO_LANGUAGES));

        if auto {
            return Self::detect_in_metadata_folder(metadata_folder);
        }

        config_languages
            .iter()
            .map(|folder| Self::by_folder(folder))
            .collect()
    }

    /// Detecta os locales conhecidos presentes na pasta de metadados.
    ///
    /// Pastas desconhecidas são ignoradas. O resultado é ordenado pela pasta.
    pub fn detect_in_metadata_folder(
        metadata_folder: &Path,
    ) -> LingoResult<Vec<&'static Language>> {
        if !metadata_folder.is_dir() {
            return Err(LingoError::MetadataNotFound(
                metadata_folder.display().to_string(),
            ));
        }

        let mut languages = Vec::new();
        for entry in std::fs::read_dir(metadata_folder)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }

            let name = entry.file_name();
            match name.to_str().map(Self::by_folder) {
                Some(Ok(language)) => languages.push(language),
                _ => tracing::debug!(folder = ?name, "Skipping unknown locale folder"),
            }
        }

        languages.sort_by_key(|l| l.folder);
        Ok(languages)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.folder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_by_name_is_case_insensitive() {
        let english = Language::by_name("ENGLISH").unwrap();
        assert_eq!(english.folder, "en-US");
        assert_eq!(english.code, "en");

        let pt = Language::by_name("portuguese (brazil)").unwrap();
        assert_eq!(pt.folder, "pt-BR");
    }

    #[test]
    fn test_by_name_unknown() {
        assert!(matches!(
            Language::by_name("Klingon"),
            Err(LingoError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn test_by_folder() {
        assert_eq!(Language::by_folder("he").unwrap().code, "iw");
        assert!(Language::by_folder("xx-YY").is_err());
    }

    #[test]
    fn test_catalog_folders_are_unique() {
        let mut folders: Vec<_> = Language::supported().iter().map(|l| l.folder).collect();
        let total = folders.len();
        folders.sort();
        folders.dedup();
        assert_eq!(folders.len(), total);
    }

    #[test]
    fn test_explicit_languages() {
        let dir = TempDir::new().unwrap();
        let langs = Language::languages_to_translate(
            &["fr-FR".to_string(), "de-DE".to_string()],
            dir.path(),
        )
        .unwrap();

        let folders: Vec<_> = langs.iter().map(|l| l.folder).collect();
        assert_eq!(folders, vec!["fr-FR", "de-DE"]);
    }

    #[test]
    fn test_explicit_unknown_language() {
        let dir = TempDir::new().unwrap();
        let result = Language::languages_to_translate(&["tlh".to_string()], dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_auto_detection() {
        let dir = TempDir::new().unwrap();
        for folder in ["fr-FR", "en-US", "review_information", "de-DE"] {
            std::fs::create_dir(dir.path().join(folder)).unwrap();
        }
        std::fs::write(dir.path().join("copyright.txt"), "x").unwrap();

        let langs = Language::languages_to_translate(&["AUTO".to_string()], dir.path()).unwrap();
        let folders: Vec<_> = langs.iter().map(|l| l.folder).collect();
        assert_eq!(folders, vec!["de-DE", "en-US", "fr-FR"]);

        // Lista vazia também detecta
        let langs = Language::languages_to_translate(&[], dir.path()).unwrap();
        assert_eq!(langs.len(), 3);
    }

    #[test]
    fn test_auto_detection_missing_folder() {
        let dir = TempDir::new().unwrap();
        let result = Language::detect_in_metadata_folder(&dir.path().join("missing"));
        assert!(matches!(result, Err(LingoError::MetadataNotFound(_))));
    }
}
