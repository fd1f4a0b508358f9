//! Leitura e escrita dos arquivos de metadados do fastlane.

use std::path::{Path, PathBuf};

use super::field::Field;
use crate::{LingoError, LingoResult};

/// Caminho do arquivo de um campo: `<metadata>/<locale>/<campo>.txt`.
pub fn field_path(metadata_folder: &Path, locale_folder: &str, field: Field) -> PathBuf {
    metadata_folder
        .join(locale_folder)
        .join(format!("{}.txt", field.as_str()))
}

/// Lê o conteúdo de um campo.
pub fn read(path: &Path) -> LingoResult<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(LingoError::MetadataNotFound(path.display().to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Escreve o conteúdo de um campo, criando a pasta do locale se preciso.
pub fn write(path: &Path, content: &str) -> LingoResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_field_path() {
        let path = field_path(Path::new("fastlane/metadata"), "fr-FR", Field::ReleaseNotes);
        assert_eq!(
            path,
            PathBuf::from("fastlane/metadata/fr-FR/release_notes.txt")
        );
    }

    #[test]
    fn test_read_missing() {
        let dir = TempDir::new().unwrap();
        let result = read(&dir.path().join("en-US/name.txt"));
        assert!(matches!(result, Err(LingoError::MetadataNotFound(_))));
    }

    #[test]
    fn test_write_creates_locale_folder() {
        let dir = TempDir::new().unwrap();
        let path = field_path(dir.path(), "de-DE", Field::Name);

        write(&path, "Meine App").unwrap();
        assert_eq!(read(&path).unwrap(), "Meine App");
    }
}
