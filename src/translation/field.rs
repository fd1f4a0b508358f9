//! Campos de metadados traduzíveis.

use crate::{LingoError, LingoResult};

/// Um campo de metadados do fastlane (`<campo>.txt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Keywords,
    ReleaseNotes,
    Subtitle,
    PromotionalText,
}

impl Field {
    /// Todos os campos, na ordem em que são traduzidos.
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Description,
        Field::Keywords,
        Field::ReleaseNotes,
        Field::Subtitle,
        Field::PromotionalText,
    ];

    /// Nome do campo, igual ao nome do arquivo sem extensão.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Keywords => "keywords",
            Field::ReleaseNotes => "release_notes",
            Field::Subtitle => "subtitle",
            Field::PromotionalText => "promotional_text",
        }
    }

    /// Busca um campo pelo nome, sem diferenciar maiúsculas.
    pub fn from_name(name: &str) -> LingoResult<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| LingoError::UnknownField(name.to_string()))
    }

    /// Resolve os campos da configuração. Lista vazia seleciona todos.
    pub fn fields_to_translate(config_fields: &[String]) -> LingoResult<Vec<Self>> {
        if config_fields.is_empty() {
            return Ok(Self::ALL.to_vec());
        }

        config_fields.iter().map(|f| Self::from_name(f)).collect()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Field::from_name("name").unwrap(), Field::Name);
        assert_eq!(
            Field::from_name("RELEASE_NOTES").unwrap(),
            Field::ReleaseNotes
        );
        assert!(matches!(
            Field::from_name("tagline"),
            Err(LingoError::UnknownField(_))
        ));
    }

    #[test]
    fn test_empty_selects_all() {
        let fields = Field::fields_to_translate(&[]).unwrap();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn test_selected_fields_keep_order() {
        let fields =
            Field::fields_to_translate(&["keywords".to_string(), "name".to_string()]).unwrap();
        assert_eq!(fields, vec![Field::Keywords, Field::Name]);
    }

    #[test]
    fn test_names_roundtrip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.as_str()).unwrap(), field);
        }
    }
}
