//! Tipos de erro do metalingo.

use thiserror::Error;

/// Tipo de resultado padrão do metalingo.
pub type LingoResult<T> = Result<T, LingoError>;

/// Categoria de um erro, usada no relatório final e no código de saída.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Problema de configuração ou de uso que o usuário pode corrigir.
    Usage,
    /// Falha inesperada em tempo de execução.
    Runtime,
}

impl ErrorKind {
    /// Código de saída do processo para esta categoria.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Usage => 2,
            ErrorKind::Runtime => 1,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Usage => write!(f, "erro de uso"),
            ErrorKind::Runtime => write!(f, "erro inesperado"),
        }
    }
}

/// Erros possíveis no metalingo.
#[derive(Error, Debug)]
pub enum LingoError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Configuração não encontrada em: {0}")]
    ConfigNotFound(String),

    #[error("Configuração já existe em: {0}")]
    ConfigExists(String),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Arquivo de cache corrompido: {0}")]
    CorruptCache(String),

    #[error("Código de idioma inválido: '{0}'")]
    InvalidLanguageCode(String),

    #[error("Idioma '{0}' não encontrado")]
    UnknownLanguage(String),

    #[error("Campo '{0}' não encontrado")]
    UnknownField(String),

    #[error("Metadados não encontrados: {0}")]
    MetadataNotFound(String),

    #[error("Backend '{0}' não encontrado ou não disponível")]
    BackendNotFound(String),

    #[error("Backend '{0}' falhou: {1}")]
    BackendFailed(String, String),

    #[error("Timeout ao executar '{0}'")]
    BackendTimeout(String),

    #[error("Erro no prompt interativo: {0}")]
    Prompt(String),

    #[error("{0}")]
    Other(String),
}

impl LingoError {
    /// Cria um erro genérico.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Classifica o erro como erro de uso ou erro inesperado.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LingoError::Config(_)
            | LingoError::ConfigNotFound(_)
            | LingoError::ConfigExists(_)
            | LingoError::TomlParse(_)
            | LingoError::InvalidLanguageCode(_)
            | LingoError::UnknownLanguage(_)
            | LingoError::UnknownField(_)
            | LingoError::MetadataNotFound(_)
            | LingoError::BackendNotFound(_) => ErrorKind::Usage,

            LingoError::TomlSerialize(_)
            | LingoError::Io(_)
            | LingoError::Json(_)
            | LingoError::CorruptCache(_)
            | LingoError::BackendFailed(_, _)
            | LingoError::BackendTimeout(_)
            | LingoError::Prompt(_)
            | LingoError::Other(_) => ErrorKind::Runtime,
        }
    }
}

#[cfg(feature = "cli")]
impl From<dialoguer::Error> for LingoError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt(err.to_string())
    }
}
