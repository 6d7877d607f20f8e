//! File-backed HTML templates.

use std::path::{Path, PathBuf};

use super::substitution::{Bindings, Substitution, substitute};
use crate::error::AppError;

/// The page templates the service renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Home,
    YearSummary,
    Compare,
}

impl TemplateKind {
    /// File name inside the template directory.
    pub fn file_name(self) -> &'static str {
        match self {
            TemplateKind::Home => "home.html",
            TemplateKind::YearSummary => "summary.html",
            TemplateKind::Compare => "compare.html",
        }
    }

    /// Substitution policy declared for this template.
    pub fn policy(self) -> Substitution {
        match self {
            TemplateKind::Home | TemplateKind::YearSummary => Substitution::Global,
            TemplateKind::Compare => Substitution::FirstOccurrence,
        }
    }

    pub fn all() -> [TemplateKind; 3] {
        [
            TemplateKind::Home,
            TemplateKind::YearSummary,
            TemplateKind::Compare,
        ]
    }
}

/// Loads templates from a directory on every render.
///
/// Files are read per request, so edits take effect without a restart.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of a template file.
    pub fn path_of(&self, kind: TemplateKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    /// Reads the raw template source.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Template`] if the file is missing or unreadable.
    pub async fn load(&self, kind: TemplateKind) -> Result<String, AppError> {
        let path = self.path_of(kind);
        tokio::fs::read_to_string(&path).await.map_err(|e| {
            tracing::warn!(path = %path.display(), "Template read failed: {e}");
            AppError::Template(e.to_string())
        })
    }

    /// Loads `kind` and applies `bindings` with the template's policy.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Template`] if the file is missing or unreadable.
    pub async fn render(&self, kind: TemplateKind, bindings: &Bindings) -> Result<String, AppError> {
        let source = self.load(kind).await?;
        Ok(substitute(&source, bindings, kind.policy()))
    }

    /// Template kinds whose file is currently absent.
    pub async fn missing(&self) -> Vec<TemplateKind> {
        let mut missing = Vec::new();
        for kind in TemplateKind::all() {
            if !tokio::fs::try_exists(self.path_of(kind))
                .await
                .unwrap_or(false)
            {
                missing.push(kind);
            }
        }
        missing
    }
}
