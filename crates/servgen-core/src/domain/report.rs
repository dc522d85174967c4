//! What a generation run produced.

use std::fmt;
use std::path::PathBuf;

/// The type of class a written file represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Service,
    Model,
    Test,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Service => write!(f, "Service"),
            Self::Model => write!(f, "Model"),
            Self::Test => write!(f, "Test"),
        }
    }
}

/// One file written during a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    /// Path relative to the project root.
    pub path: PathBuf,
}

/// Everything a generation run wrote, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub artifacts: Vec<Artifact>,
}

impl GenerationReport {
    pub fn push(&mut self, kind: ArtifactKind, path: PathBuf) {
        self.artifacts.push(Artifact { kind, path });
    }

    /// The primary (service) artifact, if one was written.
    pub fn service(&self) -> Option<&Artifact> {
        self.artifacts
            .iter()
            .find(|a| a.kind == ArtifactKind::Service)
    }

    /// Artifacts written as side effects of the main generation (models
    /// created on confirmation), in write order.
    pub fn side_artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts
            .iter()
            .filter(|a| a.kind == ArtifactKind::Model)
    }

    /// Label for the success line: `Service` or `Service and test`.
    pub fn summary(&self) -> String {
        let has_test = self.artifacts.iter().any(|a| a.kind == ArtifactKind::Test);
        if has_test {
            "Service and test".to_string()
        } else {
            "Service".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_without_test() {
        let mut report = GenerationReport::default();
        report.push(ArtifactKind::Service, "app/Services/OrderService.php".into());
        assert_eq!(report.summary(), "Service");
    }

    #[test]
    fn summary_with_test() {
        let mut report = GenerationReport::default();
        report.push(ArtifactKind::Service, "app/Services/OrderService.php".into());
        report.push(ArtifactKind::Test, "tests/OrderServiceTest.php".into());
        assert_eq!(report.summary(), "Service and test");
    }

    #[test]
    fn side_artifacts_only_lists_models() {
        let mut report = GenerationReport::default();
        report.push(ArtifactKind::Model, "app/Models/Order.php".into());
        report.push(ArtifactKind::Service, "app/Services/OrderService.php".into());
        assert_eq!(report.side_artifacts().count(), 1);
        assert!(report.service().is_some());
    }
}
