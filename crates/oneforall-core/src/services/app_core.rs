//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters receive an
//! `AppCore` instance and use it to access all functionality.

use crate::config::UploadLimits;
use crate::ports::Repos;

use super::{ConversionService, ExamService, ToolService};

/// The core application facade.
///
/// `AppCore` provides access to all core services. It's constructed at the
/// adapter's composition root (`bootstrap.rs`) with concrete repository
/// implementations.
///
/// # Example
///
/// ```ignore
/// let repos = StoreFactory::build_repos(store);
/// let core = AppCore::new(repos, UploadLimits::default());
///
/// let exams = core.exams().list().await?;
/// ```
pub struct AppCore {
    exams: ExamService,
    tools: ToolService,
    conversions: ConversionService,
}

impl AppCore {
    /// Create a new `AppCore` from repositories and upload limits.
    pub fn new(repos: Repos, limits: UploadLimits) -> Self {
        Self {
            exams: ExamService::new(repos.exams),
            tools: ToolService::new(repos.tools),
            conversions: ConversionService::new(repos.conversions, limits),
        }
    }

    /// Access the exam service.
    pub const fn exams(&self) -> &ExamService {
        &self.exams
    }

    /// Access the tool service.
    pub const fn tools(&self) -> &ToolService {
        &self.tools
    }

    /// Access the conversion service.
    pub const fn conversions(&self) -> &ConversionService {
        &self.conversions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Exam, Tool, ToolCategory};
    use crate::services::test_support::{InMemoryConversions, StaticExams, StaticTools};
    use chrono::Utc;
    use std::sync::Arc;

    fn sample_exam(id: &str) -> Exam {
        let now = Utc::now();
        Exam {
            id: id.into(),
            title: id.to_uppercase(),
            icon: "📝".into(),
            description: String::new(),
            documents: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    fn core() -> AppCore {
        let tools = vec![ToolCategory {
            id: "image".into(),
            category: "Image Tools".into(),
            icon: "🖼️".into(),
            tools: vec![Tool {
                id: "resize".into(),
                category: "image".into(),
                icon: "📐".into(),
                name: "Resize".into(),
                description: "Resize an image".into(),
                logo: String::new(),
            }],
        }];
        let repos = Repos::new(
            Arc::new(StaticExams(vec![sample_exam("neet"), sample_exam("jee")])),
            Arc::new(StaticTools(tools)),
            Arc::new(InMemoryConversions::default()),
        );
        AppCore::new(repos, UploadLimits::default())
    }

    #[tokio::test]
    async fn test_exam_lookup_through_facade() {
        let core = core();
        assert_eq!(core.exams().list().await.unwrap().len(), 2);
        assert_eq!(core.exams().get("jee").await.unwrap().title, "JEE");
        assert!(core.exams().get("gate").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_tools_through_facade() {
        let tools = core().tools().list().await.unwrap();
        assert_eq!(tools[0].tools[0].name, "Resize");
    }

    #[tokio::test]
    async fn test_limits_are_passed_to_conversion_service() {
        let core = core();
        assert_eq!(
            core.conversions().limits().max_file_size,
            crate::config::MAX_FILE_SIZE
        );
    }
}
