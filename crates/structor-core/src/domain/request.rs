use serde::Serialize;

use crate::domain::{error::DomainError, name::ProjectName};

/// Input to a scaffold run: who to create, and from what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldRequest {
    project_name: ProjectName,
    template_name: String,
}

impl ScaffoldRequest {
    /// Build a request, rejecting names that sanitizing would alter.
    pub fn new(project_name: &str, template_name: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            project_name: ProjectName::parse(project_name)?,
            template_name: template_name.into(),
        })
    }

    /// Build a request from the sanitized form of `project_name`.
    pub fn sanitized(
        project_name: &str,
        template_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            project_name: ProjectName::sanitized(project_name)?,
            template_name: template_name.into(),
        })
    }

    pub fn project_name(&self) -> &ProjectName {
        &self.project_name
    }

    pub fn template_name(&self) -> &str {
        &self.template_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_template_name_verbatim() {
        let req = ScaffoldRequest::new("demo", "Web").unwrap();
        assert_eq!(req.project_name().as_str(), "demo");
        assert_eq!(req.template_name(), "Web");
    }

    #[test]
    fn new_rejects_invalid_names() {
        assert!(ScaffoldRequest::new("a|b", "web").is_err());
        assert!(ScaffoldRequest::new("", "web").is_err());
    }

    #[test]
    fn sanitized_cleans_names() {
        let req = ScaffoldRequest::sanitized("a|b", "web").unwrap();
        assert_eq!(req.project_name().as_str(), "ab");
    }
}
