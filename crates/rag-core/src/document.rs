use serde::{Deserialize, Serialize};

/// One corpus passage with its embedding, as stored in the vector store file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorRecord {
    pub id: String,
    pub title: String,
    pub text: String,
    pub embedding: Vec<f32>,
}

/// A record scored against one query; only lives for a single retrieval call
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRecord {
    pub record: VectorRecord,
    pub similarity: f32,
}

impl RankedRecord {
    pub fn id(&self) -> &str {
        &self.record.id
    }

    pub fn title(&self) -> &str {
        &self.record.title
    }

    pub fn text(&self) -> &str {
        &self.record.text
    }
}

/// Generated (or placeholder) content for one planned section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionResult {
    pub section: String,
    pub content: String,
}

impl SectionResult {
    /// Placeholder used when a section's pipeline fails
    pub fn placeholder(section: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self {
            section: section.into(),
            content: format!("Error generating section: {}", message),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.content.starts_with("Error generating section:")
    }
}

/// Sections in planned order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Article {
    pub sections: Vec<SectionResult>,
}

impl Article {
    /// Render as `## {title}\n\n{content}` blocks separated by blank lines
    pub fn render(&self) -> String {
        self.sections
            .iter()
            .map(|s| format!("## {}\n\n{}", s.section, s.content))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
