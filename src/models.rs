//! Frontend Models
//!
//! Data structures matching the REST API payloads. The server speaks
//! camelCase JSON; everything is validated at the boundary by serde.

use serde::{Deserialize, Serialize};

/// Anything that can live inside a list view.
pub trait Entity: Clone + PartialEq + 'static {
    fn id(&self) -> &str;
}

/// Pagination metadata returned alongside every list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total_count: u32,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl Pagination {
    /// Client-side seed before the first response arrives.
    pub fn initial(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            total_count: 0,
            total_pages: 1,
            has_next_page: false,
            has_previous_page: false,
        }
    }

    /// Derive the metadata for a given page of a known result set.
    pub fn for_page(&self, page: u32) -> Self {
        Self {
            page,
            has_next_page: page < self.total_pages,
            has_previous_page: page > 1,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub user_id: String,
}

impl Entity for Client {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    NotStarted,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::NotStarted,
        ProjectStatus::InProgress,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
        ProjectStatus::Cancelled,
    ];

    /// Wire value sent in query strings and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "NOT_STARTED",
            ProjectStatus::InProgress => "IN_PROGRESS",
            ProjectStatus::OnHold => "ON_HOLD",
            ProjectStatus::Completed => "COMPLETED",
            ProjectStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "Not Started",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<ProjectStatus> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub deadline: Option<String>,
    pub status: ProjectStatus,
    pub created_at: String,
    pub updated_at: String,
    pub client_id: String,
    pub user_id: String,
}

impl Entity for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteractionType {
    Call,
    Email,
    Meeting,
    Other,
}

impl InteractionType {
    pub const ALL: [InteractionType; 4] = [
        InteractionType::Call,
        InteractionType::Email,
        InteractionType::Meeting,
        InteractionType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionType::Call => "CALL",
            InteractionType::Email => "EMAIL",
            InteractionType::Meeting => "MEETING",
            InteractionType::Other => "OTHER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InteractionType::Call => "Call",
            InteractionType::Email => "Email",
            InteractionType::Meeting => "Meeting",
            InteractionType::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<InteractionType> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub user_id: String,
}

impl Entity for Interaction {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub due_date: String,
    pub completed: bool,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub project_title: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub user_id: String,
}

impl Entity for Reminder {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_deserializes_camel_case() {
        let json = r#"{
            "page": 2,
            "limit": 10,
            "totalCount": 37,
            "totalPages": 4,
            "hasNextPage": true,
            "hasPreviousPage": true
        }"#;
        let p: Pagination = serde_json::from_str(json).unwrap();
        assert_eq!(p.page, 2);
        assert_eq!(p.total_count, 37);
        assert!(p.has_next_page);
    }

    #[test]
    fn pagination_for_page_updates_flags() {
        let p = Pagination {
            page: 1,
            limit: 10,
            total_count: 25,
            total_pages: 3,
            has_next_page: true,
            has_previous_page: false,
        };
        let next = p.for_page(3);
        assert_eq!(next.page, 3);
        assert!(!next.has_next_page);
        assert!(next.has_previous_page);
    }

    #[test]
    fn project_status_round_trips_wire_form() {
        let json = r#""IN_PROGRESS""#;
        let status: ProjectStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status, ProjectStatus::InProgress);
        assert_eq!(serde_json::to_string(&status).unwrap(), json);
        assert_eq!(status.as_str(), "IN_PROGRESS");
    }

    #[test]
    fn interaction_type_field_is_renamed() {
        let json = r#"{
            "id": "i1",
            "date": "2024-03-01T10:00:00.000Z",
            "type": "MEETING",
            "createdAt": "2024-03-01T10:00:00.000Z",
            "updatedAt": "2024-03-01T10:00:00.000Z",
            "userId": "u1"
        }"#;
        let interaction: Interaction = serde_json::from_str(json).unwrap();
        assert_eq!(interaction.kind, InteractionType::Meeting);
        assert_eq!(interaction.client_id, None);
    }

    #[test]
    fn user_display_name_falls_back_to_email() {
        let user = User {
            id: "u1".into(),
            email: "ada@example.com".into(),
            first_name: None,
            last_name: None,
            created_at: String::new(),
            updated_at: String::new(),
        };
        assert_eq!(user.display_name(), "ada@example.com");
    }
}
