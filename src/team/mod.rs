//! Team roster: the only editable collection.
//!
//! The public about page reads the roster (seeding it first if the
//! collection is empty); the admin surface adds, edits and removes members.

mod seed;

pub use seed::ensure_seeded;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::inquiry::{read_form, FieldErrors, FieldKind, FieldSpec};
use crate::response::ActionResponse;
use crate::store::{to_body, Collection, DocumentStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberCategory {
    Founder,
    #[serde(rename = "Team Member")]
    TeamMember,
}

/// Admin input for creating or replacing a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TeamMemberInput {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub name: String,
    #[validate(length(min = 2, message = "Role must be at least 2 characters."))]
    pub role: String,
    /// Initials shown in place of a photo.
    #[validate(length(min = 1, max = 2, message = "Avatar must be 1 or 2 characters."))]
    pub avatar: String,
    #[validate(length(min = 10, message = "Description must be at least 10 characters."))]
    pub description: String,
    pub category: MemberCategory,
}

const MEMBER_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "name", label: "Name", kind: FieldKind::Text },
    FieldSpec { name: "role", label: "Role", kind: FieldKind::Text },
    FieldSpec { name: "avatar", label: "Avatar", kind: FieldKind::Text },
    FieldSpec { name: "description", label: "Description", kind: FieldKind::Text },
    FieldSpec {
        name: "category",
        label: "Category",
        kind: FieldKind::OneOf(&["Founder", "Team Member"]),
    },
];

impl TeamMemberInput {
    pub fn parse(payload: &Value) -> Result<Self, FieldErrors> {
        let Value::Object(map) = payload else {
            return Err(FieldErrors::single("form", "Team member must be a JSON object."));
        };
        read_form(map, MEMBER_FIELDS)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub description: String,
    pub category: MemberCategory,
}

/// The roster split the way the about page shows it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRoster {
    pub founders: Vec<TeamMember>,
    pub team_members: Vec<TeamMember>,
    pub all_members: Vec<TeamMember>,
}

impl TeamRoster {
    fn from_members(all_members: Vec<TeamMember>) -> Self {
        let (founders, team_members) = all_members
            .iter()
            .cloned()
            .partition(|m| m.category == MemberCategory::Founder);
        Self {
            founders,
            team_members,
            all_members,
        }
    }
}

pub async fn list_members(store: &dyn DocumentStore) -> Result<Vec<TeamMember>> {
    let documents = store.find_all(Collection::TeamMembers).await?;
    let mut members = Vec::with_capacity(documents.len());
    for document in documents {
        match document.decode::<TeamMember>() {
            Ok(member) => members.push(member),
            Err(e) => warn!(id = %document.id, "Skipping malformed team member: {:#}", e),
        }
    }
    Ok(members)
}

/// Seed if needed, then load the roster. Failures degrade to an empty
/// roster so the about page still renders.
pub async fn get_team_members(store: &dyn DocumentStore) -> TeamRoster {
    let result = async {
        ensure_seeded(store).await?;
        list_members(store).await
    }
    .await;

    match result {
        Ok(members) => TeamRoster::from_members(members),
        Err(e) => {
            error!("Failed to fetch team members: {:#}", e);
            TeamRoster::default()
        }
    }
}

fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id.trim()).ok()
}

pub async fn add_team_member(store: &dyn DocumentStore, payload: &Value) -> ActionResponse {
    let input = match TeamMemberInput::parse(payload) {
        Ok(input) => input,
        Err(errors) => return ActionResponse::invalid(errors),
    };

    let result = async {
        let body = to_body(&input)?;
        store
            .create(Collection::TeamMembers, body)
            .await
            .context("insert team member")
    }
    .await;

    match result {
        Ok(doc) => {
            info!(id = %doc.id, name = %input.name, "Team member added");
            ActionResponse::ok("Team member added successfully.")
        }
        Err(e) => {
            error!("Failed to add team member: {:#}", e);
            ActionResponse::failed("Failed to add team member.")
        }
    }
}

pub async fn update_team_member(
    store: &dyn DocumentStore,
    id: &str,
    payload: &Value,
) -> ActionResponse {
    let input = match TeamMemberInput::parse(payload) {
        Ok(input) => input,
        Err(errors) => return ActionResponse::invalid(errors),
    };
    let Some(id) = parse_id(id) else {
        return ActionResponse::not_found("Team member not found.");
    };

    let result = async {
        let body = to_body(&input)?;
        store.update_by_id(Collection::TeamMembers, id, body).await
    }
    .await;

    match result {
        Ok(Some(_)) => {
            info!(%id, "Team member updated");
            ActionResponse::ok("Team member updated successfully.")
        }
        Ok(None) => ActionResponse::not_found("Team member not found."),
        Err(e) => {
            error!(%id, "Failed to update team member: {:#}", e);
            ActionResponse::failed("Failed to update team member.")
        }
    }
}

pub async fn delete_team_member(store: &dyn DocumentStore, id: &str) -> ActionResponse {
    let Some(id) = parse_id(id) else {
        return ActionResponse::not_found("Team member not found.");
    };

    match store.delete_by_id(Collection::TeamMembers, id).await {
        Ok(true) => {
            info!(%id, "Team member deleted");
            ActionResponse::ok("Team member deleted successfully.")
        }
        Ok(false) => ActionResponse::not_found("Team member not found."),
        Err(e) => {
            error!(%id, "Failed to delete team member: {:#}", e);
            ActionResponse::failed("Failed to delete team member.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryDocumentStore;
    use serde_json::json;

    fn member_payload() -> Value {
        json!({
            "name": "Priya Sharma",
            "role": "Program Lead",
            "avatar": "PS",
            "description": "Runs the after-school learning centres.",
            "category": "Team Member"
        })
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_input_valid() {
        let input = TeamMemberInput::parse(&member_payload()).expect("Should validate");
        assert_eq!(input.category, MemberCategory::TeamMember);
    }

    #[test]
    fn test_single_character_avatar_allowed() {
        let mut payload = member_payload();
        payload["avatar"] = json!("P");
        assert!(TeamMemberInput::parse(&payload).is_ok());
    }

    #[test]
    fn test_avatar_length_bounds() {
        for avatar in ["", "PSM"] {
            let mut payload = member_payload();
            payload["avatar"] = json!(avatar);
            let errors = TeamMemberInput::parse(&payload).unwrap_err();
            assert!(errors.contains("avatar"), "avatar {avatar:?}");
        }
    }

    #[test]
    fn test_avatar_counts_characters_not_bytes() {
        let mut payload = member_payload();
        payload["avatar"] = json!("प्");
        // two chars (consonant + virama), six bytes
        assert!(TeamMemberInput::parse(&payload).is_ok());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut payload = member_payload();
        payload["category"] = json!("Advisor");
        let errors = TeamMemberInput::parse(&payload).unwrap_err();
        assert!(errors.contains("category"));
    }

    #[test]
    fn test_mistyped_fields_reported_per_field() {
        let errors = TeamMemberInput::parse(&json!({
            "name": 42,
            "role": "R",
            "avatar": "PS",
            "category": true
        }))
        .unwrap_err();

        assert_eq!(errors.get("name"), Some("Name must be a string."));
        assert_eq!(errors.get("role"), Some("Role must be at least 2 characters."));
        assert_eq!(errors.get("description"), Some("Description is required."));
        assert_eq!(
            errors.get("category"),
            Some("Category must be 'Founder' or 'Team Member'.")
        );
        assert!(!errors.contains("form"));
    }

    #[test]
    fn test_short_description_rejected() {
        let mut payload = member_payload();
        payload["description"] = json!("Short");
        let errors = TeamMemberInput::parse(&payload).unwrap_err();
        assert!(errors.contains("description"));
    }

    // ==================== Roster Tests ====================

    #[tokio::test]
    async fn test_get_team_members_seeds_and_splits() {
        let store = MemoryDocumentStore::new();

        let roster = get_team_members(&store).await;

        assert_eq!(roster.all_members.len(), 6);
        assert_eq!(roster.founders.len(), 2);
        assert_eq!(roster.team_members.len(), 4);
        assert!(roster.founders.iter().all(|m| m.category == MemberCategory::Founder));
    }

    #[tokio::test]
    async fn test_get_team_members_degrades_to_empty_on_failure() {
        let store = MemoryDocumentStore::new();
        store.set_fail_writes(true);

        let roster = get_team_members(&store).await;
        assert_eq!(roster, TeamRoster::default());
    }

    #[tokio::test]
    async fn test_roster_serializes_camel_case() {
        let store = MemoryDocumentStore::new();
        let json = serde_json::to_value(get_team_members(&store).await).expect("serialize");
        assert!(json["teamMembers"].is_array());
        assert!(json["allMembers"].is_array());
        assert!(json["founders"][0]["id"].is_string());
    }

    // ==================== Admin CRUD Tests ====================

    #[tokio::test]
    async fn test_add_team_member() {
        let store = MemoryDocumentStore::new();

        let response = add_team_member(&store, &member_payload()).await;
        assert!(response.success);

        let members = list_members(&store).await.expect("list");
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "Priya Sharma");
    }

    #[tokio::test]
    async fn test_add_invalid_member_writes_nothing() {
        let store = MemoryDocumentStore::new();
        let mut payload = member_payload();
        payload["avatar"] = json!("TOO");

        let response = add_team_member(&store, &payload).await;
        assert!(!response.success);
        assert_eq!(store.count(Collection::TeamMembers).await.expect("count"), 0);
    }

    #[tokio::test]
    async fn test_update_team_member() {
        let store = MemoryDocumentStore::new();
        add_team_member(&store, &member_payload()).await;
        let id = list_members(&store).await.expect("list")[0].id;

        let mut payload = member_payload();
        payload["role"] = json!("Director of Programs");
        payload["category"] = json!("Founder");

        let response = update_team_member(&store, &id.to_string(), &payload).await;
        assert!(response.success, "{}", response.message);

        let member = &list_members(&store).await.expect("list")[0];
        assert_eq!(member.role, "Director of Programs");
        assert_eq!(member.category, MemberCategory::Founder);
        assert_eq!(member.id, id);
    }

    #[tokio::test]
    async fn test_update_unknown_member() {
        let store = MemoryDocumentStore::new();

        let response =
            update_team_member(&store, &Uuid::new_v4().to_string(), &member_payload()).await;
        assert!(!response.success);
        assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);

        let response = update_team_member(&store, "not-a-uuid", &member_payload()).await;
        assert!(!response.success);
    }

    #[tokio::test]
    async fn test_delete_team_member() {
        let store = MemoryDocumentStore::new();
        add_team_member(&store, &member_payload()).await;
        let id = list_members(&store).await.expect("list")[0].id.to_string();

        assert!(delete_team_member(&store, &id).await.success);
        assert!(!delete_team_member(&store, &id).await.success);
        assert_eq!(store.count(Collection::TeamMembers).await.expect("count"), 0);
    }

    #[tokio::test]
    async fn test_add_failure_is_reported() {
        let store = MemoryDocumentStore::new();
        store.set_fail_writes(true);

        let response = add_team_member(&store, &member_payload()).await;
        assert!(!response.success);
        assert_eq!(response.message, "Failed to add team member.");
    }
}
