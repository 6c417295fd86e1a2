//! Configuration surface of the management engine. One implementation per
//! backend collection; the engine never knows which resource it is driving
//! beyond what this trait exposes.

use yew::Html;

use crate::api::ApiError;
use crate::components::modal_form::Field;
use crate::validate::{FormDraft, Rule};

pub trait ManagedResource: 'static {
    type Row: Clone + PartialEq + 'static;

    /// Page heading.
    const TITLE: &'static str;
    /// Label of the register button.
    const CREATE_LABEL: &'static str;
    const CREATE_TITLE: &'static str;
    const EDIT_TITLE: &'static str;
    const TRANSFER_TITLE: &'static str;
    const DELETE_PROMPT: &'static str;
    /// Whether the deactivated set is browsable behind a toggle.
    const SUPPORTS_INACTIVE: bool;

    const CREATED_MESSAGE: &'static str;
    const UPDATED_MESSAGE: &'static str;
    const DELETED_MESSAGE: &'static str;
    /// Shown right before the engine signs the session out.
    const TRANSFERRED_MESSAGE: &'static str;

    const FETCH_ERROR: &'static str;
    const CREATE_ERROR: &'static str;
    const UPDATE_ERROR: &'static str;
    const DELETE_ERROR: &'static str;
    const TRANSFER_ERROR: &'static str;

    fn headers() -> Vec<&'static str>;
    fn cells(row: &Self::Row) -> Vec<Html>;
    fn uuid(row: &Self::Row) -> &str;
    fn is_active(row: &Self::Row) -> bool;

    fn create_fields() -> Vec<Field>;
    /// Contact fields only; identity fields are immutable by convention.
    fn edit_fields() -> Vec<Field>;
    fn transfer_fields() -> Vec<Field>;
    /// Projection of an existing row into the edit modal's starting draft.
    fn edit_draft(row: &Self::Row) -> FormDraft;

    fn create_rules() -> Vec<Rule>;
    fn edit_rules() -> Vec<Rule>;
    fn transfer_rules() -> Vec<Rule>;

    async fn list(token: &str) -> Result<Vec<Self::Row>, ApiError>;
    async fn create(token: &str, draft: &FormDraft) -> Result<(), ApiError>;
    async fn update(token: &str, uuid: &str, draft: &FormDraft) -> Result<(), ApiError>;
    async fn delete(token: &str, uuid: &str) -> Result<(), ApiError>;
    async fn transfer(token: &str, uuid: &str, draft: &FormDraft) -> Result<(), ApiError>;
}

/// Draft accessor for request builders; a missing key is an empty string,
/// which validation has already ruled out by the time requests are built.
pub fn draft_field(draft: &FormDraft, key: &str) -> String {
    draft.get(key).cloned().unwrap_or_default()
}
