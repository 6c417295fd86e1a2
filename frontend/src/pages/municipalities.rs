//! Municipality management (state dashboard).

use yew::{html, Html};

use common::model::municipality::Municipality;
use common::requests::{CreateMunicipalityRequest, TransferRequest, UpdateContactRequest};

use crate::api::{self, municipalities, ApiError};
use crate::components::badge::active_badge;
use crate::components::modal_form::Field;
use crate::pages::manager::{draft_field, ManagedResource, ResourceManager};
use crate::validate::{FormDraft, Rule};

pub type MunicipalitiesPage = ResourceManager<MunicipalityResource>;

/// The deployment covers a single state; the create form shows it as a
/// one-option select so the record still carries it explicitly.
const STATES: &[&str] = &["Morelos"];

pub struct MunicipalityResource;

impl ManagedResource for MunicipalityResource {
    type Row = Municipality;

    const TITLE: &'static str = "Gestión de Municipios";
    const CREATE_LABEL: &'static str = "Nuevo Municipio";
    const CREATE_TITLE: &'static str = "Crear Nuevo Municipio";
    const EDIT_TITLE: &'static str = "Editar Contacto";
    const TRANSFER_TITLE: &'static str = "Transferir Administración";
    const DELETE_PROMPT: &'static str = "¿Estás seguro de eliminar este municipio?";
    const SUPPORTS_INACTIVE: bool = true;

    const CREATED_MESSAGE: &'static str = "Municipio agregado correctamente.";
    const UPDATED_MESSAGE: &'static str = "Contacto actualizado correctamente.";
    const DELETED_MESSAGE: &'static str = "Municipio eliminado correctamente.";
    const TRANSFERRED_MESSAGE: &'static str =
        "Administración transferida correctamente. La sesión actual se cerrará.";

    const FETCH_ERROR: &'static str =
        "Error al obtener los municipios. Verifica tu conexión o el token.";
    const CREATE_ERROR: &'static str = "Error al crear el municipio. Verifica los datos enviados.";
    const UPDATE_ERROR: &'static str =
        "Error al actualizar el contacto. Verifica los datos enviados.";
    const DELETE_ERROR: &'static str =
        "Error al eliminar el municipio. Verifica tu conexión o el token.";
    const TRANSFER_ERROR: &'static str =
        "Error al transferir la administración. Verifica los datos enviados.";

    fn headers() -> Vec<&'static str> {
        vec![
            "Municipio",
            "Descripción",
            "Nombre",
            "Apellido",
            "Correo",
            "Teléfono",
            "Estado",
        ]
    }

    fn cells(row: &Municipality) -> Vec<Html> {
        vec![
            html! { { row.name_municipality.clone() } },
            html! { { row.description.clone() } },
            html! { { row.person_bean.name.clone() } },
            html! { { row.person_bean.lastname.clone() } },
            html! { { row.person_bean.email.clone() } },
            html! { { api::phone_from_api(&row.person_bean.phone) } },
            active_badge(row.status),
        ]
    }

    fn uuid(row: &Municipality) -> &str {
        &row.uuid
    }

    fn is_active(row: &Municipality) -> bool {
        row.status
    }

    fn create_fields() -> Vec<Field> {
        vec![
            Field::select("state", "Estado", STATES.to_vec()),
            Field::text(
                "nameMunicipality",
                "Nombre del Municipio",
                "Ingrese el nombre del municipio",
            ),
            Field::text("description", "Descripción", "Ingrese una descripción"),
            Field::text("name", "Nombre", "Nombre del responsable"),
            Field::text("lastname", "Apellido", "Apellido del responsable"),
            Field::email("email", "Correo", "Correo de contacto"),
            Field::text("phone", "Teléfono", "Teléfono de contacto"),
            Field::password("password", "Contraseña", "Contraseña"),
        ]
    }

    fn edit_fields() -> Vec<Field> {
        vec![
            Field::email("email", "Correo", "Ingrese el correo electrónico"),
            Field::text("phone", "Teléfono", "Ingrese el teléfono"),
        ]
    }

    fn transfer_fields() -> Vec<Field> {
        vec![
            Field::text("name", "Nombre", "Nombre del nuevo responsable"),
            Field::text("lastname", "Apellido", "Apellido del nuevo responsable"),
            Field::email("email", "Correo", "Correo del nuevo responsable"),
            Field::text("phone", "Teléfono", "Teléfono del nuevo responsable"),
            Field::password("password", "Contraseña", "Contraseña del nuevo responsable"),
        ]
    }

    fn edit_draft(row: &Municipality) -> FormDraft {
        FormDraft::from([
            ("email".to_string(), row.person_bean.email.clone()),
            (
                "phone".to_string(),
                api::phone_from_api(&row.person_bean.phone),
            ),
        ])
    }

    fn create_rules() -> Vec<Rule> {
        vec![
            Rule::Required {
                field: "nameMunicipality",
                message: "El nombre del municipio es obligatorio.",
            },
            Rule::Required {
                field: "description",
                message: "La descripción es obligatoria.",
            },
            Rule::Required {
                field: "name",
                message: "El nombre del responsable es obligatorio.",
            },
            Rule::Required {
                field: "lastname",
                message: "El apellido del responsable es obligatorio.",
            },
            Rule::Required {
                field: "email",
                message: "El correo electrónico es obligatorio.",
            },
            Rule::Email { field: "email" },
            Rule::Required {
                field: "password",
                message: "La contraseña es obligatoria.",
            },
            Rule::Password { field: "password" },
            Rule::Phone { field: "phone" },
        ]
    }

    fn edit_rules() -> Vec<Rule> {
        vec![
            Rule::Required {
                field: "email",
                message: "El correo electrónico es obligatorio.",
            },
            Rule::Email { field: "email" },
            Rule::Phone { field: "phone" },
        ]
    }

    fn transfer_rules() -> Vec<Rule> {
        vec![
            Rule::Required {
                field: "name",
                message: "El nombre del responsable es obligatorio.",
            },
            Rule::Required {
                field: "lastname",
                message: "El apellido del responsable es obligatorio.",
            },
            Rule::Required {
                field: "email",
                message: "El correo electrónico es obligatorio.",
            },
            Rule::Email { field: "email" },
            Rule::Required {
                field: "password",
                message: "La contraseña es obligatoria.",
            },
            Rule::Password { field: "password" },
            Rule::Phone { field: "phone" },
        ]
    }

    async fn list(token: &str) -> Result<Vec<Municipality>, ApiError> {
        municipalities::list(token).await
    }

    async fn create(token: &str, draft: &FormDraft) -> Result<(), ApiError> {
        let body = CreateMunicipalityRequest {
            name_municipality: draft_field(draft, "nameMunicipality"),
            description: draft_field(draft, "description"),
            state: draft_field(draft, "state"),
            name: draft_field(draft, "name"),
            lastname: draft_field(draft, "lastname"),
            email: draft_field(draft, "email"),
            phone: api::phone_to_api(&draft_field(draft, "phone")),
            password: draft_field(draft, "password"),
        };
        municipalities::create(token, &body).await
    }

    async fn update(token: &str, uuid: &str, draft: &FormDraft) -> Result<(), ApiError> {
        let body = UpdateContactRequest {
            uuid: uuid.to_string(),
            email: draft_field(draft, "email"),
            phone: api::phone_to_api(&draft_field(draft, "phone")),
        };
        municipalities::update_contact(token, &body).await
    }

    async fn delete(token: &str, uuid: &str) -> Result<(), ApiError> {
        municipalities::remove(token, uuid).await
    }

    async fn transfer(token: &str, uuid: &str, draft: &FormDraft) -> Result<(), ApiError> {
        let body = TransferRequest {
            uuid: uuid.to_string(),
            name: draft_field(draft, "name"),
            lastname: draft_field(draft, "lastname"),
            email: draft_field(draft, "email"),
            phone: api::phone_to_api(&draft_field(draft, "phone")),
            password: draft_field(draft, "password"),
        };
        municipalities::transfer(token, &body).await
    }
}
