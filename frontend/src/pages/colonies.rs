//! Colony management (municipal dashboard): each colony row carries the
//! president responsible for it.

use yew::{html, Html};

use common::model::colony::Colony;
use common::requests::{CreateColonyRequest, TransferRequest, UpdateContactRequest};

use crate::api::{self, colonies, ApiError};
use crate::components::badge::active_badge;
use crate::components::modal_form::Field;
use crate::pages::manager::{draft_field, ManagedResource, ResourceManager};
use crate::validate::{FormDraft, Rule};

pub type ColoniesPage = ResourceManager<ColonyResource>;

pub struct ColonyResource;

impl ManagedResource for ColonyResource {
    type Row = Colony;

    const TITLE: &'static str = "Gestión de Presidentes";
    const CREATE_LABEL: &'static str = "Nuevo Presidente";
    const CREATE_TITLE: &'static str = "Crear Nuevo Presidente";
    const EDIT_TITLE: &'static str = "Editar Contacto";
    const TRANSFER_TITLE: &'static str = "Transferir Presidencia";
    const DELETE_PROMPT: &'static str =
        "El perfil pasara a inactivo, ¿estás seguro de que deseas eliminarlo?";
    const SUPPORTS_INACTIVE: bool = true;

    const CREATED_MESSAGE: &'static str = "Colonia agregada correctamente.";
    const UPDATED_MESSAGE: &'static str = "Contacto actualizado correctamente.";
    const DELETED_MESSAGE: &'static str = "Colonia eliminada correctamente.";
    const TRANSFERRED_MESSAGE: &'static str =
        "Presidencia transferida correctamente. La sesión actual se cerrará.";

    const FETCH_ERROR: &'static str =
        "Error al obtener las colonias. Verifica tu conexión o el token.";
    const CREATE_ERROR: &'static str = "Error al crear la colonia. Verifica los datos enviados.";
    const UPDATE_ERROR: &'static str =
        "Error al actualizar el contacto. Verifica los datos enviados.";
    const DELETE_ERROR: &'static str =
        "Error al eliminar la colonia. Verifica tu conexión o el token.";
    const TRANSFER_ERROR: &'static str =
        "Error al transferir la presidencia. Verifica los datos enviados.";

    fn headers() -> Vec<&'static str> {
        vec!["Colonia", "Nombre", "Apellido", "Correo", "Teléfono", "Estado"]
    }

    fn cells(row: &Colony) -> Vec<Html> {
        vec![
            html! { { row.name_colony.clone() } },
            html! { { row.person_bean.name.clone() } },
            html! { { row.person_bean.lastname.clone() } },
            html! { { row.person_bean.email.clone() } },
            html! { { api::phone_from_api(&row.person_bean.phone) } },
            active_badge(row.status),
        ]
    }

    fn uuid(row: &Colony) -> &str {
        &row.uuid
    }

    fn is_active(row: &Colony) -> bool {
        row.status
    }

    fn create_fields() -> Vec<Field> {
        vec![
            Field::text("colonyName", "Colonia", "Ingrese el nombre de la colonia"),
            Field::text("name", "Nombre", "Ingrese el nombre del enlace"),
            Field::text("lastname", "Apellido", "Ingrese el apellido del enlace"),
            Field::email("email", "Correo", "Ingrese el correo electrónico"),
            Field::text("phone", "Teléfono", "Ingrese el teléfono"),
            Field::password("password", "Contraseña", "Ingrese la contraseña"),
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

    fn edit_draft(row: &Colony) -> FormDraft {
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
                field: "colonyName",
                message: "El nombre de la colonia es obligatorio.",
            },
            Rule::Required {
                field: "name",
                message: "El nombre del enlace es obligatorio.",
            },
            Rule::Required {
                field: "lastname",
                message: "El apellido del enlace es obligatorio.",
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

    async fn list(token: &str) -> Result<Vec<Colony>, ApiError> {
        colonies::list(token).await
    }

    async fn create(token: &str, draft: &FormDraft) -> Result<(), ApiError> {
        let body = CreateColonyRequest {
            colony_name: draft_field(draft, "colonyName"),
            name: draft_field(draft, "name"),
            lastname: draft_field(draft, "lastname"),
            email: draft_field(draft, "email"),
            phone: api::phone_to_api(&draft_field(draft, "phone")),
            password: draft_field(draft, "password"),
        };
        colonies::create(token, &body).await
    }

    async fn update(token: &str, uuid: &str, draft: &FormDraft) -> Result<(), ApiError> {
        let body = UpdateContactRequest {
            uuid: uuid.to_string(),
            email: draft_field(draft, "email"),
            phone: api::phone_to_api(&draft_field(draft, "phone")),
        };
        colonies::update_contact(token, &body).await
    }

    async fn delete(token: &str, uuid: &str) -> Result<(), ApiError> {
        colonies::remove(token, uuid).await
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
        colonies::transfer(token, &body).await
    }
}
