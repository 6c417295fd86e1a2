//! Responding-area management (municipal dashboard).

use yew::{html, Html};

use common::model::area::Area;
use common::requests::{CreateAreaRequest, TransferRequest, UpdateContactRequest};

use crate::api::{self, areas, ApiError};
use crate::components::modal_form::Field;
use crate::pages::manager::{draft_field, ManagedResource, ResourceManager};
use crate::validate::{FormDraft, Rule};

pub type AreasPage = ResourceManager<AreaResource>;

pub struct AreaResource;

impl ManagedResource for AreaResource {
    type Row = Area;

    const TITLE: &'static str = "Gestión de Áreas";
    const CREATE_LABEL: &'static str = "Nueva Área";
    const CREATE_TITLE: &'static str = "Crear Nueva Área";
    const EDIT_TITLE: &'static str = "Editar Contacto";
    const TRANSFER_TITLE: &'static str = "Transferir Responsable";
    const DELETE_PROMPT: &'static str = "¿Estás seguro de eliminar esta área?";
    const SUPPORTS_INACTIVE: bool = false;

    const CREATED_MESSAGE: &'static str = "Área agregada correctamente.";
    const UPDATED_MESSAGE: &'static str = "Contacto actualizado correctamente.";
    const DELETED_MESSAGE: &'static str = "Área eliminada correctamente.";
    const TRANSFERRED_MESSAGE: &'static str =
        "Responsable transferido correctamente. La sesión actual se cerrará.";

    const FETCH_ERROR: &'static str = "Error al obtener las áreas. Verifica tu conexión o el token.";
    const CREATE_ERROR: &'static str = "Error al crear el área. Verifica los datos enviados.";
    const UPDATE_ERROR: &'static str =
        "Error al actualizar el contacto. Verifica los datos enviados.";
    const DELETE_ERROR: &'static str =
        "Error al eliminar el área. Verifica tu conexión o el token.";
    const TRANSFER_ERROR: &'static str =
        "Error al transferir el responsable. Verifica los datos enviados.";

    fn headers() -> Vec<&'static str> {
        vec!["Área", "Nombre", "Apellido", "Correo", "Teléfono"]
    }

    fn cells(row: &Area) -> Vec<Html> {
        vec![
            html! { { row.name_area.clone() } },
            html! { { row.person_bean.name.clone() } },
            html! { { row.person_bean.lastname.clone() } },
            html! { { row.person_bean.email.clone() } },
            html! { { api::phone_from_api(&row.person_bean.phone) } },
        ]
    }

    fn uuid(row: &Area) -> &str {
        &row.uuid
    }

    fn is_active(row: &Area) -> bool {
        row.status
    }

    fn create_fields() -> Vec<Field> {
        vec![
            Field::text("nameArea", "Área", "Nombre del área"),
            Field::text("name", "Nombre", "Nombre del responsable"),
            Field::text("lastname", "Apellido", "Apellido del responsable"),
            Field::email("email", "Correo", "Correo de contacto"),
            Field::text("phone", "Teléfono", "Teléfono de contacto"),
            Field::password("password", "Contraseña", "Contraseña"),
        ]
    }

    fn edit_fields() -> Vec<Field> {
        vec![
            Field::email("email", "Correo", "Correo de contacto"),
            Field::text("phone", "Teléfono", "Teléfono de contacto"),
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

    fn edit_draft(row: &Area) -> FormDraft {
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
                field: "nameArea",
                message: "El nombre del área es obligatorio.",
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

    async fn list(token: &str) -> Result<Vec<Area>, ApiError> {
        areas::list(token).await
    }

    async fn create(token: &str, draft: &FormDraft) -> Result<(), ApiError> {
        let body = CreateAreaRequest {
            name_area: draft_field(draft, "nameArea"),
            name: draft_field(draft, "name"),
            lastname: draft_field(draft, "lastname"),
            email: draft_field(draft, "email"),
            phone: api::phone_to_api(&draft_field(draft, "phone")),
            password: draft_field(draft, "password"),
        };
        areas::create(token, &body).await
    }

    async fn update(token: &str, uuid: &str, draft: &FormDraft) -> Result<(), ApiError> {
        let body = UpdateContactRequest {
            uuid: uuid.to_string(),
            email: draft_field(draft, "email"),
            phone: api::phone_to_api(&draft_field(draft, "phone")),
        };
        areas::update_contact(token, &body).await
    }

    async fn delete(token: &str, uuid: &str) -> Result<(), ApiError> {
        areas::remove(token, uuid).await
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
        areas::transfer(token, &body).await
    }
}
