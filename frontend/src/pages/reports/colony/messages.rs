use common::model::report::Report;

use crate::api::ApiError;

pub enum Msg {
    Loaded(Result<Vec<Report>, ApiError>),
    OpenCreate,
    CloseModal,
    SetTitle(String),
    SetDescription(String),
    SetDate(String),
    OpenFileDialog,
    FilesChosen(Vec<web_sys::File>),
    /// (file name, data URL) once a staged file has been read.
    PreviewReady(String, String),
    RemoveAttachment(usize),
    Submit,
    Submitted(Result<(), ApiError>),
    AskCancel(Report),
    DismissCancel,
    ConfirmCancel,
    Cancelled(Result<(), ApiError>),
    Preview(String),
    ClosePreview,
    ShowError(String),
    ClearError,
    ClearSuccess(u32),
}
