use crate::api::ApiError;
use crate::validate::FormDraft;

/// Which mutation a `Finished` message reports on; selects the banner text
/// and, for transfers, the sign-out follow-up.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Done {
    Created,
    Updated,
    Deleted,
    Transferred,
}

pub enum Msg<Row> {
    RowsLoaded(Result<Vec<Row>, ApiError>),
    ToggleInactive,
    OpenCreate,
    OpenEdit(Row),
    OpenTransfer(Row),
    CloseModal,
    Submit(FormDraft),
    AskDelete(Row),
    CancelDelete,
    ConfirmDelete,
    Finished(Done, Result<(), ApiError>),
    ShowError(String),
    ClearError,
    ClearSuccess(u32),
    SignOutNow,
}
