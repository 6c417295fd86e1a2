use crate::validate::FormDraft;

/// What the open modal is for. Edit and transfer keep the target row's uuid
/// so the submit handler knows which record the draft belongs to.
#[derive(Clone)]
pub enum ModalMode {
    Create,
    Edit { uuid: String },
    Transfer { uuid: String },
}

pub struct ModalState {
    pub mode: ModalMode,
    /// Snapshot the form starts from: empty template on create, the row's
    /// contact projection on edit.
    pub initial: FormDraft,
}

/// Runtime state of one management page.
///
/// Fields are `pub` because they are accessed by the `update` and `view`
/// modules.
pub struct ManagerState<Row> {
    /// Last successfully loaded list. A failed re-fetch leaves it untouched.
    pub rows: Vec<Row>,
    /// Client-side status filter: `true` shows the deactivated set.
    pub show_inactive: bool,
    pub modal: Option<ModalState>,
    /// Row awaiting delete confirmation, if any.
    pub row_to_delete: Option<Row>,
    pub success: Option<String>,
    /// Ties each success-clear timer to the message it was armed for.
    pub success_generation: u32,
    pub error: Option<String>,
    /// Occludes the page while a mutation is in flight.
    pub loading: bool,
}

impl<Row> ManagerState<Row> {
    pub fn new() -> Self {
        ManagerState {
            rows: Vec::new(),
            show_inactive: false,
            modal: None,
            row_to_delete: None,
            success: None,
            success_generation: 0,
            error: None,
            loading: false,
        }
    }
}
