use web_sys::File;
use yew::NodeRef;

use common::model::report::Report;

/// One staged evidence file plus its thumbnail, once read.
pub struct Attachment {
    pub file: File,
    /// base64 data URL for the thumbnail; `None` while the read is pending.
    pub preview: Option<String>,
}

/// State of the colony president's report page: the listing plus the
/// creation modal draft (title, description, date, staged attachments).
///
/// Fields are `pub` because they are accessed by the `update` and `view`
/// modules.
pub struct ColonyReports {
    pub reports: Vec<Report>,
    pub modal_open: bool,
    pub title: String,
    pub description: String,
    pub date: String,
    pub attachments: Vec<Attachment>,
    /// Hidden file input behind the "Agregar imágenes" button.
    pub file_input_ref: NodeRef,
    pub report_to_cancel: Option<Report>,
    /// Evidence URL currently shown fullscreen.
    pub preview: Option<String>,
    pub success: Option<String>,
    pub success_generation: u32,
    pub error: Option<String>,
    pub loading: bool,
}

impl ColonyReports {
    pub fn new() -> Self {
        ColonyReports {
            reports: Vec::new(),
            modal_open: false,
            title: String::new(),
            description: String::new(),
            date: String::new(),
            attachments: Vec::new(),
            file_input_ref: NodeRef::default(),
            report_to_cancel: None,
            preview: None,
            success: None,
            success_generation: 0,
            error: None,
            loading: false,
        }
    }

    /// Drops the modal draft; nothing staged survives a close or a submit.
    pub fn reset_draft(&mut self) {
        self.title.clear();
        self.description.clear();
        self.date.clear();
        self.attachments.clear();
    }
}
