/// Dialog and submission flags of the prediction session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Whether the upload dialog is shown.
    pub dialog_open: bool,
    /// True from submission until the classifier answer is applied.
    pub loading: bool,
}
