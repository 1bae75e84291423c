use tracing::debug;

use crate::services::client::{Donor, OperatorIdentity};

/// Dashboard sections, in display order
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    TotalDonors,
    BloodRequirement,
    Appointed,
    TempRejected,
    PermRejected,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::TotalDonors,
        Section::BloodRequirement,
        Section::Appointed,
        Section::TempRejected,
        Section::PermRejected,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::TotalDonors => "Total Donors",
            Section::BloodRequirement => "Blood Requirement",
            Section::Appointed => "Appointed Donors",
            Section::TempRejected => "Temporarily Rejected",
            Section::PermRejected => "Permanently Rejected",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Section::TotalDonors => "View and manage every registered donor",
            Section::BloodRequirement => "Find donors for a required blood group",
            Section::Appointed => "Donors with an upcoming donation appointment",
            Section::TempRejected => "Donors waiting out a deferral period",
            Section::PermRejected => "Donors who can no longer donate",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Section::TotalDonors => "section-card section-total",
            Section::BloodRequirement => "section-card section-requirement",
            Section::Appointed => "section-card section-appointed",
            Section::TempRejected => "section-card section-temp-rejected",
            Section::PermRejected => "section-card section-perm-rejected",
        }
    }
}

/// At most one dialog is open at a time
#[derive(Clone, PartialEq, Debug, Default)]
pub enum DialogState {
    #[default]
    None,
    AddDonor,
    EditDonor(Donor),
    DeleteDonor(Donor),
    PostCall(Donor),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

/// Notification text before it is queued
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

impl ToastMessage {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            description: Some(description.into()),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: ToastMessage,
}

/// Toasts beyond this are dropped oldest first
pub const MAX_TOASTS: usize = 5;

/// Top-level UI state of the registry client
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RegistryState {
    pub identity: Option<OperatorIdentity>,
    /// `None` shows the section grid
    pub active_section: Option<Section>,
    pub dialog: DialogState,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

#[derive(Clone, PartialEq, Debug)]
pub enum RegistryAction {
    SignIn(OperatorIdentity),
    SignOut,
    OpenSection(Section),
    BackToSections,
    /// Landing-page shortcut: the donor list with the add dialog on top
    StartAddDonor,
    OpenAddDonor,
    OpenEditDonor(Donor),
    OpenDeleteDonor(Donor),
    OpenPostCall(Donor),
    CloseDialog,
    PushToast(ToastMessage),
    DismissToast(u64),
}

impl RegistryState {
    pub fn with_identity(identity: Option<OperatorIdentity>) -> Self {
        Self {
            identity,
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: RegistryAction) {
        match action {
            RegistryAction::SignIn(identity) => {
                debug!(principal = %identity.principal, "operator signed in");
                self.identity = Some(identity);
            }
            RegistryAction::SignOut => {
                debug!("operator signed out");
                // Sections and dialogs belong to the session
                *self = Self {
                    next_toast_id: self.next_toast_id,
                    ..Self::default()
                };
            }
            RegistryAction::OpenSection(section) => {
                self.active_section = Some(section);
                self.dialog = DialogState::None;
            }
            RegistryAction::BackToSections => {
                self.active_section = None;
                self.dialog = DialogState::None;
            }
            RegistryAction::StartAddDonor => {
                self.active_section = Some(Section::TotalDonors);
                self.dialog = DialogState::AddDonor;
            }
            RegistryAction::OpenAddDonor => {
                self.dialog = DialogState::AddDonor;
            }
            RegistryAction::OpenEditDonor(donor) => {
                self.dialog = DialogState::EditDonor(donor);
            }
            RegistryAction::OpenDeleteDonor(donor) => {
                self.dialog = DialogState::DeleteDonor(donor);
            }
            RegistryAction::OpenPostCall(donor) => {
                self.dialog = DialogState::PostCall(donor);
            }
            RegistryAction::CloseDialog => {
                self.dialog = DialogState::None;
            }
            RegistryAction::PushToast(message) => {
                self.next_toast_id += 1;
                self.toasts.push(Toast {
                    id: self.next_toast_id,
                    message,
                });
                if self.toasts.len() > MAX_TOASTS {
                    let overflow = self.toasts.len() - MAX_TOASTS;
                    self.toasts.drain(..overflow);
                }
            }
            RegistryAction::DismissToast(id) => {
                self.toasts.retain(|toast| toast.id != id);
            }
        }
    }

    /// Id the next pushed toast will get
    pub fn next_toast_id(&self) -> u64 {
        self.next_toast_id + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::client::{BloodGroup, DonorId, DonorStatus};

    fn donor() -> Donor {
        Donor {
            id: DonorId(4),
            name: "Ruwan".to_string(),
            blood_group: BloodGroup::ANegative,
            phone_number: "0711111111".to_string(),
            status: DonorStatus::Active,
            call_count: 0,
            last_called_date: None,
        }
    }

    fn signed_in() -> RegistryState {
        RegistryState::with_identity(Some(OperatorIdentity::new("aaaaa-aa")))
    }

    #[test]
    fn test_sections_and_dialogs() {
        let mut state = signed_in();
        assert!(state.is_authenticated());
        assert_eq!(state.active_section, None);

        state.reduce_in_place(RegistryAction::OpenSection(Section::Appointed));
        state.reduce_in_place(RegistryAction::OpenPostCall(donor()));
        assert_eq!(state.dialog, DialogState::PostCall(donor()));

        // Switching sections closes whatever was open
        state.reduce_in_place(RegistryAction::OpenSection(Section::TotalDonors));
        assert_eq!(state.dialog, DialogState::None);

        state.reduce_in_place(RegistryAction::OpenEditDonor(donor()));
        state.reduce_in_place(RegistryAction::OpenDeleteDonor(donor()));
        assert_eq!(state.dialog, DialogState::DeleteDonor(donor()));
        state.reduce_in_place(RegistryAction::CloseDialog);
        assert_eq!(state.dialog, DialogState::None);

        state.reduce_in_place(RegistryAction::BackToSections);
        assert_eq!(state.active_section, None);
    }

    #[test]
    fn test_add_donor_from_landing_page() {
        let mut state = signed_in();
        state.reduce_in_place(RegistryAction::StartAddDonor);
        assert_eq!(state.active_section, Some(Section::TotalDonors));
        assert_eq!(state.dialog, DialogState::AddDonor);

        // Closing the dialog leaves the donor list open
        state.reduce_in_place(RegistryAction::CloseDialog);
        assert_eq!(state.active_section, Some(Section::TotalDonors));
    }

    #[test]
    fn test_sign_out_resets_session_state() {
        let mut state = signed_in();
        state.reduce_in_place(RegistryAction::OpenSection(Section::PermRejected));
        state.reduce_in_place(RegistryAction::OpenAddDonor);
        state.reduce_in_place(RegistryAction::PushToast(ToastMessage::success("a", "b")));

        state.reduce_in_place(RegistryAction::SignOut);
        assert!(!state.is_authenticated());
        assert_eq!(state.active_section, None);
        assert_eq!(state.dialog, DialogState::None);
        assert!(state.toasts.is_empty());
        // Ids keep increasing so a pending dismiss cannot hit a new toast
        assert_eq!(state.next_toast_id(), 2);
    }

    #[test]
    fn test_toast_queue() {
        let mut state = RegistryState::default();
        for i in 0..7 {
            state.reduce_in_place(RegistryAction::PushToast(ToastMessage::error(
                format!("Error {}", i),
                "failed",
            )));
        }
        assert_eq!(state.toasts.len(), MAX_TOASTS);
        assert_eq!(state.toasts[0].id, 3);
        assert_eq!(state.toasts[0].message.title, "Error 2");

        state.reduce_in_place(RegistryAction::DismissToast(5));
        assert_eq!(
            state.toasts.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![3, 4, 6, 7]
        );
        state.reduce_in_place(RegistryAction::DismissToast(42));
        assert_eq!(state.toasts.len(), 4);
    }
}
