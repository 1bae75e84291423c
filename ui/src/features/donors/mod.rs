//! Donor registry features: form validation, the post-call status mapping,
//! list ordering and row models, dialog submissions and the UI reducer.

pub mod errors;
pub mod forms;
pub mod ordering;
pub mod status;
pub mod submission;
pub mod types;
pub mod views;

pub use errors::{SubmitError, ValidationError};
pub use forms::DonorForm;
pub use status::{CallResponse, PostCallForm, PostCallOutcome, RejectionKind};
pub use types::*;
pub use views::BloodGroupFilter;
