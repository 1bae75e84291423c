pub mod add_donor_dialog;
pub mod delete_confirmation_dialog;
pub mod donor_fields;
pub mod edit_donor_dialog;
pub mod login_form;
pub mod post_call_form;

pub use add_donor_dialog::*;
pub use delete_confirmation_dialog::*;
pub use donor_fields::*;
pub use edit_donor_dialog::*;
pub use login_form::*;
pub use post_call_form::*;
