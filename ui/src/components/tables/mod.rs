pub mod appointed_donors_list;
pub mod blood_requirement_form;
pub mod call_button;
pub mod donor_table;
pub mod list_body;
pub mod permanent_rejected_donors_list;
pub mod temp_rejected_donors_list;

pub use appointed_donors_list::*;
pub use blood_requirement_form::*;
pub use call_button::*;
pub use donor_table::*;
pub use permanent_rejected_donors_list::*;
pub use temp_rejected_donors_list::*;
