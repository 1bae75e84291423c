//! User Interface Components
//!
//! - **display**: badges, loading/empty/error states and toasts
//! - **forms**: sign-in and the donor dialogs
//! - **input**: labelled inputs and the blood group selector
//! - **layout**: dialog frame and section navigation
//! - **tables**: the donor list views

pub mod display;
pub mod forms;
pub mod input;
pub mod layout;
pub mod tables;
