pub mod confirmation_modal;
pub mod data_table;
pub mod delete_dialog;
pub mod editable_cell;
pub mod form_fields;
pub mod form_modal;
pub mod forms;
pub mod layout;
pub mod modal;
pub mod pagination_controls;
pub mod toast;

pub use confirmation_modal::ConfirmationModal;
pub use data_table::{DataTable, RowAction, TableColumn};
pub use delete_dialog::{DeleteDialog, DeleteTarget};
pub use editable_cell::EditableCell;
pub use modal::Modal;
pub use pagination_controls::PaginationControls;
pub use toast::ToastContainer;
