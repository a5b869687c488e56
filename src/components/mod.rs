//! UI Components
//!
//! Pages and the pieces they are built from.

mod new_record_form;
mod record_table;
mod list_page;
mod detail_page;
mod detail_row;
mod not_found;

pub use new_record_form::NewRecordForm;
pub use record_table::RecordTable;
pub use list_page::ListPage;
pub use detail_page::DetailPage;
pub use detail_row::DetailRow;
pub use not_found::NotFound;
