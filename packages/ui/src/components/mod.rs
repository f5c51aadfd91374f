//! Presentational building blocks shared by the users views.

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod error_message;
pub use error_message::ErrorMessage;

mod loading_spinner;
pub use loading_spinner::LoadingSpinner;

mod pagination_bar;
pub use pagination_bar::PaginationBar;

mod search_box;
pub use search_box::SearchBox;

mod stat_card;
pub use stat_card::StatCard;

mod user_form;
pub use user_form::UserForm;

mod user_table;
pub use user_table::UserTable;
