pub mod movie_table;
pub mod refresh_button;
pub mod review_form;

pub use movie_table::MovieTable;
pub use refresh_button::RefreshButton;
pub use review_form::ReviewForm;
