pub mod json_loader;
pub mod toml_loader;

pub use json_loader::{load_document, load_records, load_url_list};
pub use toml_loader::{load_all_page_sets, load_page_set};
