pub mod collation;
pub mod dates;
pub mod paths;

pub use collation::{locale_cmp, sort_locale};
pub use dates::{parse_updated, updated_millis};
pub use paths::{catalog_url, format_path_with_tilde, validate_file_size};
