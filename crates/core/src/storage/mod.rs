mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{PageParamsError, RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use traits::ProductRepository;
pub use types::{PageParams, MAX_PAGE_LIMIT};
