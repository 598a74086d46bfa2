pub mod errors;
pub mod html;
pub mod xlsx;

pub use errors::{error_to_response, ResultResp};

// Normal HTML response
pub use html::{css_response, html_response, html_response_with_status};
pub use xlsx::xlsx_response;
