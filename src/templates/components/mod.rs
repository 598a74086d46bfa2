pub mod card;
pub mod error;
pub mod lookup_form;
pub mod progress;
pub mod timeline;

pub use card::{card, notice};
pub use error::error_page;
pub use lookup_form::lookup_form;
pub use progress::progress_bar;
pub use timeline::timeline;
