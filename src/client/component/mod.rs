pub mod file_input;
pub mod header;
pub mod layout;
pub mod markdown;
pub mod media;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod protected_layout;
pub mod reorder;

pub use file_input::FileInput;
pub use header::Header;
pub use layout::Layout;
pub use markdown::Markdown;
pub use media::{format_duration, media_url, AudioPlayer};
pub use modal::{ConfirmationModal, Modal};
pub use page::Page;
pub use pagination::{Pagination, PaginationData};
pub use protected_layout::{RequiresAdmin, RequiresLoggedIn};
pub use reorder::{move_item, reorder_payload};
