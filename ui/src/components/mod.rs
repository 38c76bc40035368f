pub mod collection_view;
pub mod form_field;
pub mod layout;
pub mod modal;
pub mod toast;

pub use collection_view::{Card, render_collection};
pub use form_field::{SelectField, TextField};
pub use layout::Layout;
pub use modal::Modal;
pub use toast::ToastContainer;

/// Tailwind classes shared by the page buttons.
pub const PRIMARY_BUTTON: &str = "px-4 py-2 text-sm font-medium rounded-md \
    bg-neutral-900 text-white hover:bg-neutral-700 dark:bg-neutral-100 \
    dark:text-neutral-900 disabled:opacity-50";
pub const SECONDARY_BUTTON: &str = "px-3 py-1 text-sm rounded-md border \
    border-neutral-300 dark:border-neutral-600 hover:bg-neutral-100 \
    dark:hover:bg-neutral-700";
pub const DANGER_BUTTON: &str = "px-3 py-1 text-sm rounded-md text-red-700 \
    dark:text-red-400 hover:bg-red-50 dark:hover:bg-red-900/20";
