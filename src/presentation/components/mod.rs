mod confirmation;
mod fields;
mod footer;
mod hero;
mod layout;
mod modal;

pub use fields::{AFFIRMATIVE, NEUTRAL, submit_background};
pub use footer::render_footer;
pub use hero::{render_hero, render_page_frame};
pub use modal::render_modal;
