mod components;
mod view;

pub use components::{AFFIRMATIVE, NEUTRAL, submit_background};
pub use view::{UiContext, draw};
