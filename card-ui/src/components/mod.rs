pub mod card_mockup;
pub mod features;
pub mod footer;
pub mod hero;
pub mod preview;
pub mod top_bar;
