mod story;
pub use story::Story;

mod about;
pub use about::About;
