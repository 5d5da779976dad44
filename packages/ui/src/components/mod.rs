//! Form primitives shared by the auth screens.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::Input;

mod label;
pub use label::Label;

mod horizontal_rule;
pub use horizontal_rule::HorizontalRule;
