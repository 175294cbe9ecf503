pub mod accordion;
pub mod counter;
pub mod footer;
pub mod modal;
pub mod nav;
pub mod order;
pub mod reveal;
pub mod select;
pub mod toast;
