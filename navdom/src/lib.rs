pub mod buffer;
pub mod dom;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::Buffer;
pub use dom::{Dom, DomError};
pub use element::Element;
pub use event::{map_event, Event, Key, Modifiers, MouseButton};
pub use hit::hit_test;
pub use layout::{LayoutResult, Rect};
pub use terminal::Terminal;
pub use types::*;
