//! # tgbot-methods
//!
//! One struct per Bot API method. Required parameters go through `new`,
//! optional ones through consuming setters; a method is submitted by value
//! through [`Bot::send`] or [`tgbot_core::execute`].
//!
//! Docs: <https://core.telegram.org/bots/api#available-methods>

/// Consuming setters for `Option` fields: each call overwrites the
/// previous value.
macro_rules! optional_setters {
    ($($(#[$doc:meta])* $name:ident: $ty:ty),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(mut self, value: impl Into<$ty>) -> Self {
                self.$name = Some(value.into());
                self
            }
        )*
    };
}

mod bot;
pub mod chats;
pub mod commands;
pub mod editing;
pub mod media;
pub mod messages;
pub mod updates;


pub use bot::Bot;
pub use chats::*;
pub use commands::*;
pub use editing::*;
pub use media::*;
pub use messages::*;
pub use updates::*;

pub use tgbot_core::{execute, Executor, Method, ResultShape};
