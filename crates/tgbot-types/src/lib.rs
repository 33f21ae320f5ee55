//! # tgbot-types
//!
//! Telegram Bot API entities. Every struct here is an [`Entity`]: required
//! fields are plain, optional fields are `Option` and vanish from the wire
//! map when absent. Polymorphic families are closed enums resolved by
//! their discriminant field.
//!
//! Docs: <https://core.telegram.org/bots/api#available-types>

pub mod bot;
pub mod chat;
pub mod chat_member;
pub mod input_media;
pub mod keyboard;
pub mod media;
pub mod message;
pub mod payments;
pub mod update;
pub mod user;

#[cfg(test)]
mod tests;

pub use bot::*;
pub use chat::*;
pub use chat_member::*;
pub use input_media::*;
pub use keyboard::*;
pub use media::*;
pub use message::*;
pub use payments::*;
pub use update::*;
pub use user::*;

pub use tgbot_core::{Entity, InputFile, ResponseParameters};
