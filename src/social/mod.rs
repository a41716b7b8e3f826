//! Status publishing: the X API client and the message texts.

mod client;
mod text;

pub use client::{PostId, PublishError, SocialClient};
pub use text::{rules_text, status_text};
