//! Provider routing and dispatch for ask.
//!
//! [`route`] classifies a resolved model identifier into a
//! [`ProviderFamily`] once; [`ask`] builds the family's rig-core client and
//! sends the question, normalizing every outcome into an [`Answer`].

mod client;
mod dispatch;
mod family;

#[cfg(test)]
mod tests;

pub use client::{ChatClient, ChatRequest, Credentials, RigChat};
pub use dispatch::{ask, dispatch, Answer};
pub use family::{route, ProviderFamily, UnsupportedModel};
