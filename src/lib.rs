// SPDX-License-Identifier: MPL-2.0
//! `photogram` holds the interactive core of a photo-sharing front end: the
//! swipeable post media slider and the timed story player.
//!
//! Components never touch a page directly. They are driven by messages from
//! a host and answer with effects, and they reach media elements only
//! through the ports in [`application::port`].

#![doc(html_root_url = "https://docs.rs/photogram/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
