// SPDX-License-Identifier: MPL-2.0
//! Application layer - collaborator interfaces.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Hosts (a page binding, the headless driver, tests) implement the ports
//! - UI components are generic over the ports they drive
//!
//! # Example
//!
//! ```ignore
//! use photogram::application::port::MediaElement;
//!
//! // The host implements the port trait
//! struct VideoNode { /* ... */ }
//! impl MediaElement for VideoNode { /* ... */ }
//! ```

pub mod port;
