// SPDX-License-Identifier: MPL-2.0
//! `weightlog` is a weight tracker client built with the Iced GUI framework.
//!
//! Its transient UI (modal dialogs and toast notifications) runs on a small
//! lifecycle engine: a timed open/closing/unmounted transition, focus capture
//! and restore with a Tab trap, and a bounded auto-dismissing toast queue.

#![doc(html_root_url = "https://docs.rs/weightlog/0.1.0")]

pub mod app;
pub mod config;
pub mod context;
pub mod error;
pub mod session;
pub mod ui;
pub mod validation;
