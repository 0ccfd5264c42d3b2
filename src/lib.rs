//! Story Director — trigger-dispatched branching narrative for games.
//!
//! Interprets linear dialogue scripts, fires symbolic triggers that
//! mutate story state and start or stop gameplay segments, advances a
//! fixed sequence of story scenes, and independently resolves a
//! value-accumulation branching story where choices award points across
//! fifteen value dimensions and the final trial selects an ending.
//!
//! The crate is engine-agnostic: presentation, puzzles, cutscenes, and
//! persistence are capabilities the host hands to
//! [`core::director::StoryDirector`] through small traits, and the host
//! drives the director from its own game loop.

pub mod core;
pub mod schema;
