//! Reusable view components.

pub mod lesson_card;
pub mod nav_bar;
