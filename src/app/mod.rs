// Terminal front end over the core state.

pub mod render;
