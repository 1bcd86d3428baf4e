pub mod pipeline;
pub mod reduce_commands;
