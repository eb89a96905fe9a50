mod common;
mod scores;
