mod common;
mod result;
