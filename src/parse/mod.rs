pub(crate) mod args;
mod expr;
