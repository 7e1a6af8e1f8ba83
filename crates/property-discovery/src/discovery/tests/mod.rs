pub(crate) mod common;
mod routing;
mod views;
