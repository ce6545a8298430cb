pub(crate) mod b;
pub(crate) mod escape;
pub(crate) mod hms;
pub(crate) mod parse;
