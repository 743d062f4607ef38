pub(crate) mod rules;
pub(crate) mod select;
pub(crate) mod session;
pub(crate) mod validate;
