pub(crate) mod crop;
pub(crate) mod drag;
pub(crate) mod state;
