pub(crate) mod direction;
pub(crate) mod path_model;
pub(crate) mod sampler;
