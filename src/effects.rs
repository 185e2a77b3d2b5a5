pub(crate) mod composite;
pub(crate) mod motion_blur;
