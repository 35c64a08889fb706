pub(crate) mod decode;
pub(crate) mod frame;
pub(crate) mod ready;
pub(crate) mod text;
