pub(crate) mod audio;
pub(crate) mod context;
pub(crate) mod episode;
pub mod gen_funcs;
pub(crate) mod home;
pub(crate) mod player;
pub(crate) mod routes;
