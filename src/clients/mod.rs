pub(crate) mod nate;

pub use nate::NateClient;
