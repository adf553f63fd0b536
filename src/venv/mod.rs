pub mod activation;
pub mod layout;
pub mod shell;

pub use activation::ActivatedEnv;
pub use layout::VenvLayout;
pub use shell::resolve_shell;
