pub mod audio;
pub mod logging;
pub mod macros;
pub mod scene;
