pub mod renderer;
pub mod settings_resolver;
pub mod source_loader;

pub use renderer::RenderService;
pub use settings_resolver::{
    LocalFileProvider, RemoteConfigProvider, SettingsProvider, SettingsResolver,
};
pub use source_loader::{FileImageSource, ImageSource, RetryPolicy, SourceLoader};
