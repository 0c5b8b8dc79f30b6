mod pipeline;
mod png_encode;

pub use pipeline::{RenderPipeline, RenderedOutput};
pub use png_encode::encode_indexed_png;
