// Resizer URL Library
// Fluent image-transform configuration compiled to resizer query strings

pub mod builder;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod expression;
pub mod logging;
pub mod modifier;
pub mod params;
pub mod render;
pub mod url;

pub use builder::ImageUrlBuilder;
pub use catalog::{
    AnchorPoint, CacheOptions, DpiOptions, FitMode, FlipType, GrayscaleOptions, OutputFormat,
    ProcessOptions, RotateType, ScaleMode,
};
pub use error::{ErrorKind, Result, UrlBuilderError};
pub use modifier::Modifier;
pub use url::ImageUrl;
