//! Configuration expressions
//!
//! Each expression is a short-lived, capability-scoped view over the builder's
//! [`ParameterStore`](crate::params::ParameterStore). Methods validate their
//! input, write one or more commands and hand back either the same expression
//! or a narrower follow-up:
//!
//! ```text
//! ResizeExpression --pad/crop/scale_canvas--> AlignmentExpression --anchor--> ResizeExpression
//! StyleExpression  --drop_shadow-----------> DropShadowExpression --offset--> StyleExpression
//! ```
//!
//! Validation failures are returned immediately; nothing is written for a
//! rejected call.

pub mod filters;
pub mod gradient;
pub mod misc;
pub mod output;
pub mod resize;
pub mod style;
pub mod transform;

use std::fmt::Display;
use std::ops::RangeInclusive;

pub use filters::SimpleFiltersExpression;
pub use gradient::GradientExpression;
pub use output::OutputExpression;
pub use resize::{AlignmentExpression, ResizeExpression};
pub use style::{DropShadowExpression, StyleExpression};
pub use transform::TransformExpression;

use crate::error::{Result, UrlBuilderError};

fn require_positive(param: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(UrlBuilderError::out_of_range(
            param,
            "must be greater than 0",
        ));
    }
    Ok(())
}

fn require_in_range<T>(param: &str, value: T, range: RangeInclusive<T>) -> Result<()>
where
    T: PartialOrd + Display,
{
    if !range.contains(&value) {
        return Err(UrlBuilderError::out_of_range(
            param,
            format!(
                "{} must be between {} and {}",
                value,
                range.start(),
                range.end()
            ),
        ));
    }
    Ok(())
}

fn join_values<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
