// Expression unit tests
// Each operation family driven through the builder

use resizer_url::{
    AnchorPoint, CacheOptions, ErrorKind, FlipType, GrayscaleOptions, ImageUrlBuilder,
    OutputFormat,
};

fn build(builder: &ImageUrlBuilder) -> String {
    builder.build("image.jpg").unwrap()
}

#[test]
fn test_resize_modes_and_scale() {
    let mut builder = ImageUrlBuilder::new();
    builder
        .resize()
        .max_width(800)
        .unwrap()
        .max_height(600)
        .unwrap()
        .max()
        .scale_down();
    assert_eq!(
        build(&builder),
        "image.jpg?maxwidth=800&maxheight=600&mode=max&scale=downscaleonly"
    );
}

#[test]
fn test_pad_without_anchor_continues_resize() {
    let mut builder = ImageUrlBuilder::new();
    builder.resize().width(100).unwrap().pad().resize().zoom(2.0).unwrap();
    assert_eq!(build(&builder), "image.jpg?width=100&mode=pad&zoom=2");
}

#[test]
fn test_scale_canvas_with_anchor() {
    let mut builder = ImageUrlBuilder::new();
    builder
        .resize()
        .scale_canvas()
        .anchor(AnchorPoint::BottomRight);
    assert_eq!(
        build(&builder),
        "image.jpg?scale=upscalecanvas&anchor=bottomright"
    );
}

#[test]
fn test_crop_region_validation() {
    let mut builder = ImageUrlBuilder::new();
    builder.resize().crop_region(10, 10, -10, -10).unwrap();
    assert_eq!(build(&builder), "image.jpg?crop=10%2c10%2c-10%2c-10");

    let err = builder.resize().crop_region(50, 0, 20, 100).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedRectangle);
    assert_eq!(builder.parameter("crop"), Some("10,10,-10,-10"));
}

#[test]
fn test_zero_width_rejected() {
    let mut builder = ImageUrlBuilder::new();
    let err = builder.resize().width(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
}

#[test]
fn test_transform() {
    let mut builder = ImageUrlBuilder::new();
    builder
        .transform()
        .auto_rotate()
        .flip_before(FlipType::XY)
        .rotate_degrees(45);
    assert_eq!(
        build(&builder),
        "image.jpg?autorotate=true&sflip=xy&rotate=45"
    );
}

#[test]
fn test_style_with_drop_shadow() {
    let mut builder = ImageUrlBuilder::new();
    builder
        .style()
        .background_color("white")
        .unwrap()
        .drop_shadow(5, "808080")
        .unwrap()
        .offset(3, 45)
        .border_width(1);
    assert_eq!(
        build(&builder),
        "image.jpg?bgcolor=white&shadowwidth=5&shadowcolor=808080&shadowoffset=3%2c45&borderWidth=1"
    );
}

#[test]
fn test_drop_shadow_requires_width() {
    let mut builder = ImageUrlBuilder::new();
    let err = builder.style().drop_shadow(0, "black").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    let err = builder.style().drop_shadow(2, "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(builder.parameters().is_empty());
}

#[test]
fn test_output() {
    let mut builder = ImageUrlBuilder::new();
    builder
        .output()
        .format(OutputFormat::Gif)
        .colors(128)
        .unwrap();
    assert_eq!(build(&builder), "image.jpg?format=gif&colors=128");

    assert!(builder.output().speed(4).is_err());
    assert!(builder.output().colors(1).is_err());
}

#[test]
fn test_simple_filters() {
    let mut builder = ImageUrlBuilder::new();
    builder
        .simple_filters()
        .grayscale_variant(GrayscaleOptions::Bt709)
        .contrast(0.25)
        .unwrap()
        .rounded_corners(20)
        .unwrap();
    assert_eq!(
        build(&builder),
        "image.jpg?s.grayscale=bt709&s.contrast=0.25&s.roundcorners=20"
    );
}

#[test]
fn test_gradient() {
    let mut builder = ImageUrlBuilder::new();
    builder
        .gradient()
        .dimensions(10, 300)
        .unwrap()
        .colors("ffffff", "000000aa")
        .unwrap()
        .angle(180)
        .unwrap();
    assert_eq!(
        builder.build("gradient.png").unwrap(),
        "gradient.png?width=10&height=300&color1=ffffff&color2=000000aa&angle=180"
    );
}

#[test]
fn test_misc_commands() {
    let mut builder = ImageUrlBuilder::new();
    builder
        .watermark("logo")
        .unwrap()
        .presets("thumb")
        .unwrap()
        .cache(CacheOptions::No);
    assert_eq!(
        build(&builder),
        "image.jpg?watermark=logo&preset=thumb&cache=no"
    );
}
