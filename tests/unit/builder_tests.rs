// Builder unit tests
// Serialization, query merging and modifier ordering through ImageUrlBuilder

use resizer_url::{AnchorPoint, ErrorKind, FlipType, ImageUrlBuilder, OutputFormat, RotateType};

#[test]
fn test_set_parameter_last_write_wins() {
    let mut builder = ImageUrlBuilder::new();
    builder.set_parameter("width", "100").unwrap();
    builder.set_parameter("width", "250").unwrap();
    assert_eq!(builder.parameter("width"), Some("250"));
    assert_eq!(builder.parameters().len(), 1);
}

#[test]
fn test_empty_builder_returns_path_unchanged() {
    let builder = ImageUrlBuilder::new();
    for path in ["image.jpg", "/a/b/c.png", "http://example.com/a.jpg?x=1"] {
        assert_eq!(builder.build(path).unwrap(), path);
    }
}

#[test]
fn test_round_trip_full_configuration() {
    let mut builder = ImageUrlBuilder::new();
    builder
        .resize()
        .dimensions(200, 100)
        .unwrap()
        .crop()
        .anchor(AnchorPoint::TopLeft);
    builder
        .transform()
        .flip_after(FlipType::X)
        .rotate(RotateType::Rotate180);
    builder
        .style()
        .padding_width(10)
        .padding_color("000000")
        .unwrap();
    builder
        .output()
        .format(OutputFormat::Png)
        .quality(90)
        .unwrap();

    assert_eq!(
        builder.build("image.jpg").unwrap(),
        "image.jpg?width=200&height=100&mode=crop&anchor=topleft&flip=x&srotate=180&paddingWidth=10&paddingColor=000000&format=png&quality=90"
    );
}

#[test]
fn test_margins_are_encoded() {
    let mut builder = ImageUrlBuilder::new();
    builder.style().margins(10, 5, 10, 5);
    assert_eq!(
        builder.build("image.jpg").unwrap(),
        "image.jpg?margin=10%2c5%2c10%2c5"
    );
}

#[test]
fn test_merge_with_existing_query() {
    // Test: Existing keys come first, store keys are appended after them
    let mut builder = ImageUrlBuilder::new();
    builder.resize().dimensions(100, 100).unwrap();
    assert_eq!(
        builder
            .build("http://example.com/images/image.jpg?x=123&y=456")
            .unwrap(),
        "http://example.com/images/image.jpg?x=123&y=456&width=100&height=100"
    );
}

#[test]
fn test_merge_store_value_wins_in_place() {
    let mut builder = ImageUrlBuilder::new();
    builder.resize().width(300).unwrap();
    assert_eq!(
        builder.build("image.jpg?width=100&format=gif").unwrap(),
        "image.jpg?width=300&format=gif"
    );
}

#[test]
fn test_modifiers_run_first_registered_first() {
    let mut builder = ImageUrlBuilder::new();
    builder
        .add_modifier(|s| format!("2-{}", s))
        .add_modifier(|s| format!("1-{}", s));
    assert_eq!(builder.build("testimage.jpg").unwrap(), "1-2-testimage.jpg");
}

#[test]
fn test_build_url_with_modifiers_only() {
    let mut builder = ImageUrlBuilder::new();
    builder.add_modifier(|s| format!("/Cloud/{}", s));
    let url = builder.build_url("TestImage.jpg").unwrap();
    assert_eq!(url.to_string(), "/cloud/testimage.jpg");
}

#[test]
fn test_clear_modifiers() {
    let mut builder = ImageUrlBuilder::new();
    builder.lower_case().clear_modifiers();
    assert_eq!(builder.build("SomeImage.JPG").unwrap(), "SomeImage.JPG");
}

#[test]
fn test_out_of_range_values_rejected() {
    let mut builder = ImageUrlBuilder::new();
    let err = builder.output().quality(150).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);

    let err = builder.simple_filters().brightness(1.5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);

    assert_eq!(builder.build("image.jpg").unwrap(), "image.jpg");
}

#[test]
fn test_empty_path_rejected() {
    let builder = ImageUrlBuilder::new();
    assert_eq!(
        builder.build("").unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn test_builder_clone_is_independent() {
    let mut builder = ImageUrlBuilder::new();
    builder.resize().width(100).unwrap();
    let mut copy = builder.clone();
    copy.resize().width(200).unwrap();

    assert_eq!(builder.build("a.jpg").unwrap(), "a.jpg?width=100");
    assert_eq!(copy.build("a.jpg").unwrap(), "a.jpg?width=200");
}

#[test]
#[should_panic(expected = "modifier failed")]
fn test_modifier_panic_reaches_caller() {
    // Test: The pipeline does not catch failures raised inside a modifier
    let mut builder = ImageUrlBuilder::new();
    builder.resize().width(100).unwrap();
    builder.add_modifier(|_| panic!("modifier failed"));
    let _ = builder.build("image.jpg");
}

#[test]
#[should_panic(expected = "modifier failed")]
fn test_modifier_panic_reaches_build_url_reader() {
    let mut builder = ImageUrlBuilder::new();
    builder.add_modifier(|_| panic!("modifier failed"));
    let url = builder.build_url("image.jpg").unwrap();
    let _ = url.as_str();
}
