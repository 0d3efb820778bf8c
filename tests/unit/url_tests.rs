// ImageUrl and rendering unit tests

use resizer_url::render::{build_image_tag, image_tag, image_url};
use resizer_url::{ImageUrl, ImageUrlBuilder};

#[test]
fn test_modifiers_apply_in_order() {
    let mut url = ImageUrl::new("testimage.jpg").unwrap();
    url.add_modifier(|s| format!("3-{}", s))
        .add_modifier(|s| format!("2-{}", s))
        .add_modifier(|s| format!("1-{}", s));
    assert_eq!(url.to_string(), "1-2-3-testimage.jpg");
}

#[test]
fn test_single_modifier() {
    let mut url = ImageUrl::new("testimage.jpg").unwrap();
    url.add_modifier(|s| format!("modified-{}", s));
    assert_eq!(url.to_string(), "modified-testimage.jpg");
}

#[test]
fn test_lowercases_builder_output() {
    let mut builder = ImageUrlBuilder::new();
    builder.style().padding_width(10);
    let url = builder.build_url("Image.jpg").unwrap();
    assert_eq!(url, "image.jpg?paddingwidth=10");
    assert_eq!(url.original_path(), "Image.jpg?paddingWidth=10");
}

#[test]
fn test_url_is_shareable_across_threads() {
    let url = ImageUrl::new("a.jpg").unwrap();
    let handle = std::thread::spawn(move || url.to_string());
    assert_eq!(handle.join().unwrap(), "a.jpg");
}

#[test]
fn test_render_helpers() {
    let mut builder = ImageUrlBuilder::new();
    builder.resize().width(64).unwrap();

    let url = image_url("~/icons/a.png", &builder).unwrap();
    assert_eq!(url, "/icons/a.png?width=64");

    let tag = build_image_tag("~/icons/a.png", &builder, "icon", &[]).unwrap();
    assert_eq!(tag, "<img src=\"/icons/a.png?width=64\" alt=\"icon\" />");

    assert!(image_tag("", "icon", &[]).is_err());
}
