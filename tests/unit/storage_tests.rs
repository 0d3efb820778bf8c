// Storage modifier unit tests
// S3, Azure and remote routing, both direct and from configuration

use resizer_url::config::{StorageBackend, UrlConfig};
use resizer_url::{ErrorKind, ImageUrlBuilder};

#[test]
fn test_azure_defaults() {
    let mut builder = ImageUrlBuilder::new();
    builder.from_azure("azure", None).unwrap();
    assert_eq!(
        builder.build("testimage.jpg").unwrap(),
        "/azure/testimage.jpg"
    );
}

#[test]
fn test_azure_custom_prefix_and_container() {
    let mut builder = ImageUrlBuilder::new();
    builder.from_azure("blobs", Some("images")).unwrap();
    assert_eq!(
        builder.build("testimage.jpg").unwrap(),
        "/blobs/images/testimage.jpg"
    );
}

#[test]
fn test_azure_strips_rooted_paths() {
    let mut builder = ImageUrlBuilder::new();
    builder.from_azure("azure", None).unwrap();
    assert_eq!(
        builder.build("~/images/x.jpg").unwrap(),
        "/azure/images/x.jpg"
    );
    assert_eq!(
        builder.build("/images/x.jpg").unwrap(),
        "/azure/images/x.jpg"
    );
}

#[test]
fn test_s3_keeps_query() {
    let mut builder = ImageUrlBuilder::new();
    builder.from_s3("s3", Some("bucket")).unwrap();
    builder.resize().width(100).unwrap();
    assert_eq!(
        builder.build("photos/a.jpg").unwrap(),
        "/s3/bucket/photos/a.jpg?width=100"
    );
}

#[test]
fn test_remote() {
    let mut builder = ImageUrlBuilder::new();
    builder.from_remote("remote").unwrap();
    builder.resize().height(200).unwrap();
    assert_eq!(
        builder
            .build("http://img.imageresizing.net/utah2.jpg")
            .unwrap(),
        "/remote/img.imageresizing.net/utah2.jpg?height=200"
    );
}

#[test]
fn test_empty_prefix_rejected() {
    let mut builder = ImageUrlBuilder::new();
    let err = builder.from_s3("", None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(builder.modifier_count(), 0);
}

#[test]
fn test_configured_storage_under_app_path() {
    let yaml = r#"
app_virtual_path: /site
storage:
  s3:
    prefix: buckets
    bucket: media
"#;
    let config = UrlConfig::from_yaml_with_env(yaml).unwrap();
    let mut builder = ImageUrlBuilder::from_config(&config).unwrap();
    builder.from_configured_storage(StorageBackend::S3).unwrap();
    assert_eq!(
        builder.build("a.jpg").unwrap(),
        "/site/buckets/media/a.jpg"
    );
}

#[test]
fn test_remote_routes_url_with_space() {
    let mut builder = ImageUrlBuilder::new();
    builder.from_remote("remote").unwrap();
    builder.resize().height(200).unwrap();
    assert_eq!(
        builder.build("http://example.com/my image.jpg").unwrap(),
        "/remote/example.com/my%20image.jpg?height=200"
    );
}

#[test]
fn test_remote_passes_relative_path_through() {
    let mut builder = ImageUrlBuilder::new();
    builder.from_remote("remote").unwrap();
    assert_eq!(
        builder.build("images/my image.jpg").unwrap(),
        "images/my image.jpg"
    );
}
