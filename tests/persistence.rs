use std::path::PathBuf;

use ferrite_zoo::{
    Architecture, BackendConfig, ImageSpec, LayerError, LayoutConvention, MiniVGGNet, NetworkSpec,
    ZooError,
};

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ferrite-zoo-{}-{}", std::process::id(), name))
}

#[test]
fn saved_architecture_realizes_to_the_same_graph() {
    let model = MiniVGGNet::build(32, 32, 3, 10, LayoutConvention::ChannelsFirst).unwrap();
    let path = scratch("minivggnet.json");

    model.to_spec().save_json(&path).unwrap();
    let loaded = NetworkSpec::load_json(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.layout, LayoutConvention::ChannelsFirst);
    let rebuilt = loaded.realize().unwrap();
    assert_eq!(rebuilt, model);
    assert_eq!(rebuilt.summary(), model.summary());
}

#[test]
fn metadata_records_the_source_image() {
    let model = Architecture::LeNet
        .build(ImageSpec::new(28, 28, 1).unwrap(), 10, LayoutConvention::ChannelsLast)
        .unwrap();
    let metadata = model.metadata().unwrap();
    assert_eq!(metadata.image, Some(ImageSpec::new(28, 28, 1).unwrap()));
    assert!(metadata.description.as_deref().unwrap_or("").starts_with("LeNet"));
}

#[test]
fn absurd_filter_count_in_a_saved_spec_is_rejected() {
    let path = scratch("huge-filters.json");
    std::fs::write(
        &path,
        r#"{
            "name": "huge",
            "input_shape": [28, 28, 1],
            "layers": [
                {"type": "conv2d", "filters": 18446744073709551615, "kernel_size": [3, 3], "padding": "same"}
            ]
        }"#,
    )
    .unwrap();
    let spec = NetworkSpec::load_json(&path);
    let _ = std::fs::remove_file(&path);

    match spec.unwrap().realize() {
        Err(ZooError::LayerConstruction { index, reason, .. }) => {
            assert_eq!(index, 0);
            assert_eq!(reason, LayerError::Overflow("convolution parameter count"));
        }
        other => panic!("expected LayerConstruction, got {:?}", other),
    }
}

#[test]
fn unknown_layout_in_a_saved_spec_is_a_configuration_error() {
    let path = scratch("bad-layout.json");
    std::fs::write(
        &path,
        r#"{"name": "x", "input_shape": [4], "layout": "channels_middle", "layers": []}"#,
    )
    .unwrap();
    let result = NetworkSpec::load_json(&path);
    let _ = std::fs::remove_file(&path);
    assert!(matches!(result, Err(ZooError::Configuration(_))));
}

#[test]
fn missing_spec_file_is_an_io_error() {
    let result = NetworkSpec::load_json(scratch("does-not-exist.json"));
    assert!(matches!(result, Err(ZooError::Io(_))));
}

#[test]
fn image_file_sizes_the_input() {
    let path = scratch("sample.png");
    image::RgbImage::new(12, 8).save(&path).unwrap();
    let spec = ImageSpec::from_image_file(&path);
    let _ = std::fs::remove_file(&path);

    let spec = spec.unwrap();
    assert_eq!((spec.width, spec.height, spec.depth), (12, 8, 3));

    let model = Architecture::ShallowNet.build(spec, 2, LayoutConvention::ChannelsLast).unwrap();
    assert_eq!(model.input_shape().dims(), &[8, 12, 3]);
}

#[test]
fn grayscale_image_has_one_channel() {
    let path = scratch("gray.png");
    image::GrayImage::new(5, 5).save(&path).unwrap();
    let spec = ImageSpec::from_image_file(&path);
    let _ = std::fs::remove_file(&path);
    assert_eq!(spec.unwrap().depth, 1);
}

#[test]
fn unreadable_image_is_an_image_error() {
    let path = scratch("not-an-image.png");
    std::fs::write(&path, b"definitely not a png").unwrap();
    let result = ImageSpec::from_image_file(&path);
    let _ = std::fs::remove_file(&path);
    assert!(matches!(result, Err(ZooError::Image(_))));
}

#[test]
fn backend_config_drives_the_layout() {
    let path = scratch("backend.json");
    std::fs::write(&path, r#"{"image_data_format": "channels_first"}"#).unwrap();
    let config = BackendConfig::load_json(&path);
    let _ = std::fs::remove_file(&path);

    let layout = config.unwrap().layout().unwrap();
    let model = MiniVGGNet::build(16, 16, 3, 4, layout).unwrap();
    assert_eq!(model.input_shape().dims(), &[3, 16, 16]);
}
