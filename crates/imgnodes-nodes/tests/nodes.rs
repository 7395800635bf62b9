// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end node tests: set inputs, trigger, inspect outputs.

mod common;

use imgnodes_nodes::nodes::{crop, from_bytes, resize, scale};
use imgnodes_nodes::{
    CropImage, FromBytes, ImageValue, ImgNodesError, Node, PortValue, ResizeImage, ScaleImage,
};

use common::{noise_array, noise_image};

fn output_image<N: Node>(node: &N, port: &str) -> ImageValue {
    node.output(port)
        .unwrap()
        .as_image()
        .cloned()
        .expect("output port holds an image")
}

#[tokio::test]
async fn from_bytes_matches_reference_jpeg_decode() {
    let img = noise_image(100, 100, 3);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noise.jpg");
    std::fs::write(&path, img.to_jpeg(95).unwrap()).unwrap();

    let jpeg_bytes = std::fs::read(&path).unwrap();
    let reference = ImageValue::from_path(&path).unwrap();

    let mut node = FromBytes::new();
    node.set_input(from_bytes::DATA, jpeg_bytes).unwrap();
    node.trigger().await.unwrap();

    let decoded = output_image(&node, from_bytes::IMG);
    assert_eq!(decoded.to_array(), reference.to_array());
}

#[tokio::test]
async fn from_bytes_reproduces_lossless_array() {
    for channels in 1..=4 {
        let arr = noise_array(17, 23, channels, 42 + channels as u64);
        let png = ImageValue::from_array(arr.clone()).unwrap().to_png().unwrap();

        let mut node = FromBytes::new();
        node.set_input(from_bytes::DATA, png).unwrap();
        node.trigger().await.unwrap();

        assert_eq!(output_image(&node, from_bytes::IMG).to_array(), arr);
    }
}

#[tokio::test]
async fn resize_to_50x50() {
    let mut node = ResizeImage::new();
    node.set_input(resize::IMG, noise_image(100, 100, 3)).unwrap();
    node.set_input(resize::WIDTH, 50).unwrap();
    node.set_input(resize::HEIGHT, 50).unwrap();
    node.trigger().await.unwrap();

    let img = output_image(&node, resize::RESIZED_IMG);
    assert_eq!(img.to_array().shape(), (50, 50, 3));
}

#[tokio::test]
async fn resize_shape_is_height_width_channels() {
    for (w, h) in [(1, 1), (13, 200), (250, 9)] {
        let mut node = ResizeImage::new();
        node.set_input(resize::IMG, noise_image(64, 48, 4)).unwrap();
        node.set_input(resize::WIDTH, w).unwrap();
        node.set_input(resize::HEIGHT, h).unwrap();
        node.trigger().await.unwrap();

        let shape = output_image(&node, resize::RESIZED_IMG).to_array().shape();
        assert_eq!(shape, (h as usize, w as usize, 4));
    }
}

#[tokio::test]
async fn crop_to_80x80() {
    let mut node = CropImage::new();
    node.set_input(crop::IMG, noise_image(100, 100, 3)).unwrap();
    node.set_input(crop::X1, 10).unwrap();
    node.set_input(crop::Y1, 10).unwrap();
    node.set_input(crop::X2, 90).unwrap();
    node.set_input(crop::Y2, 90).unwrap();
    node.trigger().await.unwrap();

    let img = output_image(&node, crop::CROPPED_IMG);
    assert_eq!(img.to_array().shape(), (80, 80, 3));
}

#[tokio::test]
async fn crop_with_negative_origin_fails() {
    let mut node = CropImage::new();
    node.set_input(crop::IMG, noise_image(100, 100, 3)).unwrap();
    node.set_input(crop::X1, -5).unwrap();
    node.set_input(crop::Y1, 0).unwrap();
    node.set_input(crop::X2, 50).unwrap();
    node.set_input(crop::Y2, 50).unwrap();

    let err = node.trigger().await.unwrap_err();
    assert!(matches!(err, ImgNodesError::CropOutOfBounds { x1: -5, .. }));
}

#[tokio::test]
async fn scale_by_half() {
    let mut node = ScaleImage::new();
    node.set_input(scale::IMG, noise_image(100, 100, 3)).unwrap();
    node.set_input(scale::SCALE, 0.5).unwrap();
    node.trigger().await.unwrap();

    let img = output_image(&node, scale::SCALED_IMG);
    assert_eq!(img.to_array().shape(), (50, 50, 3));
}

#[tokio::test]
async fn scale_shape_uses_rounded_dimensions() {
    let src = noise_image(33, 47, 3);
    for factor in [0.3, 1.5, 2.25] {
        let mut node = ScaleImage::new();
        node.set_input(scale::IMG, src.clone()).unwrap();
        node.set_input(scale::SCALE, factor).unwrap();
        node.trigger().await.unwrap();

        let expected_h = (33.0 * factor).round_ties_even() as usize;
        let expected_w = (47.0 * factor).round_ties_even() as usize;
        let shape = output_image(&node, scale::SCALED_IMG).to_array().shape();
        assert_eq!(shape, (expected_h, expected_w, 3), "factor {factor}");
    }
}

#[tokio::test]
async fn chained_nodes_pass_images_downstream() {
    let png = noise_image(120, 80, 3).to_png().unwrap();

    let mut decode = FromBytes::new();
    decode.set_input(from_bytes::DATA, png).unwrap();
    decode.trigger().await.unwrap();

    let mut cropper = CropImage::new();
    let decoded = decode.output(from_bytes::IMG).unwrap().clone();
    cropper.set_input(crop::IMG, decoded).unwrap();
    for (port, value) in [(crop::X1, 0), (crop::Y1, 20), (crop::X2, 80), (crop::Y2, 100)] {
        cropper.set_input(port, value).unwrap();
    }
    cropper.trigger().await.unwrap();

    let mut scaler = ScaleImage::new();
    let cropped = cropper.output(crop::CROPPED_IMG).unwrap().clone();
    scaler.set_input(scale::IMG, cropped).unwrap();
    scaler.set_input(scale::SCALE, 0.25).unwrap();
    scaler.trigger().await.unwrap();

    let out = output_image(&scaler, scale::SCALED_IMG);
    assert_eq!(out.to_array().shape(), (20, 20, 3));

    // The upstream value is untouched by downstream transforms.
    let upstream = decode.output(from_bytes::IMG).unwrap();
    assert!(matches!(upstream, PortValue::Image(img) if img.dimensions() == (80, 120)));
}

#[tokio::test]
async fn nodes_run_on_spawned_tasks() {
    let mut node = ResizeImage::new();
    node.set_input(resize::IMG, noise_image(32, 32, 3)).unwrap();
    node.set_input(resize::WIDTH, 16).unwrap();
    node.set_input(resize::HEIGHT, 8).unwrap();

    let node = tokio::spawn(async move {
        node.trigger().await?;
        Ok::<_, ImgNodesError>(node)
    })
    .await
    .unwrap()
    .unwrap();

    let img = output_image(&node, resize::RESIZED_IMG);
    assert_eq!(img.dimensions(), (16, 8));
}
