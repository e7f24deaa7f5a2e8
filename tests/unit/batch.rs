use ndarray::Array;

use super::*;

#[test]
fn rank_must_be_four() {
    let err = ImageBatch::from_shape_vec(&[4, 4, 3], vec![0.0; 48]).unwrap_err();
    assert!(matches!(err, AnnotateError::InvalidInput(_)));
    assert!(err.to_string().contains("4D"));

    let err = ImageBatch::from_shape_vec(&[1, 1, 4, 4, 3], vec![0.0; 48]).unwrap_err();
    assert!(matches!(err, AnnotateError::InvalidInput(_)));
}

#[test]
fn shape_and_buffer_must_agree() {
    let err = ImageBatch::from_shape_vec(&[1, 2, 2, 3], vec![0.0; 11]).unwrap_err();
    assert!(matches!(err, AnnotateError::InvalidInput(_)));
}

#[test]
fn rgba_is_rejected() {
    let err = ImageBatch::from_array4(Array4::zeros((2, 8, 8, 4))).unwrap_err();
    assert!(matches!(err, AnnotateError::InvalidInput(_)));
    assert!(err.to_string().contains("3 channels"));
}

#[test]
fn accessors_report_tensor_axes() {
    let b = ImageBatch::from_shape_vec(&[2, 5, 7, 3], vec![0.5; 2 * 5 * 7 * 3]).unwrap();
    assert_eq!(b.len(), 2);
    assert_eq!(b.height(), 5);
    assert_eq!(b.width(), 7);
    assert_eq!(b.channels(), 3);
    assert_eq!(
        b.canvas(),
        Canvas {
            width: 7,
            height: 5
        }
    );
    assert_eq!(b.frame(1).dim(), (5, 7, 3));
}

#[test]
fn unit_to_u8_truncates_and_clamps() {
    assert_eq!(unit_to_u8(0.0), 0);
    assert_eq!(unit_to_u8(1.0), 255);
    assert_eq!(unit_to_u8(0.5), 127);
    assert_eq!(unit_to_u8(-3.0), 0);
    assert_eq!(unit_to_u8(7.0), 255);
    assert_eq!(unit_to_u8(f32::NAN), 0);
}

#[test]
fn raster_conversion_preserves_channel_order() {
    // Pixel (x=1, y=0) is pure red, everything else black.
    let mut data = Array::zeros((2, 3, 3));
    data[[0, 1, 0]] = 1.0;
    let img = frame_to_rgb8(data.view()).unwrap();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0]);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);

    let back = rgb8_to_frame(&img).unwrap();
    assert_eq!(back, data);
}

#[test]
fn rgb_images_stack_in_order() {
    let a = RgbImage::from_pixel(4, 2, image::Rgb([255, 0, 0]));
    let b = RgbImage::from_pixel(4, 2, image::Rgb([0, 0, 255]));
    let batch = ImageBatch::from_rgb_images(&[a.clone(), b.clone()]).unwrap();
    assert_eq!(batch.len(), 2);
    assert_eq!(batch.frame(0)[[1, 3, 0]], 1.0);
    assert_eq!(batch.frame(1)[[1, 3, 2]], 1.0);

    let out = batch.to_rgb_images().unwrap();
    assert_eq!(out, vec![a, b]);
}

#[test]
fn mismatched_rgb_images_are_rejected() {
    let a = RgbImage::new(4, 2);
    let b = RgbImage::new(2, 4);
    let err = ImageBatch::from_rgb_images(&[a, b]).unwrap_err();
    assert!(err.to_string().contains("frame 1"));
}

#[test]
fn empty_batch_is_valid() {
    let b = ImageBatch::from_rgb_images(&[]).unwrap();
    assert!(b.is_empty());
    assert_eq!(b.channels(), 3);
}
