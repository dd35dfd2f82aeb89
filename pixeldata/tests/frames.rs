//! Reading frames from a collection and writing them back.

use dicom_core::value::BinaryBuffer;
use dicom_core::{Attribute, BinaryValues, VR};
use dicom_dictionary_std::tags;
use dicom_object::AttributeCollection;
use dicom_pixeldata::{Endianness, UncompressedPixelData};

fn image(
    rows: u16,
    cols: u16,
    bits_allocated: u16,
    samples_per_pixel: u16,
) -> AttributeCollection {
    let mut obj = AttributeCollection::new();
    for (tag, value) in [
        (tags::ROWS, rows),
        (tags::COLUMNS, cols),
        (tags::BITS_ALLOCATED, bits_allocated),
        (tags::BITS_STORED, bits_allocated),
        (tags::HIGH_BIT, bits_allocated - 1),
        (tags::PIXEL_REPRESENTATION, 0),
        (tags::SAMPLES_PER_PIXEL, samples_per_pixel),
    ] {
        obj.get_or_insert(tag).unwrap().set_u16(0, value).unwrap();
    }
    obj
}

fn pixel_bytes(obj: &AttributeCollection) -> Vec<u8> {
    obj.get(tags::PIXEL_DATA)
        .and_then(|attr| attr.binary())
        .map(|values| values.create_byte_buffer(Endianness::Little))
        .unwrap()
}

#[test]
fn odd_frames_share_a_single_pad_byte() {
    let mut obj = image(3, 3, 8, 1);
    obj.put(Attribute::with_str(tags::NUMBER_OF_FRAMES, VR::IS, "3").unwrap())
        .unwrap();
    let mut data: Vec<u8> = (1..=27).collect();
    data.push(0);
    obj.get_or_insert_with_vr(tags::PIXEL_DATA, VR::OB)
        .unwrap()
        .set_binary(BinaryValues::U8(BinaryBuffer::from(data.clone())))
        .unwrap();

    let mut pixels = UncompressedPixelData::from_collection(&obj).unwrap();
    assert_eq!(pixels.number_of_frames(), 3);
    assert_eq!(pixels.uncompressed_frame_size(), 10);
    assert_eq!(pixels.frame(1).unwrap(), &[10, 11, 12, 13, 14, 15, 16, 17, 18, 0]);

    pixels.update_attribute_collection(&mut obj).unwrap();
    assert_eq!(pixel_bytes(&obj), data);

    let mut frame = vec![0xAA; 9];
    frame.push(0);
    pixels.append_frame(&frame).unwrap();
    pixels.update_attribute_collection(&mut obj).unwrap();
    let written = pixel_bytes(&obj);
    assert_eq!(written.len(), 36);
    assert_eq!(&written[..27], &data[..27]);
    assert_eq!(&written[27..], &[0xAA; 9]);
    assert_eq!(
        obj.get(tags::NUMBER_OF_FRAMES)
            .and_then(|attr| attr.try_get_string(0))
            .as_deref(),
        Some("4")
    );

    let reread = UncompressedPixelData::from_collection(&obj).unwrap();
    assert_eq!(reread, pixels);
}

#[test]
fn wide_samples_are_written_as_words() {
    let mut obj = image(2, 2, 16, 1);
    let mut pixels = UncompressedPixelData::from_collection(&obj).unwrap();
    pixels
        .append_frame(&[0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04, 0x01])
        .unwrap();
    pixels.update_attribute_collection(&mut obj).unwrap();

    let pixel_data = obj.get(tags::PIXEL_DATA).unwrap();
    assert_eq!(pixel_data.vr(), VR::OW);
    assert_eq!(pixel_data.count(), 4);
    assert_eq!(pixel_data.get_u16(3).unwrap(), 0x0104);
    // a single frame does not need the attribute
    assert!(!obj.contains(tags::NUMBER_OF_FRAMES));
}

#[test]
fn planar_configuration_is_written_back() {
    let mut obj = image(1, 2, 8, 3);
    obj.get_or_insert(tags::PLANAR_CONFIGURATION)
        .unwrap()
        .set_u16(0, 0)
        .unwrap();
    let mut pixels = UncompressedPixelData::from_collection(&obj).unwrap();
    pixels.append_frame(&[1, 2, 3, 4, 5, 6]).unwrap();
    pixels.append_frame(&[7, 8, 9, 10, 11, 12]).unwrap();

    pixels.toggle_planar_configuration();
    assert_eq!(pixels.planar_configuration(), 1);
    assert_eq!(pixels.frame(0).unwrap(), &[1, 4, 2, 5, 3, 6]);
    assert_eq!(pixels.frame(1).unwrap(), &[7, 10, 8, 11, 9, 12]);

    pixels.update_attribute_collection(&mut obj).unwrap();
    assert_eq!(
        obj.get(tags::PLANAR_CONFIGURATION)
            .unwrap()
            .get_u16(0)
            .unwrap(),
        1
    );
    assert_eq!(pixel_bytes(&obj), vec![1, 4, 2, 5, 3, 6, 7, 10, 8, 11, 9, 12]);
}

#[test]
fn normalized_frames_keep_signed_values() {
    let mut obj = image(1, 2, 16, 1);
    for (tag, value) in [
        (tags::BITS_STORED, 12),
        (tags::HIGH_BIT, 13),
        (tags::PIXEL_REPRESENTATION, 1),
    ] {
        obj.get_or_insert(tag).unwrap().set_u16(0, value).unwrap();
    }
    let mut pixels = UncompressedPixelData::from_collection(&obj).unwrap();
    pixels.append_frame(&[0x00, 0x20, 0xFC, 0x1F]).unwrap();
    pixels.normalize();
    assert_eq!(pixels.high_bit(), 11);
    assert_eq!(pixels.frame(0).unwrap(), &[0x00, 0xF8, 0xFF, 0x07]);

    pixels.update_attribute_collection(&mut obj).unwrap();
    assert_eq!(obj.get(tags::HIGH_BIT).unwrap().get_u16(0).unwrap(), 11);
}
