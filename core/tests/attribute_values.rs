//! Attribute behavior as seen by dependents of `dicom_core`.

use dicom_core::transfer_syntax::{EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN};
use dicom_core::{Attribute, Error, Tag, WriteOptions, VR};
use rstest::rstest;

type Attr = Attribute;

#[test]
fn decimal_strings_by_index() {
    let mut attr = Attr::new(Tag(0x0018, 0x0050), VR::DS);
    attr.set_string(0, "1000").unwrap();
    attr.set_string(1, "2000").unwrap();
    assert_eq!(attr.count(), 2);
    assert_eq!(attr.to_value_string(), "1000\\2000");
    assert_eq!(attr.try_get_f64(1), Some(2000.));
}

#[test]
fn negative_number_in_tag_attribute() {
    let mut attr = Attr::new(Tag(0x0028, 0x0009), VR::AT);
    let err = attr.set_i16(0, -1).unwrap_err();
    assert!(matches!(err, Error::Data { .. }));
    assert_eq!(attr.count(), 0);
    assert!(attr.is_empty());
}

#[rstest]
#[case(VR::AE, "STORESCP")]
#[case(VR::AS, "045Y")]
#[case(VR::CS, "ORIGINAL\\PRIMARY")]
#[case(VR::DA, "20240131")]
#[case(VR::DS, "1.5\\-2\\3e4")]
#[case(VR::DT, "20240131101500.5")]
#[case(VR::IS, "1\\2\\3")]
#[case(VR::LO, "Some Hospital")]
#[case(VR::LT, "free text\\with a backslash")]
#[case(VR::PN, "Doe^John\\Roe^Jane")]
#[case(VR::SH, "ABC")]
#[case(VR::ST, "short text")]
#[case(VR::TM, "101500.25")]
#[case(VR::UC, "unlimited")]
#[case(VR::UI, "1.2.840.10008.5.1.4.1.1.2")]
#[case(VR::UR, "http://example.com")]
#[case(VR::UT, "unlimited text")]
#[case(VR::FD, "1.5\\-0.25")]
#[case(VR::FL, "2.5")]
#[case(VR::SL, "-70000\\70000")]
#[case(VR::SS, "-300")]
#[case(VR::SV, "-5000000000")]
#[case(VR::UL, "4000000000")]
#[case(VR::US, "512\\256")]
#[case(VR::UV, "10000000000")]
#[case(VR::AT, "7FE00010\\00100010")]
#[case(VR::OB, "1\\2\\255")]
#[case(VR::OW, "65535")]
fn string_round_trip(#[case] vr: VR, #[case] value: &str) {
    let attr = Attr::with_str(Tag(0x0009, 0x1000), vr, value).unwrap();
    assert_eq!(attr.to_value_string(), value);
}

#[rstest]
#[case(VR::US, "-1")]
#[case(VR::US, "65536")]
#[case(VR::SS, "40000")]
#[case(VR::UL, "-5")]
#[case(VR::FL, "")]
fn rejected_binary_strings(#[case] vr: VR, #[case] value: &str) {
    let mut attr = Attr::with_str(Tag(0x0009, 0x1000), vr, "1").unwrap();
    let before = attr.stream_length();
    assert!(matches!(attr.set_string(0, value), Err(Error::Data { .. })));
    assert_eq!(attr.count(), 1);
    assert_eq!(attr.stream_length(), before);
}

#[test]
fn append_grows_by_one() {
    let mut attr = Attr::new(Tag(0x0028, 0x0030), VR::DS);
    for i in 0..5 {
        assert_eq!(attr.count(), i);
        attr.append_f32(0.5).unwrap();
    }
    assert!(matches!(
        attr.set_string(7, "1"),
        Err(Error::Index { .. })
    ));
    assert_eq!(attr.count(), 5);
}

#[test]
fn tri_state_is_exclusive() {
    let mut attr = Attr::new(Tag(0x0010, 0x0030), VR::DA);
    let check = |attr: &Attr| assert!(!(attr.is_empty() && attr.is_null()));

    check(&attr);
    attr.set_null_value();
    check(&attr);
    assert!(attr.is_null());
    attr.set_string(0, "19800101").unwrap();
    check(&attr);
    assert!(!attr.is_null() && !attr.is_empty());
    attr.set_empty_value();
    check(&attr);
    assert!(attr.is_empty());
}

#[test]
fn element_lengths() {
    let attr = Attr::with_str(Tag(0x0008, 0x0050), VR::SH, "XYZ").unwrap();
    assert_eq!(attr.stream_length(), 4);
    let options = WriteOptions::default();
    assert_eq!(
        attr.write_length(&IMPLICIT_VR_LITTLE_ENDIAN, &options),
        12
    );
    assert_eq!(
        attr.write_length(&EXPLICIT_VR_LITTLE_ENDIAN, &options),
        12
    );

    let attr = Attr::with_str(Tag(0x0008, 0x0119), VR::UC, "XYZ").unwrap();
    assert_eq!(
        attr.write_length(&EXPLICIT_VR_LITTLE_ENDIAN, &options),
        16
    );
}
