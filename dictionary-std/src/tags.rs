//! Data element tag declarations
//!
//! Tags of repeating groups such as `(60xx,eeee)` are declared
//! with the `xx` portion zeroed.
// Automatically generated. Edit at your own risk.

use dicom_core::dictionary::{DataDictionaryEntryRef, Multiplicity, TagRange::*, VirtualVr::*};
use dicom_core::header::{Tag, VR};

/// CommandGroupLength (0000,0000) UL 1
#[rustfmt::skip]
pub const COMMAND_GROUP_LENGTH: Tag = Tag(0x0000, 0x0000);
/// AffectedSOPClassUID (0000,0002) UI 1
#[rustfmt::skip]
pub const AFFECTED_SOP_CLASS_UID: Tag = Tag(0x0000, 0x0002);
/// CommandField (0000,0100) US 1
#[rustfmt::skip]
pub const COMMAND_FIELD: Tag = Tag(0x0000, 0x0100);
/// MessageID (0000,0110) US 1
#[rustfmt::skip]
pub const MESSAGE_ID: Tag = Tag(0x0000, 0x0110);
/// Status (0000,0900) US 1
#[rustfmt::skip]
pub const STATUS: Tag = Tag(0x0000, 0x0900);
/// FileMetaInformationGroupLength (0002,0000) UL 1
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion (0002,0001) OB 1
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID (0002,0002) UI 1
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003) UI 1
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010) UI 1
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012) UI 1
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013) SH 1
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SpecificCharacterSet (0008,0005) CS 1-n
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// ImageType (0008,0008) CS 2-n
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// InstanceCreationDate (0008,0012) DA 1
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// InstanceCreationTime (0008,0013) TM 1
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// SOPClassUID (0008,0016) UI 1
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOPInstanceUID (0008,0018) UI 1
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// StudyDate (0008,0020) DA 1
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021) DA 1
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// AcquisitionDate (0008,0022) DA 1
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// ContentDate (0008,0023) DA 1
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// AcquisitionDateTime (0008,002A) DT 1
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// StudyTime (0008,0030) TM 1
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime (0008,0031) TM 1
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// AcquisitionTime (0008,0032) TM 1
#[rustfmt::skip]
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// ContentTime (0008,0033) TM 1
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// AccessionNumber (0008,0050) SH 1
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// Modality (0008,0060) CS 1
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// Manufacturer (0008,0070) LO 1
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName (0008,0080) LO 1
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// ReferringPhysicianName (0008,0090) PN 1
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// CodeValue (0008,0100) SH 1
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// CodingSchemeDesignator (0008,0102) SH 1
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// CodeMeaning (0008,0104) LO 1
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// StationName (0008,1010) SH 1
#[rustfmt::skip]
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// StudyDescription (0008,1030) LO 1
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// ProcedureCodeSequence (0008,1032) SQ 1
#[rustfmt::skip]
pub const PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1032);
/// SeriesDescription (0008,103E) LO 1
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// OperatorsName (0008,1070) PN 1-n
#[rustfmt::skip]
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// ManufacturerModelName (0008,1090) LO 1
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// ReferencedStudySequence (0008,1110) SQ 1
#[rustfmt::skip]
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// ReferencedSeriesSequence (0008,1115) SQ 1
#[rustfmt::skip]
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// ReferencedImageSequence (0008,1140) SQ 1
#[rustfmt::skip]
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// ReferencedSOPClassUID (0008,1150) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID (0008,1155) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// DerivationDescription (0008,2111) ST 1
#[rustfmt::skip]
pub const DERIVATION_DESCRIPTION: Tag = Tag(0x0008, 0x2111);
/// PatientName (0010,0010) PN 1
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020) LO 1
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// IssuerOfPatientID (0010,0021) LO 1
#[rustfmt::skip]
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// PatientBirthDate (0010,0030) DA 1
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientBirthTime (0010,0032) TM 1
#[rustfmt::skip]
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
/// PatientSex (0010,0040) CS 1
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// OtherPatientIDs (0010,1000) LO 1-n (retired)
#[rustfmt::skip]
pub const OTHER_PATIENT_IDS: Tag = Tag(0x0010, 0x1000);
/// OtherPatientNames (0010,1001) PN 1-n
#[rustfmt::skip]
pub const OTHER_PATIENT_NAMES: Tag = Tag(0x0010, 0x1001);
/// PatientAge (0010,1010) AS 1
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientSize (0010,1020) DS 1
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// PatientWeight (0010,1030) DS 1
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// EthnicGroup (0010,2160) SH 1
#[rustfmt::skip]
pub const ETHNIC_GROUP: Tag = Tag(0x0010, 0x2160);
/// PatientComments (0010,4000) LT 1
#[rustfmt::skip]
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// BodyPartExamined (0018,0015) CS 1
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// SliceThickness (0018,0050) DS 1
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP (0018,0060) DS 1
#[rustfmt::skip]
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// SpacingBetweenSlices (0018,0088) DS 1
#[rustfmt::skip]
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// DeviceSerialNumber (0018,1000) LO 1
#[rustfmt::skip]
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// SoftwareVersions (0018,1020) LO 1-n
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// ProtocolName (0018,1030) LO 1
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// ExposureTime (0018,1150) IS 1
#[rustfmt::skip]
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
/// XRayTubeCurrent (0018,1151) IS 1
#[rustfmt::skip]
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// PatientPosition (0018,5100) CS 1
#[rustfmt::skip]
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// StudyInstanceUID (0020,000D) UI 1
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E) UI 1
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID (0020,0010) SH 1
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber (0020,0011) IS 1
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// AcquisitionNumber (0020,0012) IS 1
#[rustfmt::skip]
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// InstanceNumber (0020,0013) IS 1
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// PatientOrientation (0020,0020) CS 2
#[rustfmt::skip]
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// ImagePositionPatient (0020,0032) DS 3
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientationPatient (0020,0037) DS 6
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// FrameOfReferenceUID (0020,0052) UI 1
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// Laterality (0020,0060) CS 1
#[rustfmt::skip]
pub const LATERALITY: Tag = Tag(0x0020, 0x0060);
/// SliceLocation (0020,1041) DS 1
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// ImageComments (0020,4000) LT 1
#[rustfmt::skip]
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// DimensionIndexPointer (0020,9165) AT 1
#[rustfmt::skip]
pub const DIMENSION_INDEX_POINTER: Tag = Tag(0x0020, 0x9165);
/// SamplesPerPixel (0028,0002) US 1
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation (0028,0004) CS 1
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// PlanarConfiguration (0028,0006) US 1
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// NumberOfFrames (0028,0008) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// FrameIncrementPointer (0028,0009) AT 1-n
#[rustfmt::skip]
pub const FRAME_INCREMENT_POINTER: Tag = Tag(0x0028, 0x0009);
/// Rows (0028,0010) US 1
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US 1
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelSpacing (0028,0030) DS 2
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// BitsAllocated (0028,0100) US 1
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101) US 1
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102) US 1
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103) US 1
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// SmallestImagePixelValue (0028,0106) Xs 1
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// LargestImagePixelValue (0028,0107) Xs 1
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// PixelPaddingValue (0028,0120) Xs 1
#[rustfmt::skip]
pub const PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0120);
/// LossyImageCompression (0028,2110) CS 1
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// WindowCenter (0028,1050) DS 1-n
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth (0028,1051) DS 1-n
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept (0028,1052) DS 1
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053) DS 1
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// RescaleType (0028,1054) LO 1
#[rustfmt::skip]
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// RedPaletteColorLookupTableDescriptor (0028,1101) Xs 3
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1101);
/// GreenPaletteColorLookupTableDescriptor (0028,1102) Xs 3
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1102);
/// BluePaletteColorLookupTableDescriptor (0028,1103) Xs 3
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1103);
/// RedPaletteColorLookupTableData (0028,1201) OW 1
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1201);
/// GreenPaletteColorLookupTableData (0028,1202) OW 1
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1202);
/// BluePaletteColorLookupTableData (0028,1203) OW 1
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1203);
/// ModalityLUTSequence (0028,3000) SQ 1
#[rustfmt::skip]
pub const MODALITY_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3000);
/// LUTDescriptor (0028,3002) Xs 3
#[rustfmt::skip]
pub const LUT_DESCRIPTOR: Tag = Tag(0x0028, 0x3002);
/// LUTExplanation (0028,3003) LO 1
#[rustfmt::skip]
pub const LUT_EXPLANATION: Tag = Tag(0x0028, 0x3003);
/// LUTData (0028,3006) Lt 1-n
#[rustfmt::skip]
pub const LUT_DATA: Tag = Tag(0x0028, 0x3006);
/// VOILUTSequence (0028,3010) SQ 1
#[rustfmt::skip]
pub const VOI_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3010);
/// RequestedProcedureDescription (0032,1060) LO 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// RequestAttributesSequence (0040,0275) SQ 1
#[rustfmt::skip]
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// ScheduledProcedureStepID (0040,0009) SH 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0009);
/// PerformedProcedureStepStartDate (0040,0244) DA 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// ContentSequence (0040,A730) SQ 1
#[rustfmt::skip]
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// RealWorldValueMappingSequence (0040,9096) SQ 1
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_MAPPING_SEQUENCE: Tag = Tag(0x0040, 0x9096);
/// DoubleFloatRealWorldValueLastValueMapped (0040,9211) FD 1
#[rustfmt::skip]
pub const DOUBLE_FLOAT_REAL_WORLD_VALUE_LAST_VALUE_MAPPED: Tag = Tag(0x0040, 0x9211);
/// OverlayRows (60xx,0010) US 1
#[rustfmt::skip]
pub const OVERLAY_ROWS: Tag = Tag(0x6000, 0x0010);
/// OverlayColumns (60xx,0011) US 1
#[rustfmt::skip]
pub const OVERLAY_COLUMNS: Tag = Tag(0x6000, 0x0011);
/// NumberOfFramesInOverlay (60xx,0015) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES_IN_OVERLAY: Tag = Tag(0x6000, 0x0015);
/// OverlayDescription (60xx,0022) LO 1
#[rustfmt::skip]
pub const OVERLAY_DESCRIPTION: Tag = Tag(0x6000, 0x0022);
/// OverlayType (60xx,0040) CS 1
#[rustfmt::skip]
pub const OVERLAY_TYPE: Tag = Tag(0x6000, 0x0040);
/// OverlayOrigin (60xx,0050) SS 2
#[rustfmt::skip]
pub const OVERLAY_ORIGIN: Tag = Tag(0x6000, 0x0050);
/// OverlayBitsAllocated (60xx,0100) US 1
#[rustfmt::skip]
pub const OVERLAY_BITS_ALLOCATED: Tag = Tag(0x6000, 0x0100);
/// OverlayBitPosition (60xx,0102) US 1
#[rustfmt::skip]
pub const OVERLAY_BIT_POSITION: Tag = Tag(0x6000, 0x0102);
/// OverlayData (60xx,3000) Ox 1
#[rustfmt::skip]
pub const OVERLAY_DATA: Tag = Tag(0x6000, 0x3000);
/// FloatPixelData (7FE0,0008) OF 1
#[rustfmt::skip]
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// DoubleFloatPixelData (7FE0,0009) OD 1
#[rustfmt::skip]
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// PixelData (7FE0,0010) Px 1
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// Item (FFFE,E000) UN 1
#[rustfmt::skip]
pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
/// ItemDelimitationItem (FFFE,E00D) UN 1
#[rustfmt::skip]
pub const ITEM_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE00D);
/// SequenceDelimitationItem (FFFE,E0DD) UN 1
#[rustfmt::skip]
pub const SEQUENCE_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE0DD);

type E = DataDictionaryEntryRef<'static>;

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E] = &[
    E { tag: Single(COMMAND_GROUP_LENGTH), alias: "CommandGroupLength", vr: Exact(VR::UL), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(AFFECTED_SOP_CLASS_UID), alias: "AffectedSOPClassUID", vr: Exact(VR::UI), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(COMMAND_FIELD), alias: "CommandField", vr: Exact(VR::US), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(MESSAGE_ID), alias: "MessageID", vr: Exact(VR::US), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(STATUS), alias: "Status", vr: Exact(VR::US), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(FILE_META_INFORMATION_GROUP_LENGTH), alias: "FileMetaInformationGroupLength", vr: Exact(VR::UL), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(FILE_META_INFORMATION_VERSION), alias: "FileMetaInformationVersion", vr: Exact(VR::OB), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(MEDIA_STORAGE_SOP_CLASS_UID), alias: "MediaStorageSOPClassUID", vr: Exact(VR::UI), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(MEDIA_STORAGE_SOP_INSTANCE_UID), alias: "MediaStorageSOPInstanceUID", vr: Exact(VR::UI), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(TRANSFER_SYNTAX_UID), alias: "TransferSyntaxUID", vr: Exact(VR::UI), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(IMPLEMENTATION_CLASS_UID), alias: "ImplementationClassUID", vr: Exact(VR::UI), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(IMPLEMENTATION_VERSION_NAME), alias: "ImplementationVersionName", vr: Exact(VR::SH), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(SPECIFIC_CHARACTER_SET), alias: "SpecificCharacterSet", vr: Exact(VR::CS), vm: Multiplicity::ONE_OR_MORE, retired: false },
    E { tag: Single(IMAGE_TYPE), alias: "ImageType", vr: Exact(VR::CS), vm: Multiplicity { min: 2, max: None }, retired: false },
    E { tag: Single(INSTANCE_CREATION_DATE), alias: "InstanceCreationDate", vr: Exact(VR::DA), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(INSTANCE_CREATION_TIME), alias: "InstanceCreationTime", vr: Exact(VR::TM), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(SOP_CLASS_UID), alias: "SOPClassUID", vr: Exact(VR::UI), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(SOP_INSTANCE_UID), alias: "SOPInstanceUID", vr: Exact(VR::UI), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(STUDY_DATE), alias: "StudyDate", vr: Exact(VR::DA), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(SERIES_DATE), alias: "SeriesDate", vr: Exact(VR::DA), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(ACQUISITION_DATE), alias: "AcquisitionDate", vr: Exact(VR::DA), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(CONTENT_DATE), alias: "ContentDate", vr: Exact(VR::DA), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(ACQUISITION_DATE_TIME), alias: "AcquisitionDateTime", vr: Exact(VR::DT), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(STUDY_TIME), alias: "StudyTime", vr: Exact(VR::TM), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(SERIES_TIME), alias: "SeriesTime", vr: Exact(VR::TM), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(ACQUISITION_TIME), alias: "AcquisitionTime", vr: Exact(VR::TM), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(CONTENT_TIME), alias: "ContentTime", vr: Exact(VR::TM), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(ACCESSION_NUMBER), alias: "AccessionNumber", vr: Exact(VR::SH), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(MODALITY), alias: "Modality", vr: Exact(VR::CS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(MANUFACTURER), alias: "Manufacturer", vr: Exact(VR::LO), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(INSTITUTION_NAME), alias: "InstitutionName", vr: Exact(VR::LO), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(REFERRING_PHYSICIAN_NAME), alias: "ReferringPhysicianName", vr: Exact(VR::PN), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(CODE_VALUE), alias: "CodeValue", vr: Exact(VR::SH), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(CODING_SCHEME_DESIGNATOR), alias: "CodingSchemeDesignator", vr: Exact(VR::SH), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(CODE_MEANING), alias: "CodeMeaning", vr: Exact(VR::LO), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(STATION_NAME), alias: "StationName", vr: Exact(VR::SH), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(STUDY_DESCRIPTION), alias: "StudyDescription", vr: Exact(VR::LO), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(PROCEDURE_CODE_SEQUENCE), alias: "ProcedureCodeSequence", vr: Exact(VR::SQ), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(SERIES_DESCRIPTION), alias: "SeriesDescription", vr: Exact(VR::LO), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(OPERATORS_NAME), alias: "OperatorsName", vr: Exact(VR::PN), vm: Multiplicity::ONE_OR_MORE, retired: false },
    E { tag: Single(MANUFACTURER_MODEL_NAME), alias: "ManufacturerModelName", vr: Exact(VR::LO), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(REFERENCED_STUDY_SEQUENCE), alias: "ReferencedStudySequence", vr: Exact(VR::SQ), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(REFERENCED_SERIES_SEQUENCE), alias: "ReferencedSeriesSequence", vr: Exact(VR::SQ), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(REFERENCED_IMAGE_SEQUENCE), alias: "ReferencedImageSequence", vr: Exact(VR::SQ), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(REFERENCED_SOP_CLASS_UID), alias: "ReferencedSOPClassUID", vr: Exact(VR::UI), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(REFERENCED_SOP_INSTANCE_UID), alias: "ReferencedSOPInstanceUID", vr: Exact(VR::UI), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(DERIVATION_DESCRIPTION), alias: "DerivationDescription", vr: Exact(VR::ST), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(PATIENT_NAME), alias: "PatientName", vr: Exact(VR::PN), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(PATIENT_ID), alias: "PatientID", vr: Exact(VR::LO), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(ISSUER_OF_PATIENT_ID), alias: "IssuerOfPatientID", vr: Exact(VR::LO), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(PATIENT_BIRTH_DATE), alias: "PatientBirthDate", vr: Exact(VR::DA), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(PATIENT_BIRTH_TIME), alias: "PatientBirthTime", vr: Exact(VR::TM), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(PATIENT_SEX), alias: "PatientSex", vr: Exact(VR::CS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(OTHER_PATIENT_IDS), alias: "OtherPatientIDs", vr: Exact(VR::LO), vm: Multiplicity::ONE_OR_MORE, retired: true },
    E { tag: Single(OTHER_PATIENT_NAMES), alias: "OtherPatientNames", vr: Exact(VR::PN), vm: Multiplicity::ONE_OR_MORE, retired: false },
    E { tag: Single(PATIENT_AGE), alias: "PatientAge", vr: Exact(VR::AS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(PATIENT_SIZE), alias: "PatientSize", vr: Exact(VR::DS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(PATIENT_WEIGHT), alias: "PatientWeight", vr: Exact(VR::DS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(ETHNIC_GROUP), alias: "EthnicGroup", vr: Exact(VR::SH), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(PATIENT_COMMENTS), alias: "PatientComments", vr: Exact(VR::LT), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(BODY_PART_EXAMINED), alias: "BodyPartExamined", vr: Exact(VR::CS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(SLICE_THICKNESS), alias: "SliceThickness", vr: Exact(VR::DS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(KVP), alias: "KVP", vr: Exact(VR::DS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(SPACING_BETWEEN_SLICES), alias: "SpacingBetweenSlices", vr: Exact(VR::DS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(DEVICE_SERIAL_NUMBER), alias: "DeviceSerialNumber", vr: Exact(VR::LO), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(SOFTWARE_VERSIONS), alias: "SoftwareVersions", vr: Exact(VR::LO), vm: Multiplicity::ONE_OR_MORE, retired: false },
    E { tag: Single(PROTOCOL_NAME), alias: "ProtocolName", vr: Exact(VR::LO), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(EXPOSURE_TIME), alias: "ExposureTime", vr: Exact(VR::IS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(X_RAY_TUBE_CURRENT), alias: "XRayTubeCurrent", vr: Exact(VR::IS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(PATIENT_POSITION), alias: "PatientPosition", vr: Exact(VR::CS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(STUDY_INSTANCE_UID), alias: "StudyInstanceUID", vr: Exact(VR::UI), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(SERIES_INSTANCE_UID), alias: "SeriesInstanceUID", vr: Exact(VR::UI), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(STUDY_ID), alias: "StudyID", vr: Exact(VR::SH), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(SERIES_NUMBER), alias: "SeriesNumber", vr: Exact(VR::IS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(ACQUISITION_NUMBER), alias: "AcquisitionNumber", vr: Exact(VR::IS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(INSTANCE_NUMBER), alias: "InstanceNumber", vr: Exact(VR::IS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(PATIENT_ORIENTATION), alias: "PatientOrientation", vr: Exact(VR::CS), vm: Multiplicity::new(2, 2), retired: false },
    E { tag: Single(IMAGE_POSITION_PATIENT), alias: "ImagePositionPatient", vr: Exact(VR::DS), vm: Multiplicity::new(3, 3), retired: false },
    E { tag: Single(IMAGE_ORIENTATION_PATIENT), alias: "ImageOrientationPatient", vr: Exact(VR::DS), vm: Multiplicity::new(6, 6), retired: false },
    E { tag: Single(FRAME_OF_REFERENCE_UID), alias: "FrameOfReferenceUID", vr: Exact(VR::UI), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(LATERALITY), alias: "Laterality", vr: Exact(VR::CS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(SLICE_LOCATION), alias: "SliceLocation", vr: Exact(VR::DS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(IMAGE_COMMENTS), alias: "ImageComments", vr: Exact(VR::LT), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(DIMENSION_INDEX_POINTER), alias: "DimensionIndexPointer", vr: Exact(VR::AT), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(SAMPLES_PER_PIXEL), alias: "SamplesPerPixel", vr: Exact(VR::US), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(PHOTOMETRIC_INTERPRETATION), alias: "PhotometricInterpretation", vr: Exact(VR::CS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(PLANAR_CONFIGURATION), alias: "PlanarConfiguration", vr: Exact(VR::US), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(NUMBER_OF_FRAMES), alias: "NumberOfFrames", vr: Exact(VR::IS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(FRAME_INCREMENT_POINTER), alias: "FrameIncrementPointer", vr: Exact(VR::AT), vm: Multiplicity::ONE_OR_MORE, retired: false },
    E { tag: Single(ROWS), alias: "Rows", vr: Exact(VR::US), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(COLUMNS), alias: "Columns", vr: Exact(VR::US), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(PIXEL_SPACING), alias: "PixelSpacing", vr: Exact(VR::DS), vm: Multiplicity::new(2, 2), retired: false },
    E { tag: Single(BITS_ALLOCATED), alias: "BitsAllocated", vr: Exact(VR::US), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(BITS_STORED), alias: "BitsStored", vr: Exact(VR::US), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(HIGH_BIT), alias: "HighBit", vr: Exact(VR::US), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(PIXEL_REPRESENTATION), alias: "PixelRepresentation", vr: Exact(VR::US), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(SMALLEST_IMAGE_PIXEL_VALUE), alias: "SmallestImagePixelValue", vr: Xs, vm: Multiplicity::ONE, retired: false },
    E { tag: Single(LARGEST_IMAGE_PIXEL_VALUE), alias: "LargestImagePixelValue", vr: Xs, vm: Multiplicity::ONE, retired: false },
    E { tag: Single(PIXEL_PADDING_VALUE), alias: "PixelPaddingValue", vr: Xs, vm: Multiplicity::ONE, retired: false },
    E { tag: Single(LOSSY_IMAGE_COMPRESSION), alias: "LossyImageCompression", vr: Exact(VR::CS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(WINDOW_CENTER), alias: "WindowCenter", vr: Exact(VR::DS), vm: Multiplicity::ONE_OR_MORE, retired: false },
    E { tag: Single(WINDOW_WIDTH), alias: "WindowWidth", vr: Exact(VR::DS), vm: Multiplicity::ONE_OR_MORE, retired: false },
    E { tag: Single(RESCALE_INTERCEPT), alias: "RescaleIntercept", vr: Exact(VR::DS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(RESCALE_SLOPE), alias: "RescaleSlope", vr: Exact(VR::DS), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(RESCALE_TYPE), alias: "RescaleType", vr: Exact(VR::LO), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "RedPaletteColorLookupTableDescriptor", vr: Xs, vm: Multiplicity::new(3, 3), retired: false },
    E { tag: Single(GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "GreenPaletteColorLookupTableDescriptor", vr: Xs, vm: Multiplicity::new(3, 3), retired: false },
    E { tag: Single(BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "BluePaletteColorLookupTableDescriptor", vr: Xs, vm: Multiplicity::new(3, 3), retired: false },
    E { tag: Single(RED_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "RedPaletteColorLookupTableData", vr: Exact(VR::OW), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "GreenPaletteColorLookupTableData", vr: Exact(VR::OW), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "BluePaletteColorLookupTableData", vr: Exact(VR::OW), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(MODALITY_LUT_SEQUENCE), alias: "ModalityLUTSequence", vr: Exact(VR::SQ), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(LUT_DESCRIPTOR), alias: "LUTDescriptor", vr: Xs, vm: Multiplicity::new(3, 3), retired: false },
    E { tag: Single(LUT_EXPLANATION), alias: "LUTExplanation", vr: Exact(VR::LO), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(LUT_DATA), alias: "LUTData", vr: Lt, vm: Multiplicity::ONE_OR_MORE, retired: false },
    E { tag: Single(VOI_LUT_SEQUENCE), alias: "VOILUTSequence", vr: Exact(VR::SQ), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(REQUESTED_PROCEDURE_DESCRIPTION), alias: "RequestedProcedureDescription", vr: Exact(VR::LO), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(REQUEST_ATTRIBUTES_SEQUENCE), alias: "RequestAttributesSequence", vr: Exact(VR::SQ), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(SCHEDULED_PROCEDURE_STEP_ID), alias: "ScheduledProcedureStepID", vr: Exact(VR::SH), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_START_DATE), alias: "PerformedProcedureStepStartDate", vr: Exact(VR::DA), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(CONTENT_SEQUENCE), alias: "ContentSequence", vr: Exact(VR::SQ), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(REAL_WORLD_VALUE_MAPPING_SEQUENCE), alias: "RealWorldValueMappingSequence", vr: Exact(VR::SQ), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(DOUBLE_FLOAT_REAL_WORLD_VALUE_LAST_VALUE_MAPPED), alias: "DoubleFloatRealWorldValueLastValueMapped", vr: Exact(VR::FD), vm: Multiplicity::ONE, retired: false },
    E { tag: Group100(OVERLAY_ROWS), alias: "OverlayRows", vr: Exact(VR::US), vm: Multiplicity::ONE, retired: false },
    E { tag: Group100(OVERLAY_COLUMNS), alias: "OverlayColumns", vr: Exact(VR::US), vm: Multiplicity::ONE, retired: false },
    E { tag: Group100(NUMBER_OF_FRAMES_IN_OVERLAY), alias: "NumberOfFramesInOverlay", vr: Exact(VR::IS), vm: Multiplicity::ONE, retired: false },
    E { tag: Group100(OVERLAY_DESCRIPTION), alias: "OverlayDescription", vr: Exact(VR::LO), vm: Multiplicity::ONE, retired: false },
    E { tag: Group100(OVERLAY_TYPE), alias: "OverlayType", vr: Exact(VR::CS), vm: Multiplicity::ONE, retired: false },
    E { tag: Group100(OVERLAY_ORIGIN), alias: "OverlayOrigin", vr: Exact(VR::SS), vm: Multiplicity::new(2, 2), retired: false },
    E { tag: Group100(OVERLAY_BITS_ALLOCATED), alias: "OverlayBitsAllocated", vr: Exact(VR::US), vm: Multiplicity::ONE, retired: false },
    E { tag: Group100(OVERLAY_BIT_POSITION), alias: "OverlayBitPosition", vr: Exact(VR::US), vm: Multiplicity::ONE, retired: false },
    E { tag: Group100(OVERLAY_DATA), alias: "OverlayData", vr: Ox, vm: Multiplicity::ONE, retired: false },
    E { tag: Single(FLOAT_PIXEL_DATA), alias: "FloatPixelData", vr: Exact(VR::OF), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(DOUBLE_FLOAT_PIXEL_DATA), alias: "DoubleFloatPixelData", vr: Exact(VR::OD), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(PIXEL_DATA), alias: "PixelData", vr: Px, vm: Multiplicity::ONE, retired: false },
    E { tag: Single(ITEM), alias: "Item", vr: Exact(VR::UN), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(ITEM_DELIMITATION_ITEM), alias: "ItemDelimitationItem", vr: Exact(VR::UN), vm: Multiplicity::ONE, retired: false },
    E { tag: Single(SEQUENCE_DELIMITATION_ITEM), alias: "SequenceDelimitationItem", vr: Exact(VR::UN), vm: Multiplicity::ONE, retired: false },
];
