//! Field mapping tables
//!
//! One table per entity, shared by encode and decode. Security, the coverage
//! bounding box and association identifiers are handled outside these
//! tables.

use crate::record::{
    keys, EnumTable, APPROVAL_STATUS, CARD_STATUS, IMAGERY_CATEGORY, SUBJECTIVE_QUALITY,
    VIDEO_ENCODING,
};
use crate::schema::names::{self, EntityKind};
use crate::schema::ValueKind::{self, Bool, Date, Double, Int, Long, Short, Text};

/// How a wire value is checked on its way to or from the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    Plain,
    Enumeration(EnumTable),
}

/// One attribute of an entity and the record key it maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub attribute: &'static str,
    pub key: &'static str,
    pub kind: ValueKind,
    pub coercion: Coercion,
}

const fn field(attribute: &'static str, key: &'static str, kind: ValueKind) -> FieldMapping {
    FieldMapping {
        attribute,
        key,
        kind,
        coercion: Coercion::Plain,
    }
}

const fn enumerated(attribute: &'static str, key: &'static str, table: EnumTable) -> FieldMapping {
    FieldMapping {
        attribute,
        key,
        kind: Text,
        coercion: Coercion::Enumeration(table),
    }
}

const CARD: &[FieldMapping] = &[
    field(names::IDENTIFIER, keys::ID, Text),
    field(names::SOURCE_DATE_TIME_MODIFIED, keys::METACARD_MODIFIED, Date),
    field(names::DATE_TIME_MODIFIED, keys::MODIFIED, Date),
    field(names::SOURCE_LIBRARY, keys::SOURCE_ID, Text),
    enumerated(names::STATUS, keys::CARD_STATUS, CARD_STATUS),
    field(names::NUMBER_OF_PARTS, keys::CARD_NUMBER_OF_PARTS, Int),
    field(names::PUBLISHER, keys::PUBLISHER, Text),
];

const FILE: &[FieldMapping] = &[
    field(names::ARCHIVED, keys::FILE_ARCHIVED, Bool),
    field(names::ARCHIVE_INFORMATION, keys::FILE_ARCHIVE_INFORMATION, Text),
    field(names::CREATOR, keys::CREATOR, Text),
    field(names::DATE_TIME_DECLARED, keys::CREATED, Date),
    field(names::EXTENT, keys::RESOURCE_SIZE, Double),
    field(names::FORMAT, keys::FORMAT, Text),
    field(names::FORMAT_VERSION, keys::FORMAT_VERSION, Text),
    field(names::PRODUCT_URL, keys::RESOURCE_URI, Text),
    field(names::TITLE, keys::TITLE, Text),
];

const STREAM: &[FieldMapping] = &[
    field(names::ARCHIVED, keys::STREAM_ARCHIVED, Bool),
    field(names::ARCHIVE_INFORMATION, keys::STREAM_ARCHIVE_INFORMATION, Text),
    field(names::CREATOR, keys::STREAM_CREATOR, Text),
    field(names::DATE_TIME_DECLARED, keys::STREAM_DECLARED, Date),
    field(names::STANDARD, keys::STREAM_STANDARD, Text),
    field(names::STANDARD_VERSION, keys::STREAM_STANDARD_VERSION, Text),
    field(names::SOURCE_URL, keys::STREAM_SOURCE_URI, Text),
    field(names::PROGRAM_ID, keys::STREAM_PROGRAM_ID, Short),
];

const APPROVAL: &[FieldMapping] = &[
    field(names::APPROVED_BY, keys::APPROVED_BY, Text),
    field(names::DATE_TIME_MODIFIED, keys::APPROVAL_MODIFIED, Date),
    enumerated(names::STATUS, keys::APPROVAL_STATUS, APPROVAL_STATUS),
];

const RELATED_FILE: &[FieldMapping] = &[
    field(names::CREATOR, keys::RELATED_CREATOR, Text),
    field(names::DATE_TIME_DECLARED, keys::RELATED_CREATED, Date),
    field(names::EXTENT, keys::RELATED_SIZE, Double),
    field(names::URL, keys::RELATED_URI, Text),
    field(names::IS_FILE_LOCAL, keys::RELATED_LOCAL, Bool),
    field(names::FILE_TYPE, keys::RELATED_TYPE, Text),
];

const PART: &[FieldMapping] = &[field(names::PART_IDENTIFIER, keys::PART_IDENTIFIER, Text)];

const COMMON: &[FieldMapping] = &[
    field(names::IDENTIFIER_UUID, keys::IDENTIFIER_UUID, Text),
    field(names::TYPE, keys::DATATYPE, Text),
    field(names::DESCRIPTION_ABSTRACT, keys::DESCRIPTION, Text),
    field(names::IDENTIFIER_MISSION, keys::MISSION_ID, Text),
    field(names::LANGUAGE, keys::LANGUAGE, Text),
    field(names::SOURCE, keys::COMMON_SOURCE, Text),
    field(names::SUBJECT_CATEGORY_TARGET, keys::TOPIC_CATEGORY, Text),
    field(names::TARGET_NUMBER, keys::TARGET_ID, Text),
];

const COVERAGE: &[FieldMapping] = &[
    field(names::SPATIAL_COUNTRY_CODE, keys::COUNTRY_CODE, Text),
    field(names::TEMPORAL_START, keys::START_DATE, Date),
    field(names::TEMPORAL_END, keys::END_DATE, Date),
];

const EXPLOITATION_INFO: &[FieldMapping] = &[
    field(names::DESCRIPTION, keys::EXPLOITATION_DESCRIPTION, Text),
    field(names::LEVEL, keys::EXPLOITATION_LEVEL, Short),
    field(names::AUTO_GENERATED, keys::EXPLOITATION_AUTO_GENERATED, Bool),
    enumerated(
        names::SUBJECTIVE_QUALITY_CODE,
        keys::EXPLOITATION_QUALITY,
        SUBJECTIVE_QUALITY,
    ),
];

const CXP: &[FieldMapping] = &[field(names::STATUS, keys::CXP_STATUS, Text)];

const GMTI: &[FieldMapping] = &[
    field(names::IDENTIFIER_JOB, keys::GMTI_JOB_ID, Double),
    field(names::NUMBER_OF_TARGET_REPORTS, keys::GMTI_TARGET_REPORTS, Long),
];

const IMAGERY: &[FieldMapping] = &[
    enumerated(names::CATEGORY, keys::IMAGERY_CATEGORY, IMAGERY_CATEGORY),
    field(names::CLOUD_COVER_PCT, keys::CLOUD_COVER, Short),
    field(names::COMMENTS, keys::IMAGERY_COMMENTS, Text),
    field(names::DECOMPRESSION_TECHNIQUE, keys::COMPRESSION, Text),
    field(names::IDENTIFIER, keys::IMAGE_ID, Text),
    field(names::NIIRS, keys::NIIRS, Short),
    field(names::NUMBER_OF_BANDS, keys::NUMBER_OF_BANDS, Int),
    field(names::NUMBER_OF_ROWS, keys::HEIGHT_PIXELS, Int),
    field(names::NUMBER_OF_COLUMNS, keys::WIDTH_PIXELS, Int),
    field(names::TITLE, keys::IMAGE_TITLE, Text),
];

const MESSAGE: &[FieldMapping] = &[
    field(names::RECIPIENT, keys::MESSAGE_RECIPIENT, Text),
    field(names::SUBJECT, keys::MESSAGE_SUBJECT, Text),
    field(names::MESSAGE_BODY, keys::MESSAGE_BODY, Text),
    field(names::MESSAGE_TYPE, keys::MESSAGE_TYPE, Text),
];

const REPORT: &[FieldMapping] = &[
    field(names::SERIAL_NUMBER, keys::REPORT_SERIAL_NUMBER, Text),
    field(names::PRIORITY, keys::REPORT_PRIORITY, Text),
    field(names::TYPE, keys::REPORT_TYPE, Text),
];

const RFI: &[FieldMapping] = &[
    field(names::FOR_ACTION, keys::RFI_FOR_ACTION, Text),
    field(names::SERIAL_NUMBER, keys::RFI_SERIAL_NUMBER, Text),
    field(names::STATUS, keys::RFI_STATUS, Text),
    field(names::WORKFLOW_STATUS, keys::RFI_WORKFLOW_STATUS, Text),
];

const SDS: &[FieldMapping] = &[field(
    names::OPERATIONAL_STATUS,
    keys::SDS_OPERATIONAL_STATUS,
    Text,
)];

const TASK: &[FieldMapping] = &[
    field(names::COMMENTS, keys::TASK_COMMENTS, Text),
    field(names::STATUS, keys::TASK_STATUS, Text),
];

const TDL: &[FieldMapping] = &[
    field(names::ACTIVITY, keys::TDL_ACTIVITY, Short),
    field(names::MESSAGE_NUMBER, keys::TDL_MESSAGE_NUMBER, Text),
    field(names::PLATFORM, keys::TDL_PLATFORM, Short),
    field(names::TRACK_NUMBER, keys::TDL_TRACK_NUMBER, Text),
];

const VIDEO: &[FieldMapping] = &[
    field(names::AVERAGE_BIT_RATE, keys::BIT_RATE, Double),
    field(names::CATEGORY, keys::VIDEO_CATEGORY, Text),
    enumerated(names::ENCODING_SCHEME, keys::ENCODING, VIDEO_ENCODING),
    field(names::FRAME_RATE, keys::FRAME_RATE, Double),
    field(names::NUMBER_OF_ROWS, keys::HEIGHT_PIXELS, Int),
    field(names::NUMBER_OF_COLUMNS, keys::WIDTH_PIXELS, Int),
];

/// Mapping table of an entity; empty for entities without plain fields
pub fn mappings(entity: EntityKind) -> &'static [FieldMapping] {
    match entity {
        EntityKind::Card => CARD,
        EntityKind::File => FILE,
        EntityKind::Stream => STREAM,
        EntityKind::Approval => APPROVAL,
        EntityKind::RelatedFile => RELATED_FILE,
        EntityKind::Part => PART,
        EntityKind::Common => COMMON,
        EntityKind::Coverage => COVERAGE,
        EntityKind::ExploitationInfo => EXPLOITATION_INFO,
        EntityKind::Cxp => CXP,
        EntityKind::Gmti => GMTI,
        EntityKind::Imagery => IMAGERY,
        EntityKind::Message => MESSAGE,
        EntityKind::Report => REPORT,
        EntityKind::Rfi => RFI,
        EntityKind::Sds => SDS,
        EntityKind::Task => TASK,
        EntityKind::Tdl => TDL,
        EntityKind::Video => VIDEO,
        EntityKind::Product
        | EntityKind::MetadataSecurity
        | EntityKind::Security
        | EntityKind::Association
        | EntityKind::Destination
        | EntityKind::Relation
        | EntityKind::Source => &[],
    }
}

pub fn find(entity: EntityKind, attribute: &str) -> Option<&'static FieldMapping> {
    mappings(entity).iter().find(|m| m.attribute == attribute)
}
