//! Fixed entity catalog of the product data model
//!
//! Attribute lists per entity and the relationships between entity types.
//! Tables are `(attribute, kind, required)`.

use super::names::*;
use super::types::{Cardinality, ValueKind};

type AttributeTable = &'static [(&'static str, ValueKind, bool)];

use ValueKind::{Bool, Date, Double, Int, Long, Rectangle, Short, Text};

const PRODUCT: AttributeTable = &[];

const APPROVAL: AttributeTable = &[
    (APPROVED_BY, Text, false),
    (DATE_TIME_MODIFIED, Date, false),
    (STATUS, Text, false),
];

const FILE: AttributeTable = &[
    (ARCHIVED, Bool, false),
    (ARCHIVE_INFORMATION, Text, false),
    (CREATOR, Text, false),
    (DATE_TIME_DECLARED, Date, false),
    (EXTENT, Double, false),
    (FORMAT, Text, false),
    (FORMAT_VERSION, Text, false),
    (PRODUCT_URL, Text, false),
    (TITLE, Text, false),
];

const STREAM: AttributeTable = &[
    (ARCHIVED, Bool, false),
    (ARCHIVE_INFORMATION, Text, false),
    (CREATOR, Text, false),
    (DATE_TIME_DECLARED, Date, false),
    (STANDARD, Text, false),
    (STANDARD_VERSION, Text, false),
    (SOURCE_URL, Text, false),
    (PROGRAM_ID, Short, false),
];

const SECURITY: AttributeTable = &[
    (CLASSIFICATION, Text, true),
    (POLICY, Text, true),
    (RELEASABILITY, Text, true),
];

const CARD: AttributeTable = &[
    (IDENTIFIER, Text, true),
    (SOURCE_DATE_TIME_MODIFIED, Date, false),
    (DATE_TIME_MODIFIED, Date, false),
    (SOURCE_LIBRARY, Text, false),
    (STATUS, Text, false),
    (NUMBER_OF_PARTS, Int, false),
    (PUBLISHER, Text, false),
];

const RELATED_FILE: AttributeTable = &[
    (CREATOR, Text, false),
    (DATE_TIME_DECLARED, Date, false),
    (EXTENT, Double, false),
    (URL, Text, false),
    (IS_FILE_LOCAL, Bool, false),
    (FILE_TYPE, Text, false),
];

const PART: AttributeTable = &[(PART_IDENTIFIER, Text, true)];

const COMMON: AttributeTable = &[
    (IDENTIFIER_UUID, Text, false),
    (TYPE, Text, true),
    (DESCRIPTION_ABSTRACT, Text, false),
    (IDENTIFIER_MISSION, Text, false),
    (LANGUAGE, Text, false),
    (SOURCE, Text, false),
    (SUBJECT_CATEGORY_TARGET, Text, false),
    (TARGET_NUMBER, Text, false),
];

const COVERAGE: AttributeTable = &[
    (SPATIAL_COUNTRY_CODE, Text, false),
    (SPATIAL_GEOGRAPHIC_REF_BOX, Rectangle, false),
    (TEMPORAL_START, Date, false),
    (TEMPORAL_END, Date, false),
];

const EXPLOITATION_INFO: AttributeTable = &[
    (DESCRIPTION, Text, false),
    (LEVEL, Short, false),
    (AUTO_GENERATED, Bool, false),
    (SUBJECTIVE_QUALITY_CODE, Text, false),
];

const CXP: AttributeTable = &[(STATUS, Text, false)];

const GMTI: AttributeTable = &[
    (IDENTIFIER_JOB, Double, false),
    (NUMBER_OF_TARGET_REPORTS, Long, false),
];

const IMAGERY: AttributeTable = &[
    (CATEGORY, Text, false),
    (CLOUD_COVER_PCT, Short, false),
    (COMMENTS, Text, false),
    (DECOMPRESSION_TECHNIQUE, Text, false),
    (IDENTIFIER, Text, true),
    (NIIRS, Short, false),
    (NUMBER_OF_BANDS, Int, false),
    (NUMBER_OF_ROWS, Int, false),
    (NUMBER_OF_COLUMNS, Int, false),
    (TITLE, Text, false),
];

const MESSAGE: AttributeTable = &[
    (RECIPIENT, Text, false),
    (SUBJECT, Text, false),
    (MESSAGE_BODY, Text, false),
    (MESSAGE_TYPE, Text, true),
];

const REPORT: AttributeTable = &[
    (SERIAL_NUMBER, Text, false),
    (PRIORITY, Text, false),
    (TYPE, Text, false),
];

const RFI: AttributeTable = &[
    (FOR_ACTION, Text, false),
    (SERIAL_NUMBER, Text, false),
    (STATUS, Text, false),
    (WORKFLOW_STATUS, Text, false),
];

const SDS: AttributeTable = &[(OPERATIONAL_STATUS, Text, false)];

const TASK: AttributeTable = &[(COMMENTS, Text, false), (STATUS, Text, true)];

const TDL: AttributeTable = &[
    (ACTIVITY, Short, false),
    (MESSAGE_NUMBER, Text, false),
    (PLATFORM, Short, false),
    (TRACK_NUMBER, Text, false),
];

const VIDEO: AttributeTable = &[
    (AVERAGE_BIT_RATE, Double, false),
    (CATEGORY, Text, false),
    (ENCODING_SCHEME, Text, true),
    (FRAME_RATE, Double, false),
    (NUMBER_OF_ROWS, Int, false),
    (NUMBER_OF_COLUMNS, Int, false),
];

const ASSOCIATION: AttributeTable = &[];
const DESTINATION: AttributeTable = &[];
const SOURCE_REF: AttributeTable = &[];

const RELATION: AttributeTable = &[(NAME, Text, true), (DESCRIPTION, Text, false)];

/// Attribute table of one entity
pub(super) fn attribute_table(entity: EntityKind) -> AttributeTable {
    match entity {
        EntityKind::Product => PRODUCT,
        EntityKind::Approval => APPROVAL,
        EntityKind::File => FILE,
        EntityKind::Stream => STREAM,
        EntityKind::MetadataSecurity | EntityKind::Security => SECURITY,
        EntityKind::Card => CARD,
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
        EntityKind::Association => ASSOCIATION,
        EntityKind::Destination => DESTINATION,
        EntityKind::Relation => RELATION,
        EntityKind::Source => SOURCE_REF,
    }
}

use Cardinality::{OneToOne, OneToOneOrMore, OneToZeroOrMore, OneToZeroOrOne};

/// `(parent, child, parent cardinality, child cardinality)` in traversal order
pub(super) const RELATIONSHIPS: &[(EntityKind, EntityKind, Cardinality, Cardinality)] = &[
    (EntityKind::Product, EntityKind::Approval, OneToOne, OneToZeroOrMore),
    (EntityKind::Product, EntityKind::Card, OneToOne, OneToOne),
    (EntityKind::Product, EntityKind::File, OneToOne, OneToZeroOrMore),
    (EntityKind::Product, EntityKind::Stream, OneToOneOrMore, OneToZeroOrMore),
    (EntityKind::Product, EntityKind::MetadataSecurity, OneToOne, OneToOne),
    (EntityKind::Product, EntityKind::RelatedFile, OneToOne, OneToZeroOrMore),
    (EntityKind::Product, EntityKind::Security, OneToOne, OneToOne),
    (EntityKind::Product, EntityKind::Part, OneToOne, OneToOneOrMore),
    (EntityKind::Product, EntityKind::Association, OneToOne, OneToZeroOrMore),
    (EntityKind::Part, EntityKind::Security, OneToOne, OneToOne),
    (EntityKind::Part, EntityKind::Common, OneToOne, OneToOne),
    (EntityKind::Part, EntityKind::Coverage, OneToOne, OneToZeroOrOne),
    (EntityKind::Part, EntityKind::ExploitationInfo, OneToOne, OneToZeroOrOne),
    (EntityKind::Part, EntityKind::Cxp, OneToOne, OneToZeroOrOne),
    (EntityKind::Part, EntityKind::Gmti, OneToOne, OneToZeroOrOne),
    (EntityKind::Part, EntityKind::Imagery, OneToOne, OneToZeroOrOne),
    (EntityKind::Part, EntityKind::Message, OneToOne, OneToZeroOrOne),
    (EntityKind::Part, EntityKind::Report, OneToOne, OneToZeroOrOne),
    (EntityKind::Part, EntityKind::Rfi, OneToOne, OneToZeroOrOne),
    (EntityKind::Part, EntityKind::Sds, OneToOne, OneToZeroOrOne),
    (EntityKind::Part, EntityKind::Task, OneToOne, OneToZeroOrOne),
    (EntityKind::Part, EntityKind::Tdl, OneToOne, OneToZeroOrOne),
    (EntityKind::Part, EntityKind::Video, OneToOne, OneToZeroOrOne),
    (EntityKind::Association, EntityKind::Relation, OneToZeroOrMore, OneToOne),
    (EntityKind::Association, EntityKind::Source, OneToOne, OneToOne),
    (EntityKind::Association, EntityKind::Destination, OneToOne, OneToOneOrMore),
    (EntityKind::Source, EntityKind::Card, OneToZeroOrMore, OneToOne),
    (EntityKind::Destination, EntityKind::Card, OneToZeroOrMore, OneToOne),
];

/// `(view name, root entity)`
pub(super) const VIEWS: &[(&str, EntityKind)] = &[(ALL_VIEW, EntityKind::Product)];
