//! Entity and attribute name catalog
//!
//! The closed vocabulary shared by the schema graph and both directions of
//! the DAG converter. Names on the wire are matched case-sensitively.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Entity types of the product data model
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Product,
    Approval,
    File,
    Stream,
    MetadataSecurity,
    Security,
    Card,
    RelatedFile,
    Part,
    Common,
    Coverage,
    ExploitationInfo,
    Cxp,
    Gmti,
    Imagery,
    Message,
    Report,
    Rfi,
    Sds,
    Task,
    Tdl,
    Video,
    Association,
    Destination,
    Relation,
    Source,
}

impl EntityKind {
    pub const ALL: [EntityKind; 26] = [
        EntityKind::Product,
        EntityKind::Approval,
        EntityKind::File,
        EntityKind::Stream,
        EntityKind::MetadataSecurity,
        EntityKind::Security,
        EntityKind::Card,
        EntityKind::RelatedFile,
        EntityKind::Part,
        EntityKind::Common,
        EntityKind::Coverage,
        EntityKind::ExploitationInfo,
        EntityKind::Cxp,
        EntityKind::Gmti,
        EntityKind::Imagery,
        EntityKind::Message,
        EntityKind::Report,
        EntityKind::Rfi,
        EntityKind::Sds,
        EntityKind::Task,
        EntityKind::Tdl,
        EntityKind::Video,
        EntityKind::Association,
        EntityKind::Destination,
        EntityKind::Relation,
        EntityKind::Source,
    ];

    /// Wire name of the entity
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Product => "product",
            EntityKind::Approval => "approval",
            EntityKind::File => "file",
            EntityKind::Stream => "stream",
            EntityKind::MetadataSecurity => "metadataSecurity",
            EntityKind::Security => "security",
            EntityKind::Card => "card",
            EntityKind::RelatedFile => "relatedFile",
            EntityKind::Part => "part",
            EntityKind::Common => "common",
            EntityKind::Coverage => "coverage",
            EntityKind::ExploitationInfo => "exploitationInfo",
            EntityKind::Cxp => "cxp",
            EntityKind::Gmti => "gmti",
            EntityKind::Imagery => "imagery",
            EntityKind::Message => "message",
            EntityKind::Report => "report",
            EntityKind::Rfi => "rfi",
            EntityKind::Sds => "sds",
            EntityKind::Task => "task",
            EntityKind::Tdl => "tdl",
            EntityKind::Video => "video",
            EntityKind::Association => "association",
            EntityKind::Destination => "destination",
            EntityKind::Relation => "relation",
            EntityKind::Source => "source",
        }
    }

    /// Exact, case-sensitive lookup of a wire name
    pub fn from_name(name: &str) -> Option<Self> {
        EntityKind::ALL.iter().copied().find(|e| e.as_str() == name)
    }

    /// Security-bearing entities whose leaves feed the security merge
    pub fn carries_security(&self) -> bool {
        matches!(self, EntityKind::Security | EntityKind::MetadataSecurity)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of the view aggregating every entity
pub const ALL_VIEW: &str = "NSIL_ALL_VIEW";

/// Name of the root node of every record graph
pub const PRODUCT_ROOT: &str = "NSIL_PRODUCT";

// Attribute names. Several are shared between entities
// (e.g. `creator` on file, stream and relatedFile).
pub const ACTIVITY: &str = "activity";
pub const APPROVED_BY: &str = "approvedBy";
pub const ARCHIVED: &str = "archived";
pub const ARCHIVE_INFORMATION: &str = "archiveInformation";
pub const AUTO_GENERATED: &str = "autoGenerated";
pub const AVERAGE_BIT_RATE: &str = "averageBitRate";
pub const CATEGORY: &str = "category";
pub const CLASSIFICATION: &str = "classification";
pub const CLOUD_COVER_PCT: &str = "cloudCoverPercentage";
pub const COMMENTS: &str = "comments";
pub const CREATOR: &str = "creator";
pub const DATE_TIME_DECLARED: &str = "dateTimeDeclared";
pub const DATE_TIME_MODIFIED: &str = "dateTimeModified";
pub const DECOMPRESSION_TECHNIQUE: &str = "decompressionTechnique";
pub const DESCRIPTION: &str = "description";
pub const DESCRIPTION_ABSTRACT: &str = "descriptionAbstract";
pub const ENCODING_SCHEME: &str = "encodingScheme";
pub const EXTENT: &str = "extent";
pub const FILE_TYPE: &str = "fileType";
pub const FOR_ACTION: &str = "forAction";
pub const FORMAT: &str = "format";
pub const FORMAT_VERSION: &str = "formatVersion";
pub const FRAME_RATE: &str = "frameRate";
pub const IDENTIFIER: &str = "identifier";
pub const IDENTIFIER_JOB: &str = "identifierJob";
pub const IDENTIFIER_MISSION: &str = "identifierMission";
pub const IDENTIFIER_UUID: &str = "identifierUUID";
pub const IS_FILE_LOCAL: &str = "isFileLocal";
pub const LANGUAGE: &str = "language";
pub const LEVEL: &str = "level";
pub const MESSAGE_BODY: &str = "messageBody";
pub const MESSAGE_NUMBER: &str = "messageNumber";
pub const MESSAGE_TYPE: &str = "messageType";
pub const NAME: &str = "name";
pub const NIIRS: &str = "NIIRS";
pub const NUMBER_OF_BANDS: &str = "numberOfBands";
pub const NUMBER_OF_COLUMNS: &str = "numberOfColumns";
pub const NUMBER_OF_PARTS: &str = "numberOfParts";
pub const NUMBER_OF_ROWS: &str = "numberOfRows";
pub const NUMBER_OF_TARGET_REPORTS: &str = "numberOfTargetReports";
pub const OPERATIONAL_STATUS: &str = "operationalStatus";
pub const PART_IDENTIFIER: &str = "partIdentifier";
pub const PLATFORM: &str = "platform";
pub const POLICY: &str = "policy";
pub const PRIORITY: &str = "priority";
pub const PRODUCT_URL: &str = "productURL";
pub const PROGRAM_ID: &str = "programID";
pub const PUBLISHER: &str = "publisher";
pub const RECIPIENT: &str = "recipient";
pub const RELEASABILITY: &str = "releasability";
pub const SERIAL_NUMBER: &str = "serialNumber";
pub const SOURCE: &str = "source";
pub const SOURCE_DATE_TIME_MODIFIED: &str = "sourceDateTimeModified";
pub const SOURCE_LIBRARY: &str = "sourceLibrary";
pub const SOURCE_URL: &str = "sourceURL";
pub const SPATIAL_COUNTRY_CODE: &str = "spatialCountryCode";
pub const SPATIAL_GEOGRAPHIC_REF_BOX: &str = "spatialGeographicReferenceBox";
pub const STANDARD: &str = "standard";
pub const STANDARD_VERSION: &str = "standardVersion";
pub const STATUS: &str = "status";
pub const SUBJECT: &str = "subject";
pub const SUBJECT_CATEGORY_TARGET: &str = "subjectCategoryTarget";
pub const SUBJECTIVE_QUALITY_CODE: &str = "subjectiveQualityCode";
pub const TARGET_NUMBER: &str = "targetNumber";
pub const TEMPORAL_END: &str = "temporalEnd";
pub const TEMPORAL_START: &str = "temporalStart";
pub const TITLE: &str = "title";
pub const TRACK_NUMBER: &str = "trackNumber";
pub const TYPE: &str = "type";
pub const URL: &str = "URL";
pub const WORKFLOW_STATUS: &str = "workflowStatus";
