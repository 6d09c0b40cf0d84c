//! Record attribute keys
//!
//! Keys of the flat catalog record. Core keys are bare; section-specific
//! keys are prefixed with their section.

pub const ID: &str = "id";
pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const LANGUAGE: &str = "language";
pub const CREATED: &str = "created";
pub const MODIFIED: &str = "modified";
pub const METACARD_MODIFIED: &str = "metacard.modified";
pub const SOURCE_ID: &str = "source-id";
pub const RESOURCE_URI: &str = "resource-uri";
pub const RESOURCE_SIZE: &str = "resource-size";
pub const DATATYPE: &str = "datatype";
pub const LOCATION: &str = "location";
pub const COUNTRY_CODE: &str = "location.country-code";
pub const START_DATE: &str = "datetime.start";
pub const END_DATE: &str = "datetime.end";

pub const CLASSIFICATION: &str = "security.classification";
pub const POLICY: &str = "security.policy";
pub const RELEASABILITY: &str = "security.releasability";

pub const CARD_STATUS: &str = "card.status";
pub const CARD_NUMBER_OF_PARTS: &str = "card.number-of-parts";
pub const PUBLISHER: &str = "contact.publisher-name";
pub const CREATOR: &str = "contact.creator-name";

pub const FILE_ARCHIVED: &str = "file.archived";
pub const FILE_ARCHIVE_INFORMATION: &str = "file.archive-information";
pub const FORMAT: &str = "media.format";
pub const FORMAT_VERSION: &str = "media.format-version";

pub const STREAM_ARCHIVED: &str = "stream.archived";
pub const STREAM_ARCHIVE_INFORMATION: &str = "stream.archive-information";
pub const STREAM_CREATOR: &str = "stream.creator";
pub const STREAM_DECLARED: &str = "stream.date-time-declared";
pub const STREAM_STANDARD: &str = "stream.standard";
pub const STREAM_STANDARD_VERSION: &str = "stream.standard-version";
pub const STREAM_SOURCE_URI: &str = "stream.source-uri";
pub const STREAM_PROGRAM_ID: &str = "stream.program-id";

pub const APPROVED_BY: &str = "approval.approved-by";
pub const APPROVAL_MODIFIED: &str = "approval.modified";
pub const APPROVAL_STATUS: &str = "approval.status";

pub const RELATED_CREATOR: &str = "related-file.creator";
pub const RELATED_CREATED: &str = "related-file.created";
pub const RELATED_SIZE: &str = "related-file.size";
pub const RELATED_URI: &str = "related-file.uri";
pub const RELATED_LOCAL: &str = "related-file.local";
pub const RELATED_TYPE: &str = "related-file.type";

pub const PART_IDENTIFIER: &str = "part.identifier";

pub const IDENTIFIER_UUID: &str = "common.identifier-uuid";
pub const MISSION_ID: &str = "isr.mission-id";
pub const COMMON_SOURCE: &str = "common.source";
pub const TOPIC_CATEGORY: &str = "topic.category";
pub const TARGET_ID: &str = "isr.target-id";

pub const EXPLOITATION_DESCRIPTION: &str = "exploitation.description";
pub const EXPLOITATION_LEVEL: &str = "exploitation.level";
pub const EXPLOITATION_AUTO_GENERATED: &str = "exploitation.auto-generated";
pub const EXPLOITATION_QUALITY: &str = "exploitation.subjective-quality-code";

pub const CXP_STATUS: &str = "cxp.status";

pub const GMTI_JOB_ID: &str = "isr.moving-target-job-id";
pub const GMTI_TARGET_REPORTS: &str = "isr.target-report-count";

pub const IMAGERY_CATEGORY: &str = "isr.category";
pub const CLOUD_COVER: &str = "isr.cloud-cover";
pub const IMAGERY_COMMENTS: &str = "isr.comments";
pub const COMPRESSION: &str = "media.compression";
pub const IMAGE_ID: &str = "isr.image-id";
pub const NIIRS: &str = "isr.niirs";
pub const NUMBER_OF_BANDS: &str = "media.number-of-bands";
pub const HEIGHT_PIXELS: &str = "media.height-pixels";
pub const WIDTH_PIXELS: &str = "media.width-pixels";
pub const IMAGE_TITLE: &str = "isr.image-title";

pub const MESSAGE_RECIPIENT: &str = "message.recipient";
pub const MESSAGE_SUBJECT: &str = "message.subject";
pub const MESSAGE_BODY: &str = "message.body";
pub const MESSAGE_TYPE: &str = "message.type";

pub const REPORT_SERIAL_NUMBER: &str = "isr.report-serial-number";
pub const REPORT_PRIORITY: &str = "isr.report-priority";
pub const REPORT_TYPE: &str = "isr.report-type";

pub const RFI_FOR_ACTION: &str = "rfi.for-action";
pub const RFI_SERIAL_NUMBER: &str = "rfi.serial-number";
pub const RFI_STATUS: &str = "rfi.status";
pub const RFI_WORKFLOW_STATUS: &str = "rfi.workflow-status";

pub const SDS_OPERATIONAL_STATUS: &str = "sds.operational-status";

pub const TASK_COMMENTS: &str = "task.comments";
pub const TASK_STATUS: &str = "task.status";

pub const TDL_ACTIVITY: &str = "tdl.activity";
pub const TDL_MESSAGE_NUMBER: &str = "tdl.message-number";
pub const TDL_PLATFORM: &str = "tdl.platform";
pub const TDL_TRACK_NUMBER: &str = "tdl.track-number";

pub const BIT_RATE: &str = "media.bit-rate";
pub const VIDEO_CATEGORY: &str = "isr.video-category";
pub const ENCODING: &str = "media.encoding";
pub const FRAME_RATE: &str = "media.frame-rate";
