//! Enumeration wire-name tables
//!
//! Lookups are exact and case-sensitive. A miss is not an error; callers
//! leave the field unset.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::EntityKind;

/// Closed set of permitted wire names for one attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumTable {
    pub name: &'static str,
    pub values: &'static [&'static str],
}

impl EnumTable {
    /// Returns the table's own copy of `value` when it is a member
    pub fn lookup(&self, value: &str) -> Option<&'static str> {
        self.values.iter().copied().find(|v| *v == value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.lookup(value).is_some()
    }
}

pub const CARD_STATUS: EnumTable = EnumTable {
    name: "cardStatus",
    values: &["NEW", "CHANGED", "OBSOLETE"],
};

pub const APPROVAL_STATUS: EnumTable = EnumTable {
    name: "approvalStatus",
    values: &["NOT APPLICABLE", "APPROVED", "NOT APPROVED", "PENDING"],
};

pub const IMAGERY_CATEGORY: EnumTable = EnumTable {
    name: "imageryCategory",
    values: &[
        "EO", "FL", "FP", "HR", "HS", "IR", "MS", "OP", "SAR", "TI", "UV", "VIS",
    ],
};

pub const VIDEO_ENCODING: EnumTable = EnumTable {
    name: "videoEncodingScheme",
    values: &["264ON2", "MPEG-1", "MPEG-2", "MPEG-4", "H.263", "H.264"],
};

pub const SUBJECTIVE_QUALITY: EnumTable = EnumTable {
    name: "subjectiveQualityCode",
    values: &["POOR", "FAIR", "GOOD", "EXCELLENT"],
};

/// Record type tag, one per type-specific section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Imagery,
    Video,
    Gmti,
    Message,
    Report,
    TdlData,
    Rfi,
    Task,
    CollectionExploitationPlan,
    SystemDeploymentStatus,
}

impl ProductType {
    pub const ALL: [ProductType; 10] = [
        ProductType::Imagery,
        ProductType::Video,
        ProductType::Gmti,
        ProductType::Message,
        ProductType::Report,
        ProductType::TdlData,
        ProductType::Rfi,
        ProductType::Task,
        ProductType::CollectionExploitationPlan,
        ProductType::SystemDeploymentStatus,
    ];

    /// Wire-name naming the product type
    pub fn wire_name(&self) -> &'static str {
        match self {
            ProductType::Imagery => "IMAGERY",
            ProductType::Video => "VIDEO",
            ProductType::Gmti => "GMTI",
            ProductType::Message => "MESSAGE",
            ProductType::Report => "REPORT",
            ProductType::TdlData => "TDL DATA",
            ProductType::Rfi => "RFI",
            ProductType::Task => "TASK",
            ProductType::CollectionExploitationPlan => "COLLECTION/EXPLOITATION PLAN",
            ProductType::SystemDeploymentStatus => "SYSTEM DEPLOYMENT STATUS",
        }
    }

    pub fn from_wire_name(value: &str) -> Option<Self> {
        ProductType::ALL
            .iter()
            .copied()
            .find(|t| t.wire_name() == value)
    }

    /// Type-specific entity carrying this product type's section
    pub fn entity(&self) -> EntityKind {
        match self {
            ProductType::Imagery => EntityKind::Imagery,
            ProductType::Video => EntityKind::Video,
            ProductType::Gmti => EntityKind::Gmti,
            ProductType::Message => EntityKind::Message,
            ProductType::Report => EntityKind::Report,
            ProductType::TdlData => EntityKind::Tdl,
            ProductType::Rfi => EntityKind::Rfi,
            ProductType::Task => EntityKind::Task,
            ProductType::CollectionExploitationPlan => EntityKind::Cxp,
            ProductType::SystemDeploymentStatus => EntityKind::Sds,
        }
    }

    pub fn from_entity(entity: EntityKind) -> Option<Self> {
        ProductType::ALL
            .iter()
            .copied()
            .find(|t| t.entity() == entity)
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(CARD_STATUS.lookup("NEW"), Some("NEW"));
        assert_eq!(CARD_STATUS.lookup("new"), None);
        assert_eq!(CARD_STATUS.lookup("NEW "), None);
        assert!(APPROVAL_STATUS.contains("NOT APPROVED"));
        assert!(!VIDEO_ENCODING.contains("h.264"));
    }

    #[test]
    fn test_product_type_entities() {
        for product_type in ProductType::ALL {
            assert_eq!(ProductType::from_entity(product_type.entity()), Some(product_type));
            assert_eq!(
                ProductType::from_wire_name(product_type.wire_name()),
                Some(product_type)
            );
        }
        assert_eq!(ProductType::from_entity(EntityKind::Card), None);
        assert_eq!(ProductType::TdlData.to_string(), "TDL DATA");
    }
}
