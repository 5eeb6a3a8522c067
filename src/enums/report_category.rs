use std::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportCategory {
    Quality,
    Impact,
    Analysis,
    Other(String),
}

impl ReportCategory {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "quality" => Self::Quality,
            "impact" => Self::Impact,
            "analysis" => Self::Analysis,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            Self::Quality => "quality",
            Self::Impact => "impact",
            Self::Analysis => "analysis",
            Self::Other(raw) => raw.as_str(),
        }
    }

    /// Display label; unrecognized values pass through verbatim.
    pub fn label(&self) -> &str {
        match self {
            Self::Quality => "质量报告",
            Self::Impact => "影响分析",
            Self::Analysis => "代码分析",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ReportCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for ReportCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}
