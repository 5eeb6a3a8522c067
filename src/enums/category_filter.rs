use std::str::FromStr;
use crate::enums::report_category::ReportCategory;
use crate::errors::AnalyzerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Quality,
    Impact,
    Analysis,
}

impl CategoryFilter {
    pub fn matches(&self, category: &ReportCategory) -> bool {
        match self {
            Self::All => true,
            Self::Quality => *category == ReportCategory::Quality,
            Self::Impact => *category == ReportCategory::Impact,
            Self::Analysis => *category == ReportCategory::Analysis,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "quality" => Ok(Self::Quality),
            "impact" => Ok(Self::Impact),
            "analysis" => Ok(Self::Analysis),
            other => Err(AnalyzerError::validation_error(
                "category",
                other,
                "one of all, quality, impact, analysis",
                None,
            )),
        }
    }
}
