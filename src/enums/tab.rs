use std::str::FromStr;
use crate::errors::AnalyzerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Analyze,
    Repository,
    Reports,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Analyze, Tab::Repository, Tab::Reports];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Analyze => "analyze",
            Self::Repository => "repo",
            Self::Reports => "reports",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Analyze => "代码分析",
            Self::Repository => "仓库扫描",
            Self::Reports => "报告列表",
        }
    }
}

impl FromStr for Tab {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.name() == s.trim())
            .ok_or_else(|| AnalyzerError::validation_error("tab", s, "one of analyze, repo, reports", None))
    }
}
