/// Display regions a controller can ask the front-end to bring into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    AnalysisResult,
    RepoFiles,
    ReportList,
    ReportModal,
}
