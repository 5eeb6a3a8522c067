use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";
pub const DEFAULT_HEALTH_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_LANGUAGE: &str = "python";
pub const CONFIG_DIR_NAME: &str = "analyzer-console";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const HEALTH_ENDPOINT: &str = "health";
pub const ANALYZE_ENDPOINT: &str = "analyze";
pub const ANALYZE_REPO_ENDPOINT: &str = "analyze-repo";
pub const REPORTS_ENDPOINT: &str = "reports";
pub const REPORT_ENDPOINT: &str = "report";

pub const ANALYSIS_MODE_BASIC: &str = "basic";

pub const ANALYZE_IDLE_LABEL: &str = "开始分析";
pub const ANALYZE_BUSY_LABEL: &str = "分析中...";
pub const SCAN_IDLE_LABEL: &str = "扫描仓库";
pub const SCAN_BUSY_LABEL: &str = "扫描中...";

pub const EMPTY_CODE_MESSAGE: &str = "请输入代码！";
pub const EMPTY_REPO_PATH_MESSAGE: &str = "请输入仓库路径！";
pub const ANALYZE_FAILED_PREFIX: &str = "分析失败";
pub const SCAN_FAILED_PREFIX: &str = "扫描失败";
pub const REQUEST_FAILED_PREFIX: &str = "请求失败";
pub const UNKNOWN_ERROR_MESSAGE: &str = "未知错误";

pub const LOADING_PLACEHOLDER: &str = "加载中...";
pub const LOAD_FAILED_PLACEHOLDER: &str = "加载失败";
pub const EMPTY_REPORTS_PLACEHOLDER: &str = "暂无报告";

pub const STATUS_PENDING_TEXT: &str = "检查中...";
pub const STATUS_HEALTHY_TEXT: &str = "Ollama 已连接";
pub const STATUS_UNHEALTHY_TEXT: &str = "Ollama 未连接";
pub const STATUS_UNREACHABLE_TEXT: &str = "连接失败";

pub const COLOR_HEALTHY: &str = "#10b981";
pub const COLOR_UNHEALTHY: &str = "#ef4444";
pub const COLOR_PENDING: &str = "#9ca3af";

pub const SPINNER_FRAME_MS: u64 = 150;

pub fn health_interval(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn remainder_line(remaining: usize) -> String {
    format!("... 还有 {} 个文件", remaining)
}
