use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::io::AsyncReadExt;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{ANALYZE_BUSY_LABEL, SCAN_BUSY_LABEL};
use crate::enums::category_filter::CategoryFilter;
use crate::enums::commands::Commands;
use crate::enums::health_status::HealthStatus;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::console_notifier::ConsoleNotifier;
use crate::logger::view_printer::ViewPrinter;
use crate::services::dashboard::Dashboard;
use crate::services::http_backend::HttpBackend;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::cli::Cli;
use crate::structs::config::config::Config;
use crate::structs::repo_scan_result::RepoScanResult;
use crate::structs::search_filter_state::SearchFilterState;
use crate::structs::view::modal_view::ModalBody;
use crate::workers::console::Console;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run(&mut self, cli: Cli) -> AnalyzerResult<()> {
        self.start_time = Some(Instant::now());

        let result = if cli.command == Commands::Init {
            Self::init_command(cli.config.as_deref())
        } else {
            self.dispatch(&cli).await
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn dispatch(&self, cli: &Cli) -> AnalyzerResult<()> {
        let config = Self::load_config(cli)?;
        let dashboard = Self::build_dashboard(&config)?;

        match cli.command.clone() {
            Commands::Init => Self::init_command(cli.config.as_deref()),
            Commands::Health => self.health_command(&dashboard).await,
            Commands::Analyze { code, file, language, raw } => {
                let language = language.unwrap_or_else(|| config.console.default_language.clone());
                let raw = raw || config.console.show_raw_markdown;
                self.analyze_command(&dashboard, code, file, &language, raw).await
            }
            Commands::Scan { repo_path } => self.scan_command(&dashboard, &repo_path).await,
            Commands::Reports { query, category } => self.reports_command(&dashboard, query, category).await,
            Commands::Report { path } => self.report_command(&dashboard, &path).await,
            Commands::Console => Console::new(Arc::new(dashboard), &config.console).run().await,
        }
    }

    pub fn load_config(cli: &Cli) -> AnalyzerResult<Config> {
        let mut config = ConfigManager::load(cli.config.as_deref())?;

        if let Some(base_url) = &cli.base_url {
            config.backend.base_url = base_url.clone();
        }

        if let Err(errors) = ConfigManager::validate_config(&config) {
            for error in &errors {
                log::error!("❌ {}", error);
            }
            return Err(AnalyzerError::config_error(
                &format!("{} configuration problem(s) found", errors.len()),
                None,
                Some("Run 'analyzer-console init' for a commented sample"),
            ));
        }

        Ok(config)
    }

    fn build_dashboard(config: &Config) -> AnalyzerResult<Dashboard> {
        let backend = Arc::new(HttpBackend::new(&config.backend.base_url)?);
        log::debug!("Using backend at {}", backend.base_url());
        Ok(Dashboard::new(backend, Arc::new(ConsoleNotifier), config))
    }

    fn init_command(path: Option<&Path>) -> AnalyzerResult<()> {
        log::info!("🚀 Initializing analyzer-console configuration...");
        let path = ConfigManager::create_sample_config(path)?;
        log::info!("📝 Edit {} to point at your backend.", path.display());
        Ok(())
    }

    async fn health_command(&self, dashboard: &Dashboard) -> AnalyzerResult<()> {
        let status = dashboard.health.probe().await;
        ViewPrinter::print_status(&dashboard.health.indicator());

        match status {
            HealthStatus::Healthy => Ok(()),
            other => Err(AnalyzerError::application_error("health check", &format!("backend is {:?}", other))),
        }
    }

    async fn read_code(code: Option<String>, file: Option<PathBuf>) -> AnalyzerResult<String> {
        if let Some(code) = code {
            return Ok(code);
        }

        if let Some(file) = file {
            return tokio::fs::read_to_string(&file).await.map_err(|e| {
                AnalyzerError::system_error(&format!("reading {}", file.display()), &e.to_string())
            });
        }

        let mut code = String::new();
        tokio::io::stdin().read_to_string(&mut code).await?;
        Ok(code)
    }

    async fn analyze_command(&self, dashboard: &Dashboard, code: Option<String>, file: Option<PathBuf>, language: &str, raw: bool) -> AnalyzerResult<()> {
        let code = Self::read_code(code, file).await?;

        let mut spinner = AnimatedLogger::new(ANALYZE_BUSY_LABEL);
        spinner.start();
        let outcome = dashboard.analysis.submit(&code, language).await;
        spinner.stop().await;

        match outcome? {
            AnalysisResult::Success { .. } => {
                ViewPrinter::print_analysis(&dashboard.analysis.view(), raw);
                Ok(())
            }
            AnalysisResult::Failure { message } => Err(AnalyzerError::application_error("analyze snippet", &message)),
        }
    }

    async fn scan_command(&self, dashboard: &Dashboard, repo_path: &str) -> AnalyzerResult<()> {
        let mut spinner = AnimatedLogger::new(SCAN_BUSY_LABEL);
        spinner.start();
        let outcome = dashboard.repo_scan.submit(repo_path).await;
        spinner.stop().await;

        match outcome? {
            RepoScanResult::Success { .. } => {
                ViewPrinter::print_repo_files(&dashboard.repo_scan.view());
                Ok(())
            }
            RepoScanResult::Failure { message } => Err(AnalyzerError::application_error("scan repository", &message)),
        }
    }

    async fn reports_command(&self, dashboard: &Dashboard, query: Option<String>, category: CategoryFilter) -> AnalyzerResult<()> {
        dashboard.reports.apply_filter(SearchFilterState::new(&query.unwrap_or_default(), category));
        let outcome = dashboard.reports.load().await;
        ViewPrinter::print_report_list(&dashboard.reports.view());
        outcome.map(|_| ())
    }

    async fn report_command(&self, dashboard: &Dashboard, path: &str) -> AnalyzerResult<()> {
        let body = dashboard.viewer.open(path).await;
        ViewPrinter::print_modal(&dashboard.viewer.view());

        match body {
            ModalBody::Failed(reason) => Err(AnalyzerError::application_error(
                "fetch report",
                reason.as_deref().unwrap_or("report has no content"),
            )),
            _ => Ok(()),
        }
    }
}
