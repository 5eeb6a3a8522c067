use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use crate::errors::AnalyzerResult;
use crate::enums::click_target::ClickTarget;
use crate::enums::tab::Tab;
use crate::logger::view_printer::ViewPrinter;
use crate::services::dashboard::Dashboard;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::repo_scan_result::RepoScanResult;
use crate::structs::view::analysis_view::AnalysisView;
use crate::structs::view::repo_scan_view::RepoScanView;
use crate::structs::config::console_config::ConsoleConfig;
use crate::workers::console_command::{ConsoleCommand, OpenTarget, HELP};

/// Line-driven session over a `Dashboard`. Submissions and loads run as
/// their own tasks, so several can be in flight at once.
pub struct Console {
    dashboard: Arc<Dashboard>,
    language: String,
    raw: bool,
    languages: Vec<String>,
}

impl Console {
    pub fn new(dashboard: Arc<Dashboard>, config: &ConsoleConfig) -> Self {
        Self {
            dashboard,
            language: config.default_language.clone(),
            raw: config.show_raw_markdown,
            languages: config.languages.clone(),
        }
    }

    pub async fn run(&mut self) -> AnalyzerResult<()> {
        let monitor = self.dashboard.health.spawn();

        println!("{}", HELP);
        println!("Languages: {}", self.languages.join(", "));
        ViewPrinter::print_tabs(&self.dashboard.router.panes());

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("{}> ", self.dashboard.router.active().name());
            let _ = std::io::stdout().flush();

            let Some(line) = lines.next_line().await? else {
                break;
            };

            match ConsoleCommand::parse(&line) {
                Ok(Some(ConsoleCommand::Quit)) => break,
                Ok(Some(command)) => self.execute(command).await,
                Ok(None) => {}
                Err(e) => eprintln!("❌ {}", e),
            }
        }

        monitor.abort();
        Ok(())
    }

    async fn execute(&mut self, command: ConsoleCommand) {
        match command {
            ConsoleCommand::Tab(Tab::Reports) => {
                let dashboard = Arc::clone(&self.dashboard);
                tokio::spawn(async move {
                    dashboard.router.select(Tab::Reports).await;
                    ViewPrinter::print_report_list(&dashboard.reports.view());
                });
                self.show_pending_load().await;
            }
            ConsoleCommand::Tab(tab) => {
                self.dashboard.router.select(tab).await;
                ViewPrinter::print_tabs(&self.dashboard.router.panes());
            }
            ConsoleCommand::Language(language) => {
                if !self.languages.contains(&language) {
                    log::warn!("'{}' is not in the configured language list, sending it anyway", language);
                }
                self.language = language;
            }
            ConsoleCommand::Analyze(code) => self.spawn_analysis(code).await,
            ConsoleCommand::AnalyzeFile(path) => match tokio::fs::read_to_string(&path).await {
                Ok(code) => self.spawn_analysis(code).await,
                Err(e) => eprintln!("❌ Cannot read {}: {}", path, e),
            },
            ConsoleCommand::Scan(repo_path) => {
                let dashboard = Arc::clone(&self.dashboard);
                tokio::spawn(async move {
                    if let Some(view) = scan_for_display(&dashboard, &repo_path).await {
                        ViewPrinter::print_repo_files(&view);
                    }
                });
                tokio::task::yield_now().await;
                let button = self.dashboard.repo_scan.view().button;
                if button.disabled {
                    println!("⏳ {}", button.label);
                }
            }
            ConsoleCommand::Search(query) => {
                self.dashboard.reports.set_query(&query);
                ViewPrinter::print_report_list(&self.dashboard.reports.view());
            }
            ConsoleCommand::Filter(category) => {
                self.dashboard.reports.set_category(category);
                ViewPrinter::print_report_list(&self.dashboard.reports.view());
            }
            ConsoleCommand::List => ViewPrinter::print_report_list(&self.dashboard.reports.view()),
            ConsoleCommand::Open(target) => {
                let dashboard = Arc::clone(&self.dashboard);
                tokio::spawn(async move {
                    let opened = match target {
                        OpenTarget::Card(position) => dashboard.reports.click_card(position - 1).await.is_some(),
                        OpenTarget::Path(path) => {
                            dashboard.viewer.open(&path).await;
                            true
                        }
                    };
                    if opened {
                        // prints nothing if closed before the fetch resolved
                        ViewPrinter::print_modal(&dashboard.viewer.view());
                    } else {
                        eprintln!("❌ No such card, run 'list' to see the numbering");
                    }
                });
            }
            ConsoleCommand::Close => {
                self.dashboard.viewer.handle_click(ClickTarget::CloseButton);
            }
            ConsoleCommand::Backdrop => {
                self.dashboard.viewer.handle_click(ClickTarget::Backdrop);
            }
            ConsoleCommand::Status => {
                ViewPrinter::print_status(&self.dashboard.health.indicator());
                ViewPrinter::print_tabs(&self.dashboard.router.panes());
                let analysis = self.dashboard.analysis.view().button;
                let scan = self.dashboard.repo_scan.view().button;
                println!("analysis: {}  scan: {}  language: {}", analysis.label, scan.label, self.language);
            }
            ConsoleCommand::Help => println!("{}", HELP),
            ConsoleCommand::Quit => {}
        }
    }

    async fn spawn_analysis(&self, code: String) {
        let dashboard = Arc::clone(&self.dashboard);
        let language = self.language.clone();
        let raw = self.raw;

        tokio::spawn(async move {
            if let Some(view) = analyze_for_display(&dashboard, &code, &language).await {
                ViewPrinter::print_analysis(&view, raw);
            }
        });

        // let the task reach its request so the busy label is accurate
        tokio::task::yield_now().await;
        let button = self.dashboard.analysis.view().button;
        if button.disabled {
            println!("⏳ {}", button.label);
        }
    }

    async fn show_pending_load(&self) {
        tokio::task::yield_now().await;
        ViewPrinter::print_tabs(&self.dashboard.router.panes());
        if let Some(placeholder) = self.dashboard.reports.view().placeholder() {
            println!("{}", placeholder);
        }
    }
}

/// The result region, but only when this submission is what filled it.
async fn analyze_for_display(dashboard: &Dashboard, code: &str, language: &str) -> Option<AnalysisView> {
    match dashboard.analysis.submit(code, language).await {
        Ok(AnalysisResult::Success { .. }) => Some(dashboard.analysis.view()),
        _ => None,
    }
}

async fn scan_for_display(dashboard: &Dashboard, repo_path: &str) -> Option<RepoScanView> {
    match dashboard.repo_scan.submit(repo_path).await {
        Ok(RepoScanResult::Success { .. }) => Some(dashboard.repo_scan.view()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::config::config::Config;
    use crate::structs::wire::analyze_response::AnalyzeResponse;
    use crate::structs::wire::repo_scan_response::RepoScanResponse;
    use crate::traits::backend_client::MockBackendClient;
    use crate::traits::user_notifier::MockUserNotifier;

    fn dashboard(backend: MockBackendClient) -> Dashboard {
        let mut notifier = MockUserNotifier::new();
        notifier.expect_alert().return_const(());
        notifier.expect_reveal().return_const(());
        Dashboard::new(Arc::new(backend), Arc::new(notifier), &Config::default())
    }

    #[tokio::test]
    async fn rejected_analysis_does_not_reprint_the_previous_result() {
        let mut backend = MockBackendClient::new();
        backend.expect_analyze().returning(|request| {
            if request.code == "ok" {
                Ok(AnalyzeResponse { success: true, html: Some("<p>ok</p>".into()), ..Default::default() })
            } else {
                Ok(AnalyzeResponse { error: Some("Invalid input".into()), ..Default::default() })
            }
        });
        let dashboard = dashboard(backend);

        let shown = analyze_for_display(&dashboard, "ok", "python").await;
        assert_eq!(shown.and_then(|view| view.result_html).as_deref(), Some("<p>ok</p>"));

        assert!(analyze_for_display(&dashboard, "broken", "python").await.is_none());
        assert!(analyze_for_display(&dashboard, "  ", "python").await.is_none());
    }

    #[tokio::test]
    async fn rejected_scan_does_not_reprint_the_previous_listing() {
        let mut backend = MockBackendClient::new();
        backend.expect_analyze_repo().returning(|request| {
            if request.repo_path == "/srv/repo" {
                Ok(RepoScanResponse { success: true, files: Some(vec!["a.py".into()]), total: Some(1), error: None })
            } else {
                Ok(RepoScanResponse { error: Some("Repository not found".into()), ..Default::default() })
            }
        });
        let dashboard = dashboard(backend);

        let shown = scan_for_display(&dashboard, "/srv/repo").await;
        assert_eq!(shown.map(|view| view.lines), Some(vec!["a.py".to_string()]));

        assert!(scan_for_display(&dashboard, "/missing").await.is_none());
    }
}
