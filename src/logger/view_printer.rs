use terminal_size::{terminal_size, Width};
use crate::enums::report_list_view::ReportListView;
use crate::enums::tab::Tab;
use crate::structs::view::analysis_view::AnalysisView;
use crate::structs::view::modal_view::ModalView;
use crate::structs::view::repo_scan_view::RepoScanView;
use crate::config::constants::{COLOR_HEALTHY, COLOR_UNHEALTHY};
use crate::structs::view::status_indicator::StatusIndicator;

const DEFAULT_WIDTH: usize = 60;
const MAX_WIDTH: usize = 100;

/// Prints view states to the terminal.
pub struct ViewPrinter;

impl ViewPrinter {

    fn rule() -> String {
        let width = terminal_size()
            .map(|(Width(w), _)| usize::from(w))
            .unwrap_or(DEFAULT_WIDTH)
            .min(MAX_WIDTH);
        "━".repeat(width)
    }

    fn ansi_for(color: &str) -> &'static str {
        match color {
            COLOR_HEALTHY => "\x1b[32m",
            COLOR_UNHEALTHY => "\x1b[31m",
            _ => "\x1b[90m",
        }
    }

    pub fn print_status(indicator: &StatusIndicator) {
        let mut line = format!("{}●\x1b[0m {}", Self::ansi_for(indicator.color), indicator.text);
        if let Some(detail) = &indicator.detail {
            line.push_str(&format!(" ({})", detail));
        }
        if let Some(checked_at) = indicator.checked_at {
            line.push_str(&format!("  \x1b[90m{}\x1b[0m", checked_at.format("%H:%M:%S")));
        }
        println!("{}", line);
    }

    pub fn print_tabs(panes: &[(Tab, bool)]) {
        let line: Vec<String> = panes
            .iter()
            .map(|(tab, active)| {
                if *active {
                    format!("\x1b[1m[{}]\x1b[0m", tab.title())
                } else {
                    format!(" {} ", tab.title())
                }
            })
            .collect();
        println!("{}", line.join(" "));
    }

    pub fn print_analysis(view: &AnalysisView, raw: bool) {
        if !view.result_visible {
            return;
        }

        println!("\n📊 分析结果");
        println!("{}", Self::rule());
        let body = if raw { view.result_markdown.as_ref().or(view.result_html.as_ref()) } else { view.result_html.as_ref() };
        if let Some(body) = body {
            println!("{}", body);
        }
        println!("{}", Self::rule());
    }

    pub fn print_repo_files(view: &RepoScanView) {
        if !view.files_visible {
            return;
        }

        println!("\n📁 仓库文件");
        println!("{}", Self::rule());
        for line in &view.lines {
            println!("  {}", line);
        }
        println!("{}", Self::rule());
    }

    /// Cards are numbered by visible position, which is what `open N` uses.
    pub fn print_report_list(view: &ReportListView) {
        if let Some(placeholder) = view.placeholder() {
            println!("{}", placeholder);
            return;
        }

        if let ReportListView::Cards(cards) = view {
            for (index, card) in cards.iter().filter(|card| card.visible).enumerate() {
                println!("\n{:>3}. {}", index + 1, card.text.replace('\n', "\n     "));
            }
            let hidden = cards.iter().filter(|card| !card.visible).count();
            if hidden > 0 {
                println!("\n\x1b[90m({} hidden by filter)\x1b[0m", hidden);
            }
        }
    }

    pub fn print_modal(view: &ModalView) {
        if !view.visible {
            return;
        }

        println!("\n📄 {}", view.title);
        println!("{}", Self::rule());
        println!("{}", view.body.text());
        println!("{}", Self::rule());
    }
}
