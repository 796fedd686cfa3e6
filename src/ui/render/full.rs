use crate::ui::model::{Mode, Model};
use crate::ui::render::bars::{render_status_bar, render_title_bar};
use crate::ui::render::panes::{
    render_artifacts_pane, render_attributes_pane, render_packages_pane,
};
use crate::ui::Layout;
use lipgloss::{join_horizontal, join_vertical, CENTER, TOP};

pub fn render_full(m: &Model) -> String {
    if let Mode::Error(details) = &m.mode {
        return render_error(m, details);
    }

    let packages = render_packages_pane(m);
    let artifacts = render_artifacts_pane(m);
    let panes = join_horizontal(TOP, &[packages.as_str(), artifacts.as_str()]);
    let attributes = render_attributes_pane(m);

    match m.layout {
        Layout::Normal => {
            let title = render_title_bar(m);
            let status = render_status_bar(m);
            join_vertical(
                CENTER,
                &[title.as_str(), panes.as_str(), attributes.as_str(), status.as_str()],
            )
        }
        Layout::Compact => join_vertical(CENTER, &[panes.as_str(), attributes.as_str()]),
    }
}

/// Full-screen error box: a title row, a spacer and the wrapped details.
fn render_error(m: &Model, details: &str) -> String {
    let s = &m.styles.error;
    let title = s.title.render("Error");
    let details = s.details.render(details);
    s.area.render(&join_vertical(CENTER, &[title.as_str(), "", details.as_str()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::cpi::ContentPackage;
    use crate::error::NavigatorError;
    use crate::ui::render::styles::{Styles, BAR_WIDTH, ERROR_WIDTH};
    use crate::ui::{Key, Msg};
    use regex::Regex;

    // helper to strip ANSI CSI sequences from rendered output for assertions
    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    fn loaded() -> Model {
        let mut m = Model::new(&Config::default(), Styles::default());
        m.update(Msg::Packages(vec![
            ContentPackage {
                id: "A".into(),
                name: "Zeta".into(),
                ..Default::default()
            },
            ContentPackage {
                id: "B".into(),
                name: "Alpha".into(),
                ..Default::default()
            },
        ]));
        m
    }

    #[test]
    fn normal_layout_has_title_and_status_bars() {
        let m = loaded();
        let out = strip_ansi(&render_full(&m));
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("Cloud Integration Navigator"));
        assert_eq!(lines[0].chars().count(), BAR_WIDTH);
        let last = *lines.last().unwrap();
        assert!(last.starts_with(" my-tenant "));
        assert_eq!(last.chars().count(), BAR_WIDTH);
        assert!(out.contains("Zeta"));
        assert!(out.contains("Alpha"));
    }

    #[test]
    fn compact_layout_drops_bars() {
        let mut m = loaded();
        m.update(Msg::Layout(Layout::Compact));
        let out = strip_ansi(&render_full(&m));
        assert!(!out.contains("Cloud Integration Navigator"));
        assert!(!out.contains("my-tenant"));
        assert!(out.contains("Packages (2)"));

        let normal_lines = strip_ansi(&render_full(&loaded())).lines().count();
        assert_eq!(out.lines().count() + 2, normal_lines);
    }

    #[test]
    fn sorted_packages_render_in_order() {
        let mut m = Model::new(&Config::default(), Styles::default());
        m.packages_sort = crate::sort::SortOptions::new("name", crate::sort::SortOrder::Ascending);
        m.update(Msg::Packages(loaded().packages.items().to_vec()));
        let out = strip_ansi(&render_full(&m));
        let alpha = out.find("Alpha").unwrap();
        let zeta = out.find("Zeta").unwrap();
        assert!(alpha < zeta);
    }

    #[test]
    fn error_overlay_replaces_dashboard() {
        let mut m = loaded();
        m.update(Msg::Key(Key::Enter));
        m.update(Msg::Error(NavigatorError::Status {
            url: "https://tenant/api/v1/IntegrationPackages('A')/ScriptCollectionDesigntimeArtifacts?$format=json".into(),
            status: reqwest::StatusCode::NOT_FOUND,
        }));
        let out = strip_ansi(&render_full(&m));
        assert!(out.contains("Error"));
        assert!(out.contains("404"));
        assert!(out.contains("ScriptCollectionDesigntimeArtifacts"));
        assert!(!out.contains("Packages (2)"));
        assert!(!out.contains("Zeta"));
    }

    #[test]
    fn short_error_keeps_minimum_height() {
        let m = Model::failed(Styles::default(), "boom");
        let out = strip_ansi(&render_full(&m));
        // border, title, spacer, five detail rows, border
        assert_eq!(out.lines().count(), 2 + 2 + 5);
        assert!(out.contains("boom"));
    }

    #[test]
    fn dashboard_lines_share_one_width() {
        let out = strip_ansi(&render_full(&loaded()));
        assert!(out.lines().all(|l| l.chars().count() == BAR_WIDTH));
    }

    #[test]
    fn error_details_wrap_inside_box() {
        let m = Model::failed(Styles::default(), "word ".repeat(60));
        let out = strip_ansi(&render_full(&m));
        // 300 chars over 98-wide rows
        assert!(out.lines().filter(|l| l.contains("word")).count() >= 3);
        assert!(out.lines().all(|l| l.chars().count() == ERROR_WIDTH + 2));
    }
}
