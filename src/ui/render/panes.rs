use crate::ui::model::{Model, Pane};
use crate::ui::render::list::render_dataset;
use crate::ui::render::styles::{ATTRIBUTE_KEY_WIDTH, ATTRIBUTE_VALUE_WIDTH};
use crate::ui::render::util::single_line;
use crate::ui::tabs::TabSelector;
use lipgloss::{join_horizontal, join_vertical, CENTER, TOP};

const TAB_SEPARATOR: &str = "|";

pub fn render_packages_pane(m: &Model) -> String {
    let s = &m.styles.packages;
    let title = if m.packages.is_empty() {
        "Packages".to_string()
    } else {
        format!("Packages ({})", m.packages.len())
    };

    let title = s.title.render(&title);
    let separator = s.separator.render(&"─".repeat(s.width));
    let dataset = render_dataset(&m.packages, s, "No packages");
    let content = join_vertical(
        CENTER,
        &[title.as_str(), separator.as_str(), dataset.as_str()],
    );

    let frame = if m.focus == Pane::Packages {
        &s.active
    } else {
        &s.inactive
    };
    frame.render(&content)
}

pub fn render_artifacts_pane(m: &Model) -> String {
    let s = &m.styles.artifacts;

    let content = if m.show_artifacts {
        let tabs = render_tabs(m);
        let separator = s.separator.render(&"─".repeat(s.width));
        let dataset = render_dataset(m.artifacts.active_list(), s, "No artifacts");
        join_vertical(CENTER, &[tabs.as_str(), separator.as_str(), dataset.as_str()])
    } else {
        String::new()
    };

    let frame = if m.focus == Pane::Artifacts {
        &s.active
    } else {
        &s.inactive
    };
    frame.render(&content)
}

fn render_tabs(m: &Model) -> String {
    let s = &m.styles.tabs;
    let active = m.tabs.active();
    let separator = s.separator.render(TAB_SEPARATOR);

    let mut cells: Vec<String> = Vec::new();
    for (kind, label) in TabSelector::tabs() {
        if !cells.is_empty() {
            cells.push(separator.clone());
        }
        let style = if kind == active { &s.active } else { &s.inactive };
        cells.push(style.render(label));
    }
    let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
    s.area.render(&join_horizontal(TOP, &cells))
}

pub fn render_attributes_pane(m: &Model) -> String {
    let s = &m.styles.attributes;
    let rows: Vec<String> = m
        .attributes
        .attributes()
        .iter()
        .map(|a| {
            let key = s.key.render(&single_line(&a.key, ATTRIBUTE_KEY_WIDTH - 1));
            let value = s
                .value
                .render(&single_line(&a.value, ATTRIBUTE_VALUE_WIDTH - 1));
            join_horizontal(TOP, &[key.as_str(), value.as_str()])
        })
        .collect();
    s.area.render(&rows.join("\n"))
}
