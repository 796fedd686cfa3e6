use crate::ui::list::{ListItem, ListWidget};
use crate::ui::render::styles::PaneStyles;
use crate::ui::render::util::single_line;

/// Renders the visible window of a list as a block sized by the pane's
/// dataset style.
pub fn render_dataset<T: ListItem>(
    list: &ListWidget<T>,
    styles: &PaneStyles,
    placeholder: &str,
) -> String {
    if list.is_empty() {
        let text = single_line(placeholder, styles.width);
        return styles.dataset.render(&styles.empty.render(&text));
    }

    let label_width = styles.width.saturating_sub(1);
    let selected = list.selected_index();
    let rows: Vec<String> = list
        .visible()
        .map(|(idx, item)| {
            let style = if Some(idx) == selected {
                &styles.selected
            } else {
                &styles.item
            };
            style.render(&single_line(item.label(), label_width))
        })
        .collect();
    styles.dataset.render(&rows.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpi::ContentPackage;
    use crate::ui::render::styles::Palette;
    use regex::Regex;

    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    fn pkg(name: &str) -> ContentPackage {
        ContentPackage {
            id: name.to_uppercase(),
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_list_shows_placeholder_and_fills_height() {
        let list: ListWidget<ContentPackage> = ListWidget::new(5);
        let styles = PaneStyles::new(20, 5, Palette::green());
        let out = strip_ansi(&render_dataset(&list, &styles, "No packages"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        let first = lines[0];
        assert_eq!(first.trim(), "No packages");
        assert_eq!(first.chars().count(), 20);
    }

    #[test]
    fn rows_are_truncated_to_width() {
        let mut list = ListWidget::new(5);
        list.set_items(
            vec![pkg("short"), pkg("a rather long package name that overflows")],
            true,
        );
        let styles = PaneStyles::new(12, 3, Palette::green());
        let out = strip_ansi(&render_dataset(&list, &styles, "-"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " short      ");
        assert_eq!(lines[1], " a rather l…");
        assert_eq!(lines[2].trim(), "");
    }

    #[test]
    fn only_window_rows_are_rendered() {
        let mut list = ListWidget::new(2);
        list.set_items(vec![pkg("a"), pkg("b"), pkg("c")], true);
        list.select_prev();
        let styles = PaneStyles::new(4, 2, Palette::green());
        let out = strip_ansi(&render_dataset(&list, &styles, "-"));
        assert_eq!(out.lines().collect::<Vec<_>>(), vec![" b  ", " c  "]);
    }
}
