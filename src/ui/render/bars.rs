use crate::ui::keymap::HELP;
use crate::ui::model::Model;
use crate::ui::render::styles::BAR_WIDTH;
use crate::ui::render::util::single_line;

// The message keeps at least this many cells before key hints are dropped.
const MIN_MESSAGE_WIDTH: usize = 40;
const MAX_TENANT_WIDTH: usize = BAR_WIDTH / 4;
const PAIR_SEPARATOR: &str = "  ";

pub fn render_title_bar(m: &Model) -> String {
    m.styles.bars.title.render(&m.title.text())
}

/// Tenant badge, message, then as many key hints as fit on the right.
/// Narrower terminals shrink the bar; until the first resize it spans the
/// dashboard.
pub fn render_status_bar(m: &Model) -> String {
    let width = match m.screen_width {
        0 => BAR_WIDTH,
        w => w.min(BAR_WIDTH),
    };
    render_status_bar_with_width(m, width)
}

fn render_status_bar_with_width(m: &Model, total_width: usize) -> String {
    let s = &m.styles.bars;

    let tenant = s
        .tenant
        .render(&single_line(&m.status.tenant, MAX_TENANT_WIDTH - 2));
    let avail = total_width.saturating_sub(lipgloss::width(&tenant));

    // plain width of each pair: "key desc"
    let pair_widths: Vec<usize> = HELP
        .iter()
        .map(|(k, d)| k.chars().count() + 1 + d.chars().count())
        .collect();
    let pairs_width = |n: usize| -> usize {
        if n == 0 {
            return 0;
        }
        pair_widths.iter().take(n).sum::<usize>() + PAIR_SEPARATOR.len() * (n - 1) + 1
    };

    let message_len = m.status.message.chars().count() + 1;
    let wanted = message_len.min(MIN_MESSAGE_WIDTH);
    let mut pairs_count = HELP.len();
    while pairs_count > 0 && wanted + pairs_width(pairs_count) > avail {
        pairs_count -= 1;
    }

    let message_width = avail - pairs_width(pairs_count);
    let message = match message_width {
        0 => String::new(),
        w => s
            .message
            .clone()
            .width(w as i32)
            .render(&single_line(&m.status.message, w - 1)),
    };

    let hints = if pairs_count > 0 {
        let pairs: Vec<String> = HELP
            .iter()
            .take(pairs_count)
            .map(|(k, d)| format!("{}{}", s.help_key.render(k), s.help_desc.render(d)))
            .collect();
        let gap = s.help_key.render(PAIR_SEPARATOR);
        format!("{}{}", pairs.join(gap.as_str()), s.help_key.render(" "))
    } else {
        String::new()
    };

    format!("{tenant}{message}{hints}")
}
