use lipgloss::{normal_border, rounded_border, Color, Style, CENTER};

// Fixed geometry of the dashboard, in terminal cells (borders excluded).
pub const PACKAGES_PANE_WIDTH: usize = 60;
pub const ARTIFACTS_PANE_WIDTH: usize = 90;
pub const ATTRIBUTES_PANE_WIDTH: usize = 152;
pub const BAR_WIDTH: usize = 154;
pub const ERROR_WIDTH: usize = 100;
pub const DATASET_HEIGHT: usize = 20;
pub const ATTRIBUTES_HEIGHT: usize = 10;
pub const ATTRIBUTE_KEY_WIDTH: usize = 15;
pub const ATTRIBUTE_VALUE_WIDTH: usize = ATTRIBUTES_PANE_WIDTH - ATTRIBUTE_KEY_WIDTH;
pub const TAB_WIDTH: usize = 18;
pub const ERROR_INNER_WIDTH: usize = ERROR_WIDTH - 2;
pub const ERROR_DETAILS_HEIGHT: usize = 5;

/// Catppuccin Mocha.
pub struct Palette;

impl Palette {
    pub fn red() -> Color {
        Color::from_rgb(0xf3, 0x8b, 0xa8)
    }
    pub fn peach() -> Color {
        Color::from_rgb(0xfa, 0xb3, 0x87)
    }
    pub fn green() -> Color {
        Color::from_rgb(0xa6, 0xe3, 0xa1)
    }
    pub fn teal() -> Color {
        Color::from_rgb(0x94, 0xe2, 0xd5)
    }
    pub fn sky() -> Color {
        Color::from_rgb(0x89, 0xdc, 0xeb)
    }
    pub fn sapphire() -> Color {
        Color::from_rgb(0x74, 0xc7, 0xec)
    }
    pub fn blue() -> Color {
        Color::from_rgb(0x89, 0xb4, 0xfa)
    }
    pub fn lavender() -> Color {
        Color::from_rgb(0xb4, 0xbe, 0xfe)
    }
    pub fn text() -> Color {
        Color::from_rgb(0xcd, 0xd6, 0xf4)
    }
    pub fn overlay0() -> Color {
        Color::from_rgb(0x6c, 0x70, 0x86)
    }
    pub fn surface0() -> Color {
        Color::from_rgb(0x31, 0x32, 0x44)
    }
    pub fn base() -> Color {
        Color::from_rgb(0x1e, 0x1e, 0x2e)
    }
    pub fn crust() -> Color {
        Color::from_rgb(0x11, 0x11, 0x1b)
    }
}

fn common() -> Style {
    Style::new()
        .background(Palette::base())
        .foreground(Palette::text())
}

fn frame() -> Style {
    common()
        .border(normal_border())
        .border_foreground(Palette::overlay0())
}

/// Styles of one list pane. Every style is sized to the pane, so rendering
/// only has to cut labels that would overflow.
#[derive(Clone)]
pub struct PaneStyles {
    pub width: usize,
    pub inactive: Style,
    pub active: Style,
    pub title: Style,
    pub separator: Style,
    pub dataset: Style,
    pub empty: Style,
    pub item: Style,
    pub selected: Style,
}

impl PaneStyles {
    pub fn new(width: usize, dataset_height: usize, highlight: Color) -> Self {
        let w = width as i32;
        let h = dataset_height as i32;
        let inactive = frame().width(w).height(h + 2).max_height(h + 2);
        let item = common().width(w).padding_left(1);
        Self {
            width,
            active: inactive.clone().border_foreground(Palette::lavender()),
            inactive,
            title: common()
                .width(w)
                .align_horizontal(CENTER)
                .foreground(Palette::teal())
                .bold(true),
            separator: common().width(w).foreground(Palette::overlay0()),
            dataset: Style::new().width(w).height(h).max_height(h),
            empty: common()
                .width(w)
                .align_horizontal(CENTER)
                .foreground(Palette::overlay0()),
            selected: item
                .clone()
                .background(highlight)
                .foreground(Palette::crust()),
            item,
        }
    }
}

#[derive(Clone)]
pub struct TabStyles {
    pub area: Style,
    pub active: Style,
    pub inactive: Style,
    pub separator: Style,
}

#[derive(Clone)]
pub struct AttributeStyles {
    pub area: Style,
    pub key: Style,
    pub value: Style,
}

#[derive(Clone)]
pub struct BarStyles {
    pub title: Style,
    pub tenant: Style,
    pub message: Style,
    pub help_key: Style,
    pub help_desc: Style,
}

#[derive(Clone)]
pub struct ErrorStyles {
    pub area: Style,
    pub title: Style,
    pub details: Style,
}

/// Every style the renderer uses, built once at startup.
#[derive(Clone)]
pub struct Styles {
    pub packages: PaneStyles,
    pub artifacts: PaneStyles,
    pub tabs: TabStyles,
    pub attributes: AttributeStyles,
    pub bars: BarStyles,
    pub error: ErrorStyles,
}

impl Default for Styles {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Styles {
    pub fn mocha() -> Self {
        let tab = common()
            .width(TAB_WIDTH as i32)
            .align_horizontal(CENTER)
            .foreground(Palette::overlay0());
        let bar = Style::new().background(Palette::surface0());

        Self {
            packages: PaneStyles::new(PACKAGES_PANE_WIDTH, DATASET_HEIGHT, Palette::green()),
            artifacts: PaneStyles::new(ARTIFACTS_PANE_WIDTH, DATASET_HEIGHT, Palette::peach()),
            tabs: TabStyles {
                area: common()
                    .width(ARTIFACTS_PANE_WIDTH as i32)
                    .align_horizontal(CENTER),
                active: tab.clone().foreground(Palette::sky()).bold(true),
                inactive: tab,
                separator: common()
                    .padding(0, 1, 0, 1)
                    .foreground(Palette::overlay0()),
            },
            attributes: AttributeStyles {
                area: frame()
                    .width(ATTRIBUTES_PANE_WIDTH as i32)
                    .height(ATTRIBUTES_HEIGHT as i32)
                    .max_height(ATTRIBUTES_HEIGHT as i32),
                key: common()
                    .width(ATTRIBUTE_KEY_WIDTH as i32)
                    .padding_left(1)
                    .foreground(Palette::blue()),
                value: common()
                    .width(ATTRIBUTE_VALUE_WIDTH as i32)
                    .padding_left(1),
            },
            bars: BarStyles {
                title: Style::new()
                    .width(BAR_WIDTH as i32)
                    .align_horizontal(CENTER)
                    .background(Palette::sapphire())
                    .foreground(Palette::crust())
                    .bold(true),
                tenant: Style::new()
                    .padding(0, 1, 0, 1)
                    .background(Palette::lavender())
                    .foreground(Palette::crust()),
                message: bar.clone().padding_left(1).foreground(Palette::text()),
                help_key: bar
                    .clone()
                    .foreground(Palette::lavender())
                    .bold(true),
                help_desc: bar.padding_left(1).foreground(Palette::overlay0()),
            },
            error: ErrorStyles {
                area: common()
                    .width(ERROR_WIDTH as i32)
                    .padding(0, 1, 0, 1)
                    .border(rounded_border())
                    .border_foreground(Palette::red()),
                title: Style::new()
                    .width(ERROR_INNER_WIDTH as i32)
                    .align_horizontal(CENTER)
                    .background(Palette::red())
                    .foreground(Palette::crust())
                    .bold(true),
                details: common()
                    .width(ERROR_INNER_WIDTH as i32)
                    .height(ERROR_DETAILS_HEIGHT as i32)
                    .foreground(Palette::red()),
            },
        }
    }
}
