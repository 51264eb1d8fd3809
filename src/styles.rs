//! Theme string builder: precomputed style-text blocks and the pure
//! composition functions that assemble them per feature-flag state.
//!
//! The blocks are opaque to this crate; they are concatenated and handed to
//! the host verbatim, never parsed or validated.

use indoc::indoc;

use crate::coordinator::RedesignFlags;

pub const FLAT_DOCK_STYLE: &str = indoc! {"
    QDockWidget {
        border: none;
        titlebar-close-icon: none;
        titlebar-normal-icon: none;
    }
    QDockWidget::title {
        background: transparent;
        padding: 4px;
    }
"};

pub const FLAT_BUTTON_STYLE: &str = indoc! {"
    QToolButton, QPushButton {
        background-color: transparent;
        border: none;
        border-radius: 4px;
    }
    QToolButton:checked, QPushButton:checked {
        background-color: #aa306fa8;
    }
"};

pub const FLAT_MAIN_WINDOW_STYLE: &str = indoc! {"
    QMainWindow {
        border: none;
    }
    QMainWindow::separator {
        background: transparent;
        width: 2px;
        height: 2px;
    }
"};

pub const FLAT_COMBO_BOX_STYLE: &str = indoc! {"
    QComboBox {
        background-color: #80000000;
        border: none;
        border-radius: 4px;
    }
"};

pub const FLAT_STATUS_BAR_STYLE: &str = indoc! {"
    QStatusBar {
        background: transparent;
        border: none;
    }
"};

pub const FLAT_TAB_STYLE: &str = indoc! {"
    QTabBar::tab {
        border: none;
        padding: 4px 8px;
    }
    QTabBar::tab:selected {
        background: #306fa8;
    }
"};

pub const FLAT_TREE_VIEW_STYLE: &str = indoc! {"
    QTreeView {
        background: transparent;
        border: none;
    }
"};

pub const FLAT_MENU_BAR_STYLE: &str = indoc! {"
    QMenuBar {
        background: transparent;
        border: none;
    }
"};

pub const FLAT_OVERVIEW_DOCKER_STYLE: &str = indoc! {"
    OverviewDocker * {
        background: transparent;
        border: none;
    }
"};

pub const FLAT_WELCOME_PAGE_STYLE: &str = indoc! {"
    KisWelcomePage {
        background: transparent;
    }
    KisWelcomePage QFrame {
        border: none;
    }
"};

pub const SMALL_TAB_STYLE: &str = indoc! {"
    QTabBar::tab {
        height: 16px;
        padding: 0px 8px;
    }
"};

pub const BIG_TAB_STYLE: &str = indoc! {"
    QTabBar::tab {
        height: 28px;
        padding: 4px 8px;
    }
"};

/// Translucent styling applied to pad contents so the borrowed widgets sit
/// visually on top of the canvas.
pub const PAD_STYLE: &str = indoc! {"
    * {
        background-color: #00000000;
    }
    QScrollArea, QScrollArea * {
        background-color: #00000000;
    }
    QScrollArea QToolTip {
        background-color: #ffffff;
    }
    QToolButton, QPushButton {
        background-color: #80000000;
        border: none;
        border-radius: 4px;
    }
    QToolButton:checked, QPushButton:checked {
        background-color: #aa306fa8;
    }
    QAbstractSpinBox, QComboBox {
        background-color: #80000000;
        border: none;
        border-radius: 4px;
    }
"};

/// The host-window sheet: the flat-theme blocks in composition order when
/// the flat theme is on, empty otherwise.
pub fn full_style_sheet(flags: &RedesignFlags) -> String {
    if !flags.flat_theme {
        return String::new();
    }
    let mut sheet = String::new();
    for block in [
        FLAT_DOCK_STYLE,
        FLAT_BUTTON_STYLE,
        FLAT_MAIN_WINDOW_STYLE,
        FLAT_COMBO_BOX_STYLE,
        FLAT_STATUS_BAR_STYLE,
        FLAT_TAB_STYLE,
        FLAT_TREE_VIEW_STYLE,
        FLAT_MENU_BAR_STYLE,
    ] {
        sheet.push('\n');
        sheet.push_str(block);
        sheet.push('\n');
    }
    sheet
}

/// Canvas sheet selecting thin or regular document tabs.
pub fn canvas_style_sheet(flags: &RedesignFlags) -> String {
    let tab = if flags.thin_document_tabs {
        SMALL_TAB_STYLE
    } else {
        BIG_TAB_STYLE
    };
    format!("\n{tab}\n")
}

/// Overview-docker sheet, flat variant only.
pub fn overview_style_sheet(flags: &RedesignFlags) -> String {
    if flags.flat_theme {
        format!("\n{FLAT_OVERVIEW_DOCKER_STYLE}\n")
    } else {
        String::new()
    }
}

/// Welcome-page sheet, flat variant only.
pub fn welcome_style_sheet(flags: &RedesignFlags) -> String {
    if flags.flat_theme {
        FLAT_WELCOME_PAGE_STYLE.to_string()
    } else {
        String::new()
    }
}

/// Style text applied to a pad's borrowed content. Pure function of the
/// flag state.
pub fn pad_style_sheet(_flags: &RedesignFlags) -> String {
    PAD_STYLE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags() -> RedesignFlags {
        RedesignFlags {
            flat_theme: true,
            thin_document_tabs: true,
            toolbox: true,
            tool_options: true,
        }
    }

    #[test]
    fn full_sheet_contains_every_flat_block_in_order() {
        let sheet = full_style_sheet(&flags());
        let dock = sheet.find("QDockWidget").expect("dock block");
        let menu_bar = sheet.find("QMenuBar").expect("menu bar block");
        assert!(dock < menu_bar);
    }

    #[test]
    fn full_sheet_is_empty_without_flat_theme() {
        let mut f = flags();
        f.flat_theme = false;
        assert!(full_style_sheet(&f).is_empty());
        assert!(overview_style_sheet(&f).is_empty());
        assert!(welcome_style_sheet(&f).is_empty());
    }

    #[test]
    fn canvas_sheet_tracks_tab_flag() {
        let mut f = flags();
        assert!(canvas_style_sheet(&f).contains("height: 16px"));
        f.thin_document_tabs = false;
        assert!(canvas_style_sheet(&f).contains("height: 28px"));
    }

    #[test]
    fn pad_sheet_keeps_contents_translucent() {
        let sheet = pad_style_sheet(&flags());
        assert!(sheet.contains("#00000000"));
    }
}
