//! Full-frame rendering.

use ratatui::{widgets::Paragraph, Frame};

use crate::app::state::{ActiveView, AppState};

use super::{
    chrome::PullBar, hud::Hud, layout::PageLayout, page::PageView, popup::SettingsPopup,
    theme::Theme,
};

/// Draw one frame.  Also feeds the page height back into the scroll model,
/// so boundary checks always see what is on screen.
pub fn draw(frame: &mut Frame, state: &mut AppState) {
    let layout = PageLayout::from_area(frame.area());
    state.scroll.resize(layout.page_area.height as usize);

    let surface = state.engine.surface();
    state.displayed.sync(surface.offset, surface.transition);
    let max_pull = state.engine.config().max_pull_distance();
    let pull = state.engine.throttled_distance();

    frame.render_widget(
        PullBar {
            title: &state.document.title,
            pull,
            max_pull,
        },
        layout.header_area,
    );
    frame.render_widget(
        PageView {
            lines: &state.document.lines,
            first_row: state.scroll.offset,
            shift: state.displayed.rows(state.config.px_per_row),
            overlay_opacity: surface.overlay_opacity,
        },
        layout.page_area,
    );
    frame.render_widget(
        PullBar {
            title: state.config.active_profile().label(),
            pull,
            max_pull,
        },
        layout.footer_area,
    );

    let hint = state.config.status_bar_hint();
    let status_text = match state.active_view {
        ActiveView::Page => state.status_message.as_deref().unwrap_or(&hint),
        ActiveView::SettingsMenu => "",
    };
    frame.render_widget(
        Paragraph::new(status_text).style(Theme::status_bar_style()),
        layout.status_area,
    );

    if state.config.show_hud {
        frame.render_widget(
            Hud {
                engine: &state.engine,
                profile: state.config.active_profile().label(),
            },
            layout.page_area,
        );
    }

    if state.active_view == ActiveView::SettingsMenu {
        frame.render_widget(SettingsPopup { state: &*state }, frame.area());
    }
}
