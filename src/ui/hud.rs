//! Debug overlay showing the engine's live state.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::core::animator::AnimatorState;
use crate::core::{OverscrollEngine, Transition};

use super::theme::Theme;

const WIDTH: u16 = 30;

/// Small box pinned to the top-right corner of `area`.
pub struct Hud<'a> {
    pub engine: &'a OverscrollEngine,
    pub profile: &'a str,
}

impl Widget for Hud<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = hud_lines(self.engine, self.profile);
        let height = lines.len() as u16 + 2;
        if area.width < WIDTH + 2 || area.height < height {
            return;
        }
        let rect = Rect::new(area.right() - WIDTH - 1, area.y, WIDTH, height);
        Clear.render(rect, buf);
        let block = Block::default()
            .title(" engine ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::dim_style());
        Paragraph::new(lines)
            .style(Theme::status_bar_style())
            .block(block)
            .render(rect, buf);
    }
}

fn hud_lines<'a>(engine: &OverscrollEngine, profile: &str) -> Vec<Line<'a>> {
    let animator = match engine.animator_state() {
        AnimatorState::Idle => "idle",
        AnimatorState::Relaxing(_) => "relaxing",
    };
    let transition = match engine.surface().transition {
        Transition::Immediate => "immediate",
        Transition::Eased => "eased",
    };
    vec![
        Line::from(format!(" profile     {profile}")),
        Line::from(format!(" raw         {:+8.2}", engine.raw_distance())),
        Line::from(format!(" published   {:+8.2}", engine.throttled_distance())),
        Line::from(format!(" opacity     {:8.2}", engine.surface().overlay_opacity)),
        Line::from(format!(" gesture     {}", engine.is_interacting())),
        Line::from(format!(" animator    {animator}")),
        Line::from(format!(" transition  {transition}")),
        Line::from(format!(" publishes   {}", engine.publications())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PullConfig;

    #[test]
    fn hud_lists_engine_state() {
        let engine = OverscrollEngine::mount(PullConfig::default());
        let text: Vec<String> = hud_lines(&engine, "default")
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert!(text.iter().any(|l| l.contains("animator    idle")));
        assert!(text.iter().any(|l| l.contains("transition  eased")));
    }

    #[test]
    fn hud_skips_tiny_areas() {
        let engine = OverscrollEngine::mount(PullConfig::default());
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        Hud {
            engine: &engine,
            profile: "default",
        }
        .render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
