use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::canvas::{Canvas, Context, Line};
use ratatui::Frame;

use crate::anim;
use crate::app::App;
use crate::intro::visual::VisualMode;

/// Decorative blob artwork behind the load panel. Shows the static
/// placeholder outlines until the animated renderer has been handed the
/// canvas; draws nothing at all when visuals are suppressed.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.visual.suppressed() {
        return;
    }
    let colors = crate::ui::colors::current();
    let color = colors.blob_style.fg.unwrap_or(Color::Magenta);

    let paths: Vec<Vec<(f64, f64)>> = match app.visual.mode() {
        VisualMode::Animated => match app.visual.anim() {
            Some(a) => a.paths(),
            None => return,
        },
        VisualMode::Placeholder => anim::start_blobs()
            .iter()
            .map(|outline| anim::sample_loop(outline))
            .collect(),
    };

    let canvas = Canvas::default()
        .x_bounds([-1.25, 1.25])
        .y_bounds([-1.25, 1.25])
        .paint(move |ctx: &mut Context| {
            for path in &paths {
                for pair in path.windows(2) {
                    ctx.draw(&Line {
                        x1: pair[0].0,
                        y1: pair[0].1,
                        x2: pair[1].0,
                        y2: pair[1].1,
                        color,
                    });
                }
            }
        });
    f.render_widget(canvas, area);
}
