use ratatui::{Frame, layout::Rect, style::Stylize, text::Line};

use super::{centered, render_controls, stack};

pub fn draw(frame: &mut Frame, requested: &str) {
    let chunks = stack(frame.area(), 0, &[1]);
    let body = chunks[1];

    let lines = vec![
        Line::from("Error 404").dim(),
        Line::default(),
        Line::from("Not Found").bold(),
        Line::default(),
        Line::from("This painting does not exist in our collection"),
        Line::from(requested.to_string()).dim().italic(),
        Line::default(),
        Line::from("← Return to Index").underlined(),
    ];
    let height = lines.len() as u16;
    let top = body.height.saturating_sub(height) / 2;
    let area = Rect {
        y: body.y + top,
        height: height.min(body.height),
        ..body
    };
    frame.render_widget(centered(lines), area);

    render_controls(frame, chunks[2], &["enter", "q"]);
}
