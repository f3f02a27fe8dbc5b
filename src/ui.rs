use ratatui::prelude::*;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.active_mut().render(frame, area);
}
