use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct ShellLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_shell_layout(area: Rect) -> ShellLayout {
    // Main vertical split: header | body | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // Body: sidebar | gap | content
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Length(24), Constraint::Min(30)])
        .split(main_chunks[1]);

    ShellLayout {
        header: main_chunks[0],
        sidebar: body[0],
        content: body[1],
        status_bar: main_chunks[2],
    }
}

/// Auth screens: a centered card above the status bar.
pub fn compute_card_layout(area: Rect, width: u16, height: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    (centered(chunks[0], width, height), chunks[1])
}

/// Center a `width` x `height` rect inside `area`, shrinking to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

/// Split a content pane into a fixed-height top strip and the rest.
pub fn split_top(area: Rect, top: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(top), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Split horizontally into `n` equal columns.
pub fn columns(area: Rect, n: usize) -> Vec<Rect> {
    let n = n.max(1) as u32;
    Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints((0..n).map(|_| Constraint::Ratio(1, n)))
        .split(area)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered(area, 20, 4), Rect::new(10, 3, 20, 4));
        assert_eq!(centered(area, 80, 40), area);
    }

    #[test]
    fn test_shell_layout_reserves_status_row() {
        let layout = compute_shell_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 29);
        assert_eq!(layout.sidebar.width, 24);
    }
}
