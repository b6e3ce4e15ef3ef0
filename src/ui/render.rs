use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::config::PhysicsConfig;
use crate::flow::MatchScore;
use crate::game::{Ball, Paddle, Round};

use super::braille::BrailleCanvas;

// Layout: score row, controls hint row, then the Braille play field.
// The field's top and bottom border lines are drawn on the canvas itself.
const UI_HEADER_ROWS: u16 = 2;

/// Render one frame of the play screen: header text plus the virtual
/// field scaled onto a Braille canvas.
pub fn render_round(frame: &mut Frame, round: &Round, score: &MatchScore, physics: &PhysicsConfig) {
    let area = frame.area();

    // Draw background (true black RGB, not terminal default)
    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    draw_header(frame, round, score, area);

    if area.height <= UI_HEADER_ROWS {
        return;
    }

    let field_area = Rect {
        x: area.x,
        y: area.y + UI_HEADER_ROWS,
        width: area.width,
        height: area.height - UI_HEADER_ROWS,
    };

    let mut canvas = BrailleCanvas::new(field_area.width as usize, field_area.height as usize);

    // Field borders along the top and bottom pixel rows
    canvas.draw_horizontal_line(0);
    canvas.draw_horizontal_line(canvas.pixel_height().saturating_sub(1));

    // Scale from virtual coordinates to Braille pixels
    let scale_x = canvas.pixel_width() as f32 / physics.screen_width as f32;
    let scale_y = canvas.pixel_height() as f32 / physics.screen_height as f32;

    draw_paddle(&mut canvas, &round.first, scale_x, scale_y);
    draw_paddle(&mut canvas, &round.second, scale_x, scale_y);
    draw_ball(&mut canvas, &round.ball, scale_x, scale_y);

    let lines: Vec<String> = (0..canvas.rows()).map(|y| canvas.row_string(y)).collect();
    let field = Paragraph::new(lines.join("\n")).style(Style::default().fg(Color::White));
    frame.render_widget(field, field_area);
}

fn draw_header(frame: &mut Frame, round: &Round, score: &MatchScore, area: Rect) {
    let score_line = Paragraph::new(format!("{}   :   {}", score.first, score.second))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    frame.render_widget(
        score_line,
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    let hint = if round.second.is_human {
        "W/S: Player 1  ↑/↓: Player 2  Esc: Menu"
    } else {
        "W/S: Move  Esc: Menu"
    };
    let controls = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(
        controls,
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: 1,
        },
    );
}

fn draw_paddle(canvas: &mut BrailleCanvas, paddle: &Paddle, scale_x: f32, scale_y: f32) {
    let x = (paddle.x as f32 * scale_x) as usize;
    let y = (paddle.y as f32 * scale_y) as usize;
    // Thin shapes must still get at least one pixel at small terminal sizes
    let width = ((paddle.width as f32 * scale_x) as usize).max(1);
    let height = ((paddle.height as f32 * scale_y) as usize).max(1);
    canvas.fill_rect(x, y, width, height);
}

fn draw_ball(canvas: &mut BrailleCanvas, ball: &Ball, scale_x: f32, scale_y: f32) {
    let x = (ball.x as f32 * scale_x) as usize;
    let y = (ball.y as f32 * scale_y) as usize;
    let width = ((ball.diameter as f32 * scale_x) as usize).max(1);
    let height = ((ball.diameter as f32 * scale_y) as usize).max(1);
    canvas.fill_rect(x, y, width, height);
}
