//! TUI view: landing card, chat (header, transcript, input footer), debug log.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use ssp_constant::text::{chat, landing};
use unicode_width::UnicodeWidthStr;

use crate::layouts::{
    ChatsLayout, INPUT_ICON, PanelLayout, background_style, block_for_input_bordered, block_for_panel, border_style,
    button_style, input_height, input_rows, main_splits_with_padding, render_header, render_scrollbar,
    send_control_line, shortcut_inner_rect, shortcut_line, strong_style, text_muted_style, text_style,
    vertical_split,
};
use crate::messages::assistant::{AssistantMessage, assistant_message_lines};
use crate::messages::error::{ErrorMessage, error_message_lines};
use crate::messages::user::{UserMessage, user_message_lines};
use crate::state::{Screen, TuiState};
use crate::utils::{
    DESCRIPTION_MAX_ROWS, INPUT_MAX_ROWS, LEFT_PADDING, MESSAGE_SPACING_LINES, centered, clamp_scroll,
    truncate_ellipsis, wrap_lines,
};

/// Widest the landing card grows.
const LANDING_CARD_WIDTH: u16 = 64;
const LANDING_PADDING_H: u16 = 2;
const LANDING_PADDING_V: u16 = 1;

/// Rows below the input box: send control, helper text, shortcut hints.
const FOOTER_EXTRA_ROWS: u16 = 3;

/// Draw the screen selected by `state.screen`.
pub fn draw(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    frame.render_widget(Block::default().style(background_style(state.palette.background)), area);
    match state.screen {
        Screen::Landing => draw_landing(frame, state, area),
        Screen::Chat => draw_chat(frame, state, area),
        Screen::DebugTraces => draw_debug_traces(frame, state, area),
    }
}

/// Centered card with the title, the description and the single "open chat" action.
fn draw_landing(frame: &mut Frame, state: &TuiState, area: Rect) {
    let palette = &state.palette;
    let (body, hint_row) = vertical_split(area, area.height.saturating_sub(1));

    let card_width = LANDING_CARD_WIDTH.min(body.width.saturating_sub(4));
    let text_width = card_width.saturating_sub(2 + 2 * LANDING_PADDING_H) as usize;

    let mut lines = vec![
        Line::from(Span::styled(landing::TITLE, strong_style(palette.text))),
        Line::from(""),
    ];
    for row in wrap_lines(landing::DESCRIPTION, text_width) {
        lines.push(Line::from(Span::styled(row, text_muted_style(palette.text_muted))));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {}{} ", INPUT_ICON, landing::OPEN_CHAT),
        button_style(palette.button_text, palette.button_background),
    )));

    let card_height = lines.len() as u16 + 2 + 2 * LANDING_PADDING_V;
    let card = PanelLayout::new(centered(body, card_width, card_height), LANDING_PADDING_H, LANDING_PADDING_V);
    frame.render_widget(block_for_panel(palette, true), card.outer);
    frame.render_widget(Paragraph::new(lines), card.inner);

    frame.render_widget(
        Paragraph::new(shortcut_line(palette, state.shortcut_context())).alignment(Alignment::Center),
        hint_row,
    );
}

/// Transcript rows: messages with spacers, inline failures, and the typing indicator.
pub fn transcript_lines(state: &TuiState, width: usize) -> Vec<Line<'static>> {
    let palette = &state.palette;
    let mut lines: Vec<Line<'static>> = Vec::new();
    let spacer = |lines: &mut Vec<Line<'static>>| {
        if !lines.is_empty() {
            lines.extend(std::iter::repeat_n(Line::from(""), MESSAGE_SPACING_LINES));
        }
    };

    for (i, message) in state.session.messages().iter().enumerate() {
        spacer(&mut lines);
        if message.is_assistant() {
            let view = AssistantMessage::from_reveal(message, state.reveals.run(message.id()));
            lines.extend(assistant_message_lines(&view, palette, width, state.cursor_visible));
        } else {
            lines.extend(user_message_lines(&UserMessage::from(message), palette, width));
        }
        for notice in state.notices.iter().filter(|n| n.after == i + 1) {
            spacer(&mut lines);
            let error = ErrorMessage {
                text: notice.text.clone(),
                timestamp: Some(notice.timestamp.clone()),
            };
            lines.extend(error_message_lines(&error, palette, width));
        }
    }

    if state.session.is_submitting() {
        spacer(&mut lines);
        let mut spans = vec![
            Span::styled("│ ", text_style(palette.border)),
            Span::raw(LEFT_PADDING),
        ];
        spans.extend(state.typing_shimmer.styled_spans(chat::TYPING, palette));
        lines.push(Line::from(spans));
    }
    lines
}

/// Chat view: header, description, scrollable transcript, input footer.
fn draw_chat(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    // Input rows depend on the width inside the input box: border, padding, icon.
    let input_text_width = area.width.saturating_sub(2 + 2 + INPUT_ICON.width() as u16) as usize;
    let input = input_rows(&state.input_buffer, state.input_cursor, input_text_width);
    let input_h = input_height(input.rows.len());
    let splits = main_splits_with_padding(area, input_h + FOOTER_EXTRA_ROWS);
    let submitting = state.session.is_submitting();

    let (status, status_text) = state.header_status();
    render_header(frame, splits.header, &state.palette, chat::TITLE, status_text, status);

    // ---- Body: description + transcript ----
    let description: Vec<String> = wrap_lines(chat::DESCRIPTION, splits.body.width as usize)
        .into_iter()
        .take(DESCRIPTION_MAX_ROWS)
        .collect();
    let layout = ChatsLayout::new(splits.body, description.len() as u16);
    let palette = &state.palette;
    frame.render_widget(
        Paragraph::new(
            description
                .into_iter()
                .map(|row| Line::from(Span::styled(row, text_muted_style(palette.text_muted))))
                .collect::<Vec<_>>(),
        ),
        layout.description,
    );

    // one column for the scrollbar
    let width = layout.inner.width.saturating_sub(1) as usize;
    let viewport_height = layout.inner.height as usize;
    let all_lines = transcript_lines(state, width);
    let content_height = all_lines.len();

    // scroll counts lines up from the bottom (0 = newest content visible)
    if state.auto_scroll {
        state.scroll = 0;
    }
    state.scroll = clamp_scroll(state.scroll, content_height, viewport_height);
    state.last_content_height = content_height;
    state.last_viewport_height = viewport_height;
    let offset_from_top = content_height.saturating_sub(viewport_height).saturating_sub(state.scroll);

    let visible: Vec<Line> = all_lines
        .into_iter()
        .skip(offset_from_top)
        .take(viewport_height)
        .collect();
    let palette = &state.palette;
    frame.render_widget(Paragraph::new(visible), layout.inner);
    render_scrollbar(frame, layout.inner, palette, content_height, offset_from_top);

    // ---- Footer: input, send control, helper, shortcuts ----
    let (input_rect, rest) = vertical_split(splits.footer, input_h);
    let (control_row, rest) = vertical_split(rest, 1);
    let (helper_row, shortcut_row) = vertical_split(rest, 1);

    let block = block_for_input_bordered(palette, !submitting);
    let inner = block.inner(input_rect);
    frame.render_widget(block, input_rect);

    let max_rows = INPUT_MAX_ROWS as usize;
    let first_row = input.cursor.0.saturating_sub(max_rows - 1);
    let input_lines: Vec<Line> = if state.input_buffer.is_empty() {
        vec![Line::from(vec![
            Span::styled(INPUT_ICON, text_style(palette.accent)),
            Span::styled(chat::PLACEHOLDER, text_style(palette.text_placeholder)),
        ])]
    } else {
        input
            .rows
            .iter()
            .enumerate()
            .skip(first_row)
            .take(max_rows)
            .map(|(i, row)| {
                let lead = if i == 0 { INPUT_ICON } else { "  " };
                Line::from(vec![
                    Span::styled(lead, text_style(palette.success)),
                    Span::styled(row.clone(), text_style(palette.text)),
                ])
            })
            .collect()
    };
    frame.render_widget(Paragraph::new(input_lines), inner);

    if inner.width > 0 && inner.height > 0 {
        let (row, col) = input.cursor;
        let x = inner.x + (INPUT_ICON.width() + col) as u16;
        let y = inner.y + (row - first_row) as u16;
        frame.set_cursor_position((x.min(inner.x + inner.width - 1), y.min(inner.y + inner.height - 1)));
    }

    let control_rect = shortcut_inner_rect(control_row);
    frame.render_widget(
        Paragraph::new(send_control_line(palette, submitting, control_rect.width as usize)),
        control_rect,
    );
    let helper_rect = shortcut_inner_rect(helper_row);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            truncate_ellipsis(chat::HELPER_TEXT, helper_rect.width as usize),
            text_muted_style(palette.text_muted),
        ))),
        helper_rect,
    );
    frame.render_widget(
        Paragraph::new(shortcut_line(palette, state.shortcut_context())),
        shortcut_inner_rect(shortcut_row),
    );
}

/// Log screen: tracing output captured by the observability sink. Ctrl+D to close.
fn draw_debug_traces(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let palette = &state.palette;
    let block = Block::default()
        .title(" Logs (Ctrl+D / Esc to close) ")
        .borders(Borders::ALL)
        .border_style(border_style(palette.border))
        .style(background_style(palette.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let viewport_height = inner.height as usize;
    let content_height = state.trace_lines.len();
    state.trace_scroll = clamp_scroll(state.trace_scroll, content_height, viewport_height);
    let offset_from_top = content_height.saturating_sub(viewport_height).saturating_sub(state.trace_scroll);

    let lines: Vec<Line> = state
        .trace_lines
        .iter()
        .skip(offset_from_top)
        .take(viewport_height)
        .map(|s| {
            Line::from(Span::styled(
                truncate_ellipsis(s, width),
                text_muted_style(palette.text_muted),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use ssp_constant::text::transcript::MOCK_REPLY;
    use ssp_core::ChatEvent;
    use std::time::Instant;
    use unicode_width::UnicodeWidthStr;

    /// Screen text row by row; cells hidden behind wide characters are skipped.
    fn screen(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            let mut x = 0;
            while x < buf.area.width {
                let symbol = buf[(x, y)].symbol();
                out.push_str(symbol);
                x += symbol.width().max(1) as u16;
            }
            out.push('\n');
        }
        out
    }

    fn render(state: &mut TuiState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, state, f.area())).unwrap();
        screen(terminal.backend().buffer())
    }

    fn drain(state: &mut TuiState) {
        while let Some(at) = state.next_deadline() {
            state.advance_reveals(at);
        }
    }

    #[test]
    fn landing_shows_title_and_action() {
        let mut s = TuiState::new();
        let text = render(&mut s, 80, 24);
        assert!(text.contains(landing::TITLE));
        assert!(text.contains(landing::OPEN_CHAT));
        assert!(text.contains("Enter: open chat"));
    }

    #[test]
    fn chat_shows_header_greeting_and_input() {
        let t0 = Instant::now();
        let mut s = TuiState::new();
        s.open_chat(t0);
        drain(&mut s);
        let text = render(&mut s, 80, 24);
        assert!(text.contains(chat::TITLE));
        assert!(text.contains(chat::STATUS_READY));
        assert!(text.contains(chat::ROLE_ASSISTANT));
        assert!(text.contains("こんにちは"));
        assert!(text.contains(chat::PLACEHOLDER));
        assert!(text.contains(chat::SEND));
        assert!(!text.contains("▌"));
    }

    #[test]
    fn submitting_shows_busy_state_and_typing_indicator() {
        let t0 = Instant::now();
        let mut s = TuiState::new();
        s.open_chat(t0);
        drain(&mut s);
        s.input_buffer = "進捗は？".into();
        s.input_cursor = s.input_buffer.len();
        s.submit(Local::now(), t0).unwrap();
        let text = render(&mut s, 80, 24);
        assert!(text.contains(chat::SENDING));
        assert!(text.contains(chat::STATUS_SENDING));
        assert!(text.contains(chat::TYPING));
        assert!(text.contains(chat::ROLE_USER));
        assert!(text.contains("進捗は？"));
    }

    #[test]
    fn revealing_reply_shows_cursor_and_progress() {
        let t0 = Instant::now();
        let mut s = TuiState::new();
        s.open_chat(t0);
        drain(&mut s);
        s.input_buffer = "hi".into();
        s.submit(Local::now(), t0).unwrap();
        s.apply_event(ChatEvent::reply(MOCK_REPLY), Local::now(), t0);
        let at = s.next_deadline().unwrap();
        s.advance_reveals(at);
        let text = render(&mut s, 80, 24);
        assert!(text.contains("了▌"));
        assert!(text.contains("%"));
        assert!(!text.contains(MOCK_REPLY));

        drain(&mut s);
        let text = render(&mut s, 120, 30);
        assert!(text.contains(MOCK_REPLY));
        assert!(!text.contains("▌"));
    }

    #[test]
    fn failure_is_shown_inline() {
        let t0 = Instant::now();
        let mut s = TuiState::new();
        s.open_chat(t0);
        drain(&mut s);
        s.input_buffer = "hi".into();
        s.submit(Local::now(), t0).unwrap();
        s.apply_event(ChatEvent::failed("backend down"), Local::now(), t0);
        let text = render(&mut s, 80, 24);
        assert!(text.contains("✗ Reply failed"));
        assert!(text.contains("backend down"));
        assert!(text.contains(chat::SEND));
    }

    #[test]
    fn multiline_input_grows_box() {
        let t0 = Instant::now();
        let mut s = TuiState::new();
        s.open_chat(t0);
        s.input_insert_str("one\ntwo\nthree");
        let text = render(&mut s, 80, 24);
        assert!(text.contains("▸ one"));
        assert!(text.contains("  two"));
        assert!(text.contains("  three"));
    }

    #[test]
    fn scrolled_up_shows_older_content() {
        let t0 = Instant::now();
        let mut s = TuiState::new();
        s.open_chat(t0);
        for i in 0..6 {
            s.input_buffer = format!("message {}", i);
            s.submit(Local::now(), t0).unwrap();
            s.apply_event(ChatEvent::reply("ok"), Local::now(), t0);
        }
        drain(&mut s);
        let bottom = render(&mut s, 60, 20);
        assert!(bottom.contains("message 5"));
        assert!(!bottom.contains("message 0"));

        s.scroll_up(1000);
        let top = render(&mut s, 60, 20);
        assert!(top.contains("message 0"));
        assert!(s.scroll < 1000);
    }

    #[test]
    fn debug_view_shows_newest_lines() {
        let mut s = TuiState::new();
        for i in 0..100 {
            s.push_trace_line(format!("[INFO] ssp: line {}", i));
        }
        s.toggle_debug();
        let text = render(&mut s, 60, 10);
        assert!(text.contains("line 99"));
        assert!(!text.contains("line 91"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let t0 = Instant::now();
        let mut s = TuiState::new();
        render(&mut s, 3, 2);
        s.open_chat(t0);
        render(&mut s, 3, 2);
        render(&mut s, 10, 4);
        s.toggle_debug();
        render(&mut s, 2, 1);
    }
}
