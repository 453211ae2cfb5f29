//! A vertical stack of toast notifications rendered from a snapshot. This is
//! a **stateless** render helper, not a stateful component: all lifecycle
//! lives in the manager, and the stack just draws the latest snapshot it is
//! given.

use crouton_core::toast::{Toast, ToastKind};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Visual style configuration for a [`ToastStack`].
#[derive(Debug, Clone)]
pub struct ToastStackStyle {
    /// Style for success toasts.
    pub success: Style,
    /// Style for error toasts.
    pub error: Style,
    /// Style for warning toasts.
    pub warning: Style,
    /// Style for info toasts.
    pub info: Style,
    /// Modifier patch applied while a toast plays its exit animation.
    pub exiting: Style,
    /// Style for the optional title segment.
    pub title: Style,
}

impl Default for ToastStackStyle {
    fn default() -> Self {
        Self {
            success: Style::default().fg(Color::Green),
            error: Style::default().fg(Color::Red),
            warning: Style::default().fg(Color::Yellow),
            info: Style::default().fg(Color::Cyan),
            exiting: Style::default().add_modifier(Modifier::DIM),
            title: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

/// Renders a snapshot of the toast sequence, one row per toast, in insertion
/// order (oldest at the top).
///
/// Each row shows the kind's icon glyph, the optional bold title, and the
/// message, colored by kind and dimmed while the toast is exiting. Rows that
/// do not fit the area height are cut from the oldest end so the newest
/// toasts stay in view; text wider than the area is truncated with an
/// ellipsis.
///
/// # Example
///
/// ```rust,ignore
/// use crouton_widgets::toast_stack::ToastStack;
///
/// // inside your draw loop, with `snapshot` from `notifier.toasts()`:
/// ToastStack::new(&snapshot).render(frame, toast_area);
/// ```
pub struct ToastStack<'a> {
    toasts: &'a [Toast],
    style: ToastStackStyle,
}

impl<'a> ToastStack<'a> {
    /// Create a stack over a snapshot slice.
    pub fn new(toasts: &'a [Toast]) -> Self {
        Self {
            toasts,
            style: ToastStackStyle::default(),
        }
    }

    /// Set the visual style.
    pub fn with_style(mut self, style: ToastStackStyle) -> Self {
        self.style = style;
        self
    }

    fn kind_style(&self, kind: ToastKind) -> Style {
        match kind {
            ToastKind::Success => self.style.success,
            ToastKind::Error => self.style.error,
            ToastKind::Warning => self.style.warning,
            ToastKind::Info => self.style.info,
        }
    }

    /// Render the stack into the given frame and area.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let height = area.height as usize;
        let skip = self.toasts.len().saturating_sub(height);
        let mut lines = Vec::with_capacity(self.toasts.len() - skip);

        for toast in &self.toasts[skip..] {
            let mut base = self.kind_style(toast.kind);
            if toast.is_exiting() {
                base = base.patch(self.style.exiting);
            }

            let mut spans = vec![Span::styled(format!("{} ", toast.kind.icon()), base)];
            if let Some(ref title) = toast.title {
                spans.push(Span::styled(
                    format!("{title} "),
                    base.patch(self.style.title),
                ));
            }
            spans.push(Span::styled(toast.message.clone(), base));

            lines.push(truncate_line(Line::from(spans), area.width as usize));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Truncate a line to `max_width` terminal columns, appending an ellipsis
/// when anything was cut.
fn truncate_line(line: Line<'_>, max_width: usize) -> Line<'static> {
    if line.width() <= max_width {
        return line
            .spans
            .into_iter()
            .map(|s| Span::styled(s.content.into_owned(), s.style))
            .collect::<Vec<_>>()
            .into();
    }

    let budget = max_width.saturating_sub(1); // room for the ellipsis
    let mut used = 0usize;
    let mut spans: Vec<Span<'static>> = Vec::new();
    for span in line.spans {
        if used >= budget {
            break;
        }
        let mut kept = String::new();
        for ch in span.content.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > budget {
                break;
            }
            kept.push(ch);
            used += w;
        }
        let truncated = kept.width() < span.content.width();
        if !kept.is_empty() {
            spans.push(Span::styled(kept, span.style));
        }
        if truncated {
            break;
        }
    }
    spans.push(Span::raw("\u{2026}"));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crouton_core::manager::{ManagerOptions, Message};
    use crouton_core::testing::TestManager;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_string(stack: &ToastStack<'_>, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| stack.render(frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer().clone();
        let mut output = String::new();
        for y in 0..height {
            for x in 0..width {
                output.push_str(buf[(x, y)].symbol());
            }
            output.push('\n');
        }
        output
    }

    #[test]
    fn renders_icon_title_and_message() {
        let mut harness = TestManager::new();
        harness.show(
            crouton_core::ToastRequest::new("Saved!")
                .kind(ToastKind::Success)
                .title("Done"),
        );
        let stack = ToastStack::new(harness.toasts().toasts());
        let output = render_string(&stack, 40, 3);
        assert!(output.contains("✓ Done Saved!"), "output: {output:?}");
    }

    #[test]
    fn renders_in_insertion_order_oldest_first() {
        let mut harness = TestManager::new();
        harness.show("first");
        harness.show("second");
        let stack = ToastStack::new(harness.toasts().toasts());
        let output = render_string(&stack, 20, 2);
        let first_row = output.lines().next().unwrap();
        let second_row = output.lines().nth(1).unwrap();
        assert!(first_row.contains("first"));
        assert!(second_row.contains("second"));
    }

    #[test]
    fn overflowing_rows_drop_the_oldest() {
        let mut harness = TestManager::new();
        harness.show("old");
        harness.show("mid");
        harness.show("new");
        let stack = ToastStack::new(harness.toasts().toasts());
        let output = render_string(&stack, 20, 2);
        assert!(!output.contains("old"));
        assert!(output.contains("mid"));
        assert!(output.contains("new"));
    }

    #[test]
    fn long_messages_are_truncated_with_ellipsis() {
        let mut harness = TestManager::new();
        harness.show("a very long message that cannot possibly fit");
        let stack = ToastStack::new(harness.toasts().toasts());
        let output = render_string(&stack, 12, 1);
        assert!(output.contains('…'), "output: {output:?}");
    }

    #[test]
    fn zero_area_renders_nothing() {
        let harness = TestManager::new();
        let stack = ToastStack::new(harness.toasts().toasts());
        // must not panic on an empty area
        let backend = TestBackend::new(1, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| stack.render(frame, Rect::new(0, 0, 0, 0)))
            .unwrap();
    }

    #[test]
    fn exiting_toasts_still_render() {
        let mut harness = TestManager::with_options(ManagerOptions::default());
        let id = harness.show("going");
        harness.send(Message::Dismiss(id));
        let stack = ToastStack::new(harness.toasts().toasts());
        let output = render_string(&stack, 20, 1);
        assert!(output.contains("going"));
    }
}
