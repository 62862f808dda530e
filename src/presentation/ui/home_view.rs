//! Home tab: expandable rule and facility sections.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::layout::LayoutMetrics;
use super::utils::wrap_text;
use crate::application::services::SectionToggles;
use crate::domain::entities::{ContentBlock, ContentSection, ListItem};
use crate::domain::keybinding::Action;
use crate::presentation::theme::Theme;

const BODY_INDENT: usize = 3;

/// Selection, expansion and scroll state of the home tab.
#[derive(Debug, Default)]
pub struct HomeViewState {
    toggles: SectionToggles,
    selected: usize,
    scroll: u16,
}

impl HomeViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub const fn toggles(&self) -> &SectionToggles {
        &self.toggles
    }

    /// Applies a list action; returns whether it was used.
    pub fn handle_action(&mut self, action: Action, sections: &[ContentSection]) -> bool {
        let Some(last) = sections.len().checked_sub(1) else {
            return false;
        };

        match action {
            Action::NavigateUp => self.selected = self.selected.saturating_sub(1),
            Action::NavigateDown => self.selected = (self.selected + 1).min(last),
            Action::SelectFirst => self.selected = 0,
            Action::SelectLast => self.selected = last,
            Action::Select => {
                if let Some(section) = sections.get(self.selected) {
                    self.toggles.toggle(section.id);
                }
            }
            _ => return false,
        }
        true
    }
}

pub struct HomeView<'a> {
    sections: &'a [ContentSection],
    theme: &'a Theme,
    metrics: LayoutMetrics,
}

impl<'a> HomeView<'a> {
    #[must_use]
    pub const fn new(
        sections: &'a [ContentSection],
        theme: &'a Theme,
        metrics: LayoutMetrics,
    ) -> Self {
        Self {
            sections,
            theme,
            metrics,
        }
    }

    fn header_line(
        &self,
        section: &ContentSection,
        expanded: bool,
        selected: bool,
        width: usize,
    ) -> Line<'static> {
        let marker = if expanded { "▾" } else { "▸" };
        let text = format!(" {marker} {}", section.title);
        let padded = format!("{text:<width$}", width = width.max(text.width()));
        let style = if selected {
            self.theme.selection_style.add_modifier(Modifier::BOLD)
        } else {
            self.theme.title_style
        };
        Line::from(Span::styled(padded, style))
    }

    fn body_lines(&self, blocks: &[ContentBlock], width: usize) -> Vec<Line<'static>> {
        let indent = " ".repeat(BODY_INDENT);
        let inner = width.saturating_sub(BODY_INDENT);
        let mut lines = Vec::new();

        for block in blocks {
            match block {
                ContentBlock::Heading(text) => lines.push(Line::from(Span::styled(
                    format!("{indent}{text}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ))),
                ContentBlock::Numbered(items) => {
                    for (n, item) in items.iter().enumerate() {
                        push_list_item(&mut lines, &indent, &format!("{}. ", n + 1), item, inner);
                    }
                }
                ContentBlock::Bullets(items) => {
                    for item in *items {
                        push_hanging(&mut lines, &indent, "• ", item, inner, Style::default());
                    }
                }
                ContentBlock::Image { asset, caption } => lines.push(Line::from(Span::styled(
                    format!("{indent}[ image: {caption} ({asset}) ]"),
                    self.theme.dimmed_style.add_modifier(Modifier::ITALIC),
                ))),
            }
        }
        lines
    }
}

fn push_hanging(
    lines: &mut Vec<Line<'static>>,
    indent: &str,
    prefix: &str,
    text: &str,
    width: usize,
    style: Style,
) {
    let hang = " ".repeat(prefix.width());
    for (i, row) in wrap_text(text, width.saturating_sub(prefix.width()))
        .into_iter()
        .enumerate()
    {
        let lead = if i == 0 { prefix } else { hang.as_str() };
        lines.push(Line::from(Span::styled(format!("{indent}{lead}{row}"), style)));
    }
}

fn push_list_item(
    lines: &mut Vec<Line<'static>>,
    indent: &str,
    prefix: &str,
    item: &ListItem,
    width: usize,
) {
    push_hanging(lines, indent, prefix, item.text, width, Style::default());
    let child_indent = format!("{indent}{}", " ".repeat(prefix.width()));
    for child in item.children {
        push_hanging(
            lines,
            &child_indent,
            "",
            child,
            width.saturating_sub(prefix.width()),
            Style::default(),
        );
    }
}

impl StatefulWidget for HomeView<'_> {
    type State = HomeViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::TOP)
            .title(Span::styled(" Informasi Peminjaman ", self.theme.title_style))
            .border_style(self.theme.dimmed_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let padded = Rect {
            x: inner.x.saturating_add(self.metrics.padding_x),
            width: inner.width.saturating_sub(self.metrics.padding_x * 2),
            ..inner
        };
        let width = usize::from(padded.width);

        let mut lines = Vec::new();
        let mut selected_line = 0;
        for (i, section) in self.sections.iter().enumerate() {
            let expanded = state.toggles.is_expanded(section.id);
            if i == state.selected {
                selected_line = lines.len();
            }
            lines.push(self.header_line(section, expanded, i == state.selected, width));
            if expanded {
                lines.extend(self.body_lines(section.blocks, width));
            }
            for _ in 0..self.metrics.gap {
                lines.push(Line::default());
            }
        }

        let selected_line = u16::try_from(selected_line).unwrap_or(u16::MAX);
        if selected_line < state.scroll {
            state.scroll = selected_line;
        } else if padded.height > 0 && selected_line >= state.scroll + padded.height {
            state.scroll = selected_line - padded.height + 1;
        }

        Paragraph::new(lines)
            .scroll((state.scroll, 0))
            .render(padded, buf);
    }
}
