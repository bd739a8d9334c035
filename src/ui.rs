//! Terminal UI rendering for the folio TUI.
//!
//! Two views share one frame layout: a content area and a single status line
//! at the bottom. The homepage is a sidebar plus the selected section; the
//! terminal view is a scrollback of prompts and typed-out output.
//!
//! This module renders from RenderState (immutable snapshot) - it never
//! mutates application state.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

use crate::content::{
    parse_hex_color, EDUCATION_ITEMS, EXPERIENCE_ITEMS, PROFILE, PROMPT, SKILLS, WELCOME,
};
use crate::render::{RenderState, TerminalView};
use crate::tea::{Field, Mode, Notification, NotificationLevel, Section};
use crate::terminal::{format, Route, StyleHint, VisibleEntry};
use crate::theme::Theme;

const COLOR_ACCENT: Color = Color::Rgb(0xF3, 0x03, 0x7E);

const SIDEBAR_WIDTH: u16 = 16;

/// Foreground/background tokens for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Palette {
    bg: Color,
    text: Color,
    dimmed: Color,
    muted: Color,
    prompt: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            bg: Color::White,
            text: Color::Black,
            dimmed: Color::DarkGray,
            muted: Color::Gray,
            prompt: Color::Blue,
        },
        Theme::Dark => Palette {
            bg: Color::Black,
            text: Color::White,
            dimmed: Color::Gray,
            muted: Color::DarkGray,
            prompt: Color::Green,
        },
    }
}

// -----------------------------------------------------------------------------
// Context-sensitive keymap system
// -----------------------------------------------------------------------------

/// Context for determining which keybindings to display.
/// Derived from RenderState - this is the "view model" for the statusbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapContext {
    /// Sidebar browsing; the selected section decides what Enter does.
    Browse { section: Section },
    /// Contact form input
    Form,
    /// Terminal view
    Terminal { is_executing: bool },
}

impl KeymapContext {
    pub fn from_render_state(state: &RenderState) -> Self {
        match (state.route, state.mode) {
            (Route::Terminal, _) => KeymapContext::Terminal {
                is_executing: state
                    .terminal
                    .as_ref()
                    .map(|t| t.is_executing)
                    .unwrap_or(false),
            },
            (Route::Home, Mode::Form(_)) => KeymapContext::Form,
            (Route::Home, Mode::Browse) => KeymapContext::Browse {
                section: state.section,
            },
        }
    }
}

/// A single keybinding entry for display.
struct Keybinding(&'static str, &'static str);

/// A group of related keybindings (separated by │).
struct KeybindingGroup(Vec<Keybinding>);

fn keybindings_for_context(ctx: KeymapContext) -> Vec<KeybindingGroup> {
    match ctx {
        KeymapContext::Browse { section } => {
            let enter = match section {
                Section::Terminal => vec![Keybinding("Enter", "open")],
                Section::Contact => vec![Keybinding("Enter", "write")],
                _ => vec![],
            };
            vec![
                KeybindingGroup(vec![Keybinding("j/k", "move")]),
                KeybindingGroup(enter),
                KeybindingGroup(vec![Keybinding(":", "terminal"), Keybinding("t", "theme")]),
                KeybindingGroup(vec![Keybinding("q", "quit")]),
            ]
        }
        KeymapContext::Form => vec![KeybindingGroup(vec![
            Keybinding("Enter", "send"),
            Keybinding("Tab", "next"),
            Keybinding("Esc", "cancel"),
        ])],
        KeymapContext::Terminal { is_executing } => {
            let mut groups = Vec::new();
            if !is_executing {
                groups.push(KeybindingGroup(vec![Keybinding("Enter", "run")]));
            }
            groups.push(KeybindingGroup(vec![
                Keybinding("Esc", "home"),
                Keybinding("Ctrl-C", "quit"),
            ]));
            groups
        }
    }
}

/// Main render function - entry point for all UI drawing.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    let colors = palette(state.theme);
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(colors.bg).fg(colors.text)),
        area,
    );

    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(area);

    match (state.route, state.terminal.as_ref()) {
        (Route::Terminal, Some(term)) => render_terminal(frame, term, &colors, chunks[0]),
        _ => render_home(frame, state, &colors, chunks[0]),
    }
    render_statusbar(frame, state, &colors, chunks[1]);

    if let Some(ref notification) = state.notification {
        render_notification(frame, notification, area);
    }
}

// -----------------------------------------------------------------------------
// Homepage
// -----------------------------------------------------------------------------

fn render_home(frame: &mut Frame, state: &RenderState, colors: &Palette, area: Rect) {
    let chunks = Layout::horizontal([
        Constraint::Length(SIDEBAR_WIDTH),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(area);

    let sidebar: Vec<Line> = Section::ALL
        .iter()
        .map(|section| {
            let style = if *section == state.section {
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(colors.dimmed)
            };
            Line::from(Span::styled(format!(" {} ", section.label()), style))
        })
        .collect();
    frame.render_widget(Paragraph::new(sidebar), chunks[0]);

    let lines = section_lines(state, colors);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        chunks[2],
    );
}

fn plain(lines: Vec<String>) -> Vec<Line<'static>> {
    lines.into_iter().map(Line::from).collect()
}

fn section_lines(state: &RenderState, colors: &Palette) -> Vec<Line<'static>> {
    let hint = Style::default().fg(colors.muted);
    match state.section {
        Section::Home => vec![
            Line::from(Span::styled(
                PROFILE.name,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(PROFILE.role, Style::default().fg(COLOR_ACCENT))),
            Line::default(),
            Line::from(PROFILE.summary_one),
            Line::default(),
            Line::from(Span::styled("Press ':' to open the terminal.", hint)),
        ],
        Section::About => plain(format::about()),
        Section::Experience => {
            let mut lines = format::header("Experience");
            lines.extend(format::timeline(EXPERIENCE_ITEMS));
            plain(lines)
        }
        Section::Education => {
            let mut lines = format::header("Education");
            lines.extend(format::timeline(EDUCATION_ITEMS));
            plain(lines)
        }
        Section::Skills => skill_lines(colors),
        Section::Projects => plain(format::projects()),
        Section::Contact => match state.mode {
            Mode::Form(field) => form_lines(state, field, colors),
            Mode::Browse => {
                let mut lines = plain(format::contact());
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "Press Enter to write a message.",
                    hint,
                )));
                lines
            }
        },
        Section::Terminal => vec![
            Line::from("An interactive terminal with the same content."),
            Line::from(Span::styled("Press Enter to open it, then type help.", hint)),
        ],
    }
}

/// Skill labels in their brand colors. Near-black brands fall back to the
/// text color on the dark theme.
fn skill_lines(colors: &Palette) -> Vec<Line<'static>> {
    let mut lines = format::header("Skills")
        .into_iter()
        .map(Line::from)
        .collect::<Vec<_>>();
    for chunk in SKILLS.chunks(3) {
        let mut spans = Vec::new();
        for skill in chunk {
            let color = match parse_hex_color(skill.color) {
                Some((r, g, b)) if colors.bg != Color::Black || luminance(r, g, b) > 40 => {
                    Color::Rgb(r, g, b)
                }
                _ => colors.text,
            };
            spans.push(Span::styled(
                format!(" ● {:<14}", skill.label),
                Style::default().fg(color),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn luminance(r: u8, g: u8, b: u8) -> u32 {
    (299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000
}

fn form_lines(state: &RenderState, active: Field, colors: &Palette) -> Vec<Line<'static>> {
    let mut lines = format::header("Contact")
        .into_iter()
        .map(Line::from)
        .collect::<Vec<_>>();
    for field in [Field::Name, Field::Email, Field::Message] {
        let (value, style) = if field == active {
            (
                format!("{}_", state.input_buffer),
                Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
            )
        } else {
            (
                state.form.get(field).to_string(),
                Style::default().fg(colors.dimmed),
            )
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<9}", format!("{}:", field.label())), style),
            Span::styled(value, style),
        ]));
    }
    lines
}

// -----------------------------------------------------------------------------
// Terminal view
// -----------------------------------------------------------------------------

fn terminal_lines(term: &TerminalView, colors: &Palette) -> Vec<Line<'static>> {
    let prompt_style = Style::default()
        .fg(colors.prompt)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled(WELCOME, Style::default().fg(colors.dimmed))),
        Line::default(),
    ];

    for entry in &term.entries {
        match entry {
            VisibleEntry::Input(text) => lines.push(Line::from(vec![
                Span::styled(PROMPT, prompt_style),
                Span::raw(" "),
                Span::raw(text.clone()),
            ])),
            VisibleEntry::Output { lines: out, style, .. } => {
                let style = match style {
                    Some(StyleHint::Compact) => Style::default().fg(colors.dimmed),
                    None => Style::default().fg(colors.text),
                };
                lines.extend(out.iter().map(|l| Line::from(Span::styled(l.clone(), style))));
            }
        }
    }

    if !term.is_executing {
        lines.push(Line::from(vec![
            Span::styled(PROMPT, prompt_style),
            Span::raw(" "),
            Span::raw(term.input.clone()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]));
    }
    lines
}

/// Scrollback pinned to the bottom.
fn render_terminal(frame: &mut Frame, term: &TerminalView, colors: &Palette, area: Rect) {
    let lines = terminal_lines(term, colors);
    let start = lines.len().saturating_sub(area.height as usize);
    let visible: Vec<Line> = lines.into_iter().skip(start).collect();
    frame.render_widget(Paragraph::new(visible), area);
}

// -----------------------------------------------------------------------------
// Status line
// -----------------------------------------------------------------------------

fn render_statusbar(frame: &mut Frame, state: &RenderState, colors: &Palette, area: Rect) {
    let line = match state.mode {
        Mode::Form(field) if state.route == Route::Home => render_input_line(field, colors),
        _ => render_keymap_line(state, colors, area.width),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Render keybindings legend for the bottom line.
/// When show_keymap is false: Shows just "?" (grayed out)
/// When show_keymap is true: Shows "? │ <full keymap legend>" with bright "?"
/// The current theme is right-aligned.
fn render_keymap_line(state: &RenderState, colors: &Palette, width: u16) -> Line<'static> {
    let groups = keybindings_for_context(KeymapContext::from_render_state(state));

    let key_style = Style::default().fg(colors.dimmed);
    let desc_style = Style::default().fg(colors.muted);
    let sep_style = Style::default().fg(colors.muted);

    let mut spans: Vec<Span> = Vec::new();

    let help_style = if state.show_keymap {
        Style::default().fg(colors.text)
    } else {
        Style::default().fg(colors.muted)
    };
    spans.push(Span::styled("?", help_style));

    if state.show_keymap {
        for group in groups.iter() {
            if group.0.is_empty() {
                continue;
            }
            spans.push(Span::styled(" │ ", sep_style));

            for (key_idx, keybinding) in group.0.iter().enumerate() {
                if key_idx > 0 {
                    spans.push(Span::styled(" • ", sep_style));
                }
                spans.push(Span::styled(keybinding.0, key_style));
                spans.push(Span::styled(format!(" {}", keybinding.1), desc_style));
            }
        }
    }

    let badge = format!(" {} ", state.theme);
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let spacer_width = (width as usize)
        .saturating_sub(content_width)
        .saturating_sub(badge.len());
    if spacer_width > 0 {
        spans.push(Span::raw(" ".repeat(spacer_width)));
    }
    spans.push(Span::styled(badge, Style::default().fg(colors.muted)));

    Line::from(spans)
}

/// Input hints for the contact form (replaces keymap while editing).
fn render_input_line(field: Field, colors: &Palette) -> Line<'static> {
    let hint_style = Style::default().fg(colors.muted);
    Line::from(vec![
        Span::styled("Enter ", hint_style),
        Span::styled("• ", hint_style),
        Span::styled("Tab ", hint_style),
        Span::styled("• ", hint_style),
        Span::styled("Esc ", hint_style),
        Span::styled(format!(" {}", field.label()), Style::default().fg(colors.text)),
    ])
}

/// Render notification message on the bottom line of the screen.
///
/// - Error: Red text with "Error:" prefix and bold styling
/// - Info: Green text without prefix
fn render_notification(frame: &mut Frame, notification: &Notification, area: Rect) {
    let notification_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    frame.render_widget(Clear, notification_area);

    let line = match notification.level {
        NotificationLevel::Error => Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                notification.message.clone(),
                Style::default().fg(Color::Red),
            ),
        ]),
        NotificationLevel::Info => Line::from(Span::styled(
            notification.message.clone(),
            Style::default().fg(Color::Green),
        )),
    };

    frame.render_widget(Paragraph::new(line), notification_area);
}
