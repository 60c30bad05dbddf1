//! Drawing of the slide deck, the detail view and the error screen.
//!
//! Everything here is a pure function of [`ViewState`] and [`ColorTheme`], so it can be
//! exercised against ratatui's `TestBackend`.

use crate::catalog::Site;
use crate::navigation::Slide;
use crate::render::ui::layout::ScreenLayout;
use crate::render::ui::state::{CatalogView, Fallback, Screen, ViewState};
use crate::render::ui::theme::ColorTheme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const CONTACT_EMAIL: &str = "contact@nexai.io";
pub const GITHUB_URL: &str = "https://github.com";
pub const TWITTER_URL: &str = "https://twitter.com";

/// Draw one full frame.
pub fn draw(frame: &mut Frame, view: &ViewState, theme: &ColorTheme) {
    let area = frame.size();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    // The error screen replaces the whole UI, indicators included.
    if let Screen::Fallback(fallback) = &view.screen {
        draw_fallback(frame, area, fallback, theme);
        return;
    }

    let layout = ScreenLayout::new(area);
    match &view.screen {
        Screen::Slides => match view.slide {
            Slide::Hero => draw_hero(frame, layout.content, theme),
            Slide::Catalogue => draw_catalogue(frame, layout.content, &view.catalog, theme),
            Slide::Ode => draw_ode(frame, layout.content, theme),
            Slide::Contact => draw_contact(frame, layout.content, theme),
        },
        Screen::Detail(site) => draw_detail(frame, layout.content, site, theme),
        Screen::Fallback(_) => {}
    }

    draw_indicators(frame, &layout, view, theme);
    draw_status(frame, layout.status, view, theme);
}

/// Rows of `area` holding `height` lines, centered vertically.
fn centered_rows(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        x: area.x,
        y: area.y + (area.height - height) / 2,
        width: area.width,
        height,
    }
}

fn draw_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    let rows = centered_rows(area, lines.len() as u16);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, rows);
}

fn draw_hero(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let lines = vec![
        Line::styled("N E X A I", theme.title),
        Line::raw(""),
        Line::styled("COLLECTION DE SITES IRRÉGULIÈRE", theme.accent),
        Line::raw(""),
        Line::styled("Une expérience de navigation corrompue", theme.muted),
        Line::raw(""),
        Line::styled("→ défiler, flèches ou 1-4", theme.disabled),
    ];
    draw_centered(frame, area, lines);
}

fn draw_ode(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let lines = vec![
        Line::styled("ODE AU BEAU", theme.title),
        Line::raw(""),
        Line::styled("Le beau réside dans l'imperfection.", theme.text),
        Line::raw(""),
        Line::styled(
            "Chaque site de cette collection porte les stigmates de sa création. \
             Les glitchs ne sont pas des bugs, mais des signatures.",
            theme.text,
        ),
        Line::raw(""),
        Line::styled(
            "L'esthétique de la corruption nous rappelle que la perfection est morte. \
             La beauté vit dans les franges, les erreurs, les accidents numériques.",
            theme.accent,
        ),
        Line::raw(""),
        Line::styled(
            "NEXAI célèbre les sites irréguliers, les designs cassés, \
             les interfaces qui refusent de se conformer.",
            theme.muted,
        ),
        Line::raw(""),
        Line::styled(
            "\"Dans le chaos, on trouve la beauté. Dans la corruption, on trouve l'âme.\"",
            theme.muted,
        ),
    ];
    // Long lines wrap; leave room for them.
    let rows = centered_rows(area, (lines.len() as u16).saturating_add(6));
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inset(rows, 4));
}

fn draw_contact(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let lines = vec![
        Line::styled("CONTACT", theme.error),
        Line::raw(""),
        Line::styled("Rejoignez la corruption", theme.muted),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[EMAIL CORROMPU] ", theme.text),
            Span::styled(CONTACT_EMAIL, theme.accent),
        ]),
        Line::styled(format!("GitHub → {}", GITHUB_URL), theme.accent),
        Line::styled(format!("Twitter → {}", TWITTER_URL), theme.accent),
        Line::raw(""),
        Line::styled("NEXAI", theme.title),
        Line::styled("COLLECTION DE SITES CORROMPUES", theme.accent),
        Line::styled("© 2026 [VERSION CORROMPUE]", theme.disabled),
        Line::raw(""),
        Line::styled("[Home] RETOUR AU DÉBUT", theme.text),
    ];
    draw_centered(frame, area, lines);
}

fn draw_catalogue(frame: &mut Frame, area: Rect, catalog: &CatalogView, theme: &ColorTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let header = vec![
        Line::styled("CATALOGUE", theme.title),
        Line::styled("[Collection de sites corrompus]", theme.accent),
    ];
    frame.render_widget(
        Paragraph::new(header).alignment(Alignment::Center),
        chunks[0],
    );

    if catalog.sites.is_empty() {
        draw_centered(
            frame,
            chunks[1],
            vec![Line::styled("Aucun site dans la collection", theme.muted)],
        );
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(inset(chunks[1], 1));

        for (idx, site) in catalog.sites.iter().enumerate().take(columns.len()) {
            let focused = catalog.focused == Some(idx);
            draw_card(frame, columns[idx], site, focused, theme);
        }
    }

    let pager = Line::from(vec![
        Span::styled("← PREV [p]", hint_style(catalog.has_prev, theme)),
        Span::raw("   "),
        Span::styled(
            format!("{} / {}", catalog.current_page, catalog.total_pages),
            theme.muted,
        ),
        Span::raw("   "),
        Span::styled("[n] NEXT →", hint_style(catalog.has_next, theme)),
    ]);
    frame.render_widget(
        Paragraph::new(pager).alignment(Alignment::Center),
        chunks[2],
    );
}

fn hint_style(enabled: bool, theme: &ColorTheme) -> Style {
    if enabled {
        theme.text
    } else {
        theme.disabled
    }
}

fn tag_line<'a>(site: &'a Site, theme: &ColorTheme) -> Line<'a> {
    let tags = site
        .tags
        .iter()
        .map(|tag| format!("#{}", tag.to_uppercase()))
        .collect::<Vec<_>>()
        .join(" ");
    Line::styled(tags, theme.muted)
}

fn draw_card(frame: &mut Frame, area: Rect, site: &Site, focused: bool, theme: &ColorTheme) {
    let border = if focused {
        theme.focused_border
    } else {
        theme.accent
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(
            format!(" {} ", site.category.as_str().to_uppercase()),
            theme.accent,
        ))
        .title_alignment(Alignment::Right);

    let lines = vec![
        Line::styled(site.name.to_uppercase(), theme.title),
        Line::raw(""),
        Line::styled(site.description.as_str(), theme.text),
        Line::raw(""),
        tag_line(site, theme),
        Line::raw(""),
        Line::styled(format!("Explorer → {}", site.url), theme.accent),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_detail(frame: &mut Frame, area: Rect, site: &Site, theme: &ColorTheme) {
    let lines = vec![
        Line::styled("← Retour [Esc]", theme.accent),
        Line::raw(""),
        Line::styled(
            format!("[{}]", site.category.as_str().to_uppercase()),
            theme.accent,
        ),
        Line::styled(site.name.to_uppercase(), theme.title),
        Line::raw(""),
        Line::styled(site.description.as_str(), theme.text),
        Line::raw(""),
        Line::styled("CARACTÉRISTIQUES", theme.title),
        Line::from(vec![
            Span::styled("Catégorie  ", theme.accent),
            Span::styled(site.category.as_str(), theme.text),
        ]),
        Line::styled("Tags", theme.accent),
        tag_line(site, theme),
        Line::raw(""),
        Line::styled(format!("Visiter le site → {}", site.url), theme.accent),
        Line::raw(""),
        Line::styled("Fourni par NEXAI Collection Corrompue", theme.disabled),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        inset(area, 2),
    );
}

fn draw_fallback(frame: &mut Frame, area: Rect, fallback: &Fallback, theme: &ColorTheme) {
    let lines = vec![
        Line::styled("SYSTEM CORRUPTION DETECTED", theme.error),
        Line::raw(""),
        Line::styled(format!("[{}]", fallback.code), theme.accent),
        Line::styled(fallback.message.as_str(), theme.text),
        Line::raw(""),
        Line::styled("[r] REBOOT SYSTEM", theme.title),
        Line::styled("[q] quitter", theme.muted),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.error);
    let rows = centered_rows(area, lines.len() as u16 + 4);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inset(rows, 4),
    );
}

fn draw_indicators(frame: &mut Frame, layout: &ScreenLayout, view: &ViewState, theme: &ColorTheme) {
    for (index, cell) in layout
        .indicator_cells(view.total_slides)
        .into_iter()
        .enumerate()
    {
        let (symbol, style) = if index == view.slide.index() {
            ("[■]", theme.indicator_active)
        } else {
            ("[ ]", theme.indicator_inactive)
        };
        frame.render_widget(Paragraph::new(Span::styled(symbol, style)), cell);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, view: &ViewState, theme: &ColorTheme) {
    let mut text = view.format_status_line();
    if !view.is_slides() {
        text = format!("{} | détail", text);
    }
    frame.render_widget(Paragraph::new(text).style(theme.status), area);
}

/// Shrink `area` horizontally by `margin` on both sides.
fn inset(area: Rect, margin: u16) -> Rect {
    let margin = margin.min(area.width / 2);
    Rect {
        x: area.x + margin,
        y: area.y,
        width: area.width - 2 * margin,
        height: area.height,
    }
}
