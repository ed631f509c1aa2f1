// ============================================================================
// Screen - Rendu de l'écran de conversion
// ============================================================================
// Dessine, dans l'ordre :
// 1. le titre (clic = bascule du thème)
// 2. le champ de saisie bordé (bordure = focus, placeholder "USD")
// 3. si un taux est chargé : le montant converti, le taux et sa date
//
// Tout est recalculé à chaque frame depuis App : montant, couleurs, zones.
//
// CONCEPTS RATATUI :
// 1. Block : bordures et fond
// 2. Paragraph + Line + Span : texte stylé
// 3. Modifier::DIM : texte atténué (lignes d'information)
// ============================================================================

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::ExchangeRate;
use crate::ui::layout::{ScreenLayout, TITLE};
use crate::ui::theme::Palette;

/// Placeholder du champ de saisie vide
pub const PLACEHOLDER: &str = "USD";

/// Dessine l'écran complet
pub fn render(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.size());
    let palette = Palette::new(app.view_mode(), app.is_focused());

    // Fond de l'écran
    let background = Block::default().style(Style::default().bg(palette.background));
    frame.render_widget(background, layout.area);

    render_title(frame, &palette, layout.title);
    render_input(frame, app, &palette, layout.input);

    // Pas de taux (fetch en cours, échoué ou sans USD) : pas de bloc résultat
    if let (Some(rate), Some(amount)) = (app.rate(), app.formatted_amount()) {
        render_output(frame, rate, &amount, &palette, layout.output);
    }
}

fn render_title(frame: &mut Frame, palette: &Palette, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(palette.title)
            .bg(palette.background)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Champ de saisie : texte saisi, ou placeholder si vide
fn render_input(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.background));

    let mut spans = if app.text().is_empty() {
        vec![Span::styled(
            PLACEHOLDER,
            Style::default().fg(palette.placeholder).add_modifier(Modifier::DIM),
        )]
    } else {
        vec![Span::styled(
            app.text(),
            Style::default().fg(palette.input).add_modifier(Modifier::BOLD),
        )]
    };

    if app.is_focused() {
        // Curseur de saisie, placé avant le placeholder s'il est affiché
        let cursor = Span::styled(
            "█",
            Style::default().fg(palette.input).add_modifier(Modifier::SLOW_BLINK),
        );
        if app.text().is_empty() {
            spans.insert(0, cursor);
        } else {
            spans.push(cursor);
        }
    }

    let input = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(input, area);
}

/// Bloc résultat : montant converti, taux du jour, date de publication
fn render_output(frame: &mut Frame, rate: &ExchangeRate, amount: &str, palette: &Palette, area: Rect) {
    let info_style = Style::default()
        .fg(palette.info)
        .bg(palette.background)
        .add_modifier(Modifier::DIM);

    let lines = vec![
        Line::from(Span::styled(
            amount.to_string(),
            Style::default()
                .fg(palette.output)
                .bg(palette.background)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(rate.rate_label(), info_style)),
        Line::from(Span::styled(rate.date_label(), info_style)),
    ];

    let output = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(output, area);
}

// ============================================================================
// Tests
// ============================================================================
// CONCEPT RATATUI : TestBackend
// - Terminal en mémoire : on dessine puis on lit le Buffer cellule par cellule
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FetchOutcome;
    use crate::ui::theme::{BLUR_BORDER, DARK, FOCUS_BORDER, LIGHT};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw(app: &App) -> Buffer {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer.get(x, y).symbol().to_string())
            .collect::<String>()
    }

    fn screen_text(buffer: &Buffer) -> String {
        (0..buffer.area.height)
            .map(|y| row_text(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app_with_rate(text: &str) -> App {
        let mut app = App::new();
        app.mount();
        app.apply_fetch(FetchOutcome::Loaded(vec![ExchangeRate::new(
            "USD",
            "01.01.2024",
            36.5,
        )]));
        app.set_text(text);
        app
    }

    #[test]
    fn test_render_output_block() {
        let buffer = draw(&app_with_rate("100"));
        let screen = screen_text(&buffer);

        assert!(screen.contains("Currency Transducer"));
        assert!(screen.contains("100"));
        assert!(screen.contains("3\u{a0}650,00\u{a0}₴"));
        assert!(screen.contains("USD: 36.50 $"));
        assert!(screen.contains("Currency rate at 01.01.2024 by NBU"));
    }

    #[test]
    fn test_render_without_rate_has_no_output_block() {
        let mut app = App::new();
        app.mount();
        app.set_text("100");

        let screen = screen_text(&draw(&app));

        assert!(screen.contains("Currency Transducer"));
        assert!(!screen.contains('₴'));
        assert!(!screen.contains("by NBU"));
    }

    #[test]
    fn test_render_placeholder_when_empty() {
        let mut app = App::new();
        app.mount();

        let buffer = draw(&app);
        let layout = ScreenLayout::new(buffer.area);
        let input_row = row_text(&buffer, layout.input.y + 1);

        assert!(input_row.contains(PLACEHOLDER));
    }

    #[test]
    fn test_render_theme_and_focus_colors() {
        let mut app = App::new();
        app.mount();

        let buffer = draw(&app);
        let layout = ScreenLayout::new(buffer.area);
        assert_eq!(buffer.get(0, 0).bg, LIGHT);
        assert_eq!(buffer.get(layout.input.x, layout.input.y).fg, BLUR_BORDER);

        app.toggle_theme();
        app.focus();

        let buffer = draw(&app);
        assert_eq!(buffer.get(0, 0).bg, DARK);
        assert_eq!(buffer.get(layout.input.x, layout.input.y).fg, FOCUS_BORDER);
        assert_eq!(buffer.get(layout.title.x, layout.title.y).fg, LIGHT);
    }

    #[test]
    fn test_render_empty_text_shows_zero_amount() {
        let screen = screen_text(&draw(&app_with_rate("")));
        assert!(screen.contains("0,00\u{a0}₴"));
    }
}
