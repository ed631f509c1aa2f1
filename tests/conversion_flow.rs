// ============================================================================
// Tests d'intégration : parcours complet de l'écran
// ============================================================================
// Montage -> résultat du fetch -> saisie au clavier / clics -> rendu
// ============================================================================

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

use currency_transducer::api::select_usd;
use currency_transducer::app::{App, FetchOutcome};
use currency_transducer::format::{format_uah, to_number};
use currency_transducer::handler::handle_event;
use currency_transducer::models::{ExchangeRate, ViewMode};
use currency_transducer::ui::{render, Event, Palette, ScreenLayout};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

fn layout() -> ScreenLayout {
    ScreenLayout::new(Rect::new(0, 0, WIDTH, HEIGHT))
}

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty()))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| render(frame, app)).unwrap();
    let buffer: &Buffer = terminal.backend().buffer();

    (0..HEIGHT)
        .map(|y| {
            (0..WIDTH)
                .map(|x| buffer.get(x, y).symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Écran monté, taux NBU reçu, champ de saisie actif
fn mounted_with_nbu_response(json: &str) -> App {
    let records: Vec<ExchangeRate> = serde_json::from_str(json).unwrap();

    let mut app = App::new();
    app.mount();
    app.apply_fetch(FetchOutcome::Loaded(select_usd(records)));

    let layout = layout();
    handle_event(&mut app, click(layout.input.x + 1, layout.input.y + 1), &layout);
    app
}

const NBU_RESPONSE: &str = r#"[
    {"r030":36,"txt":"Австралійський долар","rate":24.1,"cc":"AUD","exchangedate":"01.01.2024"},
    {"r030":840,"txt":"Долар США","rate":36.5,"cc":"USD","exchangedate":"01.01.2024"},
    {"r030":978,"txt":"Євро","rate":40.2,"cc":"EUR","exchangedate":"01.01.2024"}
]"#;

#[test]
fn typing_100_shows_converted_amount_and_rate_info() {
    let mut app = mounted_with_nbu_response(NBU_RESPONSE);
    let layout = layout();

    for c in "100".chars() {
        handle_event(&mut app, key(c), &layout);
    }

    let screen = screen_text(&app);
    assert!(screen.contains(&format_uah(3650.0)));
    assert!(screen.contains("3\u{a0}650,00\u{a0}₴"));
    assert!(screen.contains("USD: 36.50 $"));
    assert!(screen.contains("Currency rate at 01.01.2024 by NBU"));
}

#[test]
fn displayed_amount_matches_rate_times_input() {
    let layout = layout();

    for text in ["1", "25", "0.5", "99999", "12.34", "-7"] {
        let mut app = mounted_with_nbu_response(NBU_RESPONSE);
        for c in text.chars() {
            handle_event(&mut app, key(c), &layout);
        }

        let expected = format_uah(36.5 * to_number(text));
        assert_eq!(app.formatted_amount(), Some(expected.clone()), "input {text}");
        assert!(screen_text(&app).contains(&expected), "input {text}");
    }
}

#[test]
fn typed_cents_round_like_the_locale_formatter() {
    let layout = layout();

    for (text, expected) in [("0.01", "0,37\u{a0}₴"), ("0.03", "1,10\u{a0}₴")] {
        let mut app = mounted_with_nbu_response(NBU_RESPONSE);
        for c in text.chars() {
            handle_event(&mut app, key(c), &layout);
        }

        assert_eq!(app.formatted_amount().as_deref(), Some(expected), "input {text}");
        assert!(screen_text(&app).contains(expected), "input {text}");
    }
}

#[test]
fn response_without_usd_renders_no_output_block() {
    let mut app = mounted_with_nbu_response(
        r#"[{"r030":978,"txt":"Євро","rate":40.2,"cc":"EUR","exchangedate":"01.01.2024"}]"#,
    );
    let layout = layout();
    handle_event(&mut app, key('5'), &layout);

    let screen = screen_text(&app);
    assert!(app.rates().is_empty());
    assert!(!screen.contains('₴'));
    assert!(!screen.contains("by NBU"));
}

#[test]
fn failed_fetch_renders_no_output_block() {
    let mut app = App::new();
    app.mount();
    app.apply_fetch(FetchOutcome::Failed("connection refused".to_string()));

    assert!(!screen_text(&app).contains('₴'));
}

#[test]
fn empty_and_odd_input_never_panic() {
    let mut app = mounted_with_nbu_response(NBU_RESPONSE);
    let layout = layout();

    assert_eq!(app.converted_amount(), Some(0.0));
    assert!(screen_text(&app).contains("0,00\u{a0}₴"));

    for c in "1,5".chars() {
        handle_event(&mut app, key(c), &layout);
    }
    assert!(app.converted_amount().unwrap().is_nan());
    assert!(screen_text(&app).contains("NaN\u{a0}₴"));

    app.set_text("--");
    assert!(screen_text(&app).contains("NaN\u{a0}₴"));
}

#[test]
fn sixth_character_never_reaches_state() {
    let mut app = mounted_with_nbu_response(NBU_RESPONSE);
    let layout = layout();

    for c in "1234567".chars() {
        handle_event(&mut app, key(c), &layout);
    }

    assert_eq!(app.text(), "12345");
    assert_eq!(app.converted_amount(), Some(36.5 * 12345.0));
}

#[test]
fn title_click_toggles_theme_exactly_once_per_click() {
    let mut app = mounted_with_nbu_response(NBU_RESPONSE);
    let layout = layout();
    let title_click = click(layout.title.x + 1, layout.title.y);

    let before = Palette::new(app.view_mode(), app.is_focused());

    handle_event(&mut app, title_click.clone(), &layout);
    assert_eq!(app.view_mode(), ViewMode::Dark);

    handle_event(&mut app, title_click, &layout);
    assert_eq!(app.view_mode(), ViewMode::Light);

    // Le clic sur le titre a aussi fermé le clavier : même focus pour comparer
    let after = Palette::new(app.view_mode(), false);
    assert_eq!(Palette::new(ViewMode::Light, false), after);
    assert_eq!(before.background, after.background);
    assert_eq!(before.title, after.title);
}

#[test]
fn unmount_clears_rate_and_ignores_late_fetch() {
    let mut app = mounted_with_nbu_response(NBU_RESPONSE);
    assert!(app.rate().is_some());

    app.unmount();
    app.apply_fetch(FetchOutcome::Loaded(vec![ExchangeRate::new("USD", "02.01.2024", 37.0)]));

    assert!(app.rate().is_none());
}
