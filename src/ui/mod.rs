pub mod idea;
pub mod utils;

use crate::app::App;
use crate::ui::utils::hex_to_rgb;
use ratatui::{
    style::Style,
    widgets::Block,
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let bg_color = hex_to_rgb(&app.theme.bg);
    f.render_widget(
        Block::default().style(Style::default().bg(bg_color)),
        f.area(),
    );

    idea::draw(f, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{ClipboardError, ClipboardWriter};
    use crate::config::Theme;
    use crate::generator::IdeaGenerator;
    use crate::models::IdeaSeeds;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, Terminal};

    struct NoClipboard;

    impl ClipboardWriter for NoClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("test".to_string()))
        }
    }

    fn app() -> App {
        let generator = IdeaGenerator::new(IdeaSeeds::embedded().unwrap());
        App::new(generator, StdRng::seed_from_u64(5), Box::new(NoClipboard), Theme::default())
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shows_the_current_idea() {
        let app = app();
        let out = screen(&app);
        assert!(out.contains("Studio Pulse"));
        assert!(out.contains(&app.current().title));
        assert!(out.contains(&app.current().mood));
        assert!(out.contains(&app.current().palette[0]));
        assert!(out.contains("Copy prompt"));
        assert!(!out.contains("RECENT PROMPTS"));
    }

    #[test]
    fn shows_history_after_a_shuffle() {
        let mut app = app();
        let first = app.current().title.clone();
        app.shuffle();
        let out = screen(&app);
        assert!(out.contains("RECENT PROMPTS"));
        assert!(out.contains(&first));
    }
}
