//! Headless application driver: command line, event replay and output.

use crate::config::AppConfig;
use crate::error::{AppError, AppResult, read_file};
use crate::session::Session;
use crate::variants::Variant;
use clap::Parser;
use kurbo::Size;
use painter_core::{DrawCommand, InputEvent};
use painter_render::{RasterRenderer, RenderContext, Renderer};
use peniko::Color;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Command line arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "painter", version, about = "Interactive 2D shape editors, driven by event scripts")]
pub struct Cli {
    /// Editor to run.
    #[arg(value_enum)]
    pub variant: Variant,

    /// JSON config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON array of input events to replay.
    #[arg(long)]
    pub events: Option<PathBuf>,

    /// Write the final frame as PNG.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Load an event script.
pub fn load_events(path: &Path) -> AppResult<VecDeque<InputEvent>> {
    let text = read_file(path)?;
    let events: Vec<InputEvent> = serde_json::from_str(&text).map_err(|source| AppError::Events {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events.into())
}

/// Count draw commands by primitive, for the frame summary.
fn summarize(commands: &[DrawCommand]) -> String {
    let mut counts = [0usize; 5];
    for command in commands {
        let slot = match command {
            DrawCommand::FillPolygon { .. } => 0,
            DrawCommand::StrokePolygon { .. } => 1,
            DrawCommand::Line { .. } => 2,
            DrawCommand::FillCircle { .. } => 3,
            DrawCommand::Image { .. } => 4,
        };
        counts[slot] += 1;
    }
    format!(
        "{} commands ({} fills, {} outlines, {} lines, {} markers, {} images)",
        commands.len(),
        counts[0],
        counts[1],
        counts[2],
        counts[3],
        counts[4]
    )
}

/// Main application struct.
pub struct App {
    session: Session,
    renderer: RasterRenderer,
}

impl App {
    /// Create an application for a variant.
    pub fn new(variant: Variant, config: AppConfig) -> Self {
        Self {
            session: Session::new(variant, config),
            renderer: RasterRenderer::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Replay `events` as one frame and return its draw commands.
    pub fn replay(&mut self, mut events: VecDeque<InputEvent>) -> Vec<DrawCommand> {
        let mut commands = Vec::new();
        let handled = self.session.frame(&mut events, &mut commands);
        log::info!("Frame: {} events, {}", handled, summarize(&commands));
        commands
    }

    /// Rasterize `commands` and write them to `path`.
    pub fn write_png(&mut self, commands: &[DrawCommand], path: &Path) -> AppResult<()> {
        let config = self.session.config();
        let ctx = RenderContext::new(Size::new(config.width as f64, config.height as f64))
            .with_background(Color::from(config.background_color));
        self.renderer.render(&ctx, commands)?;
        self.renderer.save_png(path)?;
        Ok(())
    }

    /// Run the command line.
    pub fn run(cli: Cli) -> AppResult<()> {
        let config = match &cli.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        let events = match &cli.events {
            Some(path) => load_events(path)?,
            None => VecDeque::new(),
        };

        let mut app = App::new(cli.variant, config);
        let commands = app.replay(events);

        println!("== {} ({}) ==", app.session.config().title, cli.variant.name());
        for line in app.session.menu_lines() {
            println!("{line}");
        }
        println!("{}", app.session.status_line());

        if let Some(path) = &cli.out {
            app.write_png(&commands, path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        let cli = Cli::parse_from(["painter", "arrow", "--events", "script.json", "--out", "frame.png"]);
        assert_eq!(cli.variant, Variant::ArrowEditor);
        assert_eq!(cli.events, Some(PathBuf::from("script.json")));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_rejects_unknown_variant() {
        assert!(Cli::try_parse_from(["painter", "spline"]).is_err());
    }

    #[test]
    fn test_load_events() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"[{"type": "key_down", "key": "n"}, {"type": "pointer_down", "position": {"x": 5, "y": 6}}]"#,
        )
        .unwrap();
        let events = load_events(&path).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], InputEvent::click(5.0, 6.0));

        std::fs::write(&path, r#"[{"type": "scroll"}]"#).unwrap();
        assert!(matches!(load_events(&path).unwrap_err(), AppError::Events { .. }));
    }

    #[test]
    fn test_replay_and_write_png() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            width: 300,
            height: 200,
            ..AppConfig::default()
        };
        let mut app = App::new(Variant::Stamp, config);
        let commands = app.replay([InputEvent::click(150.0, 100.0)].into_iter().collect());
        assert_eq!(app.session().canvas().len(), 3);

        let path = dir.path().join("stamp.png");
        app.write_png(&commands, &path).unwrap();
        let frame = image::open(&path).unwrap().to_rgba8();
        assert_eq!(frame.dimensions(), (300, 200));
        // inner blue square over the white circle
        assert_eq!(frame.get_pixel(150, 100).0, [0, 0, 255, 255]);
        // white ring between the squares
        assert_eq!(frame.get_pixel(150, 40).0, [255, 255, 255, 255]);
        // outer blue corner outside the circle
        assert_eq!(frame.get_pixel(80, 30).0, [0, 0, 255, 255]);
        // background
        assert_eq!(frame.get_pixel(5, 5).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_demo_scripts_replay() {
        let pattern: VecDeque<InputEvent> =
            serde_json::from_str(include_str!("../../../demos/pattern.json")).unwrap();
        let mut app = App::new(Variant::PatternEditor, AppConfig::default());
        app.replay(pattern);
        let canvas = app.session().canvas();
        assert_eq!(canvas.len(), 4);
        assert!(canvas.shapes()[0].pattern().is_some());
        assert!(canvas.shapes()[1].is_filled());
        assert!(canvas.selected().unwrap().pattern().is_some());

        let arrow: VecDeque<InputEvent> =
            serde_json::from_str(include_str!("../../../demos/arrow.json")).unwrap();
        let mut app = App::new(Variant::ArrowEditor, AppConfig::default());
        app.replay(arrow);
        assert_eq!(app.session().canvas().len(), 2);
        assert_eq!(app.session().canvas().selected().unwrap().rotation(), 280.0);
    }

    #[test]
    fn test_summary() {
        let commands = vec![DrawCommand::FillCircle {
            center: kurbo::Point::ZERO,
            radius: 1.0,
            color: Color::BLACK,
        }];
        assert_eq!(summarize(&commands), "1 commands (0 fills, 0 outlines, 0 lines, 1 markers, 0 images)");
    }
}
