use std::path::PathBuf;
use std::time::Instant;

use crossbeam_channel::Receiver;
use eframe::egui;
use log::{info, warn};

use crate::ai;
use crate::config::Config;
use crate::deck::nav::DeckState;
use crate::deck::{Deck, SlideContent};
use crate::export;
use crate::render::starfield::Starfield;
use crate::render::{self, SlideAction};
use crate::session::{DemoSession, HookReply, SessionState};
use crate::theme::Theme;
use crate::watch::DeckWatcher;

const TRANSITION_DURATION: f32 = 0.35;
const CONTROL_STRIP_HEIGHT: f32 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum TransitionDirection {
    Forward,
    Backward,
}

/// Visual slide-over between two indices; navigation state has already moved.
struct Transition {
    from: usize,
    to: usize,
    direction: TransitionDirection,
    start: Instant,
}

impl Transition {
    fn new(from: usize, to: usize, direction: TransitionDirection) -> Self {
        Self {
            from,
            to,
            direction,
            start: Instant::now(),
        }
    }

    fn progress(&self) -> f32 {
        let raw = (self.start.elapsed().as_secs_f32() / TRANSITION_DURATION).clamp(0.0, 1.0);
        ease_in_out(raw)
    }

    fn is_complete(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= TRANSITION_DURATION
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        let duration = 2.5;
        let fade_start = 2.0;
        if elapsed < fade_start {
            1.0
        } else if elapsed < duration {
            1.0 - (elapsed - fade_start) / (duration - fade_start)
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= 2.5
    }
}

/// Controls rendered each frame; resolved after drawing so button handling
/// doesn't fight the borrow of the slide being painted.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ControlAction {
    Prev,
    Next,
    Export,
}

struct DeckApp {
    deck: Deck,
    deck_path: Option<PathBuf>,
    state: DeckState,
    theme: Theme,
    session: SessionState,
    starfield: Starfield,
    transition: Option<Transition>,
    /// Advisory only: disables the export control, does not lock the bundler.
    exporting: bool,
    export_rx: Option<Receiver<Result<PathBuf, String>>>,
    toast: Option<Toast>,
    last_esc: Option<Instant>,
    watcher: Option<DeckWatcher>,
    watcher_started: bool,
    api_key: Option<String>,
    model: String,
    frame_count: u32,
    fps: f32,
    fps_update: Instant,
}

impl DeckApp {
    fn new(deck: Deck, deck_path: Option<PathBuf>, theme: Theme, config: &Config) -> Self {
        let state = DeckState::new(deck.len());
        let mut app = Self {
            deck,
            deck_path,
            state,
            theme,
            session: SessionState::default(),
            starfield: Starfield::new(),
            transition: None,
            exporting: false,
            export_rx: None,
            toast: None,
            last_esc: None,
            watcher: None,
            watcher_started: false,
            api_key: config.resolve_api_key(),
            model: config.model(),
            frame_count: 0,
            fps: 0.0,
            fps_update: Instant::now(),
        };
        app.sync_session();
        app
    }

    fn current_slide(&self) -> &crate::deck::SlideRecord {
        &self.deck.slides[self.state.index()]
    }

    fn navigate_forward(&mut self) {
        if self.transition.is_some() {
            return;
        }
        let from = self.state.index();
        if self.state.next() {
            self.transition = Some(Transition::new(
                from,
                self.state.index(),
                TransitionDirection::Forward,
            ));
            self.sync_session();
        }
    }

    fn navigate_backward(&mut self) {
        if self.transition.is_some() {
            return;
        }
        let from = self.state.index();
        if self.state.prev() {
            self.transition = Some(Transition::new(
                from,
                self.state.index(),
                TransitionDirection::Backward,
            ));
            self.sync_session();
        }
    }

    fn jump_to(&mut self, index: usize) {
        if self.transition.is_some() {
            return;
        }
        self.state.jump(index);
        self.sync_session();
    }

    /// Demo session lives exactly as long as the Demo slide is current: fresh
    /// on entry, dropped on exit. Dropping it orphans any in-flight request.
    fn sync_session(&mut self) {
        let on_demo = matches!(self.current_slide().content, SlideContent::Demo(_));
        match (on_demo, self.session.demo.is_some()) {
            (true, false) => self.session.demo = Some(DemoSession::new()),
            (false, true) => self.session.demo = None,
            _ => {}
        }
    }

    fn start_hook_generation(&mut self, ctx: &egui::Context) {
        let Some(demo) = &mut self.session.demo else {
            return;
        };
        if !demo.can_generate() {
            return;
        }
        demo.generating = true;
        demo.generation += 1;

        let generation = demo.generation;
        let tx = demo.tx.clone();
        let context_text = demo.input.clone();
        let api_key = self.api_key.clone();
        let model = self.model.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let text = ai::generate_hook(api_key.as_deref(), &model, &context_text);
            // Receiver may be gone if the user navigated away; that's fine.
            let _ = tx.send(HookReply { generation, text });
            ctx.request_repaint();
        });
    }

    fn pick_team_photo(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Choose a portrait")
            .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
            .pick_file()
        else {
            return;
        };

        match load_portrait(&path) {
            Ok(color_image) => {
                // Replacing the handle drops the previous texture.
                self.session.team_photo = Some(ctx.load_texture(
                    "team-portrait",
                    color_image,
                    egui::TextureOptions::LINEAR,
                ));
            }
            Err(e) => {
                warn!("failed to load portrait {}: {e:#}", path.display());
                self.toast = Some(Toast::new(format!("Could not load image: {e}")));
            }
        }
    }

    fn start_export(&mut self, ctx: &egui::Context) {
        if self.exporting {
            return;
        }
        let Some(path) = rfd::FileDialog::new()
            .set_title("Save investor kit")
            .set_file_name(export::DEFAULT_KIT_NAME)
            .add_filter("ZIP archive", &["zip"])
            .save_file()
        else {
            return;
        };

        self.exporting = true;
        let (tx, rx) = crossbeam_channel::bounded(1);
        self.export_rx = Some(rx);

        let deck = self.deck.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let result = export::build_kit_archive(&deck)
                .and_then(|bytes| {
                    std::fs::write(&path, bytes)
                        .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", path.display()))
                })
                .map(|_| path)
                .map_err(|e| format!("{e:#}"));
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    /// Apply finished background work. The exporting flag is cleared on every
    /// outcome; a failed export surfaces exactly one notification.
    fn poll_background(&mut self) {
        if let Some(demo) = &mut self.session.demo {
            demo.poll();
        }

        let export_result = self
            .export_rx
            .as_ref()
            .and_then(|rx| rx.try_recv().ok());
        if let Some(result) = export_result {
            self.exporting = false;
            self.export_rx = None;
            match result {
                Ok(path) => {
                    info!("investor kit saved to {}", path.display());
                    self.toast = Some(Toast::new(format!(
                        "Investor kit saved to {}",
                        path.display()
                    )));
                }
                Err(message) => {
                    warn!("export failed: {message}");
                    rfd::MessageDialog::new()
                        .set_level(rfd::MessageLevel::Error)
                        .set_title("Export failed")
                        .set_description(format!("Could not build the investor kit.\n{message}"))
                        .show();
                }
            }
        }

        if self.watcher.as_ref().is_some_and(|w| w.changed()) {
            self.reload_deck();
        }
    }

    fn reload_deck(&mut self) {
        let Some(path) = &self.deck_path else {
            return;
        };
        match Deck::load(path) {
            Ok(deck) => {
                info!("reloaded {} ({} slides)", path.display(), deck.len());
                self.state.resize(deck.len());
                self.deck = deck;
                self.transition = None;
                self.sync_session();
                self.toast = Some(Toast::new("Deck reloaded".to_string()));
            }
            Err(e) => {
                warn!("deck reload failed: {e:#}");
                self.toast = Some(Toast::new(format!("Reload failed: {e}")));
            }
        }
    }

    fn ensure_watcher(&mut self, ctx: &egui::Context) {
        if self.watcher_started {
            return;
        }
        self.watcher_started = true;
        if let Some(path) = &self.deck_path {
            match DeckWatcher::new(path, ctx.clone()) {
                Ok(watcher) => self.watcher = Some(watcher),
                Err(e) => warn!("file watching disabled: {e:#}"),
            }
        }
    }

    fn update_fps(&mut self) {
        self.frame_count += 1;
        let elapsed = self.fps_update.elapsed().as_secs_f32();
        if elapsed >= 0.5 {
            self.fps = self.frame_count as f32 / elapsed;
            self.frame_count = 0;
            self.fps_update = Instant::now();
        }
    }

    fn draw_slides(
        &mut self,
        ui: &mut egui::Ui,
        rect: egui::Rect,
        scale: f32,
    ) -> Option<SlideAction> {
        if let Some(transition) = &self.transition {
            let progress = transition.progress();
            let width = rect.width();
            let sign = match transition.direction {
                TransitionDirection::Forward => -1.0,
                TransitionDirection::Backward => 1.0,
            };
            let from_offset = sign * progress * width;
            let to_offset = from_offset - sign * width;
            let from_rect = rect.translate(egui::vec2(from_offset, 0.0));
            let to_rect = rect.translate(egui::vec2(to_offset, 0.0));
            let (from, to) = (transition.from, transition.to);

            render::render_slide(
                ui,
                &self.deck.slides[from],
                &self.theme,
                from_rect,
                1.0,
                scale,
                &mut self.session,
            );
            render::render_slide(
                ui,
                &self.deck.slides[to],
                &self.theme,
                to_rect,
                1.0,
                scale,
                &mut self.session,
            );
            // Interactions are ignored mid-transition
            None
        } else {
            let index = self.state.index();
            render::render_slide(
                ui,
                &self.deck.slides[index],
                &self.theme,
                rect,
                1.0,
                scale,
                &mut self.session,
            )
        }
    }

    fn draw_controls(
        &self,
        ui: &mut egui::Ui,
        rect: egui::Rect,
        scale: f32,
    ) -> Option<ControlAction> {
        let mut action = None;
        let strip_top = rect.bottom() - CONTROL_STRIP_HEIGHT * scale;
        let padding = 32.0 * scale;
        let button_size = egui::vec2(64.0 * scale, 48.0 * scale);

        // Slide counter, bottom left
        let counter_text = format!("{} / {}", self.state.index() + 1, self.state.len());
        let counter_color = Theme::with_opacity(self.theme.foreground, 0.5);
        let counter_galley = ui.painter().layout_no_wrap(
            counter_text,
            egui::FontId::monospace(16.0 * scale),
            counter_color,
        );
        let counter_width = counter_galley.rect.width();
        ui.painter().galley(
            egui::pos2(rect.left() + padding, strip_top + 14.0 * scale),
            counter_galley,
            counter_color,
        );

        // Export control next to the counter; disabled while a kit is packing
        let export_label = if self.exporting {
            "Packing\u{2026}"
        } else {
            "Download Investor Kit (ZIP)"
        };
        let export_rect = egui::Rect::from_min_size(
            egui::pos2(
                rect.left() + padding + counter_width + 24.0 * scale,
                strip_top,
            ),
            egui::vec2(280.0 * scale, button_size.y),
        );
        let mut export_ui = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(export_rect)
                .layout(egui::Layout::centered_and_justified(
                    egui::Direction::LeftToRight,
                ))
                .id_salt("control_export"),
        );
        if export_ui
            .add_enabled(
                !self.exporting,
                egui::Button::new(
                    egui::RichText::new(export_label)
                        .size(15.0 * scale)
                        .color(self.theme.accent),
                )
                .fill(Theme::with_opacity(self.theme.accent, 0.08))
                .stroke(egui::Stroke::new(
                    1.0 * scale,
                    Theme::with_opacity(self.theme.accent, 0.4),
                )),
            )
            .clicked()
        {
            action = Some(ControlAction::Export);
        }

        // Prev / Next, bottom right
        let next_rect = egui::Rect::from_min_size(
            egui::pos2(rect.right() - padding - button_size.x, strip_top),
            button_size,
        );
        let prev_rect = next_rect.translate(egui::vec2(-(button_size.x + 16.0 * scale), 0.0));

        let mut prev_ui = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(prev_rect)
                .layout(egui::Layout::centered_and_justified(
                    egui::Direction::LeftToRight,
                ))
                .id_salt("control_prev"),
        );
        if prev_ui
            .add_enabled(
                !self.state.at_start(),
                egui::Button::new(
                    egui::RichText::new("\u{25C0}")
                        .size(18.0 * scale)
                        .color(self.theme.heading_color),
                )
                .fill(Theme::with_opacity(self.theme.heading_color, 0.1)),
            )
            .clicked()
        {
            action = Some(ControlAction::Prev);
        }

        let mut next_ui = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(next_rect)
                .layout(egui::Layout::centered_and_justified(
                    egui::Direction::LeftToRight,
                ))
                .id_salt("control_next"),
        );
        if next_ui
            .add_enabled(
                !self.state.at_end(),
                egui::Button::new(
                    egui::RichText::new("\u{25B6}")
                        .size(18.0 * scale)
                        .color(self.theme.heading_color),
                )
                .fill(Theme::with_opacity(self.theme.accent_alt, 0.8)),
            )
            .clicked()
        {
            action = Some(ControlAction::Next);
        }

        action
    }

    /// Thin bar along the bottom edge, filled to `(index + 1) / len`.
    fn draw_progress_bar(&self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        let height = 5.0 * scale;
        let track = egui::Rect::from_min_max(
            egui::pos2(rect.left(), rect.bottom() - height),
            rect.max,
        );
        ui.painter().rect_filled(
            track,
            0.0,
            Theme::with_opacity(self.theme.heading_color, 0.08),
        );

        let fill_width = rect.width() * self.state.progress();
        let fill = egui::Rect::from_min_size(track.min, egui::vec2(fill_width, height));
        let left_color = egui::Color32::from_rgb(0x6A, 0x0D, 0xAD);
        let right_color = self.theme.accent;
        let mut mesh = egui::Mesh::default();
        mesh.colored_vertex(fill.left_top(), left_color);
        mesh.colored_vertex(fill.right_top(), right_color);
        mesh.colored_vertex(fill.left_bottom(), left_color);
        mesh.colored_vertex(fill.right_bottom(), right_color);
        mesh.add_triangle(0, 2, 1);
        mesh.add_triangle(1, 2, 3);
        ui.painter().add(egui::Shape::mesh(mesh));
    }

    fn draw_toast(&self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        let Some(toast) = &self.toast else {
            return;
        };
        let opacity = toast.opacity();
        if opacity <= 0.0 {
            return;
        }
        let color = Theme::with_opacity(self.theme.heading_color, opacity * 0.9);
        let bg = Theme::with_opacity(self.theme.background_glow, opacity * 0.9);
        let galley = ui.painter().layout_no_wrap(
            toast.message.clone(),
            egui::FontId::proportional(18.0 * scale),
            color,
        );
        let padding = 14.0 * scale;
        let toast_rect = egui::Rect::from_min_size(
            egui::pos2(
                rect.center().x - galley.rect.width() / 2.0 - padding,
                rect.bottom() - 160.0 * scale,
            ),
            galley.rect.size() + egui::vec2(padding * 2.0, padding * 2.0),
        );
        ui.painter().rect_filled(toast_rect, 8.0 * scale, bg);
        ui.painter()
            .galley(toast_rect.min + egui::vec2(padding, padding), galley, color);
    }

    fn draw_fps(&self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        let fps_color = Theme::with_opacity(self.theme.foreground, 0.3);
        let galley = ui.painter().layout_no_wrap(
            format!("{:.0} fps", self.fps),
            egui::FontId::monospace(13.0 * scale),
            fps_color,
        );
        ui.painter().galley(
            egui::pos2(
                rect.right() - galley.rect.width() - 12.0 * scale,
                rect.top() + 10.0 * scale,
            ),
            galley,
            fps_color,
        );
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_fps();
        self.ensure_watcher(ctx);
        self.poll_background();

        // Keyboard bindings. Navigation keys stand down while a widget (the
        // Demo slide's input) has keyboard focus.
        let typing = ctx.wants_keyboard_input();
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();
        ctx.input(|i| {
            if typing {
                return;
            }

            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }
            if i.key_pressed(egui::Key::Escape) {
                if let Some(last) = self.last_esc {
                    if last.elapsed().as_secs_f32() < 1.0 {
                        viewport_cmds.push(egui::ViewportCommand::Close);
                        return;
                    }
                }
                self.last_esc = Some(Instant::now());
                self.toast = Some(Toast::new("Press Esc again to exit".to_string()));
                return;
            }
            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
                return;
            }
            if i.key_pressed(egui::Key::D) {
                self.theme = self.theme.toggled();
                self.toast = Some(Toast::new(format!("Theme: {}", self.theme.name)));
                return;
            }

            if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::Space) {
                self.navigate_forward();
            }
            if i.key_pressed(egui::Key::ArrowLeft) {
                self.navigate_backward();
            }
            if i.key_pressed(egui::Key::Home) {
                self.jump_to(0);
            }
            if i.key_pressed(egui::Key::End) {
                self.jump_to(self.state.len().saturating_sub(1));
            }
        });
        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        // Retire finished transitions
        if self.transition.as_ref().is_some_and(|t| t.is_complete()) {
            self.transition = None;
        }
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        let mut slide_action = None;
        let mut control_action = None;
        let bg = self.theme.background;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let scale = render::compute_scale(rect);

                self.starfield.draw(ui, rect, &self.theme);
                slide_action = self.draw_slides(ui, rect, scale);
                control_action = self.draw_controls(ui, rect, scale);
                self.draw_progress_bar(ui, rect, scale);
                self.draw_toast(ui, rect, scale);
                self.draw_fps(ui, rect, scale);
            });

        match control_action {
            Some(ControlAction::Prev) => self.navigate_backward(),
            Some(ControlAction::Next) => self.navigate_forward(),
            Some(ControlAction::Export) => self.start_export(ctx),
            None => {}
        }
        match slide_action {
            Some(SlideAction::GenerateHook) => self.start_hook_generation(ctx),
            Some(SlideAction::PickTeamPhoto) => self.pick_team_photo(ctx),
            None => {}
        }

        // The starfield animates continuously
        ctx.request_repaint();
    }
}

fn load_portrait(path: &std::path::Path) -> anyhow::Result<egui::ColorImage> {
    let bytes = std::fs::read(path)?;
    let image = image::load_from_memory(&bytes)?.into_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        image.as_flat_samples().as_slice(),
    ))
}

pub fn run(
    file: Option<PathBuf>,
    windowed: bool,
    start_slide: Option<usize>,
) -> anyhow::Result<()> {
    let (deck, deck_path) = match file {
        Some(path) => {
            let deck = Deck::load(&path)?;
            (deck, Some(path))
        }
        None => (Deck::builtin(), None),
    };

    let config = Config::load_or_default();
    let theme_name = config
        .defaults
        .as_ref()
        .and_then(|d| d.theme.clone())
        .unwrap_or_else(|| "cosmic".to_string());
    let theme = Theme::from_name(&theme_name);
    let windowed = windowed
        || config
            .defaults
            .as_ref()
            .and_then(|d| d.windowed)
            .unwrap_or(false);

    let title = deck.title.clone();
    let initial_slide = start_slide
        .map(|s| s.saturating_sub(1))
        .unwrap_or(0)
        .min(deck.len().saturating_sub(1));

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            let mut app = DeckApp::new(deck, deck_path, theme, &config);
            app.jump_to(initial_slide);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
