use crate::display::{DisplayController, Reading};
use crate::lifecycle::{self, WindowToggles};
use crate::settings::Settings;
use crate::visibility::ViewportCtx;
use crate::win_util::{self, NativeWindow};
use eframe::egui;
use std::path::PathBuf;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(24, 24, 27);
const NUMBER_SIZE: f32 = 56.0;

pub struct RandomizerApp {
    display: DisplayController,
    settings: Settings,
    settings_path: PathBuf,
    toggles: WindowToggles,
    window: Option<Box<dyn NativeWindow>>,
    initialized: bool,
    pointer_inside: bool,
    saved: bool,
}

impl RandomizerApp {
    pub fn new(settings: Settings, settings_path: PathBuf) -> Self {
        Self::with_display(settings, settings_path, DisplayController::new())
    }

    pub fn with_display(
        settings: Settings,
        settings_path: PathBuf,
        display: DisplayController,
    ) -> Self {
        let toggles = WindowToggles::from(&settings);
        Self {
            display,
            settings,
            settings_path,
            toggles,
            window: None,
            initialized: false,
            pointer_inside: false,
            saved: false,
        }
    }

    pub fn display(&self) -> &DisplayController {
        &self.display
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn toggles(&self) -> WindowToggles {
        self.toggles
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Restore placement and toggles. Runs once; later calls are ignored.
    pub fn initialize<C: ViewportCtx + ?Sized>(
        &mut self,
        ctx: &C,
        window: Option<Box<dyn NativeWindow>>,
    ) {
        if self.initialized {
            return;
        }
        self.window = window;
        self.toggles = lifecycle::restore(ctx, self.window.as_deref(), &self.settings);
        self.initialized = true;
        tracing::debug!(toggles = ?self.toggles, "window initialised");
    }

    /// Feed the pointer hover state for the current frame. Returns the new
    /// reading when the pointer has just entered the window.
    pub fn track_pointer(&mut self, inside: bool) -> Option<Reading> {
        let entered = inside && !self.pointer_inside;
        self.pointer_inside = inside;
        entered.then(|| self.display.on_pointer_enter())
    }

    pub fn set_keep_on_top<C: ViewportCtx + ?Sized>(&mut self, ctx: &C, checked: bool) {
        self.toggles.keep_on_top = checked;
        self.display.on_toggle_keep_on_top(ctx, checked);
    }

    pub fn set_show_in_taskbar(&mut self, checked: bool) {
        self.toggles.show_in_taskbar = checked;
        self.display
            .on_toggle_show_in_taskbar(self.window.as_deref(), checked);
    }

    /// Store placement and toggles and write the settings file. Only the
    /// first call has an effect.
    pub fn shutdown(&mut self) {
        if self.saved {
            return;
        }
        lifecycle::capture(self.window.as_deref(), self.toggles, &mut self.settings);
        lifecycle::persist(&self.settings, &self.settings_path);
        self.saved = true;
    }

    fn context_menu<C: ViewportCtx + ?Sized>(&mut self, commands: &C, ui: &mut egui::Ui) {
        let mut keep_on_top = self.toggles.keep_on_top;
        if ui.checkbox(&mut keep_on_top, "Keep on top").changed() {
            self.set_keep_on_top(commands, keep_on_top);
            ui.close_menu();
        }
        let mut show_in_taskbar = self.toggles.show_in_taskbar;
        if ui.checkbox(&mut show_in_taskbar, "Show in taskbar").changed() {
            self.set_show_in_taskbar(show_in_taskbar);
            ui.close_menu();
        }
    }

    /// Draw the number and route this frame's input.
    ///
    /// Viewport commands go to `commands`, which is `ctx` itself when running
    /// inside eframe.
    pub fn show_panel<C: ViewportCtx + ?Sized>(
        &mut self,
        ctx: &egui::Context,
        commands: &C,
    ) -> PanelOutput {
        let (inside, presses, escape) = ctx.input(|i| {
            let presses: Vec<egui::PointerButton> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::PointerButton {
                        button,
                        pressed: true,
                        ..
                    } => Some(*button),
                    _ => None,
                })
                .collect();
            (
                i.pointer.has_pointer(),
                presses,
                i.key_pressed(egui::Key::Escape),
            )
        });

        let reading = self.track_pointer(inside);
        if reading.is_some() {
            commands.request_repaint();
        }
        let closing = escape && self.display.on_key_down(commands, egui::Key::Escape);
        let mut output = PanelOutput {
            reading,
            closing,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.centered_and_justified(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(self.display.text())
                                .color(self.display.color())
                                .size(NUMBER_SIZE)
                                .strong(),
                        )
                        .selectable(false),
                    );
                });
                // Registered after the label so the surface is the topmost widget.
                let response = ui.interact(rect, ui.id().with("surface"), egui::Sense::click());
                if response.hovered() {
                    for button in presses {
                        output.drag_started |= self.display.on_pointer_down(commands, button);
                    }
                }
                output.menu_open = response
                    .context_menu(|ui| self.context_menu(commands, ui))
                    .is_some();
            });
        output
    }
}

/// What a single frame of [`RandomizerApp::show_panel`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelOutput {
    pub reading: Option<Reading>,
    pub drag_started: bool,
    pub closing: bool,
    pub menu_open: bool,
}

impl eframe::App for RandomizerApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if !self.initialized {
            self.initialize(ctx, win_util::native_window(frame));
        }
        self.show_panel(ctx, ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.shutdown();
    }
}
