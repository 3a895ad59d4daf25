use crate::config::OverlayConfig;
use crate::draw::{Color, DrawCommand, Point};
use crate::export::export_png;
use crate::overlay::Overlay;
use crate::surface::{HostSurface, Viewport};
use eframe::egui;
use std::path::PathBuf;
use tracing::{info, warn};

/// egui layer orders a z-slot can map to, lowest first
const ORDERS: [egui::Order; 4] = [egui::Order::Background, egui::Order::Middle, egui::Order::Foreground, egui::Order::Tooltip];

fn order_rank(order: egui::Order) -> i32 {
    ORDERS.iter().position(|o| *o == order).unwrap_or(0) as i32
}

/// Map a z-slot onto an egui layer order.
///
/// egui has only four orders for app content, so slot 3 and everything above
/// it land on `Tooltip`. With the demo host's baseline of 2 the point layer gets
/// `Foreground` and the reset control, readout and chart layer all share
/// `Tooltip`. Within one order egui stacks by paint order, and `ui` paints them
/// in slot order. Host tooltips also live on `Tooltip`, so they can end up
/// drawn over the overlay.
fn order_for_slot(z: i32) -> egui::Order {
    ORDERS[z.clamp(0, ORDERS.len() as i32 - 1) as usize]
}

fn color32(c: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

fn pos2(p: Point) -> egui::Pos2 {
    egui::pos2(p.x, p.y)
}

/// Replay a display list onto a layer painter, shifted to `origin`
fn paint_commands(painter: &egui::Painter, commands: &[DrawCommand], origin: Point) {
    for cmd in commands.iter().map(|c| c.translated(origin.x, origin.y)) {
        match cmd {
            DrawCommand::Line { from, to, color } => {
                painter.line_segment([pos2(from), pos2(to)], egui::Stroke::new(1.0, color32(color)));
            }
            DrawCommand::Polyline { points, color } => {
                painter.add(egui::Shape::line(points.into_iter().map(pos2).collect(), egui::Stroke::new(1.0, color32(color))));
            }
            DrawCommand::Text { pos, text, color } => {
                painter.text(pos2(pos), egui::Align2::LEFT_BOTTOM, text, egui::FontId::proportional(12.0), color32(color));
            }
        }
    }
}

/// Stand-in page the overlay instruments: a central panel and a floating panel
struct DemoHost {
    viewport: Viewport,
    notes: String,
    clicks: u32,
    button_rect: egui::Rect,
}

impl DemoHost {
    fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            notes: String::new(),
            clicks: 0,
            button_rect: egui::Rect::NOTHING,
        }
    }

    fn show(&mut self, ctx: &egui::Context) {
        let rect = ctx.screen_rect();
        self.viewport = Viewport::new(rect.width(), rect.height());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(40.0);
            ui.heading("Host surface");
            ui.label("Move the pointer anywhere. Widgets below stay fully interactive.");
            ui.separator();
            let button = ui.button("Click me");
            self.button_rect = button.rect;
            if button.clicked() {
                self.clicks += 1;
            }
            ui.label(format!("Clicked {} times", self.clicks));
            ui.add_space(10.0);
            ui.text_edit_multiline(&mut self.notes);
        });

        egui::Window::new("Floating panel").default_pos([420.0, 160.0]).show(ctx, |ui| {
            ui.label("Host content drawn at a higher layer.");
            ui.label("F2 saves a snapshot of the timing chart.");
        });
    }
}

impl HostSurface for DemoHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Orders the host paints on: `CentralPanel` and the floating `Window`
    fn declared_z_orders(&self) -> Vec<Option<i32>> {
        vec![Some(order_rank(egui::Order::Background)), Some(order_rank(egui::Order::Middle))]
    }
}

pub struct OverlayApp {
    host: DemoHost,
    overlay: Overlay,
    point_texture: Option<egui::TextureHandle>,
    snapshot_dir: PathBuf,
    snapshot_seq: u32,
}

impl OverlayApp {
    pub fn new(config: OverlayConfig) -> Self {
        let host = DemoHost::new(Viewport::new(config.window_size[0], config.window_size[1]));
        let overlay = Overlay::initialize(&config, &host);
        Self {
            host,
            overlay,
            point_texture: None,
            snapshot_dir: config.snapshot_dir,
            snapshot_seq: 0,
        }
    }

    /// One frame: host content, then pointer instrumentation, then the overlay layers
    fn ui(&mut self, ctx: &egui::Context) {
        self.host.show(ctx);
        self.overlay.on_resize(self.host.viewport());

        // Reading input does not consume it; the host widgets above already saw it
        let (events, time) = ctx.input(|i| (i.events.clone(), i.time));
        let timestamp_ms = time * 1000.0;
        for event in events {
            match event {
                egui::Event::PointerMoved(pos) => {
                    self.overlay.on_move(timestamp_ms, Point::new(pos.x, pos.y));
                }
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    ..
                } => self.overlay.on_click(Point::new(pos.x, pos.y)),
                _ => {}
            }
        }

        if ctx.input(|i| i.key_pressed(egui::Key::F2)) {
            self.save_snapshot();
        }

        let layers = self.overlay.layers();

        // Layer painters never sense input, so both drawing surfaces pass it through
        let points = ctx.layer_painter(egui::LayerId::new(order_for_slot(layers.point_layer), egui::Id::new("overlay_point_layer")));
        if let Some(tex) = self.sync_point_texture(ctx) {
            let [w, h] = tex.size();
            let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(w as f32, h as f32));
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            points.image(tex.id(), rect, uv, egui::Color32::WHITE);
        }

        let chart = ctx.layer_painter(egui::LayerId::new(order_for_slot(layers.chart_layer), egui::Id::new("overlay_chart_layer")));
        paint_commands(&chart, self.overlay.chart_commands(), self.overlay.surfaces().chart_origin());

        let mut reset_clicked = false;
        egui::Area::new(egui::Id::new("overlay_reset_control"))
            .order(order_for_slot(layers.reset_control))
            .fixed_pos(egui::pos2(10.0, 10.0))
            .show(ctx, |ui| {
                reset_clicked = ui.button("Clear").clicked();
            });

        let readout = self.overlay.readout();
        egui::Area::new(egui::Id::new("overlay_readout"))
            .order(order_for_slot(layers.readout))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 10.0))
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.strong(readout);
                });
            });

        if reset_clicked {
            self.overlay.reset();
        }
    }

    /// Upload point-layer changes. The texture is recreated when the raster size
    /// changes, otherwise only the damaged rows are sent.
    fn sync_point_texture(&mut self, ctx: &egui::Context) -> Option<&egui::TextureHandle> {
        let damage = self.overlay.take_point_damage();
        let layer = self.overlay.point_layer();
        let size = layer.size();
        if size[0] == 0 || size[1] == 0 {
            self.point_texture = None;
            return None;
        }

        let stale = self.point_texture.as_ref().map_or(true, |tex| tex.size() != size);
        if stale {
            let image = egui::ColorImage::from_rgba_unmultiplied(size, layer.pixels());
            self.point_texture = Some(ctx.load_texture("overlay_point_layer", image, egui::TextureOptions::NEAREST));
        } else if let (Some(tex), Some(rect)) = (self.point_texture.as_mut(), damage) {
            let patch = egui::ColorImage::from_rgba_unmultiplied([rect.width, rect.height], &layer.region_rgba(rect));
            tex.set_partial([rect.x, rect.y], patch, egui::TextureOptions::NEAREST);
        }
        self.point_texture.as_ref()
    }

    fn save_snapshot(&mut self) {
        let area = self.overlay.surfaces().chart_area();
        self.snapshot_seq += 1;
        let path = self.snapshot_dir.join(format!("chart-{:04}.png", self.snapshot_seq));
        match export_png(self.overlay.chart_commands(), area.width as u32, area.height as u32, &path) {
            Ok(()) => info!(path = %path.display(), samples = self.overlay.sampler().count(), "chart snapshot saved"),
            Err(e) => warn!(path = %path.display(), "chart snapshot failed: {:#}", e),
        }
    }
}

impl eframe::App for OverlayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

pub fn run_gui(config: OverlayConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.window_size).with_title("Pointer Overlay"),
        ..Default::default()
    };

    eframe::run_native("Pointer Overlay", options, Box::new(move |_cc| Box::new(OverlayApp::new(config))))
}
