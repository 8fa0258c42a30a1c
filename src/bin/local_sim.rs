extern crate hunterbot;

use hunterbot::{Action, Rules, Simulation, Strategy, Threat, Vec2};

use flo_canvas::*;
use flo_draw::*;

use futures::executor;
use futures::prelude::*;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SCALE: f32 = 0.1;
const MAX_TURNS: i32 = 200;

fn to_screen(pos: Vec2, rules: &Rules) -> (f32, f32) {
    let height = rules.arena_high.y as f32 * SCALE;
    (pos.x as f32 * SCALE, height - pos.y as f32 * SCALE)
}

fn draw_circle_at_pos(gc: &mut CanvasGraphicsContext, pos: Vec2, rules: &Rules, col: Color) {
    let (x, y) = to_screen(pos, rules);
    gc.new_path();

    gc.circle(x, y, 15.);

    gc.fill_color(col);

    gc.fill();
    gc.line_width(1.0);
    gc.stroke_color(Color::Rgba(0.0, 0.0, 0.0, 1.0));
    gc.stroke();
}

fn draw_range(gc: &mut CanvasGraphicsContext, center: Vec2, radius: f64, rules: &Rules) {
    let (x, y) = to_screen(center, rules);
    gc.new_path();

    gc.circle(x, y, radius as f32 * SCALE);

    gc.fill_color(Color::Rgba(1., 0., 0., 0.05));
    gc.fill();
    gc.line_width(1.0);
    gc.stroke_color(Color::Rgba(1., 0., 0., 0.4));
    gc.stroke();
}

fn draw_line(gc: &mut CanvasGraphicsContext, from: Vec2, to: Vec2, rules: &Rules, col: Color) {
    let (x1, y1) = to_screen(from, rules);
    let (x2, y2) = to_screen(to, rules);

    gc.new_path();
    gc.move_to(x1, y1);
    gc.line_to(x2, y2);

    gc.line_width(1.0);
    gc.stroke_color(col);
    gc.stroke();
}

fn draw_arena(gc: &mut CanvasGraphicsContext, rules: &Rules) {
    let (x1, y1) = to_screen(rules.arena_low, rules);
    let (x2, y2) = to_screen(rules.arena_high, rules);

    gc.new_path();
    gc.rect(x1, y1, x2, y2);

    gc.line_width(1.0);
    gc.stroke_color(Color::Rgba(0.0, 0.0, 0.0, 0.3));
    gc.stroke();
}

fn draw_world(gc: &mut CanvasGraphicsContext, sim: &Simulation, draw_ranges: bool) {
    let rules = &sim.rules;

    for dp in &sim.data_points {
        draw_circle_at_pos(gc, dp.pos, rules, Color::Rgba(0., 1., 0., 1.));
    }

    if let Ok(threats) = Threat::from_world(&sim.world(), rules) {
        for t in &threats {
            draw_line(gc, t.pos, t.objective, rules, Color::Rgba(1., 0., 0., 0.3));
            if draw_ranges {
                draw_range(gc, t.next_pos, t.attack_range, rules);
            }
        }
    }

    for e in &sim.enemies {
        draw_circle_at_pos(gc, e.pos, rules, Color::Rgba(1., 0., 0., 1.));
    }

    draw_circle_at_pos(gc, sim.me, rules, Color::Rgba(0., 0., 1., 1.));
}

fn draw_action(gc: &mut CanvasGraphicsContext, sim: &Simulation, action: &Action) {
    match action {
        Action::Move(dest) => {
            draw_line(gc, sim.me, *dest, &sim.rules, Color::Rgba(0., 0., 1., 0.6));
        }
        Action::Shoot(id) => {
            if let Some(enemy) = sim.enemies.iter().find(|e| e.id == *id) {
                draw_line(gc, sim.me, enemy.pos, &sim.rules, Color::Rgba(1., 0.5, 0., 1.));
            }
        }
    }
}

struct App {
    sim: Simulation,
    strategy: Strategy,
    canvas: Canvas,
    next_action: Option<Action>,

    draw_ranges: bool,
}

impl App {
    fn new(canvas: Canvas) -> Self {
        let strategy = Strategy::default();
        let sim = Simulation::random(&mut rand::thread_rng(), strategy.rules.clone());

        let mut app = App {
            sim,
            strategy,
            canvas,
            next_action: None,
            draw_ranges: true,
        };
        app.plan();
        app
    }

    fn plan(&mut self) {
        self.next_action = match self.sim.outcome() {
            Some(_) => None,
            None => match self.strategy.decide(&self.sim.world()) {
                Ok(action) => Some(action),
                Err(e) => {
                    error!("no action: {e}");
                    None
                }
            },
        };
    }

    fn redraw(&mut self) {
        let height = self.sim.rules.arena_high.y as f32 * SCALE;
        let width = self.sim.rules.arena_high.x as f32 * SCALE;

        self.canvas.draw(|gc| {
            gc.clear_all_layers();
            gc.canvas_height(height);
            gc.center_region(0.0, 0.0, width, height);

            draw_arena(gc, &self.sim.rules);

            draw_world(gc, &self.sim, self.draw_ranges);

            if let Some(action) = &self.next_action {
                draw_action(gc, &self.sim, action);
            }
        });
    }

    fn step(&mut self) {
        let Some(action) = self.next_action else {
            info!("game over: {:?}", self.sim.report());
            return;
        };

        info!("turn {}: {action}", self.sim.world().iter + 1);
        match self.sim.step(&action) {
            Ok(Some(_)) => info!("game over: {:?}", self.sim.report()),
            Ok(None) => {}
            Err(e) => error!("{e}"),
        }

        self.plan();
        self.redraw();
    }

    fn play_to_end(&mut self) {
        match self.sim.play(&self.strategy, MAX_TURNS) {
            Ok(report) => info!("game over: {report:?}"),
            Err(e) => error!("{e}"),
        }

        self.plan();
        self.redraw();
    }

    fn regenerate_map(&mut self) {
        self.sim = Simulation::random(&mut rand::thread_rng(), self.strategy.rules.clone());
        self.plan();
        self.redraw();
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    with_2d_graphics(|| {
        executor::block_on(async {
            let (canvas, mut events) = create_canvas_window_with_events("HUNTERBOT");

            let mut app = App::new(canvas);

            app.redraw();

            while let Some(event) = events.next().await {
                match event {
                    DrawEvent::KeyDown(_, Some(Key::KeySpace)) => {
                        app.step();
                    }
                    DrawEvent::KeyDown(_, Some(Key::KeyEscape)) => {
                        std::process::exit(0);
                    }
                    DrawEvent::KeyDown(_, Some(Key::Key1)) => {
                        app.draw_ranges = !app.draw_ranges;
                        app.redraw();
                    }
                    DrawEvent::KeyDown(_, Some(Key::Key2)) => {
                        app.regenerate_map();
                    }
                    DrawEvent::KeyDown(_, Some(Key::Key3)) => {
                        app.play_to_end();
                    }
                    _ => {}
                }
            }
        });
    });
}
