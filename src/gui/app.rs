use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::confetti;
use crate::gui::prompt::{self, Greeting, PromptState};
use crate::gui::theme::{self, ThemeColors};
use crate::input::{
    Accel, Direction, Point, Viewport, classify_motion, classify_touch, classify_touch_start,
};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub struct AppModel {
    pub state: Rc<RefCell<PromptState>>,
    pub config: Config,
    pub greeting: Greeting,
    pub drawing_area: gtk::DrawingArea,
    rng: rand::rngs::ThreadRng,
    hide_source: Option<glib::SourceId>,
    tick_source: Option<glib::SourceId>,
}

#[derive(Debug)]
pub enum AppMsg {
    PointerMove(Point),
    TouchStart,
    TouchMove(Point),
    Pressed(Point),
    Resize(i32, i32),
    Motion(Accel),
    Steer(Direction),
    ConfettiTick,
    ConfettiDone,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Motion(a) => AppMsg::Motion(a),
            AppEvent::Steer(d) => AppMsg::Steer(d),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Greeting, Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("nudge"),
            set_default_size: (900, 640),
            add_css_class: "nudge-window",

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "nudge-drawing-area",

                connect_resize[sender] => move |_, width, height| {
                    sender.input(AppMsg::Resize(width, height));
                },

                add_controller = gtk::EventControllerMotion {
                    connect_motion[sender] => move |_, x, y| {
                        sender.input(AppMsg::PointerMove(Point::new(x, y)));
                    }
                },

                add_controller = gtk::GestureClick {
                    connect_pressed[sender] => move |_, _, x, y| {
                        sender.input(AppMsg::Pressed(Point::new(x, y)));
                    }
                },

                add_controller = gtk::GestureDrag {
                    set_touch_only: true,
                    connect_drag_begin[sender] => move |gesture, _, _| {
                        gesture.set_state(gtk::EventSequenceState::Claimed);
                        sender.input(AppMsg::TouchStart);
                    },
                    connect_drag_update[sender] => move |gesture, dx, dy| {
                        if let Some((x, y)) = gesture.start_point() {
                            sender.input(AppMsg::TouchMove(Point::new(x + dx, y + dy)));
                        }
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (greeting, config, rx) = init;

        theme::load_css();

        let state = Rc::new(RefCell::new(PromptState::new()));

        let model = AppModel {
            state: state.clone(),
            config,
            greeting,
            drawing_area: gtk::DrawingArea::default(),
            rng: rand::rng(),
            hide_source: None,
            tick_source: None,
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let state_draw = model.state.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                if let Err(e) = prompt::draw(cr, &state_draw.borrow(), &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Resize(width, height) => {
                self.state
                    .borrow_mut()
                    .resize(Viewport::new(width as f64, height as f64));
                self.drawing_area.queue_draw();
            }
            AppMsg::PointerMove(point) => {
                let threshold = self.config.input.pointer_threshold;
                let mut state = self.state.borrow_mut();
                let moved = state
                    .pointer
                    .observe(point, threshold)
                    .is_some_and(|direction| state.relocate(direction, &mut self.rng));
                if moved {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::TouchMove(point) => {
                let mut state = self.state.borrow_mut();
                let direction = classify_touch(point, state.viewport);
                if state.relocate(direction, &mut self.rng) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::TouchStart => {
                let mut state = self.state.borrow_mut();
                if state.relocate(classify_touch_start(), &mut self.rng) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Steer(direction) => {
                log::debug!("Sensor steer: {}", direction);
                let mut state = self.state.borrow_mut();
                if state.relocate(direction, &mut self.rng) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Motion(accel) => {
                let limit = self.config.input.shake_accel;
                if let Some(direction) = classify_motion(accel, limit) {
                    let mut state = self.state.borrow_mut();
                    if state.relocate(direction, &mut self.rng) {
                        self.drawing_area.queue_draw();
                    }
                }
            }
            AppMsg::Pressed(point) => {
                let confirmed = {
                    let mut state = self.state.borrow_mut();
                    if !state.is_prompting() {
                        return;
                    }
                    if state.confirm_rect().contains(point) {
                        let greeting = self.greeting.clone();
                        state.confirm(greeting, &mut self.rng, self.config.confetti.particles)
                    } else {
                        if state.evade_rect().contains(point) {
                            // The No button is inert: whoever manages to
                            // catch it gets nothing for the effort.
                            log::debug!("Declined, to no effect");
                        }
                        false
                    }
                };
                if confirmed {
                    self.drawing_area.queue_draw();
                    self.start_confetti(&sender);
                }
            }
            AppMsg::ConfettiTick => {
                let mut state = self.state.borrow_mut();
                if !state.confetti_active {
                    return;
                }
                let viewport = state.viewport;
                state
                    .confetti
                    .step(confetti::TICK_INTERVAL_MS as f64 / 1000.0, viewport);
                self.drawing_area.queue_draw();
            }
            AppMsg::ConfettiDone => {
                // The one-shot source has fired; forget its id so shutdown
                // does not try to remove it again.
                self.hide_source = None;
                if let Some(id) = self.tick_source.take() {
                    id.remove();
                }
                self.state.borrow_mut().finish_confetti();
                self.drawing_area.queue_draw();
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.config = new_config;
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }

    fn shutdown(&mut self, _widgets: &mut Self::Widgets, _output: relm4::Sender<Self::Output>) {
        if let Some(id) = self.hide_source.take() {
            id.remove();
        }
        if let Some(id) = self.tick_source.take() {
            id.remove();
        }
    }
}

impl AppModel {
    /// Starts the animation tick and the single deferred deactivation, both
    /// cancelled on shutdown if still pending.
    fn start_confetti(&mut self, sender: &ComponentSender<Self>) {
        let duration = Duration::from_millis(self.config.confetti.duration_ms);
        let hide_sender = sender.clone();
        self.hide_source = Some(glib::timeout_add_local_once(duration, move || {
            hide_sender.input(AppMsg::ConfettiDone);
        }));

        let tick_sender = sender.clone();
        self.tick_source = Some(glib::timeout_add_local(
            Duration::from_millis(confetti::TICK_INTERVAL_MS),
            move || {
                tick_sender.input(AppMsg::ConfettiTick);
                glib::ControlFlow::Continue
            },
        ));
    }
}
