use crate::core::{scroll_fraction, DriverState, PourEngine, Transition};
use crate::dom;
use crate::pour::PourScene;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub window: web::Window,
    pub document: web::Document,
    pub engine: PourEngine,
    pub scene: PourScene,
    pub hidden_since: Option<Instant>,
}

impl FrameContext {
    pub fn new(
        window: web::Window,
        document: web::Document,
        engine: PourEngine,
        scene: PourScene,
    ) -> Self {
        Self {
            window,
            document,
            engine,
            scene,
            hidden_since: None,
        }
    }

    pub fn frame(&mut self) {
        let (window, document) = (&self.window, &self.document);
        let resampled = self.engine.frame(|| {
            scroll_fraction(
                dom::window_scroll_y(window),
                dom::document_height(document),
                dom::viewport_height(window),
            )
        });
        if resampled {
            let state = self.engine.state();
            log::trace!(
                "[pour] {:?} target tilt={:.1} pour={:.2}",
                self.engine.phase(),
                state.target_tilt,
                state.target_pour
            );
        }
        self.scene.apply(&self.engine);
    }
}

/// requestAnimationFrame loop around a [`FrameContext`]. Cloning shares the
/// same loop.
#[derive(Clone)]
pub struct FrameDriver {
    ctx: Rc<RefCell<FrameContext>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl FrameDriver {
    pub fn start(ctx: FrameContext) -> Self {
        let driver = Self {
            ctx: Rc::new(RefCell::new(ctx)),
            tick: Rc::new(RefCell::new(None)),
            raf_id: Rc::new(Cell::new(None)),
        };
        let looped = driver.clone();
        *driver.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            looped.raf_id.set(None);
            let running = {
                let mut ctx = looped.ctx.borrow_mut();
                ctx.frame();
                ctx.engine.driver_state() == DriverState::Running
            };
            if running {
                looped.schedule();
            }
        }) as Box<dyn FnMut()>));
        driver.schedule();
        log::info!("[pour] frame loop started");
        driver
    }

    fn schedule(&self) {
        if self.raf_id.get().is_some() {
            return;
        }
        let window = self.ctx.borrow().window.clone();
        if let Some(cb) = self.tick.borrow().as_ref() {
            match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => self.raf_id.set(Some(id)),
                Err(e) => log::error!("[pour] requestAnimationFrame error: {:?}", e),
            }
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            _ = self.ctx.borrow().window.cancel_animation_frame(id);
        }
    }

    pub fn mark_dirty(&self) {
        self.ctx.borrow_mut().engine.mark_dirty();
    }

    pub fn on_visibility(&self, hidden: bool) {
        let transition = {
            let mut ctx = self.ctx.borrow_mut();
            let transition = ctx.engine.set_hidden(hidden);
            match transition {
                Transition::Pause => ctx.hidden_since = Some(Instant::now()),
                Transition::Resume => {
                    if let Some(since) = ctx.hidden_since.take() {
                        log::debug!(
                            "[pour] resuming after {:.1}s hidden",
                            since.elapsed().as_secs_f32()
                        );
                    }
                }
                Transition::Unchanged => {}
            }
            transition
        };
        match transition {
            Transition::Pause => self.cancel(),
            Transition::Resume => self.schedule(),
            Transition::Unchanged => {}
        }
    }
}
