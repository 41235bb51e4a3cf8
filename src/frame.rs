use crate::dom;
use crate::input;
use crate::render::Targets;
use balls_core::{AnimationMode, Animator, FrameRate, Pacing, RenderSink, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

enum Pending {
    Animation(i32),
    Timeout(i32),
}

/// Everything a scheduled frame touches.
pub struct FrameLoop {
    pub animator: Animator,
    pub targets: Targets,
    pending: Option<Pending>,
}

impl FrameLoop {
    pub fn new(animator: Animator, targets: Targets) -> Self {
        Self {
            animator,
            targets,
            pending: None,
        }
    }

    fn run_frame(&mut self, now_ms: f64) {
        let window = dom::window_metrics();
        self.animator.frame(now_ms, window, Some(&mut self.targets));
    }

    fn restart(&mut self) {
        let window = dom::window_metrics();
        self.animator.start(window, Some(&mut self.targets));
    }

    /// Resize the canvas, recenter both simulations and repaint without waiting for a tick.
    pub fn resize(&mut self, viewport: Viewport) {
        self.targets.resize(viewport);
        self.animator.resize(viewport);
        if self.animator.mode() == AnimationMode::Field {
            self.targets.clear();
            self.animator.field().draw(&mut self.targets);
        }
    }
}

struct Callbacks {
    animation: Closure<dyn FnMut(f64)>,
    timeout: Closure<dyn FnMut()>,
}

/// Shared handle that owns the loop state and its two JS callbacks.
///
/// At most one callback is outstanding at a time; every mode or rate change
/// cancels it first so two loops never run side by side.
#[derive(Clone)]
pub struct LoopHandle {
    state: Rc<RefCell<FrameLoop>>,
    callbacks: Rc<RefCell<Option<Callbacks>>>,
}

impl LoopHandle {
    pub fn new(frame_loop: FrameLoop) -> Self {
        let handle = Self {
            state: Rc::new(RefCell::new(frame_loop)),
            callbacks: Rc::new(RefCell::new(None)),
        };
        let on_animation = handle.clone();
        let animation = Closure::wrap(
            Box::new(move |ts: f64| on_animation.on_frame(ts)) as Box<dyn FnMut(f64)>
        );
        let on_timeout = handle.clone();
        let timeout =
            Closure::wrap(Box::new(move || on_timeout.on_frame(dom::now_ms())) as Box<dyn FnMut()>);
        *handle.callbacks.borrow_mut() = Some(Callbacks { animation, timeout });
        handle
    }

    pub fn start(&self) {
        self.cancel();
        self.state.borrow_mut().restart();
        self.schedule();
    }

    pub fn set_frame_rate(&self, rate: FrameRate) {
        self.cancel();
        {
            let mut st = self.state.borrow_mut();
            let window = dom::window_metrics();
            let FrameLoop {
                animator, targets, ..
            } = &mut *st;
            animator.set_frame_rate(rate, window, Some(targets));
        }
        self.schedule();
    }

    pub fn set_mode(&self, mode: AnimationMode) {
        self.cancel();
        {
            let mut st = self.state.borrow_mut();
            let window = dom::window_metrics();
            let FrameLoop {
                animator, targets, ..
            } = &mut *st;
            if animator.set_mode(mode, window, Some(targets)) && mode == AnimationMode::Legacy {
                targets.clear();
            }
        }
        self.schedule();
    }

    pub fn resize(&self, viewport: Viewport) {
        self.state.borrow_mut().resize(viewport);
    }

    pub fn pointer_moved(&self, x: f32, y: f32) {
        self.state.borrow_mut().animator.pointer_moved(x, y);
    }

    fn on_frame(&self, now_ms: f64) {
        {
            let mut st = self.state.borrow_mut();
            st.pending = None;
            if !st.animator.is_running() {
                return;
            }
            st.run_frame(now_ms);
        }
        self.schedule();
    }

    fn schedule(&self) {
        let Some(window) = web::window() else {
            return;
        };
        let callbacks = self.callbacks.borrow();
        let Some(cbs) = callbacks.as_ref() else {
            return;
        };
        let mut st = self.state.borrow_mut();
        if st.pending.is_some() || !st.animator.is_running() {
            return;
        }
        st.pending = match st.animator.pacing() {
            Pacing::DisplaySync => window
                .request_animation_frame(cbs.animation.as_ref().unchecked_ref())
                .ok()
                .map(Pending::Animation),
            Pacing::Fixed(ms) => window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    cbs.timeout.as_ref().unchecked_ref(),
                    input::timeout_delay_ms(ms),
                )
                .ok()
                .map(Pending::Timeout),
        };
        if st.pending.is_none() {
            log::error!("[frame] failed to schedule the next frame");
        }
    }

    fn cancel(&self) {
        let Some(pending) = self.state.borrow_mut().pending.take() else {
            return;
        };
        let Some(window) = web::window() else {
            return;
        };
        match pending {
            Pending::Animation(id) => {
                _ = window.cancel_animation_frame(id);
            }
            Pending::Timeout(id) => window.clear_timeout_with_handle(id),
        }
    }
}
