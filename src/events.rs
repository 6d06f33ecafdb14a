use crate::core::{scroll_progress, Orbit, ProgressFormula};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that is removed again when the guard is dropped.
pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerGuard {
    pub fn listen(
        target: &web::EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(dom::js_err)?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        log::debug!("[events] detached {}", self.event);
    }
}

/// Latest scroll measurements, written by listeners and read each frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollState {
    pub progress: f32,
    pub viewport_height: f32,
}

/// Recompute hero progress from the current layout.
pub fn measure(hero: &web::Element, formula: ProgressFormula, state: &mut ScrollState) {
    let viewport_height = dom::viewport_height();
    state.viewport_height = viewport_height;
    state.progress = scroll_progress(formula, dom::element_box(hero), viewport_height);
}

/// Track hero progress on scroll and resize; measures once immediately.
pub fn wire_scroll_tracking(
    hero: web::Element,
    formula: ProgressFormula,
    state: Rc<RefCell<ScrollState>>,
) -> anyhow::Result<Vec<ListenerGuard>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    measure(&hero, formula, &mut state.borrow_mut());

    let mut guards = Vec::with_capacity(2);
    for event in ["scroll", "resize"] {
        let hero = hero.clone();
        let state = state.clone();
        guards.push(ListenerGuard::listen(&window, event, true, move |_| {
            measure(&hero, formula, &mut state.borrow_mut());
        })?);
    }
    Ok(guards)
}

/// Keep the canvas backing store in step with its CSS size.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) -> anyhow::Result<ListenerGuard> {
    dom::sync_canvas_backing_size(canvas);
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let canvas = canvas.clone();
    ListenerGuard::listen(&window, "resize", true, move |_| {
        dom::sync_canvas_backing_size(&canvas);
    })
}

/// Pointer drags on the canvas orbit the camera.
pub fn wire_orbit(
    canvas: &web::HtmlCanvasElement,
    orbit: Rc<RefCell<Orbit>>,
) -> anyhow::Result<Vec<ListenerGuard>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let mut guards = Vec::with_capacity(3);

    let orbit_down = orbit.clone();
    let canvas_down = canvas.clone();
    guards.push(ListenerGuard::listen(canvas, "pointerdown", false, move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            orbit_down
                .borrow_mut()
                .begin_drag(ev.client_x() as f32, ev.client_y() as f32);
            _ = canvas_down.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }
    })?);

    let orbit_move = orbit.clone();
    guards.push(ListenerGuard::listen(&window, "pointermove", true, move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            orbit_move
                .borrow_mut()
                .drag_to(ev.client_x() as f32, ev.client_y() as f32);
        }
    })?);

    guards.push(ListenerGuard::listen(&window, "pointerup", true, move |_| {
        orbit.borrow_mut().end_drag();
    })?);

    log::info!("[events] orbit controls enabled");
    Ok(guards)
}

/// Hero nav buttons scroll smoothly to their section.
pub fn wire_nav_button(
    button: &web::HtmlElement,
    section_id: String,
) -> anyhow::Result<ListenerGuard> {
    ListenerGuard::listen(button, "click", false, move |_| {
        if let Some(section) =
            dom::window_document().and_then(|d| d.get_element_by_id(&section_id))
        {
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    })
}
