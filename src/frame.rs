use crate::core::reveal::ViewReveal;
use crate::core::{Camera, HeroDriver, HeroVariant, ModelPlacement, Orbit};
use crate::dom;
use crate::events::{ListenerGuard, ScrollState};
use crate::hero;
use crate::page::{HeroElements, RevealTarget};
use crate::render;
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub driver: HeroDriver,
    pub variant: HeroVariant,
    pub captions: Vec<String>,
    pub scroll: Rc<RefCell<ScrollState>>,

    pub hero: HeroElements,
    pub intro: ViewReveal,
    pub reveals: Vec<RevealTarget>,

    pub gpu: Option<render::GpuState<'a>>,
    pub orbit: Option<Rc<RefCell<Orbit>>>,
    pub base_eye: Vec3,

    pub started: Instant,
    /// Held only so the listeners stay attached for the page's lifetime.
    pub listeners: Vec<ListenerGuard>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = self.started.elapsed().as_secs_f64();
        let scroll = *self.scroll.borrow();

        let frame = self.driver.update(scroll.progress, now);
        hero::apply_frame(
            &self.hero,
            &frame,
            self.variant,
            &self.captions,
            self.intro.sample(now),
        );

        self.update_reveals(scroll.viewport_height, now);

        if self.variant != HeroVariant::Canvas {
            return;
        }
        if let Some(g) = &mut self.gpu {
            if let Some(orbit) = &self.orbit {
                let eye = orbit.borrow().eye(self.base_eye, g.camera().target);
                g.set_camera_eye(eye);
            }
            let w = self.hero.canvas.width();
            let h = self.hero.canvas.height();
            g.resize_if_needed(w, h);
            match g.render(&frame.pose) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[gpu] surface lost; reconfiguring");
                    g.reconfigure();
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }

    fn update_reveals(&mut self, viewport_height: f32, now: f64) {
        // finished reveals are left at their final style and dropped
        self.reveals.retain_mut(|target| {
            let element: &web::Element = &target.element;
            target
                .reveal
                .observe(dom::element_box(element), viewport_height, now);
            if target.reveal.is_triggered() {
                hero::apply_reveal(&target.element, target.reveal.sample(now));
            }
            !target.reveal.is_finished(now)
        });
    }
}

/// Fall back to the CSS hero; used when WebGPU is unavailable.
pub fn degrade_to_css(ctx: &mut FrameContext<'_>) {
    ctx.variant = HeroVariant::Css;
    ctx.gpu = None;
    hero::show_variant(&ctx.hero, HeroVariant::Css);
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    camera: Camera,
    placement: ModelPlacement,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, camera, placement).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
