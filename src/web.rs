//! Browser host: binds a driver to a `<canvas>` and its container element.
//!
//! A [`Mount`] owns everything it registers with the page. Dropping it
//! cancels the pending animation frame and removes every listener, so a
//! component that unmounts leaves nothing behind.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, HtmlCanvasElement, HtmlElement, MouseEvent, Window};
use web_time::Instant;

use crate::driver::{AnimationDriver, Scene};
use crate::error::TidelightError;
use crate::input::{InputEvent, MouseButton};
use crate::options::Options;
use crate::particles::ParticleScene;
use crate::surface::{Canvas2dSurface, Surface, SurfaceSize};
use crate::waves::WaveScene;

type SharedDriver<C> = Rc<RefCell<AnimationDriver<Canvas2dSurface, C>>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Install the panic hook and route `log` output to the browser console.
/// Safe to call more than once.
#[wasm_bindgen(js_name = installLogging)]
pub fn install_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// A DOM event listener that is removed when dropped.
struct EventSubscription {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    fn listen(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, TidelightError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(
                kind,
                callback.as_ref().unchecked_ref(),
            )
            .map_err(|e| host_error(&format!("listen for {kind}"), &e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.kind,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

fn host_error(what: &str, err: &JsValue) -> TidelightError {
    TidelightError::Host(format!("{what}: {err:?}"))
}

/// Container size in layout pixels.
fn container_size(container: &HtmlElement) -> SurfaceSize {
    SurfaceSize::from_layout(
        f64::from(container.client_width()),
        f64::from(container.client_height()),
    )
}

/// Pointer position relative to the container's top-left corner.
fn local_position(container: &HtmlElement, event: &MouseEvent) -> (f32, f32) {
    let rect = container.get_bounding_client_rect();
    (
        (f64::from(event.client_x()) - rect.left()) as f32,
        (f64::from(event.client_y()) - rect.top()) as f32,
    )
}

/// Deliver `event` unless the driver is mid-tick.
fn forward<C: Scene>(driver: &SharedDriver<C>, event: InputEvent) {
    if let Ok(mut driver) = driver.try_borrow_mut() {
        driver.handle_event(event);
    }
}

/// One animation bound to one canvas. Dropping it tears everything down.
pub struct Mount<C: Scene + 'static> {
    driver: SharedDriver<C>,
    window: Window,
    frame: FrameCallback,
    frame_id: Rc<Cell<Option<i32>>>,
    subscriptions: Vec<EventSubscription>,
}

impl<C: Scene + 'static> Mount<C> {
    /// Size `canvas` to `container`, mount `scene` on it, subscribe to
    /// pointer and resize events and start the frame loop.
    ///
    /// A canvas that refuses a 2D context still mounts, with every tick
    /// disabled.
    ///
    /// # Errors
    ///
    /// Returns [`TidelightError::Host`] when there is no window or a
    /// listener or animation frame cannot be registered.
    pub fn new(
        canvas: &HtmlCanvasElement,
        container: &HtmlElement,
        scene: C,
        options: &Options,
    ) -> Result<Self, TidelightError> {
        let window = web_sys::window()
            .ok_or_else(|| TidelightError::Host("no window".to_owned()))?;

        let size = container_size(container);
        let surface = Canvas2dSurface::from_canvas(canvas.clone()).map(|mut s| {
            s.resize(size);
            s
        });
        let mut driver = AnimationDriver::new(scene, &options.driver);
        driver.mount(surface);
        let driver = Rc::new(RefCell::new(driver));

        let subscriptions = Self::subscribe(&window, container, &driver)?;
        let mut mount = Self {
            driver,
            window,
            frame: Rc::new(RefCell::new(None)),
            frame_id: Rc::new(Cell::new(None)),
            subscriptions,
        };
        mount.start()?;
        Ok(mount)
    }

    fn subscribe(
        window: &Window,
        container: &HtmlElement,
        driver: &SharedDriver<C>,
    ) -> Result<Vec<EventSubscription>, TidelightError> {
        let target: &EventTarget = container.as_ref();
        let mut subs = Vec::with_capacity(5);

        let (d, el) = (Rc::clone(driver), container.clone());
        subs.push(EventSubscription::listen(target, "mousemove", move |e| {
            if let Some(e) = e.dyn_ref::<MouseEvent>() {
                let (x, y) = local_position(&el, e);
                forward(&d, InputEvent::PointerMoved { x, y });
            }
        })?);

        let d = Rc::clone(driver);
        subs.push(EventSubscription::listen(target, "mouseenter", move |_| {
            forward(&d, InputEvent::PointerEntered);
        })?);

        let d = Rc::clone(driver);
        subs.push(EventSubscription::listen(target, "mouseleave", move |_| {
            forward(&d, InputEvent::PointerLeft);
        })?);

        let (d, el) = (Rc::clone(driver), container.clone());
        subs.push(EventSubscription::listen(target, "mousedown", move |e| {
            if let Some(e) = e.dyn_ref::<MouseEvent>() {
                let (x, y) = local_position(&el, e);
                let button = MouseButton::from_dom(e.button());
                forward(&d, InputEvent::PointerPressed { button, x, y });
            }
        })?);

        let (d, el) = (Rc::clone(driver), container.clone());
        subs.push(EventSubscription::listen(window.as_ref(), "resize", move |_| {
            let size = container_size(&el);
            forward(
                &d,
                InputEvent::Resized {
                    width: f64::from(size.width()),
                    height: f64::from(size.height()),
                },
            );
        })?);

        Ok(subs)
    }

    /// Register the self-rescheduling frame callback.
    fn start(&mut self) -> Result<(), TidelightError> {
        let driver = Rc::clone(&self.driver);
        let frame = Rc::clone(&self.frame);
        let frame_id = Rc::clone(&self.frame_id);
        let window = self.window.clone();

        let callback = Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
            frame_id.set(None);
            // A tick already in progress means this one is skipped.
            if let Ok(mut driver) = driver.try_borrow_mut() {
                let _ = driver.tick(Instant::now());
            }
            if let Some(cb) = frame.borrow().as_ref() {
                if let Ok(id) =
                    window.request_animation_frame(cb.as_ref().unchecked_ref())
                {
                    frame_id.set(Some(id));
                }
            }
        });

        let id = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| host_error("request animation frame", &e))?;
        self.frame_id.set(Some(id));
        *self.frame.borrow_mut() = Some(callback);
        Ok(())
    }

    /// Stop the loop and release every subscription. Idempotent.
    pub fn teardown(&mut self) {
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Dropping the callback breaks the callback -> holder cycle.
        drop(self.frame.borrow_mut().take());
        self.subscriptions.clear();
        if let Ok(mut driver) = self.driver.try_borrow_mut() {
            driver.teardown();
        }
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.driver.try_borrow().map_or(0.0, |d| d.fps())
    }
}

impl<C: Scene + 'static> Drop for Mount<C> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn parse_options(toml: Option<String>) -> Result<Options, JsValue> {
    toml.map_or_else(
        || Ok(Options::default()),
        |text| {
            Options::from_toml(&text).map_err(|e| JsValue::from_str(&e.to_string()))
        },
    )
}

/// Hero wave animation, exported to JavaScript.
#[wasm_bindgen]
pub struct WaveAnimation {
    mount: Mount<WaveScene>,
}

#[wasm_bindgen]
impl WaveAnimation {
    /// Mount the wave scene. `options` is optional TOML text.
    ///
    /// # Errors
    ///
    /// Rejects with a message on bad options or host failure.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: &HtmlCanvasElement,
        container: &HtmlElement,
        options: Option<String>,
    ) -> Result<WaveAnimation, JsValue> {
        let options = parse_options(options)?;
        let scene = WaveScene::from_options(&options);
        Mount::new(canvas, container, scene, &options)
            .map(|mount| Self { mount })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.mount.fps()
    }

    /// Stop drawing and release every listener.
    pub fn teardown(&mut self) {
        self.mount.teardown();
    }
}

/// Background particle animation, exported to JavaScript.
#[wasm_bindgen]
pub struct ParticleAnimation {
    mount: Mount<ParticleScene>,
}

#[wasm_bindgen]
impl ParticleAnimation {
    /// Mount the particle scene. `options` is optional TOML text.
    ///
    /// # Errors
    ///
    /// Rejects with a message on bad options or host failure.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: &HtmlCanvasElement,
        container: &HtmlElement,
        options: Option<String>,
    ) -> Result<ParticleAnimation, JsValue> {
        let options = parse_options(options)?;
        let scene = ParticleScene::from_options(&options);
        Mount::new(canvas, container, scene, &options)
            .map(|mount| Self { mount })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.mount.fps()
    }

    /// Stop drawing and release every listener.
    pub fn teardown(&mut self) {
        self.mount.teardown();
    }
}
